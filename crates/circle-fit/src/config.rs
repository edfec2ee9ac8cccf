//! Tunables for the circle fit.

/// A circle is underdetermined by fewer points than this.
pub const MIN_POINTS: usize = 3;

/// Absolute threshold on the determinant of the centered moment matrix.
///
/// Not normalized by the extent of the point cloud: clouds measured in very
/// small units can be rejected as singular, and nearly collinear clouds in
/// very large units can slip past.
pub const SINGULAR_DET_THRESHOLD: f64 = 1e-12;

/// Configuration for [`crate::fit_circle_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig {
    /// Minimum number of points to attempt a fit. Values below
    /// [`MIN_POINTS`] are treated as [`MIN_POINTS`].
    pub min_points: usize,
    /// `|det|` below this marks the normal equations as singular.
    pub singular_det_threshold: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            min_points: MIN_POINTS,
            singular_det_threshold: SINGULAR_DET_THRESHOLD,
        }
    }
}

impl FitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the minimum point count.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Builder: set the singular determinant threshold.
    pub fn with_singular_det_threshold(mut self, threshold: f64) -> Self {
        self.singular_det_threshold = threshold;
        self
    }

    /// The effective minimum point count.
    pub fn effective_min_points(&self) -> usize {
        self.min_points.max(MIN_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FitConfig::default();
        assert_eq!(config.min_points, 3);
        assert_eq!(config.singular_det_threshold, 1e-12);
        assert_eq!(config, FitConfig::new());
    }

    #[test]
    fn test_min_points_clamped() {
        let config = FitConfig::new().with_min_points(1);
        assert_eq!(config.effective_min_points(), 3);

        let config = FitConfig::new().with_min_points(8);
        assert_eq!(config.effective_min_points(), 8);
    }

    #[test]
    fn test_threshold_builder() {
        let config = FitConfig::new().with_singular_det_threshold(1e-20);
        assert_eq!(config.singular_det_threshold, 1e-20);
        assert_eq!(config.min_points, MIN_POINTS);
    }
}
