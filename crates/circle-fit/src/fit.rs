//! Algebraic least-squares circle fit (Kåsa/Pratt linearization on
//! mean-centered coordinates).
//!
//! The fit minimizes Σ(u² + v² − 2·uc·u − 2·vc·v − c)² over the centered
//! samples. Eliminating `c` leaves a 2×2 system in the centered moments,
//! solved here by Cramer's rule. The reported RMSE is geometric: it measures
//! true point-to-circle distance, not the algebraic residual.

use nalgebra::{Matrix2, Vector2};

use crate::config::FitConfig;
use crate::point::Point2d;
use crate::result::{FitResult, FittedCircle};

/// Fit a circle with the default configuration.
pub fn fit_circle(points: &[Point2d]) -> FitResult {
    fit_circle_with(points, &FitConfig::default())
}

/// Fit a circle to `points`.
///
/// Returns [`FitResult::Unfit`] when there are too few points or when the
/// centered normal equations are singular (coincident or collinear samples).
/// Points must be finite; non-finite coordinates give unspecified results.
pub fn fit_circle_with(points: &[Point2d], config: &FitConfig) -> FitResult {
    let n = points.len();
    if n < config.effective_min_points() {
        return FitResult::Unfit;
    }

    let centroid = centroid(points);
    let moments = CenteredMoments::accumulate(points, &centroid);

    let Some(offset) = moments.solve_center_offset(config.singular_det_threshold) else {
        return FitResult::Unfit;
    };

    let radius = ((moments.suu + moments.svv) / n as f64 + offset.norm_squared()).sqrt();
    let center = Point2d::new(offset.x + centroid.x, offset.y + centroid.y);
    let rmse = geometric_rmse(points, &center, radius);

    if !(center.is_finite() && radius.is_finite() && rmse.is_finite()) {
        return FitResult::Unfit;
    }

    FitResult::Fitted(FittedCircle {
        center,
        radius,
        rmse,
    })
}

fn centroid(points: &[Point2d]) -> Point2d {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2d::new(sx / n, sy / n)
}

/// Second and third order moments of the centered samples.
#[derive(Debug, Default, Clone, Copy)]
struct CenteredMoments {
    suu: f64,
    svv: f64,
    suv: f64,
    suuu: f64,
    svvv: f64,
    suvv: f64,
    svuu: f64,
}

impl CenteredMoments {
    fn accumulate(points: &[Point2d], centroid: &Point2d) -> Self {
        points.iter().fold(Self::default(), |mut m, p| {
            let u = p.x - centroid.x;
            let v = p.y - centroid.y;
            let uu = u * u;
            let vv = v * v;
            m.suu += uu;
            m.svv += vv;
            m.suv += u * v;
            m.suuu += uu * u;
            m.svvv += vv * v;
            m.suvv += u * vv;
            m.svuu += v * uu;
            m
        })
    }

    /// Solve the normal equations for the center in the centered frame.
    fn solve_center_offset(&self, singular_det_threshold: f64) -> Option<Vector2<f64>> {
        let a = Matrix2::new(self.suu, self.suv, self.suv, self.svv);
        let b = Vector2::new(
            (self.suuu + self.suvv) / 2.0,
            (self.svvv + self.svuu) / 2.0,
        );

        let det = a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)];
        if det.abs() < singular_det_threshold {
            return None;
        }

        let uc = (b[0] * a[(1, 1)] - b[1] * a[(0, 1)]) / det;
        let vc = (-b[0] * a[(1, 0)] + b[1] * a[(0, 0)]) / det;
        Some(Vector2::new(uc, vc))
    }
}

fn geometric_rmse(points: &[Point2d], center: &Point2d, radius: f64) -> f64 {
    let sum_sq: f64 = points
        .iter()
        .map(|p| {
            let d = p.distance_to(center) - radius;
            d * d
        })
        .sum();
    (sum_sq / points.len() as f64).sqrt()
}
