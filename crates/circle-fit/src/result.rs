use serde::{Deserialize, Serialize};

use crate::point::Point2d;

/// A best-fit circle together with its geometric residual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedCircle {
    pub center: Point2d,
    pub radius: f64,
    /// Root mean square of the perpendicular point-to-circle distances.
    pub rmse: f64,
}

impl FittedCircle {
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Signed distance from `point` to the circle: positive outside,
    /// negative inside.
    pub fn residual(&self, point: &Point2d) -> f64 {
        point.distance_to(&self.center) - self.radius
    }

    /// Signed residual of every point, in input order.
    pub fn residuals(&self, points: &[Point2d]) -> Vec<f64> {
        points.iter().map(|p| self.residual(p)).collect()
    }
}

/// Outcome of a circle fit.
///
/// Too few points and degenerate geometry both yield [`FitResult::Unfit`];
/// callers branch on the variant rather than handling an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FitResult {
    Fitted(FittedCircle),
    Unfit,
}

impl FitResult {
    pub fn is_fitted(&self) -> bool {
        matches!(self, FitResult::Fitted(_))
    }

    pub fn circle(&self) -> Option<&FittedCircle> {
        match self {
            FitResult::Fitted(circle) => Some(circle),
            FitResult::Unfit => None,
        }
    }

    pub fn into_circle(self) -> Option<FittedCircle> {
        match self {
            FitResult::Fitted(circle) => Some(circle),
            FitResult::Unfit => None,
        }
    }
}
