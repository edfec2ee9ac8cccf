//! Algebraic least-squares circle fitting for planar point clouds.
//!
//! The engine in [`fit`] is a pure function: it borrows a point set, returns a
//! [`FitResult`] and keeps nothing. [`report`] and [`viewport`] turn a result
//! into text and screen-space overlays for display.

pub mod config;
pub mod fit;
pub mod point;
pub mod report;
pub mod result;
pub mod viewport;

pub use config::FitConfig;
pub use fit::{fit_circle, fit_circle_with};
pub use point::Point2d;
pub use report::{format_value, FitReport, LengthUnit, ParseUnitError};
pub use result::{FitResult, FittedCircle};
pub use viewport::{Overlay, ScreenCircle, Viewport};
