use approx::assert_abs_diff_eq;

use circle_fit::{fit_circle, FitReport, FitResult, FittedCircle, LengthUnit, Overlay, Point2d, Viewport};

// ── Helper Functions ─────────────────────────────────────────────────────

fn pts(coords: &[(f64, f64)]) -> Vec<Point2d> {
    coords.iter().copied().map(Point2d::from).collect()
}

fn expect_fitted(result: FitResult) -> FittedCircle {
    result
        .into_circle()
        .unwrap_or_else(|| panic!("expected Fitted, got Unfit"))
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[test]
fn unit_circle_cardinal_points() {
    let c = expect_fitted(fit_circle(&pts(&[(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)])));
    assert_abs_diff_eq!(c.center.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.center.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.radius, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.rmse, 0.0, epsilon = 1e-9);
}

#[test]
fn collinear_points_are_unfit() {
    assert_eq!(fit_circle(&pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])), FitResult::Unfit);
}

#[test]
fn two_points_are_unfit() {
    assert_eq!(fit_circle(&pts(&[(0.0, 0.0), (1.0, 0.0)])), FitResult::Unfit);
}

#[test]
fn noisy_unit_circle() {
    let wobble = [0.02, -0.015, 0.01, -0.02, 0.015, -0.01, 0.018, -0.012];
    let points: Vec<Point2d> = wobble
        .iter()
        .enumerate()
        .map(|(i, dr)| {
            let t = i as f64 * std::f64::consts::FRAC_PI_4;
            Point2d::new((1.0 + dr) * t.cos(), (1.0 + dr) * t.sin())
        })
        .collect();

    let c = expect_fitted(fit_circle(&points));
    assert!((c.radius - 1.0).abs() < 0.05, "radius {} too far from 1", c.radius);
    assert!(c.rmse > 0.0, "noisy data should leave a residual");
    assert!(c.rmse < 0.1, "rmse {} too large", c.rmse);
}

#[test]
fn exact_circle_with_offset_center() {
    let (cx, cy, r) = (-12.5, 40.25, 7.75);
    let points: Vec<Point2d> = [0.3, 1.1, 2.0, 2.9, 4.4, 5.5]
        .iter()
        .map(|t: &f64| Point2d::new(cx + r * t.cos(), cy + r * t.sin()))
        .collect();

    let c = expect_fitted(fit_circle(&points));
    assert_abs_diff_eq!(c.center.x, cx, epsilon = 1e-9);
    assert_abs_diff_eq!(c.center.y, cy, epsilon = 1e-9);
    assert_abs_diff_eq!(c.radius, r, epsilon = 1e-9);
    assert_abs_diff_eq!(c.diameter(), 2.0 * r, epsilon = 1e-9);
    assert!(c.rmse < 1e-9);
}

#[test]
fn fit_to_report_and_overlay() {
    let points = pts(&[
        (1.0, 0.0),
        (0.0, 1.0),
        (-1.0, 0.0),
        (0.0, -1.0),
        (0.707, 0.707),
        (-0.707, 0.707),
        (-0.707, -0.707),
        (0.707, -0.707),
        (0.9, 0.2),
        (0.2, 0.95),
        (-0.3, -0.95),
    ]);
    let result = fit_circle(&points);
    let c = expect_fitted(result);
    assert!((c.radius - 1.0).abs() < 0.05);

    let report = FitReport::new(&result, points.len(), LengthUnit::Millimeter);
    assert_eq!(report.point_count, 11);
    assert!(report.to_string().contains("Points:          11"));

    let vp = Viewport::fit(&points, &result, 800.0, 600.0).expect("viewport");
    let overlay = Overlay::build(&points, &result, &vp);
    assert_eq!(overlay.points.len(), 11);
    assert!(overlay.circle.is_some());
    for (x, y) in &overlay.points {
        assert!((0.0..=800.0).contains(x));
        assert!((0.0..=600.0).contains(y));
    }
}

#[test]
fn unfit_report_and_overlay() {
    let points = pts(&[(0.0, 0.0), (1.0, 0.0)]);
    let result = fit_circle(&points);
    let report = FitReport::new(&result, points.len(), LengthUnit::Inch);
    assert!(!report.is_fitted());

    let vp = Viewport::fit(&points, &result, 100.0, 100.0).expect("points alone still frame");
    assert!(Overlay::build(&points, &result, &vp).circle.is_none());
}

#[test]
fn fit_is_thread_safe() {
    let points = std::sync::Arc::new(pts(&[(3.0, 0.0), (0.0, 3.0), (-3.0, 0.0), (0.0, -3.0)]));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let points = points.clone();
            std::thread::spawn(move || fit_circle(&points))
        })
        .collect();
    for handle in handles {
        let c = expect_fitted(handle.join().unwrap());
        assert_abs_diff_eq!(c.radius, 3.0, epsilon = 1e-9);
    }
}
