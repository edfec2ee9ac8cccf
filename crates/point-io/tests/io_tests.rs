use circle_fit::{fit_circle, FitResult, LengthUnit, Point2d};
use point_io::{
    default_export_file_name, read_points_csv, read_points_file, sample_points, write_points_csv,
    write_points_file,
};

fn scratch_path(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("point-io-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn export_then_import_keeps_points_and_unit() {
    let points = sample_points();
    let text = write_points_csv(&points, LengthUnit::Millimeter).unwrap();

    let import = read_points_csv(&text).unwrap();
    assert_eq!(import.points, points);
    assert_eq!(import.skipped, 0);
    assert_eq!(import.unit, Some(LengthUnit::Millimeter));
}

#[test]
fn file_export_and_import() {
    let path = scratch_path(&default_export_file_name(LengthUnit::Inch));
    let points = vec![
        Point2d::new(3.0, 0.0),
        Point2d::new(0.0, 3.0),
        Point2d::new(-3.0, 0.0),
        Point2d::new(0.0, -3.0),
    ];
    write_points_file(&path, &points, LengthUnit::Inch).unwrap();

    let import = read_points_file(&path).unwrap();
    assert_eq!(import.points, points);
    assert_eq!(import.unit, Some(LengthUnit::Inch));

    let FitResult::Fitted(circle) = fit_circle(&import.points) else {
        panic!("expected a fit from imported points");
    };
    assert!((circle.radius - 3.0).abs() < 1e-9);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn imported_rows_feed_the_fit() {
    let text = "x,y\n1,0\n0,1\nnot,a number\n-1,0\n0,-1\n";
    let import = read_points_csv(text).unwrap();
    assert_eq!(import.points.len(), 4);
    assert_eq!(import.skipped, 1);
    assert!(fit_circle(&import.points).is_fitted());
}

#[test]
fn too_few_imported_rows_do_not_fit() {
    let import = read_points_csv("x_in,y_in\n1,1\n2,2\n").unwrap();
    assert_eq!(fit_circle(&import.points), FitResult::Unfit);
}

#[test]
fn sample_points_fit_near_unit_circle() {
    let FitResult::Fitted(circle) = fit_circle(&sample_points()) else {
        panic!("sample points should fit");
    };
    assert!((circle.radius - 1.0).abs() < 0.05);
    assert!(circle.center.distance_to(&Point2d::ORIGIN) < 0.05);
    assert!(circle.rmse > 0.0 && circle.rmse < 0.1);
}
