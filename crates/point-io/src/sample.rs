use circle_fit::Point2d;

const SAMPLE: [(f64, f64); 11] = [
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
];

/// Demonstration points scattered around the unit circle.
pub fn sample_points() -> Vec<Point2d> {
    SAMPLE.iter().copied().map(Point2d::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_near_unit_circle() {
        let points = sample_points();
        assert_eq!(points.len(), 11);
        for p in &points {
            let r = p.distance_to(&Point2d::ORIGIN);
            assert!((r - 1.0).abs() < 0.1, "{:?} is {} from the origin", p, r);
        }
    }
}
