use std::path::Path;

use circle_fit::{LengthUnit, Point2d};
use tracing::info;

use crate::errors::PointIoError;

/// File name offered for an export in `unit`, e.g. `points_mm.csv`.
pub fn default_export_file_name(unit: LengthUnit) -> String {
    format!("points_{}.csv", unit.label())
}

/// Serialize points as CSV with an `x_<unit>,y_<unit>` header.
///
/// Values are written at full precision; the unit only labels the columns.
pub fn write_points_csv(points: &[Point2d], unit: LengthUnit) -> Result<String, PointIoError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([format!("x_{}", unit.label()), format!("y_{}", unit.label())])?;
    for p in points {
        writer.write_record([p.x.to_string(), p.y.to_string()])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Write points to `path` as CSV.
pub fn write_points_file(
    path: impl AsRef<Path>,
    points: &[Point2d],
    unit: LengthUnit,
) -> Result<(), PointIoError> {
    let path = path.as_ref();
    let text = write_points_csv(points, unit)?;
    std::fs::write(path, text).map_err(|source| PointIoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), points = points.len(), "exported points");
    Ok(())
}
