use std::path::Path;

use circle_fit::{LengthUnit, Point2d};
use tracing::{debug, info, instrument};

use crate::errors::PointIoError;

/// Points read from a CSV source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointImport {
    /// Finite (x, y) pairs, in file order.
    pub points: Vec<Point2d>,
    /// Data rows dropped because they had fewer than two numeric columns or
    /// non-finite values.
    pub skipped: usize,
    /// Unit named by an `x_<unit>` header, if the file had one.
    pub unit: Option<LengthUnit>,
}

/// Parse points from CSV text.
///
/// The first two columns are x and y; extra columns are ignored. A first row
/// whose first field starts with `x` is treated as a header. Rows that do not
/// yield two finite numbers are skipped rather than failing the import.
#[instrument(skip_all, fields(bytes = text.len()))]
pub fn read_points_csv(text: &str) -> Result<PointImport, PointIoError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut import = PointImport::default();
    let mut first_row = true;

    for record in reader.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());

        if std::mem::take(&mut first_row) && is_header(&record) {
            import.unit = header_unit(&record);
            debug!(line, unit = ?import.unit, "skipping header row");
            continue;
        }

        match parse_row(&record) {
            Some(point) => import.points.push(point),
            None => {
                import.skipped += 1;
                debug!(line, row = ?record, "skipping row without two finite numbers");
            }
        }
    }

    info!(
        points = import.points.len(),
        skipped = import.skipped,
        "imported points from CSV"
    );
    Ok(import)
}

/// Read and parse a CSV point file.
pub fn read_points_file(path: impl AsRef<Path>) -> Result<PointImport, PointIoError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PointIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_points_csv(&text)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record
        .get(0)
        .is_some_and(|f| f.starts_with('x') || f.starts_with('X'))
}

fn header_unit(record: &csv::StringRecord) -> Option<LengthUnit> {
    let field = record.get(0)?;
    let (_, unit) = field.split_once('_')?;
    unit.parse().ok()
}

fn parse_row(record: &csv::StringRecord) -> Option<Point2d> {
    let x: f64 = record.get(0)?.parse().ok()?;
    let y: f64 = record.get(1)?.parse().ok()?;
    let point = Point2d::new(x, y);
    point.is_finite().then_some(point)
}
