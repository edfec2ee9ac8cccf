pub mod errors;
pub mod export;
pub mod import;
pub mod sample;

pub use errors::PointIoError;
pub use export::{default_export_file_name, write_points_csv, write_points_file};
pub use import::{read_points_csv, read_points_file, PointImport};
pub use sample::sample_points;
