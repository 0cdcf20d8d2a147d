//! File intake and tabular import/export for TargetDesk.
//!
//! Uploads are checked against an extension allow-list and written under a
//! timestamped name below `uploads/{structures,imports,exports}`. CSV
//! import counts rows (entity mapping is deliberately not implemented);
//! export serializes full entity tables to CSV.

pub mod csv_io;
pub mod upload;

pub use csv_io::{count_csv_rows, ExportKind};
pub use upload::{sanitize_filename, ExchangeError, UploadStore};

pub type Result<T> = std::result::Result<T, ExchangeError>;
