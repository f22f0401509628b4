//! Result projection for simulation runs.
//!
//! - [`render`]: fixed per-layout report over a zero skeleton
//! - [`flatten`]: nested result to dotted-path row
//! - [`export`]: semicolon-delimited file, saved or shared

pub mod error;
pub mod export;
pub mod flatten;
pub mod render;
pub mod skeleton;

pub use error::{ExportError, Result};
pub use export::{
    CommandShare, DownloadSink, ExportLocation, ExportOutcome, ExportReceipt, ExportSink,
    ShareHandler, ShareSink, export_file_name, export_rows, to_delimited,
};
pub use flatten::{FlattenedRow, MAX_FLATTEN_DEPTH, flatten, format_fixed};
pub use render::{Report, ReportLine, ReportSection, render};
pub use skeleton::{overlay, skeleton};
