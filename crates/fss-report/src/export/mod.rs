//! Delimited export and its destinations.

mod delimited;
mod sink;

pub use delimited::{DELIMITER, to_delimited};
pub use sink::{
    CommandShare, DownloadSink, ExportLocation, ExportOutcome, ExportReceipt, ExportSink,
    ShareHandler, ShareSink, export_file_name, export_rows,
};
