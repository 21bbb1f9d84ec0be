// ==========================================
// 制造驾驶舱 - 导出层
// ==========================================
// 职责: CSV 生成、数据 URI 编码、触发下载
// 副作用: 仅通过 DownloadSink 产生
// ==========================================

pub mod csv_export;
pub mod data_uri;
pub mod error;
pub mod sink;

pub use csv_export::{export_to_csv, inventory_rows, to_csv_string};
pub use data_uri::{csv_data_uri, encode_uri, parse_data_uri, CSV_DATA_URI_PREFIX};
pub use error::{ExportError, ExportResult};
pub use sink::{DownloadRequest, DownloadSink, FileDownloadSink, MemoryDownloadSink};
