pub mod bench;
pub mod config;
pub mod convert;
pub mod record;
pub mod tables;

pub use convert::{CONVERTERS, ConvertFn, TIMESTAMP_LEN, TimestampBuf, timestamp_str};
pub use record::{DateTimeRecord, RecordGenerator};
