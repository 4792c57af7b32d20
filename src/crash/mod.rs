//! 崩溃上报模块
//!
//! 接收 GET/POST 上报的 exception 参数，附加接收时间后写入存储

mod error;
mod handlers;
pub mod model;
mod router;
pub mod store;
mod types;

pub use router::build_app;
pub use store::{RecordStore, SqliteRecordStore};
