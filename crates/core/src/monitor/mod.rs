//! Source folder monitoring.
//!
//! Each configured source folder gets an initial scan (recovering files
//! that arrived while the process was down) followed by live filesystem
//! change notifications. Entries still carrying the incomplete-download
//! suffix are ignored; everything else is fed into the conversion queue.

mod config;
mod error;
mod watcher;

pub use config::WatchConfig;
pub use error::MonitorError;
pub use watcher::DirectoryMonitor;
