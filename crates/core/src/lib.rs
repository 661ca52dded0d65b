pub mod config;
pub mod converter;
pub mod monitor;
pub mod queue;
pub mod reconciler;
pub mod resolver;
pub mod testing;

pub use config::{load_config, load_config_from_str, validate_config, Config, ConfigError};
pub use converter::{
    ConversionOutcome, ConversionWorker, FfmpegTranscoder, TranscodeJob, Transcoder,
    TranscoderConfig, TranscoderError, WorkerError,
};
pub use monitor::{DirectoryMonitor, MonitorError, WatchConfig};
pub use queue::{create_queue, FileProcessor, QueueHandle, QueueRunner};
pub use reconciler::{ReconcilerError, RetryPolicy, StaleFileReconciler};
pub use resolver::{
    EpisodeKey, LibraryConfig, OutputTarget, PathResolver, RenameRule, ResolverError,
};
