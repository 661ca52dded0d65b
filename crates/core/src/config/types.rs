use serde::{Deserialize, Serialize};

use crate::converter::TranscoderConfig;
use crate::monitor::WatchConfig;
use crate::reconciler::RetryPolicy;
use crate::resolver::LibraryConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub watch: WatchConfig,
    pub library: LibraryConfig,
    #[serde(default)]
    pub transcoder: TranscoderConfig,
    #[serde(default)]
    pub retry: RetryPolicy,
}
