//! Output path derivation for incoming files.
//!
//! The resolver sanitizes a raw filename through the configured rename
//! rules, tags it with the marker token, extracts the season/episode
//! markers, and derives the library directory the output belongs in.

mod config;
mod error;
mod path_resolver;
mod rules;
mod types;

pub use config::LibraryConfig;
pub use error::ResolverError;
pub use path_resolver::PathResolver;
pub use rules::{default_rename_rules, RenameRule};
pub use types::{EpisodeKey, OutputTarget};
