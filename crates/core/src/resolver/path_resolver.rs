//! Path resolver implementation.

use regex_lite::Regex;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use super::config::LibraryConfig;
use super::error::ResolverError;
use super::rules::{apply_rules, compile_rules, CompiledRule};
use super::types::{EpisodeKey, OutputTarget};

/// Derives the library location for a raw source filename.
///
/// Filenames are sanitized through the configured rename rules, tagged with
/// the marker token before their extension, and filed under
/// `<root>/<Show>/Season <N>/` when a season marker is found. Filenames
/// without a season marker land directly under the library root.
pub struct PathResolver {
    dest_root: PathBuf,
    marker: String,
    rules: Vec<CompiledRule>,
    season: Regex,
    episode: Regex,
}

impl PathResolver {
    /// Creates a resolver from the library configuration.
    pub fn new(config: &LibraryConfig) -> Result<Self, ResolverError> {
        Ok(Self {
            dest_root: config.dest_root.clone(),
            marker: config.marker.clone(),
            rules: compile_rules(&config.rename_rules)?,
            season: Regex::new(r"S(\d{2})").expect("season pattern is valid"),
            episode: Regex::new(r"E(\d{2})").expect("episode pattern is valid"),
        })
    }

    /// Applies the rename rules to a raw filename.
    pub fn sanitize(&self, raw: &str) -> String {
        apply_rules(&self.rules, raw)
    }

    /// Inserts the marker token before the final extension segment.
    fn insert_marker(&self, name: &str) -> String {
        match name.rsplit_once('.') {
            Some((stem, extension)) => format!("{}.{}.{}", stem, self.marker, extension),
            None => format!("{}.{}", name, self.marker),
        }
    }

    /// Resolves the output target and episode key for a raw filename,
    /// creating the target directory if it does not exist yet.
    ///
    /// Missing season or episode markers are not errors: without a season
    /// the file goes straight under the library root, and without an
    /// episode marker the whole output filename becomes the stale-matching
    /// token.
    pub async fn resolve(
        &self,
        raw_filename: &str,
    ) -> Result<(OutputTarget, EpisodeKey), ResolverError> {
        let output_name = self.insert_marker(&self.sanitize(raw_filename));

        let season_captures = self.season.captures(&output_name);
        let season = season_captures
            .as_ref()
            .and_then(|captures| captures.get(1))
            .and_then(|digits| digits.as_str().parse::<u32>().ok());

        let directory = match (season, season_captures.as_ref().and_then(|c| c.get(0))) {
            (Some(number), Some(marker)) => {
                let show = output_name[..marker.start()]
                    .trim_end_matches('.')
                    .replace('.', " ");
                self.dest_root
                    .join(show)
                    .join(format!("Season {}", number))
            }
            _ => self.dest_root.clone(),
        };

        fs::create_dir_all(&directory)
            .await
            .map_err(|source| ResolverError::DirectoryCreationFailed {
                path: directory.clone(),
                source,
            })?;

        let token = match self.episode.find(&output_name) {
            Some(marker) => marker.as_str().to_string(),
            None => output_name.clone(),
        };

        let target = OutputTarget {
            path: directory.join(&output_name),
            directory,
        };
        debug!("Resolved {} -> {}", raw_filename, target.path.display());

        Ok((target, EpisodeKey { season, token }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn resolver(root: &std::path::Path) -> PathResolver {
        PathResolver::new(&LibraryConfig::new(root)).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_with_season_marker() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(temp.path());

        let (target, key) = resolver.resolve("Show.Name.S02E05.1080p.mkv").await.unwrap();

        assert_eq!(
            target.directory,
            temp.path().join("Show Name").join("Season 2")
        );
        assert_eq!(
            target.path,
            target.directory.join("Show.Name.S02E05.1080p.processed.mkv")
        );
        assert_eq!(key.season, Some(2));
        assert_eq!(key.token, "E05");
        assert!(target.directory.is_dir());
    }

    #[tokio::test]
    async fn test_season_number_has_no_leading_zero() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(temp.path());

        let (target, key) = resolver.resolve("Show.S09E01.mkv").await.unwrap();
        assert!(target.directory.ends_with("Show/Season 9"));
        assert_eq!(key.season, Some(9));
    }

    #[tokio::test]
    async fn test_resolve_without_season_falls_back_to_root() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(temp.path());

        let (target, key) = resolver.resolve("Some.Movie.mkv").await.unwrap();

        assert_eq!(target.directory, temp.path());
        assert_eq!(target.path, temp.path().join("Some.Movie.processed.mkv"));
        assert_eq!(key.season, None);
    }

    #[tokio::test]
    async fn test_episode_token_falls_back_to_output_name() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(temp.path());

        let (_, key) = resolver.resolve("Some.Movie.mkv").await.unwrap();
        assert_eq!(key.token, "Some.Movie.processed.mkv");
    }

    #[tokio::test]
    async fn test_marker_appended_without_extension() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(temp.path());

        let (target, _) = resolver.resolve("README").await.unwrap();
        assert_eq!(target.path, temp.path().join("README.processed"));
    }

    #[tokio::test]
    async fn test_resolve_twice_tolerates_existing_directory() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(temp.path());

        resolver.resolve("Show.S01E01.mkv").await.unwrap();
        let (target, _) = resolver.resolve("Show.S01E02.mkv").await.unwrap();
        assert!(target.directory.is_dir());
    }

    #[tokio::test]
    async fn test_raw_filename_is_sanitized() {
        let temp = TempDir::new().unwrap();
        let resolver = resolver(temp.path());

        let (target, _) = resolver.resolve("Show Name S01E02 [x265].mkv").await.unwrap();
        assert_eq!(
            target.path.file_name().unwrap().to_str().unwrap(),
            "ShowNameS01E02x265.processed.mkv"
        );
    }
}
