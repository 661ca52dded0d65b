//! Conversion flow integration tests.
//!
//! These tests drive the real worker and queue over temp directories with
//! the mock transcoder:
//! - Skip-pattern copy end to end (byte-identical output, source removed)
//! - Stale episode replacement before the new write
//! - FIFO ordering and single-concurrency through the queue
//! - Per-item failure isolation

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;

use telecine_core::{
    create_queue, ConversionWorker, LibraryConfig, PathResolver, RetryPolicy,
    StaleFileReconciler, TranscoderError,
};
use telecine_core::testing::MockTranscoder;

/// Test helper bundling the source/dest dirs and the wired worker.
struct TestHarness {
    source_dir: TempDir,
    dest_dir: TempDir,
    transcoder: MockTranscoder,
    worker: ConversionWorker<MockTranscoder>,
}

impl TestHarness {
    fn new(skip_patterns: Vec<String>) -> Self {
        let source_dir = TempDir::new().expect("Failed to create source dir");
        let dest_dir = TempDir::new().expect("Failed to create dest dir");
        let transcoder = MockTranscoder::new();
        let retry = RetryPolicy::new(3, 1);

        let worker = ConversionWorker::new(
            PathResolver::new(&LibraryConfig::new(dest_dir.path())).expect("valid rules"),
            StaleFileReconciler::new(retry),
            transcoder.clone(),
            skip_patterns,
            retry,
        );

        Self {
            source_dir,
            dest_dir,
            transcoder,
            worker,
        }
    }

    fn create_source_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.source_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to create source file");
        path
    }
}

#[tokio::test]
async fn test_skip_pattern_copy_end_to_end() {
    let harness = TestHarness::new(vec!["1080p".to_string()]);
    let content = b"original video bytes";
    let source = harness.create_source_file("Show.Name.S02E05.1080p.mkv", content);

    let outcome = harness.worker.process(&source).await.unwrap();

    let expected = harness
        .dest_dir
        .path()
        .join("Show Name")
        .join("Season 2")
        .join("Show.Name.S02E05.1080p.processed.mkv");
    assert_eq!(outcome.output_path(), Some(&expected));
    assert_eq!(
        std::fs::read(&expected).unwrap(),
        content,
        "copy must be byte-identical"
    );
    assert!(!source.exists(), "source must be removed after placement");
    assert_eq!(
        harness.transcoder.job_count().await,
        0,
        "skip pattern must bypass the transcoder"
    );
}

#[tokio::test]
async fn test_transcode_end_to_end() {
    let harness = TestHarness::new(vec![]);
    harness
        .transcoder
        .set_output_content(b"encoded output".to_vec())
        .await;
    let source = harness.create_source_file("Show.S01E03.mkv", b"raw");

    harness.worker.process(&source).await.unwrap();

    let expected = harness
        .dest_dir
        .path()
        .join("Show")
        .join("Season 1")
        .join("Show.S01E03.processed.mkv");
    assert_eq!(std::fs::read(&expected).unwrap(), b"encoded output");
    assert!(!source.exists());

    let jobs = harness.transcoder.recorded_jobs().await;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].output_path, expected);
}

#[tokio::test]
async fn test_stale_episode_is_replaced() {
    let harness = TestHarness::new(vec![]);

    let season_dir = harness.dest_dir.path().join("Show").join("Season 1");
    std::fs::create_dir_all(&season_dir).unwrap();
    let stale = season_dir.join("Show.S01E02.draft.mkv");
    std::fs::write(&stale, b"superseded").unwrap();

    let source = harness.create_source_file("Show.S01E02.mkv", b"raw");
    harness.worker.process(&source).await.unwrap();

    assert!(!stale.exists(), "old copy of the episode must be gone");
    assert!(season_dir.join("Show.S01E02.processed.mkv").exists());

    let remaining: Vec<_> = std::fs::read_dir(&season_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(remaining.len(), 1, "at most one file per episode");
}

#[tokio::test]
async fn test_file_without_season_lands_in_root() {
    let harness = TestHarness::new(vec![]);
    let source = harness.create_source_file("Concert.Special.mkv", b"raw");

    harness.worker.process(&source).await.unwrap();

    assert!(harness
        .dest_dir
        .path()
        .join("Concert.Special.processed.mkv")
        .exists());
}

#[tokio::test]
async fn test_failed_item_does_not_block_the_queue() {
    let harness = TestHarness::new(vec![]);
    let source_a = harness.create_source_file("Show.S01E01.mkv", b"a");
    let source_b = harness.create_source_file("Show.S01E02.mkv", b"b");

    harness
        .transcoder
        .set_next_error(TranscoderError::ExitStatus { code: Some(1) })
        .await;

    let TestHarness {
        source_dir: _source_dir,
        dest_dir,
        transcoder,
        worker,
    } = harness;

    let (handle, runner) = create_queue(worker);
    handle.enqueue(source_a.clone());
    handle.enqueue(source_b.clone());
    drop(handle);

    tokio::time::timeout(Duration::from_secs(5), runner.run())
        .await
        .expect("queue should drain");

    // A failed, so its source is untouched and no output was produced.
    assert!(source_a.exists(), "failed item keeps its source");
    let season_dir = dest_dir.path().join("Show").join("Season 1");
    assert!(!season_dir.join("Show.S01E01.processed.mkv").exists());

    // B still went through.
    assert!(!source_b.exists());
    assert!(season_dir.join("Show.S01E02.processed.mkv").exists());
    assert_eq!(transcoder.job_count().await, 2);
}

#[tokio::test]
async fn test_queue_processes_in_enqueue_order() {
    let harness = TestHarness::new(vec![]);
    let sources: Vec<PathBuf> = (1..=4)
        .map(|i| harness.create_source_file(&format!("Show.S01E{:02}.mkv", i), b"raw"))
        .collect();

    let TestHarness {
        source_dir: _source_dir,
        dest_dir: _dest_dir,
        transcoder,
        worker,
    } = harness;

    let (handle, runner) = create_queue(worker);
    for source in &sources {
        handle.enqueue(source.clone());
    }
    drop(handle);

    tokio::time::timeout(Duration::from_secs(5), runner.run())
        .await
        .expect("queue should drain");

    let jobs = transcoder.recorded_jobs().await;
    let inputs: Vec<PathBuf> = jobs.iter().map(|j| j.input_path.clone()).collect();
    assert_eq!(inputs, sources, "items must start in enqueue order");
}

#[tokio::test]
async fn test_vanished_file_is_skipped_by_the_queue() {
    let harness = TestHarness::new(vec![]);
    let ghost = harness.source_dir.path().join("gone.mkv");

    let TestHarness {
        source_dir: _source_dir,
        dest_dir: _dest_dir,
        transcoder,
        worker,
    } = harness;

    let (handle, runner) = create_queue(worker);
    handle.enqueue(ghost);
    drop(handle);

    tokio::time::timeout(Duration::from_secs(5), runner.run())
        .await
        .expect("queue should drain");

    assert_eq!(transcoder.job_count().await, 0);
}
