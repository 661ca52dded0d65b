//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use telecine_core::testing::MockTranscoder;
//!
//! let transcoder = MockTranscoder::new();
//! transcoder.set_output_content(b"encoded".to_vec()).await;
//!
//! // ... run a ConversionWorker over it ...
//!
//! let jobs = transcoder.recorded_jobs().await;
//! assert_eq!(jobs.len(), 1);
//! ```

mod mock_transcoder;

pub use mock_transcoder::MockTranscoder;
