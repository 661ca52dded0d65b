//! Ordered, single-concurrency conversion queue.
//!
//! Discovered files are pushed through a cheaply cloneable [`QueueHandle`]
//! into an unbounded channel consumed by exactly one [`QueueRunner`] task.
//! That single consumer is what guarantees FIFO start order and at most one
//! conversion in flight; a failing item is logged and the loop moves on to
//! the next one.

mod handle;
mod runner;
mod traits;

pub use handle::QueueHandle;
pub use runner::{create_queue, QueueRunner};
pub use traits::FileProcessor;
