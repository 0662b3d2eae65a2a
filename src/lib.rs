//! priority-bucket - Priority-grouped container with ordered traversal
//!
//! A [`PriorityBucket`] maps an integer priority to the group of values pushed
//! with it. Traversal visits the highest priority first and keeps push order
//! within each priority.
//!
//! ```
//! use priority_bucket::PriorityBucket;
//!
//! let mut bucket = PriorityBucket::new();
//! bucket.push("c1");
//! bucket.push_with_priority("b1", 5);
//! bucket.push_with_priority("a1", 10);
//! bucket.push("c2");
//!
//! let mut order = Vec::new();
//! bucket.each(|value| order.push(*value));
//! assert_eq!(order, ["a1", "b1", "c1", "c2"]);
//! ```

pub mod bucket;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod telemetry;

pub use bucket::{Iter, Priority, PriorityBucket};
pub use error::{BucketError, BucketResult};
