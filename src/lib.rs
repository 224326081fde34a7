//! A ranked skip list for sorted-set indexes.
//!
//! This crate provides [`SkipList`], an ordered collection of
//! `(score, value)` pairs where `score` is an `i64` and `value` is a byte
//! string that breaks ties. Besides O(log n) insert, remove and lookup it
//! answers order-statistic queries in O(log n):
//!
//! - [`rank_of`](SkipList::rank_of) - The sorted position of a pair
//! - [`get_by_rank`](SkipList::get_by_rank) - The element at a sorted position
//! - [`range_by_score`](SkipList::range_by_score) - All elements within a score range
//!
//! # Example
//!
//! ```
//! use ranked_skiplist::{SkipList, SkipListConfig};
//!
//! let mut list = SkipList::with_config(SkipListConfig::new(10, 0.3, 2)).unwrap();
//! for score in [12, 13, 14, 15, 11, 16, 17] {
//!     list.insert(score, score.to_string());
//! }
//!
//! assert_eq!(list.len(), 7);
//! assert_eq!(list.head().unwrap().score(), 11);
//! assert_eq!(list.tail().unwrap().score(), 17);
//!
//! // Order-statistic operations (O(log n))
//! assert_eq!(list.rank_of(14, "14"), Some(3));
//! assert_eq!(list.get_by_rank(0).unwrap().value(), b"11");
//!
//! assert!(list.remove(17, "17"));
//! assert_eq!(list.tail().unwrap().score(), 16);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Reproducible** - Tower heights come from a random source seeded per list
//! - **O(log n) rank operations** - Every link stores the distance it covers
//!
//! # Implementation
//!
//! Elements live in an arena and link to each other by index. The bottom level
//! is a doubly linked list of every element; each level above skips over a
//! random subset of the one below. Each forward link carries a span, the
//! number of bottom-level steps it covers, and summing spans on the way down
//! yields an element's rank.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod config;
mod error;
mod raw;

pub mod skiplist;

pub use config::{DEFAULT_MAX_LEVEL, DEFAULT_P, DEFAULT_SEED, SkipListConfig};
pub use error::ConfigError;
pub use skiplist::{Dump, Element, Iter, SkipList};
