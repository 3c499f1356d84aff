//! Worked solutions to a small set of standalone coding exercises. Each
//! exercise lives in its own module and none of them share anything: every
//! solution is a handful of pure functions (or one small data structure)
//! over in-memory input.
//!
//! - [`tree`] decides whether a binary tree satisfies the search-order
//!   invariant: every value in a node's left subtree is at most the node's
//!   value and every value in its right subtree is strictly greater.
//! - [`segment`] computes the minimum Euclidean distance from a 3D point to
//!   a bounded line segment.
//! - [`triangle`] finds, among random points on the plane, the three forming
//!   the smallest triangle by perimeter.
//! - [`runtime`] aggregates a JSON log of operation runtimes: the longest
//!   operation overall and the softwares ranked by total runtime.
//!
//! The drivers under `demos/` print each solution's answer for the fixed
//! inputs the exercise statements ship with; run them with
//! `cargo run --example sorted_tree` and friends.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod runtime;
pub mod segment;
pub mod tree;
pub mod triangle;
