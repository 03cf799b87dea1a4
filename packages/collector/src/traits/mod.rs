//! Core trait abstractions for the collector.
//!
//! These traits are the two swappable stages of the pipeline: where text
//! comes from, and what happens to it before submission.

pub mod accessor;
pub mod engine;
