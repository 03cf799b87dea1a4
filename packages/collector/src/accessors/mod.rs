//! Content accessor implementations.
//!
//! # Available Accessors
//!
//! - `WebPageAccessor` - Fetches a page over HTTP and extracts body text
//! - `FileAccessor` - Reads a local file
//! - `MockAccessor` - For testing

mod file;
mod html;
mod mock;
mod web;

pub use file::FileAccessor;
pub use mock::MockAccessor;
pub use web::{allowed_host, WebPageAccessor};

// Re-export from traits for convenience
pub use crate::traits::accessor::ContentAccessor;
