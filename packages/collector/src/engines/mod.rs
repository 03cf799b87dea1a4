//! Text engine implementations.
//!
//! - `PassthroughEngine` - Identity transform (default)
//! - `WhitespaceEngine` - Basic cleaning of extracted page text
//! - `MockEngine` - For testing

mod mock;
mod passthrough;
mod whitespace;

pub use mock::MockEngine;
pub use passthrough::PassthroughEngine;
pub use whitespace::WhitespaceEngine;

pub use crate::traits::engine::TextEngine;
