//! Output management for generated units.
//!
//! - [`ImportCollector`] - Import tracking and deduplication

mod imports;

pub use imports::ImportCollector;
