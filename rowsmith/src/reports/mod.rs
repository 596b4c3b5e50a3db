//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod generate;
mod inspect;
mod output;

pub use generate::{GenerateReport, IndexResult, TableOutcome};
pub use inspect::{InspectReport, InspectedColumn, InspectedTable};
pub use output::{Report, TerminalOutput};
