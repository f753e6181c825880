//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};
pub use list::ListReport;
pub use output::{Report, TerminalOutput};
