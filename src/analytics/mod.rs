pub mod reporter;
pub mod run_summary;

pub use reporter::AnalyticsReporter;
pub use run_summary::{RunSummary, RunSummaryBuilder};
