pub mod config;
pub mod report;
pub mod summarizer;

pub use config::SummarizerConfig;
pub use report::{ReportSink, StdoutSink};
pub use summarizer::{RtSummarizer, Summary};
