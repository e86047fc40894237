/// Destination for the status lines a verbose run emits.
///
/// The summarizer writes through this seam instead of printing directly, so
/// callers can capture or silence output. Reporting never fails the
/// computation.
pub trait ReportSink {
    fn line(&mut self, message: &str);
}

/// Default sink; prints each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn line(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Capturing sink for tests and callers that inspect output later.
impl ReportSink for Vec<String> {
    fn line(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}
