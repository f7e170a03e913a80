/// DiagnosticsReporter port for the secondary diagnostics channel
///
/// This port abstracts diagnostic output (e.g., to stderr) so the use
/// case never touches global logging state; the verbosity decision lives
/// in the adapter that is injected at the entry point. Diagnostics are a
/// secondary channel and never alter the primary report's content or
/// ordering.
pub trait DiagnosticsReporter {
    /// Reports a trace-level message, emitted only in verbose mode
    fn trace(&self, message: &str);

    /// Reports an error-level message, emitted regardless of verbosity
    fn error(&self, message: &str);
}
