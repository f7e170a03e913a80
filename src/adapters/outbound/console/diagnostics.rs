use crate::ports::outbound::DiagnosticsReporter;
use chrono::Utc;
use owo_colors::OwoColorize;

/// StderrDiagnostics adapter for the diagnostics channel
///
/// This adapter implements the DiagnosticsReporter port, writing
/// timestamped, level-tagged lines to stderr so diagnostics never mix
/// with the report on stdout. Trace output is gated by the verbose flag
/// chosen at the entry point; error output always prints.
pub struct StderrDiagnostics {
    verbose: bool,
}

impl StderrDiagnostics {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn timestamp() -> String {
        Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl DiagnosticsReporter for StderrDiagnostics {
    fn trace(&self, message: &str) {
        if !self.verbose {
            return;
        }
        eprintln!("{} {} {}", Self::timestamp(), "TRACE".dimmed(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {} {}", Self::timestamp(), "ERROR".red(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_do_not_panic() {
        let diagnostics = StderrDiagnostics::new(true);
        diagnostics.trace("trace message");
        diagnostics.error("error message");
    }

    #[test]
    fn test_trace_suppressed_when_not_verbose() {
        // Suppression happens before any formatting work; just verify the
        // non-verbose path doesn't panic either.
        let diagnostics = StderrDiagnostics::new(false);
        diagnostics.trace("should not appear");
        diagnostics.error("errors always appear");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = StderrDiagnostics::timestamp();
        assert!(ts.ends_with('Z'));
        assert!(ts.contains('T'));
    }
}
