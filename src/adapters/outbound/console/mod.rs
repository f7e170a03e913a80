/// Console adapters for diagnostics output
mod diagnostics;

pub use diagnostics::StderrDiagnostics;
