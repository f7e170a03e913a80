/// Filesystem adapters for file I/O operations
mod report_writer;
mod sbom_reader;

pub use report_writer::StdoutPresenter;
pub use sbom_reader::FileSystemReader;
