// Adapters layer: concrete readers and writers behind the domain ports.

pub mod console_writer;
pub mod file_reader;
pub mod file_writer;

pub use console_writer::ConsoleNameWriter;
pub use file_reader::FileNameReader;
pub use file_writer::FileNameWriter;
