pub mod formatter;

pub use formatter::RowFormatter;
