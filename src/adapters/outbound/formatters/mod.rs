/// Formatter adapters for the update report output formats
mod json_formatter;
mod markdown_formatter;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use text_formatter::TextFormatter;
