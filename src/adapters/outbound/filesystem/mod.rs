/// Filesystem adapters for file I/O operations
mod catalog_file;
mod file_writer;
mod inventory_reader;

pub use catalog_file::FileCatalogSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use inventory_reader::JsonInventoryReader;
