//! External collaborators: bar supply and batch export.

pub mod bar_store;
pub mod export;

pub use bar_store::{BarStore, CsvBarStore, MemoryBarStore};
pub use export::write_csv;
