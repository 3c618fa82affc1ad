//! Counts line terminators in files, either through buffered reads or
//! through a [`mapping::MappedFile`], and reports how long it took.

pub mod config;
pub mod count;
pub mod errors;
pub mod run;

pub use config::{Config, Mode};
pub use count::{Report, count, count_buffered, count_mapped};
pub use errors::CountError;
pub use run::{Summary, run};
