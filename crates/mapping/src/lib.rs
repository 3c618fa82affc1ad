//! Read-only, whole-file memory mappings.
//!
//! [`MappedFile`] maps a file once, hands out its contents as `&[u8]`, and
//! unmaps it exactly once when released or dropped. The platform backend
//! (`mmap` on unix, file mapping views on windows) is picked at build time.

pub mod errors;
pub mod mmap;
mod sys;

pub use errors::{MapError, MapResult};
pub use mmap::{MappedFile, swap};
