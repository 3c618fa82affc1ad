//! Platform backends for establishing and tearing down a read-only view.
//!
//! Exactly one backend is compiled in. Both expose the same pair of
//! functions so `crate::mmap` never branches on the platform at runtime:
//!
//! - `map(file, len)` maps `len` bytes of `file` read-only and shared. Any
//!   handle it creates on the way is closed before it returns; the open
//!   `file` itself stays owned by the caller.
//! - `unmap(ptr, len)` removes a view previously returned by `map`.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::{map, unmap};

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub(crate) use windows::{map, unmap};

#[cfg(not(any(unix, windows)))]
compile_error!("memory mapping is only implemented for unix and windows targets");
