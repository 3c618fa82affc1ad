/// A read-only view of a whole file, mapped into the address space.
///
/// The mapping is established once by [`MappedFile::open`] and torn down
/// exactly once, either by [`MappedFile::release`] or when the value is
/// dropped. Ownership moves like any other Rust value and is never
/// duplicated: there is no `Clone`.
///
/// An instance that owns nothing (see [`MappedFile::empty`]) has a null
/// [`as_ptr`](MappedFile::as_ptr) and a [`len`](MappedFile::len) of zero.
pub struct MappedFile {
    ptr: *const u8,
    len: usize,
    path: Option<std::path::PathBuf>,
}

// SAFETY: the region is mapped read-only and owned by exactly one instance,
// so sharing `&MappedFile` or moving it across threads cannot race.
unsafe impl Send for MappedFile {}
unsafe impl Sync for MappedFile {}

/*

===============================
===== ESTABLISH & RELEASE =====
===============================

*/

impl MappedFile {
    /// Maps the entire contents of the file at `path`, read-only.
    ///
    /// The file is opened, its size queried, the mapping requested, and then
    /// the file handle is closed. Closing it does not unmap the region.
    ///
    /// Zero-byte files are passed to the OS as-is. Both unix and windows
    /// refuse a zero-length mapping, so they come back as
    /// [`MapError::MapFailed`](crate::errors::MapError::MapFailed).
    ///
    /// # Errors
    ///
    /// - `OpenFailed` if the file cannot be opened for reading.
    /// - `StatFailed` if its size cannot be queried.
    /// - `MapFailed` if the OS refuses the mapping, or the size does not fit
    ///   in the address space.
    ///
    /// Nothing stays open when an error is returned.
    pub fn open(path: impl AsRef<std::path::Path>) -> crate::errors::MapResult<Self> {
        let path = path.as_ref();

        let file = std::fs::File::open(path).map_err(|source| {
            crate::errors::MapError::OpenFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let metadata = file
            .metadata()
            .map_err(|source| crate::errors::MapError::StatFailed {
                path: path.to_path_buf(),
                source,
            })?;

        let len = usize::try_from(metadata.len()).map_err(|_| {
            crate::errors::MapError::MapFailed {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "file is larger than the address space",
                ),
            }
        })?;

        let ptr = crate::sys::map(&file, len).map_err(|source| {
            crate::errors::MapError::MapFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // Only the view outlives this function.
        drop(file);

        log::debug!("mapped {len} bytes of {}", path.display());

        Ok(Self {
            ptr,
            len,
            path: Some(path.to_path_buf()),
        })
    }

    /// An instance that owns no mapping.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            ptr: std::ptr::null(),
            len: 0,
            path: None,
        }
    }

    /// Unmaps the region, if any, and resets `self` to the empty state.
    ///
    /// Calling this on an empty instance does nothing, so it is safe to call
    /// more than once and before drop. An OS error from unmapping is
    /// discarded: there is nothing a caller could do about it.
    pub fn release(&mut self) {
        if self.ptr.is_null() {
            return;
        }

        let ptr = std::mem::replace(&mut self.ptr, std::ptr::null());
        let len = std::mem::take(&mut self.len);
        let path = self.path.take();

        let _ = crate::sys::unmap(ptr, len);

        if let Some(path) = path {
            log::trace!("released mapping of {}", path.display());
        }
    }

    /// Moves the mapping out, leaving `self` empty.
    #[inline]
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::empty())
    }

    /// Exchanges the mappings owned by `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl Drop for MappedFile {
    fn drop(&mut self) {
        self.release();
    }
}

impl Default for MappedFile {
    fn default() -> Self {
        Self::empty()
    }
}

/*

=====================
===== ACCESSORS =====
=====================

*/

impl MappedFile {
    /// Address of the first mapped byte, null when nothing is mapped.
    #[inline]
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    /// Mapped length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The half-open range `[begin, end)` of the mapped bytes.
    ///
    /// Both ends are null for an empty instance.
    #[inline]
    #[must_use]
    pub fn as_ptr_range(&self) -> std::ops::Range<*const u8> {
        self.ptr..self.ptr.wrapping_add(self.len)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }

        // SAFETY:
        // - `ptr..ptr+len` is a live read-only mapping owned by `self`
        // - The borrow keeps `self` from being released or moved meanwhile
        unsafe { std::slice::from_raw_parts(self.ptr, self.len) }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.as_slice().iter()
    }

    /// Path the mapping was established from, `None` when empty.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }
}

impl std::ops::Deref for MappedFile {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for MappedFile {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a MappedFile {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MappedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedFile")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .field("path", &self.path)
            .finish()
    }
}

/// Exchanges the mappings owned by `lhs` and `rhs`.
#[inline]
pub fn swap(lhs: &mut MappedFile, rhs: &mut MappedFile) {
    lhs.swap(rhs);
}
