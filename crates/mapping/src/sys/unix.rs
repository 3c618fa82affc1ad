use std::os::unix::io::AsRawFd;

pub(crate) fn map(file: &std::fs::File, len: usize) -> std::io::Result<*const u8> {
    // SAFETY:
    // - A null hint lets the kernel pick the address
    // - PROT_READ only; nothing in this crate hands out mutable access
    // - The fd may be closed as soon as this returns, the mapping survives it
    let ptr = unsafe {
        libc::mmap(
            std::ptr::null_mut(),
            len,
            libc::PROT_READ,
            libc::MAP_SHARED,
            file.as_raw_fd(),
            0,
        )
    };

    if ptr == libc::MAP_FAILED {
        return Err(std::io::Error::last_os_error());
    }

    Ok(ptr.cast_const().cast::<u8>())
}

pub(crate) fn unmap(ptr: *const u8, len: usize) -> std::io::Result<()> {
    // SAFETY: `ptr` and `len` describe a region returned by `map` that
    // nobody else will unmap.
    let ret = unsafe { libc::munmap(ptr.cast_mut().cast::<libc::c_void>(), len) };
    if ret == -1 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}
