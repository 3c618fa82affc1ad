use std::os::windows::io::AsRawHandle;

use windows_sys::Win32::Foundation::{CloseHandle, HANDLE};
use windows_sys::Win32::System::Memory::{
    CreateFileMappingW, FILE_MAP_READ, MEMORY_MAPPED_VIEW_ADDRESS, MapViewOfFile, PAGE_READONLY,
    UnmapViewOfFile,
};

pub(crate) fn map(file: &std::fs::File, len: usize) -> std::io::Result<*const u8> {
    // SAFETY: the file handle is valid for the duration of the call and
    // a zero maximum size means "the whole file".
    let mapping: HANDLE = unsafe {
        CreateFileMappingW(
            file.as_raw_handle() as HANDLE,
            std::ptr::null(),
            PAGE_READONLY,
            0,
            0,
            std::ptr::null(),
        )
    };
    if mapping.is_null() {
        return Err(std::io::Error::last_os_error());
    }

    // SAFETY: `mapping` was just created read-only above.
    let view = unsafe { MapViewOfFile(mapping, FILE_MAP_READ, 0, 0, len) };
    let view_error = view.Value.is_null().then(std::io::Error::last_os_error);

    // The view keeps its own reference to the section; closing the mapping
    // handle does not unmap it.
    // SAFETY: `mapping` is owned here and closed exactly once.
    unsafe { CloseHandle(mapping) };

    match view_error {
        Some(err) => Err(err),
        None => Ok(view.Value.cast_const().cast::<u8>()),
    }
}

pub(crate) fn unmap(ptr: *const u8, _len: usize) -> std::io::Result<()> {
    let view = MEMORY_MAPPED_VIEW_ADDRESS {
        Value: ptr.cast_mut().cast::<core::ffi::c_void>(),
    };
    // SAFETY: `ptr` is the base of a view returned by `map`.
    if unsafe { UnmapViewOfFile(view) } == 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}
