/// Hidden-file detection.
///
/// Unix-like systems treat a leading `.` as hidden. Windows has a real
/// attribute for it, queried with `GetFileAttributesW`.
use std::path::Path;

/// Signature of a hidden-file predicate. A plain `fn` pointer so it can be
/// handed to the walker's per-directory hook, which must be `'static`.
pub type HiddenPredicate = fn(&Path) -> bool;

/// `true` if the final component starts with a dot.
pub fn is_dot_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Return `true` if `path` is hidden on the current platform.
#[cfg(not(windows))]
pub fn is_hidden(path: &Path) -> bool {
    is_dot_hidden(path)
}

/// Return `true` if `path` carries `FILE_ATTRIBUTE_HIDDEN`.
///
/// An attribute query failure counts as "not hidden" so the entry stays
/// visible.
#[cfg(windows)]
pub fn is_hidden(path: &Path) -> bool {
    use std::os::windows::ffi::OsStrExt;
    use windows::core::PCWSTR;
    use windows::Win32::Storage::FileSystem::{
        GetFileAttributesW, FILE_ATTRIBUTE_HIDDEN, INVALID_FILE_ATTRIBUTES,
    };

    let wide: Vec<u16> = path
        .as_os_str()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect();
    let attrs = unsafe { GetFileAttributesW(PCWSTR(wide.as_ptr())) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return false;
    }
    attrs & FILE_ATTRIBUTE_HIDDEN.0 != 0
}
