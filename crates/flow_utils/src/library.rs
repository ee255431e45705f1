//! Best-effort loading of optional dynamic libraries.

use libloading::Library;
use std::ffi::OsStr;
use tracing::debug;

/// Loads the dynamic library at `path`, or returns `None` if it cannot be
/// loaded for any reason.
///
/// Callers use this for optional integrations where a missing library simply
/// disables a feature.
///
/// # Safety
///
/// Loading a library runs its initialisation routines. The caller must trust
/// the library at `path`, exactly as with [`Library::new`].
pub unsafe fn load_optional<P: AsRef<OsStr>>(path: P) -> Option<Library> {
    let path = path.as_ref();
    match Library::new(path) {
        Ok(library) => {
            debug!("📦 Loaded optional library {:?}", path);
            Some(library)
        }
        Err(e) => {
            debug!("Optional library {:?} not available: {}", path, e);
            None
        }
    }
}
