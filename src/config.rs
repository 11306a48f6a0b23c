//! Configuration surface for the loader (`SPEC_FULL.md` §1, "Ambient stack" /
//! §4.5). Not present in the distilled spec: the original source hard-codes
//! these as module-level constants, so defaults reproduce its behavior
//! unmodified. `parse()`'s signature is fixed by §6 and takes no options.

use std::path::PathBuf;

/// Controls to the loader beyond "resolve relative to the including file".
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Additional roots to search for an `include` target, tried in order,
    /// after the directory of the including file. Mirrors the `-I` search
    /// path real Thrift compilers accept.
    pub search_roots: Vec<PathBuf>,
    /// When `true`, a duplicate module name aborts the load instead of only
    /// logging a warning. Default `false` reproduces §4.5's unmodified
    /// behavior (overwrite-and-warn).
    pub duplicate_module_is_fatal: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            search_roots: Vec::new(),
            duplicate_module_is_fatal: false,
        }
    }
}
