//! Domain constants for the Thrift IDL toolchain.

/// The canonical file extension for Thrift IDL source files.
pub const THRIFT_EXT: &str = "thrift";
