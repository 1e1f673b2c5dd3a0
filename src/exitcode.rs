//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Addressee unknown (unknown family member)
pub const NOUSER: i32 = 67;

/// Configuration error
pub const CONFIG: i32 = 78;
