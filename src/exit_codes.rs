//! Exit code constants for the prompt-designer CLI.
//!
//! - 0: Success
//! - 1: User error (bad args)
//! - 2: Settings document could not be parsed
//! - 3: File read/write failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments such as a malformed `--var` pair.
pub const USER_ERROR: i32 = 1;

/// Settings text is not parseable JSON or is not a JSON object.
pub const DESERIALIZATION_FAILURE: i32 = 2;

/// Reading or writing a file failed.
pub const IO_FAILURE: i32 = 3;
