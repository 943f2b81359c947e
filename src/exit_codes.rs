//! Exit code constants for the siteutils CLI.
//!
//! - 0: Success
//! - 1: User error (bad path arguments, empty alt text, missing config)
//! - 2: I/O failure (cannot open/read/write a file)
//! - 3: Git operation failure
//! - 4: Edge-config API failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, empty alt text, or missing environment config.
pub const USER_ERROR: i32 = 1;

/// I/O failure: a file could not be opened, read, or written.
pub const IO_FAILURE: i32 = 2;

/// Git operation failure: commit, push, merge, or branch switch errors.
pub const GIT_FAILURE: i32 = 3;

/// Edge-config API failure: the remote endpoint rejected or dropped a request.
pub const API_FAILURE: i32 = 4;
