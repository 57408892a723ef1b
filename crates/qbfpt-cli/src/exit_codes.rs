//! Unified exit codes for the qbfpt CLI.
//! These codes are part of the public contract of the batch command.

pub const SUCCESS: i32 = 0;
pub const BATCH_FAILED: i32 = 1; // at least one invocation exited non-zero
pub const INTERNAL_ERROR: i32 = 2; // setup failure or invalid configuration
