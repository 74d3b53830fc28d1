//! Command implementations for the CLI.

/// Module containing the snapshot run: configuration from flags, dependency
/// checks and delegation to vidsnap-core.
pub mod snapshot;
