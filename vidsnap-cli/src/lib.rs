// vidsnap-cli/src/lib.rs
//
// Library portion of the vidsnap CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, ForceFormat};
pub use commands::snapshot::{build_config, run_snapshot};
pub use logging::init_logger;
