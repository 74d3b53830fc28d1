// ============================================================================
// vidsnap-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the vidsnap binary
//
// vidsnap-core emits all user-facing output through the `log` facade, so the
// logger prints bare messages to stderr. The level follows the flags:
// - --debug: Debug (includes the echoed ffprobe/ffmpeg invocations)
// - --silent: Error (stdout keeps only the produced paths)
// - otherwise: Info
// RUST_LOG, when set, overrides the flag-derived level.

use log::LevelFilter;
use std::io::Write;

/// Level implied by the `--silent` and `--debug` flags. Debug wins so that
/// `--silent --debug` still shows invocations on stderr.
pub fn level_for(silent: bool, debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if silent {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init_logger(silent: bool, debug: bool) {
    let _ = env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_for(silent, debug))
        // ffmpeg-sidecar logs every parsed line at debug level
        .filter_module("ffmpeg_sidecar", LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
