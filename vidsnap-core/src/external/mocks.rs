// vidsnap-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests, or for downstream tests via the "test-mocks" feature.

use super::{FfmpegProcess, FfmpegSpawner, FfprobeExecutor};
use crate::error::{CoreError, CoreResult};
use crate::media::{ColorSpace, MediaProbe, Resolution};
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::cell::RefCell;
use std::collections::HashMap;
use std::os::unix::process::ExitStatusExt; // For ExitStatus::from_raw
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

/// Mock implementation of FfmpegProcess.
#[derive(Clone)]
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Vec<FfmpegEvent>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in self.events_to_emit.clone() {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

enum MockOutcome {
    Exit { code: i32, create_dummy_output: bool },
    SpawnError(String),
}

/// Represents an expected ffmpeg command call and its mock result.
struct MockFfmpegExpectation {
    arg_pattern: String,
    outcome: MockOutcome,
}

/// Mock implementation of FfmpegSpawner.
///
/// Each spawn consumes the first expectation whose pattern is contained in
/// one of the arguments. Calls that match nothing succeed and create the
/// output file, so tests only need to describe the interesting cases.
#[derive(Clone, Default)]
pub struct MockFfmpegSpawner {
    expectations: Rc<RefCell<Vec<MockFfmpegExpectation>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_success_expectation(&self, arg_pattern: &str, create_dummy_output: bool) {
        self.push(arg_pattern, MockOutcome::Exit { code: 0, create_dummy_output });
    }

    pub fn add_exit_error_expectation(&self, arg_pattern: &str, exit_code: i32) {
        self.push(arg_pattern, MockOutcome::Exit { code: exit_code, create_dummy_output: false });
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, message: &str) {
        self.push(arg_pattern, MockOutcome::SpawnError(message.to_string()));
    }

    fn push(&self, arg_pattern: &str, outcome: MockOutcome) {
        self.expectations.borrow_mut().push(MockFfmpegExpectation {
            arg_pattern: arg_pattern.to_string(),
            outcome,
        });
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }
}

fn create_dummy_file(args: &[String]) {
    let Some(output_path) = args.last().map(PathBuf::from) else {
        log::warn!("MockFfmpegSpawner couldn't find output path in args to create dummy file.");
        return;
    };
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("MockFfmpegSpawner failed to create parent dir {:?}: {}", parent, e);
        }
    }
    if let Err(e) = std::fs::write(&output_path, b"\x89PNG") {
        log::error!("MockFfmpegSpawner failed to create dummy output file {:?}: {}", output_path, e);
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let args: Vec<String> = cmd
            .get_args()
            .map(|s| s.to_string_lossy().into_owned())
            .collect();
        self.received_calls.borrow_mut().push(args.clone());

        let mut expectations = self.expectations.borrow_mut();
        let found_index = expectations
            .iter()
            .position(|exp| args.iter().any(|arg| arg.contains(&exp.arg_pattern)));

        let outcome = match found_index {
            Some(index) => {
                let expectation = expectations.remove(index);
                log::info!(
                    "MockFfmpegSpawner: Matched expectation with pattern '{}'",
                    expectation.arg_pattern
                );
                expectation.outcome
            }
            None => MockOutcome::Exit { code: 0, create_dummy_output: true },
        };

        match outcome {
            MockOutcome::SpawnError(message) => Err(CoreError::CommandStart(
                "ffmpeg (mock)".to_string(),
                std::io::Error::other(message),
            )),
            MockOutcome::Exit { code, create_dummy_output } => {
                if create_dummy_output {
                    create_dummy_file(&args);
                }
                let events = if code == 0 {
                    Vec::new()
                } else {
                    vec![FfmpegEvent::Log(
                        LogLevel::Error,
                        format!("mock decoder failure (exit {code})"),
                    )]
                };
                Ok(MockFfmpegProcess {
                    events_to_emit: events,
                    exit_status: ExitStatus::from_raw(code << 8),
                })
            }
        }
    }
}

/// Mock implementation of FfprobeExecutor.
///
/// Results are keyed by path. `probe_resolution` falls back to
/// `default_resolution` for paths without an explicit entry, which covers
/// freshly written snapshots.
#[derive(Clone, Default)]
pub struct MockFfprobeExecutor {
    media_results: Rc<RefCell<HashMap<PathBuf, MediaProbe>>>,
    color_results: Rc<RefCell<HashMap<PathBuf, ColorSpace>>>,
    resolution_results: Rc<RefCell<HashMap<PathBuf, Resolution>>>,
    default_resolution: Rc<RefCell<Option<Resolution>>>,
    color_probe_calls: Rc<RefCell<usize>>,
    media_probe_calls: Rc<RefCell<usize>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers media info for `input_path`; its resolution also becomes
    /// the default answer for snapshot re-probes.
    pub fn expect_media(&self, input_path: &Path, probe: MediaProbe) {
        self.media_results
            .borrow_mut()
            .insert(input_path.to_path_buf(), probe);
        self.default_resolution.borrow_mut().get_or_insert(probe.resolution);
    }

    pub fn expect_color_space(&self, input_path: &Path, color_space: ColorSpace) {
        self.color_results
            .borrow_mut()
            .insert(input_path.to_path_buf(), color_space);
    }

    pub fn expect_resolution(&self, path: &Path, resolution: Resolution) {
        self.resolution_results
            .borrow_mut()
            .insert(path.to_path_buf(), resolution);
    }

    pub fn color_probe_calls(&self) -> usize {
        *self.color_probe_calls.borrow()
    }

    pub fn media_probe_calls(&self) -> usize {
        *self.media_probe_calls.borrow()
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe_media(&self, input_path: &Path) -> CoreResult<MediaProbe> {
        *self.media_probe_calls.borrow_mut() += 1;
        self.media_results
            .borrow()
            .get(input_path)
            .copied()
            .ok_or_else(|| {
                CoreError::ProbeFailure(format!(
                    "MockFfprobeExecutor: No media expectation set for path {}",
                    input_path.display()
                ))
            })
    }

    fn probe_color_space(&self, input_path: &Path) -> CoreResult<ColorSpace> {
        *self.color_probe_calls.borrow_mut() += 1;
        Ok(self
            .color_results
            .borrow()
            .get(input_path)
            .copied()
            .unwrap_or(ColorSpace::Unknown))
    }

    fn probe_resolution(&self, path: &Path) -> CoreResult<Resolution> {
        self.resolution_results
            .borrow()
            .get(path)
            .copied()
            .or(*self.default_resolution.borrow())
            .ok_or_else(|| {
                CoreError::ProbeFailure(format!(
                    "MockFfprobeExecutor: No resolution expectation set for path {}",
                    path.display()
                ))
            })
    }
}
