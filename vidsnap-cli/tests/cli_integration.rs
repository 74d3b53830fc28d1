use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::path::PathBuf;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn vidsnap_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vidsnap").expect("Failed to find vidsnap binary");
    cmd.env_remove("RUST_LOG").env("VIDSNAP_PACING_MS", "0");
    cmd
}

#[test]
fn test_help_exits_zero() {
    vidsnap_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--num-screenshots"))
        .stdout(contains("--force-format"));
}

#[test]
fn test_version_short_flag_exits_zero() {
    vidsnap_cmd()
        .arg("-v")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_input_exits_one() {
    vidsnap_cmd()
        .assert()
        .code(1)
        .stderr(contains("Error: Invalid input: No input file given"));
}

#[test]
fn test_non_existent_input() -> Result<(), Box<dyn Error>> {
    let output_dir = tempdir()?;
    let non_existent_input = PathBuf::from("surely/this/does/not/exist/input.mkv");

    vidsnap_cmd()
        .arg(&non_existent_input)
        .arg("-d")
        .arg(output_dir.path())
        .assert()
        .code(1)
        .stderr(contains("Invalid input"));

    Ok(())
}

#[test]
fn test_zero_and_negative_counts_are_rejected() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let input_file = input_dir.path().join("movie.mkv");
    std::fs::write(&input_file, "dummy content")?;

    for count in ["0", "-2"] {
        vidsnap_cmd()
            .arg("-n")
            .arg(count)
            .arg(&input_file)
            .assert()
            .code(1)
            .stderr(contains("Invalid configuration"))
            .stdout(predicate::str::is_empty());
    }
    Ok(())
}

#[test]
fn test_invalid_force_format_exits_one() {
    vidsnap_cmd()
        .args(["-f", "srgb", "movie.mkv"])
        .assert()
        .code(1)
        .stderr(contains("srgb"));
}

#[test]
fn test_unknown_flag_exits_one() {
    vidsnap_cmd()
        .args(["--frobnicate", "movie.mkv"])
        .assert()
        .code(1);
}

#[test]
fn test_bad_prefix_is_a_configuration_error() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let input_file = input_dir.path().join("movie.mkv");
    std::fs::write(&input_file, "dummy content")?;

    vidsnap_cmd()
        .args(["-p", "nested/name"])
        .arg(&input_file)
        .assert()
        .code(1)
        .stderr(contains("path separators"));
    Ok(())
}

#[test]
fn test_silent_failure_keeps_stdout_clean() {
    vidsnap_cmd()
        .args(["-s", "surely/this/does/not/exist.mkv"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Error:"));
}

/// Stand-in ffprobe/ffmpeg scripts on a private `PATH`.
///
/// ffprobe always reports a 20 minute 1920x1080 video. ffmpeg answers
/// `-version`, writes its last argument otherwise, and exits 1 without
/// writing on extraction number `fail_on` (0 never fails).
#[cfg(unix)]
struct FakeTools {
    dir: tempfile::TempDir,
    input: PathBuf,
    output_dir: PathBuf,
}

#[cfg(unix)]
impl FakeTools {
    const PROBE_JSON: &'static str = r#"{"streams":[{"codec_type":"video","width":1920,"height":1080,"color_space":"bt709"}],"format":{"duration":"1200.000000"}}"#;

    fn new(fail_on: u32) -> Result<Self, Box<dyn Error>> {
        let dir = tempdir()?;
        let bin = dir.path().join("bin");
        std::fs::create_dir(&bin)?;

        let ffprobe = format!("#!/bin/sh\necho '{}'\n", Self::PROBE_JSON);
        let count = dir.path().join("extractions");
        let ffmpeg = format!(
            r#"#!/bin/sh
[ "$1" = "-version" ] && exit 0
n=$(cat "{count}" 2>/dev/null || echo 0)
n=$((n + 1))
echo "$n" > "{count}"
[ "$n" = "{fail_on}" ] && exit 1
for a; do out="$a"; done
printf 'png' > "$out"
"#,
            count = count.display(),
        );
        write_script(&bin.join("ffprobe"), &ffprobe)?;
        write_script(&bin.join("ffmpeg"), &ffmpeg)?;

        let input = dir.path().join("movie.mkv");
        std::fs::write(&input, "not really a video")?;
        let output_dir = dir.path().join("shots");
        Ok(Self {
            dir,
            input,
            output_dir,
        })
    }

    fn command(&self) -> Result<Command, Box<dyn Error>> {
        let mut path = vec![self.dir.path().join("bin")];
        path.extend(std::env::split_paths(&std::env::var_os("PATH").unwrap_or_default()));

        let mut cmd = vidsnap_cmd();
        cmd.env("PATH", std::env::join_paths(path)?)
            .env("NO_COLOR", "1")
            .args(["--seed", "42", "-d"])
            .arg(&self.output_dir)
            .arg(&self.input);
        Ok(cmd)
    }
}

#[cfg(unix)]
fn write_script(path: &std::path::Path, body: &str) -> Result<(), Box<dyn Error>> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::write(path, body)?;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(unix)]
fn stdout_paths(stdout: &[u8]) -> Vec<PathBuf> {
    String::from_utf8_lossy(stdout)
        .split_whitespace()
        .map(PathBuf::from)
        .collect()
}

#[cfg(unix)]
#[test]
fn test_silent_run_prints_only_produced_paths() -> Result<(), Box<dyn Error>> {
    let tools = FakeTools::new(0)?;

    let output = tools.command()?.arg("-s").assert().success().get_output().clone();

    assert!(output.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.ends_with('\n'));
    assert_eq!(stdout.trim_end().matches(' ').count(), 2);

    let paths = stdout_paths(stdout.as_bytes());
    assert_eq!(paths.len(), 3);
    let mut previous = 0;
    for path in &paths {
        assert_eq!(path.parent(), Some(tools.output_dir.as_path()));
        assert!(path.is_file());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        let timestamp: u64 = name
            .strip_prefix("snapshot_")
            .and_then(|rest| rest.strip_suffix(".png"))
            .unwrap()
            .parse()?;
        assert!((60..420).contains(&timestamp));
        assert!(timestamp > previous);
        previous = timestamp;
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_debug_echoes_invocations_on_stderr() -> Result<(), Box<dyn Error>> {
    let tools = FakeTools::new(0)?;

    let output = tools
        .command()?
        .args(["-s", "--debug", "-n", "1"])
        .assert()
        .success()
        .get_output()
        .clone();

    let paths = stdout_paths(&output.stdout);
    assert_eq!(paths.len(), 1);

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("$ ffprobe -v error -print_format json"));
    let echo = stderr
        .lines()
        .find(|line| line.trim_start().starts_with("$ ffmpeg"))
        .expect("no ffmpeg invocation echoed");
    assert!(echo.contains("-hide_banner -ss 00:0"));
    assert!(echo.contains("in_color_matrix=bt709:out_color_matrix=bt709"));
    assert!(echo.ends_with(&format!("-frames:v 1 -y {}", paths[0].display())));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failed_extraction_is_left_out_and_exit_is_zero() -> Result<(), Box<dyn Error>> {
    let tools = FakeTools::new(2)?;

    let output = tools.command()?.arg("-s").assert().code(0).get_output().clone();

    let paths = stdout_paths(&output.stdout);
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().all(|p| p.is_file()));
    assert_eq!(std::fs::read_dir(&tools.output_dir)?.count(), 2);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_normal_run_reports_progress_and_summary() -> Result<(), Box<dyn Error>> {
    let tools = FakeTools::new(3)?;

    tools
        .command()?
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(contains("===== VIDEO ====="))
        .stderr(contains("Resolution:      1920x1080"))
        .stderr(contains("» Snapshot 1/3 at 00:0"))
        .stderr(contains("Snapshot 3 at"))
        .stderr(contains("===== SUMMARY ====="))
        .stderr(contains("✓ Produced 2 of 3 snapshot(s)"))
        .stderr(contains("Failed:"));
    Ok(())
}
