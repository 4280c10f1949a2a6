//! End-to-end runs of the shastamp binary against a scripted git

use crate::fixtures::{COMMIT_TIME, SHA1, expected_header};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_shastamp(args: &[&str], git: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shastamp"));
    cmd.args(args).env_remove("RUST_LOG");
    if let Some(git) = git {
        cmd.env("SHASTAMP_GIT", git);
    }
    cmd.output().expect("Failed to execute shastamp")
}

#[cfg(unix)]
fn scripted_git(dir: &Path, sha1: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-git");
    let body = format!(
        "#!/bin/sh\n\
         case \"$3\" in\n\
         --pretty=format:%H) printf '%s\\n' '{sha1}' ;;\n\
         --pretty=format:%ci) printf '%s\\n' '{COMMIT_TIME}' ;;\n\
         *) echo \"unexpected: $*\" >&2; exit 129 ;;\n\
         esac\n"
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

#[test]
fn test_help_exits_zero() {
    let output = run_shastamp(&["--help"], None);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shastamp <OUTPUT_FILE>"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = run_shastamp(&[], None);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OUTPUT_FILE"));
}

#[test]
fn test_unlaunchable_git_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("sha1.h");
    let missing = temp_dir.path().join("no-such-git");

    let output = run_shastamp(&[output_path.to_str().unwrap()], Some(&missing));

    assert_eq!(output.status.code(), Some(3));
    assert!(!output_path.exists());
}

#[cfg(unix)]
#[test]
fn test_write_then_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let git = scripted_git(temp_dir.path(), SHA1);
    let header = temp_dir.path().join("sha1.h");
    let header_arg = header.to_str().unwrap();

    let first = run_shastamp(&[header_arg], Some(&git));
    assert!(first.status.success());
    assert!(first.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&header).unwrap(),
        expected_header(SHA1, COMMIT_TIME)
    );

    let second = run_shastamp(&[header_arg], Some(&git));
    assert!(second.status.success());
    assert_eq!(
        String::from_utf8_lossy(&second.stdout).trim_end(),
        "Sha1 has not changed"
    );
}

#[cfg(unix)]
#[test]
fn test_failing_git_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("broken-git");
    {
        use std::os::unix::fs::PermissionsExt;
        fs::write(&script, "#!/bin/sh\necho 'fatal: not a git repository' >&2\nexit 128\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    }
    let header = temp_dir.path().join("sha1.h");

    let output = run_shastamp(&[header.to_str().unwrap()], Some(&script));

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not a git repository"));
    assert!(!header.exists());
}

#[test]
fn test_version_exits_zero() {
    let output = run_shastamp(&["--version"], None);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("shastamp {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_empty_git_override_falls_back_to_git() {
    let temp_dir = TempDir::new().unwrap();
    let header = temp_dir.path().join("sha1.h");

    // Whether or not git is installed here, the empty value must not be spawned.
    let output = run_shastamp(&[header.to_str().unwrap()], Some(Path::new("")));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Failed to launch ''"), "stderr: {stderr}");
}

#[cfg(unix)]
#[test]
fn test_unwritable_output_exits_four() {
    let temp_dir = TempDir::new().unwrap();
    let git = scripted_git(temp_dir.path(), SHA1);
    let blocker = temp_dir.path().join("not_a_dir");
    fs::write(&blocker, b"file").unwrap();
    let header = blocker.join("sha1.h");

    let output = run_shastamp(&[header.to_str().unwrap()], Some(&git));

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("I/O error"));
}
