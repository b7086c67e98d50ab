use assert_cmd::Command;
use httpmock::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PAGE: &str = "<html><head><title>T</title></head><body><h1>Hi</h1></body></html>";

const EXPECTED_REPORT: &str = "{\n    \"div\": false,\n    \"h1\": true,\n    \"head > title\": true\n}\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(html: &str, checks: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), html).unwrap();
        std::fs::write(dir.path().join("checks.json"), checks).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }
}

fn grader() -> Command {
    Command::cargo_bin("html-grader").unwrap()
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_grades_file_with_explicit_flags() {
    let fixture = Fixture::new(PAGE, r#"["h1", "head > title", "div"]"#);

    let output = grader()
        .arg("--file")
        .arg(fixture.path("index.html"))
        .arg("--checks")
        .arg(fixture.path("checks.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), EXPECTED_REPORT);
}

#[test]
fn test_uses_default_paths_in_working_directory() {
    let fixture = Fixture::new(PAGE, r#"["h1", "head > title", "div"]"#);

    let output = grader().current_dir(fixture.root()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), EXPECTED_REPORT);
}

#[test]
fn test_missing_html_file_exits_with_one() {
    let fixture = Fixture::new(PAGE, "[]");
    let missing = fixture.path("nope.html");

    let output = grader()
        .arg("-f")
        .arg(&missing)
        .arg("-c")
        .arg(fixture.path("checks.json"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("nope.html does not exist. Exiting."), "{}", stdout);
}

#[test]
fn test_missing_default_checks_file_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), PAGE).unwrap();

    let output = grader().current_dir(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("checks.json does not exist"));
}

#[test]
fn test_malformed_checks_prints_no_json() {
    let fixture = Fixture::new(PAGE, r#"["h1", "#);

    let output = grader().current_dir(fixture.root()).output().unwrap();

    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("is not a valid checks file"), "{}", stderr);
}

#[test]
fn test_invalid_url_exits_before_any_request() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.any_request();
        then.status(200).body(PAGE);
    });
    let fixture = Fixture::new(PAGE, "[]");

    let output = grader()
        .current_dir(fixture.root())
        .args(["--url", "notaurl"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "'notaurl' is not a valid http url\n");
    page.assert_hits(0);
}

#[test]
fn test_grades_url() {
    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/index.htm");
        then.status(200)
            .header("content-type", "text/html")
            .body(PAGE);
    });
    // No index.html: the default file is not needed when --url is given
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("checks.json"), r#"["head > title", "div", "h1"]"#).unwrap();

    let output = grader()
        .current_dir(dir.path())
        .arg("--url")
        .arg(server.url("/index.htm"))
        .output()
        .unwrap();

    page.assert();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), EXPECTED_REPORT);
}

#[test]
fn test_invalid_selector_is_fatal() {
    let fixture = Fixture::new(PAGE, r#"["h1", "div[["]"#);

    let output = grader().current_dir(fixture.root()).output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_slow_url_times_out_with_exit_two() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow.htm");
        then.status(200)
            .delay(std::time::Duration::from_secs(3))
            .body(PAGE);
    });
    let fixture = Fixture::new(PAGE, r#"["h1"]"#);

    let output = grader()
        .current_dir(fixture.root())
        .arg("--url")
        .arg(server.url("/slow.htm"))
        .args(["-t", "1"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("timed out after 1s"), "{}", stderr);
}
