use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn hub(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prompthub").unwrap();
    cmd.env("PROMPTHUB_HOME", home).env("NO_COLOR", "1");
    cmd
}

fn seeded() -> tempfile::TempDir {
    let temp_dir = tempfile::tempdir().unwrap();
    hub(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("12 sample works"));
    temp_dir
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_list_filters_by_tool_and_sorts_by_popularity() {
    let temp_dir = seeded();

    let stdout = stdout_of(
        hub(temp_dir.path()).args(["list", "--tool", "midjourney", "--sort", "popular"]),
    );

    let pos = |id: &str| stdout.find(id).unwrap_or_else(|| panic!("{} missing", id));
    assert!(pos("work-006") < pos("work-011"));
    assert!(pos("work-011") < pos("work-001"));
    assert!(!stdout.contains("work-002"));
    assert!(stdout.contains("3 works"));
}

#[test]
fn test_bare_invocation_lists_latest_first() {
    let temp_dir = seeded();

    let stdout = stdout_of(&mut hub(temp_dir.path()));
    assert!(stdout.find("work-001").unwrap() < stdout.find("work-012").unwrap());
    assert!(stdout.contains("12 works"));
}

#[test]
fn test_search_and_unknown_tool() {
    let temp_dir = seeded();

    hub(temp_dir.path())
        .args(["list", "--search", "INK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work-005"))
        .stdout(predicate::str::contains("work-001").not())
        .stdout(predicate::str::contains("\n1 works"));

    hub(temp_dir.path())
        .args(["list", "--tool", "banana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No works found."))
        .stdout(predicate::str::contains("Unknown tool: banana"));
}

#[test]
fn test_grid_layout_uses_requested_columns() {
    let temp_dir = seeded();

    hub(temp_dir.path())
        .args(["list", "--grid", "--columns", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work-001"))
        .stdout(predicate::str::contains("work-012"));

    hub(temp_dir.path())
        .args(["list", "--grid", "--columns", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_oversized_column_count_is_an_error() {
    let temp_dir = seeded();

    hub(temp_dir.path())
        .args(["list", "--grid", "--columns", "100000000000000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid argument"));

    hub(temp_dir.path())
        .args(["config", "columns", "100000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("columns must be between 1 and 12"));

    hub(temp_dir.path())
        .args(["config", "columns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4"));

    // a hand-edited config is caught at render time
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{"columns": 100000000000000}"#,
    )
    .unwrap();
    hub(temp_dir.path())
        .args(["list", "--grid"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_like_toggles_and_persists() {
    let temp_dir = seeded();

    hub(temp_dir.path())
        .args(["like", "work-003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Liked Future Tech Product Design (90 likes)"));

    hub(temp_dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("work-003"));

    hub(temp_dir.path())
        .args(["like", "work-003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unliked Future Tech Product Design (89 likes)"));
}

#[test]
fn test_view_shows_prompt_segments() {
    let temp_dir = seeded();

    hub(temp_dir.path())
        .args(["view", "work-001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cyberpunk City at Night"))
        .stdout(predicate::str::contains("positive-0"))
        .stdout(predicate::str::contains("neon lights"))
        .stdout(predicate::str::contains("negative-4"));

    hub(temp_dir.path())
        .args(["view", "work-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Work not found: work-404"));
}

#[test]
fn test_view_rejects_unknown_segment() {
    let temp_dir = seeded();

    hub(temp_dir.path())
        .args(["view", "work-003", "--copy", "negative-0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No segment negative-0"));
}

#[test]
fn test_upload_validates_then_publishes() {
    let temp_dir = seeded();

    hub(temp_dir.path())
        .args(["upload", "--title", "Koi", "--tool", "flux", "--prompt", "koi pond"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least one image is required"));

    hub(temp_dir.path())
        .args([
            "upload", "--title", "Koi", "--image", " ", "--tool", "flux", "--prompt", "koi pond",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image 1 cannot be blank"));

    hub(temp_dir.path())
        .args([
            "upload",
            "--title",
            "Koi",
            "--image",
            "koi.png",
            "--tool",
            "flux",
            "--prompt",
            "koi pond, lotus",
            "--tags",
            "water, calm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Published Koi"));

    hub(temp_dir.path())
        .arg("uploads")
        .assert()
        .success()
        .stdout(predicate::str::contains("Koi"))
        .stdout(predicate::str::contains("4 works"));
}

#[test]
fn test_segments_without_gallery() {
    let temp_dir = tempfile::tempdir().unwrap();

    hub(temp_dir.path())
        .args(["segments", "a, , b ,c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("positive-0  a"))
        .stdout(predicate::str::contains("positive-2  c"))
        .stdout(predicate::str::contains("positive-3").not());

    assert!(!temp_dir.path().join("works.json").exists());
}

#[test]
fn test_config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    hub(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("sort = latest"))
        .stdout(predicate::str::contains("columns = 4"));

    hub(temp_dir.path())
        .args(["config", "sort", "popular"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sort set to popular"));

    hub(temp_dir.path())
        .args(["config", "sort"])
        .assert()
        .success()
        .stdout(predicate::str::contains("popular"));

    hub(temp_dir.path())
        .args(["config", "columns", "zero"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid columns"));
}

#[test]
fn test_init_refuses_to_overwrite_without_force() {
    let temp_dir = seeded();

    hub(temp_dir.path())
        .args(["delete", "work-012"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Game Character Concept"));

    hub(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    hub(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    hub(temp_dir.path())
        .args(["view", "work-012"])
        .assert()
        .success();
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    hub(env_home.path())
        .arg("--data-dir")
        .arg(flag_home.path())
        .arg("init")
        .assert()
        .success();

    assert!(flag_home.path().join("works.json").exists());
    assert!(!env_home.path().join("works.json").exists());
}
