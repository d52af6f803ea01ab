use assert_cmd::Command;
use predicates::prelude::*;

fn penz(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("penz").unwrap();
    cmd.env("PENZ_HOME", home).env("NO_COLOR", "1");
    cmd.arg("--no-latency");
    cmd
}

#[test]
fn list_shows_the_seeded_gallery() {
    let temp_dir = tempfile::tempdir().unwrap();

    penz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Starfield"))
        .stdout(predicates::str::contains("Neon Button Hover"));
}

#[test]
fn search_matches_authors_case_insensitively() {
    let temp_dir = tempfile::tempdir().unwrap();

    penz(temp_dir.path())
        .arg("search")
        .arg("MARA")
        .assert()
        .success()
        .stdout(predicates::str::contains("Pure CSS Loader"))
        .stdout(predicates::str::contains("Neon Button Hover"))
        .stdout(predicates::str::contains("Starfield").not());
}

#[test]
fn created_pens_survive_into_the_next_invocation() {
    let temp_dir = tempfile::tempdir().unwrap();

    penz(temp_dir.path())
        .arg("new")
        .arg("Scroll Snap Demo")
        .assert()
        .success()
        .stdout(predicates::str::contains("Pen created"));

    penz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Scroll Snap Demo"));
}

#[test]
fn deleted_pens_stay_gone() {
    let temp_dir = tempfile::tempdir().unwrap();

    penz(temp_dir.path())
        .arg("delete")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Pen deleted."));

    penz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Starfield").not());
}

#[test]
fn fork_hands_off_to_the_next_new() {
    let temp_dir = tempfile::tempdir().unwrap();

    penz(temp_dir.path())
        .arg("fork")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Fork stashed: Fork of Starfield"));

    penz(temp_dir.path())
        .arg("new")
        .assert()
        .success()
        .stdout(predicates::str::contains("Fork of Starfield"));

    // The stash was consumed; a second bare `new` makes an untitled pen
    penz(temp_dir.path())
        .arg("new")
        .assert()
        .success()
        .stdout(predicates::str::contains("Untitled Pen"));
}

#[test]
fn view_prints_sources_and_not_found_is_graceful() {
    let temp_dir = tempfile::tempdir().unwrap();

    penz(temp_dir.path())
        .arg("view")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Starfield"))
        .stdout(predicates::str::contains("<canvas id=\"sky\"></canvas>"));

    penz(temp_dir.path())
        .arg("view")
        .arg("999")
        .assert()
        .success()
        .stdout(predicates::str::contains("Pen not found."));

    penz(temp_dir.path())
        .arg("view")
        .arg("not-a-number")
        .assert()
        .success()
        .stdout(predicates::str::contains("Pen not found."));
}

#[test]
fn preview_writes_a_complete_document() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out = temp_dir.path().join("preview.html");

    penz(temp_dir.path())
        .arg("preview")
        .arg("2")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("class=\"neon\""));
    assert!(doc.contains(".neon:hover"));
}

#[test]
fn config_roundtrips_through_the_data_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    penz(temp_dir.path())
        .arg("config")
        .arg("author")
        .arg("Mara Ellis")
        .assert()
        .success()
        .stdout(predicates::str::contains("Config updated."));

    penz(temp_dir.path())
        .arg("config")
        .arg("author")
        .assert()
        .success()
        .stdout(predicates::str::contains("author = Mara Ellis"));
}
