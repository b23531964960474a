use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn seed_posters(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"fake image bytes").unwrap();
    }
}

#[test]
fn library_lists_display_names() {
    let temp = tempfile::tempdir().unwrap();
    seed_posters(temp.path(), &["the_matrix.png", "blade_runner.jpg"]);

    let mut cmd = Command::cargo_bin("miniflix").unwrap();
    cmd.arg("library")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("The Matrix"))
        .stdout(predicate::str::contains("Blade Runner"));
}

#[test]
fn library_skips_unsupported_files() {
    let temp = tempfile::tempdir().unwrap();
    seed_posters(temp.path(), &["alien.png", "notes.txt", "clip.gif"]);

    let mut cmd = Command::cargo_bin("miniflix").unwrap();
    cmd.arg("library")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Alien"))
        .stdout(predicate::str::contains("Notes").not())
        .stdout(predicate::str::contains("Clip").not());
}

#[test]
fn home_hints_when_the_library_is_empty() {
    let temp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("miniflix").unwrap();
    cmd.arg("home")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Add some images"));
}

#[test]
fn trending_with_a_seed_is_reproducible() {
    let temp = tempfile::tempdir().unwrap();
    seed_posters(
        temp.path(),
        &["a_movie.png", "b_movie.png", "c_movie.png", "d_movie.png", "e_movie.png"],
    );

    let run = || {
        Command::cargo_bin("miniflix")
            .unwrap()
            .arg("trending")
            .arg("--seed")
            .arg("42")
            .arg("--dir")
            .arg(temp.path())
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn upload_rejects_unsupported_formats() {
    let sources = tempfile::tempdir().unwrap();
    let library = tempfile::tempdir().unwrap();
    let gif = sources.path().join("poster.gif");
    fs::write(&gif, b"gif bytes").unwrap();
    let target = library.path().join("posters");

    let mut cmd = Command::cargo_bin("miniflix").unwrap();
    cmd.arg("upload")
        .arg(&gif)
        .arg("--dir")
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported poster format"));

    // a rejected upload never creates the storage location
    assert!(!target.exists());
}

#[test]
fn upload_writes_bytes_verbatim_and_lists_the_movie() {
    let sources = tempfile::tempdir().unwrap();
    let library = tempfile::tempdir().unwrap();
    let poster = sources.path().join("dark_city.jpg");
    fs::write(&poster, b"jpeg bytes").unwrap();

    let mut cmd = Command::cargo_bin("miniflix").unwrap();
    cmd.arg("upload")
        .arg(&poster)
        .arg("--dir")
        .arg(library.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie Added!"));

    assert_eq!(
        fs::read(library.path().join("dark_city.jpg")).unwrap(),
        b"jpeg bytes"
    );

    let mut cmd = Command::cargo_bin("miniflix").unwrap();
    cmd.arg("library")
        .arg("--dir")
        .arg(library.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark City"));
}
