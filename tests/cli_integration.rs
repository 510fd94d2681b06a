use assert_cmd::Command;
use predicates::prelude::*;

fn photolog(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("photolog").unwrap();
    cmd.env("PHOTOLOG_HOME", home);
    cmd
}

#[test]
fn add_view_month_delete_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = photolog(temp_dir.path())
        .arg("add")
        .arg("2025-01-15")
        .arg("--image-url")
        .arg("https://img.example/a.png")
        .arg("--rating")
        .arg("4")
        .arg("--categories")
        .arg("x")
        .arg("--description")
        .arg("d")
        .assert()
        .success()
        .stdout(predicates::str::contains("Entry added to 2025-01-15"))
        .get_output()
        .stdout
        .clone();

    // The success message carries the assigned id in parentheses.
    let stdout = String::from_utf8(output).unwrap();
    let id = stdout
        .split('(')
        .nth(1)
        .and_then(|rest| rest.split(')').next())
        .unwrap()
        .to_string();

    photolog(temp_dir.path())
        .arg("view")
        .arg("2025-01-15")
        .assert()
        .success()
        .stdout(predicates::str::contains("https://img.example/a.png"))
        .stdout(predicates::str::contains("rating:     4"))
        .stdout(predicates::str::contains("x"));

    photolog(temp_dir.path())
        .arg("month")
        .arg("2025-01")
        .assert()
        .success()
        .stdout(predicates::str::contains("January 2025"))
        .stdout(predicates::str::contains("2025-01-15 1 entry"));

    photolog(temp_dir.path())
        .arg("delete")
        .arg(&id)
        .assert()
        .success()
        .stdout(predicates::str::contains("Entry deleted from 2025-01-15"))
        .stdout(predicates::str::contains("2025-01-15 is now empty"));
}

#[test]
fn view_of_an_empty_day_prints_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    photolog(temp_dir.path())
        .arg("view")
        .arg("2025-06-01")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn add_without_an_image_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    photolog(temp_dir.path())
        .arg("add")
        .arg("2025-01-15")
        .arg("--rating")
        .arg("4")
        .assert()
        .failure()
        .stderr(predicates::str::contains("image is required"));

    photolog(temp_dir.path())
        .arg("view")
        .arg("2025-01-15")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn out_of_range_rating_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    photolog(temp_dir.path())
        .arg("add")
        .arg("2025-01-15")
        .arg("--image-url")
        .arg("https://img.example/a.png")
        .arg("--rating")
        .arg("7.5")
        .assert()
        .failure()
        .stderr(predicates::str::contains("between 0 and 5"));
}

#[test]
fn seed_fills_an_empty_journal_once() {
    let temp_dir = tempfile::tempdir().unwrap();

    photolog(temp_dir.path())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicates::str::contains("Seeded"));

    photolog(temp_dir.path())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicates::str::contains("nothing seeded"));
}

#[test]
fn corrupt_blob_degrades_to_an_empty_journal() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("journal.json"), "{ not json").unwrap();

    photolog(temp_dir.path())
        .arg("view")
        .arg("2025-01-15")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn config_round_trips_through_the_cli() {
    let temp_dir = tempfile::tempdir().unwrap();

    photolog(temp_dir.path())
        .arg("config")
        .arg("week-start")
        .arg("monday")
        .assert()
        .success()
        .stdout(predicates::str::contains("week-start set to monday"));

    photolog(temp_dir.path())
        .arg("config")
        .arg("week-start")
        .assert()
        .success()
        .stdout(predicates::str::contains("week-start = monday"));

    photolog(temp_dir.path())
        .arg("month")
        .arg("2025-01")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mon Tue Wed Thu Fri Sat Sun"));
}

#[test]
fn legacy_us_dates_in_the_blob_are_normalized_on_view() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("journal.json"),
        r#"[{
            "id": "0c5ad23e-27e8-4f5a-9b25-5e7f0a8f8f11",
            "date": "01/15/2025",
            "imgUrl": "https://img.example/legacy.png",
            "rating": 3.5,
            "categories": [],
            "description": ""
        }]"#,
    )
    .unwrap();

    photolog(temp_dir.path())
        .arg("view")
        .arg("2025-01-15")
        .assert()
        .success()
        .stdout(predicates::str::contains("https://img.example/legacy.png"));
}
