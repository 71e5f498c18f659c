use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn flexfuel(db: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("flexfuel"));
    cmd.arg("--db").arg(db);
    cmd
}

#[test]
fn test_stations_survive_restart() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("stations.db");

    // 1. First run: record a station
    flexfuel(&db)
        .args([
            "add",
            "--name",
            "Posto Central",
            "--alcohol",
            "3.59",
            "--gasoline",
            "5.89",
            "--location",
            "Av. Brasil 100",
            "--date",
            "2024-05-10",
        ])
        .assert()
        .success();

    // 2. Second run: the record is still there
    flexfuel(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0: Posto Central | alcohol 3.59 | gasoline 5.89 | Av. Brasil 100 | 2024-05-10",
        ));
}

#[test]
fn test_edit_replaces_and_delete_removes() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("stations.db");

    for name in ["Posto A", "Posto B"] {
        flexfuel(&db)
            .args([
                "add", "--name", name, "--alcohol", "3.50", "--gasoline", "5.00",
            ])
            .assert()
            .success();
    }

    flexfuel(&db)
        .args([
            "edit", "0", "--name", "Posto C", "--alcohol", "3.45", "--gasoline", "5.10",
        ])
        .assert()
        .success();

    flexfuel(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Posto C"))
        .stdout(predicate::str::contains("1: Posto B"));

    flexfuel(&db).args(["delete", "0"]).assert().success();

    flexfuel(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Posto B"))
        .stdout(predicate::str::contains("Posto C").not());
}

#[test]
fn test_out_of_bounds_delete_is_noop() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("stations.db");

    flexfuel(&db)
        .args([
            "add", "--name", "Posto A", "--alcohol", "3.50", "--gasoline", "5.00",
        ])
        .assert()
        .success();

    flexfuel(&db).args(["delete", "9"]).assert().success();

    flexfuel(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Posto A"));
}

#[test]
fn test_percentage_preference_survives_restart() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("stations.db");

    // Default before any set
    flexfuel(&db)
        .arg("percentage")
        .assert()
        .success()
        .stdout(predicate::str::contains("70"));

    flexfuel(&db).args(["percentage", "75"]).assert().success();

    flexfuel(&db)
        .arg("percentage")
        .assert()
        .success()
        .stdout(predicate::str::contains("75"));

    // The stored preference drives calc when none is given:
    // 5.00 * 0.75 = 3.75, so 3.60 now favors alcohol
    flexfuel(&db)
        .args(["calc", "--alcohol", "3.60", "--gasoline", "5.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fill up with alcohol"));
}
