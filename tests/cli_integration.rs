use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bookshelf(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env("BOOKSHELF_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_persists_to_configured_file() {
    let home = TempDir::new().unwrap();

    bookshelf(&home)
        .args(["add", "Cien años de soledad", "Gabriel García Márquez", "Novela", "1967"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added"));

    let saved = fs::read_to_string(home.path().join("libros.json")).unwrap();
    assert!(saved.contains("\"titulo\": \"Cien años de soledad\""));
    assert!(saved.contains("\"anio\": 1967"));

    bookshelf(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cien años de soledad"))
        .stdout(predicate::str::contains("1967"));
}

#[test]
fn invalid_year_is_rejected() {
    let home = TempDir::new().unwrap();

    bookshelf(&home)
        .args(["add", "El perfume", "Patrick Süskind", "Novela", "not-a-year"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid year"));

    assert!(!home.path().join("libros.json").exists());
}

#[test]
fn find_author_and_remove() {
    let home = TempDir::new().unwrap();
    for (title, year) in [
        ("Cien años de soledad", "1967"),
        ("El amor en los tiempos del cólera", "1985"),
    ] {
        bookshelf(&home)
            .args(["add", title, "Gabriel García Márquez", "Novela", year])
            .assert()
            .success();
    }

    bookshelf(&home)
        .args(["find", "cien AÑOS de soledad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cien años de soledad"))
        .stdout(predicate::str::contains("cólera").not());

    bookshelf(&home)
        .args(["author", "gabriel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cien años de soledad"))
        .stdout(predicate::str::contains("El amor en los tiempos del cólera"));

    bookshelf(&home)
        .args(["rm", "Cien años de soledad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book removed"));

    bookshelf(&home)
        .args(["rm", "Cien años de soledad"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Book not found"));

    bookshelf(&home)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cien años de soledad").not())
        .stdout(predicate::str::contains("cólera"));
}

#[test]
fn empty_catalog_lists_nothing() {
    let home = TempDir::new().unwrap();
    bookshelf(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn explicit_file_flag_wins() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("otros.json");

    bookshelf(&home)
        .arg("--file")
        .arg(&file)
        .args(["add", "Ficciones", "Jorge Luis Borges", "Cuento", "1944"])
        .assert()
        .success();

    assert!(file.exists());
    assert!(!home.path().join("libros.json").exists());
}

#[test]
fn broken_catalog_file_is_not_overwritten() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("libros.json");
    fs::write(&file, "{ not json").unwrap();

    bookshelf(&home)
        .args(["add", "Ficciones", "Jorge Luis Borges", "Cuento", "1944"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error reading the JSON file"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "{ not json");
}

#[test]
fn config_sets_catalog_file() {
    let home = TempDir::new().unwrap();

    bookshelf(&home)
        .args(["config", "catalog-file", "novelas.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog-file set to novelas.json"));

    bookshelf(&home)
        .args(["add", "Rayuela", "Julio Cortázar", "Novela", "1963"])
        .assert()
        .success();

    assert!(home.path().join("novelas.json").exists());

    bookshelf(&home)
        .args(["config", "colour"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn demo_runs_sample_session() {
    let home = TempDir::new().unwrap();

    bookshelf(&home)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added"))
        .stdout(predicate::str::contains("Book removed"))
        .stdout(predicate::str::contains("Books saved"))
        .stdout(predicate::str::contains("Books loaded"))
        .stdout(predicate::str::contains("El amor en los tiempos del cólera"));

    let saved = fs::read_to_string(home.path().join("libros.json")).unwrap();
    assert!(!saved.contains("Cien años de soledad"));
}
