use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn booktrack() -> Command {
    Command::cargo_bin("booktrack").unwrap()
}

#[test]
fn test_add_creates_catalog_and_sorts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("library/books.txt");

    booktrack()
        .arg(&catalog)
        .arg("zen and the art:Pirsig:9780060839871:1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Books added:             1"));

    booktrack()
        .arg(&catalog)
        .arg("Anna Karenina:Tolstoy:9780143035008:2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anna Karenina"))
        .stdout(predicate::str::contains("Thank you for using the Library Book Tracker."));

    let content = fs::read_to_string(&catalog).unwrap();
    assert_eq!(
        content,
        "Anna Karenina:Tolstoy:9780143035008:2\nzen and the art:Pirsig:9780060839871:1\n"
    );
}

#[test]
fn test_title_search_prints_table_and_counts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.txt");
    fs::write(
        &catalog,
        "The Lord of the Rings:Tolkien:9780544003415:2\nlord jim:Conrad:9780141441610:1\nDune:Herbert:9780441013593:4\n",
    )
    .unwrap();

    booktrack()
        .arg(&catalog)
        .arg("lord")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title"))
        .stdout(predicate::str::contains("The Lord of the Rings"))
        .stdout(predicate::str::contains("lord jim"))
        .stdout(predicate::str::contains("Dune").not())
        .stdout(predicate::str::contains("Valid records processed: 3"))
        .stdout(predicate::str::contains("Search results found:    2"));
}

#[test]
fn test_duplicate_isbn_search_is_logged() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.txt");
    fs::write(
        &catalog,
        "Dune:Herbert:9780441013593:4\nDune Again:Herbert:9780441013593:1\nbroken line\n",
    )
    .unwrap();

    booktrack()
        .arg(&catalog)
        .arg("9780441013593")
        .assert()
        .success()
        .stderr(predicate::str::contains("Duplicate ISBN"))
        .stdout(predicate::str::contains("Errors encountered:      2"));

    let log = fs::read_to_string(temp_dir.path().join("errors.log")).unwrap();
    assert!(log.contains("INVALID LINE: \"broken line\" - MalformedEntry: Invalid field count."));
    assert!(log.contains("OPERATION: \"9780441013593\" - DuplicateISBN"));
}

#[test]
fn test_non_txt_catalog_still_prints_statistics() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.csv");

    booktrack()
        .arg(&catalog)
        .arg("Dune")
        .assert()
        .success()
        .stderr(predicate::str::contains("must end with .txt"))
        .stdout(predicate::str::contains("Errors encountered:      1"))
        .stdout(predicate::str::contains("Thank you for using the Library Book Tracker."));
    assert!(!catalog.exists());
}

#[test]
fn test_ingest_flag_loads_extra_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.txt");
    let extra_a = temp_dir.path().join("a.txt");
    let extra_b = temp_dir.path().join("b.txt");
    fs::write(&extra_a, "Emma:Austen:9780141439587:1\n").unwrap();
    fs::write(&extra_b, "Beloved:Morrison:9781400033416:2\nnope\n").unwrap();

    booktrack()
        .arg(&catalog)
        .arg("9780141439587")
        .arg("--ingest")
        .arg(&extra_a)
        .arg("--ingest")
        .arg(&extra_b)
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"))
        .stdout(predicate::str::contains("Valid records processed: 2"))
        .stdout(predicate::str::contains("Errors encountered:      1"));

    let content = fs::read_to_string(&catalog).unwrap();
    assert_eq!(
        content,
        "Beloved:Morrison:9781400033416:2\nEmma:Austen:9780141439587:1\n"
    );
}

#[test]
fn test_missing_operation_is_a_usage_error() {
    booktrack().arg("books.txt").assert().failure();
}

#[test]
fn test_unwritable_error_log_is_reported_on_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.txt");
    fs::write(&catalog, "broken line\n").unwrap();
    fs::create_dir(temp_dir.path().join("errors.log")).unwrap();

    booktrack()
        .env_remove("RUST_LOG")
        .arg(&catalog)
        .arg("Dune")
        .assert()
        .success()
        .stderr(predicate::str::contains("could not append to error log"))
        .stdout(predicate::str::contains("Errors encountered:      1"));
}

#[test]
fn test_undecodable_catalog_line_does_not_block_add() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.txt");
    fs::write(
        &catalog,
        b"Dune:Herbert:9780441013593:4\n\xff\xfe\nEmma:Austen:9780141439587:1\n",
    )
    .unwrap();

    booktrack()
        .arg(&catalog)
        .arg("Beloved:Morrison:9781400033416:2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid records processed: 2"))
        .stdout(predicate::str::contains("Books added:             1"))
        .stdout(predicate::str::contains("Errors encountered:      1"));

    let content = fs::read_to_string(&catalog).unwrap();
    assert_eq!(
        content,
        "Beloved:Morrison:9781400033416:2\nDune:Herbert:9780441013593:4\nEmma:Austen:9780141439587:1\n"
    );
    let log = fs::read_to_string(temp_dir.path().join("errors.log")).unwrap();
    assert!(log.contains("INVALID LINE"));
    assert!(log.contains("MalformedEntry: Invalid field count."));
}

#[test]
fn test_malformed_catalog_line_still_runs_search() {
    let temp_dir = tempfile::tempdir().unwrap();
    let catalog = temp_dir.path().join("books.txt");
    fs::write(
        &catalog,
        "not a record\nDune:Herbert:9780441013593:4\nEmma:Austen:97801:1\n",
    )
    .unwrap();

    booktrack()
        .arg(&catalog)
        .arg("9780441013593")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Search results found:    1"))
        .stdout(predicate::str::contains("Errors encountered:      2"));
}
