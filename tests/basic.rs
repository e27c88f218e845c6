mod common;

use assert_cmd::prelude::*;
use common::{picstat_cmd, write_gif, write_jpeg};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_no_args_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    picstat_cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("<PATH>"));
    Ok(())
}

#[test]
fn test_tree_report_exact_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("photos");
    let trip = root.join("trip");
    fs::create_dir_all(&trip)?;
    // 3000 bytes over 100x10 RGB -> 100%
    write_jpeg(&trip.join("beach.jpg"), 100, 10, 3000)?;
    // 2048 bytes over 64x64 palette -> 50%
    write_gif(&root.join("icon.gif"), 64, 64, 2048)?;
    fs::write(root.join("list.txt"), "not a picture")?;

    let expected = "photos (4kB;82x37;75.00%)\n\
                    \ticon.gif\n\
                    \t\t length: \t2kB\n\
                    \t\t dim: \t64x64\n\
                    \t\t compression: \t50.00%\n\
                    \ttrip (2kB;100x10;100.00%)\n\
                    \t\tbeach.jpg\n\
                    \t\t\t length: \t2kB\n\
                    \t\t\t dim: \t100x10\n\
                    \t\t\t compression: \t100.00%\n";

    picstat_cmd()
        .arg(&root)
        .assert()
        .success()
        .stdout(expected);

    temp.close()?;
    Ok(())
}

#[test]
fn test_non_pictures_are_not_listed() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("docs");
    fs::create_dir(&root)?;
    fs::write(root.join("a.txt"), vec![b'a'; 2048])?;
    fs::write(root.join("b.md"), "# title")?;

    picstat_cmd()
        .arg(&root)
        .assert()
        .success()
        .stdout("docs (2kB;null;null)\n");

    temp.close()?;
    Ok(())
}

#[test]
fn test_output_file_option() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let root = temp.path().join("empty");
    fs::create_dir(&root)?;
    let report = temp.path().join("report.txt");

    picstat_cmd()
        .arg(&root)
        .arg("-o")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&report)?, "empty (0kB;null;null)\n");
    temp.close()?;
    Ok(())
}

#[test]
fn test_two_roots_without_probe_fail() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    picstat_cmd()
        .arg(temp.path())
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one root path"));

    temp.close()?;
    Ok(())
}
