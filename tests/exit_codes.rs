// The observable error taxonomy: each failure class maps to a fixed process
// exit code. Codes 3 and 4 belong to the CLI shell; the rest come from the
// interpreter itself.

use std::io::Write as _;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn bftape() -> Command {
    Command::cargo_bin("bftape").unwrap()
}

fn program_file(code: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(code.as_bytes()).unwrap();
    file
}

#[test]
fn successful_run_exits_zero() {
    let program = program_file("+-><");
    bftape().arg(program.path()).assert().success();
}

#[test]
fn end_of_input_exits_2() {
    let program = program_file(",");
    bftape()
        .arg(program.path())
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn missing_argument_exits_3() {
    bftape()
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unopenable_file_exits_4() {
    bftape()
        .arg("no/such/program.bf")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn unterminated_loop_exits_5() {
    let program = program_file("+[");
    bftape()
        .arg(program.path())
        .assert()
        .code(5)
        .stderr(predicate::str::contains("no matching ']'"));
}

#[test]
fn unmatched_close_exits_6() {
    let program = program_file("]");
    bftape()
        .arg(program.path())
        .assert()
        .code(6)
        .stderr(predicate::str::contains("no matching '['"));
}

#[test]
fn help_exits_zero() {
    bftape()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROGRAM"));
}
