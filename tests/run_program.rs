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
fn three_increments_print_byte_three() {
    let program = program_file("+++.");
    bftape()
        .arg(program.path())
        .assert()
        .success()
        .stdout("\u{3}")
        .stderr(predicate::str::is_empty());
}

#[test]
fn input_byte_is_echoed() {
    let program = program_file(",.");
    bftape()
        .arg(program.path())
        .write_stdin("A")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn non_instruction_characters_are_comments() {
    let program = program_file("add two [comment only] + then + and print .");
    bftape()
        .arg(program.path())
        .assert()
        .success()
        .stdout("\u{2}");
}

#[test]
fn empty_loop_produces_no_output() {
    let program = program_file("[]");
    bftape()
        .arg(program.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn hello_world_program_runs() {
    let program = program_file(
        "++++++++++[>+++++++>++++++++++>+++>++++<<<<-]>++.>+.+++++++..+++.\
         >>++++.<++.<++++++++.--------.+++.------.--------.>+.",
    );
    bftape()
        .arg(program.path())
        .assert()
        .success()
        .stdout("Hello, world!");
}

#[test]
fn far_tape_excursion_round_trips() {
    // 2000 cells right, mark, 2000 back, print origin (still 0), then out
    // again and print the mark. Crosses chunk boundaries both ways.
    let code = format!(
        "{right}+++++{left}.{right}.",
        right = ">".repeat(2000),
        left = "<".repeat(2000),
    );
    let program = program_file(&code);
    bftape()
        .arg(program.path())
        .assert()
        .success()
        .stdout("\u{0}\u{5}");
}
