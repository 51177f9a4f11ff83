use assert_cmd::Command;
use predicates::prelude::*;

fn contfrac() -> Command {
    let mut cmd = Command::cargo_bin("contfrac").unwrap();
    cmd.arg("-c").arg("tests/config_for_tests.toml");
    cmd
}

#[test]
fn test_piped_session() {
    contfrac()
        .write_stdin("7/3\nterminates sqrt(2)\n")
        .assert()
        .success()
        .stdout(predicate::eq("7/3 = [2; 3]\nValue sqrt(2) is not rational\n"));
}

#[test]
fn test_help_text() {
    contfrac()
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::eq(contfrac::repl::HELP_TEXT).trim());
}

#[test]
fn test_quit() {
    contfrac()
        .write_stdin("7/3\nquit\n1/2\n")
        .assert()
        .success()
        .stdout(predicate::eq("7/3 = [2; 3]\n"));
}
