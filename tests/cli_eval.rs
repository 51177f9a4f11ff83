use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn contfrac() -> Command {
    let mut cmd = Command::cargo_bin("contfrac").unwrap();
    cmd.arg("-c").arg("tests/config_for_tests.toml");
    cmd
}

#[test]
fn test_with_config() {
    contfrac()
        .arg("415/93")
        .assert()
        .success()
        .stdout(predicate::eq("> 415/93\n415/93 = [4; 2, 6, 7]\n"));
}

#[test]
fn test_config_limits() {
    contfrac()
        .arg("sqrt(2)")
        .arg("convergents sqrt(2)")
        .assert()
        .success()
        .stdout(predicate::eq(
            "> sqrt(2)\nsqrt(2) = [1; 2, 2, 2, 2, 2, 2, 2, 2, ...]\n\
             > convergents sqrt(2)\nsqrt(2): 1, 3/2, 7/5, 17/12, 41/29, ...\n",
        ));
}

#[test]
fn test_steps_override() {
    contfrac()
        .arg("--steps")
        .arg("2")
        .arg("sqrt(2)")
        .assert()
        .success()
        .stdout(predicate::eq("> sqrt(2)\nsqrt(2) = [1; 2, 2, ...]\n"));
}

#[test]
fn test_invalid_expr() {
    contfrac()
        .arg("7/3")
        .arg("1/0")
        .assert()
        .failure()
        .stdout(predicate::eq("> 7/3\n7/3 = [2; 3]\n> 1/0\nDivision by zero\n"));
}

#[test]
fn test_invalid_config() {
    let mut cmd = Command::cargo_bin("contfrac").unwrap();
    cmd.arg("-c")
        .arg("config_that_doesnt_exist.toml")
        .arg("7/3")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to read provided config file `config_that_doesnt_exist.toml`",
        ));
}

#[test]
fn test_malformed_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[limits]\nmax_step = 3").unwrap();
    let mut cmd = Command::cargo_bin("contfrac").unwrap();
    cmd.arg("-c")
        .arg(file.path())
        .arg("7/3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("While parsing config.toml"));
}

#[test]
fn test_run_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "terminates 89/55\n\nperiod sqrt(7)").unwrap();
    contfrac()
        .arg("-f")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq(
            "89/55 terminates after 9 steps (bound 35)\nsqrt(7) = [2; (1, 1, 1, 4)]\n",
        ));
}

#[test]
fn test_run_stdin() {
    contfrac()
        .arg("-f")
        .arg("-")
        .write_stdin("approx 100 355/113\n")
        .assert()
        .success()
        .stdout(predicate::eq("355/113 ~ 22/7 (max denominator 100)\n"));
}

#[test]
fn test_json() {
    contfrac()
        .arg("--json")
        .arg("bridge 1/2")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"bridge""#))
        .stdout(predicate::str::contains(r#""terminated_at":2"#));
}
