//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn nttcalc() -> Command {
    let mut cmd = Command::cargo_bin("nttcalc").expect("binary not found");
    cmd.env_remove("NTTCALC_THRESHOLD").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    nttcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("number-theoretic transform"));
}

#[test]
fn version_flag() {
    nttcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nttcalc"));
}

#[test]
fn one_shot_quiet() {
    nttcalc()
        .args(["-q", "123", "456"])
        .assert()
        .success()
        .stdout("56088\n");
}

#[test]
fn one_shot_report() {
    nttcalc()
        .args(["-d", "123", "456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm: AutoNtt"))
        .stdout(predicate::str::contains("Operands: 3 x 3 digits"))
        .stdout(predicate::str::contains("Product digits: 5"))
        .stdout(predicate::str::contains("Product: 56088"));
}

#[test]
fn one_shot_eighteen_nines() {
    nttcalc()
        .args(["-q", "999999999999999999", "999999999999999999"])
        .assert()
        .success()
        .stdout("999999999999999998000000000000000001\n");
}

#[test]
fn one_shot_zero() {
    nttcalc()
        .args(["-q", "0", "123456789"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn each_algorithm() {
    for algo in ["auto", "simple", "hybrid", "bigint"] {
        nttcalc()
            .args(["-q", "--algo", algo, "00012345", "67890"])
            .assert()
            .success()
            .stdout("838102050\n");
    }
}

#[test]
fn all_algorithms_quiet_prints_once() {
    nttcalc()
        .args(["-q", "--algo", "all", "31", "17"])
        .assert()
        .success()
        .stdout("527\n");
}

#[test]
fn all_algorithms_comparison_table() {
    nttcalc()
        .args(["--algo", "all", "31", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results:"))
        .stdout(predicate::str::contains("BigIntReference"));
}

#[test]
fn all_algorithms_report_failed_path_on_stderr() {
    let a = "7".repeat(40_000);
    nttcalc()
        .args(["--algo", "all", a.as_str(), a.as_str()])
        .assert()
        .success()
        .stderr(predicate::str::contains("SimpleNtt: operands too large"))
        .stdout(predicate::str::contains("Comparison Results:"))
        .stdout(predicate::str::contains("[ERROR]"));
}

#[test]
fn invalid_algo_is_config_error() {
    nttcalc()
        .args(["--algo", "karatsuba", "1", "2"])
        .assert()
        .code(4);
}

#[test]
fn invalid_digit_is_input_error() {
    nttcalc()
        .args(["12a", "3"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("invalid digit 'a' at position 2"));
}

#[test]
fn forced_simple_on_oversized_operands() {
    let long = "9".repeat(40_000);
    nttcalc()
        .args(["--algo", "simple", &long, &long])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("too large for the simple path"));
}

#[test]
fn misconfigured_limits_are_config_errors() {
    nttcalc()
        .args(["--simple-max-size", "1000", "1", "2"])
        .assert()
        .code(4);
    nttcalc()
        .args(["--threshold", "40000", "1", "2"])
        .assert()
        .code(4);
}

#[test]
fn memory_limit_sufficient() {
    nttcalc()
        .args(["-q", "--memory-limit", "1G", "123", "456"])
        .assert()
        .success()
        .stdout("56088\n");
}

#[test]
fn memory_limit_insufficient() {
    nttcalc()
        .args(["--memory-limit", "100B", "123456789", "987654321"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("exceeds limit"));
}

#[test]
fn threshold_from_env() {
    let a = "7".repeat(50);
    nttcalc()
        .env("NTTCALC_THRESHOLD", "10")
        .args(["-v", "--algo", "auto", &a, "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("hybrid"));
}

#[test]
fn parallel_flag() {
    let a = "4".repeat(25_000);
    nttcalc()
        .args(["-q", "--parallel", &a, "2"])
        .assert()
        .success()
        .stdout(format!("{}\n", "8".repeat(25_000)));
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("product.txt");
    nttcalc()
        .args(["-q", "-o", path.to_str().unwrap(), "123", "456"])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "56088\n");
}

#[test]
fn session_multiple_queries() {
    nttcalc()
        .write_stdin("123 456\n0 123456789\nexit\n")
        .assert()
        .success()
        .stdout("56088\n0\n");
}

#[test]
fn session_tokens_across_lines() {
    nttcalc()
        .write_stdin("123\n456\n  9   9  ")
        .assert()
        .success()
        .stdout("56088\n81\n");
}

#[test]
fn session_invalid_then_valid() {
    nttcalc()
        .write_stdin("12x 3\n2 21\n")
        .assert()
        .success()
        .stdout("\n42\n")
        .stderr(predicate::str::contains("invalid digit 'x' at position 2"));
}

#[test]
fn session_custom_sentinel() {
    nttcalc()
        .args(["--sentinel", "quit"])
        .write_stdin("2 3\nquit\n4 5\n")
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn session_cross_check() {
    nttcalc()
        .args(["--algo", "all"])
        .write_stdin("99999 99999\n")
        .assert()
        .success()
        .stdout("9999800001\n");
}

#[test]
fn session_without_terminal_has_no_prompt() {
    nttcalc()
        .write_stdin("5 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(">").not());
}

#[test]
fn shell_completion() {
    for shell in ["bash", "zsh", "fish"] {
        nttcalc()
            .args(["--completion", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("nttcalc"));
    }
}

#[test]
fn calibration_auto() {
    let tmp = tempfile::TempDir::new().unwrap();
    nttcalc()
        .env("XDG_CONFIG_HOME", tmp.path())
        .args(["--auto-calibrate", "-q"])
        .timeout(std::time::Duration::from_secs(120))
        .assert()
        .success();
    let profile = tmp.path().join("nttcalc").join("nttcalc_calibration.json");
    let json = std::fs::read_to_string(profile).unwrap();
    assert!(json.contains("hybrid_threshold"));
}
