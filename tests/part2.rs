use assert_cmd::Command;
use predicates::{boolean::PredicateBooleanExt, prelude::predicate::str};

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("After 6 round(s)").and(str::contains("26")));
}

#[test]
fn part2_succeeds_with_enough_rounds() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs.txt").arg("--max-steps").arg("7");

    cmd.assert().success().stdout(str::contains("26"));
}
