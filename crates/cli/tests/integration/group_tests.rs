//! Group build integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn group_members_are_built_left_to_right_line_by_line() {
  let env = TestEnv::new().group("base", &["X Y", "Z"]);

  env.cmd().args(["-g", "base"]).assert().success();

  assert_eq!(env.invocations(), vec!["X", "Y", "Z"]);
}

#[test]
fn group_members_share_memoization() {
  let env = TestEnv::new()
    .group("base", &["X  Y", "", "Y Z"])
    .builds("X", &["Z"]);

  env.cmd().args(["--group", "base"]).assert().success();

  assert_eq!(env.invocations(), vec!["Z", "X", "Y"]);
}

#[test]
fn unknown_group_fails() {
  let env = TestEnv::new();

  env
    .cmd()
    .args(["-g", "nope"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains(r#"darwinxref ["group", "nope"] failed with code 1"#));

  assert!(env.invocations().is_empty());
}
