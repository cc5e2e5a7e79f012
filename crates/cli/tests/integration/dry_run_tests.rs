//! Dry-run integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn dry_run_prints_plan_without_building() {
  let env = TestEnv::new().builds("App", &["Lib"]).headers("App", &["LibHeaders"]);

  env
    .cmd()
    .args(["-p", "App", "--dry-run"])
    .assert()
    .success()
    .stdout(predicate::str::contains("darwinbuild -headers LibHeaders"))
    .stdout(predicate::str::contains("darwinbuild Lib"))
    .stdout(predicate::str::contains("darwinbuild App"));

  assert!(env.invocations().is_empty());
}

#[test]
fn dry_run_json_keeps_invocation_order() {
  let env = TestEnv::new().builds("App", &["Lib"]);

  let output = env
    .cmd()
    .args(["-p", "App", "--dry-run", "--output", "json"])
    .output()
    .unwrap();

  assert!(output.status.success());
  let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  let projects: Vec<&str> = summary["steps"]
    .as_array()
    .unwrap()
    .iter()
    .map(|s| s["project"].as_str().unwrap())
    .collect();
  assert_eq!(projects, vec!["Lib", "App"]);
}
