//! Recursive project build integration tests.

use predicates::prelude::*;

use super::common::{TestEnv, bare_cmd};

#[test]
fn builds_header_then_build_dependencies_then_project() {
  let env = TestEnv::new().builds("App", &["Lib"]).headers("App", &["LibHeaders"]);

  env
    .cmd()
    .args(["-p", "App"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Recursive build complete"));

  assert_eq!(env.invocations(), vec!["-headers LibHeaders", "Lib", "App"]);
}

#[test]
fn transitive_dependencies_are_built_once() {
  let env = TestEnv::new()
    .builds("App", &["A", "B"])
    .builds("A", &["Libc"])
    .builds("B", &["Libc"])
    .headers("Libc", &["xnu"]);

  env.cmd().args(["--project", "App"]).assert().success();

  assert_eq!(env.invocations(), vec!["-headers xnu", "Libc", "A", "B", "App"]);
}

#[test]
fn dependency_cycle_terminates() {
  let env = TestEnv::new().builds("A", &["B"]).builds("B", &["A"]);

  env.cmd().args(["-p", "A"]).assert().success();

  assert_eq!(env.invocations(), vec!["B", "A"]);
}

#[test]
fn build_failure_stops_the_run() {
  let env = TestEnv::new()
    .builds("App", &["A", "B", "C"])
    .failing_build("B");

  env
    .cmd()
    .args(["-p", "App"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("darwinbuild B failed with code 1"));

  assert_eq!(env.invocations(), vec!["A", "B"]);
}

#[test]
fn headers_build_failure_names_the_mode() {
  let env = TestEnv::new()
    .headers("App", &["Libc"])
    .failing_build("-headers Libc");

  env
    .cmd()
    .args(["-p", "App"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("darwinbuild -headers Libc failed with code 1"));

  assert_eq!(env.invocations(), vec!["-headers Libc"]);
}

#[test]
fn oracle_failure_reports_command_and_code() {
  let env = TestEnv::new().builds("App", &["Lib"]).broken_query("Lib");

  env
    .cmd()
    .args(["-p", "App"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains(r#"darwinxref ["dependencies", "-header", "Lib"] failed with code 3"#));

  assert!(env.invocations().is_empty());
}

#[test]
fn missing_build_root_explains_how_to_initialize() {
  let env = TestEnv::new().builds("App", &["Lib"]);
  std::fs::remove_dir(env.root_path().join("Headers")).unwrap();

  env
    .cmd()
    .args(["-p", "App"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Could not find darwinbuild root"))
    .stderr(predicate::str::contains("darwinbuild -init <plist>"))
    .stderr(predicate::str::contains("DARWIN_BUILDROOT"));

  assert!(env.invocations().is_empty());
}

#[test]
fn build_root_is_taken_from_environment() {
  let env = TestEnv::new();
  env.cmd().args(["-p", "Solo"]).assert().success();

  bare_cmd()
    .env("DARWIN_BUILDROOT", env.root_path())
    .env("DARWINXREF", env.temp.path().join("bin/darwinxref"))
    .env("DARWINBUILD", env.temp.path().join("bin/darwinbuild"))
    .args(["-p", "Other"])
    .assert()
    .success();

  assert_eq!(env.invocations(), vec!["Solo", "Other"]);
}

#[test]
fn relative_tool_paths_resolve_from_invocation_directory() {
  let env = TestEnv::new().builds("App", &["Lib"]);
  env.install_tools();

  bare_cmd()
    .current_dir(env.temp.path())
    .args(["--build-root", "root"])
    .args(["--xref", "bin/darwinxref", "--darwinbuild", "bin/darwinbuild"])
    .args(["-p", "App"])
    .assert()
    .success();

  assert_eq!(env.invocations(), vec!["Lib", "App"]);
}

#[test]
fn json_summary_lists_steps() {
  let env = TestEnv::new().headers("App", &["LibHeaders"]);

  env
    .cmd()
    .args(["-p", "App", "--output", "json"])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""project": "LibHeaders""#))
    .stdout(predicate::str::contains(r#""kind": "header""#))
    .stdout(predicate::str::contains("elapsed_ms"));
}
