//! CLI integration tests against fake darwinxref/darwinbuild tools.

#![cfg(unix)]

mod dry_run_tests;
mod group_tests;
mod recursive_tests;
