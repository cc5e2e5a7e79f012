/// Environment variable naming the build root, checked when no explicit root is given.
pub const BUILDROOT_ENV: &str = "DARWIN_BUILDROOT";

pub const XREF_ENV: &str = "DARWINXREF";
pub const DARWINBUILD_ENV: &str = "DARWINBUILD";

pub const DEFAULT_XREF: &str = "/usr/local/bin/darwinxref";
pub const DEFAULT_DARWINBUILD: &str = "/usr/local/bin/darwinbuild";

/// Subdirectories every initialized build root must contain.
pub const BUILDROOT_SUBDIRS: [&str; 5] = ["Roots", "Sources", "Symbols", "Headers", "Logs"];
