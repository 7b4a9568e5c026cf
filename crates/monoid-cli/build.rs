//! Embeds the release version as `MONOID_VERSION` for `monoid --version`.
//!
//! Packagers building from a tarball set `MONOID_BUILD_VERSION`; otherwise
//! the version comes from `git describe`, then from Cargo.toml.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=MONOID_BUILD_VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let version = env::var("MONOID_BUILD_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=MONOID_VERSION={}", version.trim());
}

/// `git describe`, with the `v` of release tags dropped.
fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())?;

    let described = String::from_utf8(output.stdout).ok()?;
    let described = described.trim();
    let described = described.strip_prefix('v').unwrap_or(described);

    (!described.is_empty()).then(|| described.to_string())
}
