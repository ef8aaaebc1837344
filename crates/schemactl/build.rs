//! Build script that stamps `SCHEMACTL_VERSION` for `schemactl version`.
//!
//! A tagged checkout reports the tag (`1.4.0`, `1.4.0-3-g1a2b3c4`). An
//! untagged one reports the package version plus the commit
//! (`0.1.0+g1a2b3c4`). Outside git the package version is used as is.
//! Packagers can pin the value with `SCHEMACTL_BUILD_VERSION`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=SCHEMACTL_BUILD_VERSION");

    let package = env!("CARGO_PKG_VERSION");
    let version = std::env::var("SCHEMACTL_BUILD_VERSION")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(tag_version)
        .or_else(|| commit(package))
        .unwrap_or_else(|| package.to_string());

    println!("cargo:rustc-env=SCHEMACTL_VERSION={version}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn tag_version() -> Option<String> {
    let described = git(&["describe", "--tags", "--dirty"])?;
    Some(
        described
            .strip_prefix('v')
            .unwrap_or(&described)
            .to_string(),
    )
}

// No tag reachable from HEAD
fn commit(package: &str) -> Option<String> {
    let hash = git(&["rev-parse", "--short", "HEAD"])?;
    Some(format!("{package}+g{hash}"))
}
