//! Command: print version information.

/// Print the zl-cleanup version to stdout.
#[allow(clippy::print_stdout)] // the version is the command output
pub fn run() {
    println!("zl-cleanup {}", super::version_string());
}
