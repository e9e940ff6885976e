use std::env as stdenv;
use std::path::PathBuf;

/// Interpreter-owned state the built-ins read and update.
///
/// Only three things matter to this shell: the home directory (`cd` with no
/// target), the tracked working directory (`pwd` prints it, `ls` reads it,
/// `cd` rewrites it), and the `should_exit` flag `exit` raises for the read
/// loop. All of it is captured once at startup and then passed `&mut` into
/// handlers; nothing here is global.
#[derive(Debug, Clone)]
pub struct Environment {
    /// Where `cd` goes when invoked without a target. `None` when the
    /// process has no HOME variable.
    pub home: Option<PathBuf>,
    /// The working directory commands operate on. Kept in sync with the
    /// process working directory by `cd`.
    pub current_dir: PathBuf,
    /// Raised by `exit`; the read loop stops once it is true.
    pub should_exit: bool,
}

impl Environment {
    /// Snapshot the process state: HOME and the current working directory.
    pub fn new() -> Self {
        Self {
            home: stdenv::var_os("HOME").map(PathBuf::from),
            current_dir: stdenv::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            should_exit: false,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
