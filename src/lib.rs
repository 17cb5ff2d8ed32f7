//! Host-side harness for the freestanding demos.
//!
//! The demo binaries in the `demos` package have nothing below them: no
//! runtime, no libc startup, no error reporting. The only way to verify
//! them is from outside, by running each one and looking at the two
//! things a process leaves behind — the bytes on its standard output and
//! its exit status. This crate knows what each demo is supposed to leave
//! behind and checks the observation against that.

use serde::Serialize;

use crate::runner::Outcome;

pub mod runner;

/// A freestanding demo binary and the behavior expected of it.
pub struct Demo {
    /// Binary name within the `demos` package.
    pub name: &'static str,
    /// Exact bytes the demo must put on standard output.
    pub expected_stdout: &'static [u8],
    /// Exit status the demo must terminate with.
    pub expected_exit: i32,
}

/// Every demo in the workspace.
pub const DEMOS: &[Demo] = &[
    Demo {
        name: "hello",
        expected_stdout: b"Hello world\n",
        expected_exit: 42,
    },
    Demo {
        name: "wuhu",
        expected_stdout: b"wuhu\n",
        expected_exit: 0,
    },
];

/// Look a demo up by binary name.
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.name == name)
}

#[derive(Debug, Clone, Serialize)]
pub struct Datum {
    pub demo: &'static str,
    pub exit_code: Option<i32>,
    pub stdout_len: usize,
    pub passed: bool,
    pub debug: bool,
}

impl Demo {
    /// Compare an observed run against this demo's expected behavior.
    pub fn check(&self, outcome: &Outcome) -> Datum {
        let passed = outcome.stdout == self.expected_stdout
            && outcome.exit_code == Some(self.expected_exit);
        Datum {
            demo: self.name,
            exit_code: outcome.exit_code,
            stdout_len: outcome.stdout.len(),
            passed,
            debug: cfg!(debug_assertions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> &'static Demo {
        find("hello").unwrap()
    }

    #[test]
    fn matching_outcome_passes() {
        let outcome = Outcome {
            stdout: b"Hello world\n".to_vec(),
            exit_code: Some(42),
        };
        assert!(hello().check(&outcome).passed);
    }

    #[test]
    fn wrong_exit_code_fails() {
        let outcome = Outcome {
            stdout: b"Hello world\n".to_vec(),
            exit_code: Some(0),
        };
        assert!(!hello().check(&outcome).passed);
    }

    #[test]
    fn extra_output_fails() {
        let outcome = Outcome {
            stdout: b"Hello world\n\n".to_vec(),
            exit_code: Some(42),
        };
        assert!(!hello().check(&outcome).passed);
    }

    #[test]
    fn death_by_signal_fails() {
        let outcome = Outcome {
            stdout: b"Hello world\n".to_vec(),
            exit_code: None,
        };
        assert!(!hello().check(&outcome).passed);
    }

    #[test]
    fn unknown_demo_is_absent() {
        assert!(find("nonesuch").is_none());
    }
}
