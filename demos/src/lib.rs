//! Freestanding demo programs.
//!
//! The binaries under `src/bin/` each define their own `_start` and run
//! with no runtime at all; this library half holds the routines they
//! share with the host-side tests.

#![no_std]

use usys::syscall::{self, STDOUT};

/// Write the 5 bytes `wuhu\n` to standard output.
///
/// Unlike an entrypoint this issues no terminate call: it returns
/// normally to whoever invoked it, freestanding or not.
pub fn cheer() {
    syscall::write(STDOUT, b"wuhu\n");
}
