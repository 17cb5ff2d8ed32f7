//! Userspace system call layer for x86-64 Linux.
//!
//! Everything here sits below the standard library: no buffering, no
//! errno translation, no startup code. Freestanding binaries link this
//! to talk to the kernel directly.

#![no_std]

#[cfg(not(all(target_arch = "x86_64", target_os = "linux")))]
compile_error!("usys targets x86-64 Linux only");

pub mod syscall;
