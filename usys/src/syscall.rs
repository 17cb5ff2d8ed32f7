//! Raw system call invocation.
//!
//! The kernel dispatches on the number in `rax` and reads the first three
//! operands from `rdi`, `rsi` and `rdx` at the instant the `syscall`
//! instruction executes, so each helper marshals its arguments and traps
//! inside a single `asm!` block; nothing may be reordered between the
//! register loads and the trap. `rcx` and `r11` are clobbered by the
//! instruction itself.
//!
//! Return values are deliberately never inspected: a short write or a
//! kernel-level error is silently possible and unreported. This layer
//! shows the bare mechanism, nothing more.

use core::arch::asm;

/// `write(2)`.
pub const WRITE: usize = 1;
/// `exit(2)`.
pub const EXIT: usize = 60;

/// The standard output descriptor of a freshly started process.
pub const STDOUT: i32 = 1;

/// Issue a three-operand system call, discarding the kernel's result.
///
/// # Safety
///
/// `nr` and the operands are handed to the kernel untranslated; the
/// caller is responsible for them naming a system call whose side
/// effects are sound (e.g. any pointer operand must be valid for the
/// access the kernel will perform).
#[inline(always)]
pub unsafe fn syscall3(nr: usize, a1: usize, a2: usize, a3: usize) {
    unsafe {
        asm!(
            "syscall",
            inlateout("rax") nr => _,
            in("rdi") a1,
            in("rsi") a2,
            in("rdx") a3,
            out("rcx") _,
            out("r11") _,
            options(nostack),
        );
    }
}

/// Issue a one-operand system call that does not come back, e.g. `exit`.
///
/// # Safety
///
/// The named system call must actually never return; if the kernel did
/// resume us, execution would fall off the end of the asm block.
#[inline(always)]
pub unsafe fn syscall1_noreturn(nr: usize, a1: usize) -> ! {
    unsafe {
        asm!(
            "syscall",
            in("rax") nr,
            in("rdi") a1,
            options(noreturn, nostack),
        );
    }
}

/// Emit the bytes of `buf` to the descriptor `fd`.
///
/// No result is observed: a bad descriptor, a kernel error, or a short
/// write all leave the caller none the wiser. An empty `buf` still
/// performs the trap and transfers nothing.
pub fn write(fd: i32, buf: &[u8]) {
    unsafe { syscall3(WRITE, fd as usize, buf.as_ptr() as usize, buf.len()) }
}

/// Terminate the calling process with `status`.
///
/// The externally observable exit status is `status` modulo 256. Control
/// never returns; there is no process left to return to.
pub fn exit(status: i32) -> ! {
    unsafe { syscall1_noreturn(EXIT, status as usize) }
}
