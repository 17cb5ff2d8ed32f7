#![no_std]
#![no_main]

use usys::syscall::{self, STDOUT};

fn main() -> i32 {
    syscall::write(STDOUT, b"Hello world\n");
    42
}

/// Process entry. The loader jumps here with no caller to return to, so
/// the only way out is the exit trap.
#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    let status = main();
    syscall::exit(status);
}

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    syscall::exit(101);
}
