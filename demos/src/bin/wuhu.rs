#![no_std]
#![no_main]

use usys::syscall;

#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    demos::cheer();
    syscall::exit(0);
}

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    syscall::exit(101);
}
