use anyhow::Result;

fn main() -> Result<()> {
    // The demo binaries bring their own `_start`; drop the C runtime's
    // startup objects so the two do not collide at link time.
    println!("cargo::rustc-link-arg-bins=-nostartfiles");
    println!("cargo::rustc-link-arg-bins=-no-pie");
    // Without startup files nothing provides a dynamic section, yet the
    // linker still emits a PT_INTERP header; the loader then crashes
    // before `_start`. Static linking drops the interpreter request.
    println!("cargo::rustc-link-arg-bins=-static");
    Ok(())
}
