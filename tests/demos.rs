//! End-to-end runs of the freestanding binaries.
//!
//! Each test builds the `demos` package through the harness runner, then
//! executes a binary and checks the only things a process leaves behind:
//! its stdout bytes and its exit status.

use std::time::Duration;

use freestanding::runner::Runner;

fn runner() -> Runner {
    Runner::new(Duration::from_secs(30))
}

#[test]
fn hello_writes_greeting_and_exits_42() {
    let runner = runner();
    runner.build().unwrap();
    let outcome = runner.run("hello").unwrap();
    assert_eq!(outcome.stdout, b"Hello world\n");
    assert_eq!(outcome.exit_code, Some(42));
}

#[test]
fn wuhu_writes_cheer_and_exits_cleanly() {
    let runner = runner();
    runner.build().unwrap();
    let outcome = runner.run("wuhu").unwrap();
    assert_eq!(outcome.stdout, b"wuhu\n");
    assert_eq!(outcome.exit_code, Some(0));
}

#[test]
fn every_cataloged_demo_behaves() {
    let runner = runner();
    runner.build().unwrap();
    for demo in freestanding::DEMOS {
        let outcome = runner.run(demo.name).unwrap();
        assert!(demo.check(&outcome).passed, "{} misbehaved", demo.name);
    }
}
