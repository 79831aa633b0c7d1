#[macro_use]
extern crate quickcheck_macros;

#[path = "../../src/test/quick.rs"]
mod quick;

mod heap;
mod list;
mod map;
mod median;

pub(crate) use quick::{ListOp, Op};

/// Routes the crate's `tracing` events to the test output. Safe to call from
/// every test; only the first call installs the subscriber.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
