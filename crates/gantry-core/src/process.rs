//! Process-wide bootstrap claim.
//!
//! Bootstrap is a once-per-process event. [`Bootstrap::run`] consuming
//! `self` already rules out reuse of one value, but nothing in the type
//! system stops a host from constructing a second chain. [`claim`] closes
//! that gap: the process entry point takes the claim before building the
//! chain, and any later taker gets [`AlreadyBootstrapped`].
//!
//! [`Bootstrap::run`]: crate::Bootstrap::run

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::AlreadyBootstrapped;

static CLAIMED: AtomicBool = AtomicBool::new(false);

/// Take the process-wide bootstrap slot.
///
/// The first caller in the process gets `Ok(())`; every caller after that,
/// on any thread, gets [`AlreadyBootstrapped`]. There is no release.
pub fn claim() -> Result<(), AlreadyBootstrapped> {
    if CLAIMED.swap(true, Ordering::SeqCst) {
        Err(AlreadyBootstrapped)
    } else {
        Ok(())
    }
}

/// Whether the bootstrap slot has been taken.
pub fn claimed() -> bool {
    CLAIMED.load(Ordering::SeqCst)
}
