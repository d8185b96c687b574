//! The bootstrap chain: load, resolve, invoke.

use crate::entry::EntryPoint;
use crate::error::BootstrapError;
use crate::runtime::{Callable, DynamicRuntime};

/// What the entry function returns through a given runtime.
pub type EntryValue<R> = <<R as DynamicRuntime>::Function as Callable>::Value;

/// One runtime, one entry point, one run.
///
/// `Bootstrap` owns the sequencing contract of the whole crate: the
/// namespace is loaded exactly once, the symbol is resolved only after the
/// load succeeded, and the resolved function is invoked exactly once with
/// the arguments it was given. [`run`](Bootstrap::run) consumes `self`, so
/// a second run through the same value does not typecheck.
///
/// Every step's failure converts into [`BootstrapError`] and returns
/// immediately; nothing is retried or swallowed here.
pub struct Bootstrap<R: DynamicRuntime> {
    runtime: R,
    entry: EntryPoint,
}

impl<R: DynamicRuntime> Bootstrap<R> {
    /// Pair a runtime with the entry point it will hand control to.
    pub fn new(runtime: R, entry: EntryPoint) -> Self {
        Self { runtime, entry }
    }

    /// The entry point this bootstrap targets.
    pub fn entry(&self) -> EntryPoint {
        self.entry
    }

    /// Run the chain: load the namespace, resolve the symbol, invoke it
    /// with `args` verbatim.
    ///
    /// On success the entry function's result is handed back untouched.
    /// On failure the first failing step's error is handed back untouched.
    pub fn run(self, args: &[String]) -> Result<EntryValue<R>, BootstrapError> {
        self.runtime.load(self.entry.namespace())?;
        let function = self
            .runtime
            .resolve(self.entry.namespace(), self.entry.symbol())?;
        Ok(function.invoke(args)?)
    }
}
