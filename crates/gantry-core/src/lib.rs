//! Gantry Core - bootstrap chain for embedded dynamic runtimes
//!
//! A compiled host process that carries its application logic in an
//! interpreted language has one job at startup: bring up the embedded
//! runtime, have the runtime's own loader compile and evaluate a single
//! well-known namespace, resolve one well-known symbol in it, and call that
//! symbol with the process argument vector. Nothing is compiled ahead of
//! time; the load step does it on every start, which keeps the host
//! oblivious to how the application is built.
//!
//! This crate is that chain, reduced to types:
//!
//! - [`DynamicRuntime`] and [`Callable`] fence off the one genuinely dynamic
//!   boundary (lookup by string name) behind a typed interface.
//! - [`EntryPoint`] names the namespace and symbol to hand control to, as
//!   build-time constants.
//! - [`Bootstrap`] runs the three steps in order - load, resolve, invoke -
//!   and forwards the argument vector verbatim.
//! - [`BootstrapError`] is the closed union of everything that can stop the
//!   chain; nothing is caught or rewrapped below the process entry point.
//! - [`process::claim`] makes "at most one bootstrap per process" explicit
//!   for hosts driving a real runtime.
//!
//! # Example
//!
//! ```ignore
//! use gantry_core::{Bootstrap, EntryPoint};
//!
//! const ENTRY: EntryPoint = EntryPoint::new("app.boot", "bootstrap");
//!
//! fn main() {
//!     let args: Vec<String> = std::env::args().skip(1).collect();
//!     if let Err(err) = boot(&args) {
//!         eprintln!("Error: {}", err);
//!         std::process::exit(1);
//!     }
//! }
//!
//! fn boot(args: &[String]) -> Result<(), gantry_core::BootstrapError> {
//!     gantry_core::process::claim()?;
//!     let runtime = acquire_runtime()?; // some DynamicRuntime impl
//!     Bootstrap::new(runtime, ENTRY).run(args)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod bootstrap;
mod entry;
mod error;
pub mod process;
mod runtime;

pub use bootstrap::{Bootstrap, EntryValue};
pub use entry::EntryPoint;
pub use error::{
    AcquireError, AlreadyBootstrapped, BootstrapError, InvokeError, LoadError, ResolveError,
};
pub use runtime::{Callable, DynamicRuntime};
