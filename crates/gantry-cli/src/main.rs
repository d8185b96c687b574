//! Bootstrap host binary.
//!
//! Starts the embedded QuickJS runtime, loads the fixed bootstrap namespace,
//! and invokes its entry function with the process arguments. Everything
//! after that belongs to the application: this binary parses no flags and
//! owns no configuration beyond two build-time constants. Any failure in
//! the chain lands in one place: a diagnostic on stderr and a non-zero exit.
//!
//! Arguments must be valid Unicode; the platform argv bridge aborts the
//! process before bootstrap otherwise.

use std::env;

use gantry_core::{process, Bootstrap, BootstrapError, EntryPoint};
use gantry_quickjs::ScriptHost;

/// Namespace evaluated at startup. Fixed at build time.
const BOOTSTRAP_NAMESPACE: &str = "app.boot";

/// Symbol invoked with the process arguments. Fixed at build time.
const ENTRY_SYMBOL: &str = "bootstrap";

const ENTRY: EntryPoint = EntryPoint::new(BOOTSTRAP_NAMESPACE, ENTRY_SYMBOL);

fn main() {
    // Everything after the program name, untouched. `--help` included:
    // no argument means anything to this layer.
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(err) = boot(&args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn boot(args: &[String]) -> Result<(), BootstrapError> {
    process::claim()?;
    let host = ScriptHost::new()?;
    Bootstrap::new(host, ENTRY).run(args)
}
