//! QuickJS embedding of the gantry runtime interface.
//!
//! [`ScriptHost`] owns an embedded QuickJS runtime and implements
//! `gantry_core::DynamicRuntime` over it: namespaces are JavaScript source
//! files found on a search path, compiled by the engine the first time they
//! are loaded, and symbols resolve to [`ScriptFunction`] handles that stay
//! valid for the life of the host.

mod loader;
mod runtime;

pub use runtime::{ScriptFunction, ScriptHost};
