//! Entry references: where bootstrap hands control.

use std::fmt;

/// A (namespace, symbol) pair naming the function invoked after bootstrap.
///
/// Both parts are build-time constants - the `&'static str` fields make that
/// a property of the type, not a convention. The referenced namespace must
/// define a symbol of exactly this name, accepting a single sequence of
/// strings, by the time the symbol is resolved; otherwise bootstrap fails
/// with a resolution error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryPoint {
    namespace: &'static str,
    symbol: &'static str,
}

impl EntryPoint {
    /// Create an entry point from build-time identifiers.
    pub const fn new(namespace: &'static str, symbol: &'static str) -> Self {
        Self { namespace, symbol }
    }

    /// Namespace that must be loaded before the symbol can be resolved.
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Symbol looked up in the namespace once it has loaded.
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.symbol)
    }
}
