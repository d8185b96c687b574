//! The capability seam between the host and an embedded runtime.
//!
//! [`DynamicRuntime`] is the narrow interface a language embedding must
//! provide: load a namespace, resolve a symbol in it. Resolution yields a
//! [`Callable`], a first-class handle that can be invoked later. The split
//! keeps "the symbol exists" and "the symbol ran" as separate observable
//! steps, which is what makes the failure taxonomy in [`crate::error`]
//! meaningful.

use crate::error::{InvokeError, LoadError, ResolveError};

/// A resolved function handle, ready to be invoked.
///
/// What invocation returns is up to the embedding: a runtime that marshals
/// results back to the host picks a concrete `Value`, one that treats the
/// entry function as the program's whole lifetime uses `()`.
pub trait Callable {
    /// What a successful invocation produces.
    type Value;

    /// Call the function with `args` as its single sequence argument.
    ///
    /// The slice is passed through verbatim: no element is dropped,
    /// reordered, rewritten, or interpreted, whatever it looks like.
    /// A failure raised inside the function comes back as an
    /// [`InvokeError`] whose message is the runtime's own rendering.
    fn invoke(&self, args: &[String]) -> Result<Self::Value, InvokeError>;
}

/// The operations a language embedding exposes to the bootstrap chain.
///
/// Implementations are expected to be cheap to probe and honest about
/// ordering: [`resolve`](DynamicRuntime::resolve) on a namespace that was
/// never [`load`](DynamicRuntime::load)ed must fail with
/// [`ResolveError::NamespaceNotLoaded`] rather than guess.
pub trait DynamicRuntime {
    /// The handle type produced by resolution.
    type Function: Callable;

    /// Make `namespace` and everything it defines available.
    ///
    /// Loading is idempotent in the require sense: a namespace that is
    /// already loaded is not evaluated again.
    fn load(&self, namespace: &str) -> Result<(), LoadError>;

    /// Look up `symbol` in a loaded `namespace`.
    fn resolve(&self, namespace: &str, symbol: &str) -> Result<Self::Function, ResolveError>;
}
