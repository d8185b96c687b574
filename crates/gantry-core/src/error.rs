//! Bootstrap error taxonomy.
//!
//! Four failure categories, none recoverable at this layer: the runtime
//! cannot be brought up, the namespace cannot be loaded, the entry symbol
//! cannot be resolved, or the entry function fails on its own. Each category
//! is its own type so adapters and tests can tell them apart; the umbrella
//! [`BootstrapError`] carries any of them to the process entry point with
//! its message intact.

/// The embedded runtime could not be brought up at all.
#[derive(Debug, Clone, thiserror::Error)]
#[error("embedded runtime unavailable: {reason}")]
pub struct AcquireError {
    /// Human-readable cause (missing linkage, allocation failure, ...).
    pub reason: String,
}

impl AcquireError {
    /// Build from whatever the embedding layer reported.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The target namespace could not be found, or failed to compile or evaluate.
#[derive(Debug, Clone, thiserror::Error)]
#[error("cannot load namespace '{namespace}': {reason}")]
pub struct LoadError {
    /// Namespace that was being loaded.
    pub namespace: String,
    /// What the runtime's loader reported.
    pub reason: String,
}

impl LoadError {
    /// Build from the namespace name and the loader's report.
    pub fn new(namespace: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            reason: reason.into(),
        }
    }
}

/// The entry symbol could not be resolved in the loaded namespace.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    /// Resolution was attempted before the namespace finished loading.
    #[error("namespace '{namespace}' is not loaded")]
    NamespaceNotLoaded {
        /// Namespace the symbol was expected in.
        namespace: String,
    },

    /// The namespace loaded but defines no symbol of this name.
    #[error("symbol '{symbol}' not found in namespace '{namespace}'")]
    SymbolNotFound {
        /// Namespace the symbol was expected in.
        namespace: String,
        /// Symbol that was looked up.
        symbol: String,
    },

    /// The symbol exists but cannot be invoked.
    #[error("symbol '{symbol}' in namespace '{namespace}' is not callable")]
    NotCallable {
        /// Namespace the symbol was found in.
        namespace: String,
        /// Symbol that was looked up.
        symbol: String,
    },
}

/// The entry function was invoked and raised a failure of its own.
///
/// The failure is opaque to the bootstrap layer: `Display` is the verbatim
/// text the runtime rendered for it, with no added framing, so the process
/// diagnostic shows the application's failure and nothing else.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct InvokeError {
    /// The failure as the runtime rendered it.
    pub message: String,
}

impl InvokeError {
    /// Build from the runtime's rendering of the failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A second bootstrap was attempted in the same process.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("bootstrap already ran in this process")]
pub struct AlreadyBootstrapped;

/// Union of everything that can stop the bootstrap chain.
///
/// Every variant displays as its inner error, unchanged. The intended
/// top-level handling is a single `match`-free print-and-exit at the process
/// entry point; see the crate docs.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapError {
    /// The runtime handle could not be acquired.
    #[error("{0}")]
    Unavailable(#[from] AcquireError),

    /// The namespace load step failed.
    #[error("{0}")]
    Load(#[from] LoadError),

    /// The entry symbol resolution step failed.
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// The entry function raised a failure.
    #[error("{0}")]
    Invoke(#[from] InvokeError),

    /// The process-wide bootstrap slot was already claimed.
    #[error("{0}")]
    AlreadyBootstrapped(#[from] AlreadyBootstrapped),
}
