//! The QuickJS-backed runtime host.
//!
//! One [`ScriptHost`] is one engine instance plus one execution context.
//! Namespace loads evaluate the backing source file inside that context, so
//! everything a namespace defines lands in its global scope; resolution then
//! picks functions back out of it. Engine exceptions never cross the context
//! boundary as live values, only as their rendered text.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use gantry_core::{AcquireError, Callable, DynamicRuntime, InvokeError, LoadError, ResolveError};
use rquickjs::{CatchResultExt, Context, Function, Persistent, Runtime, Value};

use crate::loader;

/// An embedded QuickJS engine exposed through the dynamic runtime interface.
pub struct ScriptHost {
    #[allow(dead_code)] // Kept alive for context lifetime
    runtime: Runtime,
    context: Context,
    search_path: Vec<PathBuf>,
    loaded: RefCell<HashSet<String>>,
}

impl ScriptHost {
    /// Bring up a host that loads namespaces from the working directory.
    pub fn new() -> Result<Self, AcquireError> {
        Self::with_search_path(vec![PathBuf::from(".")])
    }

    /// Bring up a host with an explicit namespace search path.
    pub fn with_search_path(search_path: Vec<PathBuf>) -> Result<Self, AcquireError> {
        let runtime = Runtime::new().map_err(acquire_failure)?;
        let context = Context::full(&runtime).map_err(acquire_failure)?;

        let host = Self {
            runtime,
            context,
            search_path,
            loaded: RefCell::new(HashSet::new()),
        };
        host.install_host_bindings()?;
        Ok(host)
    }

    // Bare QuickJS ships no I/O, so scripts get a `print` wired to the
    // host's stdout. That is the whole host surface; anything richer
    // belongs to the application layer.
    fn install_host_bindings(&self) -> Result<(), AcquireError> {
        self.context
            .with(|ctx| {
                let print = Function::new(ctx.clone(), |line: String| {
                    println!("{}", line);
                })?;
                ctx.globals().set("print", print)?;
                Ok::<_, rquickjs::Error>(())
            })
            .map_err(acquire_failure)
    }
}

fn acquire_failure(err: rquickjs::Error) -> AcquireError {
    AcquireError::new(err.to_string())
}

impl DynamicRuntime for ScriptHost {
    type Function = ScriptFunction;

    fn load(&self, namespace: &str) -> Result<(), LoadError> {
        // Require semantics: a namespace that already evaluated once is
        // not evaluated again. Failed loads are not memoized.
        if self.loaded.borrow().contains(namespace) {
            return Ok(());
        }

        let path = loader::find_namespace_file(&self.search_path, namespace)
            .map_err(|reason| LoadError::new(namespace, reason))?;

        self.context
            .with(|ctx| {
                ctx.eval_file::<Value, _>(&path)
                    .catch(&ctx)
                    .map(|_| ())
                    .map_err(|caught| caught.to_string())
            })
            .map_err(|reason| LoadError::new(namespace, reason))?;

        self.loaded.borrow_mut().insert(namespace.to_string());
        Ok(())
    }

    fn resolve(&self, namespace: &str, symbol: &str) -> Result<ScriptFunction, ResolveError> {
        if !self.loaded.borrow().contains(namespace) {
            return Err(ResolveError::NamespaceNotLoaded {
                namespace: namespace.to_string(),
            });
        }

        self.context.with(|ctx| {
            let value: Value = ctx.globals().get(symbol).map_err(|_| {
                ResolveError::SymbolNotFound {
                    namespace: namespace.to_string(),
                    symbol: symbol.to_string(),
                }
            })?;

            if value.is_undefined() || value.is_null() {
                return Err(ResolveError::SymbolNotFound {
                    namespace: namespace.to_string(),
                    symbol: symbol.to_string(),
                });
            }

            let function = value
                .as_function()
                .cloned()
                .ok_or_else(|| ResolveError::NotCallable {
                    namespace: namespace.to_string(),
                    symbol: symbol.to_string(),
                })?;

            Ok(ScriptFunction {
                context: self.context.clone(),
                handle: Persistent::save(&ctx, function),
            })
        })
    }
}

/// A resolved script function, held as an engine-pinned handle.
///
/// The handle stays valid for the life of the engine, independent of the
/// borrow it was resolved under. Invocation reenters the context, passes the
/// arguments as a single array of strings, and discards whatever the
/// function returns: through this embedding the entry function runs for its
/// effects.
pub struct ScriptFunction {
    context: Context,
    handle: Persistent<Function<'static>>,
}

// Engine internals have no useful rendering of their own.
impl fmt::Debug for ScriptFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptFunction").finish_non_exhaustive()
    }
}

impl Callable for ScriptFunction {
    type Value = ();

    fn invoke(&self, args: &[String]) -> Result<(), InvokeError> {
        self.context.with(|ctx| {
            let function = self
                .handle
                .clone()
                .restore(&ctx)
                .map_err(|err| InvokeError::new(err.to_string()))?;

            function
                .call::<_, Value>((args.to_vec(),))
                .catch(&ctx)
                .map(|_| ())
                .map_err(|caught| InvokeError::new(caught.to_string()))
        })
    }
}
