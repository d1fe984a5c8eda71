use std::env;
use std::sync::OnceLock;

use libloading::Library;
use log::debug;
use thiserror::Error;

use crate::api::TorchApi;

/// Environment variable naming the exact shared library to load, bypassing
/// the candidate search.
pub const NATIVE_LIB_ENV: &str = "FERROTORCH_NATIVE_LIB";

const CANDIDATES: &[&str] = &[
    "libLibTorchSharp.so",
    "libLibTorchSharp.dylib",
    "LibTorchSharp.dll",
];

/// Errors raised while obtaining the native function table.
#[derive(Error, Debug)]
pub enum SysError {
    #[error("native library not found (tried {tried}); set FERROTORCH_NATIVE_LIB to the shim path")]
    LibraryNotFound { tried: String },

    #[error("native library is missing symbol {symbol}: {detail}")]
    MissingSymbol { symbol: String, detail: String },

    #[error("native bindings unavailable: {0}")]
    Unavailable(String),

    #[error("native bindings are already initialized")]
    AlreadyInitialized,
}

/// The resolved function table, plus the `Library` that keeps the shared
/// object mapped for the lifetime of the process. `lib` is `None` when the
/// table was provided through [`install`].
pub struct TorchBindings {
    _lib: Option<Library>,
    pub api: TorchApi,
}

static BINDINGS: OnceLock<Result<TorchBindings, String>> = OnceLock::new();

/// Returns the process-wide function table, loading the native library on
/// first use. The outcome, success or failure, is cached; a process never
/// retries the load.
pub fn bindings() -> Result<&'static TorchBindings, SysError> {
    let slot = BINDINGS.get_or_init(|| match load() {
        Ok(bindings) => Ok(bindings),
        Err(err) => Err(err.to_string()),
    });
    match slot {
        Ok(bindings) => Ok(bindings),
        Err(msg) => Err(SysError::Unavailable(msg.clone())),
    }
}

/// True when the native library has been (or can be) loaded.
pub fn is_available() -> bool {
    bindings().is_ok()
}

/// Provide the function table directly instead of loading a shared library.
///
/// Intended for embedders that link the shim statically and for test
/// harnesses that substitute an in-process implementation of the C surface.
/// Must be called before the first [`bindings`] call; fails once any table
/// exists.
pub fn install(api: TorchApi) -> Result<(), SysError> {
    BINDINGS
        .set(Ok(TorchBindings { _lib: None, api }))
        .map_err(|_| SysError::AlreadyInitialized)?;
    debug!("native function table installed by host");
    Ok(())
}

fn load() -> Result<TorchBindings, SysError> {
    let lib = open_library()?;
    let api = TorchApi::resolve(&lib)?;
    Ok(TorchBindings {
        _lib: Some(lib),
        api,
    })
}

fn open_library() -> Result<Library, SysError> {
    if let Ok(path) = env::var(NATIVE_LIB_ENV) {
        // SAFETY: dlopen of a user-designated shim; initialization side
        // effects are the shim's documented contract.
        return match unsafe { Library::new(&path) } {
            Ok(lib) => {
                debug!("loaded native library from {NATIVE_LIB_ENV}={path}");
                Ok(lib)
            }
            Err(err) => Err(SysError::LibraryNotFound {
                tried: format!("{path}: {err}"),
            }),
        };
    }

    for candidate in CANDIDATES {
        // SAFETY: dynamic library probe; no symbols are invoked here.
        if let Ok(lib) = unsafe { Library::new(candidate) } {
            debug!("loaded native library {candidate}");
            return Ok(lib);
        }
    }

    Err(SysError::LibraryNotFound {
        tried: CANDIDATES.join(", "),
    })
}
