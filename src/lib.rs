//! Sandbox-aware logging bridge for ZX games
//!
//! Game code runs inside a WASM sandbox that lacks the facilities a full
//! logging stack needs (threads, atomics, clocks), so verbose logging
//! cannot merely be silenced at runtime: it has to compile out. This crate
//! bridges the two worlds:
//!
//! - [`trace_values!`] forwards a message plus tagged values to the host's
//!   `trace_values` entry point. Call sites compile to nothing in release
//!   builds.
//! - [`dlog!`] and [`debug_check!`] provide debug logging and debug-time
//!   assertions through the `log` facade. They exist only in local native
//!   debug builds (`local-native` feature AND `debug_assertions`); in every
//!   other configuration they expand to nothing and the backend is not
//!   linked at all.
//!
//! # Build modes
//!
//! | `local-native` | `debug_assertions` | result                                      |
//! |----------------|--------------------|---------------------------------------------|
//! | on             | on                 | console logger, fatal handling, debug checks |
//! | on             | off                | all debug machinery elided                   |
//! | off (sandbox)  | any                | no backend linked; crate is `no_std`         |
//!
//! `trace_values!` is gated on `debug_assertions` alone: the host trace API
//! exists in sandboxed debug builds too, unlike the native logging backend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nether_log::trace_values;
//!
//! fn on_spawn(instance_id: u32, x: f32) {
//!     trace_values!("spawn ^0 at ^1", instance_id, x);
//! }
//! ```

#![cfg_attr(not(feature = "local-native"), no_std)]

mod value;

#[doc(hidden)]
pub mod host;

#[cfg(all(feature = "local-native", debug_assertions, not(target_arch = "wasm32")))]
pub mod fatal;
#[cfg(all(feature = "local-native", debug_assertions, not(target_arch = "wasm32")))]
pub mod logger;

pub use value::{TraceValue, ValueKind};

#[cfg(all(not(target_arch = "wasm32"), feature = "local-native"))]
pub use host::{TraceRecord, capture_traces};

/// The `log` facade the backend implements, re-exported for callers and for
/// macro expansion.
#[cfg(all(feature = "local-native", debug_assertions, not(target_arch = "wasm32")))]
pub use log;

/// Trace a message plus tagged values through the host.
///
/// ```rust,ignore
/// trace_values!("instance ID = ^0", instance_id);
/// ```
///
/// Each value is converted with [`TraceValue::from`], packed into a
/// fixed-size array in call order, and handed to the host `trace_values`
/// entry point together with the call site's file and line. The host
/// receives exactly as many values as were written here.
///
/// In non-debug builds the call site compiles to nothing; the value
/// expressions are not evaluated.
#[macro_export]
macro_rules! trace_values {
    ($message:expr $(, $value:expr)* $(,)?) => {{
        #[cfg(debug_assertions)]
        {
            let values = [$($crate::TraceValue::from($value)),*];
            $crate::host::forward(file!(), line!(), $message, &values);
        }
    }};
}

/// Log through the facade at the given level, local native debug builds
/// only.
///
/// ```rust,ignore
/// dlog!(info, "tick {} took {}ms", tick, ms);
/// ```
#[cfg(all(feature = "local-native", debug_assertions, not(target_arch = "wasm32")))]
#[macro_export]
macro_rules! dlog {
    ($level:ident, $($arg:tt)+) => {
        $crate::log::$level!($($arg)+)
    };
}

/// Log through the facade at the given level (no-op in this build).
#[cfg(not(all(feature = "local-native", debug_assertions, not(target_arch = "wasm32"))))]
#[macro_export]
macro_rules! dlog {
    ($level:ident, $($arg:tt)+) => {{}};
}

/// Debug-time assertion routed through a [`fatal::FatalHandler`].
///
/// Evaluates to `Result<(), FatalError>` so callers can `?` it inside
/// debug-gated code; an abort-mode handler never returns from a failed
/// check. Without a message the failed condition itself is reported.
#[cfg(all(feature = "local-native", debug_assertions, not(target_arch = "wasm32")))]
#[macro_export]
macro_rules! debug_check {
    ($handler:expr, $cond:expr $(,)?) => {
        $crate::debug_check!($handler, $cond, "check failed: {}", stringify!($cond))
    };
    ($handler:expr, $cond:expr, $($arg:tt)+) => {
        if $cond {
            ::core::result::Result::Ok(())
        } else {
            $handler.fatal(file!(), line!(), format!($($arg)+))
        }
    };
}

/// Debug-time assertion (no-op in this build; expands to `()`).
#[cfg(not(all(feature = "local-native", debug_assertions, not(target_arch = "wasm32"))))]
#[macro_export]
macro_rules! debug_check {
    ($handler:expr, $cond:expr $(, $($arg:tt)+)?) => {
        ()
    };
}
