//! Host tracing entry point
//!
//! wasm32 builds import the host's `trace_values` function; native builds
//! get a stub with the same shape so unit tests and tooling link without
//! the ZX host. The native stub feeds a thread-local capture sink when one
//! is installed (see [`capture_traces`]), which is how tests observe
//! exactly what a call site forwarded.

use crate::value::TraceValue;

#[cfg(target_arch = "wasm32")]
#[link(wasm_import_module = "env")]
unsafe extern "C" {
    /// Records a trace event with a sequence of tagged values.
    ///
    /// # Arguments
    /// * `file_ptr`/`file_len` — UTF-8 source file path
    /// * `line` — 1-based source line
    /// * `msg_ptr`/`msg_len` — UTF-8 message; `^0`..`^9` refer to values
    /// * `values_ptr`/`values_len` — tagged value sequence
    fn trace_values(
        file_ptr: *const u8,
        file_len: u32,
        line: u32,
        msg_ptr: *const u8,
        msg_len: u32,
        values_ptr: *const TraceValue,
        values_len: u32,
    );
}

/// Forwarding shim behind [`trace_values!`](crate::trace_values).
///
/// The macro materializes the fixed-size value array; this hands it to the
/// host unchanged. `values.len()` is always exactly the number of values
/// supplied at the call site.
#[doc(hidden)]
pub fn forward(file: &str, line: u32, message: &str, values: &[TraceValue]) {
    #[cfg(target_arch = "wasm32")]
    unsafe {
        trace_values(
            file.as_ptr(),
            file.len() as u32,
            line,
            message.as_ptr(),
            message.len() as u32,
            values.as_ptr(),
            values.len() as u32,
        );
    }

    #[cfg(all(not(target_arch = "wasm32"), feature = "local-native"))]
    {
        if !capture::try_record(file, line, message, values) {
            // No sink installed: route through the log facade instead
            #[cfg(debug_assertions)]
            log::trace!("{file}:{line} {message} {values:?}");
        }
    }

    #[cfg(all(not(target_arch = "wasm32"), not(feature = "local-native")))]
    {
        let _ = (file, line, message, values);
    }
}

/// A trace call observed by the native capture sink.
#[cfg(all(not(target_arch = "wasm32"), feature = "local-native"))]
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    pub file: String,
    pub line: u32,
    pub message: String,
    pub values: Vec<TraceValue>,
}

/// Run `f` with a capture sink installed on the current thread and return
/// every trace it forwarded, in call order.
///
/// The sink is thread-local, so parallel tests never see each other's
/// traces. Any sink already installed on this thread is suspended for the
/// duration and restored afterwards.
#[cfg(all(not(target_arch = "wasm32"), feature = "local-native"))]
pub fn capture_traces<F: FnOnce()>(f: F) -> Vec<TraceRecord> {
    capture::scoped(f)
}

#[cfg(all(not(target_arch = "wasm32"), feature = "local-native"))]
mod capture {
    use std::cell::RefCell;

    use super::TraceRecord;
    use crate::value::TraceValue;

    thread_local! {
        static SINK: RefCell<Option<Vec<TraceRecord>>> = const { RefCell::new(None) };
    }

    /// Append to the current thread's sink, if one is installed.
    pub(super) fn try_record(file: &str, line: u32, message: &str, values: &[TraceValue]) -> bool {
        SINK.with(|sink| match sink.borrow_mut().as_mut() {
            Some(records) => {
                records.push(TraceRecord {
                    file: file.to_string(),
                    line,
                    message: message.to_string(),
                    values: values.to_vec(),
                });
                true
            }
            None => false,
        })
    }

    pub(super) fn scoped<F: FnOnce()>(f: F) -> Vec<TraceRecord> {
        let prior = SINK.with(|sink| sink.borrow_mut().replace(Vec::new()));
        f();
        SINK.with(|sink| {
            let mut slot = sink.borrow_mut();
            let records = slot.take().unwrap_or_default();
            *slot = prior;
            records
        })
    }
}
