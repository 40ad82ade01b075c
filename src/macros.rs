/// Splits a bit index into (unit index from the least-significant end, bit
/// offset within that unit).
macro_rules! unitpos {
    ($idx:expr, $bits:expr) => {{
        let idx: usize = $idx;
        let bits = $bits as usize;
        (idx / bits, idx % bits)
    }};
}

/// Emits a `tracing` event at trace level when the `tracing` feature is on.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($tt:tt)*) => {
        tracing::trace!($($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($tt:tt)*) => {};
}

pub(crate) use trace_event;
pub(crate) use unitpos;
