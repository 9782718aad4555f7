//! Feature-dependent shims.
//!
//! Diagnostic events go through `trace_event!` and `debug_event!`, which forward to
//! `tracing` when the `tracing` feature is enabled and otherwise expand to a block that
//! only borrows the field values, so that call sites compile identically either way.

#[macro_use]
mod definitions {
    cfg_if::cfg_if! {
        if #[cfg(feature = "tracing")] {
            macro_rules! trace_event {
                ($($field:ident = $value:expr),* ; $msg:literal) => {
                    tracing::trace!($($field = $value,)* $msg)
                };
            }

            macro_rules! debug_event {
                ($($field:ident = $value:expr),* ; $msg:literal) => {
                    tracing::debug!($($field = $value,)* $msg)
                };
            }
        } else {
            macro_rules! trace_event {
                ($($field:ident = $value:expr),* ; $msg:literal) => {{
                    $(let _ = &$value;)*
                }};
            }

            macro_rules! debug_event {
                ($($field:ident = $value:expr),* ; $msg:literal) => {{
                    $(let _ = &$value;)*
                }};
            }
        }
    }
}
