//! Logging macros shared across the workspace.

/// Emits a user-facing success line.
///
/// The CLI formatter renders events with this target in its highlighted
/// style; everywhere else it behaves like a plain `tracing::info!`.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "findr::success", $($arg)*)
    };
}
