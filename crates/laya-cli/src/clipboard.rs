//! Best-effort clipboard writes.
//!
//! The coupon "visit" and invite flows copy a code or link before handing
//! off. A headless or locked-down environment has no clipboard; that is
//! never an error, the code is printed either way.

/// Copy `text` to the system clipboard. Returns whether it landed.
pub fn copy_best_effort(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "clipboard unavailable");
            false
        }
    }
}
