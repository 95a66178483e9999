//! Confirmation capability gating destructive store operations.
//!
//! # Responsibility
//! - Abstract the yes/no prompt so the store works without a UI.
//! - Ship fixed-answer gates for tests and non-interactive callers.

/// Injected yes/no gate. Destructive operations mutate state only when
/// `confirm` returns `true`.
pub trait ConfirmGate {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that approves every request. Suitable for non-interactive callers
/// that pre-compute the decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmGate for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Gate that declines every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

impl ConfirmGate for AlwaysDecline {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
