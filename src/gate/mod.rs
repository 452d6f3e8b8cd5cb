//! Confirmation gate: deferred execution behind an explicit approval step.
//!
//! Instead of stashing a callback, the gate holds the guarded action as a
//! plain value alongside the title/description the confirmation surface
//! should display. The surface resolves the request with `approve` (which
//! yields the action exactly once) or `dismiss` (which drops it). Arming
//! the gate again overwrites any request still pending, so only the newest
//! action can ever fire.
//!
//! The gate carries no approval criteria of its own; whatever check the
//! confirmation surface performs (passphrase, plain acknowledgement) stays
//! entirely on that side.

/// A guarded action waiting for approval, plus the prompt text to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRequest<A> {
    /// The action to deliver on approval
    pub action: A,
    /// Prompt title (e.g., "EDIT TEAM")
    pub title: String,
    /// Prompt body text
    pub description: String,
}

/// Holds at most one pending request.
#[derive(Debug, Clone)]
pub struct ConfirmationGate<A> {
    pending: Option<GateRequest<A>>,
}

impl<A> Default for ConfirmationGate<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> ConfirmationGate<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate, replacing any request still pending.
    pub fn request(
        &mut self,
        action: A,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.pending = Some(GateRequest {
            action,
            title: title.into(),
            description: description.into(),
        });
    }

    /// The request awaiting resolution, if any.
    pub fn pending(&self) -> Option<&GateRequest<A>> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Approve the pending request, yielding its action exactly once.
    /// Returns `None` when nothing is pending (including repeat approvals).
    pub fn approve(&mut self) -> Option<A> {
        self.pending.take().map(|req| req.action)
    }

    /// Dismiss the pending request; its action is never delivered.
    pub fn dismiss(&mut self) {
        self.pending = None;
    }
}
