//! Simulated contact-form submission.
//!
//! There is no backend: a submit walks the button through a sending and a
//! sent phase on timers, then resets the form. The DOM layer owns the timers
//! and calls back into [`ContactFormState`] when each one fires.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

/// Lifecycle of one simulated submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactFormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// What the DOM layer must do after a phase change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStep {
    /// Re-render the button and call back after `after_ms`.
    Schedule { after_ms: u32 },
    /// Reset the form fields and re-render the button.
    Reset,
}

/// Submit-button state for the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    phase: ContactFormPhase,
    label: String,
    sending_ms: u32,
    sent_ms: u32,
}

impl ContactFormState {
    /// `label` is the button text captured before the first submit.
    pub fn new(label: impl Into<String>, sending_ms: u32, sent_ms: u32) -> Self {
        Self {
            phase: ContactFormPhase::Idle,
            label: label.into(),
            sending_ms,
            sent_ms,
        }
    }

    pub fn phase(&self) -> ContactFormPhase {
        self.phase
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Start a submission. Ignored unless idle, since the button is disabled
    /// for the whole cycle.
    pub fn submit(&mut self) -> Option<FormStep> {
        if self.phase != ContactFormPhase::Idle {
            return None;
        }
        self.phase = ContactFormPhase::Sending;
        Some(FormStep::Schedule { after_ms: self.sending_ms })
    }

    /// The simulated request finished.
    pub fn sending_elapsed(&mut self) -> Option<FormStep> {
        if self.phase != ContactFormPhase::Sending {
            return None;
        }
        self.phase = ContactFormPhase::Sent;
        Some(FormStep::Schedule { after_ms: self.sent_ms })
    }

    /// The confirmation has been shown long enough.
    pub fn sent_elapsed(&mut self) -> Option<FormStep> {
        if self.phase != ContactFormPhase::Sent {
            return None;
        }
        self.phase = ContactFormPhase::Idle;
        Some(FormStep::Reset)
    }

    /// Dispatch whichever timer belongs to the current phase.
    pub fn timer_elapsed(&mut self) -> Option<FormStep> {
        match self.phase {
            ContactFormPhase::Idle => None,
            ContactFormPhase::Sending => self.sending_elapsed(),
            ContactFormPhase::Sent => self.sent_elapsed(),
        }
    }
}
