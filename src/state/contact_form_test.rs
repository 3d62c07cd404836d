use super::*;

fn form() -> ContactFormState {
    ContactFormState::new("Send Message", 1500, 2000)
}

#[test]
fn new_form_is_idle_with_captured_label() {
    let form = form();
    assert_eq!(form.phase(), ContactFormPhase::Idle);
    assert_eq!(form.label(), "Send Message");
}

#[test]
fn full_cycle_returns_to_idle() {
    let mut form = form();
    assert_eq!(form.submit(), Some(FormStep::Schedule { after_ms: 1500 }));
    assert_eq!(form.phase(), ContactFormPhase::Sending);
    assert_eq!(form.sending_elapsed(), Some(FormStep::Schedule { after_ms: 2000 }));
    assert_eq!(form.phase(), ContactFormPhase::Sent);
    assert_eq!(form.sent_elapsed(), Some(FormStep::Reset));
    assert_eq!(form.phase(), ContactFormPhase::Idle);
    assert_eq!(form.label(), "Send Message");
}

#[test]
fn submit_while_busy_is_ignored() {
    let mut form = form();
    form.submit();
    assert_eq!(form.submit(), None);
    form.sending_elapsed();
    assert_eq!(form.submit(), None);
    assert_eq!(form.phase(), ContactFormPhase::Sent);
}

#[test]
fn stray_timer_callbacks_are_ignored() {
    let mut form = form();
    assert_eq!(form.sending_elapsed(), None);
    assert_eq!(form.sent_elapsed(), None);
    assert_eq!(form.phase(), ContactFormPhase::Idle);
}

#[test]
fn form_can_be_submitted_again_after_reset() {
    let mut form = form();
    form.submit();
    form.sending_elapsed();
    form.sent_elapsed();
    assert_eq!(form.submit(), Some(FormStep::Schedule { after_ms: 1500 }));
}

#[test]
fn timer_elapsed_follows_current_phase() {
    let mut form = form();
    assert_eq!(form.timer_elapsed(), None);
    form.submit();
    assert_eq!(form.timer_elapsed(), Some(FormStep::Schedule { after_ms: 2000 }));
    assert_eq!(form.timer_elapsed(), Some(FormStep::Reset));
    assert_eq!(form.timer_elapsed(), None);
}
