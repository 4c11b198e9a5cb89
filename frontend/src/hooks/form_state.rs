use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::constants::SUBMIT_DELAY_MS;
use shared::user_info::{IntakeError, IntakeField, IntakeForm, UserInfo};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum Consent {
    Terms,
    Emails,
    Exclusive,
}

#[derive(Clone)]
pub struct IntakeFormState {
    pub form: IntakeForm,
    pub terms_blocked: bool,
    pub handle_field: Callback<(IntakeField, String)>,
    pub handle_consent: Callback<(Consent, bool)>,
    pub handle_submit: Callback<SubmitEvent>,
}

/// Form state for the intake page. Accepted records are delivered to
/// `on_accepted` after the simulated submission delay; the pending delivery
/// is cancelled if the page unmounts first.
#[hook]
pub fn use_intake_form(on_accepted: Callback<UserInfo>) -> IntakeFormState {
    let form = use_state(IntakeForm::new);
    let terms_blocked = use_state(|| false);
    let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                // Dropping the timeout cancels it
                pending.borrow_mut().take();
            }
        });
    }

    let handle_field = {
        let form = form.clone();
        Callback::from(move |(field, value): (IntakeField, String)| {
            let mut next = (*form).clone();
            next.set_field(field, value);
            form.set(next);
        })
    };

    let handle_consent = {
        let form = form.clone();
        let terms_blocked = terms_blocked.clone();
        Callback::from(move |(consent, checked): (Consent, bool)| {
            let mut next = (*form).clone();
            match consent {
                Consent::Terms => {
                    next.agreed_to_terms = checked;
                    if checked {
                        terms_blocked.set(false);
                    }
                }
                Consent::Emails => next.agreed_to_emails = checked,
                Consent::Exclusive => next.agreed_to_exclusive = checked,
            }
            form.set(next);
        })
    };

    let handle_submit = {
        let form = form.clone();
        let terms_blocked = terms_blocked.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*form).clone();
            match next.submit() {
                Ok(record) => {
                    terms_blocked.set(false);
                    let on_accepted = on_accepted.clone();
                    let timeout = Timeout::new(SUBMIT_DELAY_MS, move || {
                        on_accepted.emit(record);
                    });
                    *pending.borrow_mut() = Some(timeout);
                }
                Err(IntakeError::TermsNotAccepted) => terms_blocked.set(true),
                Err(err) => log::debug!("Intake submission rejected: {}", err),
            }
            form.set(next);
        })
    };

    IntakeFormState {
        form: (*form).clone(),
        terms_blocked: *terms_blocked,
        handle_field,
        handle_consent,
        handle_submit,
    }
}
