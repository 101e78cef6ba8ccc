use std::rc::Rc;
use yew::prelude::*;

use super::delivery::{ContactMessage, DeliveryError};
use super::validation::Field;
use crate::timer::{Scheduler, TimerHandle};

pub const SUCCESS_DISMISS_MS: u32 = 5_000;
pub const SENDING_LABEL: &str = "Sending...";
pub const FAILURE_NOTICE: &str =
    "There was an error sending your message. Please try again or email directly.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    name: FieldState,
    email: FieldState,
    message: FieldState,
    pub phase: Phase,
    pub success_visible: bool,
}

pub enum FormAction {
    Input(Field, String),
    Submit,
    Sent,
    SendFailed,
    DismissSuccess,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    // Err lists the fields that failed
    pub fn prepare(&self) -> Result<ContactMessage, Vec<Field>> {
        let failed: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| !f.is_valid(&self.field(*f).value))
            .collect();
        if !failed.is_empty() {
            return Err(failed);
        }
        Ok(ContactMessage {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
        })
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Input(field, value) => {
                let state = next.field_mut(field);
                state.error = field.check_live(&value);
                state.value = value;
            }
            FormAction::Submit => {
                if next.is_sending() {
                    return self;
                }
                for field in Field::ALL {
                    let state = next.field_mut(field);
                    state.error = field.check(&state.value);
                }
                next.phase = if next.prepare().is_ok() {
                    Phase::Sending
                } else {
                    Phase::Idle
                };
            }
            FormAction::Sent => {
                next.phase = Phase::Succeeded;
                next.success_visible = true;
                for field in Field::ALL {
                    *next.field_mut(field) = FieldState::default();
                }
            }
            FormAction::SendFailed => {
                next.phase = Phase::Failed;
            }
            FormAction::DismissSuccess => {
                next.success_visible = false;
            }
        }
        Rc::new(next)
    }
}

// The returned handle owns the banner dismiss timer.
pub fn complete_submission(
    outcome: Result<(), DeliveryError>,
    dispatch: impl Fn(FormAction) + Clone + 'static,
    scheduler: &dyn Scheduler,
) -> Option<TimerHandle> {
    match outcome {
        Ok(()) => {
            dispatch(FormAction::Sent);
            let dismiss = dispatch.clone();
            Some(scheduler.schedule(
                SUCCESS_DISMISS_MS,
                Box::new(move || dismiss(FormAction::DismissSuccess)),
            ))
        }
        Err(e) => {
            log::error!("Form submission error: {}", e);
            dispatch(FormAction::SendFailed);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualScheduler;
    use std::cell::RefCell;

    fn reduce(form: Rc<ContactForm>, actions: Vec<FormAction>) -> Rc<ContactForm> {
        actions.into_iter().fold(form, |f, a| f.reduce(a))
    }

    fn filled(name: &str, email: &str, message: &str) -> Rc<ContactForm> {
        reduce(
            Rc::new(ContactForm::default()),
            vec![
                FormAction::Input(Field::Name, name.into()),
                FormAction::Input(Field::Email, email.into()),
                FormAction::Input(Field::Message, message.into()),
            ],
        )
    }

    #[test]
    fn typing_shows_and_clears_errors() {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(FormAction::Input(Field::Name, "A".into()));
        assert_eq!(form.field(Field::Name).error, Some(Field::Name.error_message()));

        let form = form.reduce(FormAction::Input(Field::Name, "Al".into()));
        assert_eq!(form.field(Field::Name).error, None);

        let form = form.reduce(FormAction::Input(Field::Email, "bad".into()));
        assert!(form.field(Field::Email).error.is_some());
        let form = form.reduce(FormAction::Input(Field::Email, String::new()));
        assert_eq!(form.field(Field::Email).error, None);
    }

    #[test]
    fn short_name_blocks_submission() {
        let form = filled("A", "alice@example.com", "Hello there!");
        assert_eq!(form.prepare(), Err(vec![Field::Name]));

        let form = form.reduce(FormAction::Submit);
        assert_eq!(form.phase, Phase::Idle);
        assert_eq!(form.field(Field::Name).error, Some("Name must be at least 2 characters"));
        assert_eq!(form.field(Field::Email).error, None);
        assert_eq!(form.field(Field::Message).error, None);
    }

    #[test]
    fn empty_submit_flags_every_field() {
        let form = Rc::new(ContactForm::default()).reduce(FormAction::Submit);
        assert_eq!(form.phase, Phase::Idle);
        for field in Field::ALL {
            assert_eq!(form.field(field).error, Some(field.error_message()));
        }
    }

    #[test]
    fn valid_submit_enters_sending_and_ignores_repeats() {
        let form = filled("Alice", "alice@example.com", "Hello there!");
        let message = form.prepare().unwrap();
        assert_eq!(message.name, "Alice");

        let form = form.reduce(FormAction::Submit);
        assert!(form.is_sending());
        let again = form.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&form, &again));
    }

    #[test]
    fn success_clears_form_and_banner_hides_after_delay() {
        let scheduler = ManualScheduler::new();
        let state = Rc::new(RefCell::new(filled("Alice", "alice@example.com", "Hello there!")));
        let dispatch = {
            let state = state.clone();
            move |action: FormAction| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            }
        };

        dispatch(FormAction::Submit);
        assert!(state.borrow().is_sending());

        let timer = complete_submission(Ok(()), dispatch.clone(), &scheduler).unwrap();
        {
            let form = state.borrow();
            assert_eq!(form.phase, Phase::Succeeded);
            assert!(!form.is_sending());
            assert!(form.success_visible);
            for field in Field::ALL {
                assert_eq!(form.field(field), &FieldState::default());
            }
        }

        scheduler.advance(u64::from(SUCCESS_DISMISS_MS) - 1);
        assert!(state.borrow().success_visible);
        scheduler.advance(1);
        assert!(!state.borrow().success_visible);
        timer.forget();
    }

    #[test]
    fn failure_keeps_values_and_releases_the_control() {
        let scheduler = ManualScheduler::new();
        let state = Rc::new(RefCell::new(filled("Alice", "alice@example.com", "Hello there!")));
        let dispatch = {
            let state = state.clone();
            move |action: FormAction| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            }
        };
        dispatch(FormAction::Submit);

        let timer = complete_submission(
            Err(DeliveryError::Network("offline".into())),
            dispatch,
            &scheduler,
        );
        assert!(timer.is_none());
        assert_eq!(scheduler.pending(), 0);

        let form = state.borrow();
        assert_eq!(form.phase, Phase::Failed);
        assert!(!form.is_sending());
        assert!(!form.success_visible);
        assert_eq!(form.field(Field::Name).value, "Alice");
    }

    #[test]
    fn resubmit_after_failure_is_allowed() {
        let form = filled("Alice", "alice@example.com", "Hello there!")
            .reduce(FormAction::Submit)
            .reduce(FormAction::SendFailed)
            .reduce(FormAction::Submit);
        assert!(form.is_sending());
    }
}
