//! Registration wizard state machine.
//!
//! All transitions go through [`Wizard::apply`]. The only side effect the
//! wizard asks for is the one-shot submission, returned as [`Effect::Submit`]
//! for the caller to run; its outcome comes back as
//! [`WizardEvent::SubmitSucceeded`] or [`WizardEvent::SubmitFailed`].

use crate::models::{DraftEdit, RegistrationDraft, Step};
use crate::validation::{validate_step, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Editing(Step),
    /// Submission in flight. Further submits are ignored.
    Submitting,
    /// Terminal.
    Submitted,
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::Editing(Step::BasicInfo)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    Edit(DraftEdit),
    Next,
    Previous,
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Submit(RegistrationDraft),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wizard {
    state: WizardState,
    draft: RegistrationDraft,
    errors: FieldErrors,
    submit_error: Option<String>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message from the last failed submission, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Step whose fields are on screen. During submission this stays on the last step.
    pub fn current_step(&self) -> Option<Step> {
        match self.state {
            WizardState::Editing(step) => Some(step),
            WizardState::Submitting => Some(Step::FinalSteps),
            WizardState::Submitted => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WizardState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == WizardState::Submitted
    }

    pub fn apply(&mut self, event: WizardEvent) -> Effect {
        match (self.state, event) {
            (WizardState::Editing(_), WizardEvent::Edit(edit)) => {
                let field = edit.field();
                if self.draft.apply(edit) {
                    self.errors.clear(field);
                }
                Effect::None
            }
            (WizardState::Editing(step), WizardEvent::Next) => {
                if self.validate(step) {
                    if let Some(next) = step.next() {
                        self.state = WizardState::Editing(next);
                    }
                }
                Effect::None
            }
            (WizardState::Editing(step), WizardEvent::Previous) => {
                if let Some(previous) = step.previous() {
                    self.state = WizardState::Editing(previous);
                }
                Effect::None
            }
            (WizardState::Editing(Step::FinalSteps), WizardEvent::Submit) => {
                if !self.validate(Step::FinalSteps) {
                    return Effect::None;
                }
                self.submit_error = None;
                self.state = WizardState::Submitting;
                Effect::Submit(self.draft.clone())
            }
            (WizardState::Submitting, WizardEvent::SubmitSucceeded) => {
                self.state = WizardState::Submitted;
                Effect::None
            }
            (WizardState::Submitting, WizardEvent::SubmitFailed(message)) => {
                self.submit_error = Some(message);
                self.state = WizardState::Editing(Step::FinalSteps);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    /// Replaces the error map with the result for `step`.
    fn validate(&mut self, step: Step) -> bool {
        self.errors = validate_step(&self.draft, step);
        self.errors.is_empty()
    }
}
