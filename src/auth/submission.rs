use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;
use yew::prelude::*;

use crate::auth::validation::{validate, Field, FormState, ValidationErrors};
use crate::config::{FailureNotice, SubmissionConfig, VerificationMode};

pub const FAILURE_NOTICE: &str = "Verification failed. Please check your details and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("access verification was rejected")]
    Rejected,
}

/// Stand-in for the backend check. Nothing leaves the page.
pub fn simulate_verification(mode: VerificationMode) -> Result<(), VerificationError> {
    match mode {
        VerificationMode::Succeed => Ok(()),
        VerificationMode::Fail => Err(VerificationError::Rejected),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEvent {
    FieldChanged(Field, String),
    Focused(Field),
    Blurred,
    SubmitAttempted,
    VerificationResolved(Result<(), VerificationError>),
    LoginSignalled,
}

/// What a pending timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wakeup {
    /// Run the simulated verification and feed the result back in.
    Verification,
    /// Hand control to the root view.
    SignalLogin,
}

/// Result of a timer firing: the event to feed back into the reducer, and
/// whether the root should be told about the login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerFired {
    pub event: GateEvent,
    pub emit_login: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTimer {
    pub delay_ms: u32,
    pub wakeup: Wakeup,
}

/// Everything the gate form owns. Created on mount, dropped on unmount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateState {
    pub form: FormState,
    pub errors: ValidationErrors,
    pub focused: Option<Field>,
    pub status: SubmissionStatus,
    pub notice: Option<&'static str>,
    login_signalled: bool,
    config: SubmissionConfig,
}

impl GateState {
    pub fn new(config: SubmissionConfig) -> Self {
        Self {
            form: FormState::default(),
            errors: ValidationErrors::default(),
            focused: None,
            status: SubmissionStatus::Idle,
            notice: None,
            login_signalled: false,
            config,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.status != SubmissionStatus::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.status {
            SubmissionStatus::Idle => "SUBMIT",
            SubmissionStatus::Submitting => "VERIFYING...",
            SubmissionStatus::Succeeded => "ACCESS GRANTED",
        }
    }

    /// The one timer the current status needs armed, if any.
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        match self.status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Submitting => Some(PendingTimer {
                delay_ms: self.config.verification_latency_ms,
                wakeup: Wakeup::Verification,
            }),
            SubmissionStatus::Succeeded if !self.login_signalled => Some(PendingTimer {
                delay_ms: self.config.success_hold_ms,
                wakeup: Wakeup::SignalLogin,
            }),
            SubmissionStatus::Succeeded => None,
        }
    }

    /// What happens when the timer for `wakeup` goes off.
    pub fn fire(&self, wakeup: Wakeup) -> TimerFired {
        match wakeup {
            Wakeup::Verification => TimerFired {
                event: GateEvent::VerificationResolved(simulate_verification(
                    self.config.verification,
                )),
                emit_login: false,
            },
            Wakeup::SignalLogin => TimerFired {
                event: GateEvent::LoginSignalled,
                emit_login: true,
            },
        }
    }

    /// Returns the next state, or `None` when the event changes nothing.
    pub fn apply(&self, event: GateEvent) -> Option<GateState> {
        match event {
            GateEvent::FieldChanged(field, value) => {
                if self.is_locked() || self.form.value(field) == value {
                    return None;
                }
                let mut next = self.clone();
                next.form.set(field, value);
                next.errors.clear(field);
                next.notice = None;
                Some(next)
            }
            GateEvent::Focused(field) => {
                (self.focused != Some(field)).then(|| GateState {
                    focused: Some(field),
                    ..self.clone()
                })
            }
            GateEvent::Blurred => self.focused.is_some().then(|| GateState {
                focused: None,
                ..self.clone()
            }),
            GateEvent::SubmitAttempted => {
                if self.is_locked() {
                    info!("Submit ignored while {:?}", self.status);
                    return None;
                }
                let errors = validate(&self.form);
                let mut next = self.clone();
                next.notice = None;
                if errors.is_empty() {
                    info!("Gate form valid, verifying access");
                    next.status = SubmissionStatus::Submitting;
                } else {
                    info!("Gate form rejected with {} field error(s)", errors.len());
                }
                next.errors = errors;
                Some(next)
            }
            GateEvent::VerificationResolved(result) => {
                if self.status != SubmissionStatus::Submitting {
                    return None;
                }
                let mut next = self.clone();
                match result {
                    Ok(()) => {
                        info!("Access verified");
                        next.status = SubmissionStatus::Succeeded;
                    }
                    Err(e) => {
                        warn!("Submission error: {}", e);
                        next.status = SubmissionStatus::Idle;
                        next.notice = match self.config.failure_notice {
                            FailureNotice::Silent => None,
                            FailureNotice::Visible => Some(FAILURE_NOTICE),
                        };
                    }
                }
                Some(next)
            }
            GateEvent::LoginSignalled => {
                if self.status != SubmissionStatus::Succeeded || self.login_signalled {
                    return None;
                }
                Some(GateState {
                    login_signalled: true,
                    ..self.clone()
                })
            }
        }
    }
}

impl Reducible for GateState {
    type Action = GateEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}
