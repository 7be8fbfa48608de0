use serde::Serialize;
use strum::Display;

use crate::{LeadCapture, LeadSource, phone::check_min_digits};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RegisterStatus {
    #[default]
    Idle,
    Loading,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterAction {
    SetPhone(String),
    Submit,
    /// The (simulated) submission finished.
    Completed,
    Retry,
}

/// One-field "leave your number" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuickRegister {
    phone: String,
    status: RegisterStatus,
    error: Option<String>,
}

impl QuickRegister {
    pub const MIN_DIGITS: usize = 10;
    pub const INVALID_PHONE: &'static str = "enter a valid number with at least 10 digits";

    pub fn status(&self) -> RegisterStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn reduce(mut self, action: RegisterAction) -> (Self, Option<LeadCapture>) {
        match (self.status, action) {
            (_, RegisterAction::Retry) => return (Self::default(), None),
            (RegisterStatus::Idle, RegisterAction::SetPhone(phone)) => self.phone = phone,
            (RegisterStatus::Idle, RegisterAction::Submit) => {
                if check_min_digits(&self.phone, Self::MIN_DIGITS).is_err() {
                    self.error = Some(Self::INVALID_PHONE.to_string());
                    return (self, None);
                }
                self.error = None;
                self.status = RegisterStatus::Loading;
                let lead = LeadCapture {
                    phone: self.phone.clone(),
                    daily_calories: None,
                    source: LeadSource::QuickRegister,
                };
                return (self, Some(lead));
            }
            (RegisterStatus::Loading, RegisterAction::Completed) => {
                self.status = RegisterStatus::Success;
            }
            (status, action) => trace!("Ignoring {action:?} while {status}"),
        }
        (self, None)
    }
}
