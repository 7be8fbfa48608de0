#[macro_use]
extern crate log;

mod config;
pub use config::CalculatorConfig;

mod error;
pub use error::LeadError;

pub mod phone;

mod lead;
pub use lead::{LeadCapture, LeadRecord, LeadSink, LeadSource, LogLeadSink};

mod fields;
pub use fields::FormFields;

mod form;
pub use form::{CalculatorForm, FormAction, FormEffect, FormPhase, FormView};

mod quick_register;
pub use quick_register::{QuickRegister, RegisterAction, RegisterStatus};

mod session;
pub use session::{load_script, run_session};

mod hours;
pub use hours::{OpeningWindow, StudioHours};
