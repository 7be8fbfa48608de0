#[macro_use]
extern crate serde;

mod biometrics;
pub use biometrics::{ActivityLevel, BiometricInput, Field, Gender, Goal, InputLimits};

mod estimation;
pub use estimation::{EstimationResult, FormulaKind, MacroPlan};

mod error;
pub use error::InputError;
