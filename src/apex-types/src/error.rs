use thiserror::Error;

use crate::{Field, FormulaKind};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("{field} must be a number, got `{value}`")]
    NotANumber { field: Field, value: String },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Every field is in range but the combination is not a plausible body.
    #[error("{formula} gives a BMR of {bmr:.2} kcal, below the {min} kcal minimum")]
    ImplausibleBmr {
        formula: FormulaKind,
        bmr: f64,
        min: f64,
    },
}

impl InputError {
    /// The single field at fault, if there is one.
    pub fn field(&self) -> Option<Field> {
        match self {
            InputError::Missing(field) => Some(*field),
            InputError::NotANumber { field, .. } => Some(*field),
            InputError::OutOfRange { field, .. } => Some(*field),
            InputError::ImplausibleBmr { .. } => None,
        }
    }
}
