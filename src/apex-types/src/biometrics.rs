use std::ops::RangeInclusive;

use strum::{Display, EnumIter, EnumString};

use crate::InputError;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActivityLevel {
    /// Office work, no exercise
    Sedentary,
    /// 1-3 days a week or standing work
    Light,
    /// 3-5 days a week or an active life
    #[default]
    Moderate,
    /// 6-7 days a week or physical work
    Active,
    /// Double sessions, athletes
    #[strum(to_string = "very_active", serialize = "very-active")]
    VeryActive,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Goal {
    Cut,
    #[default]
    Maintain,
    Bulk,
}

/// Names the numeric inputs of the calculator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Age,
    Weight,
    Height,
    BodyFat,
}

/// Accepted domain of each numeric input. Values outside are rejected, not clamped.
pub struct InputLimits;

impl InputLimits {
    pub const AGE_YEARS: RangeInclusive<f64> = 10.0..=120.0;
    pub const WEIGHT_KG: RangeInclusive<f64> = 20.0..=500.0;
    pub const HEIGHT_CM: RangeInclusive<f64> = 50.0..=272.0;
    pub const BODY_FAT_PERCENT: RangeInclusive<f64> = 0.0..=100.0;

    pub fn for_field(field: Field) -> RangeInclusive<f64> {
        match field {
            Field::Age => Self::AGE_YEARS,
            Field::Weight => Self::WEIGHT_KG,
            Field::Height => Self::HEIGHT_CM,
            Field::BodyFat => Self::BODY_FAT_PERCENT,
        }
    }

    /// Returns `value` if it lies inside the domain of `field`.
    /// NaN never does.
    pub fn check(field: Field, value: f64) -> Result<f64, InputError> {
        let range = Self::for_field(field);
        if range.contains(&value) {
            Ok(value)
        } else {
            Err(InputError::OutOfRange {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricInput {
    pub gender: Gender,
    pub age_years: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default)]
    pub body_fat_percent: Option<f64>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

impl BiometricInput {
    pub fn new(
        gender: Gender,
        age_years: f64,
        weight_kg: f64,
        height_cm: f64,
        body_fat_percent: Option<f64>,
        activity_level: ActivityLevel,
        goal: Goal,
    ) -> Result<Self, InputError> {
        let input = Self {
            gender,
            age_years,
            weight_kg,
            height_cm,
            body_fat_percent,
            activity_level,
            goal,
        };
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        InputLimits::check(Field::Age, self.age_years)?;
        InputLimits::check(Field::Weight, self.weight_kg)?;
        InputLimits::check(Field::Height, self.height_cm)?;
        if let Some(body_fat) = self.body_fat_percent {
            InputLimits::check(Field::BodyFat, body_fat)?;
        }
        Ok(())
    }

    /// Body fat only counts when strictly positive; zero means "not provided".
    pub fn effective_body_fat(&self) -> Option<f64> {
        self.body_fat_percent.filter(|bf| *bf > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn sample() -> BiometricInput {
        BiometricInput {
            gender: Gender::Male,
            age_years: 25.0,
            weight_kg: 75.0,
            height_cm: 180.0,
            body_fat_percent: None,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_enum_names_round_trip_through_strum() {
        assert_eq!(ActivityLevel::VeryActive.to_string(), "very_active");
        assert_eq!(
            ActivityLevel::from_str("very-active").unwrap(),
            ActivityLevel::VeryActive
        );
        assert_eq!(Gender::from_str("Female").unwrap(), Gender::Female);
        assert_eq!(Goal::from_str("BULK").unwrap(), Goal::Bulk);
        assert!(Goal::from_str("shred").is_err());
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        assert_eq!(Gender::default(), Gender::Male);
        assert_eq!(ActivityLevel::default(), ActivityLevel::Moderate);
        assert_eq!(Goal::default(), Goal::Maintain);
    }

    #[test]
    fn test_validate_accepts_range_edges() {
        let mut input = sample();
        input.age_years = 10.0;
        input.weight_kg = 500.0;
        input.height_cm = 272.0;
        input.body_fat_percent = Some(100.0);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut input = sample();
        input.weight_kg = -4.0;
        let err = input.validate().unwrap_err();
        assert_eq!(err.field(), Some(Field::Weight));
        assert_eq!(
            err,
            InputError::OutOfRange {
                field: Field::Weight,
                value: -4.0,
                min: 20.0,
                max: 500.0
            }
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut input = sample();
        input.height_cm = f64::NAN;
        assert_eq!(input.validate().unwrap_err().field(), Some(Field::Height));
    }

    #[test]
    fn test_zero_body_fat_is_not_lean_mass() {
        let mut input = sample();
        input.body_fat_percent = Some(0.0);
        assert_eq!(input.effective_body_fat(), None);
        input.body_fat_percent = Some(15.0);
        assert_eq!(input.effective_body_fat(), Some(15.0));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let input: BiometricInput = serde_json::from_str(
            r#"{"gender":"female","age_years":30,"weight_kg":60,"height_cm":165}"#,
        )
        .unwrap();
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.body_fat_percent, None);
        assert_eq!(input.activity_level, ActivityLevel::Moderate);
        assert_eq!(input.goal, Goal::Maintain);
    }

    #[test]
    fn test_error_message_names_field() {
        let err = InputError::Missing(Field::BodyFat);
        assert_eq!(err.to_string(), "body_fat is required");
    }
}
