use apex_types::{ActivityLevel, BiometricInput, Field, Gender, Goal, InputError, InputLimits};
use serde::{Deserialize, Serialize};

/// Raw form entries as typed by the visitor. Numbers stay text until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub gender: Gender,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub body_fat: String,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

impl FormFields {
    /// Age, weight and height all filled in. Says nothing about whether they parse.
    pub fn has_required(&self) -> bool {
        [&self.age, &self.weight, &self.height]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn parse(&self) -> Result<BiometricInput, InputError> {
        let age_years = parse_required(Field::Age, &self.age)?;
        let weight_kg = parse_required(Field::Weight, &self.weight)?;
        let height_cm = parse_required(Field::Height, &self.height)?;
        let body_fat_percent = match self.body_fat.trim() {
            "" => None,
            raw => Some(parse_number(Field::BodyFat, raw)?),
        };

        BiometricInput::new(
            self.gender,
            age_years,
            weight_kg,
            height_cm,
            body_fat_percent,
            self.activity,
            self.goal,
        )
    }
}

fn parse_required(field: Field, raw: &str) -> Result<f64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::Missing(field));
    }
    parse_number(field, raw)
}

fn parse_number(field: Field, raw: &str) -> Result<f64, InputError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field,
            value: raw.to_string(),
        })?;
    InputLimits::check(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            age: "25".into(),
            weight: "75".into(),
            height: "180".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields() {
        assert!(!FormFields::default().has_required());
        assert!(filled().has_required());

        let mut fields = filled();
        fields.height = "   ".into();
        assert!(!fields.has_required());
    }

    #[test]
    fn test_parse_defaults() {
        let input = filled().parse().unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.age_years, 25.0);
        assert_eq!(input.weight_kg, 75.0);
        assert_eq!(input.height_cm, 180.0);
        assert_eq!(input.body_fat_percent, None);
        assert_eq!(input.activity_level, ActivityLevel::Moderate);
        assert_eq!(input.goal, Goal::Maintain);
    }

    #[test]
    fn test_parse_body_fat() {
        let mut fields = filled();
        fields.body_fat = " 15 ".into();
        assert_eq!(fields.parse().unwrap().body_fat_percent, Some(15.0));
    }

    #[test]
    fn test_parse_errors() {
        let mut fields = filled();
        fields.age = String::new();
        assert_eq!(fields.parse(), Err(InputError::Missing(Field::Age)));

        let mut fields = filled();
        fields.weight = "75kg".into();
        assert_eq!(
            fields.parse(),
            Err(InputError::NotANumber {
                field: Field::Weight,
                value: "75kg".into()
            })
        );

        let mut fields = filled();
        fields.height = "300".into();
        assert_eq!(fields.parse().unwrap_err().field(), Some(Field::Height));

        let mut fields = filled();
        fields.body_fat = "120".into();
        assert_eq!(fields.parse().unwrap_err().field(), Some(Field::BodyFat));
    }

    #[test]
    fn test_nan_text_is_rejected() {
        let mut fields = filled();
        fields.weight = "NaN".into();
        assert_eq!(fields.parse().unwrap_err().field(), Some(Field::Weight));
    }
}
