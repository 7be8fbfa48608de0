use apex_types::{BiometricInput, FormulaKind, Gender, InputError};

/// Basal metabolic rate equation, chosen once per input.
///
/// Body fat above zero selects Katch-McArdle, which works from lean body mass and
/// ignores age and gender. Anything else falls back to Mifflin-St Jeor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BmrFormula {
    /// Mifflin et al. (1990): `10w + 6.25h - 5a + s`, with `s = +5` for men and `-161` for women.
    MifflinStJeor {
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        age_years: f64,
    },
    /// `370 + 21.6 x LBM`, `LBM = w x (1 - bf / 100)`.
    KatchMcArdle { weight_kg: f64, body_fat_percent: f64 },
}

impl BmrFormula {
    const MIFFLIN_WEIGHT: f64 = 10.0;
    const MIFFLIN_HEIGHT: f64 = 6.25;
    const MIFFLIN_AGE: f64 = 5.0;
    const MIFFLIN_MALE_OFFSET: f64 = 5.0;
    const MIFFLIN_FEMALE_OFFSET: f64 = -161.0;

    const KATCH_BASE: f64 = 370.0;
    const KATCH_LBM: f64 = 21.6;

    /// Katch-McArdle at zero lean mass. No plausible body burns less.
    pub const MIN_BMR_KCAL: f64 = Self::KATCH_BASE;

    pub fn select(input: &BiometricInput) -> Self {
        match input.effective_body_fat() {
            Some(body_fat_percent) => Self::KatchMcArdle {
                weight_kg: input.weight_kg,
                body_fat_percent,
            },
            None => Self::MifflinStJeor {
                gender: input.gender,
                weight_kg: input.weight_kg,
                height_cm: input.height_cm,
                age_years: input.age_years,
            },
        }
    }

    pub fn kind(&self) -> FormulaKind {
        match self {
            Self::MifflinStJeor { .. } => FormulaKind::MifflinStJeor,
            Self::KatchMcArdle { .. } => FormulaKind::KatchMcArdle,
        }
    }

    pub fn lean_body_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
        weight_kg * (1.0 - body_fat_percent / 100.0)
    }

    pub fn calculate(&self) -> f64 {
        match *self {
            Self::MifflinStJeor {
                gender,
                weight_kg,
                height_cm,
                age_years,
            } => {
                let offset = match gender {
                    Gender::Male => Self::MIFFLIN_MALE_OFFSET,
                    Gender::Female => Self::MIFFLIN_FEMALE_OFFSET,
                };
                Self::MIFFLIN_WEIGHT * weight_kg + Self::MIFFLIN_HEIGHT * height_cm
                    - Self::MIFFLIN_AGE * age_years
                    + offset
            }
            Self::KatchMcArdle {
                weight_kg,
                body_fat_percent,
            } => {
                Self::KATCH_BASE
                    + Self::KATCH_LBM * Self::lean_body_mass(weight_kg, body_fat_percent)
            }
        }
    }

    /// [`BmrFormula::calculate`], refusing results below [`BmrFormula::MIN_BMR_KCAL`].
    pub fn checked(&self) -> Result<f64, InputError> {
        let bmr = self.calculate();
        if bmr.is_nan() || bmr < Self::MIN_BMR_KCAL {
            return Err(InputError::ImplausibleBmr {
                formula: self.kind(),
                bmr,
                min: Self::MIN_BMR_KCAL,
            });
        }
        Ok(bmr)
    }
}

#[cfg(test)]
mod tests {
    use apex_types::{ActivityLevel, Goal};

    use super::*;

    fn input(gender: Gender, age: f64, weight: f64, height: f64, bf: Option<f64>) -> BiometricInput {
        BiometricInput {
            gender,
            age_years: age,
            weight_kg: weight,
            height_cm: height,
            body_fat_percent: bf,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_mifflin_male() {
        let formula = BmrFormula::select(&input(Gender::Male, 25.0, 75.0, 180.0, None));
        assert_eq!(formula.kind(), FormulaKind::MifflinStJeor);
        // 750 + 1125 - 125 + 5
        assert_eq!(formula.calculate(), 1755.0);
    }

    #[test]
    fn test_mifflin_female() {
        let formula = BmrFormula::select(&input(Gender::Female, 30.0, 60.0, 165.0, None));
        // 600 + 1031.25 - 150 - 161
        assert_eq!(formula.calculate(), 1320.25);
    }

    #[test]
    fn test_gender_offset_gap_is_166() {
        let male = BmrFormula::select(&input(Gender::Male, 40.0, 82.0, 176.0, None)).calculate();
        let female =
            BmrFormula::select(&input(Gender::Female, 40.0, 82.0, 176.0, None)).calculate();
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn test_zero_body_fat_keeps_mifflin() {
        let formula = BmrFormula::select(&input(Gender::Male, 25.0, 75.0, 180.0, Some(0.0)));
        assert_eq!(formula.kind(), FormulaKind::MifflinStJeor);
        assert_eq!(formula.calculate(), 1755.0);
    }

    #[test]
    fn test_katch_mcardle() {
        let formula = BmrFormula::select(&input(Gender::Male, 25.0, 80.0, 180.0, Some(15.0)));
        assert_eq!(formula.kind(), FormulaKind::KatchMcArdle);
        // LBM = 68, 370 + 21.6 * 68
        assert!((formula.calculate() - 1838.8).abs() < 1e-9);
    }

    #[test]
    fn test_katch_mcardle_ignores_age_and_gender() {
        let a = BmrFormula::select(&input(Gender::Male, 20.0, 90.0, 190.0, Some(20.0))).calculate();
        let b =
            BmrFormula::select(&input(Gender::Female, 70.0, 90.0, 150.0, Some(20.0))).calculate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_body_fat_leaves_base_rate() {
        let formula = BmrFormula::select(&input(Gender::Female, 30.0, 70.0, 170.0, Some(100.0)));
        assert_eq!(formula.calculate(), 370.0);
        assert_eq!(formula.checked(), Ok(370.0));
    }

    #[test]
    fn test_negative_mifflin_is_implausible() {
        // 200 + 312.5 - 600 - 161
        let formula = BmrFormula::select(&input(Gender::Female, 120.0, 20.0, 50.0, None));
        assert_eq!(formula.calculate(), -248.5);
        assert_eq!(
            formula.checked(),
            Err(InputError::ImplausibleBmr {
                formula: FormulaKind::MifflinStJeor,
                bmr: -248.5,
                min: 370.0,
            })
        );
    }

    #[test]
    fn test_tiny_mifflin_is_implausible() {
        // 200 + 562.5 - 600 - 161
        let formula = BmrFormula::select(&input(Gender::Female, 120.0, 20.0, 90.0, None));
        assert_eq!(formula.calculate(), 1.5);
        assert!(formula.checked().is_err());
    }

    #[test]
    fn test_reference_bodies_pass_check() {
        let male = BmrFormula::select(&input(Gender::Male, 25.0, 75.0, 180.0, None));
        assert_eq!(male.checked(), Ok(1755.0));
        let small = BmrFormula::select(&input(Gender::Female, 80.0, 35.0, 140.0, None));
        // 350 + 875 - 400 - 161
        assert_eq!(small.checked(), Ok(664.0));
    }
}
