use std::fmt::Display;

use strum::Display as StrumDisplay;

use crate::{ActivityLevel, Goal};

/// Which BMR equation produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay)]
pub enum FormulaKind {
    #[serde(rename = "mifflin_st_jeor")]
    #[strum(to_string = "Mifflin-St Jeor")]
    MifflinStJeor,
    #[serde(rename = "katch_mcardle")]
    #[strum(to_string = "Katch-McArdle")]
    KatchMcArdle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroPlan {
    pub protein_grams: i64,
    pub fat_grams: i64,
    pub carb_grams: i64,
    /// Set when the carbohydrate remainder came out negative and was floored at zero.
    pub carbs_clamped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub formula: FormulaKind,
    pub bmr: f64,
    /// Activity-scaled BMR before the goal factor.
    pub maintenance_calories: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub daily_calories: i64,
    pub macros: MacroPlan,
}

impl Display for MacroPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Protein (~2g/kg): {}g\nFat (25% total): {}g\nCarbs (rest): {}g",
            self.protein_grams, self.fat_grams, self.carb_grams
        ))?;
        if self.carbs_clamped {
            f.write_str(" (clamped, protein target exceeds calorie budget)")?;
        }
        Ok(())
    }
}

impl Display for EstimationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Formula: {}\nBMR: {:.2} kcal\nMaintenance: {:.2} kcal ({})\nGoal: {}\nDaily calories: {} kcal",
            self.formula,
            self.bmr,
            self.maintenance_calories,
            self.activity_level,
            self.goal,
            self.daily_calories,
        ))
    }
}
