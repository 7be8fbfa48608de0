use apex_types::{ActivityLevel, Goal};

use crate::helpers::rounding::round_kcal;

/// Scales BMR by activity and then by goal.
pub struct TdeeProjector;

impl TdeeProjector {
    pub fn activity_multiplier(activity: ActivityLevel) -> f64 {
        match activity {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// 20% deficit for a cut, 10% surplus for a bulk.
    pub fn goal_factor(goal: Goal) -> f64 {
        match goal {
            Goal::Cut => 0.8,
            Goal::Maintain => 1.0,
            Goal::Bulk => 1.1,
        }
    }

    /// Activity-scaled BMR, before any goal adjustment.
    pub fn maintenance(bmr: f64, activity: ActivityLevel) -> f64 {
        bmr * Self::activity_multiplier(activity)
    }

    pub fn project(bmr: f64, activity: ActivityLevel, goal: Goal) -> i64 {
        round_kcal(Self::maintenance(bmr, activity) * Self::goal_factor(goal))
    }
}
