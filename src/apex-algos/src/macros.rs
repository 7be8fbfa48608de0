use apex_types::MacroPlan;

use crate::helpers::rounding::round_kcal;

/// Splits a calorie target into protein, fat and carbohydrate grams.
///
/// Protein is fixed per kilogram of body weight, fat takes a fixed share of
/// the calories, and carbohydrates fill whatever is left.
pub struct MacroAllocator;

impl MacroAllocator {
    pub const PROTEIN_G_PER_KG: f64 = 2.0;
    pub const FAT_SHARE: f64 = 0.25;

    const KCAL_PER_G_PROTEIN: f64 = 4.0;
    const KCAL_PER_G_FAT: f64 = 9.0;
    const KCAL_PER_G_CARB: f64 = 4.0;

    pub fn protein_grams(weight_kg: f64) -> i64 {
        round_kcal(weight_kg * Self::PROTEIN_G_PER_KG)
    }

    pub fn allocate(daily_calories: i64, weight_kg: f64) -> MacroPlan {
        let calories = daily_calories as f64;
        let protein_grams = Self::protein_grams(weight_kg);
        let fat_calories = calories * Self::FAT_SHARE;
        let fat_grams = round_kcal(fat_calories / Self::KCAL_PER_G_FAT);

        let remainder =
            calories - protein_grams as f64 * Self::KCAL_PER_G_PROTEIN - fat_calories;
        let raw_carbs = round_kcal(remainder / Self::KCAL_PER_G_CARB);

        let carbs_clamped = raw_carbs < 0;
        if carbs_clamped {
            warn!(
                "Carbohydrate remainder is negative ({raw_carbs}g) for {daily_calories} kcal at {weight_kg} kg, clamping to 0"
            );
        }

        MacroPlan {
            protein_grams,
            fat_grams,
            carb_grams: raw_carbs.max(0),
            carbs_clamped,
        }
    }
}
