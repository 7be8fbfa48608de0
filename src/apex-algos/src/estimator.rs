use apex_types::{BiometricInput, EstimationResult, InputError};

use crate::{BmrFormula, MacroAllocator, TdeeProjector};

/// Runs the full pipeline: BMR, activity scaling, goal factor, macro split.
///
/// Fails when a field is out of range ([`BiometricInput::validate`]) or when the
/// fields together give a BMR below [`BmrFormula::MIN_BMR_KCAL`].
/// There is no hidden state, so equal inputs always give equal results.
pub fn estimate(input: &BiometricInput) -> Result<EstimationResult, InputError> {
    input.validate()?;
    let formula = BmrFormula::select(input);
    let bmr = formula.checked()?;
    let maintenance_calories = TdeeProjector::maintenance(bmr, input.activity_level);
    let daily_calories = TdeeProjector::project(bmr, input.activity_level, input.goal);
    let macros = MacroAllocator::allocate(daily_calories, input.weight_kg);

    debug!(
        "{} BMR {bmr:.2} kcal, {} x{} -> {daily_calories} kcal",
        formula.kind(),
        input.activity_level,
        TdeeProjector::goal_factor(input.goal)
    );

    Ok(EstimationResult {
        formula: formula.kind(),
        bmr,
        maintenance_calories,
        activity_level: input.activity_level,
        goal: input.goal,
        daily_calories,
        macros,
    })
}
