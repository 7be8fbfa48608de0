use std::fmt::Display;

use apex_algos::{BmrFormula, estimate};
use apex_types::{
    ActivityLevel, BiometricInput, EstimationResult, Gender, Goal, InputError, MacroPlan,
};
use serde::{Deserialize, Serialize};

use crate::{
    CalculatorConfig, FormFields, LeadCapture, LeadSource,
    phone::{check_min_digits, format_mexican_phone},
};

/// Where the calculator is in its `idle -> computed -> unlocked` lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Idle,
    /// Calories are shown, macros wait behind the lead gate.
    Computed { result: EstimationResult },
    Unlocked {
        result: EstimationResult,
        lead: LeadCapture,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum FormAction {
    SetGender(Gender),
    SetAge(String),
    SetWeight(String),
    SetHeight(String),
    SetBodyFat(String),
    SetActivity(ActivityLevel),
    SetGoal(Goal),
    Calculate,
    SetPhone(String),
    SubmitLead,
    /// Back to `idle`, keeping the entered biometrics.
    Recalculate,
    /// Back to `idle` with an empty form.
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEffect {
    CaptureLead(LeadCapture),
}

/// Calculator form state. Every change goes through [`CalculatorForm::reduce`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorForm {
    fields: FormFields,
    phone: String,
    phase: FormPhase,
    config: CalculatorConfig,
}

impl CalculatorForm {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Mirrors the enabled state of the calculate button.
    pub fn can_calculate(&self) -> bool {
        matches!(self.phase, FormPhase::Idle) && self.fields.has_required()
    }

    /// Parses the fields and checks that they describe a plausible body.
    pub fn validate(&self) -> Result<BiometricInput, InputError> {
        let input = self.fields.parse()?;
        BmrFormula::select(&input).checked()?;
        Ok(input)
    }

    pub fn result(&self) -> Option<&EstimationResult> {
        match &self.phase {
            FormPhase::Idle => None,
            FormPhase::Computed { result } | FormPhase::Unlocked { result, .. } => Some(result),
        }
    }

    pub fn daily_calories(&self) -> Option<i64> {
        self.result().map(|result| result.daily_calories)
    }

    /// Macro grams, only once the lead gate has been passed.
    pub fn visible_macros(&self) -> Option<MacroPlan> {
        match &self.phase {
            FormPhase::Unlocked { result, .. } => Some(result.macros),
            _ => None,
        }
    }

    pub fn reduce(mut self, action: FormAction) -> (Self, Option<FormEffect>) {
        let idle = matches!(self.phase, FormPhase::Idle);
        let computed = match &self.phase {
            FormPhase::Computed { result } => Some(*result),
            _ => None,
        };

        match action {
            FormAction::Reset => return (Self::new(self.config), None),
            FormAction::Recalculate => {
                self.phase = FormPhase::Idle;
                self.phone.clear();
            }
            FormAction::SetGender(gender) if idle => self.fields.gender = gender,
            FormAction::SetAge(age) if idle => self.fields.age = age,
            FormAction::SetWeight(weight) if idle => self.fields.weight = weight,
            FormAction::SetHeight(height) if idle => self.fields.height = height,
            FormAction::SetBodyFat(body_fat) if idle => self.fields.body_fat = body_fat,
            FormAction::SetActivity(activity) if idle => self.fields.activity = activity,
            FormAction::SetGoal(goal) if idle => self.fields.goal = goal,
            FormAction::Calculate if idle => {
                if !self.fields.has_required() {
                    debug!("Calculate ignored, required fields are empty");
                    return (self, None);
                }
                match self.fields.parse().and_then(|input| estimate(&input)) {
                    Ok(result) => self.phase = FormPhase::Computed { result },
                    Err(error) => debug!("Calculate refused: {error}"),
                }
            }
            FormAction::SetPhone(phone) if computed.is_some() => self.phone = phone,
            FormAction::SubmitLead => {
                let Some(result) = computed else {
                    trace!("Ignoring SubmitLead while {}", phase_name(&self.phase));
                    return (self, None);
                };
                if let Err(error) = check_min_digits(&self.phone, self.config.min_phone_digits) {
                    debug!("Lead refused: {error}");
                    return (self, None);
                }
                let lead = LeadCapture {
                    phone: self.phone.clone(),
                    daily_calories: Some(result.daily_calories),
                    source: LeadSource::Calculator,
                };
                self.phase = FormPhase::Unlocked {
                    result,
                    lead: lead.clone(),
                };
                return (self, Some(FormEffect::CaptureLead(lead)));
            }
            action => {
                trace!("Ignoring {action:?} while {}", phase_name(&self.phase));
            }
        }
        (self, None)
    }

    pub fn view(&self) -> FormView {
        FormView {
            state: phase_name(&self.phase),
            can_calculate: self.can_calculate(),
            goal: self.result().map(|result| goal_label(result.goal)),
            daily_calories: self.daily_calories(),
            macros: self.visible_macros(),
            phone: match &self.phase {
                FormPhase::Unlocked { lead, .. } => Some(format_mexican_phone(&lead.phone)),
                _ => None,
            },
        }
    }
}

fn phase_name(phase: &FormPhase) -> &'static str {
    match phase {
        FormPhase::Idle => "idle",
        FormPhase::Computed { .. } => "computed",
        FormPhase::Unlocked { .. } => "unlocked",
    }
}

pub fn goal_label(goal: Goal) -> &'static str {
    match goal {
        Goal::Cut => "Goal: deficit (-20%)",
        Goal::Maintain => "Goal: maintenance",
        Goal::Bulk => "Goal: surplus (+10%)",
    }
}

/// What the page would render for the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub state: &'static str,
    pub can_calculate: bool,
    pub goal: Option<&'static str>,
    pub daily_calories: Option<i64>,
    pub macros: Option<MacroPlan>,
    pub phone: Option<String>,
}

impl Display for FormView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("State: {}", self.state))?;
        let Some(calories) = self.daily_calories else {
            return f.write_fmt(format_args!("\nReady to calculate: {}", self.can_calculate));
        };
        if let Some(goal) = self.goal {
            f.write_fmt(format_args!("\n{goal}"))?;
        }
        f.write_fmt(format_args!("\n{calories} kcal"))?;
        match self.macros {
            Some(macros) => f.write_fmt(format_args!("\n{macros}")),
            None => f.write_str("\nMacro plan locked, submit a phone number to unlock"),
        }
    }
}
