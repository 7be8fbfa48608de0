use clap::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Args)]
pub struct CalculatorConfig {
    /// Digits a phone number needs before the macro plan unlocks
    #[arg(env = "APEX_MIN_PHONE_DIGITS", long, default_value_t = CalculatorConfig::DEFAULT_MIN_PHONE_DIGITS)]
    pub min_phone_digits: usize,
}

impl CalculatorConfig {
    pub const DEFAULT_MIN_PHONE_DIGITS: usize = 10;
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_phone_digits: Self::DEFAULT_MIN_PHONE_DIGITS,
        }
    }
}
