#[macro_use]
extern crate log;

use std::{io, path::PathBuf};

use anyhow::anyhow;
use apex::{
    CalculatorConfig, CalculatorForm, LeadSink, LogLeadSink, QuickRegister, RegisterAction,
    StudioHours, load_script, phone::format_mexican_phone, run_session,
};
use apex_algos::estimate;
use apex_types::{ActivityLevel, BiometricInput, Gender, Goal};
use chrono::{Datelike as _, Local, NaiveDateTime};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use dotenv::dotenv;
use serde_json::json;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "apex", about = "APEX studio calorie calculator")]
pub struct ApexCli {
    #[arg(env = "APEX_OUTPUT", long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,
    #[command(flatten)]
    pub config: CalculatorConfig,
    #[clap(subcommand)]
    pub subcommand: ApexCommand,
}

#[derive(Subcommand)]
pub enum ApexCommand {
    ///
    /// Estimate daily calories and macros
    ///
    Estimate {
        #[arg(long, default_value_t)]
        gender: Gender,
        #[arg(long)]
        age: f64,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Height in centimeters
        #[arg(long)]
        height: f64,
        /// Body fat percentage, switches to Katch-McArdle when above zero
        #[arg(long)]
        body_fat: Option<f64>,
        #[arg(long, default_value_t)]
        activity: ActivityLevel,
        #[arg(long, default_value_t)]
        goal: Goal,
    },
    ///
    /// Replay a JSON list of calculator form actions
    ///
    Session { script: PathBuf },
    ///
    /// Register a phone number through the quick register form
    ///
    Register {
        #[arg(long, env = "APEX_PHONE")]
        phone: String,
    },
    ///
    /// Check whether the studio is open
    ///
    Hours {
        /// Local date and time, e.g. 2025-01-06T10:30:00. Defaults to now.
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
    ///
    /// Print shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = ApexCli::parse();

    match cli.subcommand {
        ApexCommand::Estimate {
            gender,
            age,
            weight,
            height,
            body_fat,
            activity,
            goal,
        } => {
            let input =
                BiometricInput::new(gender, age, weight, height, body_fat, activity, goal)?;
            let result = estimate(&input)?;
            match cli.output {
                OutputFormat::Text => println!("{}\n{}", result, result.macros),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
            Ok(())
        }
        ApexCommand::Session { script } => {
            let actions = load_script(&script)?;
            info!("Replaying {} actions from {}", actions.len(), script.display());
            let mut sink = LogLeadSink::default();
            let form = run_session(CalculatorForm::new(cli.config), actions, &mut sink)?;
            if let Err(error) = form.validate() {
                warn!("Form input is not valid: {}", error);
            }
            let view = form.view();
            match cli.output {
                OutputFormat::Text => println!("{}", view),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
            Ok(())
        }
        ApexCommand::Register { phone } => {
            let form = QuickRegister::default();
            let (form, _) = form.reduce(RegisterAction::SetPhone(phone.clone()));
            let (form, lead) = form.reduce(RegisterAction::Submit);
            let Some(lead) = lead else {
                return Err(anyhow!(
                    "{}",
                    form.error().unwrap_or(QuickRegister::INVALID_PHONE)
                ));
            };
            LogLeadSink::default().capture(lead)?;
            let (form, _) = form.reduce(RegisterAction::Completed);
            match cli.output {
                OutputFormat::Text => println!(
                    "Registered {}: {}",
                    format_mexican_phone(&phone),
                    form.status()
                ),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&form)?),
            }
            Ok(())
        }
        ApexCommand::Hours { at } => {
            let at = at.unwrap_or_else(|| Local::now().naive_local());
            let hours = StudioHours::default();
            let open = hours.is_open_at(at);
            let window = hours.window(at.weekday());
            match cli.output {
                OutputFormat::Text => println!(
                    "{}: {} (today {})",
                    at.format("%a %Y-%m-%d %H:%M"),
                    if open { "open" } else { "closed" },
                    window
                ),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "at": at,
                        "open": open,
                        "window": window,
                    }))?
                ),
            }
            Ok(())
        }
        ApexCommand::Completions { shell } => {
            clap_complete::generate(shell, &mut ApexCli::command(), "apex", &mut io::stdout());
            Ok(())
        }
    }
}
