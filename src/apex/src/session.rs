use std::{fs, path::Path};

use anyhow::Context;

use crate::{CalculatorForm, FormAction, FormEffect, LeadError, LeadSink};

/// Reads a JSON array of form actions.
pub fn load_script(path: &Path) -> anyhow::Result<Vec<FormAction>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading session script {}", path.display()))?;
    let actions = serde_json::from_str(&raw)
        .with_context(|| format!("parsing session script {}", path.display()))?;
    Ok(actions)
}

/// Feeds every action through the form, handing lead effects to `sink`.
pub fn run_session(
    mut form: CalculatorForm,
    actions: impl IntoIterator<Item = FormAction>,
    sink: &mut impl LeadSink,
) -> Result<CalculatorForm, LeadError> {
    for action in actions {
        let (next, effect) = form.reduce(action);
        form = next;
        if let Some(FormEffect::CaptureLead(lead)) = effect {
            let record = sink.capture(lead)?;
            debug!("Lead {} stored", record.id);
        }
    }
    Ok(form)
}
