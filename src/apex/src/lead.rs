use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

use crate::{LeadError, phone::format_mexican_phone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LeadSource {
    Calculator,
    QuickRegister,
}

/// Contact details handed over by a visitor, before any id is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCapture {
    pub phone: String,
    pub daily_calories: Option<i64>,
    pub source: LeadSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: Uuid,
    pub captured_at: DateTime<Utc>,
    #[serde(flatten)]
    pub lead: LeadCapture,
}

impl LeadRecord {
    pub fn new(lead: LeadCapture) -> Self {
        Self {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            lead,
        }
    }
}

pub trait LeadSink {
    fn capture(&mut self, lead: LeadCapture) -> Result<LeadRecord, LeadError>;
}

/// Writes captured leads to the log and nowhere else.
#[derive(Debug, Default)]
pub struct LogLeadSink {
    captured: usize,
}

impl LogLeadSink {
    pub fn captured(&self) -> usize {
        self.captured
    }
}

impl LeadSink for LogLeadSink {
    fn capture(&mut self, lead: LeadCapture) -> Result<LeadRecord, LeadError> {
        let record = LeadRecord::new(lead);
        info!(
            "Lead captured from {} ({}): {}",
            record.lead.source,
            format_mexican_phone(&record.lead.phone),
            serde_json::to_string(&record)?
        );
        self.captured += 1;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_flattens_lead() {
        let record = LeadRecord::new(LeadCapture {
            phone: "5512345678".into(),
            daily_calories: Some(2749),
            source: LeadSource::Calculator,
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["phone"], "5512345678");
        assert_eq!(json["daily_calories"], 2749);
        assert_eq!(json["source"], "calculator");
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_log_sink_counts() {
        let mut sink = LogLeadSink::default();
        let lead = LeadCapture {
            phone: "5512345678".into(),
            daily_calories: None,
            source: LeadSource::QuickRegister,
        };
        let first = sink.capture(lead.clone()).unwrap();
        let second = sink.capture(lead).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(sink.captured(), 2);
    }
}
