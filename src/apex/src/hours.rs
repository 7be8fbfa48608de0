use std::fmt::Display;

use chrono::{Datelike as _, NaiveDateTime, Timelike as _, Weekday};
use serde::Serialize;

/// Opening hours for one day, `opens` inclusive and `closes` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpeningWindow {
    pub opens: u32,
    pub closes: u32,
}

impl OpeningWindow {
    pub const fn new(opens: u32, closes: u32) -> Self {
        Self { opens, closes }
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        (self.opens..self.closes).contains(&hour)
    }
}

impl Display for OpeningWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:02}:00-{:02}:00", self.opens, self.closes))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudioHours {
    pub weekdays: OpeningWindow,
    pub saturday: OpeningWindow,
    pub sunday: OpeningWindow,
}

impl Default for StudioHours {
    fn default() -> Self {
        Self {
            weekdays: OpeningWindow::new(5, 23),
            saturday: OpeningWindow::new(6, 20),
            sunday: OpeningWindow::new(7, 15),
        }
    }
}

impl StudioHours {
    pub fn window(&self, day: Weekday) -> OpeningWindow {
        match day {
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
            _ => self.weekdays,
        }
    }

    pub fn is_open_at(&self, at: NaiveDateTime) -> bool {
        self.window(at.weekday()).contains_hour(at.hour())
    }
}
