//! Wall-clock source for time and date replies.

use std::fmt::Write;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Source of the current local time.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// chrono format strings used to render time and date replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFormat {
    pub time: String,
    pub date: String,
}

const DEFAULT_TIME: &str = "%H:%M:%S";
const DEFAULT_DATE: &str = "%Y/%-m/%-d";

/// Render `now` with `pattern`, or with `fallback` if the pattern is invalid.
fn render(now: &DateTime<Local>, pattern: &str, fallback: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_ok() {
        return out;
    }
    tracing::warn!(pattern, "Invalid time format, using default");
    now.format(fallback).to_string()
}

impl TimeFormat {
    #[must_use]
    pub fn format_time(&self, now: &DateTime<Local>) -> String {
        render(now, &self.time, DEFAULT_TIME)
    }

    #[must_use]
    pub fn format_date(&self, now: &DateTime<Local>) -> String {
        render(now, &self.date, DEFAULT_DATE)
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            time: DEFAULT_TIME.to_string(),
            date: DEFAULT_DATE.to_string(),
        }
    }
}
