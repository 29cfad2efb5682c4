use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use super::{Alert, Direction};

/// Category selected by a viewer. Filtering never reorders the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pump,
    Dump,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter category `{0}`")]
pub struct UnknownFilter(pub String);

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pump, Filter::Dump];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pump => "pump",
            Filter::Dump => "dump",
        }
    }

    pub fn matches(self, alert: &Alert) -> bool {
        match self {
            Filter::All => true,
            Filter::Pump => alert.direction == Direction::Pump,
            Filter::Dump => alert.direction == Direction::Dump,
        }
    }

    pub fn apply<'a, I>(self, alerts: I) -> Vec<Alert>
    where
        I: IntoIterator<Item = &'a Alert>,
    {
        alerts
            .into_iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect()
    }
}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "pump" => Ok(Filter::Pump),
            "dump" => Ok(Filter::Dump),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
