use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Pump,
    Dump,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Pump => "pump",
            Direction::Dump => "dump",
        }
    }

    pub fn is_pump(self) -> bool {
        matches!(self, Direction::Pump)
    }
}

/// One simulated price-move alert. Never mutated once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub name: String,
    pub symbol: String,

    #[serde(rename = "type")]
    pub direction: Direction,

    // signed, two decimals; sign always agrees with `direction`
    pub percent_change: f64,

    // pre-formatted currency strings ("$1,234,567")
    pub price: String,
    pub volume_24h: String,
    pub market_cap: String,

    pub timestamp: DateTime<Utc>,
}

impl Alert {
    pub fn is_pump(&self) -> bool {
        self.direction.is_pump()
    }
}
