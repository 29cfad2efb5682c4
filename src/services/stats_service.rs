use serde::Serialize;

use crate::models::{Alert, Direction};

/// Aggregates shown in the stats bar. Derived on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Stats {
    pub pumps: usize,
    pub dumps: usize,
    /// Largest pump move, 0 when there are no pumps.
    pub max_pump: f64,
    /// Most negative dump move, 0 when there are no dumps.
    pub max_dump: f64,
}

impl Stats {
    pub fn from_alerts<'a, I>(alerts: I) -> Self
    where
        I: IntoIterator<Item = &'a Alert>,
    {
        alerts.into_iter().fold(Stats::default(), |mut s, a| {
            match a.direction {
                Direction::Pump => {
                    s.pumps += 1;
                    s.max_pump = s.max_pump.max(a.percent_change);
                }
                Direction::Dump => {
                    s.dumps += 1;
                    s.max_dump = s.max_dump.min(a.percent_change);
                }
            }
            s
        })
    }

    /// Whole-percent label; halves round away from zero (`90.5` -> `+91%`).
    pub fn max_pump_label(&self) -> String {
        format!("+{:.0}%", self.max_pump.round())
    }

    pub fn max_dump_label(&self) -> String {
        format!("{:.0}%", self.max_dump.round())
    }
}
