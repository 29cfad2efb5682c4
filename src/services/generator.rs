use chrono::Utc;
use rand::Rng;

use crate::models::{Alert, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const TOKENS: [Token; 10] = [
    Token { name: "MegaDoge", symbol: "MDOGE" },
    Token { name: "EthKiller", symbol: "ETHK" },
    Token { name: "MoonShot", symbol: "MOON" },
    Token { name: "GigaChad", symbol: "GIGA" },
    Token { name: "NeonPunk", symbol: "NEON" },
    Token { name: "CyberApe", symbol: "CAPE" },
    Token { name: "QuantumFlux", symbol: "QFLX" },
    Token { name: "HyperNode", symbol: "HYPE" },
    Token { name: "VoidToken", symbol: "VOID" },
    Token { name: "PlasmaCore", symbol: "PLSM" },
];

pub const MIN_MOVE_PCT: f64 = 20.0;
pub const MAX_MOVE_PCT: f64 = 200.0;

const MAX_PRICE: f64 = 10.0;
const MAX_VOLUME: f64 = 10_000_000.0;
const MAX_MARKET_CAP: f64 = 100_000_000.0;

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random 9 character base-36 identifier.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Two-decimal move size; rounding must not land on the exclusive upper bound.
fn move_magnitude(raw: f64) -> f64 {
    round2(raw).min(MAX_MOVE_PCT - 0.01)
}

/// Inserts `,` every three digits: 1234567 -> "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_usd_whole(amount: f64) -> String {
    format!("${}", group_thousands(amount.round().max(0.0) as u64))
}

/// Fabricates one alert. `pump_bias` is the probability of a pump.
pub fn generate_alert<R: Rng + ?Sized>(rng: &mut R, pump_bias: f64) -> Alert {
    let token = TOKENS[rng.gen_range(0..TOKENS.len())];

    let direction = if rng.gen_bool(pump_bias.clamp(0.0, 1.0)) {
        Direction::Pump
    } else {
        Direction::Dump
    };

    let magnitude = move_magnitude(rng.gen_range(MIN_MOVE_PCT..MAX_MOVE_PCT));
    let percent_change = match direction {
        Direction::Pump => magnitude,
        Direction::Dump => -magnitude,
    };

    Alert {
        id: random_id(rng),
        name: token.name.to_string(),
        symbol: token.symbol.to_string(),
        direction,
        percent_change,
        price: format!("${:.6}", rng.gen_range(0.0..MAX_PRICE)),
        volume_24h: format_usd_whole(rng.gen_range(0.0..MAX_VOLUME)),
        market_cap: format_usd_whole(rng.gen_range(0.0..MAX_MARKET_CAP)),
        timestamp: Utc::now(),
    }
}
