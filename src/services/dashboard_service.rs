//! View models for the dashboard templates.
//!
//! Every partial is a pure function of the context built here; no template
//! reaches back into the feed.

use chrono::Local;
use rand::Rng;
use serde_json::{json, Value};

use crate::{
    models::{Alert, Filter},
    services::stats_service::Stats,
};

pub const PUMP_COLOR: &str = "#00ff88";
pub const DUMP_COLOR: &str = "#ff0055";
pub const NEUTRAL_COLOR: &str = "#00d4ff";
const IDLE_BORDER: &str = "#1a1a2e";
const IDLE_TEXT: &str = "#606080";

const RAIN_COLUMNS: usize = 30;
const RAIN_ROWS: usize = 30;
const RAIN_CHARS: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン0123456789MEGAETH";

fn accent(filter: Filter) -> &'static str {
    match filter {
        Filter::All => NEUTRAL_COLOR,
        Filter::Pump => PUMP_COLOR,
        Filter::Dump => DUMP_COLOR,
    }
}

/// `+45.5%`, `-120%`: trailing zeros dropped, explicit plus for gains.
pub fn percent_label(pct: f64) -> String {
    let sign = if pct > 0.0 { "+" } else { "" };
    format!("{sign}{pct}%")
}

pub fn card_ctx(alert: &Alert, index: usize) -> Value {
    let color = if alert.is_pump() { PUMP_COLOR } else { DUMP_COLOR };

    json!({
        "id": alert.id,
        "name": alert.name,
        "symbol": alert.symbol,
        "type": alert.direction.as_str(),
        "is_pump": alert.is_pump(),
        "badge": if alert.is_pump() { "▲ PUMP" } else { "▼ DUMP" },
        "accent": color,
        "percent": percent_label(alert.percent_change),
        "price": alert.price,
        "volume_24h": alert.volume_24h,
        "market_cap": alert.market_cap,
        "time": alert.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string(),
        "timestamp": alert.timestamp.to_rfc3339(),
        "delay": format!("{:.2}", index as f64 * 0.05),
    })
}

pub fn grid_ctx(alerts: &[Alert], filter: Filter) -> Value {
    let cards: Vec<Value> = alerts
        .iter()
        .enumerate()
        .map(|(i, a)| card_ctx(a, i))
        .collect();

    json!({
        "filter": filter.as_str(),
        "has_alerts": !cards.is_empty(),
        "cards": cards,
    })
}

pub fn stats_ctx(stats: &Stats) -> Value {
    let tiles = [
        ("PUMPS", stats.pumps.to_string(), PUMP_COLOR),
        ("DUMPS", stats.dumps.to_string(), DUMP_COLOR),
        ("MAX PUMP", stats.max_pump_label(), PUMP_COLOR),
        ("MAX DUMP", stats.max_dump_label(), DUMP_COLOR),
    ];

    let tiles: Vec<Value> = tiles
        .iter()
        .enumerate()
        .map(|(i, (label, value, color))| {
            json!({
                "label": label,
                "value": value,
                "color": color,
                "delay": format!("{:.1}", 0.2 + i as f64 * 0.1),
            })
        })
        .collect();

    json!({ "tiles": tiles })
}

pub fn controls_ctx(live: bool, filter: Filter) -> Value {
    let buttons: Vec<Value> = Filter::ALL
        .iter()
        .map(|&f| {
            let active = f == filter;
            let color = accent(f);
            json!({
                "value": f.as_str(),
                "active": active,
                "background": if active { format!("{color}22") } else { "transparent".to_string() },
                "border": if active { color } else { IDLE_BORDER },
                "color": if active { color } else { IDLE_TEXT },
            })
        })
        .collect();

    json!({
        "live": live,
        "status_text": if live { "LIVE FEED ACTIVE" } else { "FEED PAUSED" },
        "toggle_label": if live { "◼ PAUSE" } else { "▶ RESUME" },
        "dot_color": if live { PUMP_COLOR } else { "#505060" },
        "filter": filter.as_str(),
        "buttons": buttons,
    })
}

/// Background rain: fixed column count, random glyphs and timings per render.
pub fn matrix_rain_ctx<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let glyphs: Vec<char> = RAIN_CHARS.chars().collect();

    let columns: Vec<Value> = (0..RAIN_COLUMNS)
        .map(|i| {
            let rows: Vec<Value> = (0..RAIN_ROWS)
                .map(|j| {
                    json!({
                        "glyph": glyphs[rng.gen_range(0..glyphs.len())].to_string(),
                        "opacity": format!("{:.2}", 1.0 - j as f64 * 0.03),
                    })
                })
                .collect();

            json!({
                "left": format!("{:.3}", i as f64 / RAIN_COLUMNS as f64 * 100.0),
                "duration": format!("{:.2}", rng.gen_range(8.0..20.0)),
                "delay": format!("{:.2}", -rng.gen_range(0.0..20.0)),
                "rows": rows,
            })
        })
        .collect();

    json!({ "columns": columns })
}

pub fn dashboard_ctx<R: Rng + ?Sized>(
    snapshot: &[Alert],
    live: bool,
    filter: Filter,
    rng: &mut R,
) -> Value {
    let visible = filter.apply(snapshot);
    let stats = Stats::from_alerts(snapshot);

    json!({
        "rain": matrix_rain_ctx(rng),
        "controls": controls_ctx(live, filter),
        "stats": stats_ctx(&stats),
        "grid": grid_ctx(&visible, filter),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use chrono::Utc;
    use rand::{rngs::StdRng, SeedableRng};

    fn alert(id: &str, direction: Direction, pct: f64) -> Alert {
        Alert {
            id: id.to_string(),
            name: "VoidToken".to_string(),
            symbol: "VOID".to_string(),
            direction,
            percent_change: pct,
            price: "$3.141593".to_string(),
            volume_24h: "$5,000".to_string(),
            market_cap: "$50,000".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn percent_labels_match_display_rules() {
        assert_eq!(percent_label(45.5), "+45.5%");
        assert_eq!(percent_label(120.0), "+120%");
        assert_eq!(percent_label(-33.25), "-33.25%");
    }

    #[test]
    fn cards_carry_direction_styling_and_stagger() {
        let pump = card_ctx(&alert("p", Direction::Pump, 20.5), 0);
        let dump = card_ctx(&alert("d", Direction::Dump, -99.0), 3);

        assert_eq!(pump["badge"], "▲ PUMP");
        assert_eq!(pump["accent"], PUMP_COLOR);
        assert_eq!(dump["badge"], "▼ DUMP");
        assert_eq!(dump["accent"], DUMP_COLOR);
        assert_eq!(dump["delay"], "0.15");
    }

    #[test]
    fn only_the_active_filter_button_is_highlighted() {
        let ctx = controls_ctx(false, Filter::Dump);
        let buttons = ctx["buttons"].as_array().unwrap();

        let active: Vec<_> = buttons.iter().filter(|b| b["active"] == true).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["value"], "dump");
        assert_eq!(active[0]["color"], DUMP_COLOR);
        assert_eq!(ctx["toggle_label"], "▶ RESUME");
        assert_eq!(ctx["status_text"], "FEED PAUSED");
    }

    #[test]
    fn rain_has_fixed_geometry() {
        let mut rng = StdRng::seed_from_u64(1);
        let ctx = matrix_rain_ctx(&mut rng);
        let columns = ctx["columns"].as_array().unwrap();

        assert_eq!(columns.len(), 30);
        assert!(columns.iter().all(|c| c["rows"].as_array().unwrap().len() == 30));
        assert_eq!(columns[0]["rows"][0]["opacity"], "1.00");
    }

    #[test]
    fn dashboard_stats_cover_the_whole_feed_while_grid_is_filtered() {
        let mut rng = StdRng::seed_from_u64(2);
        let snapshot = vec![
            alert("a", Direction::Pump, 30.0),
            alert("b", Direction::Dump, -40.0),
        ];

        let ctx = dashboard_ctx(&snapshot, true, Filter::Dump, &mut rng);

        assert_eq!(ctx["grid"]["cards"].as_array().unwrap().len(), 1);
        assert_eq!(ctx["stats"]["tiles"][0]["value"], "1");
        assert_eq!(ctx["stats"]["tiles"][1]["value"], "1");
        assert_eq!(ctx["stats"]["tiles"][2]["value"], "+30%");
    }
}
