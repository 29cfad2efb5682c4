use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::{
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use crate::{config::Settings, services::generator, AppState};

pub const FEED_UPDATED: &str = "feedUpdated";

/// Tick period for one live session, uniform in `[min, max)` milliseconds.
pub fn next_delay<R: Rng + ?Sized>(rng: &mut R, settings: &Settings) -> Duration {
    let min = settings.feed_min_delay_ms;
    let max = settings.feed_max_delay_ms.max(min + 1);
    Duration::from_millis(rng.gen_range(min..max))
}

/// Spawns the single task that drives the live feed.
///
/// Each live session picks one period from the configured window and fires at
/// that fixed rate. Pausing cancels the timer; resuming draws a fresh period.
pub fn spawn_feed_ticker(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        let mut live_rx = state.feed.subscribe_live();

        tracing::info!(
            "feed ticker started (period {}..{} ms)",
            state.settings.feed_min_delay_ms,
            state.settings.feed_max_delay_ms
        );

        loop {
            while !*live_rx.borrow_and_update() {
                if live_rx.changed().await.is_err() {
                    return;
                }
            }

            let period = next_delay(&mut rng, &state.settings);
            tracing::debug!("feed live, ticking every {} ms", period.as_millis());

            // first tick one full period out, not immediately
            let mut ticks = time::interval_at(time::Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        let alert = generator::generate_alert(&mut rng, state.settings.feed_pump_bias);

                        if let Some(stored) = state.feed.push_if_live(alert, &mut rng).await {
                            tracing::debug!(
                                "generated {} ${} {:+}%",
                                stored.direction.as_str(),
                                stored.symbol,
                                stored.percent_change
                            );
                            let _ = state.alerts_tx.send(stored);
                            let _ = state.events_tx.send(FEED_UPDATED.to_string());
                        }
                    }

                    changed = live_rx.changed() => {
                        if changed.is_err() {
                            return;
                        }
                        // flag flipped: drop this session's timer
                        break;
                    }
                }
            }
        }
    })
}
