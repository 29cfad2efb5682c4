mod common;

use std::time::Duration;

use megapump::services::feed_ticker::spawn_feed_ticker;
use megapump::models::Alert;
use tokio::{
    sync::broadcast::{self, error::TryRecvError},
    time::Instant,
};

use common::test_state;

#[tokio::test(start_paused = true)]
async fn live_feed_generates_on_randomized_interval() {
    let state = test_state(vec![], true).await;
    let ticker = spawn_feed_ticker(state.clone());

    tokio::time::sleep(Duration::from_millis(3_999)).await;
    assert_eq!(state.feed.status().await.count, 0, "no alert before the minimum delay");

    // delays are in [4s, 7s): 70s yields between 10 and 17 alerts
    tokio::time::sleep(Duration::from_millis(70_000 - 3_999)).await;
    let count = state.feed.status().await.count;
    assert!((10..=17).contains(&count), "got {count} alerts");

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn retained_window_is_capped_and_newest_first() {
    let state = test_state(vec![], true).await;
    let mut alerts_rx = state.alerts_tx.subscribe();
    let ticker = spawn_feed_ticker(state.clone());

    // at least 57 firings
    tokio::time::sleep(Duration::from_secs(400)).await;
    ticker.abort();

    let snapshot = state.feed.snapshot().await;
    assert_eq!(snapshot.len(), 50);

    let mut last = None;
    loop {
        match alerts_rx.try_recv() {
            Ok(a) => last = Some(a),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }
    // the broadcast may lag, but the last alert sent is the newest one
    assert_eq!(last.map(|a| a.id), Some(snapshot[0].id.clone()));

    let mut ids: Vec<&str> = snapshot.iter().map(|a| a.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50, "ids are unique within the window");
}

#[tokio::test(start_paused = true)]
async fn pausing_stops_generation_and_resuming_restarts_it() {
    let state = test_state(vec![], true).await;
    let ticker = spawn_feed_ticker(state.clone());

    tokio::time::sleep(Duration::from_secs(15)).await;
    state.feed.set_live(false).await;
    let paused_at = state.feed.status().await.count;
    assert!(paused_at >= 2);

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(state.feed.status().await.count, paused_at, "no ghost ticks while paused");

    state.feed.set_live(true).await;
    tokio::time::sleep(Duration::from_millis(7_000)).await;
    assert!(state.feed.status().await.count > paused_at);

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn feed_starting_paused_waits_for_resume() {
    let state = test_state(vec![], false).await;
    let ticker = spawn_feed_ticker(state.clone());

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(state.feed.status().await.count, 0);

    state.feed.toggle_live().await;
    tokio::time::sleep(Duration::from_millis(7_000)).await;
    assert!(state.feed.status().await.count >= 1);

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn each_tick_publishes_a_feed_event() {
    let state = test_state(vec![], true).await;
    let mut events_rx = state.events_tx.subscribe();
    let ticker = spawn_feed_ticker(state.clone());

    let evt = tokio::time::timeout(Duration::from_secs(8), events_rx.recv())
        .await
        .expect("event within the max delay")
        .unwrap();
    assert_eq!(evt, "feedUpdated");

    ticker.abort();
}

/// Time between `start` and each of the next `n` alerts, then between alerts.
async fn alert_gaps(rx: &mut broadcast::Receiver<Alert>, start: Instant, n: usize) -> Vec<Duration> {
    let mut last = start;
    let mut gaps = Vec::with_capacity(n);
    for _ in 0..n {
        rx.recv().await.unwrap();
        let now = Instant::now();
        gaps.push(now - last);
        last = now;
    }
    gaps
}

#[tokio::test(start_paused = true)]
async fn live_session_ticks_at_a_fixed_period() {
    let state = test_state(vec![], true).await;
    let mut alerts_rx = state.alerts_tx.subscribe();
    let start = Instant::now();
    let ticker = spawn_feed_ticker(state.clone());

    let gaps = alert_gaps(&mut alerts_rx, start, 5).await;
    let period = gaps[0];
    assert!(
        (Duration::from_millis(4_000)..Duration::from_millis(7_000)).contains(&period),
        "{period:?}"
    );
    assert!(gaps.iter().all(|g| *g == period), "uneven gaps {gaps:?}");

    state.feed.set_live(false).await;
    tokio::time::sleep(Duration::from_secs(30)).await;

    // resuming schedules a fresh timer; its period may differ but stays fixed
    state.feed.set_live(true).await;
    let gaps = alert_gaps(&mut alerts_rx, Instant::now(), 5).await;
    let period = gaps[0];
    assert!(
        (Duration::from_millis(4_000)..Duration::from_millis(7_000)).contains(&period),
        "{period:?}"
    );
    assert!(gaps.iter().all(|g| *g == period), "uneven gaps after resume {gaps:?}");

    ticker.abort();
}
