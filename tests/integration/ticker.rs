//! Integration tests for the tick schedule.
//!
//! Runs on tokio's paused clock so "one second" is virtual and the tests
//! are deterministic.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use pomotask::app::App;
use pomotask::ticker::{TICK_PERIOD, Ticker};
use pomotask_core::Intent;
use tokio::time::{Instant, sleep, timeout};

fn drain(rx: &mut tokio::sync::mpsc::Receiver<pomotask::ticker::Tick>) -> usize {
    let mut count = 0;
    while rx.try_recv().is_ok() {
        count += 1;
    }
    count
}

#[tokio::test(start_paused = true)]
async fn first_tick_arrives_after_one_period() {
    let (mut ticker, mut rx) = Ticker::new(TICK_PERIOD, 8);
    let started = Instant::now();
    ticker.start();

    let tick = rx.recv().await.expect("tick");
    assert_eq!(tick.generation, ticker.generation());
    assert!(ticker.is_current(tick));
    assert_eq!(started.elapsed(), TICK_PERIOD);
}

#[tokio::test(start_paused = true)]
async fn one_tick_per_second_with_single_schedule() {
    let (mut ticker, mut rx) = Ticker::new(TICK_PERIOD, 16);
    ticker.sync(true);
    ticker.sync(true);
    ticker.start();

    sleep(Duration::from_millis(3500)).await;
    assert_eq!(drain(&mut rx), 3);
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_schedule() {
    let (mut ticker, mut rx) = Ticker::new(TICK_PERIOD, 8);
    ticker.start();
    ticker.stop();

    let result = timeout(Duration::from_secs(5), rx.recv()).await;
    assert!(result.is_err(), "no tick after stop");
}

#[tokio::test(start_paused = true)]
async fn drop_closes_channel() {
    let (mut ticker, mut rx) = Ticker::new(TICK_PERIOD, 8);
    ticker.start();
    drop(ticker);

    let result = timeout(Duration::from_secs(5), rx.recv()).await;
    assert_eq!(result.expect("channel should close"), None);
}

#[tokio::test(start_paused = true)]
async fn ticks_from_old_schedule_are_stale() {
    let (mut ticker, mut rx) = Ticker::new(TICK_PERIOD, 8);
    ticker.start();
    sleep(Duration::from_millis(1500)).await;
    ticker.stop();
    ticker.start();

    let buffered = rx.try_recv().expect("tick buffered before restart");
    assert!(!ticker.is_current(buffered));
}

#[tokio::test(start_paused = true)]
async fn app_follows_ticks_while_running() {
    let mut app = App::new();
    let (mut ticker, mut rx) = Ticker::new(TICK_PERIOD, 16);

    app.dispatch(Intent::Start);
    ticker.sync(app.clock_running());
    for _ in 0..5 {
        let tick = rx.recv().await.expect("tick");
        if ticker.is_current(tick) {
            app.tick();
        }
    }
    assert_eq!(app.controller.clock().display(), "24:55");

    app.dispatch(Intent::Pause);
    ticker.sync(app.clock_running());
    assert!(!ticker.is_active());
    sleep(Duration::from_secs(10)).await;
    assert_eq!(drain(&mut rx), 0);
    assert_eq!(app.controller.clock().display(), "24:55");
}
