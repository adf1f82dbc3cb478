// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pull-to-refresh without a window.
//!
//! Drive `understory_pull_refresh` with scripted swipes and print what a host
//! would draw each step: a short pull that springs back, a pull past the
//! trigger that refreshes, a completion posted from a worker thread, and a
//! programmatic refresh.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example pull_refresh_headless`

use std::thread;
use std::time::Duration;

use understory_demos::{describe, run_frames, vertical_swipe};
use understory_event_state::touch::PointerId;
use understory_pull_refresh::{RefreshConfig, RefreshHeader, ScrollOffset, SwipeRefresh};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RefreshConfig::default();
    match serde_json::to_string(&config) {
        Ok(json) => println!("config: {json}"),
        Err(err) => log::warn!("could not serialize config: {err}"),
    }

    let header = RefreshHeader::new(kurbo::Size::new(140.0, 32.0));
    let mut refresh: SwipeRefresh<ScrollOffset> = match SwipeRefresh::with_config(header, config) {
        Ok(refresh) => refresh,
        Err(err) => {
            log::error!("invalid config: {err}");
            return;
        }
    };
    refresh.set_target(ScrollOffset::TOP);
    refresh.set_on_refresh_listener(|| println!(">> listener: load new items"));

    println!("\n-- short pull (30 of overscroll)");
    for event in vertical_swipe(PointerId(0), 100.0, 160.0, 6) {
        refresh.dispatch_touch_event(&event);
        println!("{:?}: {}", event.action, describe(&refresh));
    }
    let frames = run_frames(&mut refresh);
    println!("settled after {frames} frames: {}", describe(&refresh));

    println!("\n-- long pull (75 of overscroll)");
    for event in vertical_swipe(PointerId(0), 100.0, 250.0, 6) {
        refresh.dispatch_touch_event(&event);
        println!("{:?}: {}", event.action, describe(&refresh));
    }
    run_frames(&mut refresh);
    println!("refreshing: {}", describe(&refresh));

    println!("\n-- completion from a worker thread");
    let handle = refresh.handle();
    let worker = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        handle.request_complete(true);
    });
    if worker.join().is_err() {
        log::error!("worker panicked");
        return;
    }
    // The UI loop wakes up and finds work to do.
    println!("pending completion: {}", refresh.has_pending_completion());
    let frames = run_frames(&mut refresh);
    println!("settled after {frames} frames: {}", describe(&refresh));

    println!("\n-- programmatic refresh");
    refresh.set_refreshing(true);
    run_frames(&mut refresh);
    println!("refreshing: {}", describe(&refresh));
    refresh.on_refreshing_complete(false);
    run_frames(&mut refresh);
    println!("done: {}", describe(&refresh));
}
