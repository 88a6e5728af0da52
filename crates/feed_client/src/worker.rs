//! Background worker bridging a loop-owning thread to feed refreshes.
//!
//! The host UI runs a single-threaded cooperative loop and must never block
//! in it. Refreshes execute on a dedicated runtime thread; results come back
//! over a channel the loop drains at its own pace. Commands are handled one
//! at a time, so at most one fetch is in flight and the most recent result
//! to arrive replaces anything older on the consumer side.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TrySendError};
use shared::domain::Transition;
use url::Url;

use crate::{TransitionFeed, DEFAULT_FEED_URL, FEED_FETCH_TIMEOUT};

/// Commands queued from the loop-owning thread to the worker.
pub enum FeedCommand {
    Refresh,
}

/// Events delivered back to the loop-owning thread.
pub enum FeedEvent {
    Info(String),
    /// A refresh finished. Failures arrive as the empty list, matching what
    /// the consumer renders for "no data yet".
    TransitionsLoaded(Vec<Transition>),
    /// The worker could not start; no further events will follow.
    Error(String),
}

pub struct FeedWorkerConfig {
    pub feed_url: String,
    pub timeout: Duration,
}

impl Default for FeedWorkerConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout: FEED_FETCH_TIMEOUT,
        }
    }
}

pub fn start_feed_worker(cmd_rx: Receiver<FeedCommand>, ui_tx: Sender<FeedEvent>) {
    start_feed_worker_with(
        TransitionFeed::new(),
        FeedWorkerConfig::default(),
        cmd_rx,
        ui_tx,
    );
}

/// Spawns the worker thread with an explicit feed and config; tests use this
/// to substitute the transport and point at a local server.
pub fn start_feed_worker_with(
    feed: TransitionFeed,
    config: FeedWorkerConfig,
    cmd_rx: Receiver<FeedCommand>,
    ui_tx: Sender<FeedEvent>,
) {
    thread::spawn(move || {
        let feed_url = match Url::parse(&config.feed_url) {
            Ok(url) => url,
            Err(err) => {
                let _ = ui_tx.try_send(FeedEvent::Error(format!(
                    "feed worker startup failure: invalid feed url '{}': {err}",
                    config.feed_url
                )));
                tracing::error!("invalid feed url '{}': {err}", config.feed_url);
                return;
            }
        };

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(FeedEvent::Error(format!(
                    "feed worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build feed worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(FeedEvent::Info("Feed worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    FeedCommand::Refresh => {
                        let transitions = feed.fetch(&feed_url, config.timeout).await;
                        if ui_tx
                            .try_send(FeedEvent::TransitionsLoaded(transitions))
                            .is_err()
                        {
                            break;
                        }
                    }
                }
            }
        });
    });
}

/// Non-blocking enqueue from the loop-owning side; queue trouble lands in a
/// status line instead of blocking the loop.
pub fn dispatch_feed_command(cmd_tx: &Sender<FeedCommand>, cmd: FeedCommand, status: &mut String) {
    let cmd_name = match &cmd {
        FeedCommand::Refresh => "refresh",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued feed command"),
        Err(TrySendError::Full(_)) => {
            *status = "Feed command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Feed worker disconnected; restart the refresh worker".to_string();
        }
    }
}

#[cfg(test)]
#[path = "tests/worker_tests.rs"]
mod tests;
