//! Tick pacing for the runtime.
//!
//! The runtime is asked to tick periodically. A tick must finish before the next one
//! is scheduled, and consecutive tick starts are at least `min_interval` apart even
//! when a tick completes faster. Ticks always run on the thread that owns the
//! [`GuiContext`](crate::GuiContext); [`Ticker`] only decides *when*.

use std::{
    sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender},
    thread::JoinHandle,
    time::{Duration, Instant},
};

use anyhow::Context as _;

use crate::{config::HostSettings, foundation::error::HostResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Minimum spacing between tick starts.
pub struct TickCadence {
    min_interval: Duration,
}

impl TickCadence {
    /// Cadence with the given floor.
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    /// Cadence from [`HostSettings::min_tick_ms`].
    pub fn from_settings(settings: &HostSettings) -> Self {
        Self::new(settings.min_tick())
    }

    /// Configured floor.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// How long to wait after a tick that took `elapsed` before starting the next.
    pub fn delay_after(&self, elapsed: Duration) -> Duration {
        self.min_interval.saturating_sub(elapsed)
    }

    /// Run `max_ticks` ticks on the calling thread, pacing them by the floor.
    ///
    /// `tick` receives the 1-based tick number. The first error stops the loop and is
    /// returned. Returns the number of ticks run.
    pub fn run<F>(&self, max_ticks: u64, mut tick: F) -> HostResult<u64>
    where
        F: FnMut(u64) -> HostResult<()>,
    {
        for seq in 1..=max_ticks {
            let started = Instant::now();
            tick(seq)?;
            if seq < max_ticks {
                std::thread::sleep(self.delay_after(started.elapsed()));
            }
        }
        Ok(max_ticks)
    }
}

/// What the pacing thread can be woken by while a tick is outstanding or sleeping.
#[derive(Debug)]
enum Signal {
    Ack,
    Stop,
}

/// A pending tick. Completing it (or dropping it) lets the ticker schedule the next.
#[derive(Debug)]
pub struct TickRequest {
    seq: u64,
    signals: SyncSender<Signal>,
}

impl TickRequest {
    /// 1-based tick number.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Acknowledge the tick.
    pub fn complete(self) {
        drop(self);
    }
}

impl Drop for TickRequest {
    fn drop(&mut self) {
        // Full or disconnected both mean the ticker no longer waits on this tick.
        let _ = self.signals.try_send(Signal::Ack);
    }
}

/// Background pacing thread that posts [`TickRequest`]s to its owner.
///
/// Requests travel over a rendezvous channel, and the thread waits for each one to be
/// acknowledged before sleeping out the rest of the floor, so at most one tick is
/// ever outstanding. Dropping the `Ticker` stops the thread, even while its owner
/// still holds an unacknowledged request.
#[derive(Debug)]
pub struct Ticker {
    requests: Option<Receiver<TickRequest>>,
    signals: Option<SyncSender<Signal>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start pacing ticks at `min_interval`.
    pub fn spawn(min_interval: Duration) -> HostResult<Self> {
        let cadence = TickCadence::new(min_interval);
        let (req_tx, req_rx) = mpsc::sync_channel::<TickRequest>(0);
        // One ack plus one stop can be pending at once.
        let (sig_tx, sig_rx) = mpsc::sync_channel::<Signal>(2);
        let acks = sig_tx.clone();

        let handle = std::thread::Builder::new()
            .name("spritehost-ticker".to_owned())
            .spawn(move || pace(cadence, req_tx, acks, sig_rx))
            .context("spawn ticker thread")?;

        Ok(Self {
            requests: Some(req_rx),
            signals: Some(sig_tx),
            handle: Some(handle),
        })
    }

    /// Block for the next tick, run `f` on the calling thread, and acknowledge it.
    ///
    /// Returns `None` once the pacing thread has ended.
    pub fn serve_one<R>(&self, f: impl FnOnce(u64) -> R) -> Option<R> {
        let req = self.requests.as_ref()?.recv().ok()?;
        let out = f(req.seq());
        req.complete();
        Some(out)
    }

    /// Wait up to `timeout` for the next tick request.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<TickRequest> {
        self.requests.as_ref()?.recv_timeout(timeout).ok()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(signals) = self.signals.take() {
            let _ = signals.try_send(Signal::Stop);
        }
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("ticker thread panicked");
        }
    }
}

fn pace(
    cadence: TickCadence,
    requests: SyncSender<TickRequest>,
    acks: SyncSender<Signal>,
    signals: Receiver<Signal>,
) {
    let mut seq = 0u64;
    loop {
        let started = Instant::now();
        seq += 1;
        let req = TickRequest {
            seq,
            signals: acks.clone(),
        };
        if requests.send(req).is_err() {
            break;
        }
        match signals.recv() {
            Ok(Signal::Ack) => {}
            Ok(Signal::Stop) | Err(_) => break,
        }
        tracing::trace!(seq, elapsed = ?started.elapsed(), "tick served");

        // No request is outstanding here, so only a stop can arrive.
        match signals.recv_timeout(cadence.delay_after(started.elapsed())) {
            Ok(Signal::Ack) | Err(RecvTimeoutError::Timeout) => {}
            Ok(Signal::Stop) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    tracing::debug!(ticks = seq, "ticker stopped");
}

#[cfg(test)]
#[path = "../tests/unit/cadence.rs"]
mod tests;
