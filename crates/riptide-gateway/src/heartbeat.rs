//! Heartbeat scheduler
//!
//! Emits a `Ping` on a fixed period for the lifetime of the connection,
//! independent of read/write traffic. The reply `Pong` is consumed by the
//! dispatch router but never correlated back to a specific ping; this is a
//! liveness signal, not an RTT probe.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;

use crate::connection::CommandSender;
use crate::protocol::ClientCommand;

/// Periodic keep-alive emitter
#[derive(Debug)]
pub struct Heartbeat {
    period: Duration,
    commands: CommandSender,
    shutdown: watch::Receiver<bool>,
}

impl Heartbeat {
    pub fn new(period: Duration, commands: CommandSender, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            period,
            commands,
            shutdown,
        }
    }

    /// Run until the shutdown signal fires
    ///
    /// The first ping goes out one full period after start. No tick fires
    /// after cancellation, and the task ends promptly, so connection
    /// teardown leaves nothing behind.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Burst);
        // An interval's first tick completes immediately; swallow it so the
        // schedule starts one period from now.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.changed() => break,
                _ = ticker.tick() => {
                    let ping = ClientCommand::Ping {
                        time: chrono::Utc::now().timestamp(),
                    };
                    if let Err(e) = self.commands.send(ping).await {
                        // Write path is gone; the read loop will notice the
                        // dead connection on its own.
                        tracing::warn!(error = %e, "Heartbeat send failed, stopping");
                        break;
                    }
                    tracing::trace!("Heartbeat sent");
                }
            }
        }

        tracing::debug!("Heartbeat stopped");
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    fn harness(period: Duration) -> (Heartbeat, mpsc::Receiver<ClientCommand>, watch::Sender<bool>) {
        let (tx, rx) = mpsc::channel(16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let heartbeat = Heartbeat::new(period, CommandSender::new(tx), shutdown_rx);
        (heartbeat, rx, shutdown_tx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_periods_yield_three_pings() {
        let period = Duration::from_secs(20);
        let (heartbeat, mut rx, _shutdown_tx) = harness(period);
        let task = tokio::spawn(heartbeat.run());
        // Let the task start its interval before moving the clock.
        tokio::task::yield_now().await;

        for _ in 0..3 {
            tokio::time::advance(period).await;
            tokio::task::yield_now().await;
        }

        let mut pings = Vec::new();
        while let Ok(command) = rx.try_recv() {
            pings.push(command);
        }
        assert_eq!(pings.len(), 3);
        for command in &pings {
            assert!(matches!(command, ClientCommand::Ping { .. }));
        }

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ping_timestamps_are_non_decreasing() {
        let period = Duration::from_millis(50);
        let (heartbeat, mut rx, _shutdown_tx) = harness(period);
        let task = tokio::spawn(heartbeat.run());
        tokio::task::yield_now().await;

        for _ in 0..4 {
            tokio::time::advance(period).await;
            tokio::task::yield_now().await;
        }

        let mut last = i64::MIN;
        while let Ok(ClientCommand::Ping { time }) = rx.try_recv() {
            assert!(time >= last);
            last = time;
        }

        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_first_tick_emits_nothing() {
        let period = Duration::from_secs(20);
        let (heartbeat, mut rx, shutdown_tx) = harness(period);
        let task = tokio::spawn(heartbeat.run());

        // Cancel well before the first period elapses.
        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        shutdown_tx.send(true).unwrap();

        // The task must terminate on its own - no leak past cancellation.
        task.await.unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_after_cancellation() {
        let period = Duration::from_secs(20);
        let (heartbeat, mut rx, shutdown_tx) = harness(period);
        let task = tokio::spawn(heartbeat.run());
        tokio::task::yield_now().await;

        tokio::time::advance(period).await;
        tokio::task::yield_now().await;
        shutdown_tx.send(true).unwrap();
        task.await.unwrap();

        // Exactly the one pre-cancellation ping.
        assert!(rx.try_recv().is_ok());
        tokio::time::advance(period * 5).await;
        assert!(rx.try_recv().is_err());
    }
}
