//! Gateway client
//!
//! One `GatewayClient` owns at most one live connection. `start` dials,
//! authenticates, runs heartbeat and writer tasks, and blocks in the read
//! loop until the connection ends; there is no automatic reconnect. A
//! terminated client may be started again, which rebuilds state from the
//! fresh `Ready` snapshot.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use riptide_common::ClientConfig;
use tokio::sync::{mpsc, watch, Mutex};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;

use crate::connection::{run_writer, CommandSender};
use crate::dispatch::{EventHandler, Router};
use crate::error::GatewayError;
use crate::heartbeat::Heartbeat;
use crate::protocol::ClientCommand;
use crate::state::SessionState;

/// Outbound command queue depth before senders back-pressure
const COMMAND_BUFFER: usize = 64;

/// A client instance: configuration, mirrored state, and dispatch wiring
pub struct GatewayClient {
    config: ClientConfig,
    state: Arc<SessionState>,
    router: Arc<Router>,
    commands: CommandSender,
    // Held between connections; the writer task borrows it while one is up.
    command_rx: Arc<Mutex<mpsc::Receiver<ClientCommand>>>,
    shutdown_tx: watch::Sender<bool>,
}

impl GatewayClient {
    /// Build a client around a handler implementation
    pub fn new(config: ClientConfig, handler: Arc<dyn EventHandler>) -> Self {
        let state = Arc::new(SessionState::new());
        let router = Arc::new(Router::new(Arc::clone(&state), handler));
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (shutdown_tx, _) = watch::channel(false);

        Self {
            config,
            state,
            router,
            commands: CommandSender::new(command_tx),
            command_rx: Arc::new(Mutex::new(command_rx)),
            shutdown_tx,
        }
    }

    /// The mirrored session state
    #[must_use]
    pub fn state(&self) -> Arc<SessionState> {
        Arc::clone(&self.state)
    }

    /// Handle for sending commands; clone freely into handlers
    #[must_use]
    pub fn sender(&self) -> CommandSender {
        self.commands.clone()
    }

    /// Request teardown of the running connection
    ///
    /// `start` then returns `Ok(())` once the read loop notices. In-flight
    /// dispatch tasks are not cancelled; they run to completion on the
    /// runtime.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Dial the gateway, authenticate, and run until the connection ends
    ///
    /// Blocks for the lifetime of the connection. Returns `Ok(())` after an
    /// explicit [`stop`](Self::stop); otherwise the terminating error:
    /// dial failures synchronously as [`GatewayError::Connect`], mid-stream
    /// failures as [`GatewayError::Read`] or [`GatewayError::Closed`].
    pub async fn start(&self) -> Result<(), GatewayError> {
        // Reset the shutdown signal from any previous run, and subscribe
        // before dialing: a receiver subscribed after a `stop` has already
        // fired would treat the signal as seen and miss it.
        self.shutdown_tx.send_replace(false);
        let mut shutdown = self.shutdown_tx.subscribe();

        let (ws, _response) = tokio::select! {
            _ = shutdown.changed() => {
                tracing::info!("Stop requested while dialing, aborting");
                return Ok(());
            }
            result = connect_async(self.config.gateway_url.as_str()) => {
                result.map_err(GatewayError::Connect)?
            }
        };
        tracing::info!(url = %self.config.gateway_url, "Connected to gateway");

        let (sink, mut stream) = ws.split();

        let writer = tokio::spawn(run_writer(
            Arc::clone(&self.command_rx),
            sink,
            self.shutdown_tx.subscribe(),
        ));

        // Handshake goes through the same serialized write path as
        // everything else.
        self.commands
            .send(ClientCommand::Authenticate {
                token: self.config.token.clone(),
            })
            .await?;

        let heartbeat = Heartbeat::new(
            Duration::from_secs(self.config.heartbeat_secs),
            self.commands.clone(),
            self.shutdown_tx.subscribe(),
        );
        let heartbeat_task = tokio::spawn(heartbeat.run());

        let result = loop {
            tokio::select! {
                _ = shutdown.changed() => break Ok(()),
                frame = stream.next() => match frame {
                    Some(Ok(WsMessage::Text(text))) => {
                        // Fire-and-forget: one dispatch task per frame, not
                        // awaited before the next read. No cross-frame
                        // ordering is guaranteed.
                        let router = Arc::clone(&self.router);
                        tokio::spawn(async move {
                            router.on_frame(&text).await;
                        });
                    }
                    Some(Ok(WsMessage::Close(frame))) => {
                        tracing::info!(frame = ?frame, "Gateway closed the connection");
                        break Err(GatewayError::Closed);
                    }
                    // Transport-level pings/pongs and binary frames carry no
                    // events.
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Gateway read failed");
                        break Err(GatewayError::Read(e));
                    }
                    None => break Err(GatewayError::Closed),
                },
            }
        };

        // Tear down the heartbeat and writer before surfacing the result.
        self.shutdown_tx.send_replace(true);
        let _ = heartbeat_task.await;
        let _ = writer.await;

        match &result {
            Ok(()) => tracing::info!("Gateway connection stopped"),
            Err(e) => tracing::warn!(error = %e, "Gateway connection ended"),
        }
        result
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("gateway_url", &self.config.gateway_url)
            .field("users", &self.state.user_count())
            .field("guilds", &self.state.guild_count())
            .finish()
    }
}
