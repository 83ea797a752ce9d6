//! Serialized command write path
//!
//! Both the heartbeat task and arbitrary handler-triggered sends write
//! concurrently; funneling every outbound command through one mpsc channel,
//! drained by a single writer task that owns the WebSocket sink, keeps
//! frames from interleaving without a lock around the socket.

use std::sync::Arc;

use futures_util::{Sink, SinkExt};
use tokio::sync::{mpsc, watch, Mutex};
use tokio_tungstenite::tungstenite::{self, Message as WsMessage};

use crate::error::GatewayError;
use crate::protocol::ClientCommand;

/// Cloneable handle for sending commands to the gateway
///
/// Obtained from `GatewayClient::sender`; handlers capture a clone to issue
/// typing indicators or further commands.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<ClientCommand>,
}

impl CommandSender {
    pub(crate) fn new(tx: mpsc::Sender<ClientCommand>) -> Self {
        Self { tx }
    }

    /// Queue a command for the writer task
    ///
    /// Fails only when the write path is gone; the connection's read loop is
    /// unaffected either way.
    pub async fn send(&self, command: ClientCommand) -> Result<(), GatewayError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| GatewayError::Send("write path closed".to_string()))
    }
}

/// Drain queued commands into the WebSocket sink until shutdown
///
/// Encode failures and write failures are reported here and skipped; they
/// never terminate the read loop. The sink is closed on the way out, which
/// also nudges the server into closing the connection after `stop`.
pub(crate) async fn run_writer<S>(
    rx: Arc<Mutex<mpsc::Receiver<ClientCommand>>>,
    mut sink: S,
    mut shutdown: watch::Receiver<bool>,
) where
    S: Sink<WsMessage, Error = tungstenite::Error> + Unpin,
{
    // The receiver outlives any one connection so queued commands survive a
    // restart; the writer holds it only while this connection is up.
    let mut rx = rx.lock().await;
    loop {
        tokio::select! {
            _ = shutdown.changed() => break,
            command = rx.recv() => match command {
                Some(command) => {
                    let frame = match command.encode() {
                        Ok(frame) => frame,
                        Err(e) => {
                            tracing::error!(error = %e, "Failed to encode outbound command");
                            continue;
                        }
                    };
                    tracing::trace!(frame = %frame, "Sending command");
                    if let Err(e) = sink.send(WsMessage::Text(frame)).await {
                        tracing::warn!(error = %e, "Gateway write failed");
                    }
                }
                None => break,
            },
        }
    }

    let _ = sink.close().await;
}
