//! Test helpers
//!
//! A scriptable loopback gateway: each test binds a listener, lets the
//! client dial it, and drives the server side of the conversation by hand.

use std::future::Future;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::WebSocketStream;

use riptide_common::ClientConfig;

/// One accepted server-side connection
pub type ServerSocket = WebSocketStream<TcpStream>;

/// Loopback gateway listener
pub struct TestGateway {
    listener: TcpListener,
    pub url: String,
}

impl TestGateway {
    /// Bind on an ephemeral local port
    pub async fn bind() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("binding loopback gateway")?;
        let url = format!("ws://{}", listener.local_addr()?);
        Ok(Self { listener, url })
    }

    /// Client configuration pointing at this gateway
    pub fn client_config(&self, token: &str) -> ClientConfig {
        let mut config = ClientConfig::new(self.url.clone(), "http://127.0.0.1:1", token);
        // Keep tests fast; the schedule itself is under unit test.
        config.heartbeat_secs = 1;
        config
    }

    /// Accept one WebSocket connection
    pub async fn accept(&self) -> Result<ServerSocket> {
        let (stream, _) = self.listener.accept().await.context("accepting connection")?;
        let socket = tokio_tungstenite::accept_async(stream)
            .await
            .context("websocket handshake")?;
        Ok(socket)
    }
}

/// Receive the next text frame as JSON
pub async fn recv_json(socket: &mut ServerSocket) -> Result<Value> {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), socket.next())
            .await
            .context("timed out waiting for a frame")?
            .context("connection ended")??;
        match frame {
            WsMessage::Text(text) => return Ok(serde_json::from_str(&text)?),
            // Transport pings happen; skip anything that is not an envelope.
            _ => continue,
        }
    }
}

/// Receive frames until one carries the given type tag
pub async fn recv_until_type(socket: &mut ServerSocket, tag: &str) -> Result<Value> {
    for _ in 0..16 {
        let value = recv_json(socket).await?;
        if value["type"] == tag {
            return Ok(value);
        }
    }
    bail!("no frame with type {tag} arrived")
}

/// Send one JSON value as a text frame
pub async fn send_json(socket: &mut ServerSocket, value: &Value) -> Result<()> {
    socket.send(WsMessage::Text(value.to_string())).await?;
    Ok(())
}

/// Poll a condition until it holds or the deadline passes
pub async fn wait_for<F, Fut>(mut condition: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while tokio::time::Instant::now() < deadline {
        if condition().await {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    bail!("condition not met within deadline")
}
