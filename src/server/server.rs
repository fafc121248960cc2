//! # Server Endpoint
//!
//! The server side of the messaging pair: a socket bound to the
//! configured address, plus a single-slot record of the last sender.
//! Request-response correlation is purely "last sender wins": the slot
//! is overwritten on every successful receive and is the implicit
//! destination of the next reply. Multi-client session tracking would
//! replace this slot with a map keyed by peer address; one concurrent
//! peer is all this server supports.

use std::io::Write;
use std::net::SocketAddr;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::common::endpoint::{Endpoint, ReceiveOutcome};
use crate::common::error::{EndpointError, Result};
use crate::common::validate::is_valid_message;

/// A server replying to whichever peer spoke last.
pub struct Server {
    endpoint: Endpoint,
    last_peer: Option<SocketAddr>,
}

impl Server {
    /// Validate `address:port` and bind the listening socket.
    ///
    /// # Errors
    /// - [`EndpointError::InvalidAddress`] / [`EndpointError::InvalidPort`]
    ///   on malformed configuration
    /// - [`EndpointError::Socket`] if binding fails
    pub async fn bind(address: &str, port: u32) -> Result<Self> {
        let endpoint = Endpoint::bind(address, port).await?;

        Ok(Self {
            endpoint,
            last_peer: None,
        })
    }

    /// Address the listening socket is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.endpoint.local_addr()
    }

    /// Peer recorded by the most recent successful receive, if any.
    pub fn last_peer(&self) -> Option<SocketAddr> {
        self.last_peer
    }

    /// Wait (bounded) for one datagram.
    ///
    /// A successful receive overwrites the last-peer slot before the
    /// payload is checked, so even a rejected sender is the one a caller
    /// would be replying to. An invalid payload is terminal for the
    /// interactive loop, not a re-promptable retry.
    pub async fn receive_message(&mut self) -> Result<ReceiveOutcome> {
        match self.endpoint.receive().await? {
            ReceiveOutcome::Received { text, from } => {
                self.last_peer = Some(from);

                if !is_valid_message(&text) {
                    warn!("Invalid message received. Exiting.");
                    return Err(EndpointError::InvalidMessageFormat(text));
                }

                Ok(ReceiveOutcome::Received { text, from })
            }
            ReceiveOutcome::TimedOut => Ok(ReceiveOutcome::TimedOut),
        }
    }

    /// Send one message back to the last sender.
    ///
    /// # Errors
    /// [`EndpointError::NoPeer`] if no datagram has arrived yet; otherwise
    /// the send-side errors of [`Endpoint::send_to`].
    pub async fn respond(&self, message: &str) -> Result<usize> {
        let peer = self.last_peer.ok_or(EndpointError::NoPeer)?;
        self.endpoint.send_to(message, peer).await
    }

    /// Drive the receive→prompt→respond loop until a fatal error, an
    /// invalid message, or the input stream closing.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match self.receive_message().await? {
                ReceiveOutcome::TimedOut => {
                    info!("No data received in the last 20 seconds. Waiting for the next client.");
                    continue;
                }
                ReceiveOutcome::Received { .. } => {}
            }

            // The operator types the reply by hand.
            print!("Enter your response to the client: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                info!("Input stream closed. Exiting.");
                return Ok(());
            };

            self.respond(&line).await?;
        }
    }
}
