//! # Client Endpoint
//!
//! The client side of the messaging pair: an ephemeral local socket
//! addressing one fixed remote. Its interactive loop reads a line from
//! the operator, sends it, then waits (bounded) for the reply.
//!
//! ## Loop policy
//!
//! - A send failure of any kind ends the session.
//! - A receive that times out is NOT an error: the loop prints a waiting
//!   notice and goes back to the prompt.
//! - A reply that violates the content policy ends the session.

use std::io::Write;
use std::net::SocketAddr;

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::common::endpoint::{resolve, Endpoint, ReceiveOutcome};
use crate::common::error::{EndpointError, Result};
use crate::common::validate::is_valid_message;

/// A client talking to one fixed remote endpoint.
pub struct Client {
    endpoint: Endpoint,
    remote: SocketAddr,
}

impl Client {
    /// Validate `address:port` and open an ephemeral local socket for
    /// talking to it. Nothing is transmitted yet.
    ///
    /// # Errors
    /// - [`EndpointError::InvalidAddress`] / [`EndpointError::InvalidPort`]
    ///   on malformed configuration
    /// - [`EndpointError::Socket`] if the local socket cannot be opened
    pub async fn connect(address: &str, port: u32) -> Result<Self> {
        let remote = resolve(address, port)?;
        let endpoint = Endpoint::open().await?;

        Ok(Self {
            endpoint,
            remote: SocketAddr::V4(remote),
        })
    }

    /// The remote this client sends to.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    /// Local address of the underlying socket.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.endpoint.local_addr()
    }

    /// Send one message to the fixed remote.
    pub async fn send_message(&self, message: &str) -> Result<usize> {
        self.endpoint.send_to(message, self.remote).await
    }

    /// Wait (bounded) for the server's reply and validate its content.
    ///
    /// The sender address of the reply is reported but not checked; the
    /// client has exactly one peer and no interest in impostors.
    pub async fn await_reply(&mut self) -> Result<ReceiveOutcome> {
        match self.endpoint.receive().await? {
            ReceiveOutcome::Received { text, from } => {
                if !is_valid_message(&text) {
                    warn!("Invalid message format received. Exiting.");
                    return Err(EndpointError::InvalidMessageFormat(text));
                }

                Ok(ReceiveOutcome::Received { text, from })
            }
            ReceiveOutcome::TimedOut => Ok(ReceiveOutcome::TimedOut),
        }
    }

    /// Drive the interactive prompt→send→receive loop until a fatal
    /// error, an invalid reply, or the input stream closing.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("Enter your message: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                info!("Input stream closed. Exiting.");
                return Ok(());
            };

            self.send_message(&line).await?;

            match self.await_reply().await? {
                ReceiveOutcome::TimedOut => {
                    info!("No data received in the last 20 seconds. Waiting for the next message.");
                }
                ReceiveOutcome::Received { .. } => {}
            }
        }
    }
}
