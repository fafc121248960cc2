//! Error types shared by both endpoint roles.

use thiserror::Error;

/// Everything that can go wrong while configuring or driving an endpoint.
///
/// A timed-out receive is deliberately NOT an error; see
/// [`ReceiveOutcome::TimedOut`](super::endpoint::ReceiveOutcome). Only
/// conditions that end the current operation (and, in the interactive
/// loops, the session) live here.
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("Invalid IP address: '{0}'")]
    InvalidAddress(String),

    #[error("Invalid port number {0}. Must be in the range 1-65535.")]
    InvalidPort(u32),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Message exceeds 1400 bytes ({0} bytes)")]
    MessageTooLarge(usize),

    #[error("Socket error: {0}")]
    Socket(#[from] std::io::Error),

    #[error("Invalid message format: '{0}'")]
    InvalidMessageFormat(String),

    /// The server has not heard from any client yet, so there is no
    /// address to reply to.
    #[error("No peer has sent a datagram yet")]
    NoPeer,
}

pub type Result<T> = std::result::Result<T, EndpointError>;
