//! # UDP Endpoint Abstraction
//!
//! Wraps a single UDP socket with the transmission rules shared by both
//! roles of the messaging pair:
//!
//! - payloads are capped at one datagram of [`MAX_DATAGRAM_BYTES`]
//! - every receive is bounded by a fixed 20 second deadline
//! - a deadline that elapses with no data is a normal outcome
//!   ([`ReceiveOutcome::TimedOut`]), not an error
//!
//! The server binds its configured address; the client opens an
//! ephemeral local socket and addresses one fixed remote. Both go
//! through [`Endpoint`], which owns the socket exclusively: the socket
//! is opened by the constructor and closed when the endpoint is dropped,
//! on every exit path.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use log::info;
use tokio::net::UdpSocket;
use tokio::time;

use super::error::{EndpointError, Result};
use super::validate::{is_valid_address, is_valid_port};

/// Largest payload accepted for a single send, and the size of the
/// receive buffer. Stays under a typical path MTU minus headers.
pub const MAX_DATAGRAM_BYTES: usize = 1400;

/// Fixed receive deadline. Not configurable at runtime.
pub const RECV_TIMEOUT: Duration = Duration::from_secs(20);

/// Outcome of one bounded receive call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiveOutcome {
    /// A datagram arrived: its payload decoded as text, and the sender.
    Received { text: String, from: SocketAddr },
    /// The deadline elapsed with no data. The loop should keep waiting;
    /// each subsequent call issues a fresh bounded wait.
    TimedOut,
}

/// Validate an IPv4 literal and port and combine them into a socket
/// address.
///
/// # Errors
/// - [`EndpointError::InvalidAddress`] if `address` is not dotted-decimal
///   IPv4 (hostnames are not resolved)
/// - [`EndpointError::InvalidPort`] if `port` is outside 1-65535
pub fn resolve(address: &str, port: u32) -> Result<SocketAddrV4> {
    if !is_valid_address(address) {
        return Err(EndpointError::InvalidAddress(address.to_string()));
    }
    if !is_valid_port(port) {
        return Err(EndpointError::InvalidPort(port));
    }

    // Parse cannot fail once is_valid_address holds.
    let ip: Ipv4Addr = address
        .parse()
        .map_err(|_| EndpointError::InvalidAddress(address.to_string()))?;

    Ok(SocketAddrV4::new(ip, port as u16))
}

/// One UDP socket plus the fixed-size receive buffer that serves it.
pub struct Endpoint {
    socket: UdpSocket,
    recv_buf: [u8; MAX_DATAGRAM_BYTES],
}

impl Endpoint {
    /// Open an endpoint bound to `address:port` (server role).
    pub async fn bind(address: &str, port: u32) -> Result<Self> {
        let local = resolve(address, port)?;
        let socket = UdpSocket::bind(local).await?;

        Ok(Self {
            socket,
            recv_buf: [0u8; MAX_DATAGRAM_BYTES],
        })
    }

    /// Open an endpoint on an ephemeral local port (client role). The
    /// remote target is validated and held by the caller, not the socket.
    pub async fn open() -> Result<Self> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;

        Ok(Self {
            socket,
            recv_buf: [0u8; MAX_DATAGRAM_BYTES],
        })
    }

    /// Local address the socket ended up bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Send one message to `peer` as a single datagram.
    ///
    /// # Errors
    /// - [`EndpointError::EmptyMessage`] if `message` is empty
    /// - [`EndpointError::MessageTooLarge`] if it exceeds
    ///   [`MAX_DATAGRAM_BYTES`] bytes
    /// - [`EndpointError::Socket`] on transmission failure
    pub async fn send_to(&self, message: &str, peer: SocketAddr) -> Result<usize> {
        if message.is_empty() {
            return Err(EndpointError::EmptyMessage);
        }
        if message.len() > MAX_DATAGRAM_BYTES {
            return Err(EndpointError::MessageTooLarge(message.len()));
        }

        let sent = self.socket.send_to(message.as_bytes(), peer).await?;
        info!("📤 Sent to {} [{} bytes]: {}", peer, sent, message);

        Ok(sent)
    }

    /// Wait up to [`RECV_TIMEOUT`] for one datagram.
    ///
    /// Returns [`ReceiveOutcome::TimedOut`] when the deadline elapses;
    /// any other receive failure is a fatal [`EndpointError::Socket`].
    pub async fn receive(&mut self) -> Result<ReceiveOutcome> {
        self.receive_with_deadline(RECV_TIMEOUT).await
    }

    async fn receive_with_deadline(&mut self, deadline: Duration) -> Result<ReceiveOutcome> {
        match time::timeout(deadline, self.socket.recv_from(&mut self.recv_buf)).await {
            Ok(Ok((received, from))) => {
                // Decode exactly the received byte count, never the whole
                // buffer.
                let text = String::from_utf8_lossy(&self.recv_buf[..received]).into_owned();
                info!("📥 Received from {} [{} bytes]: {}", from, received, text);

                Ok(ReceiveOutcome::Received { text, from })
            }
            Ok(Err(e)) => Err(EndpointError::Socket(e)),
            Err(_) => Ok(ReceiveOutcome::TimedOut),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_rejects_bad_addresses_and_ports() {
        assert!(matches!(
            resolve("999.1.1.1", 8080),
            Err(EndpointError::InvalidAddress(_))
        ));
        assert!(matches!(
            resolve("not an ip", 8080),
            Err(EndpointError::InvalidAddress(_))
        ));
        assert!(matches!(
            resolve("127.0.0.1", 0),
            Err(EndpointError::InvalidPort(0))
        ));
        assert!(matches!(
            resolve("127.0.0.1", 70000),
            Err(EndpointError::InvalidPort(70000))
        ));
    }

    #[test]
    fn resolve_accepts_the_reference_endpoint() {
        let addr = resolve("127.0.0.1", 8080).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8080");
    }

    #[tokio::test]
    async fn send_rejects_empty_and_oversized_messages() {
        let endpoint = Endpoint::open().await.unwrap();
        let peer: SocketAddr = "127.0.0.1:49151".parse().unwrap();

        assert!(matches!(
            endpoint.send_to("", peer).await,
            Err(EndpointError::EmptyMessage)
        ));
        let oversized = "a".repeat(MAX_DATAGRAM_BYTES + 1);
        assert!(matches!(
            endpoint.send_to(&oversized, peer).await,
            Err(EndpointError::MessageTooLarge(1401))
        ));
    }

    #[tokio::test]
    async fn send_accepts_a_maximum_size_message() {
        let endpoint = Endpoint::open().await.unwrap();
        let peer: SocketAddr = "127.0.0.1:49152".parse().unwrap();

        let payload = "a".repeat(MAX_DATAGRAM_BYTES);
        let sent = endpoint.send_to(&payload, peer).await.unwrap();
        assert_eq!(sent, MAX_DATAGRAM_BYTES);
    }

    #[tokio::test]
    async fn quiet_socket_times_out_and_stays_usable() {
        let mut endpoint = Endpoint::open().await.unwrap();

        // Same receive path as the fixed 20s deadline, shortened so the
        // test terminates quickly. Two calls in a row: timing out must
        // not poison the socket.
        let deadline = Duration::from_millis(50);
        for _ in 0..2 {
            let outcome = endpoint.receive_with_deadline(deadline).await.unwrap();
            assert_eq!(outcome, ReceiveOutcome::TimedOut);
        }
    }

    #[tokio::test]
    async fn loopback_datagram_is_received_with_sender_address() {
        let mut receiver = Endpoint::bind("127.0.0.1", 48211).await.unwrap();
        let sender = Endpoint::open().await.unwrap();
        let target: SocketAddr = "127.0.0.1:48211".parse().unwrap();

        sender.send_to("hello", target).await.unwrap();

        match receiver.receive_with_deadline(Duration::from_secs(5)).await.unwrap() {
            ReceiveOutcome::Received { text, from } => {
                assert_eq!(text, "hello");
                assert_eq!(from.port(), sender.local_addr().unwrap().port());
            }
            ReceiveOutcome::TimedOut => panic!("expected a datagram on loopback"),
        }
    }
}
