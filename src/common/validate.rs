//! Pure validation predicates for addresses, ports, and message content.
//!
//! These are side-effect free; rejection diagnostics belong to the
//! callers that drive the interactive loops.

use std::net::Ipv4Addr;

/// True iff `address` is a well-formed dotted-decimal IPv4 literal
/// (four octets 0-255, no hostnames, no IPv6).
pub fn is_valid_address(address: &str) -> bool {
    address.parse::<Ipv4Addr>().is_ok()
}

/// True iff `port` is in the usable range 1-65535.
pub fn is_valid_port(port: u32) -> bool {
    (1..=65535).contains(&port)
}

/// Content policy for datagram payloads: non-empty, and every character
/// is a lowercase ASCII letter or ASCII whitespace (tab counts).
/// Anything other than lowercase ASCII or ASCII whitespace is invalid.
pub fn is_valid_message(message: &str) -> bool {
    if message.is_empty() {
        return false;
    }

    message
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ipv4_literals() {
        assert!(is_valid_address("127.0.0.1"));
        assert!(is_valid_address("0.0.0.0"));
        assert!(is_valid_address("255.255.255.255"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_address("1.2.3"));
        assert!(!is_valid_address("999.1.1.1"));
        assert!(!is_valid_address("abc"));
        assert!(!is_valid_address("1.2.3.4.5"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("::1"));
        assert!(!is_valid_address("localhost"));
    }

    #[test]
    fn port_range_is_1_to_65535() {
        assert!(!is_valid_port(0));
        assert!(is_valid_port(1));
        assert!(is_valid_port(8080));
        assert!(is_valid_port(65535));
        assert!(!is_valid_port(65536));
        assert!(!is_valid_port(u32::MAX));
    }

    #[test]
    fn accepts_lowercase_and_whitespace() {
        assert!(is_valid_message("hello world"));
        assert!(is_valid_message("hi\tthere"));
        assert!(is_valid_message("line one\nline two"));
        assert!(is_valid_message("a"));
    }

    #[test]
    fn rejects_empty_and_disallowed_characters() {
        assert!(!is_valid_message(""));
        assert!(!is_valid_message("Hello"));
        assert!(!is_valid_message("hello1"));
        assert!(!is_valid_message("hello!"));
        assert!(!is_valid_message("hello, world"));
    }

    #[test]
    fn validation_is_idempotent_over_echoed_bytes() {
        // A payload echoed back verbatim must validate the same way on
        // both ends.
        for message in ["hello", "world", "Hello", "hi\tthere"] {
            let echoed = message.to_string();
            assert_eq!(is_valid_message(message), is_valid_message(&echoed));
        }
    }
}
