//! # Transport Protocols
//!
//! The transport token names the protocol a signaling endpoint is reached
//! over. It shows up in two places: as the optional prefix of a socket
//! address (`tcp:10.0.0.1:5060`) and as the value of the `transport` URI
//! parameter (`sip:alice@example.com;transport=tls`).
//!
//! Only the all-lowercase and all-uppercase spellings are accepted. `Tcp` or
//! `tCp` are rejected, matching how the tokens are written in configuration
//! of the tools that consume these addresses.
//!
//! ```rust
//! use rvoip_sip_addr::types::transport::{resolve_protocol, Transport};
//!
//! assert_eq!(resolve_protocol("TLS").unwrap(), Transport::Tls);
//! assert_eq!(Transport::Tls.as_str(), "tls");
//! assert!(resolve_protocol("Tls").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Transport protocol of a signaling endpoint
///
/// The discriminants are the numeric protocol ids exposed through [`Transport::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Transport {
    /// UDP transport
    #[default]
    Udp = 1,
    /// TCP transport
    Tcp = 2,
    /// TLS over TCP
    Tls = 3,
    /// SCTP transport
    Sctp = 4,
    /// WebSocket transport
    Ws = 5,
    /// WebSocket Secure transport
    Wss = 6,
}

/// Every known transport, in id order
pub const ALL_TRANSPORTS: [Transport; 6] = [
    Transport::Udp,
    Transport::Tcp,
    Transport::Tls,
    Transport::Sctp,
    Transport::Ws,
    Transport::Wss,
];

impl Transport {
    /// Returns the canonical lowercase token
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Udp => "udp",
            Transport::Tcp => "tcp",
            Transport::Tls => "tls",
            Transport::Sctp => "sctp",
            Transport::Ws => "ws",
            Transport::Wss => "wss",
        }
    }

    /// Returns the numeric protocol id
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Stream oriented transports (everything except UDP)
    pub fn is_reliable(&self) -> bool {
        !matches!(self, Transport::Udp)
    }

    /// Transports that encrypt the signaling channel
    pub fn is_secure(&self) -> bool {
        matches!(self, Transport::Tls | Transport::Wss)
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        resolve_protocol(s)
    }
}

/// Resolves a transport token to its [`Transport`]
///
/// # Errors
///
/// Returns [`Error::UnknownProtocol`] for anything other than the six known
/// tokens written entirely in lowercase or entirely in uppercase.
pub fn resolve_protocol(token: &str) -> Result<Transport> {
    match token {
        "udp" | "UDP" => Ok(Transport::Udp),
        "tcp" | "TCP" => Ok(Transport::Tcp),
        "tls" | "TLS" => Ok(Transport::Tls),
        "sctp" | "SCTP" => Ok(Transport::Sctp),
        "ws" | "WS" => Ok(Transport::Ws),
        "wss" | "WSS" => Ok(Transport::Wss),
        _ => Err(Error::UnknownProtocol(token.to_string())),
    }
}
