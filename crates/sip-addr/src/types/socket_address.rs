//! # Socket Addresses
//!
//! A socket address names a signaling endpoint as `[proto:]host[:port]`:
//!
//! ```text
//! udp:192.0.2.10:5060
//! tcp:[2001:db8::1]:5061
//! proxy.example.com
//! [::1]
//! ```
//!
//! Omitted parts fall back to `udp` and port `5060`.
//!
//! ```rust
//! use rvoip_sip_addr::prelude::*;
//!
//! let addr: SocketAddress = "tls:proxy.example.com:5061".parse().unwrap();
//! assert_eq!(addr.proto, Transport::Tls);
//! assert_eq!(addr.addr, "proxy.example.com");
//! assert_eq!(addr.port_no, 5061);
//! assert_eq!(addr.host_port(), "proxy.example.com:5061");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::socket_address::parse_socket_address;
use crate::types::address_kind::AddressKind;
use crate::types::transport::Transport;

/// Port applied when the input carries none
pub const DEFAULT_PORT: u16 = 5060;

/// String form of [`DEFAULT_PORT`]
pub const DEFAULT_PORT_STR: &str = "5060";

/// Transport applied when the input carries none
pub const DEFAULT_TRANSPORT: Transport = Transport::Udp;

/// A decoded `[proto:]host[:port]` address
///
/// Records are only produced by [`parse_socket_address`], which either fills
/// every field or fails. `port_no` is always the numeric value of `port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SocketAddress {
    /// The input exactly as received
    pub val: String,
    /// Transport protocol
    pub proto: Transport,
    /// Host token; IPv6 literals keep their brackets
    pub addr: String,
    /// Classification of the host token
    pub atype: AddressKind,
    /// Port as written (or the default)
    pub port: String,
    /// Numeric port
    pub port_no: u16,
}

impl SocketAddress {
    /// Canonical transport token, e.g. `"udp"`
    pub fn proto(&self) -> &'static str {
        self.proto.as_str()
    }

    /// Numeric transport id
    pub fn proto_id(&self) -> u8 {
        self.proto.id()
    }

    /// Returns the host and port formatted as `addr:port`
    pub fn host_port(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.val)
    }
}

impl FromStr for SocketAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_socket_address(s)
    }
}

impl TryFrom<String> for SocketAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        parse_socket_address(&value)
    }
}

impl From<SocketAddress> for String {
    fn from(addr: SocketAddress) -> Self {
        addr.val
    }
}
