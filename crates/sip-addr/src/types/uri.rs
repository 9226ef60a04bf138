//! # SIP, SIPS and TEL URIs
//!
//! The URIs handled here follow the layout
//!
//! ```text
//! scheme:[user[;user-params]@]host[:port][;params]
//! ```
//!
//! Parameters are kept as raw text. The one parameter that is interpreted is
//! `transport`, which sets [`Uri::proto`].
//!
//! ```rust
//! use rvoip_sip_addr::prelude::*;
//!
//! let uri: Uri = "sips:bob@[2001:db8::2]:5061;transport=tls".parse().unwrap();
//! assert_eq!(uri.scheme, Scheme::Sips);
//! assert_eq!(uri.user, "bob");
//! assert_eq!(uri.addr, "[2001:db8::2]");
//! assert_eq!(uri.atype, AddressKind::Ipv6);
//! assert_eq!(uri.port_no, 5061);
//! assert_eq!(uri.proto, Transport::Tls);
//! assert_eq!(uri.params, "transport=tls");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser::uri::parse_uri;
use crate::types::address_kind::AddressKind;
use crate::types::scheme::Scheme;
use crate::types::socket_address::SocketAddress;
use crate::types::transport::Transport;

/// A decoded SIP, SIPS or TEL URI
///
/// # Structure
///
/// - `user` holds the user part. When the user part carries parameters, the
///   `;` that opens them stays at the end of `user` and the text after it is
///   in `u_params`.
/// - `params` holds everything after the first `;` of the host part, without
///   that `;`.
///
/// Empty strings stand for absent parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri {
    /// The input exactly as received
    pub val: String,
    /// URI scheme
    pub scheme: Scheme,
    /// User part
    pub user: String,
    /// Parameters attached to the user part
    pub u_params: String,
    /// Host token; IPv6 literals keep their brackets
    pub addr: String,
    /// Classification of the host token
    pub atype: AddressKind,
    /// Port as written (or the default)
    pub port: String,
    /// Numeric port
    pub port_no: u16,
    /// Raw host parameters
    pub params: String,
    /// Transport from the `transport` parameter, UDP otherwise
    pub proto: Transport,
}

impl Uri {
    /// Canonical scheme name, e.g. `"sips"`
    pub fn schema(&self) -> &'static str {
        self.scheme.as_str()
    }

    /// Numeric scheme id
    pub fn schema_id(&self) -> u8 {
        self.scheme.id()
    }

    /// Canonical transport token
    pub fn proto(&self) -> &'static str {
        self.proto.as_str()
    }

    /// Numeric transport id
    pub fn proto_id(&self) -> u8 {
        self.proto.id()
    }

    /// Returns true if the URI carries a user part
    pub fn has_user(&self) -> bool {
        !self.user.is_empty()
    }

    /// Returns the host and port formatted as `addr:port`
    pub fn host_port(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }

    /// Returns true for `sips` URIs and URIs sent over an encrypted transport
    pub fn is_secure(&self) -> bool {
        self.scheme == Scheme::Sips || self.proto.is_secure()
    }

    /// The socket address this URI resolves to, without DNS
    ///
    /// The `val` of the returned record is written in socket address form
    /// (`proto:addr:port`) so it can be handed back to the socket address
    /// parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] when the host starts with `[` but is
    /// not an IPv6 literal (e.g. `sip:[x]`), since no socket address can
    /// carry such a host.
    pub fn socket_address(&self) -> Result<SocketAddress> {
        if self.addr.starts_with('[') && self.atype != AddressKind::Ipv6 {
            return Err(Error::InvalidAddress(format!(
                "{} is not an IPv6 literal",
                self.addr
            )));
        }
        Ok(SocketAddress {
            val: format!("{}:{}:{}", self.proto, self.addr, self.port),
            proto: self.proto,
            addr: self.addr.clone(),
            atype: self.atype,
            port: self.port.clone(),
            port_no: self.port_no,
        })
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.val)
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_uri(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        parse_uri(&value)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.val
    }
}
