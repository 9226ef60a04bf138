//! SIP address decoding for rvoip
//!
//! This crate turns the two textual address forms used to configure SIP
//! signaling tools into structured records:
//!
//! - socket addresses, `[proto:]host[:port]`, into [`SocketAddress`]
//! - SIP, SIPS and TEL URIs, `scheme:[user@]host[:port][;params]`, into [`Uri`]
//!
//! No name resolution or network I/O happens here.
//!
//! ```rust
//! use rvoip_sip_addr::prelude::*;
//!
//! let addr = parse_socket_address("udp:host.example:5070").unwrap();
//! assert_eq!(addr.proto, Transport::Udp);
//! assert_eq!(addr.port_no, 5070);
//!
//! let uri = parse_uri("sip:alice@host.example;transport=tcp").unwrap();
//! assert_eq!(uri.user, "alice");
//! assert_eq!(uri.proto, Transport::Tcp);
//!
//! assert_eq!(parse_uri("sip:@host.example"), Err(Error::EmptyUser));
//! ```

pub mod error;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use parser::{parse_socket_address, parse_uri};
pub use types::{
    classify_address, resolve_protocol, resolve_scheme, AddressKind, Scheme, SocketAddress,
    Transport, Uri, DEFAULT_PORT, DEFAULT_TRANSPORT,
};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parser::{parse_socket_address, parse_uri};
    pub use crate::types::{
        classify_address, resolve_protocol, resolve_scheme, AddressKind, Scheme,
        SocketAddress, Transport, Uri, DEFAULT_PORT, DEFAULT_TRANSPORT,
    };
}
