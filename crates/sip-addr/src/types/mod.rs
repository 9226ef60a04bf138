//! Data model and lookup tables
//!
//! The enums here are closed sets: adding a transport or scheme means adding a
//! variant and a `match` arm, and the compiler points at every place that needs
//! to learn about it.

pub mod address_kind;
pub mod scheme;
pub mod socket_address;
pub mod transport;
pub mod uri;

pub use address_kind::{classify_address, AddressKind};
pub use scheme::{resolve_scheme, Scheme};
pub use socket_address::{SocketAddress, DEFAULT_PORT, DEFAULT_PORT_STR, DEFAULT_TRANSPORT};
pub use transport::{resolve_protocol, Transport, ALL_TRANSPORTS};
pub use uri::Uri;
