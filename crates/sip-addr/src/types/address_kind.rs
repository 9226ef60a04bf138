use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Classification of a host token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AddressKind {
    /// Not classified
    #[default]
    None = 0,
    /// IPv4 literal, e.g. `192.0.2.1`
    Ipv4 = 1,
    /// IPv6 literal, e.g. `2001:db8::1` (without brackets)
    Ipv6 = 2,
    /// Anything that is not an IP literal, treated as a host name
    Host = 3,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::None => "none",
            AddressKind::Ipv4 => "ipv4",
            AddressKind::Ipv6 => "ipv6",
            AddressKind::Host => "host",
        }
    }

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn is_ip(&self) -> bool {
        matches!(self, AddressKind::Ipv4 | AddressKind::Ipv6)
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides whether `token` is an IPv4 literal, an IPv6 literal or a host name
///
/// The token is first parsed as an IP literal; anything that fails is a
/// [`AddressKind::Host`]. For literals, the first `.` or `:` decides the
/// family, so IPv4-mapped IPv6 addresses such as `::ffff:192.0.2.1` are IPv6.
/// Brackets are not stripped here: `[::1]` is a host name to this function.
///
/// ```
/// use rvoip_sip_addr::types::address_kind::{classify_address, AddressKind};
///
/// assert_eq!(classify_address("192.0.2.1"), AddressKind::Ipv4);
/// assert_eq!(classify_address("2001:db8::1"), AddressKind::Ipv6);
/// assert_eq!(classify_address("proxy.example.com"), AddressKind::Host);
/// ```
pub fn classify_address(token: &str) -> AddressKind {
    if token.parse::<IpAddr>().is_err() {
        return AddressKind::Host;
    }
    // A parsed literal always holds one of the two separators
    for c in token.chars() {
        match c {
            '.' => return AddressKind::Ipv4,
            ':' => return AddressKind::Ipv6,
            _ => {}
        }
    }
    AddressKind::None
}
