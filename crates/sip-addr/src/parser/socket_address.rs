// Parser for socket addresses
//
// socket   = "[" IPv6address "]"
//          / transport ":" addrport
//          / addrport
//          / host
// addrport = "[" IPv6address "]" ":" port
//          / host ":" port

use tracing::{debug, trace};

use super::utils::{find_matching_bracket, parse_port, strip_brackets};
use crate::error::{Error, Result};
use crate::types::address_kind::{classify_address, AddressKind};
use crate::types::socket_address::{SocketAddress, DEFAULT_PORT, DEFAULT_PORT_STR, DEFAULT_TRANSPORT};
use crate::types::transport::{resolve_protocol, Transport};

/// Parses a `[proto:]host[:port]` socket address.
///
/// A leading token is only taken as the transport when it is one of the known
/// protocol tokens; otherwise the whole input is read as `host:port`. Missing
/// transport and port default to `udp` and `5060`.
///
/// # Errors
///
/// - [`Error::InvalidAddress`] for an empty host, an unclosed `[`, a bracketed
///   literal that is not IPv6, or junk after the closing `]`
/// - [`Error::InvalidPort`] when the port is not a decimal number below 65536
///
/// # Examples
///
/// ```
/// use rvoip_sip_addr::parser::parse_socket_address;
/// use rvoip_sip_addr::types::{AddressKind, Transport};
///
/// let addr = parse_socket_address("tcp:[2001:db8::1]:5061").unwrap();
/// assert_eq!(addr.proto, Transport::Tcp);
/// assert_eq!(addr.addr, "[2001:db8::1]");
/// assert_eq!(addr.atype, AddressKind::Ipv6);
/// assert_eq!(addr.port_no, 5061);
/// ```
pub fn parse_socket_address(input: &str) -> Result<SocketAddress> {
    match socket_address(input) {
        Ok(addr) => {
            trace!(
                "Parsed socket address {:?}: proto={} addr={} port={}",
                input,
                addr.proto,
                addr.addr,
                addr.port_no
            );
            Ok(addr)
        }
        Err(e) => {
            debug!("Rejected socket address {:?}: {}", input, e);
            Err(e)
        }
    }
}

fn socket_address(input: &str) -> Result<SocketAddress> {
    if input.is_empty() {
        return Err(Error::InvalidAddress("empty socket address".to_string()));
    }

    // Bare "[...]" literal, no transport and no port
    if let Some(interior) = strip_brackets(input) {
        require_ipv6(interior, input)?;
        return build(input, DEFAULT_TRANSPORT, input, AddressKind::Ipv6, None);
    }

    let Some((head, rest)) = input.split_once(':') else {
        return build(input, DEFAULT_TRANSPORT, input, classify_address(input), None);
    };

    let (proto, addrport, prefixed) = match resolve_protocol(head) {
        Ok(proto) => (proto, rest, true),
        Err(_) => (DEFAULT_TRANSPORT, input, false),
    };

    if addrport.starts_with('[') {
        let (literal, after) = find_matching_bracket(addrport)
            .ok_or_else(|| Error::InvalidAddress(format!("unclosed '[' in {}", input)))?;
        let port = match after.strip_prefix(':') {
            Some(port) => Some(port),
            // Only "proto:[v6]" may omit the port; a bare "[v6]" was handled above
            None if after.is_empty() && prefixed => None,
            None => {
                return Err(Error::InvalidAddress(format!(
                    "expected ':port' after {} in {}",
                    literal, input
                )))
            }
        };
        let port_no = port.map(parse_port).transpose()?;
        let interior = strip_brackets(literal).unwrap_or_default();
        require_ipv6(interior, literal)?;
        return finish(input, proto, literal, AddressKind::Ipv6, port, port_no);
    }

    let (addr, port) = match addrport.split_once(':') {
        Some((addr, port)) => (addr, Some(port)),
        None => (addrport, None),
    };
    if addr.is_empty() {
        return Err(Error::InvalidAddress(format!("empty host in {}", input)));
    }
    build(input, proto, addr, classify_address(addr), port)
}

fn require_ipv6(interior: &str, literal: &str) -> Result<()> {
    match classify_address(interior) {
        AddressKind::Ipv6 => Ok(()),
        _ => Err(Error::InvalidAddress(format!("{} is not an IPv6 literal", literal))),
    }
}

fn build(
    val: &str,
    proto: Transport,
    addr: &str,
    atype: AddressKind,
    port: Option<&str>,
) -> Result<SocketAddress> {
    let port_no = port.map(parse_port).transpose()?;
    finish(val, proto, addr, atype, port, port_no)
}

fn finish(
    val: &str,
    proto: Transport,
    addr: &str,
    atype: AddressKind,
    port: Option<&str>,
    port_no: Option<u16>,
) -> Result<SocketAddress> {
    Ok(SocketAddress {
        val: val.to_string(),
        proto,
        addr: addr.to_string(),
        atype,
        port: port.unwrap_or(DEFAULT_PORT_STR).to_string(),
        port_no: port_no.unwrap_or(DEFAULT_PORT),
    })
}
