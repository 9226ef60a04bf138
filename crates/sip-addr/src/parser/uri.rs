// Parser for SIP, SIPS and TEL URIs
//
// uri      = scheme ":" [ userinfo "@" ] hostport [ ";" params ]
// userinfo = user [ ";" user-params ]
// hostport = ( host / "[" IPv6address "]" ) [ ":" port ]

use tracing::{debug, trace};

use super::utils::{find_matching_bracket, parse_port, split_once_any, strip_brackets};
use crate::error::{Error, Result};
use crate::types::address_kind::{classify_address, AddressKind};
use crate::types::scheme::{resolve_scheme, Scheme};
use crate::types::socket_address::{DEFAULT_PORT, DEFAULT_PORT_STR, DEFAULT_TRANSPORT};
use crate::types::transport::{resolve_protocol, Transport};
use crate::types::uri::Uri;

const TRANSPORT_PARAM: &str = ";transport=";

/// Parses a SIP, SIPS or TEL URI.
///
/// The user part and host parameters are kept as raw text. The `transport`
/// parameter, when present, selects [`Uri::proto`]; the port defaults to
/// `5060` and the transport to `udp`.
///
/// # Errors
///
/// - [`Error::MalformedUri`] when there is no `:` after the scheme or the host
///   is followed by something other than `:port` or `;params`
/// - [`Error::UnknownScheme`] for schemes other than `sip`, `sips`, `tel`
/// - [`Error::EmptyUser`] for `sip:@host` or `sip:;x@host`
/// - [`Error::InvalidAddress`] for an empty host or a bad bracketed literal
/// - [`Error::InvalidPort`] when the port is not in `1..=65535`
/// - [`Error::UnknownProtocol`] when the `transport` value is not known
///
/// # Examples
///
/// ```
/// use rvoip_sip_addr::parser::parse_uri;
/// use rvoip_sip_addr::types::{Scheme, Transport};
///
/// let uri = parse_uri("sip:alice@host.example;transport=tcp").unwrap();
/// assert_eq!(uri.scheme, Scheme::Sip);
/// assert_eq!(uri.user, "alice");
/// assert_eq!(uri.addr, "host.example");
/// assert_eq!(uri.proto, Transport::Tcp);
/// assert_eq!(uri.port_no, 5060);
/// ```
pub fn parse_uri(input: &str) -> Result<Uri> {
    match uri(input) {
        Ok(uri) => {
            trace!(
                "Parsed URI {:?}: scheme={} user={:?} addr={} port={} proto={}",
                input,
                uri.scheme,
                uri.user,
                uri.addr,
                uri.port_no,
                uri.proto
            );
            Ok(uri)
        }
        Err(e) => {
            debug!("Rejected URI {:?}: {}", input, e);
            Err(e)
        }
    }
}

// Fields collected before the record is assembled
struct Parts<'a> {
    scheme: Scheme,
    user: &'a str,
    u_params: &'a str,
    addr: &'a str,
    atype: AddressKind,
    port: Option<(&'a str, u16)>,
    params: &'a str,
    proto: Transport,
}

impl Parts<'_> {
    fn into_uri(self, val: &str) -> Uri {
        let (port, port_no) = self.port.unwrap_or((DEFAULT_PORT_STR, DEFAULT_PORT));
        Uri {
            val: val.to_string(),
            scheme: self.scheme,
            user: self.user.to_string(),
            u_params: self.u_params.to_string(),
            addr: self.addr.to_string(),
            atype: self.atype,
            port: port.to_string(),
            port_no,
            params: self.params.to_string(),
            proto: self.proto,
        }
    }
}

fn uri(input: &str) -> Result<Uri> {
    let (scheme, rest) = input
        .split_once(':')
        .ok_or_else(|| Error::MalformedUri(format!("missing ':' after scheme in {}", input)))?;
    let scheme = resolve_scheme(scheme)?;

    // Delimiter positions are taken once on the text after the scheme, so a
    // ':' or ';' inside the user part counts here.
    let at = rest.find('@');
    let has_colon = rest.contains(':');
    let has_semi = rest.contains(';');

    let mut parts = Parts {
        scheme,
        user: "",
        u_params: "",
        addr: rest,
        atype: AddressKind::None,
        port: None,
        params: "",
        proto: DEFAULT_TRANSPORT,
    };

    let host_rest = match at {
        Some(0) => return Err(Error::EmptyUser),
        Some(pos) => {
            let user_part = &rest[..pos];
            match user_part.find(';') {
                Some(0) => return Err(Error::EmptyUser),
                // The ';' opening the user parameters stays on the user
                Some(sc) => {
                    parts.user = &user_part[..=sc];
                    parts.u_params = &user_part[sc + 1..];
                }
                None => parts.user = user_part,
            }
            &rest[pos + 1..]
        }
        None => rest,
    };

    if !has_colon && !has_semi {
        return host_only(parts, host_rest, input);
    }

    let tail = if host_rest.starts_with('[') {
        if host_rest.ends_with(']') {
            let interior = strip_brackets(host_rest).unwrap_or_default();
            require_ipv6(interior, host_rest)?;
            parts.addr = host_rest;
            parts.atype = AddressKind::Ipv6;
            return Ok(parts.into_uri(input));
        }
        let (literal, tail) = find_matching_bracket(host_rest)
            .ok_or_else(|| Error::InvalidAddress(format!("unclosed '[' in {}", input)))?;
        let interior = strip_brackets(literal).unwrap_or_default();
        require_ipv6(interior, literal)?;
        parts.addr = literal;
        parts.atype = AddressKind::Ipv6;
        tail
    } else {
        match split_once_any(host_rest, &[':', ';']) {
            Some((addr, tail)) => {
                if addr.is_empty() {
                    return Err(Error::InvalidAddress(format!("empty host in {}", input)));
                }
                parts.addr = addr;
                parts.atype = classify_address(addr);
                tail
            }
            // The ':' or ';' seen above sat in the user part
            None => return host_only(parts, host_rest, input),
        }
    };

    let params_tail = if let Some(port_params) = tail.strip_prefix(':') {
        let (port, params) = match port_params.find(';') {
            Some(sc) => (&port_params[..sc], &port_params[sc..]),
            None => (port_params, ""),
        };
        let port_no = parse_port(port)?;
        if port_no == 0 {
            return Err(Error::InvalidPort(port.to_string()));
        }
        parts.port = Some((port, port_no));
        params
    } else if tail.starts_with(';') {
        tail
    } else {
        return Err(Error::MalformedUri(format!(
            "unexpected {:?} after host in {}",
            tail, input
        )));
    };

    if let Some(params) = params_tail.strip_prefix(';') {
        parts.params = params;
        if let Some(token) = transport_param(params_tail) {
            parts.proto = resolve_protocol(token)?;
        }
    }

    Ok(parts.into_uri(input))
}

// Host with no port or parameters
fn host_only<'a>(mut parts: Parts<'a>, host: &'a str, input: &str) -> Result<Uri> {
    if host.is_empty() {
        return Err(Error::InvalidAddress(format!("empty host in {}", input)));
    }
    parts.addr = host;
    parts.atype = classify_address(host);
    Ok(parts.into_uri(input))
}

fn require_ipv6(interior: &str, literal: &str) -> Result<()> {
    match classify_address(interior) {
        AddressKind::Ipv6 => Ok(()),
        _ => Err(Error::InvalidAddress(format!("{} is not an IPv6 literal", literal))),
    }
}

// Value of the first `;transport=` parameter, up to the next ';'
fn transport_param(params: &str) -> Option<&str> {
    let (_, value) = params.split_once(TRANSPORT_PARAM)?;
    Some(value.split(';').next().unwrap_or(value))
}
