// URI parser tests

use rvoip_sip_addr::{
    error::Error,
    parse_uri,
    types::{AddressKind, Scheme, Transport, Uri},
};

use crate::common::init_tracing;

#[test]
fn test_parse_sip_uri_with_transport() {
    init_tracing();
    let uri = parse_uri("sip:alice@host.example;transport=tcp").expect("Failed to parse URI");
    assert_eq!(uri.scheme, Scheme::Sip, "URI scheme should be SIP");
    assert_eq!(uri.schema(), "sip");
    assert_eq!(uri.user, "alice", "User part should be 'alice'");
    assert_eq!(uri.addr, "host.example");
    assert_eq!(uri.proto, Transport::Tcp);
    assert_eq!(uri.port_no, 5060);
}

#[test]
fn test_parse_sips_ipv6_uri() {
    init_tracing();
    let uri = parse_uri("sips:bob@[2001:db8::2]:5061;transport=tls").unwrap();
    assert_eq!(uri.scheme, Scheme::Sips);
    assert_eq!(uri.atype, AddressKind::Ipv6);
    assert_eq!(uri.port_no, 5061);
    assert_eq!(uri.proto, Transport::Tls);
}

#[test]
fn test_parse_uri_errors() {
    init_tracing();
    assert_eq!(parse_uri("sip:@host.example"), Err(Error::EmptyUser));
    assert!(matches!(parse_uri("sip:host.example:notaport"), Err(Error::InvalidPort(_))));
    assert!(matches!(parse_uri("xmpp:host.example"), Err(Error::UnknownScheme(_))));
    assert!(matches!(parse_uri("sip"), Err(Error::MalformedUri(_))));
    assert!(matches!(
        parse_uri("sip:host.example;transport=udp2"),
        Err(Error::UnknownProtocol(_))
    ));
}

#[test]
fn test_rfc3261_style_examples() {
    init_tracing();
    let uri = parse_uri("sip:alice@192.0.2.4").unwrap();
    assert_eq!(uri.atype, AddressKind::Ipv4);
    assert_eq!(uri.addr, "192.0.2.4");

    let uri = parse_uri("sips:1212@gateway.com").unwrap();
    assert_eq!(uri.scheme, Scheme::Sips);
    assert_eq!(uri.user, "1212");

    let uri = parse_uri("sip:+1-212-555-1212:1234@gateway.com;user=phone").unwrap();
    assert_eq!(uri.user, "+1-212-555-1212:1234");
    assert_eq!(uri.addr, "gateway.com");
    assert_eq!(uri.params, "user=phone");
    assert_eq!(uri.port_no, 5060);

    let uri = parse_uri("sip:alice;day=tuesday@atlanta.com").unwrap();
    assert_eq!(uri.user, "alice;");
    assert_eq!(uri.u_params, "day=tuesday");
    assert_eq!(uri.addr, "atlanta.com");
}

#[test]
fn test_uppercase_scheme_and_transport() {
    let uri = parse_uri("SIPS:carol@chicago.example:5061;transport=TLS").unwrap();
    assert_eq!(uri.scheme, Scheme::Sips);
    assert_eq!(uri.schema_id(), 2);
    assert_eq!(uri.proto, Transport::Tls);
    assert_eq!(uri.val, "SIPS:carol@chicago.example:5061;transport=TLS");
}

#[test]
fn test_from_str_matches_parser() {
    let parsed: Uri = "sip:alice@example.com:5070".parse().unwrap();
    assert_eq!(parsed, parse_uri("sip:alice@example.com:5070").unwrap());
    assert_eq!(parsed.host_port(), "example.com:5070");
}

#[test]
fn test_reparse_val_is_identical() {
    for input in [
        "sip:example.com",
        "sip:alice@example.com:5070;lr",
        "sips:bob@[2001:db8::2]:5061;transport=tls",
        "sip:[::1]",
        "tel:+1-212-555-1212",
        "sip:alice;x=y@example.com;transport=ws;maddr=10.0.0.1",
    ] {
        let first = parse_uri(input).unwrap();
        let second = parse_uri(&first.val).unwrap();
        assert_eq!(first, second, "re-parsing {} changed the record", input);
    }
}
