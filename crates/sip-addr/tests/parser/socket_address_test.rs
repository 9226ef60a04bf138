// Socket address parser tests

use rvoip_sip_addr::{
    error::Error,
    parse_socket_address,
    types::{AddressKind, SocketAddress, Transport},
};

use crate::common::init_tracing;

#[test]
fn test_bare_host_defaults() {
    init_tracing();
    let addr = parse_socket_address("proxy.example.com").expect("bare host should parse");
    assert_eq!(addr.proto, Transport::Udp, "Default transport should be UDP");
    assert_eq!(addr.proto(), "udp");
    assert_eq!(addr.port_no, 5060, "Default port should be 5060");
    assert_eq!(addr.port, "5060");
    assert_eq!(addr.atype, AddressKind::Host);
}

#[test]
fn test_proto_host_port() {
    init_tracing();
    let addr = parse_socket_address("udp:host.example:5070").unwrap();
    assert_eq!(addr.proto, Transport::Udp);
    assert_eq!(addr.addr, "host.example");
    assert_eq!(addr.port_no, 5070);
    assert_eq!(addr.val, "udp:host.example:5070");
}

#[test]
fn test_bare_ipv6_literal() {
    init_tracing();
    let addr = parse_socket_address("[::1]").unwrap();
    assert_eq!(addr.atype, AddressKind::Ipv6);
    assert_eq!(addr.proto, Transport::Udp);
    assert_eq!(addr.port_no, 5060);
    assert_eq!(addr.addr, "[::1]");
}

#[test]
fn test_proto_ipv6_port() {
    init_tracing();
    let addr = parse_socket_address("tcp:[2001:db8::1]:5061").unwrap();
    assert_eq!(addr.proto, Transport::Tcp);
    assert_eq!(addr.atype, AddressKind::Ipv6);
    assert_eq!(addr.port_no, 5061);
}

#[test]
fn test_every_transport_prefix() {
    init_tracing();
    let cases = [
        ("udp", Transport::Udp),
        ("TCP", Transport::Tcp),
        ("tls", Transport::Tls),
        ("SCTP", Transport::Sctp),
        ("ws", Transport::Ws),
        ("WSS", Transport::Wss),
    ];
    for (token, expected) in cases {
        let input = format!("{}:192.0.2.10:5080", token);
        let addr = parse_socket_address(&input).unwrap();
        assert_eq!(addr.proto, expected, "transport for {}", input);
        assert_eq!(addr.proto_id(), expected.id());
        assert_eq!(addr.atype, AddressKind::Ipv4);
    }
}

#[test]
fn test_mixed_case_prefix_is_host() {
    init_tracing();
    // "Tcp" is not a transport token, so it is read as the host
    let addr = parse_socket_address("Tcp:5062").unwrap();
    assert_eq!(addr.proto, Transport::Udp);
    assert_eq!(addr.addr, "Tcp");
    assert_eq!(addr.port_no, 5062);
}

#[test]
fn test_errors() {
    init_tracing();
    assert!(matches!(parse_socket_address("host:port"), Err(Error::InvalidPort(_))));
    assert!(matches!(parse_socket_address("[192.0.2.1]"), Err(Error::InvalidAddress(_))));
    assert!(matches!(parse_socket_address("[::1]extra"), Err(Error::InvalidAddress(_))));
    assert!(matches!(parse_socket_address("tcp:[::1"), Err(Error::InvalidAddress(_))));
}

#[test]
fn test_from_str_matches_parser() {
    let parsed: SocketAddress = "tls:[2001:db8::7]:5061".parse().unwrap();
    assert_eq!(parsed, parse_socket_address("tls:[2001:db8::7]:5061").unwrap());
    assert_eq!(parsed.to_string(), "tls:[2001:db8::7]:5061");
}

#[test]
fn test_reparse_val_is_identical() {
    for input in [
        "example.com",
        "192.0.2.1:5060",
        "[::1]",
        "wss:[2001:db8::1]:443",
        "sctp:10.0.0.1:2905",
        "tcp:host.example",
    ] {
        let first = parse_socket_address(input).unwrap();
        let second = parse_socket_address(&first.val).unwrap();
        assert_eq!(first, second, "re-parsing {} changed the record", input);
    }
}
