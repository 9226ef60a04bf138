use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding socket addresses and URIs
///
/// Every variant is a terminal failure for the input that produced it. The
/// parsers never hand back a partially filled record alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// URI scheme is not one of `sip`, `sips`, `tel`
    #[error("Unknown URI scheme: {0}")]
    UnknownScheme(String),

    /// Transport token is not one of `udp`, `tcp`, `tls`, `sctp`, `ws`, `wss`
    #[error("Unknown transport protocol: {0}")]
    UnknownProtocol(String),

    /// `@` present with nothing in front of it
    #[error("Empty user part")]
    EmptyUser,

    /// Host token is empty, or a bracketed literal is unclosed or not IPv6
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Port is not a decimal number in range
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// Input does not follow the `scheme:[user@]host[:port][;params]` layout
    #[error("Malformed URI: {0}")]
    MalformedUri(String),
}
