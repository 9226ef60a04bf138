//! Parsers for socket addresses and SIP/SIPS/TEL URIs
//!
//! Both entry points are pure functions of their input: they either return a
//! fully populated record or an [`Error`](crate::error::Error), never a
//! partially filled one.

use nom::IResult;

pub mod socket_address;
pub mod uri;
pub mod utils;

// Type alias for parser result
pub type ParseResult<'a, O> = IResult<&'a str, O>;

pub use socket_address::parse_socket_address;
pub use uri::parse_uri;
pub use utils::{find_matching_bracket, parse_port, split_once_any, strip_brackets};
