use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// URI scheme types
///
/// The scheme component of a URI, which selects the addressing convention:
/// - `sip`: Standard SIP
/// - `sips`: Secure SIP
/// - `tel`: Telephone number
///
/// # Examples
///
/// ```
/// use rvoip_sip_addr::types::scheme::Scheme;
///
/// assert_eq!("SIPS".parse::<Scheme>().unwrap(), Scheme::Sips);
/// assert_eq!(Scheme::Sips.as_str(), "sips");
/// assert_eq!(Scheme::Sips.id(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Scheme {
    /// SIP URI (non-secure)
    Sip = 1,
    /// SIPS URI (secure SIP)
    Sips = 2,
    /// TEL URI (telephone number)
    Tel = 3,
}

impl Scheme {
    /// Returns the canonical lowercase scheme name
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Sip => "sip",
            Scheme::Sips => "sips",
            Scheme::Tel => "tel",
        }
    }

    /// Returns the numeric scheme id
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        resolve_scheme(s)
    }
}

/// Resolves a scheme token, accepting the lowercase and uppercase spellings only
pub fn resolve_scheme(token: &str) -> Result<Scheme> {
    match token {
        "sip" | "SIP" => Ok(Scheme::Sip),
        "sips" | "SIPS" => Ok(Scheme::Sips),
        "tel" | "TEL" => Ok(Scheme::Tel),
        _ => Err(Error::UnknownScheme(token.to_string())),
    }
}
