// ── Composite address codec ──
//
// Splits `host[:port]` strings carried by peer and profile entities.
// A pure string split: no IP/hostname or port-range validation.

use std::fmt;

/// Host and port halves of a composite address. Absent halves are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedAddress<'a> {
    pub host: Option<&'a str>,
    pub port: Option<&'a str>,
}

/// Split a composite address on its first `:`.
///
/// - `None` yields `{ host: None, port: None }`.
/// - No `:` yields the whole input as host and `port: None`.
/// - Further colons stay in the port verbatim (`"a:b:c"` → `a` / `b:c`).
pub fn parse_address(addr: Option<&str>) -> ParsedAddress<'_> {
    let Some(addr) = addr else {
        return ParsedAddress::default();
    };
    match addr.split_once(':') {
        Some((host, port)) => ParsedAddress {
            host: Some(host),
            port: Some(port),
        },
        None => ParsedAddress {
            host: Some(addr),
            port: None,
        },
    }
}

impl fmt::Display for ParsedAddress<'_> {
    /// Rebuild the composite form the address was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(host) = self.host {
            f.write_str(host)?;
        }
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}
