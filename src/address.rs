/// Hexadecimal account addresses
///
/// did:cndid identifiers are 20-byte addresses rendered as `0x` followed by
/// 40 lowercase hex digits. Parsing is lenient (prefix optional, odd length
/// and short/long inputs are normalised) so that an identifier is accepted
/// only if it is already in the canonical rendering.
use std::fmt;

/// Address length in bytes
pub const ADDRESS_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// Parse a hex string into an address
    ///
    /// Longer inputs keep their trailing bytes, shorter ones are left-padded
    /// with zeroes. Returns `None` if the string contains non-hex characters.
    pub fn parse_lossy(s: &str) -> Option<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let padded;
        let digits = if digits.len() % 2 == 1 {
            padded = format!("0{}", digits);
            padded.as_str()
        } else {
            digits
        };

        let bytes = hex::decode(digits).ok()?;

        let mut out = [0u8; ADDRESS_LENGTH];
        if bytes.len() >= ADDRESS_LENGTH {
            out.copy_from_slice(&bytes[bytes.len() - ADDRESS_LENGTH..]);
        } else {
            out[ADDRESS_LENGTH - bytes.len()..].copy_from_slice(&bytes);
        }

        Some(Self(out))
    }

    /// True if `s` parses and renders back to exactly `s`
    pub fn is_canonical(s: &str) -> bool {
        Self::parse_lossy(s)
            .map(|addr| addr.to_string() == s)
            .unwrap_or(false)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}
