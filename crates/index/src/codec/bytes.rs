use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::str::FromStr;

use exn::ResultExt;

use crate::error::{Error, ErrorKind};

/// Raw bytes stored as a hexadecimal string, such as package signatures and
/// content digests.
///
/// Decoding accepts either case; encoding is always lowercase.
///
/// ```rust
/// use fdcl_index::codec::HexBytes;
/// let sig: HexBytes = "DEADbeef".parse().unwrap();
/// assert_eq!(sig.as_slice(), [0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(sig.to_string(), "deadbeef");
/// assert!("abc".parse::<HexBytes>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexBytes(Vec<u8>);
impl HexBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for HexBytes {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(hex::decode(s).or_raise(|| ErrorKind::Format {
            codec: "hex",
            value: s.to_string(),
        })?))
    }
}
impl Display for HexBytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl Deref for HexBytes {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl AsRef<[u8]> for HexBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
impl From<HexBytes> for Vec<u8> {
    fn from(value: HexBytes) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("00", &[0x00])]
    #[case("ff", &[0xff])]
    #[case("FF", &[0xff])]
    #[case("0a1B2c", &[0x0a, 0x1b, 0x2c])]
    fn test_decode(#[case] input: &str, #[case] expected: &[u8]) {
        assert_eq!(input.parse::<HexBytes>().unwrap().as_slice(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("0")]
    #[case("zz")]
    #[case("12 34")]
    #[case("0x12")]
    fn test_decode_invalid(#[case] input: &str) {
        let err = input.parse::<HexBytes>().unwrap_err();
        assert_eq!(*err, ErrorKind::Format { codec: "hex", value: input.to_string() });
    }

    #[test]
    fn test_encode_lowercase() {
        assert_eq!(HexBytes::new(vec![0xAB, 0xCD, 0x01]).to_string(), "abcd01");
    }

    #[test]
    fn test_round_trip_all_byte_values() {
        let original = HexBytes::new((0..=u8::MAX).collect());
        assert_eq!(original.to_string().parse::<HexBytes>().unwrap(), original);
    }
}
