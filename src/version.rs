use sp_std::convert::TryFrom;

use crate::{
  error::{
    Error,
    Result,
  },
  multihash,
};

/// Binary length of a CIDv0.
pub const V0_LEN: usize = 34;

/// Text length of a CIDv0.
pub const V0_STR_LEN: usize = 46;

/// The version of a CID.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
  /// A bare sha2-256 multihash.
  V0,
  /// `<version><codec><multihash>`.
  #[default]
  V1,
}

impl Version {
  /// Check if the binary form looks like a CIDv0.
  ///
  /// There is no version byte in a CIDv0; it is recognised by being a 34 byte
  /// sha2-256 multihash, which no CIDv1 can start like.
  pub fn is_v0_binary(data: &[u8]) -> bool {
    data.len() == V0_LEN
      && data[0] == multihash::SHA2_256 as u8
      && data[1] == 32
  }

  /// Check if the text form looks like a CIDv0.
  pub fn is_v0_str(data: &str) -> bool {
    data.len() == V0_STR_LEN && data.starts_with("Qm")
  }
}

impl TryFrom<u64> for Version {
  type Error = Error;

  fn try_from(raw: u64) -> Result<Self> {
    match raw {
      0 => Ok(Version::V0),
      1 => Ok(Version::V1),
      v => Err(Error::UnsupportedVersion(v)),
    }
  }
}

impl From<Version> for u64 {
  fn from(ver: Version) -> u64 {
    match ver {
      Version::V0 => 0,
      Version::V1 => 1,
    }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;

  #[test]
  fn v0_detection() {
    let mut data = [0u8; V0_LEN];
    data[0] = 0x12;
    data[1] = 0x20;
    assert!(Version::is_v0_binary(&data));
    assert!(!Version::is_v0_binary(&data[..33]));
    data[1] = 0x21;
    assert!(!Version::is_v0_binary(&data));
    assert!(Version::is_v0_str("QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n"));
    assert!(!Version::is_v0_str("bafkreie5qrjvaw64n4tjm6hbnm7fnqvcssfed4whsjqxzslbd3jwhsk3mm"));
  }

  #[test]
  fn numeric_conversion() {
    assert_eq!(Version::try_from(0), Ok(Version::V0));
    assert_eq!(Version::try_from(1), Ok(Version::V1));
    assert_eq!(Version::try_from(3), Err(Error::UnsupportedVersion(3)));
    assert_eq!(u64::from(Version::V1), 1);
    assert_eq!(Version::default(), Version::V1);
  }
}
