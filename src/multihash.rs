//! Self-describing digests: `<code varint><length varint><digest bytes>`.

use sp_std::{
  convert::TryFrom,
  fmt,
  vec::Vec,
};

use crate::{
  error::{
    Error,
    Result,
  },
  varint,
};

/// The content itself, unhashed.
pub const IDENTITY: u64 = 0x00;
/// sha1, 20 bytes.
pub const SHA1: u64 = 0x11;
/// sha2-256, 32 bytes.
pub const SHA2_256: u64 = 0x12;
/// sha2-512, 64 bytes.
pub const SHA2_512: u64 = 0x13;
/// sha3-512, 64 bytes.
pub const SHA3_512: u64 = 0x14;
/// sha3-384, 48 bytes.
pub const SHA3_384: u64 = 0x15;
/// sha3-256, 32 bytes.
pub const SHA3_256: u64 = 0x16;
/// sha3-224, 28 bytes.
pub const SHA3_224: u64 = 0x17;
/// shake-128, 32 bytes of output by default.
pub const SHAKE_128: u64 = 0x18;
/// shake-256, 64 bytes of output by default.
pub const SHAKE_256: u64 = 0x19;
/// keccak-224, 28 bytes.
pub const KECCAK_224: u64 = 0x1a;
/// keccak-256, 32 bytes.
pub const KECCAK_256: u64 = 0x1b;
/// keccak-384, 48 bytes.
pub const KECCAK_384: u64 = 0x1c;
/// keccak-512, 64 bytes.
pub const KECCAK_512: u64 = 0x1d;
/// blake3, 32 bytes of output by default.
pub const BLAKE3: u64 = 0x1e;
/// murmur3-x64-64. Not a cryptographic hash.
pub const MURMUR3_X64_64: u64 = 0x22;
/// sha2-256 applied twice.
pub const DBL_SHA2_256: u64 = 0x56;
/// blake2b-8; the family runs in 8 bit steps up to blake2b-512.
pub const BLAKE2B_MIN: u64 = 0xb201;
/// blake2b-512.
pub const BLAKE2B_MAX: u64 = 0xb240;
/// blake2s-8; the family runs in 8 bit steps up to blake2s-256.
pub const BLAKE2S_MIN: u64 = 0xb241;
/// blake2s-256.
pub const BLAKE2S_MAX: u64 = 0xb260;

/// Digests longer than this are refused before any allocation happens.
pub const MAX_DIGEST_ALLOC: u64 = 32 << 20;

static NAMES: &[(u64, &str)] = &[
  (IDENTITY, "identity"),
  (SHA1, "sha1"),
  (SHA2_256, "sha2-256"),
  (SHA2_512, "sha2-512"),
  (SHA3_512, "sha3-512"),
  (SHA3_384, "sha3-384"),
  (SHA3_256, "sha3-256"),
  (SHA3_224, "sha3-224"),
  (SHAKE_128, "shake-128"),
  (SHAKE_256, "shake-256"),
  (KECCAK_224, "keccak-224"),
  (KECCAK_256, "keccak-256"),
  (KECCAK_384, "keccak-384"),
  (KECCAK_512, "keccak-512"),
  (BLAKE3, "blake3"),
  (MURMUR3_X64_64, "murmur3-x64-64"),
  (DBL_SHA2_256, "dbl-sha2-256"),
];

/// Name of a digest algorithm. The blake2 families are not in the table and
/// are reported as `None`; use [`blake2_bits`] for them.
pub fn hash_name(code: u64) -> Option<&'static str> {
  NAMES.iter().find(|(c, _)| *c == code).map(|(_, name)| *name)
}

/// Looks up a digest algorithm by name.
pub fn hash_from_name(name: &str) -> Option<u64> {
  NAMES.iter().find(|(_, n)| *n == name).map(|(code, _)| *code)
}

/// Output size in bits for a blake2b or blake2s code.
pub fn blake2_bits(code: u64) -> Option<u64> {
  match code {
    BLAKE2B_MIN..=BLAKE2B_MAX => Some((code - BLAKE2B_MIN + 1) * 8),
    BLAKE2S_MIN..=BLAKE2S_MAX => Some((code - BLAKE2S_MIN + 1) * 8),
    _ => None,
  }
}

/// The digest length an algorithm produces when no length is requested.
/// Identity has no fixed length and yields `None`, as do unknown codes.
pub fn default_length(code: u64) -> Option<usize> {
  let len = match code {
    SHA1 => 20,
    SHA2_256 | SHA3_256 | KECCAK_256 | DBL_SHA2_256 | SHAKE_128 | BLAKE3 => 32,
    SHA3_224 | KECCAK_224 => 28,
    SHA3_384 | KECCAK_384 => 48,
    SHA2_512 | SHA3_512 | KECCAK_512 | SHAKE_256 => 64,
    MURMUR3_X64_64 => 8,
    _ => return blake2_bits(code).map(|bits| (bits / 8) as usize),
  };
  Some(len)
}

/// Parses the multihash at the front of `data` and returns how many bytes it
/// occupies, without copying the digest.
///
/// # Errors
///
/// Returns `Malformed` for bad varints, `DigestTooLarge` when the declared
/// length is above [`MAX_DIGEST_ALLOC`], and `Truncated` when `data` ends
/// before the digest does.
pub fn read_len(data: &[u8]) -> Result<usize> {
  let (_, code_len) = varint::read_uvarint(data)?;
  let (size, size_len) = varint::read_uvarint(&data[code_len..])?;
  if size > MAX_DIGEST_ALLOC {
    return Err(Error::DigestTooLarge(size));
  }
  let total = code_len + size_len + size as usize;
  if data.len() < total {
    return Err(Error::Truncated);
  }
  Ok(total)
}

/// An owned digest tagged with the algorithm that produced it.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multihash {
  code: u64,
  digest: Vec<u8>,
}

impl Multihash {
  /// Wraps an already computed digest.
  pub fn wrap(code: u64, digest: &[u8]) -> Self {
    Multihash { code, digest: digest.to_vec() }
  }

  /// Parses a multihash occupying exactly `data`.
  ///
  /// # Errors
  ///
  /// Fails like [`read_len`], and with `InvalidDigest` when bytes remain
  /// after the declared digest.
  pub fn from_bytes(data: &[u8]) -> Result<Self> {
    let (mh, len) = Self::read_bytes(data)?;
    if len != data.len() {
      return Err(Error::InvalidDigest);
    }
    Ok(mh)
  }

  /// Parses the multihash at the front of `data`, returning it with the
  /// number of bytes read.
  ///
  /// # Errors
  ///
  /// Fails like [`read_len`].
  pub fn read_bytes(data: &[u8]) -> Result<(Self, usize)> {
    let total = read_len(data)?;
    let (code, code_len) = varint::read_uvarint(data)?;
    let (_, size_len) = varint::read_uvarint(&data[code_len..])?;
    let digest = data[code_len + size_len..total].to_vec();
    Ok((Multihash { code, digest }, total))
  }

  /// The algorithm tag.
  pub fn code(&self) -> u64 { self.code }

  /// Declared digest length in bytes.
  pub fn size(&self) -> usize { self.digest.len() }

  /// The raw digest.
  pub fn digest(&self) -> &[u8] { &self.digest }

  /// Length of the binary encoding.
  pub fn encoded_len(&self) -> usize {
    varint::uvarint_size(self.code)
      + varint::uvarint_size(self.digest.len() as u64)
      + self.digest.len()
  }

  /// Appends the binary encoding to `out`.
  pub fn write_into(&self, out: &mut Vec<u8>) {
    varint::write_uvarint(self.code, out);
    varint::write_uvarint(self.digest.len() as u64, out);
    out.extend_from_slice(&self.digest);
  }

  /// Returns the binary encoding.
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(self.encoded_len());
    self.write_into(&mut out);
    out
  }

  /// Truncates the digest to `len` bytes. Longer lengths are a no-op.
  pub fn truncate(&mut self, len: usize) { self.digest.truncate(len) }
}

impl fmt::Debug for Multihash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Multihash")
      .field("code", &format_args!("{:#x}", self.code))
      .field("size", &self.digest.len())
      .field("digest", &HexDigest(&self.digest))
      .finish()
  }
}

struct HexDigest<'a>(&'a [u8]);

impl<'a> fmt::Debug for HexDigest<'a> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.0 {
      write!(f, "{:02x}", b)?;
    }
    Ok(())
  }
}

impl TryFrom<&[u8]> for Multihash {
  type Error = Error;

  fn try_from(data: &[u8]) -> Result<Self> { Self::from_bytes(data) }
}

impl From<Multihash> for Vec<u8> {
  fn from(mh: Multihash) -> Self { mh.to_bytes() }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::{
    error::Malformed,
    varint::VarintError,
  };

  #[test]
  fn encodes_code_length_digest() {
    let mh = Multihash::wrap(SHA2_256, &[0xaa; 32]);
    let bytes = mh.to_bytes();
    assert_eq!(bytes.len(), 34);
    assert_eq!(mh.encoded_len(), 34);
    assert_eq!(&bytes[..2], &[0x12, 0x20]);
    assert_eq!(Multihash::from_bytes(&bytes), Ok(mh));
  }

  #[test]
  fn rejects_inconsistent_lengths() {
    assert_eq!(Multihash::from_bytes(&[0x12, 0x03, 1, 2]), Err(Error::Truncated));
    assert_eq!(
      Multihash::from_bytes(&[0x12, 0x01, 1, 2]),
      Err(Error::InvalidDigest)
    );
    assert_eq!(
      Multihash::from_bytes(&[0x12, 0x80]),
      Err(Error::Malformed(Malformed::Varint(VarintError::Underflow)))
    );
  }

  #[test]
  fn refuses_huge_digests() {
    let mut bytes = vec![0x12];
    varint::write_uvarint(MAX_DIGEST_ALLOC + 1, &mut bytes);
    assert_eq!(
      Multihash::from_bytes(&bytes),
      Err(Error::DigestTooLarge(MAX_DIGEST_ALLOC + 1))
    );
  }

  #[test]
  fn blake2_lengths() {
    assert_eq!(default_length(BLAKE2B_MIN), Some(1));
    assert_eq!(default_length(BLAKE2B_MIN + 31), Some(32));
    assert_eq!(default_length(BLAKE2B_MAX), Some(64));
    assert_eq!(default_length(BLAKE2S_MAX), Some(32));
    assert_eq!(default_length(IDENTITY), None);
    assert_eq!(hash_name(SHA2_256), Some("sha2-256"));
    assert_eq!(hash_from_name("keccak-256"), Some(KECCAK_256));
  }

  #[quickcheck]
  fn prop_read_bytes_round_trip(mh: Multihash, tail: Vec<u8>) -> bool {
    let mut bytes = mh.to_bytes();
    let len = bytes.len();
    bytes.extend_from_slice(&tail);
    Multihash::read_bytes(&bytes) == Ok((mh, len))
  }
}
