//! Errors raised while building, decoding and validating CIDs.

use alloc::string::String;
use sp_std::fmt;

use crate::varint::VarintError;

/// Type alias to use this library's [`Error`] type in a `Result`.
pub type Result<T> = core::result::Result<T, Error>;

/// Why a binary header could not be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Malformed {
  /// One of the header varints is invalid.
  Varint(VarintError),
  /// The version field is not 1 and the data does not look like a CIDv0.
  Version(u64),
  /// A cast was handed more bytes than the CID occupies.
  TrailingBytes,
}

impl fmt::Display for Malformed {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Malformed::Varint(e) => write!(f, "{}", e),
      Malformed::Version(v) => {
        write!(f, "expected 1 as the cid version number, got: {}", v)
      }
      Malformed::TrailingBytes => {
        f.write_str("trailing bytes in data buffer passed to cid cast")
      }
    }
  }
}

/// Error types
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// The input is shorter than the smallest valid record.
  #[error("cid too short")]
  TooShort,
  /// The header is structurally invalid.
  #[error("invalid cid: {0}")]
  Malformed(Malformed),
  /// The input ends before the declared digest does.
  #[error("invalid cid: unexpected end of input")]
  Truncated,
  /// The declared digest length is above the allocation ceiling.
  #[error("invalid cid: refusing to allocate {0} bytes for a digest")]
  DigestTooLarge(u64),
  /// The multihash does not agree with its own header.
  #[error("invalid cid: inconsistent multihash")]
  InvalidDigest,
  /// The version is neither 0 nor 1.
  #[error("unsupported cid version {0}")]
  UnsupportedVersion(u64),
  /// A prefix that cannot describe a CIDv0.
  #[error("invalid v0 prefix")]
  InvalidPrefix,
  /// A format whose options contradict its version.
  #[error("incompatible format: {0}")]
  IncompatibleConfig(&'static str),
  /// The requested base is not available for this CID version.
  #[error("invalid base encoding")]
  InvalidEncoding,
  /// The multibase layer failed to decode the text.
  #[error("invalid cid: {0}")]
  Multibase(multibase::Error),
  /// CIDv0 must carry a 32 byte sha2-256 digest.
  #[error("cidv0 only supports sha2-256 with 32 byte digests")]
  OnlySha256ForV0,
  /// The digest algorithm is not on the allow-list.
  #[error("potentially insecure hash functions not allowed")]
  InsecureHash,
  /// The digest is below the minimum length.
  #[error("hashes must be at least {0} bytes long")]
  DigestTooShort(usize),
  /// The digest function does not implement this algorithm.
  #[error("unsupported hash function {0:#x}")]
  UnsupportedHash(u64),
  /// The digest function cannot produce the requested length.
  #[error("invalid length {length} requested for hash function {code:#x}")]
  InvalidHashLength {
    /// Algorithm tag.
    code: u64,
    /// Requested digest length.
    length: i64,
  },
  /// The byte source yielded nothing at all.
  #[error("end of stream")]
  EndOfStream,
  /// The byte source failed.
  #[error("read failed: {0}")]
  Io(String),
}

impl From<VarintError> for Error {
  fn from(e: VarintError) -> Self { Error::Malformed(Malformed::Varint(e)) }
}

impl From<multibase::Error> for Error {
  fn from(e: multibase::Error) -> Self { Error::Multibase(e) }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    use alloc::string::ToString;
    Error::Io(e.to_string())
  }
}
