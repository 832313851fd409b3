//! The shape of a CID without its digest.

use sp_std::vec::Vec;

use crate::{
  cid::Cid,
  codec::DAG_PROTOBUF,
  error::{
    Error,
    Result,
  },
  hasher::{
    Hasher,
    StandardHasher,
    DEFAULT_LENGTH,
  },
  multihash,
  varint,
};

/// Version, codec, digest algorithm and digest length of a CID.
///
/// A prefix taken from one CID can stamp new content with the same shape.
/// `mh_length` is [`DEFAULT_LENGTH`] when the algorithm's own length should be
/// used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prefix {
  /// 0 or 1; other values are rejected when summing.
  pub version: u64,
  /// Multicodec content type.
  pub codec: u64,
  /// Digest algorithm code.
  pub mh_type: u64,
  /// Digest length in bytes, or -1 for the algorithm default.
  pub mh_length: i64,
}

fn default_len(mh_type: u64) -> i64 {
  multihash::default_length(mh_type).map_or(DEFAULT_LENGTH, |len| len as i64)
}

impl Prefix {
  /// The prefix of a CIDv0 hashed with `mh_type`.
  pub fn new_v0(mh_type: u64) -> Self {
    Prefix {
      version: 0,
      codec: DAG_PROTOBUF,
      mh_type,
      mh_length: default_len(mh_type),
    }
  }

  /// The prefix of a CIDv1.
  pub fn new_v1(codec: u64, mh_type: u64) -> Self {
    Prefix { version: 1, codec, mh_type, mh_length: default_len(mh_type) }
  }

  /// Four varints: version, codec, digest algorithm, digest length. A length
  /// of -1 is written as its two's complement bit pattern.
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 * varint::MAX_LEN);
    varint::write_uvarint(self.version, &mut out);
    varint::write_uvarint(self.codec, &mut out);
    varint::write_uvarint(self.mh_type, &mut out);
    varint::write_uvarint(self.mh_length as u64, &mut out);
    out
  }

  /// Reads a prefix written by [`Prefix::to_bytes`]. Trailing bytes are
  /// ignored.
  ///
  /// # Errors
  ///
  /// `Malformed` when any of the four varints is invalid or missing.
  pub fn from_bytes(data: &[u8]) -> Result<Self> {
    let mut offset = 0;
    let mut next = || -> Result<u64> {
      let (value, n) = varint::read_uvarint(&data[offset..])?;
      offset += n;
      Ok(value)
    };
    let version = next()?;
    let codec = next()?;
    let mh_type = next()?;
    let mh_length = next()? as i64;
    Ok(Prefix { version, codec, mh_type, mh_length })
  }

  /// Hashes `data` with [`StandardHasher`] and builds a CID of this shape.
  ///
  /// # Errors
  ///
  /// See [`Prefix::sum_with`].
  pub fn sum(&self, data: &[u8]) -> Result<Cid> { self.sum_with(&StandardHasher, data) }

  /// Hashes `data` with `hasher` and builds a CID of this shape.
  ///
  /// # Errors
  ///
  /// `InvalidPrefix` for a version 0 prefix that is not sha2-256 with a 32
  /// byte or default length, `UnsupportedVersion` above version 1, and any
  /// error of the hasher.
  pub fn sum_with<H: Hasher + ?Sized>(&self, hasher: &H, data: &[u8]) -> Result<Cid> {
    let length =
      if self.mh_type == multihash::IDENTITY { DEFAULT_LENGTH } else { self.mh_length };

    match self.version {
      0 => {
        if self.mh_type != multihash::SHA2_256
          || (self.mh_length != 32 && self.mh_length != DEFAULT_LENGTH)
        {
          return Err(Error::InvalidPrefix);
        }
        let hash = hasher.sum(data, self.mh_type, length)?;
        Cid::try_new_v0(hash)
      }
      1 => {
        let hash = hasher.sum(data, self.mh_type, length)?;
        Ok(Cid::new_v1(self.codec, hash))
      }
      v => Err(Error::UnsupportedVersion(v)),
    }
  }
}
