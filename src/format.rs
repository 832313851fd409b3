//! Building CIDs for content with a configured shape.

use crate::{
  cid::Cid,
  codec::{
    DAG_CBOR,
    DAG_PROTOBUF,
    RAW,
  },
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
  prefix::Prefix,
};

/// Anything that turns content into a CID.
pub trait Builder {
  /// Hashes `data` and returns its CID.
  ///
  /// # Errors
  ///
  /// Fails when the configuration cannot produce a CID for `data`.
  fn sum(&self, data: &[u8]) -> Result<Cid>;

  /// The codec stamped on new CIDs.
  fn codec(&self) -> u64;

  /// The same builder with a different codec.
  fn with_codec(&self, codec: u64) -> Self
  where Self: Sized;
}

impl Builder for Prefix {
  fn sum(&self, data: &[u8]) -> Result<Cid> { Prefix::sum(self, data) }

  fn codec(&self) -> u64 { self.codec }

  fn with_codec(&self, codec: u64) -> Self { Prefix { codec, ..*self } }
}

/// A CID shape plus an optional inlining threshold.
///
/// When `inline_max` is set, content of at most that many bytes is stored
/// verbatim in an identity multihash instead of being hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Format {
  /// CID version to produce.
  pub version: u64,
  /// Multicodec content type.
  pub codec: u64,
  /// Digest algorithm code.
  pub mh_type: u64,
  /// Digest length in bytes, or -1 for the algorithm default.
  pub mh_length: i64,
  /// Largest content stored verbatim instead of hashed. `None` disables
  /// inlining.
  pub inline_max: Option<usize>,
}

/// dag-pb in the legacy v0 shape.
pub const DAG_PROTOBUF_V0_FORMAT: Format = Format {
  version: 0,
  codec: DAG_PROTOBUF,
  mh_type: multihash::SHA2_256,
  mh_length: DEFAULT_LENGTH,
  inline_max: None,
};

/// dag-pb as CIDv1.
pub const DAG_PROTOBUF_V1_FORMAT: Format = Format {
  version: 1,
  codec: DAG_PROTOBUF,
  mh_type: multihash::SHA2_256,
  mh_length: DEFAULT_LENGTH,
  inline_max: None,
};

/// Raw leaves.
pub const RAW_FORMAT: Format = Format {
  version: 1,
  codec: RAW,
  mh_type: multihash::SHA2_256,
  mh_length: DEFAULT_LENGTH,
  inline_max: None,
};

/// dag-cbor, the default.
pub const DAG_CBOR_FORMAT: Format = Format {
  version: 1,
  codec: DAG_CBOR,
  mh_type: multihash::SHA2_256,
  mh_length: DEFAULT_LENGTH,
  inline_max: None,
};

impl Default for Format {
  fn default() -> Self { DAG_CBOR_FORMAT }
}

impl Format {
  /// Replaces the digest algorithm, resetting the length to its default.
  pub fn with_hash(&self, mh_type: u64) -> Self {
    if mh_type == self.mh_type {
      return *self;
    }
    Format { mh_type, mh_length: DEFAULT_LENGTH, ..*self }
  }

  /// Requests a truncated digest.
  pub fn with_hash_length(&self, mh_length: i64) -> Self {
    Format { mh_length, ..*self }
  }

  /// Inlines content of at most `max` bytes.
  pub fn with_inline(&self, max: usize) -> Self {
    Format { inline_max: Some(max), ..*self }
  }

  /// Produces CIDs of another version.
  pub fn with_version(&self, version: u64) -> Self { Format { version, ..*self } }

  /// The prefix new CIDs take when their content is not inlined.
  pub fn prefix(&self) -> Prefix {
    Prefix {
      version: self.version,
      codec: self.codec,
      mh_type: self.mh_type,
      mh_length: self.mh_length,
    }
  }

  /// Hashes `data` with `hasher`, or inlines it when it is small enough.
  ///
  /// # Errors
  ///
  /// `IncompatibleConfig` for a version 0 format with inlining or with any
  /// digest other than sha2-256 at its full length. Otherwise the errors of
  /// [`Prefix::sum_with`].
  pub fn sum_with<H: Hasher + ?Sized>(&self, hasher: &H, data: &[u8]) -> Result<Cid> {
    if self.version == 0 {
      if self.inline_max.is_some() {
        return Err(Error::IncompatibleConfig("cidv0 cannot inline content"));
      }
      if self.mh_type != multihash::SHA2_256
        || (self.mh_length != 32 && self.mh_length != DEFAULT_LENGTH)
      {
        return Err(Error::IncompatibleConfig(
          "cidv0 only supports sha2-256 with the default length",
        ));
      }
    }

    let mut prefix = self.prefix();
    if let Some(max) = self.inline_max {
      if data.len() <= max {
        prefix.mh_type = multihash::IDENTITY;
        prefix.mh_length = DEFAULT_LENGTH;
      }
    }
    prefix.sum_with(hasher, data)
  }
}

impl Builder for Format {
  fn sum(&self, data: &[u8]) -> Result<Cid> { self.sum_with(&StandardHasher, data) }

  fn codec(&self) -> u64 { self.codec }

  fn with_codec(&self, codec: u64) -> Self {
    if codec == self.codec {
      return *self;
    }
    Format { codec, ..*self }
  }
}
