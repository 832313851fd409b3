//! Rejecting CIDs built on weak or truncated digests.

use core::ops::RangeInclusive;

use crate::{
  cid::CidGeneric,
  error::{
    Error,
    Result,
  },
  multihash::{
    self,
    BLAKE2B_MAX,
    BLAKE2B_MIN,
    BLAKE2S_MAX,
    BLAKE2S_MIN,
  },
  prefix::Prefix,
};

/// Digests shorter than this are refused, except for identity.
pub const MINIMUM_HASH_LENGTH: usize = 20;

/// Which digest algorithms a CID may be built on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashPolicy<'a> {
  /// Individually accepted algorithm codes.
  pub allowed: &'a [u64],
  /// Accepted runs of codes, such as the longer blake2 variants.
  pub ranges: &'a [RangeInclusive<u64>],
}

// blake2b-160 and up, blake2s-160 and up
const BLAKE2_RANGES: &[RangeInclusive<u64>] =
  &[BLAKE2B_MIN + 19..=BLAKE2B_MAX, BLAKE2S_MIN + 19..=BLAKE2S_MAX];

const CURRENT_ALLOWED: &[u64] = &[
  multihash::SHA2_256,
  multihash::SHA2_512,
  multihash::SHA3_224,
  multihash::SHA3_256,
  multihash::SHA3_384,
  multihash::SHA3_512,
  multihash::SHAKE_256,
  multihash::DBL_SHA2_256,
  multihash::KECCAK_224,
  multihash::KECCAK_256,
  multihash::KECCAK_384,
  multihash::KECCAK_512,
  multihash::IDENTITY,
];

const PERMISSIVE_ALLOWED: &[u64] = &[
  multihash::SHA1,
  multihash::SHA2_256,
  multihash::SHA2_512,
  multihash::SHA3_224,
  multihash::SHA3_256,
  multihash::SHA3_384,
  multihash::SHA3_512,
  multihash::SHAKE_256,
  multihash::DBL_SHA2_256,
  multihash::KECCAK_224,
  multihash::KECCAK_256,
  multihash::KECCAK_384,
  multihash::KECCAK_512,
  multihash::IDENTITY,
];

impl HashPolicy<'static> {
  /// The policy in force: sha1 is not accepted.
  pub const CURRENT: HashPolicy<'static> =
    HashPolicy { allowed: CURRENT_ALLOWED, ranges: BLAKE2_RANGES };
  /// The earlier policy, which still accepted sha1.
  pub const PERMISSIVE: HashPolicy<'static> =
    HashPolicy { allowed: PERMISSIVE_ALLOWED, ranges: BLAKE2_RANGES };
}

impl Default for HashPolicy<'static> {
  fn default() -> Self { HashPolicy::CURRENT }
}

impl<'a> HashPolicy<'a> {
  /// Whether `code` is an accepted digest algorithm.
  pub fn is_good_hash(&self, code: u64) -> bool {
    self.allowed.contains(&code) || self.ranges.iter().any(|r| r.contains(&code))
  }

  /// Checks the digest of `cid` against this policy.
  ///
  /// # Errors
  ///
  /// `OnlySha256ForV0` for a CIDv0 that is not sha2-256/32, `InsecureHash` for
  /// an algorithm outside the policy, `DigestTooShort` for digests under
  /// [`MINIMUM_HASH_LENGTH`] bytes.
  pub fn validate<S: AsRef<[u8]>>(&self, cid: &CidGeneric<S>) -> Result<()> {
    self.validate_prefix(&cid.prefix())
  }

  /// Like [`HashPolicy::validate`], on the prefix alone.
  ///
  /// # Errors
  ///
  /// See [`HashPolicy::validate`].
  pub fn validate_prefix(&self, prefix: &Prefix) -> Result<()> {
    if prefix.version == 0 {
      if prefix.mh_type != multihash::SHA2_256 || prefix.mh_length != 32 {
        return Err(Error::OnlySha256ForV0);
      }
      return Ok(());
    }

    if !self.is_good_hash(prefix.mh_type) {
      tracing::debug!(code = prefix.mh_type, "rejected insecure hash");
      return Err(Error::InsecureHash);
    }

    if prefix.mh_type != multihash::IDENTITY
      && prefix.mh_length < MINIMUM_HASH_LENGTH as i64
    {
      return Err(Error::DigestTooShort(MINIMUM_HASH_LENGTH));
    }
    Ok(())
  }
}

/// [`HashPolicy::is_good_hash`] under the current policy.
pub fn is_good_hash(code: u64) -> bool { HashPolicy::CURRENT.is_good_hash(code) }

/// [`HashPolicy::validate`] under the current policy.
///
/// # Errors
///
/// See [`HashPolicy::validate`].
pub fn validate_cid<S: AsRef<[u8]>>(cid: &CidGeneric<S>) -> Result<()> {
  HashPolicy::CURRENT.validate(cid)
}
