//! Computing multihashes over content.
//!
//! Which algorithms [`StandardHasher`] knows depends on the enabled features:
//! `sha1`, `sha2`, `sha3`, `blake2b`, `blake2s` and `blake3`. Identity is
//! always available.

use sp_std::vec::Vec;

use crate::{
  error::{
    Error,
    Result,
  },
  multihash::{
    self,
    Multihash,
  },
};

/// Requests the algorithm's default digest length.
pub const DEFAULT_LENGTH: i64 = -1;

/// A digest function: hash `data` with algorithm `code`, keeping `length`
/// bytes of output, or the algorithm default when `length` is negative.
pub trait Hasher {
  /// # Errors
  ///
  /// Returns `UnsupportedHash` for unknown algorithms and
  /// `InvalidHashLength` when `length` exceeds what the algorithm produces.
  fn sum(&self, data: &[u8], code: u64, length: i64) -> Result<Multihash>;
}

/// The digest function backed by the RustCrypto and blake crates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardHasher;

impl Hasher for StandardHasher {
  fn sum(&self, data: &[u8], code: u64, length: i64) -> Result<Multihash> {
    if code == multihash::IDENTITY {
      if length >= 0 && length as usize != data.len() {
        return Err(Error::InvalidHashLength { code, length });
      }
      return Ok(Multihash::wrap(code, data));
    }
    let digest = full_digest(data, code)?;
    let wanted = if length < 0 { digest.len() } else { length as usize };
    if wanted > digest.len() {
      return Err(Error::InvalidHashLength { code, length });
    }
    let mut mh = Multihash::wrap(code, &digest);
    mh.truncate(wanted);
    Ok(mh)
  }
}

/// Hashes `data` with [`StandardHasher`].
///
/// # Errors
///
/// See [`Hasher::sum`].
pub fn sum(data: &[u8], code: u64, length: i64) -> Result<Multihash> {
  StandardHasher.sum(data, code, length)
}

#[allow(unreachable_patterns)]
fn full_digest(data: &[u8], code: u64) -> Result<Vec<u8>> {
  #[cfg(any(feature = "sha1", feature = "sha2", feature = "sha3"))]
  use digest::Digest;

  let out = match code {
    #[cfg(feature = "sha1")]
    multihash::SHA1 => sha_1::Sha1::digest(data).to_vec(),
    #[cfg(feature = "sha2")]
    multihash::SHA2_256 => sha_2::Sha256::digest(data).to_vec(),
    #[cfg(feature = "sha2")]
    multihash::SHA2_512 => sha_2::Sha512::digest(data).to_vec(),
    #[cfg(feature = "sha2")]
    multihash::DBL_SHA2_256 => {
      sha_2::Sha256::digest(&sha_2::Sha256::digest(data)).to_vec()
    }
    #[cfg(feature = "sha3")]
    multihash::SHA3_224 => sha_3::Sha3_224::digest(data).to_vec(),
    #[cfg(feature = "sha3")]
    multihash::SHA3_256 => sha_3::Sha3_256::digest(data).to_vec(),
    #[cfg(feature = "sha3")]
    multihash::SHA3_384 => sha_3::Sha3_384::digest(data).to_vec(),
    #[cfg(feature = "sha3")]
    multihash::SHA3_512 => sha_3::Sha3_512::digest(data).to_vec(),
    #[cfg(feature = "sha3")]
    multihash::KECCAK_224 => sha_3::Keccak224::digest(data).to_vec(),
    #[cfg(feature = "sha3")]
    multihash::KECCAK_256 => sha_3::Keccak256::digest(data).to_vec(),
    #[cfg(feature = "sha3")]
    multihash::KECCAK_384 => sha_3::Keccak384::digest(data).to_vec(),
    #[cfg(feature = "sha3")]
    multihash::KECCAK_512 => sha_3::Keccak512::digest(data).to_vec(),
    #[cfg(feature = "sha3")]
    multihash::SHAKE_128 => shake::<sha_3::Shake128>(data, 32),
    #[cfg(feature = "sha3")]
    multihash::SHAKE_256 => shake::<sha_3::Shake256>(data, 64),
    #[cfg(feature = "blake3")]
    multihash::BLAKE3 => {
      let mut out = vec![0u8; 32];
      let mut hasher = blake3::Hasher::new();
      hasher.update(data);
      hasher.finalize_xof().fill(&mut out);
      out
    }
    #[cfg(feature = "blake2b")]
    multihash::BLAKE2B_MIN..=multihash::BLAKE2B_MAX => {
      let len = (code - multihash::BLAKE2B_MIN + 1) as usize;
      blake2b_simd::Params::new().hash_length(len).hash(data).as_bytes().to_vec()
    }
    #[cfg(feature = "blake2s")]
    multihash::BLAKE2S_MIN..=multihash::BLAKE2S_MAX => {
      let len = (code - multihash::BLAKE2S_MIN + 1) as usize;
      blake2s_simd::Params::new().hash_length(len).hash(data).as_bytes().to_vec()
    }
    _ => return Err(Error::UnsupportedHash(code)),
  };
  Ok(out)
}

#[cfg(feature = "sha3")]
fn shake<D>(data: &[u8], len: usize) -> Vec<u8>
where D: Default + digest::Update + digest::ExtendableOutput {
  use digest::XofReader;
  let mut hasher = D::default();
  hasher.update(data);
  let mut out = vec![0u8; len];
  hasher.finalize_xof().read(&mut out);
  out
}

#[cfg(test)]
pub mod tests {
  use super::*;

  #[test]
  fn identity_keeps_content() {
    let mh = sum(b"foobar", multihash::IDENTITY, DEFAULT_LENGTH).unwrap();
    assert_eq!(mh.digest(), b"foobar");
    assert!(sum(b"foobar", multihash::IDENTITY, 3).is_err());
  }

  #[test]
  fn sha2_256_known_answer() {
    let mh = sum(b"foo", multihash::SHA2_256, DEFAULT_LENGTH).unwrap();
    assert_eq!(
      hex::encode(mh.digest()),
      "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
    );
  }

  #[test]
  fn truncates_and_rejects_overlong() {
    let mh = sum(b"TEST", multihash::SHA3_512, 4).unwrap();
    assert_eq!(mh.size(), 4);
    let full = sum(b"TEST", multihash::SHA3_512, DEFAULT_LENGTH).unwrap();
    assert_eq!(&full.digest()[..4], mh.digest());
    assert_eq!(
      sum(b"TEST", multihash::SHA2_256, 33),
      Err(Error::InvalidHashLength { code: multihash::SHA2_256, length: 33 })
    );
  }

  #[test]
  fn default_lengths_match_table() {
    for code in [
      multihash::SHA2_256,
      multihash::SHA2_512,
      multihash::SHA3_224,
      multihash::KECCAK_384,
      multihash::SHAKE_128,
      multihash::SHAKE_256,
      multihash::BLAKE3,
      multihash::DBL_SHA2_256,
      multihash::BLAKE2B_MIN + 31,
      multihash::BLAKE2S_MAX,
    ]
    .iter()
    {
      let mh = sum(b"content", *code, DEFAULT_LENGTH).unwrap();
      assert_eq!(Some(mh.size()), multihash::default_length(*code));
    }
  }

  #[test]
  fn unknown_algorithm() {
    assert_eq!(
      sum(b"x", multihash::MURMUR3_X64_64, DEFAULT_LENGTH),
      Err(Error::UnsupportedHash(multihash::MURMUR3_X64_64))
    );
  }
}
