//! The CID value and its binary and text codecs.

use alloc::{
  boxed::Box,
  string::{
    String,
    ToString,
  },
};
use core::borrow::Borrow;
use multibase::Base;
use sp_std::{
  cmp::Ordering,
  convert::TryFrom,
  fmt,
  hash,
  str::FromStr,
  vec::Vec,
};

use crate::{
  codec::DAG_PROTOBUF,
  error::{
    Error,
    Malformed,
    Result,
  },
  multihash::{
    self,
    Multihash,
  },
  prefix::Prefix,
  varint,
  version::{
    Version,
    V0_LEN,
  },
};

/// The base used by `Display` for CIDv1. CIDv0 is always base58btc.
pub const DEFAULT_BASE: Base = Base::Base32Lower;

/// A CID backed by any byte container.
///
/// The bytes are always a complete, validated CID, or empty for the undefined
/// CID returned by `Default`. Equality, ordering and hashing compare the raw
/// bytes, so two CIDs are equal exactly when version, codec and multihash are.
#[derive(Clone, Copy, Default)]
pub struct CidGeneric<S> {
  storage: S,
}

/// An immutable, owned CID. This is the type to store and pass around.
pub type Cid = CidGeneric<Box<[u8]>>;

/// A CID aliasing a caller's buffer without copying it.
pub type CidRef<'a> = CidGeneric<&'a [u8]>;

// Reads a varint from a CID already known to be valid.
fn uvarint(buf: &[u8]) -> (u64, usize) {
  varint::read_uvarint(buf).unwrap_or((0, 0))
}

/// Validates the CID at the front of `data` and returns its length.
fn read_len(data: &[u8]) -> Result<usize> {
  if data.len() >= 2 && data[0] == multihash::SHA2_256 as u8 && data[1] == 32 {
    if data.len() < V0_LEN {
      return Err(Error::TooShort);
    }
    return Ok(V0_LEN);
  }

  let (version, n) = varint::read_uvarint(data)?;
  if version != 1 {
    return Err(Error::Malformed(Malformed::Version(version)));
  }
  let (_, cn) = varint::read_uvarint(&data[n..])?;
  let mh_len = multihash::read_len(&data[n + cn..])?;
  Ok(n + cn + mh_len)
}

fn cast_len(data: &[u8]) -> Result<()> {
  if read_len(data)? != data.len() {
    return Err(Error::Malformed(Malformed::TrailingBytes));
  }
  Ok(())
}

impl<S: AsRef<[u8]>> CidGeneric<S> {
  /// The binary form. It is also the key under which CIDs are stored.
  pub fn as_bytes(&self) -> &[u8] { self.storage.as_ref() }

  /// Copies out the binary form.
  pub fn to_bytes(&self) -> Vec<u8> { self.as_bytes().to_vec() }

  /// Length of the binary form.
  pub fn encoded_len(&self) -> usize { self.as_bytes().len() }

  /// False only for the undefined CID.
  pub fn is_defined(&self) -> bool { !self.as_bytes().is_empty() }

  /// The version, decided by the shape of the bytes.
  pub fn version(&self) -> Version {
    if Version::is_v0_binary(self.as_bytes()) {
      Version::V0
    }
    else {
      Version::V1
    }
  }

  /// The multicodec content type.
  pub fn codec(&self) -> u64 {
    match self.version() {
      Version::V0 => DAG_PROTOBUF,
      Version::V1 => {
        let bytes = self.as_bytes();
        let (_, n) = uvarint(bytes);
        uvarint(&bytes[n..]).0
      }
    }
  }

  /// The encoded multihash, borrowed from the CID.
  pub fn hash_bytes(&self) -> &[u8] {
    let bytes = self.as_bytes();
    match self.version() {
      Version::V0 => bytes,
      Version::V1 => {
        let (_, n1) = uvarint(bytes);
        let (_, n2) = uvarint(&bytes[n1..]);
        &bytes[n1 + n2..]
      }
    }
  }

  /// The multihash.
  pub fn hash(&self) -> Multihash {
    Multihash::from_bytes(self.hash_bytes()).unwrap_or_default()
  }

  /// The metadata of this CID, without its digest.
  pub fn prefix(&self) -> Prefix {
    if self.version() == Version::V0 {
      return Prefix {
        version: 0,
        codec: DAG_PROTOBUF,
        mh_type: multihash::SHA2_256,
        mh_length: 32,
      };
    }

    let bytes = self.as_bytes();
    let mut offset = 0;
    let (version, n) = uvarint(&bytes[offset..]);
    offset += n;
    let (codec, n) = uvarint(&bytes[offset..]);
    offset += n;
    let (mh_type, n) = uvarint(&bytes[offset..]);
    offset += n;
    let (mh_length, _) = uvarint(&bytes[offset..]);

    Prefix { version, codec, mh_type, mh_length: mh_length as i64 }
  }

  /// Borrows this CID without copying.
  pub fn as_cid_ref(&self) -> CidRef<'_> { CidGeneric { storage: self.as_bytes() } }

  /// Copies this CID into owned storage.
  pub fn to_cid(&self) -> Cid { CidGeneric { storage: self.as_bytes().into() } }

  /// Renders the CID in `base`.
  ///
  /// # Errors
  ///
  /// Returns `InvalidEncoding` when a CIDv0 is asked for anything but
  /// base58btc, since CIDv0 strings carry no multibase prefix.
  pub fn to_string_of_base(&self, base: Base) -> Result<String> {
    match self.version() {
      Version::V0 if base != Base::Base58Btc => Err(Error::InvalidEncoding),
      Version::V0 => Ok(Base::Base58Btc.encode(self.as_bytes())),
      Version::V1 => Ok(multibase::encode(base, self.as_bytes())),
    }
  }

  /// Renders the CID in `base`, except that CIDv0 is always base58btc.
  pub fn encode(&self, base: Base) -> String {
    match self.version() {
      Version::V0 => Base::Base58Btc.encode(self.as_bytes()),
      Version::V1 => multibase::encode(base, self.as_bytes()),
    }
  }

  /// Writes the binary form to `w` without allocating.
  ///
  /// # Errors
  ///
  /// Propagates the writer's error.
  #[cfg(feature = "std")]
  pub fn write_bytes<W: std::io::Write>(&self, w: &mut W) -> std::io::Result<usize> {
    w.write_all(self.as_bytes())?;
    Ok(self.encoded_len())
  }
}

impl Cid {
  /// Creates a CIDv0 from a multihash.
  ///
  /// # Panics
  ///
  /// The multihash must be a 32 byte sha2-256 digest. Use
  /// [`Cid::try_new_v0`] for anything not already checked.
  pub fn new_v0(hash: Multihash) -> Cid {
    match Self::try_new_v0(hash) {
      Ok(cid) => cid,
      Err(e) => panic!("new_v0 needs a sha2-256 multihash: {}", e),
    }
  }

  /// Creates a CIDv0 from a multihash.
  ///
  /// # Errors
  ///
  /// Returns `InvalidDigest` unless `hash` is a 32 byte sha2-256 digest; any
  /// other multihash would later be mistaken for a CIDv1.
  pub fn try_new_v0(hash: Multihash) -> Result<Cid> {
    if hash.code() != multihash::SHA2_256 || hash.size() != 32 {
      return Err(Error::InvalidDigest);
    }
    Ok(CidGeneric { storage: hash.to_bytes().into_boxed_slice() })
  }

  /// Creates a CIDv1 with the given content type.
  pub fn new_v1(codec: u64, hash: Multihash) -> Cid {
    let size = 1 + varint::uvarint_size(codec) + hash.encoded_len();
    let mut buf = Vec::with_capacity(size);
    buf.push(1);
    varint::write_uvarint(codec, &mut buf);
    hash.write_into(&mut buf);
    debug_assert_eq!(buf.len(), size);
    CidGeneric { storage: buf.into_boxed_slice() }
  }

  /// Creates a CID of either version.
  ///
  /// # Errors
  ///
  /// A CIDv0 must use the dag-protobuf codec (`InvalidPrefix` otherwise) and
  /// a sha2-256 multihash (`InvalidDigest` otherwise).
  pub fn new(version: Version, codec: u64, hash: Multihash) -> Result<Cid> {
    match version {
      Version::V0 if codec != DAG_PROTOBUF => Err(Error::InvalidPrefix),
      Version::V0 => Self::try_new_v0(hash),
      Version::V1 => Ok(Self::new_v1(codec, hash)),
    }
  }

  /// Reads the CID at the front of `data`, returning the number of bytes it
  /// occupies so that concatenated CIDs can be walked.
  ///
  /// # Errors
  ///
  /// `TooShort`, `Malformed`, `Truncated`, `DigestTooLarge`. Unlike
  /// [`read_cid`](crate::reader::read_cid), nothing is reported about how
  /// far parsing got.
  pub fn read_bytes(data: &[u8]) -> Result<(usize, Cid)> {
    let (len, cid) = CidRef::read_bytes(data)?;
    Ok((len, cid.to_cid()))
  }

  /// Parses a CID string: a bare base58btc CIDv0, or a multibase encoded
  /// CIDv1.
  ///
  /// # Errors
  ///
  /// `TooShort` for strings under two characters, `Multibase` when the text
  /// does not decode, and any error of [`Cid::try_from`] on the bytes.
  pub fn decode(s: &str) -> Result<Cid> {
    if s.len() < 2 {
      return Err(Error::TooShort);
    }

    if Version::is_v0_str(s) {
      let data = Base::Base58Btc.decode(s)?;
      let hash = Multihash::from_bytes(&data)?;
      return Self::try_new_v0(hash);
    }

    let (_, data) = multibase::decode(s)?;
    Self::try_from(data.as_slice())
  }

  /// Like [`Cid::decode`], but also accepts paths and URLs of the form
  /// `.../ipfs/<cid>`.
  ///
  /// # Errors
  ///
  /// See [`Cid::decode`].
  pub fn parse(s: &str) -> Result<Cid> {
    match s.split("/ipfs/").nth(1) {
      Some(cid) => Self::decode(cid),
      None => Self::decode(s),
    }
  }
}

impl<'a> CidRef<'a> {
  /// Reads the CID at the front of `data` without copying it.
  ///
  /// # Errors
  ///
  /// See [`Cid::read_bytes`].
  pub fn read_bytes(data: &'a [u8]) -> Result<(usize, CidRef<'a>)> {
    match read_len(data) {
      Ok(len) => Ok((len, CidGeneric { storage: &data[..len] })),
      Err(e) => {
        tracing::debug!(len = data.len(), error = %e, "rejected cid bytes");
        Err(e)
      }
    }
  }

  /// Interprets all of `data` as one CID without copying it.
  ///
  /// # Errors
  ///
  /// See [`Cid::try_from`].
  pub fn cast(data: &'a [u8]) -> Result<CidRef<'a>> {
    cast_len(data)?;
    Ok(CidGeneric { storage: data })
  }
}

/// Builds a CID from a buffer produced by the stream reader, which has
/// already validated it.
pub(crate) fn from_validated(bytes: Vec<u8>) -> Cid {
  CidGeneric { storage: bytes.into_boxed_slice() }
}

/// Returns the base a CID string is encoded in.
///
/// # Errors
///
/// `TooShort` for strings under two characters, `Multibase` for an unknown
/// base code.
pub fn extract_encoding(s: &str) -> Result<Base> {
  if s.len() < 2 {
    return Err(Error::TooShort);
  }
  if Version::is_v0_str(s) {
    return Ok(Base::Base58Btc);
  }
  match s.chars().next() {
    Some(code) => Ok(Base::from_code(code)?),
    None => Err(Error::TooShort),
  }
}

impl<A: AsRef<[u8]>, B: AsRef<[u8]>> PartialEq<CidGeneric<B>> for CidGeneric<A> {
  fn eq(&self, other: &CidGeneric<B>) -> bool { self.as_bytes() == other.as_bytes() }
}

impl<S: AsRef<[u8]>> Eq for CidGeneric<S> {}

impl<A: AsRef<[u8]>, B: AsRef<[u8]>> PartialOrd<CidGeneric<B>> for CidGeneric<A> {
  fn partial_cmp(&self, other: &CidGeneric<B>) -> Option<Ordering> {
    self.as_bytes().partial_cmp(other.as_bytes())
  }
}

impl<S: AsRef<[u8]>> Ord for CidGeneric<S> {
  fn cmp(&self, other: &Self) -> Ordering { self.as_bytes().cmp(other.as_bytes()) }
}

impl<S: AsRef<[u8]>> hash::Hash for CidGeneric<S> {
  fn hash<H: hash::Hasher>(&self, state: &mut H) { self.as_bytes().hash(state) }
}

impl<S: AsRef<[u8]>> AsRef<[u8]> for CidGeneric<S> {
  fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl Borrow<[u8]> for Cid {
  fn borrow(&self) -> &[u8] { self.as_bytes() }
}

impl<S: AsRef<[u8]>> fmt::Display for CidGeneric<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.encode(DEFAULT_BASE))
  }
}

impl<S: AsRef<[u8]>> fmt::Debug for CidGeneric<S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_defined() {
      write!(f, "Cid({})", self)
    }
    else {
      f.write_str("Cid(undefined)")
    }
  }
}

impl TryFrom<&[u8]> for Cid {
  type Error = Error;

  /// Interprets all of `data` as one CID.
  fn try_from(data: &[u8]) -> Result<Self> {
    Ok(CidRef::cast(data)?.to_cid())
  }
}

impl TryFrom<Vec<u8>> for Cid {
  type Error = Error;

  fn try_from(data: Vec<u8>) -> Result<Self> {
    cast_len(&data)?;
    Ok(from_validated(data))
  }
}

impl TryFrom<&str> for Cid {
  type Error = Error;

  fn try_from(s: &str) -> Result<Self> { Self::decode(s) }
}

impl TryFrom<String> for Cid {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { Self::decode(&s) }
}

impl FromStr for Cid {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::decode(s) }
}

impl<'a> From<CidRef<'a>> for Cid {
  fn from(cid: CidRef<'a>) -> Self { cid.to_cid() }
}

impl<'a> From<&'a Cid> for CidRef<'a> {
  fn from(cid: &'a Cid) -> Self { cid.as_cid_ref() }
}

impl From<Cid> for Vec<u8> {
  fn from(cid: Cid) -> Self { cid.storage.into_vec() }
}

impl From<Cid> for String {
  fn from(cid: Cid) -> Self { cid.to_string() }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::{
    codec::{
      DAG_CBOR,
      RAW,
    },
    hasher::{
      sum,
      DEFAULT_LENGTH,
    },
    varint::VarintError,
  };

  const V0_STR: &str = "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n";
  const V1_STR: &str =
    "bafkreie5qrjvaw64n4tjm6hbnm7fnqvcssfed4whsjqxzslbd3jwhsk3mm";

  pub(crate) const BASES: &[Base] = &[
    Base::Base2,
    Base::Base16Lower,
    Base::Base16Upper,
    Base::Base32Lower,
    Base::Base32Upper,
    Base::Base32PadLower,
    Base::Base32PadUpper,
    Base::Base32HexLower,
    Base::Base32HexPadUpper,
    Base::Base32Z,
    Base::Base36Lower,
    Base::Base58Flickr,
    Base::Base58Btc,
    Base::Base64,
    Base::Base64Pad,
    Base::Base64Url,
    Base::Base64UrlPad,
  ];

  fn content_cid() -> Cid {
    let hash = sum(b"this is some test content", multihash::SHA2_256, DEFAULT_LENGTH)
      .unwrap();
    Cid::new_v1(DAG_CBOR, hash)
  }

  #[test]
  fn v0_handling() {
    let cid = Cid::decode(V0_STR).unwrap();
    assert_eq!(cid.version(), Version::V0);
    assert_eq!(cid.encoded_len(), 34);
    assert_eq!(cid.codec(), DAG_PROTOBUF);
    assert_eq!(cid.hash().code(), multihash::SHA2_256);
    assert_eq!(cid.hash_bytes(), cid.as_bytes());
    assert_eq!(cid.to_string(), V0_STR);
    assert_eq!(cid.to_string_of_base(Base::Base58Btc).unwrap(), V0_STR);
    assert_eq!(cid.encode(Base::Base32Lower), V0_STR);
    assert_eq!(
      cid.to_string_of_base(Base::Base32Lower),
      Err(Error::InvalidEncoding)
    );
  }

  #[test]
  fn v0_error_cases() {
    assert!(Cid::decode("QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zIII").is_err());
    let hash = sum(b"foobar", multihash::SHA3_256, DEFAULT_LENGTH).unwrap();
    assert_eq!(Cid::try_new_v0(hash), Err(Error::InvalidDigest));
  }

  #[test]
  #[should_panic]
  fn new_v0_panics_on_other_hashes() {
    let hash = sum(b"foobar", multihash::SHA2_512, DEFAULT_LENGTH).unwrap();
    Cid::new_v0(hash);
  }

  #[test]
  fn hex_decode() {
    let cid = Cid::decode(
      "f015512209d8453505bdc6f269678e16b3e56c2a2948a41f2c792617cc9611ed363c95b63",
    )
    .unwrap();
    assert_eq!(cid.to_string(), V1_STR);
    assert_eq!(cid.codec(), RAW);
    assert_eq!(cid.version(), Version::V1);
  }

  #[test]
  fn empty_and_short_strings() {
    assert_eq!(Cid::decode(""), Err(Error::TooShort));
    assert_eq!(Cid::decode("b"), Err(Error::TooShort));
    assert!(matches!(Cid::decode("!!!!"), Err(Error::Multibase(_))));
  }

  #[test]
  fn binary_marshaling() {
    let cid = content_cid();
    let bytes = cid.to_bytes();
    assert_eq!(bytes.len(), 36);
    assert_eq!(Cid::try_from(bytes.as_slice()).unwrap(), cid);
    assert_eq!(Cid::try_from(bytes.clone()).unwrap(), cid);

    let mut out = Vec::new();
    assert_eq!(cid.write_bytes(&mut out).unwrap(), 36);
    assert_eq!(out, bytes);
  }

  #[test]
  fn text_marshaling() {
    let cid = content_cid();
    let s = cid.to_string();
    assert_eq!(s.parse::<Cid>().unwrap(), cid);
    assert_eq!(String::from(cid.clone()), s);
    assert_eq!(Vec::from(cid.clone()), cid.as_bytes());
  }

  #[test]
  fn bases_marshaling() {
    let hash = sum(b"TEST", multihash::SHA3_512, 4).unwrap();
    let cid = Cid::new_v1(7, hash);
    for base in BASES {
      let s = cid.to_string_of_base(*base).unwrap();
      assert_eq!(s.chars().next(), Some(base.code()));
      assert_eq!(Cid::decode(&s).unwrap(), cid);
      assert_eq!(cid.encode(*base), s);
      assert_eq!(extract_encoding(&s).unwrap(), *base);
    }
    assert_eq!(extract_encoding(V0_STR).unwrap(), Base::Base58Btc);
    assert_eq!(extract_encoding("1"), Err(Error::TooShort));
  }

  #[test]
  fn cast_rejects_trailing_bytes() {
    let mut bytes = content_cid().to_bytes();
    bytes.push(0);
    assert_eq!(
      Cid::try_from(bytes.as_slice()),
      Err(Error::Malformed(Malformed::TrailingBytes))
    );
    let (len, cid) = Cid::read_bytes(&bytes).unwrap();
    assert_eq!(len, bytes.len() - 1);
    assert_eq!(cid, content_cid());
  }

  #[test]
  fn bad_cid_input() {
    assert_eq!(Cid::read_bytes(&[0x12, 32, 0x00]), Err(Error::TooShort));

    let good = Cid::decode(V1_STR).unwrap().to_bytes();
    let mut bytes = good.clone();
    bytes[1] = 0x80;
    bytes[2] = 0x00;
    assert_eq!(
      Cid::read_bytes(&bytes),
      Err(Error::Malformed(Malformed::Varint(VarintError::NotMinimal)))
    );

    let mut bytes = good.clone();
    bytes[2] = 0x80;
    bytes[3] = 0x00;
    assert_eq!(
      Cid::read_bytes(&bytes),
      Err(Error::Malformed(Malformed::Varint(VarintError::NotMinimal)))
    );

    assert_eq!(
      Cid::read_bytes(&good[..good.len() - 1]),
      Err(Error::Truncated)
    );
    assert_eq!(
      Cid::read_bytes(&[0x02, 0x55, 0x00, 0x00]),
      Err(Error::Malformed(Malformed::Version(2)))
    );
    assert_eq!(
      Cid::read_bytes(&[0x00, 0x55, 0x00, 0x00]),
      Err(Error::Malformed(Malformed::Version(0)))
    );
  }

  #[test]
  fn huge_digest_claim() {
    let mut bytes = vec![0x01, 0x55, 0x12];
    varint::write_uvarint(multihash::MAX_DIGEST_ALLOC + 1, &mut bytes);
    assert_eq!(
      Cid::read_bytes(&bytes),
      Err(Error::DigestTooLarge(multihash::MAX_DIGEST_ALLOC + 1))
    );
  }

  #[test]
  fn parse_paths() {
    for s in [
      V0_STR.to_string(),
      format!("/ipfs/{}", V0_STR),
      format!("https://ipfs.io/ipfs/{}", V0_STR),
      format!("http://localhost:8080/ipfs/{}", V0_STR),
    ]
    .iter()
    {
      let cid = Cid::parse(s).unwrap();
      assert_eq!(cid.version(), Version::V0);
      assert_eq!(cid.to_string(), V0_STR);
    }
  }

  #[test]
  fn borrowed_and_owned_agree() {
    let cid = content_cid();
    let bytes = cid.to_bytes();
    let (len, borrowed) = CidRef::read_bytes(&bytes).unwrap();
    assert_eq!(len, bytes.len());
    assert_eq!(borrowed, cid);
    assert_eq!(cid, borrowed);
    assert_eq!(borrowed.prefix(), cid.prefix());
    assert_eq!(borrowed.to_string(), cid.to_string());
    assert_eq!(Cid::from(borrowed), cid);
    assert_eq!(CidRef::cast(&bytes).unwrap(), cid.as_cid_ref());
  }

  #[test]
  fn undefined_cid() {
    let cid = Cid::default();
    assert!(!cid.is_defined());
    assert!(content_cid().is_defined());
    assert_ne!(cid, content_cid());
    assert_eq!(format!("{:?}", cid), "Cid(undefined)");
  }

  #[test]
  fn large_codec_varint() {
    let hash = sum(b"this is some test content", multihash::SHA2_256, DEFAULT_LENGTH)
      .unwrap();
    let cid = Cid::new_v1(1 << 63, hash);
    assert_eq!(cid.codec(), 1 << 63);
    assert_eq!(Cid::try_from(cid.as_bytes()).unwrap(), cid);
  }

  #[quickcheck]
  fn prop_binary_round_trip(cid: Cid) -> bool {
    Cid::try_from(cid.as_bytes()).ok() == Some(cid.clone())
      && Cid::read_bytes(cid.as_bytes()).ok() == Some((cid.encoded_len(), cid))
  }

  #[quickcheck]
  fn prop_text_round_trip(cid: Cid) -> bool {
    let canonical = Cid::decode(&cid.to_string()).ok() == Some(cid.clone());
    let bases = BASES.iter().all(|base| match cid.to_string_of_base(*base) {
      Ok(s) => Cid::decode(&s).ok() == Some(cid.clone()),
      Err(Error::InvalidEncoding) => cid.version() == Version::V0,
      Err(_) => false,
    });
    canonical && bases
  }

  #[quickcheck]
  fn prop_v1_never_looks_like_v0(codec: u64, mh: Multihash) -> bool {
    let cid = Cid::new_v1(codec, mh);
    cid.version() == Version::V1 && !Version::is_v0_binary(cid.as_bytes())
  }

  #[quickcheck]
  fn prop_v0_shape_always_decodes_as_v0(digest: Vec<u8>) -> bool {
    let mut bytes = vec![0x12, 0x20];
    bytes.extend((0..32).map(|i| digest.get(i).copied().unwrap_or(0)));
    match Cid::try_from(bytes.as_slice()) {
      Ok(cid) => cid.version() == Version::V0,
      Err(_) => false,
    }
  }

  // Random input must be rejected or survive a round trip, never panic.
  #[quickcheck]
  fn prop_fuzz_cast(data: Vec<u8>) -> bool {
    match Cid::try_from(data.as_slice()) {
      Ok(cid) => cid.as_bytes() == data.as_slice() && cid == cid.clone(),
      Err(_) => true,
    }
  }

  #[test]
  fn fuzz_random_buffers() {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let mut buf = [0u8; 128];
    for _ in 0..200 {
      let len = rng.gen_range(0..128);
      rng.fill(&mut buf[..len]);
      let _ = Cid::try_from(&buf[..len]);
      let _ = Cid::read_bytes(&buf[..len]);
    }
  }
}
