//! # sp-cid
//!
//! Self-describing content identifiers for `no_std` use.
//!
//! A CID names a piece of content by the digest of its bytes, tagged with
//! the digest algorithm and the content type. Two binary shapes exist: the
//! legacy CIDv0, which is a bare 34 byte sha2-256 multihash, and CIDv1,
//! `<version><codec><multihash>`. The shape alone tells them apart.
//!
//! ```
//! use sp_cid::{Builder, Cid, RAW_FORMAT};
//!
//! let cid = RAW_FORMAT.sum(b"hello world").unwrap();
//! let text = cid.to_string();
//! assert_eq!(text.parse::<Cid>().unwrap(), cid);
//! ```

#![deny(
  clippy::missing_errors_doc,
  clippy::missing_panics_doc,
  clippy::missing_safety_doc
)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
#[cfg(test)]
extern crate rand;

pub mod cid;
pub mod codec;
pub mod error;
pub mod format;
pub mod hasher;
pub mod multihash;
pub mod prefix;
pub mod reader;
pub mod set;
pub mod validate;
pub mod varint;
pub mod version;

#[cfg(any(test, feature = "arb"))]
mod arb;

pub use self::{
  cid::{
    extract_encoding,
    Cid,
    CidGeneric,
    CidRef,
  },
  error::{
    Error,
    Malformed,
    Result,
  },
  format::{
    Builder,
    Format,
    DAG_CBOR_FORMAT,
    DAG_PROTOBUF_V0_FORMAT,
    DAG_PROTOBUF_V1_FORMAT,
    RAW_FORMAT,
  },
  hasher::{
    Hasher,
    StandardHasher,
  },
  multihash::Multihash,
  prefix::Prefix,
  reader::{
    read_cid,
    ByteSource,
    ReadError,
  },
  set::Set,
  validate::{
    validate_cid,
    HashPolicy,
  },
  version::Version,
};

pub use multibase;

#[cfg(test)]
pub mod tests {
  use super::*;
  use multibase::Base;
  use sp_std::convert::TryFrom;

  #[test]
  fn content_to_text_and_back() {
    let cid = DAG_CBOR_FORMAT.sum(b"beep boop").unwrap();
    assert_eq!(validate_cid(&cid), Ok(()));

    let text = cid.to_string();
    assert!(text.starts_with('b'));
    let parsed = Cid::try_from(text.as_str()).unwrap();
    assert_eq!(parsed, cid);
    assert_eq!(parsed.prefix(), cid.prefix());

    let (n, read) = read_cid(&mut cid.as_bytes()).unwrap();
    assert_eq!(n, cid.encoded_len());
    assert_eq!(read, cid);
  }

  #[test]
  fn v0_and_v1_of_same_content_differ() {
    let v0 = DAG_PROTOBUF_V0_FORMAT.sum(b"beep boop").unwrap();
    let v1 = DAG_PROTOBUF_V1_FORMAT.sum(b"beep boop").unwrap();
    assert_ne!(v0, v1);
    assert_eq!(v0.hash(), v1.hash());
    assert_eq!(v0.codec(), v1.codec());
    assert_eq!(v0.version(), Version::V0);

    let upgraded = Cid::new_v1(v0.codec(), v0.hash());
    assert_eq!(upgraded, v1);
    assert!(v0.to_string().starts_with("Qm"));
    assert_eq!(
      v1.to_string_of_base(Base::Base58Btc).unwrap().chars().next(),
      Some('z')
    );
  }

  #[test]
  fn dedup_stream_of_cids() {
    let cids: Vec<Cid> =
      ["a", "b", "a", "c", "b"].iter().map(|s| RAW_FORMAT.sum(s.as_bytes()).unwrap()).collect();
    let mut buf = Vec::new();
    for cid in &cids {
      buf.extend_from_slice(cid.as_bytes());
    }

    let mut set: Set = Set::new();
    let mut src: &[u8] = &buf;
    let mut fresh = 0;
    while let Ok((_, cid)) = read_cid(&mut src) {
      if set.visit(cid) {
        fresh += 1;
      }
    }
    assert_eq!(fresh, 3);
    assert_eq!(set.len(), 3);
  }
}
