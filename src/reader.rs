//! Incremental decoding of one CID at a time from a byte source.
//!
//! Unlike [`Cid::read_bytes`], which works on a complete buffer, the reader
//! pulls only the bytes the CID occupies and always reports how many it
//! consumed, even on failure, so that a caller walking a stream of records
//! knows where the next one starts.

use bytecursor::ByteCursor;
use sp_std::{
  cmp,
  convert::TryFrom,
  vec::Vec,
};

use crate::{
  cid::Cid,
  error::{
    Error,
    Result,
  },
  multihash,
  varint,
};

/// Scratch capacity reserved up front; enough for every common digest.
const INITIAL_CAPACITY: usize = 64;

/// Something bytes can be pulled from.
pub trait ByteSource {
  /// Reads up to `buf.len()` bytes, returning how many were read. `Ok(0)`
  /// signals the end of the source.
  ///
  /// # Errors
  ///
  /// Whatever failure the source reports, usually `Error::Io`.
  fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl ByteSource for &[u8] {
  fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
    let n = cmp::min(buf.len(), self.len());
    buf[..n].copy_from_slice(&self[..n]);
    *self = &self[n..];
    Ok(n)
  }
}

// A cursor cannot fail; running out of bytes reads as zero.
impl ByteSource for ByteCursor {
  fn read(&mut self, buf: &mut [u8]) -> Result<usize> { Ok(ByteCursor::read(self, buf)) }
}

/// Adapts any [`std::io::Read`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSource<R>(pub R);

#[cfg(feature = "std")]
impl<R: std::io::Read> ByteSource for IoSource<R> {
  fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
    loop {
      match self.0.read(buf) {
        Ok(n) => return Ok(n),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
        Err(e) => return Err(e.into()),
      }
    }
  }
}

/// A failed read, with the number of bytes taken from the source before
/// the failure was detected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{error} (after reading {consumed} bytes)")]
pub struct ReadError {
  /// Bytes taken from the source, including those of the failed record.
  pub consumed: usize,
  /// Why the read failed.
  pub error: Error,
}

/// Keeps every byte pulled from the source.
struct Recorder<'a, R: ?Sized> {
  src: &'a mut R,
  buf: Vec<u8>,
}

impl<'a, R: ByteSource + ?Sized> Recorder<'a, R> {
  fn new(src: &'a mut R) -> Self {
    Recorder { src, buf: Vec::with_capacity(INITIAL_CAPACITY) }
  }

  fn fail(&self, error: Error) -> ReadError {
    ReadError { consumed: self.buf.len(), error }
  }

  fn read_byte(&mut self) -> core::result::Result<u8, ReadError> {
    let mut byte = [0u8; 1];
    loop {
      match self.src.read(&mut byte) {
        Ok(1) => break,
        Ok(0) if self.buf.is_empty() => return Err(self.fail(Error::EndOfStream)),
        Ok(0) => return Err(self.fail(Error::Truncated)),
        Ok(_) => continue,
        Err(e) => return Err(self.fail(e)),
      }
    }
    self.buf.push(byte[0]);
    Ok(byte[0])
  }

  fn read_uvarint(&mut self) -> core::result::Result<u64, ReadError> {
    let start = self.buf.len();
    for _ in 0..varint::MAX_LEN {
      if varint::is_last(self.read_byte()?) {
        break;
      }
    }
    match varint::read_uvarint(&self.buf[start..]) {
      Ok((value, _)) => Ok(value),
      Err(varint::VarintError::Underflow) => {
        Err(self.fail(varint::VarintError::Overflow.into()))
      }
      Err(e) => Err(self.fail(e.into())),
    }
  }

  fn fill(&mut self, len: usize) -> core::result::Result<(), ReadError> {
    let start = self.buf.len();
    self.buf.resize(start + len, 0);
    let mut filled = start;
    while filled < self.buf.len() {
      match self.src.read(&mut self.buf[filled..]) {
        Ok(0) => {
          self.buf.truncate(filled);
          return Err(self.fail(Error::Truncated));
        }
        Ok(n) => filled += n,
        Err(e) => {
          self.buf.truncate(filled);
          return Err(self.fail(e));
        }
      }
    }
    Ok(())
  }

  fn read_cid(&mut self) -> core::result::Result<(), ReadError> {
    let version = self.read_uvarint()?;
    if version == multihash::SHA2_256 {
      self.fill(33)?;
      if self.buf[1] != 32 {
        return Err(self.fail(Error::InvalidDigest));
      }
      return Ok(());
    }
    if version != 1 {
      return Err(self.fail(Error::UnsupportedVersion(version)));
    }

    let _codec = self.read_uvarint()?;
    let _mh_type = self.read_uvarint()?;
    let size = self.read_uvarint()?;
    if size > multihash::MAX_DIGEST_ALLOC {
      return Err(self.fail(Error::DigestTooLarge(size)));
    }
    self.fill(size as usize)
  }
}

/// Reads exactly one CID from `src`.
///
/// # Errors
///
/// `EndOfStream` if the source is empty, `Truncated` if it ends inside the
/// CID, `Malformed` for bad varints, `UnsupportedVersion` for anything but a
/// CIDv0 signature or version 1, `DigestTooLarge`, and whatever the source
/// itself reports. The error carries the number of bytes consumed.
pub fn read_cid<R: ByteSource + ?Sized>(
  src: &mut R,
) -> core::result::Result<(usize, Cid), ReadError> {
  let mut rec = Recorder::new(src);
  let read = rec.read_cid().and_then(|()| {
    let consumed = rec.buf.len();
    let bytes = core::mem::take(&mut rec.buf);
    Cid::try_from(bytes)
      .map(|cid| (consumed, cid))
      .map_err(|error| ReadError { consumed, error })
  });
  match read {
    Ok((consumed, cid)) => {
      tracing::trace!(consumed, "read cid from stream");
      Ok((consumed, cid))
    }
    Err(e) => {
      tracing::debug!(consumed = e.consumed, error = %e.error, "failed to read cid from stream");
      Err(e)
    }
  }
}

impl Cid {
  /// Reads exactly one CID from `src`. See [`read_cid`].
  ///
  /// # Errors
  ///
  /// See [`read_cid`].
  pub fn read_from<R: ByteSource + ?Sized>(
    src: &mut R,
  ) -> core::result::Result<(usize, Cid), ReadError> {
    read_cid(src)
  }
}

/// Reads every CID in `src` until it is exhausted.
///
/// # Errors
///
/// Stops at the first failure other than a clean end of stream.
pub fn read_all<R: ByteSource + ?Sized>(
  src: &mut R,
) -> core::result::Result<Vec<Cid>, ReadError> {
  let mut cids = Vec::new();
  loop {
    match read_cid(src) {
      Ok((_, cid)) => cids.push(cid),
      Err(ReadError { error: Error::EndOfStream, .. }) => return Ok(cids),
      Err(e) => return Err(e),
    }
  }
}
