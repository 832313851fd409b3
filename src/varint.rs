//! Minimal unsigned LEB128 varints, as used by every multiformat.

use sp_std::vec::Vec;
use unsigned_varint::{
  decode,
  encode,
};

/// The largest number of bytes a `u64` varint may occupy.
pub const MAX_LEN: usize = 10;

/// Reasons a varint is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VarintError {
  /// The encoding carries a trailing zero group that could have been dropped.
  #[error("varints must be minimally encoded")]
  NotMinimal,
  /// The value does not fit into 64 bits.
  #[error("varint larger than uint64")]
  Overflow,
  /// The input ended while the continuation bit was still set.
  #[error("varints malformed, could not reach the end")]
  Underflow,
}

/// Returns true if `b` terminates a varint.
#[inline]
pub fn is_last(b: u8) -> bool { decode::is_last(b) }

/// Number of bytes `value` occupies once encoded.
pub fn uvarint_size(value: u64) -> usize {
  let bits = 64 - value.leading_zeros() as usize;
  if bits == 0 { 1 } else { bits.div_ceil(7) }
}

/// Reads one varint from the front of `buf`, returning the value and the
/// number of bytes it occupied.
///
/// # Errors
///
/// Returns `NotMinimal`, `Overflow` or `Underflow`. No partial value or length
/// is reported on failure.
pub fn read_uvarint(buf: &[u8]) -> Result<(u64, usize), VarintError> {
  match decode::u64(buf) {
    Ok((value, rest)) => {
      let len = buf.len() - rest.len();
      // unsigned-varint accepts a tenth byte with bits past the 64th set
      if len == MAX_LEN && buf[MAX_LEN - 1] > 1 {
        return Err(VarintError::Overflow);
      }
      Ok((value, len))
    }
    Err(decode::Error::NotMinimal) => Err(VarintError::NotMinimal),
    Err(decode::Error::Overflow) => Err(VarintError::Overflow),
    Err(_) => Err(VarintError::Underflow),
  }
}

/// Appends the encoding of `value` to `out`, returning the bytes written.
pub fn write_uvarint(value: u64, out: &mut Vec<u8>) -> usize {
  let mut buf = encode::u64_buffer();
  let bytes = encode::u64(value, &mut buf);
  out.extend_from_slice(bytes);
  bytes.len()
}

/// Encodes `value` into a fresh buffer.
pub fn to_uvarint(value: u64) -> Vec<u8> {
  let mut out = Vec::with_capacity(uvarint_size(value));
  write_uvarint(value, &mut out);
  out
}
