use alloc::boxed::Box;
use quickcheck::{
  Arbitrary,
  Gen,
};
use rand::Rng;
use sp_std::vec::Vec;

use crate::{
  cid::Cid,
  codec::CODECS,
  hasher::DEFAULT_LENGTH,
  multihash::{
    self,
    Multihash,
  },
  prefix::Prefix,
};

const CODES: &[u64] = &[
  multihash::IDENTITY,
  multihash::SHA1,
  multihash::SHA2_256,
  multihash::SHA2_512,
  multihash::SHA3_224,
  multihash::SHA3_256,
  multihash::SHA3_384,
  multihash::SHA3_512,
  multihash::SHAKE_128,
  multihash::SHAKE_256,
  multihash::KECCAK_256,
  multihash::BLAKE3,
  multihash::DBL_SHA2_256,
  multihash::BLAKE2B_MIN + 31,
  multihash::BLAKE2B_MAX,
  multihash::BLAKE2S_MAX,
];

fn frequency<T, F: Fn(&mut Gen) -> T>(g: &mut Gen, gens: Vec<(i64, F)>) -> T {
  let sum: i64 = gens.iter().map(|x| x.0).sum();
  let mut rng = rand::thread_rng();
  let mut weight: i64 = rng.gen_range(1..=sum);
  let last = gens.len() - 1;
  for (i, gen) in gens.into_iter().enumerate() {
    if weight - gen.0 <= 0 || i == last {
      return gen.1(g);
    }
    weight -= gen.0;
  }
  unreachable!()
}

fn bytes(g: &mut Gen, max: usize) -> Vec<u8> {
  let len = rand::thread_rng().gen_range(0..=max);
  (0..len).map(|_| u8::arbitrary(g)).collect()
}

fn arbitrary_code() -> Box<dyn Fn(&mut Gen) -> u64> {
  Box::new(move |g: &mut Gen| *g.choose(CODES).unwrap_or(&multihash::SHA2_256))
}

fn arbitrary_u64() -> Box<dyn Fn(&mut Gen) -> u64> {
  Box::new(move |g: &mut Gen| u64::arbitrary(g))
}

impl Arbitrary for Multihash {
  fn arbitrary(g: &mut Gen) -> Self {
    let code = frequency(g, vec![(90, arbitrary_code()), (10, arbitrary_u64())]);
    let digest = match multihash::default_length(code) {
      Some(len) => bytes(g, len),
      None => bytes(g, 64),
    };
    Multihash::wrap(code, &digest)
  }
}

fn arbitrary_v0() -> Box<dyn Fn(&mut Gen) -> Cid> {
  Box::new(move |g: &mut Gen| {
    let digest: Vec<u8> = (0..32).map(|_| u8::arbitrary(g)).collect();
    Cid::new_v0(Multihash::wrap(multihash::SHA2_256, &digest))
  })
}

fn arbitrary_v1() -> Box<dyn Fn(&mut Gen) -> Cid> {
  Box::new(move |g: &mut Gen| {
    let codec = match g.choose(CODECS) {
      Some((_, codec)) if bool::arbitrary(g) => *codec,
      _ => u64::arbitrary(g),
    };
    Cid::new_v1(codec, Multihash::arbitrary(g))
  })
}

fn arbitrary_inline() -> Box<dyn Fn(&mut Gen) -> Cid> {
  Box::new(move |g: &mut Gen| {
    let data = bytes(g, 48);
    Cid::new_v1(crate::codec::RAW, Multihash::wrap(multihash::IDENTITY, &data))
  })
}

impl Arbitrary for Cid {
  fn arbitrary(g: &mut Gen) -> Self {
    frequency(g, vec![
      (20, arbitrary_v0()),
      (60, arbitrary_v1()),
      (20, arbitrary_inline()),
    ])
  }
}

impl Arbitrary for Prefix {
  fn arbitrary(g: &mut Gen) -> Self {
    let mh_length = if bool::arbitrary(g) { DEFAULT_LENGTH } else { i64::arbitrary(g) };
    Prefix {
      version: u64::arbitrary(g),
      codec: u64::arbitrary(g),
      mh_type: frequency(g, vec![(90, arbitrary_code()), (10, arbitrary_u64())]),
      mh_length,
    }
  }
}
