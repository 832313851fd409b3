//! Multicodec content types and their names.

/// Raw binary, no links.
pub const RAW: u64 = 0x55;
/// MerkleDAG protobuf, the only codec of CIDv0.
pub const DAG_PROTOBUF: u64 = 0x70;
/// MerkleDAG cbor.
pub const DAG_CBOR: u64 = 0x71;
/// A libp2p public key.
pub const LIBP2P_KEY: u64 = 0x72;
/// MerkleDAG json.
pub const DAG_JSON: u64 = 0x0129;

/// A raw git object.
pub const GIT_RAW: u64 = 0x78;
/// A JOSE signed or encrypted object.
pub const DAG_JOSE: u64 = 0x85;
/// Ethereum block header.
pub const ETH_BLOCK: u64 = 0x90;
/// Ethereum list of uncle headers.
pub const ETH_BLOCK_LIST: u64 = 0x91;
/// Ethereum transaction trie node.
pub const ETH_TX_TRIE: u64 = 0x92;
/// Ethereum transaction.
pub const ETH_TX: u64 = 0x93;
/// Ethereum receipt trie node.
pub const ETH_TX_RECEIPT_TRIE: u64 = 0x94;
/// Ethereum transaction receipt.
pub const ETH_TX_RECEIPT: u64 = 0x95;
/// Ethereum state trie node.
pub const ETH_STATE_TRIE: u64 = 0x96;
/// Ethereum account snapshot.
pub const ETH_ACCOUNT_SNAPSHOT: u64 = 0x97;
/// Ethereum storage trie node.
pub const ETH_STORAGE_TRIE: u64 = 0x98;
/// Bitcoin block.
pub const BITCOIN_BLOCK: u64 = 0xb0;
/// Bitcoin transaction.
pub const BITCOIN_TX: u64 = 0xb1;
/// Zcash block.
pub const ZCASH_BLOCK: u64 = 0xc0;
/// Zcash transaction.
pub const ZCASH_TX: u64 = 0xc1;
/// Decred block.
pub const DECRED_BLOCK: u64 = 0xe0;
/// Decred transaction.
pub const DECRED_TX: u64 = 0xe1;
/// Dash block.
pub const DASH_BLOCK: u64 = 0xf0;
/// Dash transaction.
pub const DASH_TX: u64 = 0xf1;
/// Filecoin unsealed sector commitment.
pub const FIL_COMMITMENT_UNSEALED: u64 = 0xf101;
/// Filecoin sealed sector commitment.
pub const FIL_COMMITMENT_SEALED: u64 = 0xf102;

/// Name to codec table. `"v0"` is an alias for dag-protobuf and is never
/// returned by [`codec_name`].
pub static CODECS: &[(&str, u64)] = &[
  ("v0", DAG_PROTOBUF),
  ("raw", RAW),
  ("protobuf", DAG_PROTOBUF),
  ("cbor", DAG_CBOR),
  ("dag-json", DAG_JSON),
  ("libp2p-key", LIBP2P_KEY),
  ("git-raw", GIT_RAW),
  ("dag-jose", DAG_JOSE),
  ("eth-block", ETH_BLOCK),
  ("eth-block-list", ETH_BLOCK_LIST),
  ("eth-tx-trie", ETH_TX_TRIE),
  ("eth-tx", ETH_TX),
  ("eth-tx-receipt-trie", ETH_TX_RECEIPT_TRIE),
  ("eth-tx-receipt", ETH_TX_RECEIPT),
  ("eth-state-trie", ETH_STATE_TRIE),
  ("eth-account-snapshot", ETH_ACCOUNT_SNAPSHOT),
  ("eth-storage-trie", ETH_STORAGE_TRIE),
  ("bitcoin-block", BITCOIN_BLOCK),
  ("bitcoin-tx", BITCOIN_TX),
  ("zcash-block", ZCASH_BLOCK),
  ("zcash-tx", ZCASH_TX),
  ("decred-block", DECRED_BLOCK),
  ("decred-tx", DECRED_TX),
  ("dash-block", DASH_BLOCK),
  ("dash-tx", DASH_TX),
  ("fil-commitment-unsealed", FIL_COMMITMENT_UNSEALED),
  ("fil-commitment-sealed", FIL_COMMITMENT_SEALED),
];

/// Looks up a codec by name.
pub fn codec_from_name(name: &str) -> Option<u64> {
  CODECS.iter().find(|(n, _)| *n == name).map(|(_, code)| *code)
}

/// The canonical name of a codec.
pub fn codec_name(code: u64) -> Option<&'static str> {
  CODECS.iter().skip(1).find(|(_, c)| *c == code).map(|(name, _)| *name)
}
