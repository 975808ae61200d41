//! Constants for Ethereum Merkle-Patricia Trie proof verification.

/// Upper bound on the RLP-framed byte length of any single trie node,
/// assuming the worst case of a branch node (17 x 32 byte hash plus RLP
/// overhead).
pub const MAX_TRIE_NODE_LENGTH: usize = 532;

/// Maximum supported width, in bytes, of an RLP long-length prefix. Covers
/// every payload up to 65535 bytes, which is more than sufficient for any
/// node bounded by [`MAX_TRIE_NODE_LENGTH`].
pub const MAX_LEN_IN_BYTES: usize = 2;

/// Byte length of a keccak256 hash, and so the byte length of any path used
/// to traverse a trie (account and storage keys are always hashed to this
/// length before being walked as nibbles).
pub const KEY_LENGTH: usize = 32;

/// Number of nibbles in a hashed trie path (`2 * KEY_LENGTH`).
pub const NIBBLE_LENGTH: usize = 64;

/// Number of fields in a branch node (16 child slots plus one value slot).
pub const MAX_NUM_FIELDS: usize = 17;

/// Maximum byte length of a storage slot value (a 32 byte word).
pub const MAX_STORAGE_VALUE_LENGTH: usize = 32;

/// Maximum byte length of an RLP-encoded account tuple
/// `(nonce, balance, storageRoot, codeHash)`, including its own list
/// header: a 9-byte nonce, a 33-byte balance, two 33-byte hashes, and a
/// 2-byte long-list header.
pub const MAX_ACCOUNT_STATE_LENGTH: usize = 110;
