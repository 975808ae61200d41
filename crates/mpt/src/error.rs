//! Error types for trie path traversal, node resolution, and proof
//! verification.

use archors_rlp::RlpError;
use thiserror::Error;

/// An error encountered while navigating a [`crate::path::NibblePath`].
#[derive(Debug, Error, Eq, PartialEq)]
pub enum PathError {
    #[error("nibble {found} at index {visiting} did not match expected nibble {expected}")]
    NibbleMismatch {
        visiting: usize,
        expected: u8,
        found: u8,
    },
    #[error("unable to decode invalid hex-prefix trie path encoding")]
    InvalidPathPrefix,
    #[error("attempted traversal to next node but path has no remaining nibbles")]
    NextNodeNotInPath,
    #[error("compact path is longer than the remaining, unconsumed key path")]
    PathLongerThanExpected,
    #[error("encoded path has no first byte")]
    PathEmpty,
}

/// An error encountered while resolving a single trie node.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum NodeError {
    #[error("branch node value slot is non-empty, but branch nodes in an inclusion proof must not be terminal")]
    BranchNodeHasValue,
    #[error("branch slot {0} is neither empty nor a 32-byte hash")]
    BranchSlotInvalidLength(usize),
    #[error("branch slot {0} is empty, so the key cannot be in the trie")]
    BranchSlotEmpty(usize),
    #[error("extension node's next-node field is neither empty nor a 32-byte hash")]
    ExtensionNextNodeInvalidLength,
    #[error("node's field count does not match any known node shape (got {0}, expected 17 or 2)")]
    UnexpectedFieldCount(usize),
    #[error("leaf/extension node's first field is empty")]
    EmptyPathField,
    #[error("a leaf node was encountered before the full 64-nibble path was consumed")]
    LeafAtNonTerminal,
    #[error("leaf node does not consume the full 64-nibble path")]
    LeafPathIncomplete,
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Rlp(#[from] RlpError),
}

/// An error encountered while verifying a full proof against a trusted root.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ProofError {
    #[error("node at proof depth {0} exceeds the maximum node length")]
    NodeTooLong(usize),
    #[error("proof has no nodes")]
    ProofEmpty,
    #[error("node at proof depth {depth} does not hash to the digest expected by its parent")]
    HashMismatch { depth: usize },
    #[error("node at proof depth {0}: {1}")]
    Node(usize, NodeError),
    #[error("value length {0} exceeds the maximum supported value length")]
    ValueTooLong(usize),
    #[error("claimed value does not match the value embedded in the proof's terminal node")]
    ValueMismatch,
    #[error("terminal node at depth {0} is not a leaf")]
    TerminalNotLeaf(usize),
    #[error("a non-terminal node was reached after consuming the full 64-nibble path")]
    PathExhaustedAtNonTerminal,
}
