//! Verification of Ethereum Merkle-Patricia Trie inclusion proofs.
//!
//! Given a trusted root hash, an unhashed key, and a claimed value, this
//! crate walks a proof buffer of concatenated, right-padded trie node
//! windows and asserts that the value is authenticated at the key under
//! that root. It makes no network calls and holds no state beyond the
//! verification call itself; assembling a [`proof::TrieProof`] from a live
//! `eth_getProof` response is the caller's responsibility.

pub mod error;
pub mod node;
pub mod path;
pub mod proof;

pub use error::{NodeError, PathError, ProofError};
pub use node::{resolve_branch, resolve_internal, resolve_leaf_or_extension, NodeKind, Resolution};
pub use path::NibblePath;
pub use proof::{verify_state_root, verify_storage_root, TrieProof};
