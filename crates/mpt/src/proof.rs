//! The proof driver: walks a concatenation of right-padded trie node
//! windows, re-hashing and re-resolving one node per depth, until the
//! terminal leaf is reached and its value checked against the claim.

use archors_rlp::bytes::byte_value;
use archors_rlp::header::decode_header;
use archors_rlp::list::{decode_list, decode_small_list};
use archors_rlp::string::decode_string;
use archors_types::constants::{
    MAX_ACCOUNT_STATE_LENGTH, MAX_NUM_FIELDS, MAX_STORAGE_VALUE_LENGTH, MAX_TRIE_NODE_LENGTH,
};
use ethers::utils::keccak256;

use crate::error::{NodeError, ProofError};
use crate::node::{resolve_internal, resolve_leaf_or_extension, NodeKind, Resolution};
use crate::path::NibblePath;

/// An Ethereum Merkle-Patricia Trie inclusion proof, parameterised by the
/// unhashed key's byte length, the padded proof buffer's byte length, and
/// the padded value buffer's byte length.
///
/// `proof` is the concatenation of exactly `depth` RLP-encoded trie nodes,
/// each right-padded with zero bytes to [`MAX_TRIE_NODE_LENGTH`]. `value`
/// is left-padded with zero bytes so its significant bytes are right-
/// aligned.
#[derive(Clone, Debug)]
pub struct TrieProof<const KEY_LEN: usize, const PROOF_LEN: usize, const MAX_VALUE_LEN: usize> {
    pub key: [u8; KEY_LEN],
    pub proof: [u8; PROOF_LEN],
    pub depth: usize,
    pub value: [u8; MAX_VALUE_LEN],
}

/// Whether the terminal leaf's value field is a bare RLP string (storage
/// proofs) or a nested RLP list, the account tuple (state proofs).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LeafKind {
    StorageString,
    StateAccountList,
}

impl<const KEY_LEN: usize, const PROOF_LEN: usize, const MAX_VALUE_LEN: usize>
    TrieProof<KEY_LEN, PROOF_LEN, MAX_VALUE_LEN>
{
    fn node_window(&self, index: usize) -> Result<&[u8], ProofError> {
        let start = index * MAX_TRIE_NODE_LENGTH;
        let end = start + MAX_TRIE_NODE_LENGTH;
        self.proof
            .get(start..end)
            .ok_or(ProofError::NodeTooLong(index))
    }

    fn verify(&self, root: [u8; 32], leaf_kind: LeafKind) -> Result<(), ProofError> {
        if PROOF_LEN % MAX_TRIE_NODE_LENGTH != 0 {
            return Err(ProofError::ProofEmpty);
        }
        if self.depth == 0 {
            return Err(ProofError::ProofEmpty);
        }

        let hashed_key = keccak256(self.key);
        let mut cursor = NibblePath::init(&hashed_key);
        let mut expected_hash = root;

        if self.depth > 1 {
            for depth in 0..self.depth - 1 {
                let node = self.node_window(depth)?;
                let framed_len = framed_length(node);
                if keccak256(&node[..framed_len]) != expected_hash {
                    return Err(ProofError::HashMismatch { depth });
                }
                // Every internal node is either a 17-slot branch or a
                // 2-slot extension; both shapes satisfy the small-list
                // fast path, so try each and dispatch on whichever field
                // count was actually present.
                let table17 = decode_small_list::<MAX_NUM_FIELDS>(node);
                let table2 = decode_small_list::<2>(node);
                let num_fields = match (&table17, &table2) {
                    (Ok(t), _) => t.num_fields,
                    (_, Ok(t)) => t.num_fields,
                    (Err(e), Err(_)) => {
                        return Err(ProofError::Node(depth, NodeError::Rlp(e.clone())))
                    }
                };
                let resolution = resolve_internal(
                    num_fields,
                    table17.as_ref().ok(),
                    table2.as_ref().ok(),
                    node,
                    &mut cursor,
                )
                .map_err(|e| ProofError::Node(depth, e))?;
                match resolution {
                    Resolution::Internal { next_hash } => expected_hash = next_hash,
                    Resolution::Leaf { .. } => {
                        return Err(ProofError::PathExhaustedAtNonTerminal)
                    }
                }
            }
        }

        let terminal_index = self.depth - 1;
        let node = self.node_window(terminal_index)?;
        let framed_len = framed_length(node);
        if keccak256(&node[..framed_len]) != expected_hash {
            return Err(ProofError::HashMismatch {
                depth: terminal_index,
            });
        }

        let table = match leaf_kind {
            LeafKind::StorageString => decode_small_list::<2>(node),
            LeafKind::StateAccountList => decode_list::<2>(node),
        }
        .map_err(|e| ProofError::Node(terminal_index, NodeError::Rlp(e)))?;

        let (kind, resolution) = resolve_leaf_or_extension(&table, node, &mut cursor)
            .map_err(|e| ProofError::Node(terminal_index, e))?;
        if kind != NodeKind::Leaf {
            return Err(ProofError::TerminalNotLeaf(terminal_index));
        }
        let (value_offset, value_length) = match resolution {
            Resolution::Leaf {
                value_offset,
                value_length,
            } => (value_offset, value_length),
            Resolution::Internal { .. } => unreachable!("leaf kind already asserted above"),
        };

        let (normalised_value, normalised_len) = byte_value(self.value);

        match leaf_kind {
            LeafKind::StorageString => {
                let leaf_field = node
                    .get(value_offset..value_offset + value_length)
                    .ok_or(ProofError::ValueTooLong(value_length))?;
                let (inner_offset, inner_length) = decode_string(leaf_field)
                    .map_err(|e| ProofError::Node(terminal_index, NodeError::Rlp(e)))?;
                if inner_length != normalised_len {
                    return Err(ProofError::ValueMismatch);
                }
                let significant = &normalised_value[..normalised_len];
                let embedded = leaf_field
                    .get(inner_offset..inner_offset + inner_length)
                    .ok_or(ProofError::ValueTooLong(inner_length))?;
                if embedded != significant {
                    return Err(ProofError::ValueMismatch);
                }
            }
            LeafKind::StateAccountList => {
                let leaf_field = node
                    .get(value_offset..value_offset + value_length)
                    .ok_or(ProofError::ValueTooLong(value_length))?;
                if leaf_field.first().copied().unwrap_or(0) < 0xc0 {
                    return Err(ProofError::ValueMismatch);
                }
                if leaf_field.len() != normalised_len {
                    return Err(ProofError::ValueMismatch);
                }
                let significant = &normalised_value[..normalised_len];
                if leaf_field != significant {
                    return Err(ProofError::ValueMismatch);
                }
            }
        }

        Ok(())
    }
}

/// Computes the RLP-framed length (header + payload) of the node encoded
/// at the start of `node`, saturating to `node.len()`.
fn framed_length(node: &[u8]) -> usize {
    match decode_header(node) {
        Ok(header) => (header.offset + header.length).min(node.len()),
        Err(_) => node.len(),
    }
}

/// Verifies a storage proof: a 32-byte unhashed slot key, whose leaf value
/// is itself a bare RLP string.
pub fn verify_storage_root<const PROOF_LEN: usize>(
    proof: &TrieProof<32, PROOF_LEN, MAX_STORAGE_VALUE_LENGTH>,
    root: [u8; 32],
) -> Result<(), ProofError> {
    proof.verify(root, LeafKind::StorageString)
}

/// Verifies a state (account) proof: a 20-byte unhashed address key, whose
/// leaf value is the nested RLP list of the account tuple.
pub fn verify_state_root<const PROOF_LEN: usize>(
    proof: &TrieProof<20, PROOF_LEN, MAX_ACCOUNT_STATE_LENGTH>,
    root: [u8; 32],
) -> Result<(), ProofError> {
    proof.verify(root, LeafKind::StateAccountList)
}
