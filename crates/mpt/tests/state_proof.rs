//! End-to-end state (account) proof scenario: a single-depth leaf whose
//! value field is the nested RLP-list account tuple rather than a string
//! (spec scenario analogous to 4, but for `verify_state_root`).

use archors_mpt::{verify_state_root, ProofError, TrieProof};
use archors_types::constants::{MAX_ACCOUNT_STATE_LENGTH, MAX_TRIE_NODE_LENGTH};
use ethers::utils::keccak256;

fn bytes_to_nibbles(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().flat_map(|b| [*b >> 4, *b & 0x0f]).collect()
}

fn hex_prefix_encode_full_path(nibbles: &[u8]) -> Vec<u8> {
    // A full 64-nibble path is always even-length, so the leaf flag nibble
    // (2) carries no extra data nibble.
    assert_eq!(nibbles.len() % 2, 0);
    let mut out = vec![0x20u8];
    for pair in nibbles.chunks(2) {
        out.push((pair[0] << 4) | pair[1]);
    }
    out
}

fn rlp_string(bytes: &[u8]) -> Vec<u8> {
    if bytes.is_empty() {
        vec![0x80]
    } else if bytes.len() == 1 && bytes[0] < 0x80 {
        bytes.to_vec()
    } else if bytes.len() < 56 {
        let mut out = vec![0x80 + bytes.len() as u8];
        out.extend_from_slice(bytes);
        out
    } else {
        panic!("test helper only supports short strings (<56 bytes)")
    }
}

fn rlp_list(items: &[Vec<u8>]) -> Vec<u8> {
    let payload: Vec<u8> = items.concat();
    let mut out = if payload.len() < 56 {
        vec![0xc0 + payload.len() as u8]
    } else if payload.len() <= 0xff {
        vec![0xf8, payload.len() as u8]
    } else {
        panic!("test helper only supports payload <= 255 bytes")
    };
    out.extend(payload);
    out
}

fn padded_node(mut node: Vec<u8>) -> [u8; MAX_TRIE_NODE_LENGTH] {
    let mut window = [0u8; MAX_TRIE_NODE_LENGTH];
    node.resize(MAX_TRIE_NODE_LENGTH, 0);
    window.copy_from_slice(&node);
    window
}

/// The RLP-encoded account tuple `(nonce, balance, storageRoot, codeHash)`,
/// embedded directly as a nested list item -- unlike a storage value, it is
/// not wrapped a second time in an RLP string.
fn account_rlp(nonce: u64, balance: &[u8], storage_root: [u8; 32], code_hash: [u8; 32]) -> Vec<u8> {
    let nonce_bytes = nonce.to_be_bytes();
    let significant = {
        let first_nonzero = nonce_bytes.iter().position(|b| *b != 0);
        match first_nonzero {
            Some(i) => &nonce_bytes[i..],
            None => &nonce_bytes[8..], // zero nonce -> empty string
        }
    };
    rlp_list(&[
        rlp_string(significant),
        rlp_string(balance),
        rlp_string(&storage_root),
        rlp_string(&code_hash),
    ])
}

fn value_buffer(account: &[u8]) -> [u8; MAX_ACCOUNT_STATE_LENGTH] {
    let mut buf = [0u8; MAX_ACCOUNT_STATE_LENGTH];
    buf[MAX_ACCOUNT_STATE_LENGTH - account.len()..].copy_from_slice(account);
    buf
}

#[test]
fn single_leaf_state_proof_succeeds() {
    let address = [0x5au8; 20];
    let hashed_key = keccak256(address);
    let nibbles = bytes_to_nibbles(&hashed_key);

    let account = account_rlp(
        5,
        &[0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00], // 1e18 wei
        [0x22u8; 32],
        [0x33u8; 32],
    );

    let path_field = rlp_string(&hex_prefix_encode_full_path(&nibbles));
    let leaf = rlp_list(&[path_field, account.clone()]);
    let root = keccak256(&leaf);

    let mut proof = [0u8; MAX_TRIE_NODE_LENGTH];
    proof.copy_from_slice(&padded_node(leaf));

    let trie_proof = TrieProof::<20, MAX_TRIE_NODE_LENGTH, MAX_ACCOUNT_STATE_LENGTH> {
        key: address,
        proof,
        depth: 1,
        value: value_buffer(&account),
    };
    assert!(verify_state_root(&trie_proof, root).is_ok());
}

#[test]
fn tampered_account_fails_value_check() {
    let address = [0x5au8; 20];
    let hashed_key = keccak256(address);
    let nibbles = bytes_to_nibbles(&hashed_key);

    let account = account_rlp(
        5,
        &[0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00],
        [0x22u8; 32],
        [0x33u8; 32],
    );
    let tampered_account = account_rlp(
        6, // nonce bumped
        &[0x0d, 0xe0, 0xb6, 0xb3, 0xa7, 0x64, 0x00, 0x00],
        [0x22u8; 32],
        [0x33u8; 32],
    );

    let path_field = rlp_string(&hex_prefix_encode_full_path(&nibbles));
    let leaf = rlp_list(&[path_field, account]);
    let root = keccak256(&leaf);

    let mut proof = [0u8; MAX_TRIE_NODE_LENGTH];
    proof.copy_from_slice(&padded_node(leaf));

    let trie_proof = TrieProof::<20, MAX_TRIE_NODE_LENGTH, MAX_ACCOUNT_STATE_LENGTH> {
        key: address,
        proof,
        depth: 1,
        value: value_buffer(&tampered_account),
    };
    assert_eq!(
        verify_state_root(&trie_proof, root),
        Err(ProofError::ValueMismatch)
    );
}
