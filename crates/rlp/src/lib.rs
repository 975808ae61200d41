//! Fixed-capacity RLP (Recursive Length Prefix) decoding.
//!
//! This crate decodes RLP-encoded byte buffers against caller-supplied,
//! compile-time-sized outputs: there is no `Vec` allocated per field, no
//! recursion into nested structures, and every list decode runs its loop to
//! a fixed field-count bound `F`. It is the decoding layer beneath
//! `archors_mpt`'s trie proof verifier, but has no trie-specific knowledge
//! of its own.

pub mod bytes;
pub mod error;
pub mod header;
pub mod list;
pub mod string;

pub use bytes::{assert_subarray, byte_to_nibbles, byte_value, left_byte_shift, memcpy};
pub use error::RlpError;
pub use header::{decode_header, DataType, RlpHeader, MAX_LEN_IN_BYTES};
pub use list::{decode_list, decode_small_list, RlpList};
pub use string::decode_string;
