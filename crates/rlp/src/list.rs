//! Decoding of an RLP-encoded list into a fixed-capacity field table.

use crate::error::RlpError;
use crate::header::{decode_header, DataType};

/// A decoded RLP list with up to `F` fields.
///
/// For a string item, `offset[i]` points at the first payload byte and
/// `length[i]` is the payload length. For a list item, `offset[i]` points
/// at the nested list's own RLP header (not its payload), and `length[i]`
/// spans the header plus the payload -- this asymmetry mirrors the layout
/// callers need to re-hash or re-decode a nested node and is deliberate.
///
/// For `i >= num_fields`, all three arrays hold zero / the default variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RlpList<const F: usize> {
    pub offset: [usize; F],
    pub length: [usize; F],
    pub data_type: [DataType; F],
    pub num_fields: usize,
}

impl<const F: usize> RlpList<F> {
    fn empty() -> Self {
        Self {
            offset: [0; F],
            length: [0; F],
            data_type: [DataType::String; F],
            num_fields: 0,
        }
    }
}

/// Decodes a general RLP list with up to `F` fields, allowing nested lists
/// as items.
pub fn decode_list<const F: usize>(input: &[u8]) -> Result<RlpList<F>, RlpError> {
    decode_list_inner(input, false)
}

/// Decodes an RLP list with up to `F` fields, assuming every item is a
/// string shorter than 56 bytes (i.e. a single-byte item header). This
/// holds for any Ethereum trie node whose slots are each either an empty
/// string or a 32-byte hash -- every branch and extension node -- and is
/// cheaper to evaluate than [`decode_list`].
pub fn decode_small_list<const F: usize>(input: &[u8]) -> Result<RlpList<F>, RlpError> {
    decode_list_inner(input, true)
}

fn decode_list_inner<const F: usize>(input: &[u8], small: bool) -> Result<RlpList<F>, RlpError> {
    let header = decode_header(input)?;
    if header.data_type != DataType::List {
        return Err(RlpError::ExpectedList);
    }
    let payload_start = header.offset;
    let payload_end = payload_start
        .checked_add(header.length)
        .ok_or(RlpError::PayloadExceedsInput)?;
    if payload_end > input.len() {
        return Err(RlpError::PayloadExceedsInput);
    }

    let mut table = RlpList::<F>::empty();
    let mut position = payload_start;
    for i in 0..F {
        if position >= payload_end {
            break;
        }
        if small && input[position] >= 0xb8 {
            return Err(RlpError::SmallListItemTooLong(i));
        }
        let item_header = decode_header(&input[position..])?;
        match item_header.data_type {
            DataType::String => {
                table.offset[i] = position + item_header.offset;
                table.length[i] = item_header.length;
            }
            DataType::List => {
                table.offset[i] = position;
                table.length[i] = item_header.offset + item_header.length;
            }
        }
        table.data_type[i] = item_header.data_type;
        position += item_header.offset + item_header.length;
        table.num_fields = i + 1;
    }
    if position != payload_end {
        if table.num_fields == F {
            return Err(RlpError::ListTooManyFields(F));
        }
        return Err(RlpError::ListPayloadNotFullyConsumed);
    }
    Ok(table)
}
