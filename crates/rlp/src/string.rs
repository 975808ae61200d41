//! Decoding of a single RLP-encoded string.

use crate::error::RlpError;
use crate::header::{decode_header, DataType};

/// Decodes a single RLP string, returning `(offset, length)` of its payload
/// within `input`.
pub fn decode_string(input: &[u8]) -> Result<(usize, usize), RlpError> {
    let header = decode_header(input)?;
    if header.data_type != DataType::String {
        return Err(RlpError::ExpectedString);
    }
    let end = header
        .offset
        .checked_add(header.length)
        .ok_or(RlpError::PayloadExceedsInput)?;
    if end > input.len() {
        return Err(RlpError::PayloadExceedsInput);
    }
    Ok((header.offset, header.length))
}
