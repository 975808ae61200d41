use thiserror::Error;

/// An error encountered while decoding an RLP-encoded byte buffer.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RlpError {
    #[error("RLP input is empty")]
    EmptyInput,
    #[error("RLP long-length prefix of {0} bytes exceeds the supported maximum of 2")]
    LengthPrefixTooLong(usize),
    #[error("RLP long-length prefix bytes are truncated")]
    HeaderTruncated,
    #[error("RLP payload exceeds the bounds of the input buffer")]
    PayloadExceedsInput,
    #[error("expected an RLP string, found a list")]
    ExpectedString,
    #[error("expected an RLP list, found a string")]
    ExpectedList,
    #[error("RLP list item at index {0} exceeds the small-list fast path's 55-byte limit")]
    SmallListItemTooLong(usize),
    #[error("RLP list has more than {0} fields")]
    ListTooManyFields(usize),
    #[error("RLP list payload was not fully consumed decoding its fields")]
    ListPayloadNotFullyConsumed,
    #[error("byte subarray does not match the expected bytes")]
    SubarrayMismatch,
}
