//! Resolution of a single trie node: classifying it as branch, leaf or
//! extension, and extracting either the next child hash or the terminal
//! value.

use archors_rlp::list::RlpList;
use archors_types::constants::{KEY_LENGTH, MAX_NUM_FIELDS};
use ethers::types::H256;

use crate::error::NodeError;
use crate::path::NibblePath;

/// The kind of a trie node, distinguished by its field count and, for
/// 2-field nodes, the terminator bit of its hex-prefix-encoded first field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Branch,
    Leaf,
    Extension,
}

impl NodeKind {
    /// Deduces the node kind from a decoded field table and the node's raw
    /// bytes. The first field's first byte carries the hex-prefix flag
    /// nibble for leaf/extension nodes.
    fn deduce(table: &RlpList<2>, node: &[u8]) -> Result<NodeKind, NodeError> {
        let first_field = node
            .get(table.offset[0])
            .copied()
            .ok_or(NodeError::EmptyPathField)?;
        let flag = first_field >> 4;
        if flag >= 2 {
            Ok(NodeKind::Leaf)
        } else {
            Ok(NodeKind::Extension)
        }
    }
}

/// The outcome of resolving one node: either a pointer to descend further
/// (branch or extension), or the terminal leaf value.
#[derive(Debug, Eq, PartialEq)]
pub enum Resolution {
    /// Internal node; carries the child hash to verify next.
    Internal { next_hash: [u8; 32] },
    /// Terminal leaf node; carries the raw, still RLP-encoded value field
    /// as it appears in `node`.
    Leaf {
        value_offset: usize,
        value_length: usize,
    },
}

/// Resolve-17: a branch node. Reads the nibble at the cursor, asserts the
/// corresponding slot is exactly 32 bytes, and returns it as the next hash.
///
/// Precondition asserted here: the 17th (value) slot is empty, since this
/// subsystem only verifies fixed-length keys that cannot terminate mid-path.
pub fn resolve_branch(
    table: &RlpList<MAX_NUM_FIELDS>,
    node: &[u8],
    cursor: &mut NibblePath,
) -> Result<Resolution, NodeError> {
    if table.length[16] != 0 {
        return Err(NodeError::BranchNodeHasValue);
    }
    let nibble = cursor.visit_path_nibble()?;
    let slot = nibble as usize;
    let length = table.length[slot];
    if length == 0 {
        return Err(NodeError::BranchSlotEmpty(slot));
    }
    if length != KEY_LENGTH {
        return Err(NodeError::BranchSlotInvalidLength(slot));
    }
    let offset = table.offset[slot];
    let bytes = node
        .get(offset..offset + KEY_LENGTH)
        .ok_or(NodeError::BranchSlotInvalidLength(slot))?;
    let next_hash: [u8; 32] = H256::from_slice(bytes).into();
    Ok(Resolution::Internal { next_hash })
}

/// Resolve-2: a leaf or extension node. Decodes the hex-prefix-encoded
/// first field, asserts its nibbles match the key nibbles at the cursor,
/// advances the cursor, and returns either the next child hash (extension)
/// or the terminal value's location within `node` (leaf).
pub fn resolve_leaf_or_extension(
    table: &RlpList<2>,
    node: &[u8],
    cursor: &mut NibblePath,
) -> Result<(NodeKind, Resolution), NodeError> {
    let kind = NodeKind::deduce(table, node)?;
    let path_field = node
        .get(table.offset[0]..table.offset[0] + table.length[0])
        .ok_or(NodeError::EmptyPathField)?;
    cursor.advance_matching_nibbles(path_field)?;

    match kind {
        NodeKind::Extension => {
            let length = table.length[1];
            if length != KEY_LENGTH {
                return Err(NodeError::ExtensionNextNodeInvalidLength);
            }
            let offset = table.offset[1];
            let bytes = node
                .get(offset..offset + KEY_LENGTH)
                .ok_or(NodeError::ExtensionNextNodeInvalidLength)?;
            let next_hash: [u8; 32] = H256::from_slice(bytes).into();
            Ok((kind, Resolution::Internal { next_hash }))
        }
        NodeKind::Leaf => {
            if !cursor.is_exhausted() {
                return Err(NodeError::LeafPathIncomplete);
            }
            Ok((
                kind,
                Resolution::Leaf {
                    value_offset: table.offset[1],
                    value_length: table.length[1],
                },
            ))
        }
        NodeKind::Branch => unreachable!("deduce never returns Branch"),
    }
}

/// Dispatch over a decoded node's field count: 17 fields is Resolve-17, 2
/// fields is Resolve-2, anything else is malformed. Used at every depth
/// except the terminal one, where the caller already knows it must decode
/// a 2-field list.
pub fn resolve_internal(
    num_fields: usize,
    table17: Option<&RlpList<MAX_NUM_FIELDS>>,
    table2: Option<&RlpList<2>>,
    node: &[u8],
    cursor: &mut NibblePath,
) -> Result<Resolution, NodeError> {
    match num_fields {
        MAX_NUM_FIELDS => {
            let table = table17.ok_or(NodeError::UnexpectedFieldCount(num_fields))?;
            resolve_branch(table, node, cursor)
        }
        2 => {
            let table = table2.ok_or(NodeError::UnexpectedFieldCount(num_fields))?;
            let (kind, resolution) = resolve_leaf_or_extension(table, node, cursor)?;
            if kind == NodeKind::Leaf {
                return Err(NodeError::LeafAtNonTerminal);
            }
            Ok(resolution)
        }
        other => Err(NodeError::UnexpectedFieldCount(other)),
    }
}
