//! Round-trip coverage for the structural decoders: for any list/string this
//! crate can itself encode, decoding recovers the same field boundaries
//! (spec testable property 5).

use archors_rlp::{decode_list, decode_small_list, decode_string, DataType};

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
        panic!("test helper only supports short strings")
    }
}

fn rlp_list(items: &[Vec<u8>]) -> Vec<u8> {
    let payload: Vec<u8> = items.concat();
    let mut out = vec![0xc0 + payload.len() as u8];
    out.extend(payload);
    out
}

#[test]
fn decode_string_round_trips_arbitrary_short_strings() {
    for bytes in [
        vec![],
        vec![0x00],
        vec![0x05],
        vec![0xff],
        vec![1, 2, 3, 4, 5],
        vec![0xaa; 32],
        vec![0xbb; 55],
    ] {
        let encoded = rlp_string(&bytes);
        let (offset, length) = decode_string(&encoded).unwrap();
        assert_eq!(&encoded[offset..offset + length], bytes.as_slice());
    }
}

#[test]
fn decode_list_round_trips_each_field_offset() {
    let fields = vec![vec![1, 2, 3], vec![], vec![0xaa; 20], vec![9]];
    let encoded = rlp_list(&fields);

    let table = decode_list::<8>(&encoded).unwrap();
    assert_eq!(table.num_fields, fields.len());
    for (i, field) in fields.iter().enumerate() {
        assert_eq!(table.data_type[i], DataType::String);
        assert_eq!(&encoded[table.offset[i]..table.offset[i] + table.length[i]], field.as_slice());
    }
}

#[test]
fn decode_small_list_agrees_with_decode_list_for_short_string_items() {
    let fields = vec![vec![0xaa; 32], vec![], vec![0xbb; 32]];
    let encoded = rlp_list(&fields);

    let general = decode_list::<4>(&encoded).unwrap();
    let small = decode_small_list::<4>(&encoded).unwrap();
    assert_eq!(general, small);
}

#[test]
fn empty_list_round_trips_to_zero_fields() {
    let table = decode_list::<5>(&[0xc0]).unwrap();
    assert_eq!(table.num_fields, 0);
}

#[test]
fn nested_list_item_is_recognised_by_data_type_and_spans_its_own_header() {
    let inner = rlp_list(&[vec![1, 2]]);
    let outer = rlp_list(&[inner.clone()]);

    let table = decode_list::<2>(&outer).unwrap();
    assert_eq!(table.num_fields, 1);
    assert_eq!(table.data_type[0], DataType::List);
    assert_eq!(
        &outer[table.offset[0]..table.offset[0] + table.length[0]],
        inner.as_slice()
    );
}
