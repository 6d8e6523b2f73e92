//! Length-prefix edge cases
//!
//! Every length and count on the wire goes through this prefix, so each
//! threshold must pick the right marker and decode back exactly.

use ontology_governance_codec::serialization::varint::{decode_varint, encode_varint};
use ontology_governance_codec::{CodecError, StreamReader, StreamWriter};

/// Each boundary value selects the expected marker byte
///
/// - Values < 0xfd: no marker
/// - Values 0xfd-0xffff: 0xfd + 2 bytes
/// - Values 0x10000-0xffffffff: 0xfe + 4 bytes
/// - Values > 0xffffffff: 0xff + 8 bytes
#[test]
fn test_varint_boundary_markers() {
    let cases: [(u64, Option<u8>, usize); 7] = [
        (0x00, None, 1),
        (0xfc, None, 1),
        (0xfd, Some(0xfd), 3),
        (0xffff, Some(0xfd), 3),
        (0x10000, Some(0xfe), 5),
        (0xffffffff, Some(0xfe), 5),
        (0x100000000, Some(0xff), 9),
    ];

    for (value, marker, len) in cases {
        let encoded = encode_varint(value);
        assert_eq!(encoded.len(), len, "length mismatch for {value:#x}");
        match marker {
            Some(m) => assert_eq!(encoded[0], m, "marker mismatch for {value:#x}"),
            None => assert_eq!(encoded, vec![value as u8]),
        }
        assert_eq!(decode_varint(&encoded), Ok((value, len)));
    }
}

/// The same thresholds through the stream reader/writer
#[test]
fn test_varint_boundaries_through_stream() {
    let values = [0x00, 0xfc, 0xfd, 0xffff, 0x10000, 0xffffffff, 0x100000000, u64::MAX];

    let mut writer = StreamWriter::new();
    for value in values {
        writer.write_var_len(value);
    }

    let mut reader = StreamReader::from_hex(&writer.to_hex()).unwrap();
    for value in values {
        assert_eq!(reader.read_var_len().unwrap(), value);
    }
    assert!(reader.is_empty());
}

/// Multi-byte lengths are little-endian
#[test]
fn test_varint_little_endian() {
    assert_eq!(encode_varint(256), vec![0xfd, 0x00, 0x01]);
    assert_eq!(encode_varint(0x10000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);

    let encoded = encode_varint(0x100000000);
    assert_eq!(encoded[1..5], [0x00, 0x00, 0x00, 0x00]);
    assert_eq!(encoded[5..9], [0x01, 0x00, 0x00, 0x00]);
}

/// A marker without its payload is truncated input
#[test]
fn test_varint_truncated_payload() {
    let truncated: [&[u8]; 4] = [
        &[0xfd],
        &[0xfd, 0x00],
        &[0xfe, 0, 0, 0],
        &[0xff, 0, 0, 0, 0, 0, 0, 0],
    ];
    for data in truncated {
        assert!(
            matches!(decode_varint(data), Err(CodecError::TruncatedInput { .. })),
            "{data:?} must be truncated"
        );
    }
}

/// Over-long forms are rejected so every length has one encoding
#[test]
fn test_varint_non_canonical_rejected() {
    let mut reader = StreamReader::new(&[0xfd, 0x05, 0x00]);
    assert!(matches!(
        reader.read_var_len(),
        Err(CodecError::InvalidEncoding(_))
    ));
    assert_eq!(reader.position(), 0);
}
