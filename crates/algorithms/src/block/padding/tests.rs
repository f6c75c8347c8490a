use super::*;

#[test]
fn test_none_requires_alignment() {
    assert!(pad_tail(&[], Padding::None).unwrap().is_empty());
    assert!(pad_tail(&[1, 2, 3], Padding::None).is_err());
}

#[test]
fn test_pkcs7_partial_tail() {
    let block = pad_tail(&[0xAB; 5], Padding::Pkcs7).unwrap();
    assert_eq!(block.len(), 16);
    assert_eq!(&block[..5], &[0xAB; 5]);
    assert_eq!(&block[5..], &[11u8; 11]);
}

#[test]
fn test_pkcs7_aligned_adds_full_block() {
    let block = pad_tail(&[], Padding::Pkcs7).unwrap();
    assert_eq!(block, vec![16u8; 16]);
}

#[test]
fn test_zeros_fills_to_boundary() {
    let block = pad_tail(&[1, 2, 3], Padding::Zeros).unwrap();
    assert_eq!(&block[..3], &[1, 2, 3]);
    assert_eq!(&block[3..], &[0u8; 13]);

    assert!(pad_tail(&[], Padding::Zeros).unwrap().is_empty());
}

#[test]
fn test_unpad_none_passes_through() {
    let block = [0x7Fu8; 16];
    assert_eq!(unpad_block(&block, Padding::None).unwrap(), block.to_vec());
}

#[test]
fn test_unpad_pkcs7_round_trip() {
    for tail_len in 0..16 {
        let tail = vec![0xC3u8; tail_len];
        let padded = pad_tail(&tail, Padding::Pkcs7).unwrap();
        let mut block = [0u8; 16];
        block.copy_from_slice(&padded);
        assert_eq!(unpad_block(&block, Padding::Pkcs7).unwrap(), tail);
    }
}

#[test]
fn test_unpad_pkcs7_rejects_zero_length() {
    let block = [0u8; 16];
    assert!(unpad_block(&block, Padding::Pkcs7).is_err());
}

#[test]
fn test_unpad_pkcs7_rejects_out_of_range() {
    let mut block = [0x11u8; 16];
    block[15] = 17;
    assert!(unpad_block(&block, Padding::Pkcs7).is_err());
}

#[test]
fn test_unpad_pkcs7_rejects_inconsistent_bytes() {
    let mut block = [4u8; 16];
    block[13] = 5;
    assert!(unpad_block(&block, Padding::Pkcs7).is_err());
}

#[test]
fn test_unpad_pkcs7_full_block() {
    let block = [16u8; 16];
    assert!(unpad_block(&block, Padding::Pkcs7).unwrap().is_empty());
}

#[test]
fn test_unpad_zeros_trims_trailing() {
    let mut block = [0u8; 16];
    block[..4].copy_from_slice(&[9, 9, 9, 9]);
    assert_eq!(unpad_block(&block, Padding::Zeros).unwrap(), vec![9u8; 4]);
}

#[test]
fn test_unpad_zeros_non_zero_block_untouched() {
    let block = [0x55u8; 16];
    assert_eq!(unpad_block(&block, Padding::Zeros).unwrap().len(), 16);
}

#[test]
fn test_unpad_zeros_all_zero_block_empties() {
    let block = [0u8; 16];
    assert!(unpad_block(&block, Padding::Zeros).unwrap().is_empty());
}
