use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn hex_block(s: &str) -> [u8; 16] {
    let bytes = hex::decode(s).unwrap();
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    block
}

#[test]
fn test_twofish128_known_answer() {
    // Zero key, zero plaintext vector from the algorithm's published tables
    let key = SecretBytes::<16>::zeroed();
    let cipher = Twofish128::new(&key);

    let mut block = [0u8; 16];
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(block, hex_block("9F589F5CF6122C32B6BFEC2F2AE8C35A"));

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, [0u8; 16]);
}

#[test]
fn test_twofish192_known_answer() {
    let key_bytes = hex::decode("0123456789ABCDEFFEDCBA98765432100011223344556677").unwrap();
    let key = SecretBytes::<24>::from_slice(&key_bytes).unwrap();
    let cipher = Twofish192::new(&key);

    let mut block = [0u8; 16];
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(block, hex_block("CFD1D2E5A9BE9CDF501F13B892BD2248"));

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, [0u8; 16]);
}

#[test]
fn test_twofish256_known_answer() {
    let key_bytes =
        hex::decode("0123456789ABCDEFFEDCBA987654321000112233445566778899AABBCCDDEEFF").unwrap();
    let key = SecretBytes::<32>::from_slice(&key_bytes).unwrap();
    let cipher = Twofish256::new(&key);

    let mut block = [0u8; 16];
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(block, hex_block("37527BE0052334B89F0CFCCAE87CFA20"));

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, [0u8; 16]);
}

#[test]
fn test_encrypt_decrypt_round_trip() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    let key = Twofish128::generate_key(&mut rng);
    let cipher = Twofish128::new(&key);

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let original = block;

    cipher.encrypt_block(&mut block).unwrap();
    assert_ne!(block, original);

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, original);
}

#[test]
fn test_schedule_deterministic() {
    let key = [0x5Au8; 32];
    let a = Schedule::derive(&key).unwrap();
    let b = Schedule::derive(&key).unwrap();

    let mut block_a = [0x11u8; 16];
    let mut block_b = [0x11u8; 16];
    a.encrypt_block_inner(&mut block_a).unwrap();
    b.encrypt_block_inner(&mut block_b).unwrap();
    assert_eq!(block_a, block_b);
}

#[test]
fn test_key_sensitivity() {
    let mut key_a = [0u8; 16];
    let mut key_b = [0u8; 16];
    key_b[15] = 1;

    let a = Schedule::derive(&key_a).unwrap();
    let b = Schedule::derive(&key_b).unwrap();

    let mut block_a = [0u8; 16];
    let mut block_b = [0u8; 16];
    a.encrypt_block_inner(&mut block_a).unwrap();
    b.encrypt_block_inner(&mut block_b).unwrap();
    assert_ne!(block_a, block_b);

    key_a.zeroize();
    key_b.zeroize();
}

#[test]
fn test_rejects_bad_key_length() {
    for len in [0usize, 8, 15, 17, 23, 31, 33, 64] {
        let key = vec![0u8; len];
        assert!(Schedule::derive(&key).is_err(), "length {len} must fail");
    }
}

#[test]
fn test_rejects_bad_block_length() {
    let key = SecretBytes::<16>::zeroed();
    let cipher = Twofish128::new(&key);

    let mut short = [0u8; 15];
    assert!(cipher.encrypt_block(&mut short).is_err());

    let mut long = [0u8; 17];
    assert!(cipher.decrypt_block(&mut long).is_err());
}
