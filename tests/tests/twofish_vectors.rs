//! Known-answer conformance tests for the Twofish block engine
//!
//! Vectors come from the published Twofish test vector tables (ECB mode,
//! fixed key/plaintext pairs). Any deviation here means the engine no longer
//! interoperates with other implementations.

use tfcrypt_algorithms::types::SecretBytes;
use tfcrypt_algorithms::{BlockCipher, Twofish128, Twofish192, Twofish256};
use tfcrypt_symmetric::{Mode, Padding, TwofishCipher, TwofishKey};
use tfcrypt_symmetric::cipher::SymmetricCipher;
use tfcrypt_tests::{hex_array, hex_bytes};

struct EcbVector {
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const VECTORS_128: &[EcbVector] = &[EcbVector {
    key: "00000000000000000000000000000000",
    plaintext: "00000000000000000000000000000000",
    ciphertext: "9F589F5CF6122C32B6BFEC2F2AE8C35A",
}];

const VECTORS_192: &[EcbVector] = &[EcbVector {
    key: "0123456789ABCDEFFEDCBA98765432100011223344556677",
    plaintext: "00000000000000000000000000000000",
    ciphertext: "CFD1D2E5A9BE9CDF501F13B892BD2248",
}];

const VECTORS_256: &[EcbVector] = &[EcbVector {
    key: "0123456789ABCDEFFEDCBA987654321000112233445566778899AABBCCDDEEFF",
    plaintext: "00000000000000000000000000000000",
    ciphertext: "37527BE0052334B89F0CFCCAE87CFA20",
}];

#[test]
fn twofish128_published_vectors() {
    for vector in VECTORS_128 {
        let key = SecretBytes::<16>::from_slice(&hex_bytes(vector.key)).unwrap();
        let cipher = Twofish128::new(&key);

        let mut block: [u8; 16] = hex_array(vector.plaintext);
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(block, hex_array::<16>(vector.ciphertext));

        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block, hex_array::<16>(vector.plaintext));
    }
}

#[test]
fn twofish192_published_vectors() {
    for vector in VECTORS_192 {
        let key = SecretBytes::<24>::from_slice(&hex_bytes(vector.key)).unwrap();
        let cipher = Twofish192::new(&key);

        let mut block: [u8; 16] = hex_array(vector.plaintext);
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(block, hex_array::<16>(vector.ciphertext));

        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block, hex_array::<16>(vector.plaintext));
    }
}

#[test]
fn twofish256_published_vectors() {
    for vector in VECTORS_256 {
        let key = SecretBytes::<32>::from_slice(&hex_bytes(vector.key)).unwrap();
        let cipher = Twofish256::new(&key);

        let mut block: [u8; 16] = hex_array(vector.plaintext);
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(block, hex_array::<16>(vector.ciphertext));

        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(block, hex_array::<16>(vector.plaintext));
    }
}

#[test]
fn symmetric_layer_matches_block_engine() {
    // The high-level cipher in ECB mode with no padding must be a pure
    // block-by-block application of the engine
    let vector = &VECTORS_128[0];

    let key = TwofishKey::new(&hex_bytes(vector.key)).unwrap();
    let cipher = TwofishCipher::new(&key).unwrap();

    let ciphertext = cipher
        .encrypt(&hex_bytes(vector.plaintext), Mode::Ecb, Padding::None, None)
        .unwrap();
    assert_eq!(ciphertext, hex_bytes(vector.ciphertext));
}
