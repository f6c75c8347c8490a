use super::*;
use crate::block::twofish::Twofish128;
use crate::types::SecretBytes;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn cipher() -> Twofish128 {
    let key = SecretBytes::<16>::from_slice(&[0x42u8; 16]).unwrap();
    Twofish128::new(&key)
}

#[test]
fn test_cbc_round_trip() {
    let iv = Nonce::<16>::new([0x24u8; 16]);

    let plaintext = b"0123456789abcdef0123456789abcdef";

    let mut enc = Cbc::new(cipher(), &iv).unwrap();
    let ciphertext = enc.encrypt(plaintext).unwrap();
    assert_eq!(ciphertext.len(), plaintext.len());

    let mut dec = Cbc::new(cipher(), &iv).unwrap();
    let recovered = dec.decrypt(&ciphertext).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn test_cbc_identical_blocks_differ() {
    let iv = Nonce::<16>::new([0u8; 16]);
    let mut enc = Cbc::new(cipher(), &iv).unwrap();

    let plaintext = [0xAAu8; 48];
    let ciphertext = enc.encrypt(&plaintext).unwrap();

    assert_ne!(ciphertext[0..16], ciphertext[16..32]);
    assert_ne!(ciphertext[16..32], ciphertext[32..48]);
}

#[test]
fn test_cbc_chaining_across_calls() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let iv = Nonce::<16>::random(&mut rng);

    let mut message = vec![0u8; 64];
    rng.fill_bytes(&mut message);

    let mut whole = Cbc::new(cipher(), &iv).unwrap();
    let expected = whole.encrypt(&message).unwrap();

    let mut split = Cbc::new(cipher(), &iv).unwrap();
    let mut pieced = split.encrypt(&message[..16]).unwrap();
    pieced.extend(split.encrypt(&message[16..48]).unwrap());
    pieced.extend(split.encrypt(&message[48..]).unwrap());

    assert_eq!(pieced, expected);

    let mut dec = Cbc::new(cipher(), &iv).unwrap();
    let mut recovered = dec.decrypt(&pieced[..32]).unwrap();
    recovered.extend(dec.decrypt(&pieced[32..]).unwrap());
    assert_eq!(recovered, message);
}

#[test]
fn test_cbc_iv_sensitivity() {
    let iv_a = Nonce::<16>::new([0u8; 16]);
    let mut iv_bytes = [0u8; 16];
    iv_bytes[0] = 1;
    let iv_b = Nonce::<16>::new(iv_bytes);

    let plaintext = [0x33u8; 16];

    let mut enc_a = Cbc::new(cipher(), &iv_a).unwrap();
    let mut enc_b = Cbc::new(cipher(), &iv_b).unwrap();

    assert_ne!(
        enc_a.encrypt(&plaintext).unwrap(),
        enc_b.encrypt(&plaintext).unwrap()
    );
}

#[test]
fn test_cbc_rejects_partial_block() {
    let iv = Nonce::<16>::new([0u8; 16]);
    let mut mode = Cbc::new(cipher(), &iv).unwrap();

    assert!(mode.encrypt(&[0u8; 15]).is_err());
    assert!(mode.decrypt(&[0u8; 17]).is_err());
}

#[test]
fn test_cbc_rejects_wrong_iv_size() {
    let iv = Nonce::<12>::new([0u8; 12]);
    assert!(Cbc::new(cipher(), &iv).is_err());
}
