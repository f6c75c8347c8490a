//! Stream-oriented behavior of the Twofish transforms
//!
//! These tests pin the adapter contract: output equivalence between split
//! and whole-message processing, the one-block decrypt lookahead, and the
//! padding behavior at stream end.

use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tfcrypt_symmetric::{
    make_decryptor, make_encryptor, Mode, Padding, TwofishIv, TwofishKey,
};

fn test_key(len: usize) -> TwofishKey {
    let mut rng = ChaCha20Rng::seed_from_u64(len as u64);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    TwofishKey::new(&bytes).unwrap()
}

fn test_iv() -> TwofishIv {
    TwofishIv::new([0x9Cu8; 16])
}

fn iv_for(mode: Mode) -> Option<TwofishIv> {
    match mode {
        Mode::Cbc => Some(test_iv()),
        Mode::Ecb => None,
    }
}

#[test]
fn round_trip_every_configuration() {
    let messages: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0xA5; 1],
        vec![0xA5; 15],
        vec![0xA5; 16],
        vec![0xA5; 17],
        (0..=255u8).collect(),
    ];

    for key_len in [16usize, 24, 32] {
        let key = test_key(key_len);
        for mode in [Mode::Ecb, Mode::Cbc] {
            for padding in [Padding::Pkcs7, Padding::None, Padding::Zeros] {
                for message in &messages {
                    if padding == Padding::None && message.len() % 16 != 0 {
                        continue;
                    }
                    // Zeros padding cannot represent trailing zero bytes
                    if padding == Padding::Zeros
                        && message.last() == Some(&0)
                    {
                        continue;
                    }

                    let iv = iv_for(mode);
                    let ciphertext = make_encryptor(&key, mode, padding, iv.as_ref())
                        .unwrap()
                        .finalize(message)
                        .unwrap();
                    let recovered = make_decryptor(&key, mode, padding, iv.as_ref())
                        .unwrap()
                        .finalize(&ciphertext)
                        .unwrap();
                    assert_eq!(
                        &recovered, message,
                        "round trip failed: key {key_len} mode {mode:?} padding {padding:?} len {}",
                        message.len()
                    );
                }
            }
        }
    }
}

#[test]
fn decrypt_output_lags_by_exactly_one_block() {
    let key = test_key(16);
    let message = vec![0x3Cu8; 64];

    let ciphertext = make_encryptor(&key, Mode::Ecb, Padding::Pkcs7, None)
        .unwrap()
        .finalize(&message)
        .unwrap();
    assert_eq!(ciphertext.len(), 80);

    let mut dec = make_decryptor(&key, Mode::Ecb, Padding::Pkcs7, None).unwrap();
    let mut emitted = 0usize;
    for (i, block) in ciphertext.chunks(16).enumerate() {
        emitted += dec.update(block).unwrap().len();
        // After feeding i+1 blocks, exactly i blocks may have been emitted
        assert_eq!(emitted, i * 16);
    }
    let last = dec.finalize(&[]).unwrap();
    assert_eq!(emitted + last.len(), message.len());
}

#[test]
fn cbc_differs_from_ecb_on_repeated_blocks() {
    let key = test_key(16);
    let message = vec![0x77u8; 48];

    let ecb = make_encryptor(&key, Mode::Ecb, Padding::None, None)
        .unwrap()
        .finalize(&message)
        .unwrap();
    assert_eq!(ecb[0..16], ecb[16..32]);

    let iv = test_iv();
    let cbc = make_encryptor(&key, Mode::Cbc, Padding::None, Some(&iv))
        .unwrap()
        .finalize(&message)
        .unwrap();
    assert_ne!(cbc[0..16], cbc[16..32]);
}

#[test]
fn distinct_ivs_give_distinct_ciphertext() {
    let key = test_key(16);
    let message = vec![0x10u8; 32];

    let iv_a = TwofishIv::new([0u8; 16]);
    let mut bytes = [0u8; 16];
    bytes[15] = 1;
    let iv_b = TwofishIv::new(bytes);

    let a = make_encryptor(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv_a))
        .unwrap()
        .finalize(&message)
        .unwrap();
    let b = make_encryptor(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv_b))
        .unwrap()
        .finalize(&message)
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn tampering_with_final_block_is_detected() {
    let key = test_key(32);
    let iv = test_iv();
    let message = vec![0x2Bu8; 50];

    let ciphertext = make_encryptor(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv))
        .unwrap()
        .finalize(&message)
        .unwrap();

    let mut tampered = ciphertext.clone();
    let last = tampered.len() - 1;
    tampered[last] ^= 0x40;

    let result = make_decryptor(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv))
        .unwrap()
        .finalize(&tampered);
    assert!(result.is_err());
}

proptest! {
    #[test]
    fn split_processing_matches_whole_message(
        message in proptest::collection::vec(any::<u8>(), 0..512),
        cut_a in 0usize..512,
        cut_b in 0usize..512,
    ) {
        let key = test_key(16);
        let iv = test_iv();

        let whole = make_encryptor(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv))
            .unwrap()
            .finalize(&message)
            .unwrap();

        // Clamp the random cut points into the message and order them
        let mut cuts = [cut_a.min(message.len()), cut_b.min(message.len())];
        cuts.sort_unstable();

        let mut split = make_encryptor(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv)).unwrap();
        let mut pieced = Vec::new();
        pieced.extend(split.update(&message[..cuts[0]]).unwrap());
        pieced.extend(split.update(&message[cuts[0]..cuts[1]]).unwrap());
        pieced.extend(split.finalize(&message[cuts[1]..]).unwrap());

        prop_assert_eq!(&pieced, &whole);

        // And the decrypt side, split at the same ciphertext offsets
        let ct_cut = (cuts[0] / 16) * 16;
        let mut dec = make_decryptor(&key, Mode::Cbc, Padding::Pkcs7, Some(&iv)).unwrap();
        let mut recovered = Vec::new();
        recovered.extend(dec.update(&whole[..ct_cut]).unwrap());
        recovered.extend(dec.finalize(&whole[ct_cut..]).unwrap());

        prop_assert_eq!(&recovered, &message);
    }

    #[test]
    fn pkcs7_round_trip_arbitrary_messages(
        message in proptest::collection::vec(any::<u8>(), 0..256),
        key_choice in 0usize..3,
    ) {
        let key = test_key([16, 24, 32][key_choice]);

        let ciphertext = make_encryptor(&key, Mode::Ecb, Padding::Pkcs7, None)
            .unwrap()
            .finalize(&message)
            .unwrap();

        // PKCS7 always pads, so ciphertext strictly exceeds the message
        prop_assert!(ciphertext.len() > message.len());
        prop_assert_eq!(ciphertext.len() % 16, 0);

        let recovered = make_decryptor(&key, Mode::Ecb, Padding::Pkcs7, None)
            .unwrap()
            .finalize(&ciphertext)
            .unwrap();
        prop_assert_eq!(&recovered, &message);
    }
}
