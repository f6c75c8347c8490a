//! Twofish symmetric cipher with mode, padding and streaming support
//!
//! This module bridges arbitrary-length byte streams to the fixed-block
//! Twofish engine in tfcrypt-algorithms. A transform instance is built for
//! one direction and one message; chain state is never reused across
//! messages.
//!
//! Decryption withholds the most recently seen ciphertext block until the
//! stream ends, because only the true final block carries padding. The
//! held block is modeled explicitly by [`Lookahead`] so the buffering
//! contract is testable rather than implicit.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::cipher::{Mode, SymmetricCipher};
use crate::error::{validate, Error, Result, SymmetricResultExt};
use algorithms::block::padding::{pad_tail, unpad_block, Padding};
use algorithms::block::{Cbc, Ecb, Twofish128, Twofish192, Twofish256};
use algorithms::types::{Nonce, SecretBytes};
use algorithms::BlockCipher;
use common::security::SecretVec;
use params::utils::symmetric::TWOFISH_BLOCK_SIZE;

pub mod keys;

pub use keys::{derive_twofish_key, generate_salt, KeySize, TwofishKey};

/// Initialization vector for CBC mode, one block wide
pub type TwofishIv = Nonce<TWOFISH_BLOCK_SIZE>;

/// Generates a fresh random IV
pub fn generate_iv() -> TwofishIv {
    TwofishIv::random(&mut OsRng)
}

/// Key-size and mode dispatch for the underlying block transforms
///
/// Each variant owns a fully scheduled cipher; the key bytes themselves are
/// not retained here.
#[derive(Zeroize, zeroize::ZeroizeOnDrop)]
enum ModeState {
    Ecb128(Ecb<Twofish128>),
    Ecb192(Ecb<Twofish192>),
    Ecb256(Ecb<Twofish256>),
    Cbc128(Cbc<Twofish128>),
    Cbc192(Cbc<Twofish192>),
    Cbc256(Cbc<Twofish256>),
}

impl ModeState {
    /// Builds the transform for the given key, mode and (CBC only) IV
    ///
    /// An IV supplied alongside ECB is ignored; ECB has no chain state to
    /// seed. CBC without an IV is rejected.
    fn new(key: &TwofishKey, mode: Mode, iv: Option<&TwofishIv>) -> Result<Self> {
        match mode {
            Mode::Ecb => match key.size() {
                KeySize::Bits128 => {
                    let k = SecretBytes::<16>::from_slice(key.as_bytes())?;
                    Ok(ModeState::Ecb128(Ecb::new(Twofish128::new(&k))))
                }
                KeySize::Bits192 => {
                    let k = SecretBytes::<24>::from_slice(key.as_bytes())?;
                    Ok(ModeState::Ecb192(Ecb::new(Twofish192::new(&k))))
                }
                KeySize::Bits256 => {
                    let k = SecretBytes::<32>::from_slice(key.as_bytes())?;
                    Ok(ModeState::Ecb256(Ecb::new(Twofish256::new(&k))))
                }
            },
            Mode::Cbc => {
                let iv = match iv {
                    Some(iv) => iv,
                    None => {
                        return Err(Error::InvalidParameter {
                            context: "CBC mode",
                            #[cfg(feature = "std")]
                            message: "an initialization vector is required".to_string(),
                        })
                    }
                };
                match key.size() {
                    KeySize::Bits128 => {
                        let k = SecretBytes::<16>::from_slice(key.as_bytes())?;
                        let cbc = Cbc::new(Twofish128::new(&k), iv).map_primitive_err()?;
                        Ok(ModeState::Cbc128(cbc))
                    }
                    KeySize::Bits192 => {
                        let k = SecretBytes::<24>::from_slice(key.as_bytes())?;
                        let cbc = Cbc::new(Twofish192::new(&k), iv).map_primitive_err()?;
                        Ok(ModeState::Cbc192(cbc))
                    }
                    KeySize::Bits256 => {
                        let k = SecretBytes::<32>::from_slice(key.as_bytes())?;
                        let cbc = Cbc::new(Twofish256::new(&k), iv).map_primitive_err()?;
                        Ok(ModeState::Cbc256(cbc))
                    }
                }
            }
        }
    }

    /// Encrypts block-aligned input, advancing chain state in CBC mode
    fn encrypt_blocks(&mut self, blocks: &[u8]) -> Result<Vec<u8>> {
        match self {
            ModeState::Ecb128(m) => m.encrypt(blocks).map_primitive_err(),
            ModeState::Ecb192(m) => m.encrypt(blocks).map_primitive_err(),
            ModeState::Ecb256(m) => m.encrypt(blocks).map_primitive_err(),
            ModeState::Cbc128(m) => m.encrypt(blocks).map_primitive_err(),
            ModeState::Cbc192(m) => m.encrypt(blocks).map_primitive_err(),
            ModeState::Cbc256(m) => m.encrypt(blocks).map_primitive_err(),
        }
    }

    /// Decrypts block-aligned input, advancing chain state in CBC mode
    fn decrypt_blocks(&mut self, blocks: &[u8]) -> Result<Vec<u8>> {
        match self {
            ModeState::Ecb128(m) => m.decrypt(blocks).map_primitive_err(),
            ModeState::Ecb192(m) => m.decrypt(blocks).map_primitive_err(),
            ModeState::Ecb256(m) => m.decrypt(blocks).map_primitive_err(),
            ModeState::Cbc128(m) => m.decrypt(blocks).map_primitive_err(),
            ModeState::Cbc192(m) => m.decrypt(blocks).map_primitive_err(),
            ModeState::Cbc256(m) => m.decrypt(blocks).map_primitive_err(),
        }
    }
}

/// The decrypt-side one-block lookahead
///
/// The adapter cannot know which incoming block is the last until no more
/// input arrives, so it always withholds the newest ciphertext block.
#[derive(Zeroize)]
enum Lookahead {
    Empty,
    Holding([u8; TWOFISH_BLOCK_SIZE]),
}

/// Incremental encryption transform
///
/// Single-use: feed data through [`update`](Self::update) any number of
/// times, then consume the transform with [`finalize`](Self::finalize) to
/// emit the padded final block.
pub struct TwofishEncryptor {
    state: ModeState,
    padding: Padding,
    staged: SecretVec,
    iv: Option<TwofishIv>,
}

impl TwofishEncryptor {
    /// Absorbs input, returning ciphertext for every complete block staged
    /// so far
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.staged.extend_from_slice(input);

        let aligned = (self.staged.len() / TWOFISH_BLOCK_SIZE) * TWOFISH_BLOCK_SIZE;
        if aligned == 0 {
            return Ok(Vec::new());
        }

        let mut blocks = self.staged.drain_front(aligned);
        let out = self.state.encrypt_blocks(&blocks);
        blocks.zeroize();
        out
    }

    /// Absorbs any remaining input, applies padding and returns the last
    /// ciphertext bytes
    pub fn finalize(mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = self.update(input)?;

        let mut tail = self.staged.drain_front(self.staged.len());
        let padded = pad_tail(&tail, self.padding).map_primitive_err()?;
        tail.zeroize();

        if !padded.is_empty() {
            out.extend(self.state.encrypt_blocks(&padded)?);
        }
        Ok(out)
    }

    /// The IV in use, present only in CBC mode
    ///
    /// When no IV was supplied at construction a random one was generated;
    /// callers must read it here and transmit it alongside the ciphertext.
    pub fn iv(&self) -> Option<&TwofishIv> {
        self.iv.as_ref()
    }

    /// Input and output block size in bytes
    pub fn block_size(&self) -> usize {
        TWOFISH_BLOCK_SIZE
    }
}

/// Incremental decryption transform
///
/// Output lags input by up to one block; the final block is only decrypted
/// and unpadded by [`finalize`](Self::finalize).
pub struct TwofishDecryptor {
    state: ModeState,
    padding: Padding,
    staged: SecretVec,
    held: Lookahead,
}

impl TwofishDecryptor {
    /// Absorbs ciphertext, returning plaintext for every block that is now
    /// known not to be the last
    pub fn update(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.staged.extend_from_slice(input);

        let mut out = Vec::new();
        while self.staged.len() >= TWOFISH_BLOCK_SIZE {
            let chunk = self.staged.drain_front(TWOFISH_BLOCK_SIZE);
            let mut block = [0u8; TWOFISH_BLOCK_SIZE];
            block.copy_from_slice(&chunk);

            match core::mem::replace(&mut self.held, Lookahead::Holding(block)) {
                Lookahead::Empty => {}
                Lookahead::Holding(mut prev) => {
                    out.extend(self.state.decrypt_blocks(&prev)?);
                    prev.zeroize();
                }
            }
        }
        Ok(out)
    }

    /// Absorbs any remaining ciphertext, then decrypts the held final block
    /// and strips its padding
    pub fn finalize(mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = self.update(input)?;

        let remainder = self.staged.len();
        if remainder != 0 {
            return Err(Error::InvalidLength {
                context: "Twofish ciphertext",
                expected: TWOFISH_BLOCK_SIZE,
                actual: remainder,
            });
        }

        match core::mem::replace(&mut self.held, Lookahead::Empty) {
            Lookahead::Empty => match self.padding {
                // A PKCS7 stream always carries at least one padded block
                Padding::Pkcs7 => Err(Error::InvalidPadding {
                    context: "Twofish decryption",
                    #[cfg(feature = "std")]
                    message: "stream contained no final block to unpad".to_string(),
                }),
                Padding::None | Padding::Zeros => Ok(out),
            },
            Lookahead::Holding(mut last) => {
                let mut plain = self.state.decrypt_blocks(&last)?;
                last.zeroize();

                let mut block = [0u8; TWOFISH_BLOCK_SIZE];
                block.copy_from_slice(&plain);
                plain.zeroize();

                let unpadded = unpad_block(&block, self.padding).map_primitive_err();
                block.zeroize();

                out.extend(unpadded?);
                Ok(out)
            }
        }
    }

    /// Input and output block size in bytes
    pub fn block_size(&self) -> usize {
        TWOFISH_BLOCK_SIZE
    }
}

impl Drop for TwofishDecryptor {
    fn drop(&mut self) {
        // The withheld ciphertext block must not outlive the transform
        self.held.zeroize();
    }
}

/// Builds an encryption transform for the given configuration
///
/// In CBC mode a missing IV is replaced by a freshly generated random one,
/// retrievable through [`TwofishEncryptor::iv`]. In ECB mode any supplied
/// IV is ignored.
pub fn make_encryptor(
    key: &TwofishKey,
    mode: Mode,
    padding: Padding,
    iv: Option<&TwofishIv>,
) -> Result<TwofishEncryptor> {
    let iv = match (mode, iv) {
        (Mode::Cbc, Some(iv)) => Some(iv.clone()),
        (Mode::Cbc, None) => Some(generate_iv()),
        (Mode::Ecb, _) => None,
    };

    let state = ModeState::new(key, mode, iv.as_ref())?;
    Ok(TwofishEncryptor {
        state,
        padding,
        staged: SecretVec::empty(),
        iv,
    })
}

/// Builds a decryption transform for the given configuration
///
/// CBC decryption cannot invent an IV, so one must be supplied.
pub fn make_decryptor(
    key: &TwofishKey,
    mode: Mode,
    padding: Padding,
    iv: Option<&TwofishIv>,
) -> Result<TwofishDecryptor> {
    if mode == Mode::Cbc {
        validate::parameter(
            iv.is_some(),
            "CBC decryption",
            "an initialization vector is required",
        )?;
    }

    let state = ModeState::new(key, mode, iv)?;
    Ok(TwofishDecryptor {
        state,
        padding,
        staged: SecretVec::empty(),
        held: Lookahead::Empty,
    })
}

/// One-shot Twofish cipher over a configured key
///
/// Convenience wrapper around the incremental transforms for callers that
/// have the whole message in memory.
pub struct TwofishCipher {
    key: TwofishKey,
}

impl SymmetricCipher for TwofishCipher {
    type Key = TwofishKey;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self { key: key.clone() })
    }

    fn name() -> &'static str {
        "Twofish"
    }
}

impl TwofishCipher {
    /// Encrypts a whole message
    ///
    /// CBC mode requires an explicit IV here so the caller always knows the
    /// value needed for decryption.
    pub fn encrypt(
        &self,
        plaintext: &[u8],
        mode: Mode,
        padding: Padding,
        iv: Option<&TwofishIv>,
    ) -> Result<Vec<u8>> {
        if mode == Mode::Cbc {
            validate::parameter(
                iv.is_some(),
                "one-shot CBC encryption",
                "an explicit initialization vector is required",
            )?;
        }
        let encryptor = make_encryptor(&self.key, mode, padding, iv)?;
        encryptor.finalize(plaintext)
    }

    /// Decrypts a whole message
    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        mode: Mode,
        padding: Padding,
        iv: Option<&TwofishIv>,
    ) -> Result<Vec<u8>> {
        let decryptor = make_decryptor(&self.key, mode, padding, iv)?;
        decryptor.finalize(ciphertext)
    }
}
