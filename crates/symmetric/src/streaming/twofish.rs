//! Streaming Twofish implementations
//!
//! CBC streams carry their IV in-band: the encrypt stream generates one and
//! writes it as the first 16 bytes, and the decrypt stream reads it back
//! before any ciphertext. ECB streams have no header.

use crate::cipher::Mode;
use crate::error::{Result, SymmetricResultExt};
use crate::streaming::{StreamingDecrypt, StreamingEncrypt};
use crate::twofish::{
    make_decryptor, make_encryptor, TwofishDecryptor, TwofishEncryptor, TwofishIv, TwofishKey,
};
use algorithms::block::padding::Padding;
use common::security::SecretVec;
use std::io::{Read, Write};

const IO_CHUNK_SIZE: usize = 8192;

/// Streaming encryption API for Twofish
pub struct TwofishEncryptStream<W: Write> {
    writer: W,
    encryptor: TwofishEncryptor,
}

impl<W: Write> TwofishEncryptStream<W> {
    /// Creates a new encryption stream
    ///
    /// In CBC mode a fresh IV is generated and written to the head of the
    /// stream before any ciphertext.
    pub fn new(writer: W, key: &TwofishKey, mode: Mode, padding: Padding) -> Result<Self> {
        let encryptor = make_encryptor(key, mode, padding, None)?;

        let mut w = writer;
        if let Some(iv) = encryptor.iv() {
            w.write_all(iv.as_ref()).map_io_err()?;
        }

        Ok(Self {
            writer: w,
            encryptor,
        })
    }
}

impl<W: Write> StreamingEncrypt<W> for TwofishEncryptStream<W> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let ciphertext = self.encryptor.update(data)?;
        self.writer.write_all(&ciphertext).map_io_err()?;
        Ok(())
    }

    fn finalize(mut self) -> Result<W> {
        let ciphertext = self.encryptor.finalize(&[])?;
        self.writer.write_all(&ciphertext).map_io_err()?;
        self.writer.flush().map_io_err()?;
        Ok(self.writer)
    }
}

/// Streaming decryption API for Twofish
pub struct TwofishDecryptStream<R: Read> {
    reader: R,
    decryptor: Option<TwofishDecryptor>,
    pending: SecretVec,
}

impl<R: Read> TwofishDecryptStream<R> {
    /// Creates a new decryption stream
    ///
    /// In CBC mode the IV is read from the head of the stream.
    pub fn new(mut reader: R, key: &TwofishKey, mode: Mode, padding: Padding) -> Result<Self> {
        let iv = match mode {
            Mode::Cbc => {
                let mut iv_bytes = [0u8; 16];
                reader.read_exact(&mut iv_bytes).map_io_err()?;
                Some(TwofishIv::new(iv_bytes))
            }
            Mode::Ecb => None,
        };

        let decryptor = make_decryptor(key, mode, padding, iv.as_ref())?;

        Ok(Self {
            reader,
            decryptor: Some(decryptor),
            pending: SecretVec::empty(),
        })
    }

    /// Pulls more ciphertext from the reader into the pending plaintext
    /// buffer, finalizing the transform at end of input
    fn refill(&mut self) -> Result<()> {
        if self.decryptor.is_none() {
            return Ok(());
        }

        let mut chunk = [0u8; IO_CHUNK_SIZE];
        let n = self.reader.read(&mut chunk).map_io_err()?;

        if n == 0 {
            // End of input: release the held final block and strip padding
            if let Some(decryptor) = self.decryptor.take() {
                let last = decryptor.finalize(&[])?;
                self.pending.extend_from_slice(&last);
            }
        } else if let Some(decryptor) = self.decryptor.as_mut() {
            let plaintext = decryptor.update(&chunk[..n])?;
            self.pending.extend_from_slice(&plaintext);
        }
        Ok(())
    }
}

impl<R: Read> StreamingDecrypt<R> for TwofishDecryptStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        while self.pending.is_empty() && self.decryptor.is_some() {
            self.refill()?;
        }

        if self.pending.is_empty() {
            return Ok(0);
        }

        let to_copy = self.pending.len().min(buf.len());
        let served = self.pending.drain_front(to_copy);
        buf[..to_copy].copy_from_slice(&served);
        Ok(to_copy)
    }
}

/// Encrypts everything from a reader into a writer
pub fn encrypt_stream<R: Read, W: Write>(
    mut reader: R,
    writer: W,
    key: &TwofishKey,
    mode: Mode,
    padding: Padding,
) -> Result<()> {
    let mut stream = TwofishEncryptStream::new(writer, key, mode, padding)?;

    let mut buffer = [0u8; IO_CHUNK_SIZE];
    loop {
        let bytes_read = reader.read(&mut buffer).map_io_err()?;
        if bytes_read == 0 {
            break;
        }
        stream.write(&buffer[..bytes_read])?;
    }

    stream.finalize()?;
    Ok(())
}

/// Decrypts everything from a reader into a writer
pub fn decrypt_stream<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    key: &TwofishKey,
    mode: Mode,
    padding: Padding,
) -> Result<()> {
    let mut stream = TwofishDecryptStream::new(reader, key, mode, padding)?;

    let mut buffer = [0u8; IO_CHUNK_SIZE];
    loop {
        let bytes_read = stream.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        writer.write_all(&buffer[..bytes_read]).map_io_err()?;
    }

    Ok(())
}
