//! Streaming encryption and decryption interfaces
//!
//! These traits wrap the incremental transforms around `std::io` readers and
//! writers so whole files or sockets can be pushed through a cipher without
//! holding the message in memory.

use crate::error::Result;
use std::io::{Read, Write};

pub mod twofish;

pub use twofish::{decrypt_stream, encrypt_stream, TwofishDecryptStream, TwofishEncryptStream};

/// Streaming encryption over an output sink
pub trait StreamingEncrypt<W: Write> {
    /// Writes plaintext into the stream
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the stream, flushing any remaining ciphertext, and returns
    /// the underlying writer
    fn finalize(self) -> Result<W>;
}

/// Streaming decryption over an input source
pub trait StreamingDecrypt<R: Read> {
    /// Reads and decrypts data from the stream
    ///
    /// Returns the number of plaintext bytes placed in `buf`; zero means the
    /// stream is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}
