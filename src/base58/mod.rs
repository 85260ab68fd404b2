//! Base58 encoding/decoding for human-transcribable byte strings.
//!
//! Follows the reference algorithm from Bitcoin Core's base58.cpp: the input
//! is treated as a big-endian arbitrary-precision integer and reduced with
//! long division into a fixed-capacity digit buffer, with leading zero bytes
//! carried over as leading `1` characters.

mod check;

pub use check::{
    decode_check, decode_check_with, encode_check, encode_check_with, ChecksumDigest, DoubleSha256,
};

use crate::error::{Error, Result};

/// All alphanumeric characters except for "0", "I", "O", and "l".
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn alphabet_index(ch: char) -> Option<u8> {
    ALPHABET.iter().position(|&a| a as char == ch).map(|i| i as u8)
}

/// Encode bytes as a Base58 string.
///
/// The empty input encodes to the empty string; an all-zero input of length
/// `n` encodes to `n` copies of `1`.
pub fn encode(data: &[u8]) -> String {
    // Skip & count leading zeroes.
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let input = &data[zeros..];
    // Big-endian base58 digit buffer: log(256) / log(58), rounded up.
    let mut b58 = vec![0u8; input.len() * 138 / 100 + 1];
    for &byte in input {
        // Apply "b58 = b58 * 256 + byte".
        let mut carry = u32::from(byte);
        for digit in b58.iter_mut().rev() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        // A leftover carry means the sizing bound above is wrong.
        assert_eq!(carry, 0, "base58 digit buffer overflow");
    }
    // Skip leading zeroes in the base58 result.
    let start = b58.iter().position(|&d| d != 0).unwrap_or(b58.len());
    let mut out = String::with_capacity(zeros + b58.len() - start);
    for _ in 0..zeros {
        out.push('1');
    }
    out.extend(b58[start..].iter().map(|&d| ALPHABET[usize::from(d)] as char));
    out
}

/// Decode a Base58 string into bytes.
///
/// Leading and trailing whitespace is accepted and ignored. Fails with
/// [`Error::InvalidCharacter`] on any character outside the alphabet and
/// [`Error::TrailingGarbage`] if non-whitespace follows the Base58 run.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let text = text.trim_start();
    let body_end = text.find(char::is_whitespace).unwrap_or(text.len());
    let (body, rest) = text.split_at(body_end);
    // Skip and count leading '1's.
    let zeros = body.bytes().take_while(|&b| b == b'1').count();
    let digits = &body[zeros..];
    // Big-endian base256 buffer: log(58) / log(256), rounded up.
    let mut b256 = vec![0u8; digits.len() * 733 / 1000 + 1];
    for ch in digits.chars() {
        let index = alphabet_index(ch).ok_or(Error::InvalidCharacter(ch))?;
        // Apply "b256 = b256 * 58 + index".
        let mut carry = u32::from(index);
        for byte in b256.iter_mut().rev() {
            carry += 58 * u32::from(*byte);
            *byte = (carry % 256) as u8;
            carry /= 256;
        }
        assert_eq!(carry, 0, "base256 buffer overflow");
    }
    if !rest.chars().all(char::is_whitespace) {
        return Err(Error::TrailingGarbage);
    }
    // Skip leading zeroes in the base256 result.
    let start = b256.iter().position(|&b| b != 0).unwrap_or(b256.len());
    let mut out = Vec::with_capacity(zeros + b256.len() - start);
    out.resize(zeros, 0);
    out.extend_from_slice(&b256[start..]);
    Ok(out)
}
