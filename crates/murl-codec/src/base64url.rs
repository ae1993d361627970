//! Unpadded, URL-safe base64 codec.
//!
//! Alphabet `A-Z a-z 0-9 - _`, no `=` padding. A 1-byte leftover encodes to
//! 2 characters and a 2-byte leftover to 3, so no valid encoding has a
//! length congruent to 1 modulo 4.

use crate::error::{MurlError, Result};

const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Sentinel in the decode table for bytes outside the alphabet.
const INVALID: u8 = 64;

const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Encode bytes to unpadded base64url text. Never fails.
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    let mut chunks = input.chunks_exact(3);
    for chunk in chunks.by_ref() {
        let triplet =
            (chunk[0] as u32) << 16 | (chunk[1] as u32) << 8 | chunk[2] as u32;
        out.push(ALPHABET[(triplet >> 18 & 0x3f) as usize] as char);
        out.push(ALPHABET[(triplet >> 12 & 0x3f) as usize] as char);
        out.push(ALPHABET[(triplet >> 6 & 0x3f) as usize] as char);
        out.push(ALPHABET[(triplet & 0x3f) as usize] as char);
    }
    match chunks.remainder() {
        &[a] => {
            out.push(ALPHABET[(a >> 2) as usize] as char);
            out.push(ALPHABET[((a & 0x03) << 4) as usize] as char);
        }
        &[a, b] => {
            out.push(ALPHABET[(a >> 2) as usize] as char);
            out.push(ALPHABET[((a & 0x03) << 4 | b >> 4) as usize] as char);
            out.push(ALPHABET[((b & 0x0f) << 2) as usize] as char);
        }
        _ => {}
    }
    out
}

/// Decode unpadded base64url text.
///
/// Fails without partial output if the length is congruent to 1 modulo 4 or
/// any character falls outside the alphabet.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let bytes = input.as_bytes();
    if bytes.len() % 4 == 1 {
        return Err(MurlError::InvalidBase64(
            "length is congruent to 1 modulo 4".into(),
        ));
    }
    let mut out = Vec::with_capacity(bytes.len() / 4 * 3 + 2);
    let mut chunks = bytes.chunks_exact(4);
    for chunk in chunks.by_ref() {
        let a = DECODE_TABLE[chunk[0] as usize];
        let b = DECODE_TABLE[chunk[1] as usize];
        let c = DECODE_TABLE[chunk[2] as usize];
        let d = DECODE_TABLE[chunk[3] as usize];
        if (a | b | c | d) & INVALID != 0 {
            return Err(invalid_character());
        }
        let triplet =
            (a as u32) << 18 | (b as u32) << 12 | (c as u32) << 6 | d as u32;
        out.push((triplet >> 16) as u8);
        out.push((triplet >> 8) as u8);
        out.push(triplet as u8);
    }
    match chunks.remainder() {
        [] => {}
        &[x, y] => {
            let a = DECODE_TABLE[x as usize];
            let b = DECODE_TABLE[y as usize];
            if (a | b) & INVALID != 0 {
                return Err(invalid_character());
            }
            let pair = (a as u32) << 6 | b as u32;
            out.push((pair >> 4) as u8);
        }
        &[x, y, z] => {
            let a = DECODE_TABLE[x as usize];
            let b = DECODE_TABLE[y as usize];
            let c = DECODE_TABLE[z as usize];
            if (a | b | c) & INVALID != 0 {
                return Err(invalid_character());
            }
            let triplet = (a as u32) << 12 | (b as u32) << 6 | c as u32;
            out.push((triplet >> 10) as u8);
            out.push((triplet >> 2) as u8);
        }
        // A single leftover character was rejected by the length check.
        _ => return Err(invalid_character()),
    }
    Ok(out)
}

fn invalid_character() -> MurlError {
    MurlError::InvalidBase64("character outside the base64url alphabet".into())
}
