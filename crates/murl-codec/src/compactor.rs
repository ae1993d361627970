//! Compactor engine: classifies tokens and encodes/decodes the record stream.

use serde::Serialize;
use tracing::debug;

use crate::base64url;
use crate::control::{ControlByte, ENCAP_JWT};
use crate::error::{MurlError, Result};
use crate::intern::InternedStore;
use crate::varint;
use murl_tokenizer::{
    PathTokenizer, QueryTokenizer, Tokenizer, UrlTokenizer, RESERVED_SEPARATORS,
};

/// Largest token count representable by the 15-bit count prefix.
const MAX_TOKEN_COUNT: usize = 0x7fff;

/// Exclusive upper bound on token length for the interning classification.
const INTERNABLE_MAX_LEN: usize = 24;

/// Minimum token length for the base64 fallback classification.
const BASE64_MIN_LEN: usize = 16;

/// Minimum length of each dot-separated JWT segment. Shorter segments mark
/// JWT lookalikes that fall through to the literal path.
const JWT_SEGMENT_MIN_LEN: usize = 4;

/// Size statistics for one compact call.
#[derive(Debug, Clone, Serialize)]
pub struct CompactionStats {
    pub original_len: usize,
    pub compacted_len: usize,
}

impl CompactionStats {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.compacted_len as f64 / self.original_len as f64
    }
}

/// URL component compressor parameterized over a tokenizer variant.
///
/// A compactor owns its interning dictionary, which persists across repeated
/// compact/expand calls and only grows. A byte stream is meaningful only to
/// a compactor whose dictionary already contains, at matching ordinals,
/// every interned string the stream references; in practice, the instance
/// that produced it, used in the same call order. `compact` is the single
/// writer of the dictionary; callers sharing an instance across threads
/// must serialize access externally.
pub struct Compactor<T: Tokenizer> {
    tokenizer: T,
    store: InternedStore,
}

/// Compactor for path strings.
pub type PathCompactor = Compactor<PathTokenizer>;
/// Compactor for query strings.
pub type QueryCompactor = Compactor<QueryTokenizer>;
/// Compactor for full URLs.
pub type UrlCompactor = Compactor<UrlTokenizer>;

impl<T: Tokenizer + Default> Default for Compactor<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Tokenizer> Compactor<T> {
    pub fn new(tokenizer: T) -> Self {
        Self {
            tokenizer,
            store: InternedStore::new(),
        }
    }

    /// The interning dictionary accumulated so far.
    pub fn store(&self) -> &InternedStore {
        &self.store
    }

    /// Compress text into the tagged binary form.
    ///
    /// Empty text yields an empty byte sequence. Fails only when the token
    /// count exceeds the 15-bit prefix limit.
    pub fn compact(&mut self, text: &str) -> Result<Vec<u8>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let parts = self.tokenizer.split(text);
        let count = parts.len();
        if count > MAX_TOKEN_COUNT {
            return Err(MurlError::TooManyTokens(count));
        }

        let mut out = Vec::with_capacity(text.len() / 2 + 2);
        if count < 128 {
            out.push(count as u8);
        } else {
            out.push(0x80 | (count >> 8) as u8);
            out.push(count as u8);
        }
        for part in parts {
            self.encode_token(&mut out, part);
        }
        debug!(tokens = count, bytes = out.len(), "compacted input");
        Ok(out)
    }

    /// Compress text and report size statistics alongside the bytes.
    pub fn compact_with_stats(&mut self, text: &str) -> Result<(Vec<u8>, CompactionStats)> {
        let bytes = self.compact(text)?;
        let stats = CompactionStats {
            original_len: text.len(),
            compacted_len: bytes.len(),
        };
        Ok((bytes, stats))
    }

    /// Reconstruct the original text from an encoded stream.
    ///
    /// Empty input yields empty text. Reads only the dictionary; the stream
    /// must have been produced against this dictionary's history.
    pub fn expand(&self, bytes: &[u8]) -> Result<String> {
        if bytes.is_empty() {
            return Ok(String::new());
        }
        let mut reader = Reader::new(bytes);
        let first = reader.byte()?;
        let count = if first & 0x80 == 0 {
            first as usize
        } else {
            ((first & 0x7f) as usize) << 8 | reader.byte()? as usize
        };

        let mut parts = Vec::with_capacity(count);
        for _ in 0..count {
            let token = self.decode_token(&mut reader)?;
            let token = String::from_utf8(token).map_err(|_| {
                MurlError::CorruptStream("token is not valid UTF-8".into())
            })?;
            parts.push(token);
        }
        debug!(tokens = count, bytes = bytes.len(), "expanded stream");
        Ok(self.tokenizer.join(&parts))
    }

    /// Classify and encode one token.
    ///
    /// The rule order is load-bearing: it determines the byte-exact output.
    fn encode_token(&mut self, out: &mut Vec<u8>, part: &str) {
        // empty token
        if part.is_empty() {
            out.push(ControlByte::SmallLength(0).encode());
            return;
        }
        let bytes = part.as_bytes();

        // single character: separator table, else interned
        if bytes.len() == 1 {
            if let Some(index) = separator_index(bytes[0]) {
                out.push(ControlByte::Separator { index }.encode());
            } else {
                self.encode_interned(out, bytes);
            }
            return;
        }

        // decimal digit run; a redundant leading zero or a value past u64
        // would not survive the numeric round trip, so both fall through
        if bytes[0] != b'0' && bytes.iter().all(u8::is_ascii_digit) {
            if let Ok(value) = part.parse::<u64>() {
                encode_integer(out, value);
                return;
            }
        }

        // internable text
        if bytes.len() < INTERNABLE_MAX_LEN
            && bytes
                .iter()
                .all(|&b| b.is_ascii_lowercase() || b == b'_' || b == b'-')
        {
            self.encode_interned(out, bytes);
            return;
        }

        // JWT
        if part.starts_with("ey") && self.try_encode_jwt(out, part) {
            return;
        }

        // base64-shaped fallback; a multiple-of-4 length decodes in full
        // groups, so re-encoding is exact
        if bytes.len() >= BASE64_MIN_LEN && bytes.len() % 4 == 0 {
            if let Ok(decoded) = base64url::decode(part) {
                encode_base64(out, &decoded);
                return;
            }
        }

        // literal string
        encode_literal(out, bytes);
    }

    fn encode_interned(&mut self, out: &mut Vec<u8>, bytes: &[u8]) {
        let ordinal = self.store.intern(bytes);
        if ordinal < 64 {
            out.push(ControlByte::SmallOrdinal(ordinal as u8).encode());
        } else {
            let width = varint::width_for(ordinal as u64);
            out.push(ControlByte::WideOrdinal { width: width as u8 }.encode());
            varint::write(out, width, ordinal as u64);
        }
    }

    /// Encode a JWT-shaped token as an encapsulated record, or report that
    /// the token does not qualify without emitting anything.
    ///
    /// The sub-records reuse the regular record forms under a fixed policy:
    /// header always interned, payload and signature always raw
    /// length-prefixed.
    fn try_encode_jwt(&mut self, out: &mut Vec<u8>, part: &str) -> bool {
        let mut segments = part.split('.');
        let (Some(h), Some(p), Some(s), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return false;
        };
        let (Some(header), Some(payload), Some(signature)) =
            (jwt_segment(h), jwt_segment(p), jwt_segment(s))
        else {
            return false;
        };

        out.push(ControlByte::Encapsulated { id: ENCAP_JWT }.encode());
        self.encode_interned(out, &header);
        encode_literal(out, &payload);
        encode_literal(out, &signature);
        true
    }

    /// Decode one record into the token's byte form.
    fn decode_token(&self, reader: &mut Reader) -> Result<Vec<u8>> {
        self.decode_record(reader, true)
    }

    /// Decode one record, optionally admitting encapsulated values.
    ///
    /// The encoder's sub-policy only ever emits interned or length-prefixed
    /// records inside an encapsulated value, so a nested encapsulation tag
    /// marks a corrupt stream; rejecting it here also bounds the decode
    /// recursion depth.
    fn decode_record(&self, reader: &mut Reader, allow_encapsulated: bool) -> Result<Vec<u8>> {
        match ControlByte::decode(reader.byte()?)? {
            ControlByte::SmallInt(value) => Ok(value.to_string().into_bytes()),
            ControlByte::SmallOrdinal(ordinal) => {
                Ok(self.store.get(ordinal as u32)?.to_vec())
            }
            ControlByte::SmallLength(length) => {
                Ok(reader.take(length as usize)?.to_vec())
            }
            ControlByte::WideInt { width } => {
                let value = varint::read(reader.take(width as usize)?);
                Ok(value.to_string().into_bytes())
            }
            ControlByte::WideLength { width } => {
                let length = varint::read(reader.take(width as usize)?);
                Ok(reader.take(checked_len(length)?)?.to_vec())
            }
            ControlByte::Separator { index } => {
                Ok(vec![RESERVED_SEPARATORS[index as usize]])
            }
            ControlByte::WideOrdinal { width } => {
                let ordinal = varint::read(reader.take(width as usize)?);
                let ordinal = u32::try_from(ordinal).map_err(|_| {
                    MurlError::CorruptStream("interned ordinal exceeds 32 bits".into())
                })?;
                Ok(self.store.get(ordinal)?.to_vec())
            }
            ControlByte::Encapsulated { id: ENCAP_JWT } if allow_encapsulated => {
                self.decode_jwt(reader)
            }
            ControlByte::Encapsulated { id: ENCAP_JWT } => Err(MurlError::CorruptStream(
                "nested encapsulation inside an encapsulated value".into(),
            )),
            ControlByte::Encapsulated { id } => {
                Err(MurlError::UnknownEncapsulation(id))
            }
            ControlByte::Base64 { width } => {
                let length = varint::read(reader.take(width as usize)?);
                let decoded = reader.take(checked_len(length)?)?;
                Ok(base64url::encode(decoded).into_bytes())
            }
        }
    }

    /// Reassemble a textual JWT from three encapsulated sub-records.
    fn decode_jwt(&self, reader: &mut Reader) -> Result<Vec<u8>> {
        let header = self.decode_record(reader, false)?;
        let payload = self.decode_record(reader, false)?;
        let signature = self.decode_record(reader, false)?;

        let mut out = base64url::encode(&header).into_bytes();
        out.push(b'.');
        out.extend_from_slice(base64url::encode(&payload).as_bytes());
        out.push(b'.');
        out.extend_from_slice(base64url::encode(&signature).as_bytes());
        Ok(out)
    }
}

fn separator_index(byte: u8) -> Option<u8> {
    RESERVED_SEPARATORS
        .iter()
        .position(|&sep| sep == byte)
        .map(|index| index as u8)
}

/// Decode a JWT segment, accepting it only when re-encoding reproduces the
/// segment exactly; trailing bits that base64url decoding discards would
/// otherwise break the round trip.
fn jwt_segment(segment: &str) -> Option<Vec<u8>> {
    if segment.len() < JWT_SEGMENT_MIN_LEN {
        return None;
    }
    let bytes = base64url::decode(segment).ok()?;
    if base64url::encode(&bytes) != segment {
        return None;
    }
    Some(bytes)
}

fn encode_integer(out: &mut Vec<u8>, value: u64) {
    if value < 64 {
        out.push(ControlByte::SmallInt(value as u8).encode());
    } else {
        let width = varint::width_for(value);
        out.push(ControlByte::WideInt { width: width as u8 }.encode());
        varint::write(out, width, value);
    }
}

fn encode_literal(out: &mut Vec<u8>, bytes: &[u8]) {
    let length = bytes.len() as u64;
    if length < 64 {
        out.push(ControlByte::SmallLength(length as u8).encode());
    } else {
        let width = varint::width_for(length);
        out.push(ControlByte::WideLength { width: width as u8 }.encode());
        varint::write(out, width, length);
    }
    out.extend_from_slice(bytes);
}

fn encode_base64(out: &mut Vec<u8>, decoded: &[u8]) {
    let length = decoded.len() as u64;
    let width = varint::width_for(length);
    out.push(ControlByte::Base64 { width: width as u8 }.encode());
    varint::write(out, width, length);
    out.extend_from_slice(decoded);
}

fn checked_len(length: u64) -> Result<usize> {
    usize::try_from(length)
        .map_err(|_| MurlError::CorruptStream("payload length exceeds address space".into()))
}

/// Bounds-checked cursor over an encoded stream.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.buf.len() - self.pos;
        if n > available {
            return Err(MurlError::TruncatedStream {
                needed: n,
                available,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }
}
