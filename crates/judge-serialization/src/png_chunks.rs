// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
PNG chunk container handling.

The PNG format is a fixed 8-byte signature followed by a sequence of chunks,
each framed as a big-endian u32 data length, a 4-byte ASCII type, the data
bytes, and a CRC-32 over type + data. This module splits a PNG byte stream
into its chunk list, re-encodes a chunk list back into a byte stream, and
encodes/decodes `tEXt` chunks (latin-1 keyword, NUL separator, text payload).

Only the container framing is understood here; pixel data stays opaque. The
stream must start with an `IHDR` chunk and end with the `IEND` terminator,
which is located and validated explicitly rather than assumed positionally.
*/

use byteorder::{BigEndian, ByteOrder};

use crate::{SerializationError, SerializationResult};

/// Fixed first 8 bytes of every PNG stream.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Chunk type of the image header, required first chunk.
pub const IHDR_CHUNK_TYPE: [u8; 4] = *b"IHDR";

/// Chunk type of the stream terminator, required last chunk.
pub const IEND_CHUNK_TYPE: [u8; 4] = *b"IEND";

/// Chunk type of textual metadata chunks.
pub const TEXT_CHUNK_TYPE: [u8; 4] = *b"tEXt";

/// Bytes of framing around each chunk's data: u32 length + 4-byte type +
/// u32 CRC.
const CHUNK_FRAMING_BYTE_COUNT: usize = 12;

/// Longest keyword a `tEXt` chunk may carry, per the PNG specification.
const MAX_TEXT_KEYWORD_BYTES: usize = 79;

/// One chunk of a PNG stream: its 4-byte type and its raw data. Length and
/// CRC are framing, recomputed on encode rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngChunk {
    pub chunk_type: [u8; 4],
    pub data: Vec<u8>,
}

impl PngChunk {
    pub fn new(chunk_type: [u8; 4], data: Vec<u8>) -> Self {
        PngChunk { chunk_type, data }
    }

    /// Whether this is a `tEXt` metadata chunk.
    pub fn is_text(&self) -> bool {
        self.chunk_type == TEXT_CHUNK_TYPE
    }

    /// Whether this is the `IEND` stream terminator.
    pub fn is_terminator(&self) -> bool {
        self.chunk_type == IEND_CHUNK_TYPE
    }
}

/// Splits a PNG byte stream into its chunk list.
///
/// Verifies the signature, the per-chunk CRCs, that the first chunk is
/// `IHDR`, and that an `IEND` terminator is present. Bytes after `IEND` are
/// ignored. Fails with [`SerializationError::InvalidPng`] on any framing
/// violation.
pub fn extract_chunks(bytes: &[u8]) -> SerializationResult<Vec<PngChunk>> {
    if bytes.len() < PNG_SIGNATURE.len() || bytes[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
        return Err(SerializationError::InvalidPng(
            "Missing PNG signature".to_string(),
        ));
    }

    let mut chunks: Vec<PngChunk> = Vec::new();
    let mut position = PNG_SIGNATURE.len();

    while position < bytes.len() {
        if bytes.len() - position < CHUNK_FRAMING_BYTE_COUNT {
            return Err(SerializationError::InvalidPng(format!(
                "Truncated chunk framing at byte {}",
                position
            )));
        }

        let data_length = BigEndian::read_u32(&bytes[position..position + 4]) as usize;
        let mut chunk_type = [0u8; 4];
        chunk_type.copy_from_slice(&bytes[position + 4..position + 8]);

        let data_start = position + 8;
        let data_end = data_start + data_length;
        if data_end + 4 > bytes.len() {
            return Err(SerializationError::InvalidPng(format!(
                "Chunk at byte {} declares {} data bytes but the stream is only {} bytes long",
                position,
                data_length,
                bytes.len()
            )));
        }

        let data = bytes[data_start..data_end].to_vec();
        let declared_crc = BigEndian::read_u32(&bytes[data_end..data_end + 4]);
        let computed_crc = crc32(&chunk_type, &data);
        if declared_crc != computed_crc {
            return Err(SerializationError::InvalidPng(format!(
                "CRC mismatch in chunk at byte {}",
                position
            )));
        }

        if chunks.is_empty() && chunk_type != IHDR_CHUNK_TYPE {
            return Err(SerializationError::InvalidPng(
                "First chunk is not IHDR".to_string(),
            ));
        }

        let is_terminator = chunk_type == IEND_CHUNK_TYPE;
        chunks.push(PngChunk::new(chunk_type, data));
        if is_terminator {
            return Ok(chunks);
        }
        position = data_end + 4;
    }

    Err(SerializationError::InvalidPng(
        "Stream ended without an IEND terminator".to_string(),
    ))
}

/// Re-encodes a chunk list into a PNG byte stream, recomputing every chunk's
/// length and CRC framing.
pub fn encode_chunks(chunks: &[PngChunk]) -> Vec<u8> {
    let total_data: usize = chunks.iter().map(|chunk| chunk.data.len()).sum();
    let mut out: Vec<u8> =
        Vec::with_capacity(PNG_SIGNATURE.len() + total_data + chunks.len() * CHUNK_FRAMING_BYTE_COUNT);
    out.extend_from_slice(&PNG_SIGNATURE);

    let mut scratch = [0u8; 4];
    for chunk in chunks {
        BigEndian::write_u32(&mut scratch, chunk.data.len() as u32);
        out.extend_from_slice(&scratch);
        out.extend_from_slice(&chunk.chunk_type);
        out.extend_from_slice(&chunk.data);
        BigEndian::write_u32(&mut scratch, crc32(&chunk.chunk_type, &chunk.data));
        out.extend_from_slice(&scratch);
    }
    out
}

/// Builds a `tEXt` chunk from a keyword and a text payload.
///
/// The keyword must be 1-79 bytes and NUL-free per the PNG specification.
/// The payload is stored as UTF-8; both ends of the round-trip are this
/// codec, so no latin-1 transcoding is needed.
pub fn encode_text_chunk(keyword: &str, text: &str) -> SerializationResult<PngChunk> {
    if keyword.is_empty() || keyword.len() > MAX_TEXT_KEYWORD_BYTES {
        return Err(SerializationError::Encode(format!(
            "tEXt keyword must be 1-{} bytes, got {}",
            MAX_TEXT_KEYWORD_BYTES,
            keyword.len()
        )));
    }
    if keyword.bytes().any(|byte| byte == 0) {
        return Err(SerializationError::Encode(
            "tEXt keyword must not contain NUL bytes".to_string(),
        ));
    }

    let mut data = Vec::with_capacity(keyword.len() + 1 + text.len());
    data.extend_from_slice(keyword.as_bytes());
    data.push(0);
    data.extend_from_slice(text.as_bytes());
    Ok(PngChunk::new(TEXT_CHUNK_TYPE, data))
}

/// Splits a `tEXt` chunk into its keyword and text payload.
///
/// Foreign chunks (written by other software) may carry arbitrary bytes;
/// both halves are decoded lossily so that an undecodable foreign chunk can
/// be inspected and skipped instead of aborting an import.
pub fn decode_text_chunk(chunk: &PngChunk) -> SerializationResult<(String, String)> {
    if !chunk.is_text() {
        return Err(SerializationError::InvalidPng(
            "Chunk is not of type tEXt".to_string(),
        ));
    }
    let separator = chunk
        .data
        .iter()
        .position(|&byte| byte == 0)
        .ok_or_else(|| {
            SerializationError::InvalidPng("tEXt chunk has no keyword terminator".to_string())
        })?;
    let keyword = String::from_utf8_lossy(&chunk.data[..separator]).into_owned();
    let text = String::from_utf8_lossy(&chunk.data[separator + 1..]).into_owned();
    Ok((keyword, text))
}

/// CRC-32 (ISO 3309 / ITU-T V.42) over a chunk's type and data, as required
/// by the PNG chunk framing.
fn crc32(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = 0xffff_ffffu32;
    for &byte in chunk_type.iter().chain(data.iter()) {
        crc = CRC_TABLE[((crc ^ byte as u32) & 0xff) as usize] ^ (crc >> 8);
    }
    crc ^ 0xffff_ffff
}

const CRC_TABLE: [u32; 256] = build_crc_table();

const fn build_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 {
                0xedb8_8320 ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}
