// crates/multisz-core/src/wide.rs
//
// UTF-16 text layer over the unit codec: the REG_MULTI_SZ shape of the
// layout, where every element is a Windows wide string.

use crate::codec;
use crate::error::Result;

/// Flatten strings into a double-NUL-terminated UTF-16 buffer.
///
/// Same contract as [`codec::encode`]: no empty strings, input order
/// preserved, two NULs for the empty list. UTF-16 never produces a zero
/// code unit for a non-NUL scalar, so any `str` without embedded `'\0'`
/// is a valid element as-is.
pub fn encode_wide<S: AsRef<str>>(strings: &[S]) -> Result<Vec<u16>> {
    let units: Vec<Vec<u16>> = strings
        .iter()
        .map(|s| s.as_ref().encode_utf16().collect())
        .collect();

    codec::encode(&units)
}

/// Parse a double-NUL-terminated UTF-16 buffer into owned `String`s.
///
/// An element that is not valid UTF-16 (a lone surrogate) is reported as a
/// `Utf16` error; use [`decode_wide_lossy`] to salvage such buffers.
pub fn decode_wide(flat: &[u16]) -> Result<Vec<String>> {
    let elems = codec::decode(flat)?;

    let mut out = Vec::with_capacity(elems.len());
    for e in &elems {
        out.push(String::from_utf16(e)?);
    }

    Ok(out)
}

/// Like [`decode_wide`], but invalid UTF-16 becomes U+FFFD instead of
/// failing. Format errors on the buffer itself are still reported.
pub fn decode_wide_lossy(flat: &[u16]) -> Result<Vec<String>> {
    let elems = codec::decode(flat)?;

    Ok(elems.iter().map(|e| String::from_utf16_lossy(e)).collect())
}
