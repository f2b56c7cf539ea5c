// crates/multisz-core/src/codec.rs
//
// Double-NUL-terminated string list codec, unit level.
//
// Flattened layout:
//   element[0] NUL element[1] NUL ... element[n-1] NUL NUL
// Every element is one or more non-NUL units. There is no length field and
// no separator character; the zero unit carries all structure, so it may
// never occur inside an element. An empty list flattens to exactly two NULs.

use crate::error::{MultiSzError, Result};
use crate::unit::Unit;
use crate::validate::validate_elements;

/// Exact unit count of the flattened form of `elems`.
///
/// `sum(len + 1) + 1`: one NUL after each element, plus the closing NUL.
/// The empty list flattens to two NULs, so its length is 2.
///
/// Pure length math; empty elements are not rejected here (that is
/// [`validate_elements`]'s job, and [`encode`] runs it first).
pub fn required_len<U, S: AsRef<[U]>>(elems: &[S]) -> Result<usize> {
    if elems.is_empty() {
        return Ok(2);
    }

    let mut total: usize = 0;
    for s in elems {
        // len + 1 cannot overflow (a slice is at most isize::MAX units);
        // the running sum can, since one slice may be listed many times.
        total = total
            .checked_add(s.as_ref().len() + 1)
            .ok_or_else(|| MultiSzError::Validation("required_len: length overflow".into()))?;
    }

    total = total
        .checked_add(1)
        .ok_or_else(|| MultiSzError::Validation("required_len: length overflow".into()))?;

    Ok(total)
}

/// Flatten `elems` into one double-NUL-terminated unit buffer.
///
/// Each element's units are copied in input order, each followed by one NUL,
/// and one final NUL closes the sequence. Empty input flattens to `[NUL, NUL]`.
///
/// Requirements:
/// - No element may be empty; the first offender is reported as a
///   `Validation` error before anything is allocated.
/// - Elements must not contain the NUL unit. The layout cannot represent
///   them and they are not scanned for: an interior NUL desynchronizes the
///   buffer and [`decode`] will cut the element short at it.
///
/// The output length is known before any copying starts ([`required_len`]),
/// so the buffer is allocated once and the copy loop never reallocates.
pub fn encode<U: Unit, S: AsRef<[U]>>(elems: &[S]) -> Result<Vec<U>> {
    validate_elements(elems)?;

    // Two NULs for the empty list. A single NUL would already read back as
    // empty, but consumers of this layout uniformly expect two.
    if elems.is_empty() {
        return Ok(vec![U::NUL; 2]);
    }

    let total = required_len(elems)?;
    let mut out: Vec<U> = Vec::with_capacity(total);

    for s in elems {
        out.extend_from_slice(s.as_ref());
        out.push(U::NUL);
    }
    out.push(U::NUL);

    debug_assert_eq!(out.len(), total);
    Ok(out)
}

/// Parse a double-NUL-terminated unit buffer back into owned elements.
///
/// The empty slice (no buffer at all) and any buffer whose first unit is NUL
/// (the flattened empty list, including the degenerate single-NUL form) both
/// read back as the empty list; one check covers both. Otherwise elements
/// are cut at each NUL until two NULs appear back to back. Units after that
/// closing pair are ignored.
///
/// Every scan is bounded by the slice, so malformed input is an error, never
/// an out-of-bounds read:
/// - a buffer ending mid-element ("unterminated element");
/// - a buffer ending right after an element's NUL, with no room for the
///   closing one ("missing final terminator").
///
/// Decoded elements are independent owned copies; the input buffer can be
/// dropped or rewritten afterwards. No decoded element is ever empty: a NUL
/// at an element's first unit ends the loop instead.
pub fn decode<U: Unit>(flat: &[U]) -> Result<Vec<Vec<U>>> {
    let mut elems = Vec::new();

    if flat.is_empty() {
        return Ok(elems);
    }

    let mut pos = 0usize;
    while !flat[pos].is_nul() {
        let mut end = pos;
        while end < flat.len() && !flat[end].is_nul() {
            end += 1;
        }
        if end == flat.len() {
            return Err(MultiSzError::Format(format!(
                "unterminated element at unit {pos}"
            )));
        }

        elems.push(flat[pos..end].to_vec());

        // Step past this element's NUL. The closing NUL must still be in
        // bounds, or the buffer ends without its terminating pair.
        pos = end + 1;
        if pos == flat.len() {
            return Err(MultiSzError::Format(format!(
                "missing final terminator: buffer ends at unit {pos}"
            )));
        }
    }

    Ok(elems)
}
