// crates/multisz-core/src/unit.rs

/// A fixed-width code unit whose zero value is the reserved terminator.
///
/// The flattened layout works for any width as long as both sides agree on
/// one and NUL never occurs inside an element: `u16` is the Windows wide
/// character (the REG_MULTI_SZ case), `u32` the usual Unix `wchar_t`, and
/// `u8` the byte-oriented variant of the same layout.
pub trait Unit: Copy + Eq {
    /// Terminates each element; doubled back to back, terminates the sequence.
    const NUL: Self;

    #[inline]
    fn is_nul(self) -> bool {
        self == Self::NUL
    }
}

impl Unit for u8 {
    const NUL: u8 = 0;
}

impl Unit for u16 {
    const NUL: u16 = 0;
}

impl Unit for u32 {
    const NUL: u32 = 0;
}
