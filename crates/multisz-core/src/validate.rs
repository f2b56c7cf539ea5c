use crate::error::{MultiSzError, Result};

pub fn validate_elements<U, S: AsRef<[U]>>(elems: &[S]) -> Result<()> {
    // An empty element would terminate the flattened sequence early: a
    // decoder stops at its leading NUL and silently drops everything after.
    // Checked on every call, in every build profile.
    for (idx, s) in elems.iter().enumerate() {
        if s.as_ref().is_empty() {
            return Err(MultiSzError::Validation(format!(
                "empty element at index {idx}: an empty string terminates the sequence"
            )));
        }
    }

    Ok(())
}
