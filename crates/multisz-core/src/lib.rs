pub mod error;
pub mod validate;

pub mod codec;
pub mod unit;
pub mod wide;

pub use crate::codec::{decode, encode, required_len};
pub use crate::error::{MultiSzError, Result};
pub use crate::unit::Unit;
pub use crate::validate::validate_elements;
pub use crate::wide::{decode_wide, decode_wide_lossy, encode_wide};
