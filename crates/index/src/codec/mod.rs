//! Scalar value types with a text encoding.
//!
//! Each type decodes via [`FromStr`](std::str::FromStr) and encodes via
//! [`Display`](std::fmt::Display). Decoding failures are
//! [`ErrorKind::Format`](crate::error::ErrorKind::Format) errors.

mod bytes;
mod comma;
mod date;
mod hash;

pub use self::bytes::HexBytes;
pub use self::comma::CommaList;
pub use self::date::CalendarDate;
pub use self::hash::Hash;
