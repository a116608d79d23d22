#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: usize = 80;

/// Options controlling the plain-text layout of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RenderOptions {
    /// Maximum number of columns per line, including the list indent.
    pub width: usize,
}
impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH }
    }
}
