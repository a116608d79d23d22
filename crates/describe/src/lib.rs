//! Plain-text rendering of F-Droid app descriptions.
//!
//! Descriptions use a small HTML-like vocabulary: paragraphs, ordered and
//! unordered lists, list items and links. [`render`] lays them out for a
//! terminal, wrapping at 80 columns, marking list items with ` *`, and
//! turning links into numbered footnotes listed after the text.
//!
//! Rendering never fails. Malformed markup cuts the output short at the first
//! problem; use [`Renderer::render_checked`] to find out when that happened.

mod layout;
mod options;
mod render;
mod token;

pub use crate::layout::Layout;
pub use crate::options::{DEFAULT_WIDTH, RenderOptions};
pub use crate::render::{Rendered, Renderer, render};
pub use crate::token::{Element, Token, Tokens, Truncation, tokenize};
