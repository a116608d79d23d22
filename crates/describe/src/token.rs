//! Tokenization of description markup.

use std::borrow::Cow;

use derive_more::Display;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Elements the renderer gives meaning to. Everything else is [`Other`](Element::Other).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Paragraph,
    UnorderedList,
    OrderedList,
    ListItem,
    /// A hyperlink, with its `href` when opening. Closing links never carry one.
    Link(Option<String>),
    Other,
}
impl Element {
    fn from_name(name: &[u8]) -> Self {
        match name {
            b"p" => Self::Paragraph,
            b"ul" => Self::UnorderedList,
            b"ol" => Self::OrderedList,
            b"li" => Self::ListItem,
            b"a" => Self::Link(None),
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Start(Element),
    End(Element),
    /// A run of character data with entities decoded.
    Text(String),
}

/// Where and why tokenization stopped early.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("{reason} at byte {position}")]
pub struct Truncation {
    /// Byte offset into the markup at which the problem was detected.
    pub position: u64,
    pub reason: String,
}

/// Iterator over the [`Token`]s of a markup string.
///
/// Yields at most one error, after which iteration ends. Self-closing
/// elements produce a start token immediately followed by an end token.
/// Markup that ends with elements still open is an error.
pub struct Tokens<'a> {
    reader: Reader<&'a [u8]>,
    depth: usize,
    done: bool,
}
impl<'a> Tokens<'a> {
    fn new(markup: &'a str) -> Self {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().expand_empty_elements = true;
        Self {
            reader,
            depth: 0,
            done: false,
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, Truncation> {
        loop {
            let event = self.reader.read_event().map_err(|error| self.truncation(error))?;
            return Ok(Some(match event {
                Event::Start(start) => {
                    if !is_name(start.name().as_ref()) {
                        return Err(self.stop("expected element name after <"));
                    }
                    self.depth += 1;
                    Token::Start(self.element(&start)?)
                },
                Event::End(end) => {
                    self.depth = self.depth.saturating_sub(1);
                    Token::End(Element::from_name(end.local_name().as_ref()))
                },
                Event::Text(text) => Token::Text(text.unescape().map_err(|e| self.truncation(e))?.into_owned()),
                Event::CData(cdata) => {
                    let text = std::str::from_utf8(&cdata).map_err(|e| self.truncation(e))?;
                    Token::Text(text.to_string())
                },
                Event::Eof if self.depth > 0 => return Err(self.stop("unexpected end of markup")),
                Event::Eof => return Ok(None),
                // Comments, processing instructions, declarations.
                _ => continue,
            }));
        }
    }

    fn element(&self, start: &BytesStart<'_>) -> Result<Element, Truncation> {
        let element = Element::from_name(start.local_name().as_ref());
        if !matches!(element, Element::Link(_)) {
            return Ok(element);
        }
        for attribute in start.attributes() {
            let attribute = attribute.map_err(|e| self.truncation(e))?;
            if attribute.key.local_name().as_ref() == b"href" {
                let href: Cow<'_, str> = attribute.unescape_value().map_err(|e| self.truncation(e))?;
                return Ok(Element::Link(Some(href.into_owned())));
            }
        }
        Ok(element)
    }

    fn truncation(&self, error: impl std::error::Error) -> Truncation {
        self.stop(error.to_string())
    }

    fn stop(&self, reason: impl Into<String>) -> Truncation {
        Truncation {
            position: self.reader.buffer_position(),
            reason: reason.into(),
        }
    }
}

/// Whether `name` can be an element name: it must start with a letter, `_`,
/// `:` or a non-ASCII byte.
fn is_name(name: &[u8]) -> bool {
    name.first()
        .is_some_and(|&b| b.is_ascii_alphabetic() || matches!(b, b'_' | b':') || !b.is_ascii())
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, Truncation>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.next_token().transpose();
        self.done = !matches!(next, Some(Ok(_)));
        next
    }
}

/// Splits description markup into tokens.
///
/// ```rust
/// use fdcl_describe::{Element, Token, tokenize};
/// let tokens: Vec<_> = tokenize("<p>Hi</p>").collect::<Result<_, _>>().unwrap();
/// assert_eq!(
///     tokens,
///     [
///         Token::Start(Element::Paragraph),
///         Token::Text("Hi".to_string()),
///         Token::End(Element::Paragraph),
///     ]
/// );
/// ```
pub fn tokenize(markup: &str) -> Tokens<'_> {
    Tokens::new(markup)
}
