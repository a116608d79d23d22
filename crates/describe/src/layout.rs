//! Column-tracking plain-text layout.

use crate::token::{Element, Token};

const LIST_MARKER: &str = "\n *";
const LIST_INDENT: &str = "   ";

/// Accumulates rendered text while tokens are fed in one at a time.
///
/// All state that crosses token boundaries lives here: the prefix written at
/// the start of wrapped lines, how many columns of the current line are used,
/// the links seen so far, and whether the next text run owes a footnote
/// marker.
#[derive(Debug, Clone)]
pub struct Layout {
    out: String,
    width: usize,
    line_prefix: &'static str,
    columns: usize,
    links: Vec<String>,
    pending_footnote: bool,
    seen_paragraph: bool,
}
impl Layout {
    pub fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            width,
            line_prefix: "",
            columns: 0,
            links: Vec::new(),
            pending_footnote: false,
            seen_paragraph: false,
        }
    }

    pub fn feed(&mut self, token: &Token) {
        match token {
            Token::Start(Element::Paragraph) => {
                if self.seen_paragraph {
                    self.out.push('\n');
                }
                self.seen_paragraph = true;
                self.line_prefix = "";
                self.columns = 0;
            },
            Token::Start(Element::ListItem) => {
                self.out.push_str(LIST_MARKER);
                self.line_prefix = LIST_INDENT;
                self.columns = 0;
            },
            Token::Start(Element::Link(Some(href))) => {
                self.links.push(href.clone());
                self.pending_footnote = true;
            },
            Token::End(Element::Paragraph | Element::UnorderedList | Element::OrderedList) => self.out.push('\n'),
            Token::Text(text) => self.text(text),
            _ => {},
        }
    }

    /// Appends the footnote list and returns the rendered text.
    pub fn finish(mut self) -> String {
        if !self.links.is_empty() {
            self.out.push('\n');
            for (i, link) in self.links.iter().enumerate() {
                self.out.push_str(&format!("[{i}] {link}\n"));
            }
        }
        self.out
    }

    /// Word-wraps a run of text onto the current line.
    ///
    /// Lines break at the last space that fits. Without one the break lands
    /// at index 0: an empty line is written and the first character is dropped
    /// as though it were the separator. The first break continues the line that
    /// was already open, so it gets no prefix; every line after it does.
    fn text(&mut self, text: &str) {
        let owned;
        let mut rest = text;
        if self.pending_footnote {
            self.pending_footnote = false;
            owned = format!("{text}[{}]", self.links.len() - 1);
            rest = &owned;
        }
        let mut budget = self.width.saturating_sub(self.line_prefix.len() + self.columns);
        let mut length = rest.chars().count();
        let mut wrapped = false;
        while length > budget {
            let (at, separator) = break_point(rest, budget);
            if wrapped {
                self.out.push_str(self.line_prefix);
            } else {
                wrapped = true;
                budget = self.width.saturating_sub(self.line_prefix.len());
            }
            self.out.push_str(&rest[..at]);
            self.out.push('\n');
            rest = &rest[at + separator..];
            length = rest.chars().count();
            self.columns = 0;
        }
        if wrapped {
            self.out.push_str(self.line_prefix);
        }
        self.out.push_str(rest);
        self.columns += length;
    }
}

/// Returns the byte index of the last space among the first `budget`
/// characters (0 if there is none) and the byte length of the character at
/// that index.
fn break_point(text: &str, budget: usize) -> (usize, usize) {
    let at = text
        .char_indices()
        .take(budget)
        .filter(|(_, c)| *c == ' ')
        .last()
        .map_or(0, |(i, _)| i);
    let separator = text[at..].chars().next().map_or(0, char::len_utf8);
    (at, separator)
}
