use fdcl_index::App;
use tracing::instrument;

use crate::layout::Layout;
use crate::options::RenderOptions;
use crate::token::{Truncation, tokenize};

/// The outcome of rendering a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Set if the markup was malformed and rendering stopped early. `text`
    /// then holds everything rendered up to that point.
    pub truncation: Option<Truncation>,
}
impl Rendered {
    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }
}

/// Renders description markup to fixed-width plain text.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}
impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders markup, silently dropping anything after the first markup error.
    pub fn render(&self, markup: &str) -> String {
        self.render_checked(markup).text
    }

    /// Renders markup, reporting whether it had to stop early.
    ///
    /// Links recorded before the problem still get their footnotes.
    #[instrument(skip(self, markup), fields(markup_size = markup.len(), width = self.options.width))]
    pub fn render_checked(&self, markup: &str) -> Rendered {
        let mut layout = Layout::new(self.options.width);
        let mut truncation = None;
        for token in tokenize(markup) {
            match token {
                Ok(token) => layout.feed(&token),
                Err(problem) => {
                    tracing::warn!(position = problem.position, reason = %problem.reason, "description markup truncated");
                    truncation = Some(problem);
                    break;
                },
            }
        }
        Rendered {
            text: layout.finish(),
            truncation,
        }
    }

    /// Renders the long description of an app.
    pub fn app(&self, app: &App) -> String {
        self.render(&app.description)
    }
}

/// Renders description markup with the default 80-column width.
///
/// ```rust
/// let text = fdcl_describe::render(r#"<p>See <a href="http://x">here</a>.</p>"#);
/// assert_eq!(text, "See here[0].\n\n[0] http://x\n");
/// ```
pub fn render(markup: &str) -> String {
    Renderer::default().render(markup)
}
