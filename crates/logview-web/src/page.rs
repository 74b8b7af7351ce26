//! HTML rendering of the log page.

use handlebars::Handlebars;
use logview_core::{Error, Result};
use serde::Serialize;

const LOGS_TEMPLATE: &str = "logs";

/// Data shown on the log page.
#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    /// Lines to display, oldest first.
    pub logs: &'a [String],
    /// Line limit the page was requested with; reused when polling.
    pub limit: i64,
    /// Name of the container being watched.
    pub container: &'a str,
}

/// Renders the log page from a template compiled at startup.
pub struct PageRenderer {
    hbs: Handlebars<'static>,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer").finish_non_exhaustive()
    }
}

impl PageRenderer {
    /// Compile the built-in page template.
    pub fn new() -> Result<Self> {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_template_string(LOGS_TEMPLATE, include_str!("../templates/logs.hbs"))
            .map_err(|e| Error::Template(format!("Failed to compile page template: {e}")))?;
        Ok(Self { hbs })
    }

    /// Render the page. Log text is HTML-escaped.
    pub fn render(&self, view: &PageView<'_>) -> Result<String> {
        self.hbs
            .render(LOGS_TEMPLATE, view)
            .map_err(|e| Error::Template(format!("Failed to render page: {e}")))
    }
}
