use std::fmt::Write as _;

use crate::render::{Presentation, ResultView};

/// Values typed into the form, written back so a re-rendered page keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEcho {
    pub text: String,
    pub top_n: String,
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " hidden"
    }
}

/// Result area markup. The reference section is omitted entirely when there
/// are no documents.
pub fn result_fragment(view: &ResultView) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        "<div id=\"scoreCard\" class=\"{}\"><span id=\"scoreValue\">{}</span></div>",
        view.card_classes(),
        escape(&view.score_text),
    );

    if let Some(links) = &view.references {
        out.push_str("<section id=\"snippetsSection\"><div id=\"snippetsList\">");
        for link in links {
            let _ = write!(
                out,
                "<a class=\"document-link\" href=\"{}\" target=\"{}\" rel=\"{}\">\
                 <span class=\"link-icon\">\u{1F517}</span><span>{}</span></a>",
                escape(&link.href),
                link.target(),
                link.rel(),
                escape(&link.display_text()),
            );
        }
        out.push_str("</div></section>");
    }

    let _ = write!(
        out,
        "<p id=\"reasonText\">{}</p><blockquote id=\"articleExcerpt\">{}</blockquote>",
        escape(&view.reason),
        escape(&view.excerpt),
    );

    out
}

const SCROLL_SCRIPT: &str = "<script>document.getElementById('results')\
.scrollIntoView({ behavior: 'smooth', block: 'nearest' });</script>";

const LOADING_SCRIPT: &str = "<script>document.getElementById('checkForm')\
.addEventListener('submit', function () {\
document.getElementById('loading').hidden = false;\
document.getElementById('results').hidden = true;\
document.getElementById('errorMessage').hidden = true;\
});</script>";

/// Whole check page for one presentation.
pub fn page(form: &FormEcho, presentation: &Presentation) -> String {
    let mut out = String::from(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Credibility Check</title></head><body>",
    );

    let _ = write!(
        out,
        "<form id=\"checkForm\" method=\"post\" action=\"/check\">\
         <textarea id=\"text\" name=\"text\">{}</textarea>\
         <input id=\"topN\" name=\"topN\" type=\"number\" min=\"1\" value=\"{}\">\
         <button type=\"submit\">Check</button></form>",
        escape(&form.text),
        escape(&form.top_n),
    );

    let _ = write!(
        out,
        "<div id=\"loading\"{}>Checking...</div>",
        hidden(presentation.loading)
    );

    let _ = write!(
        out,
        "<div id=\"errorMessage\"{}>{}</div>",
        hidden(presentation.error.is_some()),
        escape(presentation.error.as_deref().unwrap_or_default()),
    );

    let body = presentation
        .result
        .as_ref()
        .map(result_fragment)
        .unwrap_or_default();
    let _ = write!(
        out,
        "<section id=\"results\"{}>{}</section>",
        hidden(presentation.result.is_some()),
        body
    );

    out.push_str(LOADING_SCRIPT);
    if presentation.scroll_to_result {
        out.push_str(SCROLL_SCRIPT);
    }
    out.push_str("</body></html>");
    out
}
