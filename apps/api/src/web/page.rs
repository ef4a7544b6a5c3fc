//! Server-rendered HTML for the headline form and the scorecard.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::errors::AppError;
use crate::models::headline::MAX_HEADLINES;
use crate::scoring::comparator::Comparison;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f8fafc; color: #0f172a; margin: 0; }
main { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
label { display: block; margin: .5rem 0 .25rem; font-weight: 600; }
input[type=text] { width: 100%; padding: .5rem; box-sizing: border-box; }
button { margin-top: 1rem; padding: .6rem 1.2rem; font-weight: 600; }
.banner { padding: .75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.banner.success { background: #dcfce7; }
.banner.warning { background: #fef9c3; }
.banner.error { background: #fee2e2; }
.status { font-style: italic; color: #475569; }
table { border-collapse: collapse; width: 100%; background: #fff; }
th, td { border: 1px solid #e2e8f0; padding: .4rem .6rem; text-align: left; vertical-align: top; }
tr.top-row td { background: #ffd700; }
details { margin: 1rem 0; background: #fff; border: 1px solid #e2e8f0; padding: .5rem 1rem; }
.markdown table { width: auto; }
"#;

const ABOUT: &str = r#"<section class="about">
<h3>About this tool</h3>
<p>This prototype scores headlines with a <strong>heuristic model</strong>: a large language model
simulating how a skilled copywriter would judge them. It does not use live ad data.</p>
<ul>
<li>Compare up to <strong>5 headlines</strong> side by side</li>
<li>See attribute scores like Clarity, Curiosity and Emotional Pull</li>
<li>Identify the top-rated headline for CTR potential</li>
<li>Expand the full scoring analysis and CTA-style suggestions for the top headline</li>
</ul>
</section>"#;

/// What to show below the form.
pub enum Outcome<'a> {
    Empty,
    Failed(&'a AppError),
    Compared(&'a Comparison),
}

/// Renders the whole page. `fields` are the values to pre-fill into the form.
pub fn render_page(fields: &[String], outcome: Outcome<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>🧠 Headline Comparator</h1>\n");
    body.push_str(ABOUT);
    body.push_str("\n<p>Compare up to 5 headlines to see which is most persuasive.</p>\n");
    body.push_str(&render_form(fields));

    match outcome {
        Outcome::Empty => {}
        Outcome::Failed(err) => {
            let class = if err.is_warning() { "warning" } else { "error" };
            body.push_str(&banner(class, &escape_html(&err.user_message())));
        }
        Outcome::Compared(comparison) => body.push_str(&render_comparison(comparison)),
    }

    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Headline Comparator</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n<main>\n{body}</main>\n</body>\n</html>\n"
    )
}

fn render_form(fields: &[String]) -> String {
    let mut form = String::from(
        "<form method=\"post\" action=\"/compare\" \
         onsubmit=\"document.getElementById('status').hidden = false\">\n",
    );
    for i in 0..MAX_HEADLINES {
        let value = fields.get(i).map(String::as_str).unwrap_or_default();
        form.push_str(&format!(
            "<label for=\"headline_{n}\">Headline {n}</label>\n\
             <input type=\"text\" id=\"headline_{n}\" name=\"headline_{n}\" value=\"{value}\">\n",
            n = i + 1,
            value = escape_html(value),
        ));
    }
    form.push_str("<button type=\"submit\">Compare Headlines</button>\n</form>\n");
    form.push_str(
        "<p id=\"status\" class=\"status\" hidden>Evaluating headlines and generating CTA suggestions…</p>\n",
    );
    form
}

fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::from("<hr>\n");
    out.push_str(&banner(
        "success",
        &format!(
            "🏆 <strong>Top Headline:</strong> <em>{}</em>",
            escape_html(&comparison.top_headline)
        ),
    ));

    out.push_str("<h2>📊 Headline Scorecard</h2>\n<table>\n<thead><tr>");
    for column in &comparison.columns {
        out.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for (index, record) in comparison.records.records().iter().enumerate() {
        if index == comparison.top_index {
            out.push_str("<tr class=\"top-row\">");
        } else {
            out.push_str("<tr>");
        }
        for cell in record.cells() {
            out.push_str(&format!("<td>{}</td>", escape_html(&cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");

    out.push_str("<details>\n<summary>💬 Suggested Subheads &amp; CTA Buttons</summary>\n");
    match (&comparison.cta_suggestions, &comparison.cta_error) {
        (Some(cta), _) => out.push_str(&format!(
            "<div class=\"markdown\">{}</div>\n",
            render_markdown(&cta.0)
        )),
        (None, Some(error)) => out.push_str(&banner("error", &escape_html(error))),
        (None, None) => {}
    }
    out.push_str("</details>\n");

    out.push_str(&format!(
        "<details>\n<summary>📝 Full Analysis</summary>\n<div class=\"markdown\">{}</div>\n</details>\n",
        render_markdown(&comparison.analysis)
    ));
    out
}

fn banner(class: &str, inner_html: &str) -> String {
    format!("<div class=\"banner {class}\">{inner_html}</div>\n")
}

/// Renders model output as Markdown. Raw HTML in the text is escaped rather
/// than passed through, and script-capable link targets are dropped.
pub fn render_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH).map(
        |event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Link {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Image {
                link_type,
                dest_url: safe_url(dest_url),
                title,
                id,
            }),
            other => other,
        },
    );

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let scheme = url.trim_start().to_ascii_lowercase();
    if ["javascript:", "vbscript:", "data:"]
        .iter()
        .any(|bad| scheme.starts_with(bad))
    {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
