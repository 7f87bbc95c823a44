//! Document shell: head with the theme stylesheet, sidebar, main column.

use crate::session::{Page, Session};
use crate::ui::pages::{render_body, PageView};
use crate::ui::theme::{stylesheet, toggle_label};

const LOGO_URL: &str = "https://cdn-icons-png.flaticon.com/512/3135/3135715.png";

/// Escapes text for HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn sidebar(session: &Session) -> String {
    let nav: String = Page::ALL
        .iter()
        .map(|page| {
            let class = if *page == session.page { "active" } else { "" };
            format!(
                r#"<form method="post" action="/nav/{slug}"><button type="submit" class="{class}">{label}</button></form>"#,
                slug = page.slug(),
                label = page.label(),
            )
        })
        .collect();

    format!(
        r#"<nav class="sidebar">
<div style="text-align: center;"><img src="{LOGO_URL}" width="100" alt=""></div>
<h2>Career Agent</h2>
<hr>
{nav}
<hr>
<form method="post" action="/theme/toggle"><button type="submit">{toggle}</button></form>
</nav>"#,
        toggle = toggle_label(session.theme),
    )
}

/// Full HTML document for the session's current page.
pub fn render_document(view: &PageView<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>AI Career Agent</title>
<style>{css}</style>
</head>
<body>
{sidebar}
<main>
{body}
</main>
</body>
</html>"#,
        css = stylesheet(view.session.theme),
        sidebar = sidebar(view.session),
        body = render_body(view),
    )
}
