//! HTML rendering for the list page.
//!
//! Rendering is a pure function of [`IndexPage`]: no store access, and the
//! same layout whether or not a notification is present.

use std::fmt::Write;

use super::notification::Notification;

/// Everything the list page shows.
#[derive(Debug, Clone, Copy)]
pub struct IndexPage<'a> {
    pub countries: &'a [String],
    pub total: usize,
    pub notification: Option<&'a Notification>,
}

impl<'a> IndexPage<'a> {
    /// Builds a page whose total is the number of codes given.
    pub fn new(countries: &'a [String], notification: Option<&'a Notification>) -> Self {
        Self {
            countries,
            total: countries.len(),
            notification,
        }
    }
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Travel Tracker</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
    .notification { min-height: 1.5rem; padding: 0.5rem 1rem; border-radius: 4px; }
    .notification.success { background: #e3f6e5; color: #1d6b2a; }
    .notification.warning { background: #fff4d6; color: #7a5a00; }
    .notification.error { background: #fde2e1; color: #8f1d17; }
    .notification.info { background: #e1effd; color: #174a8f; }
    .countries { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; padding: 0; }
    .countries li { background: #f0c14b; border-radius: 4px; padding: 0.25rem 0.5rem; font-weight: bold; }
  </style>
</head>
<body>
  <h1>Travel Tracker</h1>
"#;

const PAGE_FORM: &str = r#"  <form class="add" action="/add" method="post">
    <input type="text" name="country" placeholder="Enter country name" autofocus>
    <button type="submit">Add</button>
  </form>
</body>
</html>
"#;

/// Renders the list page.
pub fn render_index(page: &IndexPage<'_>) -> String {
    let mut html = String::with_capacity(PAGE_HEAD.len() + PAGE_FORM.len() + 512);
    html.push_str(PAGE_HEAD);

    // Writing to a String cannot fail
    match page.notification {
        Some(notification) => {
            let _ = writeln!(
                html,
                r#"  <div class="notification {}" role="status">{}</div>"#,
                notification.kind.as_str(),
                escape_html(&notification.message)
            );
        }
        None => html.push_str("  <div class=\"notification\" role=\"status\"></div>\n"),
    }

    let _ = writeln!(
        html,
        r#"  <p class="total">Total Countries: {}</p>"#,
        page.total
    );

    html.push_str("  <ul class=\"countries\">\n");
    for code in page.countries {
        let code = escape_html(code);
        let _ = writeln!(html, r#"    <li data-code="{code}">{code}</li>"#);
    }
    html.push_str("  </ul>\n");

    html.push_str(PAGE_FORM);
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
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
