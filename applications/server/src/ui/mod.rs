//! Server-rendered landing page
//!
//! `GET /` is a single HTML template with fixed placeholders. Nothing on the
//! page depends on the database.

use axum::response::Html;

/// Dark colour scheme used by the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_light: &'static str,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            primary: "#60A5FA",
            background: "#111827",
            surface: "#1F2937",
            text: "#F9FAFB",
            text_light: "#9CA3AF",
        }
    }
}

/// Content shown on the landing page
#[derive(Debug, Clone)]
pub struct HomePage {
    pub title: String,
    pub description: String,
    pub background_information: String,
    pub docs_url: String,
    pub colors: ColorScheme,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            title: "Rust Web Application".to_string(),
            description: "A small, layered web service template".to_string(),
            background_information: "This template serves a JSON API for a single user \
                resource backed by SQLite, with handler, service and storage layers kept \
                separate so each can be tested on its own."
                .to_string(),
            docs_url: "/api/health".to_string(),
            colors: ColorScheme::default(),
        }
    }
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{{title}}</title>
<meta name="description" content="{{description}}">
<style>
html, body { background-color: {{background}}; color: {{text}}; font-family: system-ui, -apple-system, sans-serif; height: 100%; margin: 0; }
.app-primary { color: {{primary}}; }
.app-surface { background-color: {{surface}}; }
.app-muted { color: {{text_light}}; }
.app-link { color: {{primary}}; text-decoration: none; }
.app-link:hover { text-decoration: underline; opacity: 0.9; }
::selection { background-color: {{primary}}; color: {{background}}; }
.page { display: flex; flex-direction: column; min-height: 100vh; }
.content { flex-grow: 1; max-width: 42rem; margin: 0 auto; padding: 2rem 1rem; }
header, footer { padding: 1rem; }
header nav { display: flex; justify-content: space-between; align-items: center; }
footer { text-align: center; margin-top: auto; font-size: 0.875rem; }
</style>
</head>
<body>
<div class="page">
<header class="app-surface">
<nav>
<a href="/" class="app-primary app-link"><strong>Rust App</strong></a>
<a href="{{docs_url}}" class="app-link">Docs</a>
</nav>
</header>
<main class="content">
<h1>{{title}}</h1>
<p>{{description}}</p>
<section class="app-surface" style="padding: 1.5rem; border-radius: 0.5rem;">
<h2>About</h2>
<p>{{background_information}}</p>
<a href="{{docs_url}}" class="app-link">Documentation &rarr;</a>
</section>
</main>
<footer class="app-surface app-muted">
<p>Rust Web App</p>
</footer>
</div>
</body>
</html>
"#;

/// Fill the template; text placeholders are HTML-escaped
pub fn render(page: &HomePage) -> String {
    let colors = &page.colors;
    [
        ("{{title}}", escape_html(&page.title)),
        ("{{description}}", escape_html(&page.description)),
        (
            "{{background_information}}",
            escape_html(&page.background_information),
        ),
        ("{{docs_url}}", escape_html(&page.docs_url)),
        ("{{primary}}", colors.primary.to_string()),
        ("{{background}}", colors.background.to_string()),
        ("{{surface}}", colors.surface.to_string()),
        ("{{text_light}}", colors.text_light.to_string()),
        ("{{text}}", colors.text.to_string()),
    ]
    .iter()
    .fold(TEMPLATE.to_string(), |html, (placeholder, value)| {
        html.replace(placeholder, value)
    })
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// GET /
pub async fn home() -> Html<String> {
    Html(render(&HomePage::default()))
}
