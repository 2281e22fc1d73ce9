use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::page::{PageKey, View};
use crate::{DashboardOptions, GENERATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Success,
    Error,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Warning => "warning",
            AlertKind::Success => "success",
            AlertKind::Error => "error",
        }
    }
}

pub fn alert(kind: AlertKind, message: &str) -> Markup {
    html! {
        div.alert.(kind.class()) role="status" { (message) }
    }
}

/// Wraps a page body into a complete document.
///
/// The opening and closing halves are separate fragments so that the body's own fragments can be streamed in between.
pub fn document(active: Option<PageKey>, options: &DashboardOptions, body: View) -> View {
    let mut view = View::new();
    view.push(document_open(active, options));
    view.extend(body);
    view.push(document_close());
    view
}

fn document_open(active: Option<PageKey>, options: &DashboardOptions) -> Markup {
    let title = match active {
        Some(PageKey::Home) | None => options.page_title.clone(),
        Some(key) => format!("{} - {}", key.title(), options.page_title),
    };

    html! {
        (DOCTYPE)
        (PreEscaped("<html lang=\"en\">"))
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="generator" content=(GENERATOR);
            title { (title) }
            style { (PreEscaped(options.theme.stylesheet())) }
        }
        (PreEscaped("<body><div class=\"app\">"))
        (sidebar(active))
        (PreEscaped("<main class=\"block-container\">"))
    }
}

fn document_close() -> Markup {
    PreEscaped("</main></div></body></html>".to_string())
}

fn sidebar(active: Option<PageKey>) -> Markup {
    html! {
        nav.sidebar aria-label="Navigation" {
            h1 { "Navigation" }
            p { "Go to" }
            ul {
                @for key in PageKey::ALL {
                    li {
                        a href=(key.path()) aria-current=[(Some(key) == active).then_some("page")] {
                            (key.title())
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_is_balanced_around_body() {
        let mut body = View::new();
        body.push(html! { p { "inner" } });

        let html = document(Some(PageKey::Metrics), &DashboardOptions::default(), body).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Metrics - Cloud Pattern Prediction</title>"));
        assert!(html.contains("<main class=\"block-container\"><p>inner</p></main>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_sidebar_marks_only_active_page() {
        let html = sidebar(Some(PageKey::ModelInsights)).into_string();

        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("<a href=\"/insights\" aria-current=\"page\">Model Insights</a>"));
        assert!(html.contains("<a href=\"/\">Home</a>"));
    }

    #[test]
    fn test_alert_escapes_message() {
        let html = alert(AlertKind::Warning, "<b>file</b>").into_string();

        assert!(html.contains("class=\"alert warning\""));
        assert!(html.contains("&lt;b&gt;file&lt;/b&gt;"));
    }
}
