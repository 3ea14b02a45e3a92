use std::path::Path;
use crate::errors::{AppError, AppResult};

/// Reads `name` from the template directory.
pub async fn load_template(template_dir: &str, name: &str) -> AppResult<String> {
    let path = Path::new(template_dir).join(name);
    tokio::fs::read_to_string(&path).await.map_err(|source| AppError::Template {
        path: path.display().to_string(),
        source,
    })
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("alice@example.com"), "alice@example.com");
    }

    #[tokio::test]
    async fn missing_template_is_an_error() {
        let err = load_template("templates", "does-not-exist.html").await.unwrap_err();
        match err {
            AppError::Template { path, .. } => assert!(path.ends_with("does-not-exist.html")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
