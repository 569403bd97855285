//! Error page generation for failed renders.
//!
//! Produces a standalone HTML document describing a render failure, served
//! with status 500 in place of the normal page. The page auto-recovers: it
//! gets the same reload fragment injected as a successful render, so fixing
//! the template or data file refreshes it away.

/// Generate the error page for a render diagnostic.
///
/// The diagnostic is HTML-escaped before embedding, so engine messages that
/// quote template markup cannot inject markup of their own.
pub fn build_error_page(diagnostic: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Glint Render Error</title>
    <style>
      body {{
        background: #111827;
        color: #e5e7eb;
        font-family: system-ui, sans-serif;
        padding: 24px;
      }}
      h1 {{ color: #f97316; }}
      pre {{
        background: #020617;
        padding: 16px;
        border-radius: 8px;
        overflow-x: auto;
        font-size: 12px;
        white-space: pre-wrap;
      }}
    </style>
  </head>
  <body>
    <h1>Render Error</h1>
    <pre>{}</pre>
    <p>Fix the template or data file and save; the page reloads on the next change.</p>
  </body>
</html>"#,
        escape_html(diagnostic)
    )
}

/// Escape HTML special characters.
///
/// Converts the following characters:
/// - `&` -> `&amp;`
/// - `<` -> `&lt;`
/// - `>` -> `&gt;`
/// - `"` -> `&quot;`
/// - `'` -> `&#x27;`
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
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
    fn test_escape_ampersand() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(
            escape_html(r#"He said "hello""#),
            "He said &quot;hello&quot;"
        );
        assert_eq!(escape_html("It's working"), "It&#x27;s working");
    }

    #[test]
    fn test_escape_no_special_chars() {
        let input = "Normal error message";
        assert_eq!(escape_html(input), input);
    }

    #[test]
    fn test_error_page_contains_escaped_diagnostic() {
        let diagnostic = "<script>alert('xss')</script>";
        let html = build_error_page(diagnostic);

        assert!(html.contains("&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_error_page_structure() {
        let html = build_error_page("undefined value");

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Render Error"));
        assert!(html.contains("undefined value"));
        assert!(html.contains("</body>"));
    }

    #[test]
    fn test_diagnostic_free_of_raw_specials() {
        let diagnostic = r#"syntax error near <% title & "x" %> in 'page'"#;
        let html = build_error_page(diagnostic);
        let pre_start = html.find("<pre>").unwrap() + "<pre>".len();
        let pre_end = html.find("</pre>").unwrap();
        let embedded = &html[pre_start..pre_end];

        assert!(!embedded.contains('<'));
        assert!(!embedded.contains('>'));
        assert!(!embedded.contains('"'));
        assert!(!embedded.contains('\''));
        // Every ampersand left is the start of an entity we produced.
        for (i, _) in embedded.match_indices('&') {
            let rest = &embedded[i..];
            assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#x27;")
            );
        }
    }
}
