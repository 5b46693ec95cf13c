//! Page shell, flash notices and HTML escaping.

use axum::response::Html;

/// Flash notice kinds carried in `?notice=` across redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Created,
    Updated,
    Deleted,
    Generated,
    NotFound,
}

impl Notice {
    /// Query-string value.
    pub fn code(self) -> &'static str {
        match self {
            Notice::Created => "created",
            Notice::Updated => "updated",
            Notice::Deleted => "deleted",
            Notice::Generated => "generated",
            Notice::NotFound => "not-found",
        }
    }

    /// Unknown codes are ignored rather than echoed back.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "created" => Some(Notice::Created),
            "updated" => Some(Notice::Updated),
            "deleted" => Some(Notice::Deleted),
            "generated" => Some(Notice::Generated),
            "not-found" => Some(Notice::NotFound),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Created => "Character created successfully!",
            Notice::Updated => "Character updated successfully!",
            Notice::Deleted => "Character deleted successfully!",
            Notice::Generated => "Random character generated!",
            Notice::NotFound => "Character not found!",
        }
    }

    fn is_error(self) -> bool {
        matches!(self, Notice::NotFound)
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap `body` in the shared page chrome. `title` is escaped here.
pub fn page(title: &str, notice: Option<Notice>, body: &str) -> Html<String> {
    let flash = match notice {
        Some(n) => format!(
            r#"<p class="flash {kind}" role="status">{msg}</p>"#,
            kind = if n.is_error() { "error" } else { "success" },
            msg = n.message(),
        ),
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | D&amp;D Character Generator</title>
</head>
<body>
<header><a href="/">D&amp;D Character Generator</a></header>
<main>
{flash}
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & y")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("O'Brien"), "O&#39;Brien");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn notice_codes_round_trip() {
        for notice in [
            Notice::Created,
            Notice::Updated,
            Notice::Deleted,
            Notice::Generated,
            Notice::NotFound,
        ] {
            assert_eq!(Notice::from_code(notice.code()), Some(notice));
        }
        assert_eq!(Notice::from_code("<b>pwned</b>"), None);
    }

    #[test]
    fn page_escapes_title_and_renders_flash() {
        let Html(html) = page("<Aria>", Some(Notice::NotFound), "<p>body</p>");
        assert!(html.contains("<h1>&lt;Aria&gt;</h1>"));
        assert!(html.contains(r#"class="flash error""#));
        assert!(html.contains("Character not found!"));
        assert!(html.contains("<p>body</p>"));
    }
}
