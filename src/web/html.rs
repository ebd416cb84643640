//! Small HTML helpers: escaping, URL encoding and the page shell.

/// Escape text for HTML content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn encode(s: &str, keep_slash: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            b'/' if keep_slash => out.push('/'),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Percent-encode a query parameter value.
pub fn encode_query(s: &str) -> String {
    encode(s, false)
}

/// Percent-encode a path, keeping `/` separators.
pub fn encode_path(s: &str) -> String {
    encode(s, true)
}

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #1e1b2e; color: #ece9f5; }
a { color: #c4b5fd; }
header { background: #120f1f; border-bottom: 1px solid #4c1d95; padding: 1em 2em; display: flex; justify-content: space-between; align-items: center; }
header h1 { margin: 0; font-size: 1.6em; }
header p { margin: 0.2em 0 0; color: #a78bfa; font-size: 0.85em; }
main { padding: 1.5em 2em; }
.stats, .grid { display: grid; gap: 1em; }
.stats { grid-template-columns: repeat(auto-fill, minmax(10em, 1fr)); margin-bottom: 1.5em; }
.grid { grid-template-columns: repeat(auto-fill, minmax(20em, 1fr)); }
.panel, .card, .stat { background: #00000055; border: 1px solid #4c1d9580; border-radius: 8px; padding: 1em; }
.stat.selected { border-color: #a855f7; }
.stat .count { font-size: 1.6em; font-weight: bold; }
.badge { display: inline-block; font-size: 0.75em; padding: 0.1em 0.5em; border-radius: 4px; border: 1px solid #a855f780; margin-right: 0.3em; }
.badge.props { border-color: #3b82f680; color: #93c5fd; }
.mono { font-family: ui-monospace, monospace; font-size: 0.85em; word-break: break-all; }
.chips a { margin-right: 0.5em; }
form.filters { display: flex; gap: 1em; flex-wrap: wrap; align-items: end; }
label { display: block; font-size: 0.85em; color: #c4b5fd; margin-bottom: 0.3em; }
input, select, textarea { background: #00000099; color: inherit; border: 1px solid #4c1d95; border-radius: 6px; padding: 0.4em 0.6em; }
pre { background: #00000099; padding: 1em; border-radius: 6px; overflow-x: auto; }
.layout { display: grid; grid-template-columns: 2fr 1fr; gap: 1.5em; }
.preview { background: #fff; color: #111; border-radius: 8px; padding: 2em; min-height: 12em; }
.field { margin-bottom: 1em; }
.required { color: #f87171; }
.type { color: #a78bfa99; }
.empty { text-align: center; padding: 3em; color: #a78bfa; }
.error { border: 1px solid #ef4444; background: #ef444420; border-radius: 8px; padding: 1.5em; max-width: 32em; margin: 3em auto; }
"#;

/// Wrap a body in a complete HTML document.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

/// A standalone error page.
pub fn error_page(title: &str, message: &str) -> String {
    layout(
        title,
        &format!(
            "<div class=\"error\"><h2>{}</h2><p>{}</p><p><a href=\"/\">Back to catalogue</a></p></div>\n",
            escape(title),
            escape(message)
        ),
    )
}
