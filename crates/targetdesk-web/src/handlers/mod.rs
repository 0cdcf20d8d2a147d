//! Page handlers and shared rendering helpers.

pub mod compounds;
pub mod dashboard;
pub mod diseases;
pub mod exchange;
pub mod relationships;
pub mod structures;
pub mod targets;

/// Navigation sidebar shared by all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Wrap page content in the shared HTML shell.
pub fn layout(title: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} — TargetDesk</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="app-container">
{nav}
<main class="main-content">
{main}
</main>
</div>
</body>
</html>"#,
        title = title,
        nav = NAV_HTML,
        main = main,
    )
}

/// Minimal HTML escaping for user-entered values interpolated into markup.
pub fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A dismissible alert box (`level` is success/warning/danger).
pub fn alert(level: &str, message: &str) -> String {
    format!(
        r#"<div class="alert alert-{level}">{msg}</div>"#,
        level = level,
        msg = esc(message),
    )
}

/// `<option>` list for an (id, name) dropdown.
pub fn options_html(options: &[(i32, String)], selected: Option<i32>) -> String {
    options
        .iter()
        .map(|(id, name)| {
            let sel = if selected == Some(*id) { " selected" } else { "" };
            format!(r#"<option value="{id}"{sel}>{}</option>"#, esc(name))
        })
        .collect()
}

/// Normalize a form text field: trim, map empty to None.
pub fn form_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional numeric form field, tolerating blanks.
pub fn form_f64(value: &Option<String>) -> Option<f64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

/// Parse an id select field; the placeholder option submits an empty string.
pub fn form_i32(value: &Option<String>) -> Option<i32> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}

/// The required name field: present and non-blank, or nothing.
pub fn required_name(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Display an optional cell value, dash for missing.
pub fn cell(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => esc(v),
        _ => "—".to_string(),
    }
}

pub fn cell_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(required_name(&None), None);
        assert_eq!(required_name(&Some("".into())), None);
        assert_eq!(required_name(&Some("   ".into())), None);
        assert_eq!(required_name(&Some("  KRAS ".into())), Some("KRAS".into()));
    }

    #[test]
    fn form_text_maps_empty_to_none() {
        assert_eq!(form_text(Some(" ".into())), None);
        assert_eq!(form_text(Some(" Kinase ".into())), Some("Kinase".into()));
        assert_eq!(form_text(None), None);
    }

    #[test]
    fn form_f64_tolerates_blank_and_garbage() {
        assert_eq!(form_f64(&Some("".into())), None);
        assert_eq!(form_f64(&Some("abc".into())), None);
        assert_eq!(form_f64(&Some(" 2.1 ".into())), Some(2.1));
        assert_eq!(form_f64(&None), None);
    }

    #[test]
    fn form_i32_rejects_placeholder_value() {
        assert_eq!(form_i32(&Some("".into())), None);
        assert_eq!(form_i32(&Some("7".into())), Some(7));
    }

    #[test]
    fn esc_neutralizes_markup() {
        assert_eq!(esc(r#"<b>&"x"</b>"#), "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;");
    }
}
