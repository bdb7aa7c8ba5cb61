use std::fmt::Write;

use crate::choice::GroupedChoices;

/// Render grouped choices as `<select>` markup with one `<optgroup>` per major
///
/// The option whose value equals `selected` is marked as selected. Without
/// choices the control is disabled and carries the error message, if any.
pub fn render_select(name: &str, choices: &GroupedChoices, selected: Option<&str>) -> String {
    let mut html = String::new();

    if choices.is_empty() {
        let message = match &choices.error {
            Some(error) => format!("Versions unavailable: {}", error),
            None => "No versions available".to_string(),
        };
        let _ = writeln!(
            html,
            r#"<select name="{}" disabled="disabled">"#,
            escape_html(name)
        );
        let _ = writeln!(
            html,
            r#"<option value="" disabled="disabled">{}</option>"#,
            escape_html(&message)
        );
        html.push_str("</select>\n");
        return html;
    }

    let _ = writeln!(html, r#"<select name="{}">"#, escape_html(name));
    for group in &choices.groups {
        let _ = writeln!(html, r#"<optgroup label="{}">"#, escape_html(&group.label()));
        for version in &group.versions {
            let value = escape_html(version.as_str());
            let selected_attr = if selected == Some(version.as_str()) {
                r#" selected="selected""#
            } else {
                ""
            };
            let _ = writeln!(
                html,
                r#"<option value="{}"{}>{}</option>"#,
                value, selected_attr, value
            );
        }
        html.push_str("</optgroup>\n");
    }
    html.push_str("</select>\n");

    html
}

/// Render grouped choices as an indented text tree
///
/// ```text
/// 10.x
///   10.0.0
/// 9.x
///   9.1.0
/// ```
pub fn render_text(choices: &GroupedChoices) -> String {
    let mut out = String::new();

    if choices.is_empty() {
        match &choices.error {
            Some(error) => {
                let _ = writeln!(out, "No versions available: {}", error);
            }
            None => out.push_str("No versions available\n"),
        }
        return out;
    }

    for group in &choices.groups {
        let _ = writeln!(out, "{}", group.label());
        for version in &group.versions {
            let _ = writeln!(out, "  {}", version);
        }
    }

    out
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::types::{OrderedVersions, VersionIdentifier};

    fn choices(raw: &[&str]) -> GroupedChoices {
        let versions = raw
            .iter()
            .map(|v| VersionIdentifier::parse(*v).unwrap())
            .collect();
        GroupedChoices::from_versions(&OrderedVersions::sort(versions))
    }

    #[test]
    fn render_select_emits_optgroup_per_major() {
        let html = render_select(
            "wicketVersion",
            &choices(&["9.1.0", "10.0.0", "9.0.0"]),
            Some("9.1.0"),
        );

        assert_eq!(
            html,
            concat!(
                "<select name=\"wicketVersion\">\n",
                "<optgroup label=\"10.x\">\n",
                "<option value=\"10.0.0\">10.0.0</option>\n",
                "</optgroup>\n",
                "<optgroup label=\"9.x\">\n",
                "<option value=\"9.1.0\" selected=\"selected\">9.1.0</option>\n",
                "<option value=\"9.0.0\">9.0.0</option>\n",
                "</optgroup>\n",
                "</select>\n",
            )
        );
    }

    #[test]
    fn render_select_disables_control_when_unavailable() {
        let degraded = GroupedChoices {
            groups: Vec::new(),
            error: Some("Unexpected status: 503 <Service Unavailable>".to_string()),
        };

        let html = render_select("wicketVersion", &degraded, None);

        assert_eq!(
            html,
            concat!(
                "<select name=\"wicketVersion\" disabled=\"disabled\">\n",
                "<option value=\"\" disabled=\"disabled\">",
                "Versions unavailable: Unexpected status: 503 &lt;Service Unavailable&gt;",
                "</option>\n",
                "</select>\n",
            )
        );
    }

    #[test]
    fn render_select_escapes_attribute_values() {
        let html = render_select("a\"b", &choices(&["1.0-x&y"]), None);

        assert!(html.contains(r#"<select name="a&quot;b">"#));
        assert!(html.contains(r#"<option value="1.0-x&amp;y">1.0-x&amp;y</option>"#));
    }

    #[test]
    fn render_text_lists_versions_under_group_labels() {
        let text = render_text(&choices(&["9.0.0", "10.0.0-M1", "10.0.0"]));

        assert_eq!(text, "10.x\n  10.0.0\n  10.0.0-M1\n9.x\n  9.0.0\n");
    }

    #[test]
    fn render_text_reports_missing_versions() {
        assert_eq!(
            render_text(&GroupedChoices::default()),
            "No versions available\n"
        );
    }
}
