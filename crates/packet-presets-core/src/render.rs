//! Preset list rendering.
//!
//! Preset names are unsanitized user input that persists across runs, so
//! every renderer must treat them as text, never as markup.

use crate::preset::PresetSummary;

/// Turns the preset list into something the host can display.
pub trait PresetListRenderer {
    type Output;

    fn render(&self, presets: &[PresetSummary]) -> Self::Output;
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders one button per preset: the name, plus a delete control.
#[derive(Debug, Clone)]
pub struct HtmlListRenderer {
    pub button_class: String,
    pub delete_class: String,
}

impl Default for HtmlListRenderer {
    fn default() -> Self {
        Self {
            button_class: "custom-preset-btn".to_string(),
            delete_class: "preset-delete-btn".to_string(),
        }
    }
}

impl PresetListRenderer for HtmlListRenderer {
    type Output = String;

    fn render(&self, presets: &[PresetSummary]) -> String {
        let button_class = escape_html(&self.button_class);
        let delete_class = escape_html(&self.delete_class);

        presets
            .iter()
            .map(|preset| {
                format!(
                    concat!(
                        r#"<button class="{button_class}" style="margin-left: 8px" "#,
                        r#"data-preset-id="{id}"><span>{name}</span>"#,
                        r#"<span class="{delete_class}" data-preset-id="{id}">×</span>"#,
                        "</button>",
                    ),
                    button_class = button_class,
                    delete_class = delete_class,
                    id = escape_html(&preset.id),
                    name = escape_html(&preset.name),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
