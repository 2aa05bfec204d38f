use std::sync::Arc;

use egui::{Color32, Context, Stroke};

use crate::severity::Severity;

pub struct Style {
    pub backdrop: Color32,
    pub content_width: f32,
    pub icon_size: f32,
    pub accent_width: f32,
    pub egui_style: Arc<egui::Style>,
}

impl Style {
    pub fn light(egui_style: Arc<egui::Style>) -> Self {
        Self {
            backdrop: Color32::from_black_alpha(32),
            content_width: 260.0,
            icon_size: 28.0,
            accent_width: 1.5,
            egui_style,
        }
    }

    pub fn dark(egui_style: Arc<egui::Style>) -> Self {
        Self {
            backdrop: Color32::from_black_alpha(96),
            ..Self::light(egui_style)
        }
    }

    /// The content box keeps the base popup stroke for the default severity
    /// and carries a severity-colored accent otherwise.
    pub fn accent_stroke(&self, severity: Severity) -> Stroke {
        match severity {
            Severity::Error => self.egui_style.visuals.window_stroke,
            _ => Stroke::new(self.accent_width, severity.color()),
        }
    }
}

pub fn get(ctx: &Context) -> Style {
    let egui_style = ctx.style();
    if egui_style.visuals.dark_mode {
        Style::dark(egui_style)
    } else {
        Style::light(egui_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_stroke_per_severity() {
        let style = Style::light(Arc::new(egui::Style::default()));

        assert_eq!(
            style.accent_stroke(Severity::Error),
            style.egui_style.visuals.window_stroke
        );
        for severity in [Severity::Success, Severity::Info] {
            let stroke = style.accent_stroke(severity);
            assert_eq!(stroke.color, severity.color());
            assert_eq!(stroke.width, style.accent_width);
        }
    }
}
