use egui::{Color32, WidgetText};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Error,
    Success,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Success, Severity::Info];

    /// Unrecognized names degrade to `Error` rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "info" => Severity::Info,
            _ => Severity::Error,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Error => "▲",
            Severity::Success => "✔",
            Severity::Info => "ℹ",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Severity::Error => Color32::from_rgb(255, 83, 83),
            Severity::Success => Color32::from_rgb(47, 179, 57),
            Severity::Info => Color32::from_rgb(105, 135, 255),
        }
    }

    pub fn icon_text(&self) -> WidgetText {
        WidgetText::from(self.icon()).color(self.color())
    }
}

// Persisted as the lowercase name so stored state survives renumbering, and
// names written by a newer version degrade to the default on the way back in.
impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Severity::from_name(&name))
    }
}
