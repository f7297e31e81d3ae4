//! Shared color constants for the UI.

use egui::Color32;
use userdesk_business::Tone;

/// Forest green for success badges.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for errors and danger badges.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Blue for informational badges.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(37, 99, 235);

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Danger => COLOR_RED,
        Tone::Info => COLOR_BLUE,
        Tone::Success => COLOR_GREEN,
    }
}
