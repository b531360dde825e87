use eframe::egui::{self, Color32, CornerRadius, FontId, Frame, Margin, Stroke, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub dark: bool,
    pub surface_0: Color32,
    pub surface_1: Color32,
    pub surface_2: Color32,
    pub header_fill: Color32,
    pub accent_primary: Color32,
    pub accent_muted: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_on_accent: Color32,
    pub bot_bubble_fill: Color32,
    pub bot_bubble_text: Color32,
    pub border_subtle: Color32,
    pub spacing_8: f32,
    pub spacing_12: f32,
    pub radius_12: u8,
    pub bubble_max_width: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub const R12: u8 = 12;
    pub const P8: f32 = 8.0;
    pub const P12: f32 = 12.0;

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn light() -> Self {
        Self {
            dark: false,
            surface_0: Color32::from_rgb(0xF3, 0xF4, 0xF6),
            surface_1: Color32::from_rgb(0xFF, 0xFF, 0xFF),
            surface_2: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            header_fill: Color32::from_rgb(0x25, 0x63, 0xEB),
            accent_primary: Color32::from_rgb(0x3B, 0x82, 0xF6),
            accent_muted: Color32::from_rgb(0x1D, 0x4E, 0xD8),
            text_primary: Color32::from_rgb(0x1F, 0x29, 0x37),
            text_muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            text_on_accent: Color32::from_rgb(0xFF, 0xFF, 0xFF),
            bot_bubble_fill: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            bot_bubble_text: Color32::from_rgb(0x1F, 0x29, 0x37),
            border_subtle: Color32::from_rgb(0xD1, 0xD5, 0xDB),
            spacing_8: Self::P8,
            spacing_12: Self::P12,
            radius_12: Self::R12,
            bubble_max_width: 320.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            dark: true,
            surface_0: Color32::from_rgb(0x11, 0x18, 0x27),
            surface_1: Color32::from_rgb(0x1F, 0x29, 0x37),
            surface_2: Color32::from_rgb(0x37, 0x41, 0x51),
            header_fill: Color32::from_rgb(0x1F, 0x29, 0x37),
            accent_primary: Color32::from_rgb(0x3B, 0x82, 0xF6),
            accent_muted: Color32::from_rgb(0x2F, 0x6E, 0xD8),
            text_primary: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            text_muted: Color32::from_rgb(0x9C, 0xA3, 0xAF),
            text_on_accent: Color32::from_rgb(0xF8, 0xFB, 0xFF),
            bot_bubble_fill: Color32::from_rgb(0x37, 0x41, 0x51),
            bot_bubble_text: Color32::from_rgb(0xE5, 0xE7, 0xEB),
            border_subtle: Color32::from_rgba_premultiplied(255, 255, 255, 13),
            spacing_8: Self::P8,
            spacing_12: Self::P12,
            radius_12: Self::R12,
            bubble_max_width: 320.0,
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.dark {
            "☀ Light Mode"
        } else {
            "🌙 Dark Mode"
        }
    }

    pub fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.surface_0;
        visuals.override_text_color = Some(self.text_primary);
        visuals.extreme_bg_color = self.surface_1;
        visuals.widgets.inactive.bg_fill = self.surface_2;
        visuals.widgets.inactive.weak_bg_fill = self.surface_2;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border_subtle);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent_primary);
        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.selection.bg_fill = self.accent_muted;
        visuals.selection.stroke = Stroke::new(1.0, self.accent_primary);
        visuals.hyperlink_color = self.accent_primary;
        visuals.window_fill = self.surface_1;
        visuals.window_corner_radius = CornerRadius::same(self.radius_12);

        let mut style = (*ctx.style()).clone();
        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.text_styles.insert(TextStyle::Heading, FontId::proportional(18.0));
        style.text_styles.insert(TextStyle::Body, FontId::proportional(14.0));
        style.text_styles.insert(TextStyle::Small, FontId::proportional(11.0));
        ctx.set_style(style);
    }

    pub fn header_frame(&self) -> Frame {
        Frame::new()
            .fill(self.header_fill)
            .inner_margin(Margin::same(self.spacing_12 as i8))
    }

    pub fn footer_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface_0)
            .inner_margin(Margin::symmetric(self.spacing_12 as i8, self.spacing_8 as i8))
    }

    pub fn composer_frame(&self) -> Frame {
        Frame::new()
            .fill(self.surface_1)
            .inner_margin(Margin::same(self.spacing_12 as i8))
            .stroke(Stroke::new(1.0, self.border_subtle))
    }

    pub fn bubble_frame(&self, fill: Color32) -> Frame {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(self.spacing_12 as i8))
            .corner_radius(CornerRadius::same(self.radius_12))
            .shadow(egui::epaint::Shadow {
                offset: [0, 2],
                blur: 8,
                spread: 0,
                color: Color32::from_rgba_premultiplied(0, 0, 0, 30),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn for_mode_selects_matching_palette() {
        assert_eq!(Theme::for_mode(false), Theme::light());
        assert_eq!(Theme::for_mode(true), Theme::dark());
        assert_ne!(Theme::light(), Theme::dark());
    }

    #[test]
    fn toggle_label_offers_the_other_mode() {
        assert_eq!(Theme::light().toggle_label(), "🌙 Dark Mode");
        assert_eq!(Theme::dark().toggle_label(), "☀ Light Mode");
    }
}
