//! Widget visual defaults.
//!
//! Fallback values travel in [`StyleDefaults`] and are passed explicitly to
//! [`apply_defaults`]; there is no process-wide default font. Resolution order
//! for each property: the theme value under the widget's own key, then the
//! theme value under the generic key, then the passed defaults.

use crate::style::keys::WidgetKind;

/// Generic theme keys tried when a widget's own key yields nothing.
const GENERIC_BACKGROUND_KEY: &str = "control";
const GENERIC_FOREGROUND_KEY: &str = "controlText";
const GENERIC_FONT_KEY: &str = "Label.font";

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns this color with every channel moved by `difference`, clamped
    /// to the valid range. Positive differences lighten, negative darken;
    /// useful for deriving hover or disabled shades from a base color.
    pub fn shifted(self, difference: i32) -> Color {
        let shift = |channel: u8| (i32::from(channel) + difference).clamp(0, 255) as u8;
        Color::new(shift(self.red), shift(self.green), shift(self.blue))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

/// A font request by family name; the toolkit resolves it to whatever it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub style: FontStyle,
    pub size: u16,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, style: FontStyle, size: u16) -> Self {
        Self {
            family: family.into(),
            style,
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Helvetica", FontStyle::Plain, 12)
    }
}

/// Last-resort visual properties, used when the theme yields nothing for a
/// widget's own key or the generic key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefaults {
    pub background: Color,
    pub foreground: Color,
    pub font: FontSpec,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::BLACK,
            font: FontSpec::default(),
        }
    }
}

/// Source of theme-provided values, keyed the way the toolkit keys them.
pub trait ThemeSource {
    fn color(&self, key: &str) -> Option<Color>;
    fn font(&self, key: &str) -> Option<FontSpec>;
}

/// A theme with no entries; every lookup falls through to the defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyTheme;

impl ThemeSource for EmptyTheme {
    fn color(&self, _key: &str) -> Option<Color> {
        None
    }

    fn font(&self, _key: &str) -> Option<FontSpec> {
        None
    }
}

/// The visual properties a widget ends up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub background: Color,
    pub foreground: Color,
    pub font: FontSpec,
}

/// Widget half of the styling contract, implemented by toolkit adapters.
pub trait StyledWidget {
    fn set_background(&mut self, color: Color);
    fn set_foreground(&mut self, color: Color);
    fn set_font(&mut self, font: &FontSpec);
}

/// Resolves the visual properties for a widget category.
pub fn resolve_style(
    kind: WidgetKind,
    theme: &dyn ThemeSource,
    defaults: &StyleDefaults,
) -> ResolvedStyle {
    let keys = kind.property_keys();

    let background = theme
        .color(&keys.background)
        .or_else(|| theme.color(GENERIC_BACKGROUND_KEY))
        .unwrap_or(defaults.background);

    let foreground = theme
        .color(&keys.foreground)
        .or_else(|| theme.color(GENERIC_FOREGROUND_KEY))
        .unwrap_or(defaults.foreground);

    let font = keys
        .font
        .as_deref()
        .and_then(|key| theme.font(key))
        .or_else(|| theme.font(GENERIC_FONT_KEY))
        .unwrap_or_else(|| defaults.font.clone());

    ResolvedStyle {
        background,
        foreground,
        font,
    }
}

/// Applies resolved visual properties to a widget.
///
/// A `None` widget is a no-op. The setters are plain property writes, so
/// applying the same theme and defaults twice leaves the widget unchanged.
pub fn apply_defaults<W: StyledWidget>(
    widget: Option<&mut W>,
    kind: WidgetKind,
    theme: &dyn ThemeSource,
    defaults: &StyleDefaults,
) {
    let Some(widget) = widget else {
        return;
    };

    let style = resolve_style(kind, theme, defaults);
    widget.set_background(style.background);
    widget.set_foreground(style.foreground);
    widget.set_font(&style.font);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{
        apply_defaults, resolve_style, Color, EmptyTheme, FontSpec, FontStyle, StyleDefaults,
        StyledWidget, ThemeSource,
    };
    use crate::style::keys::WidgetKind;

    #[derive(Default)]
    struct MapTheme {
        colors: HashMap<String, Color>,
        fonts: HashMap<String, FontSpec>,
    }

    impl ThemeSource for MapTheme {
        fn color(&self, key: &str) -> Option<Color> {
            self.colors.get(key).copied()
        }

        fn font(&self, key: &str) -> Option<FontSpec> {
            self.fonts.get(key).cloned()
        }
    }

    #[derive(Default)]
    struct RecordingWidget {
        background: Option<Color>,
        foreground: Option<Color>,
        font: Option<FontSpec>,
    }

    impl StyledWidget for RecordingWidget {
        fn set_background(&mut self, color: Color) {
            self.background = Some(color);
        }

        fn set_foreground(&mut self, color: Color) {
            self.foreground = Some(color);
        }

        fn set_font(&mut self, font: &FontSpec) {
            self.font = Some(font.clone());
        }
    }

    #[test]
    fn empty_theme_falls_back_to_defaults() {
        let style = resolve_style(WidgetKind::Button, &EmptyTheme, &StyleDefaults::default());
        assert_eq!(style.background, Color::WHITE);
        assert_eq!(style.foreground, Color::BLACK);
        assert_eq!(style.font, FontSpec::default());
    }

    #[test]
    fn widget_key_wins_over_generic_key() {
        let mut theme = MapTheme::default();
        theme.colors.insert("Button.background".into(), Color::new(10, 20, 30));
        theme.colors.insert("control".into(), Color::new(1, 2, 3));

        let style = resolve_style(WidgetKind::Button, &theme, &StyleDefaults::default());
        assert_eq!(style.background, Color::new(10, 20, 30));

        let label = resolve_style(WidgetKind::Label, &theme, &StyleDefaults::default());
        assert_eq!(label.background, Color::new(1, 2, 3));
    }

    #[test]
    fn fontless_categories_use_generic_font_key() {
        let mut theme = MapTheme::default();
        theme
            .fonts
            .insert("Label.font".into(), FontSpec::new("Inter", FontStyle::Plain, 13));

        let style = resolve_style(WidgetKind::Window, &theme, &StyleDefaults::default());
        assert_eq!(style.font.family, "Inter");
    }

    #[test]
    fn absent_widget_is_a_no_op() {
        apply_defaults::<RecordingWidget>(
            None,
            WidgetKind::Label,
            &EmptyTheme,
            &StyleDefaults::default(),
        );
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let mut widget = RecordingWidget::default();
        let defaults = StyleDefaults::default();

        apply_defaults(Some(&mut widget), WidgetKind::Table, &EmptyTheme, &defaults);
        let first = (widget.background, widget.foreground, widget.font.clone());

        apply_defaults(Some(&mut widget), WidgetKind::Table, &EmptyTheme, &defaults);
        assert_eq!(first, (widget.background, widget.foreground, widget.font));
    }

    #[test]
    fn shifted_clamps_channels() {
        assert_eq!(Color::new(10, 128, 250).shifted(20), Color::new(30, 148, 255));
        assert_eq!(Color::new(10, 128, 250).shifted(-20), Color::new(0, 108, 230));
        assert_eq!(Color::WHITE.shifted(500), Color::WHITE);
        assert_eq!(Color::BLACK.shifted(-500), Color::BLACK);
    }
}
