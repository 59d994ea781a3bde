//! Widget property-key table.
//!
//! Maps each widget category to the theme keys its background, foreground and
//! font are looked up under. One table replaces per-type dispatch: adding a
//! category means adding one enum variant and one table entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Widget categories that share theme keys.
///
/// Categories group widgets by how they are themed, not by concrete type; a
/// toolkit's plain and rich button variants both map to [`WidgetKind::Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    CheckBox,
    ComboBox,
    Dialog,
    Label,
    List,
    Menu,
    MenuBar,
    MenuItem,
    OptionPane,
    Panel,
    PasswordField,
    PopupMenu,
    RadioButton,
    ScrollBar,
    ScrollPane,
    Separator,
    SplitPane,
    TabbedPane,
    Table,
    TextArea,
    TextComponent,
    TextField,
    Tree,
    Window,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 25] = [
        WidgetKind::Button,
        WidgetKind::CheckBox,
        WidgetKind::ComboBox,
        WidgetKind::Dialog,
        WidgetKind::Label,
        WidgetKind::List,
        WidgetKind::Menu,
        WidgetKind::MenuBar,
        WidgetKind::MenuItem,
        WidgetKind::OptionPane,
        WidgetKind::Panel,
        WidgetKind::PasswordField,
        WidgetKind::PopupMenu,
        WidgetKind::RadioButton,
        WidgetKind::ScrollBar,
        WidgetKind::ScrollPane,
        WidgetKind::Separator,
        WidgetKind::SplitPane,
        WidgetKind::TabbedPane,
        WidgetKind::Table,
        WidgetKind::TextArea,
        WidgetKind::TextComponent,
        WidgetKind::TextField,
        WidgetKind::Tree,
        WidgetKind::Window,
    ];

    /// Returns the theme keys this category is styled under.
    pub fn property_keys(self) -> &'static PropertyKeys {
        &PROPERTY_KEYS[&self]
    }

    fn build_keys(self) -> PropertyKeys {
        match self {
            // Top-level and text containers use system color keys and have no
            // font key of their own; the font comes from the generic fallback.
            WidgetKind::Window => PropertyKeys::system("window", "windowText"),
            WidgetKind::Dialog => PropertyKeys::system("control", "controlText"),
            WidgetKind::TextComponent => PropertyKeys::system("text", "textText"),

            WidgetKind::Button => PropertyKeys::prefixed("Button"),
            WidgetKind::CheckBox => PropertyKeys::prefixed("CheckBox"),
            WidgetKind::ComboBox => PropertyKeys::prefixed("ComboBox"),
            WidgetKind::Label => PropertyKeys::prefixed("Label"),
            WidgetKind::List => PropertyKeys::prefixed("List"),
            WidgetKind::Menu => PropertyKeys::prefixed("Menu"),
            WidgetKind::MenuBar => PropertyKeys::prefixed("MenuBar"),
            WidgetKind::MenuItem => PropertyKeys::prefixed("MenuItem"),
            WidgetKind::OptionPane => PropertyKeys::prefixed("OptionPane"),
            WidgetKind::Panel => PropertyKeys::prefixed("Panel"),
            WidgetKind::PasswordField => PropertyKeys::prefixed("PasswordField"),
            WidgetKind::PopupMenu => PropertyKeys::prefixed("PopupMenu"),
            WidgetKind::RadioButton => PropertyKeys::prefixed("RadioButton"),
            WidgetKind::ScrollBar => PropertyKeys::prefixed("ScrollBar"),
            WidgetKind::ScrollPane => PropertyKeys::prefixed("ScrollPane"),
            WidgetKind::Separator => PropertyKeys::prefixed("Separator"),
            WidgetKind::SplitPane => PropertyKeys::prefixed("SplitPane"),
            WidgetKind::TabbedPane => PropertyKeys::prefixed("TabbedPane"),
            WidgetKind::Table => PropertyKeys::prefixed("Table"),
            WidgetKind::TextArea => PropertyKeys::prefixed("TextArea"),
            WidgetKind::TextField => PropertyKeys::prefixed("TextField"),
            WidgetKind::Tree => PropertyKeys::prefixed("Tree"),
        }
    }
}

/// Theme keys for one widget category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyKeys {
    pub background: String,
    pub foreground: String,
    /// `None` for categories that take the generic fallback font directly.
    pub font: Option<String>,
}

impl PropertyKeys {
    fn prefixed(prefix: &str) -> Self {
        Self {
            background: format!("{prefix}.background"),
            foreground: format!("{prefix}.foreground"),
            font: Some(format!("{prefix}.font")),
        }
    }

    fn system(background: &str, foreground: &str) -> Self {
        Self {
            background: background.to_string(),
            foreground: foreground.to_string(),
            font: None,
        }
    }
}

static PROPERTY_KEYS: Lazy<HashMap<WidgetKind, PropertyKeys>> = Lazy::new(|| {
    WidgetKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.build_keys()))
        .collect()
});
