//! Color definitions for viquill themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the viquill terminal UI. Colors are organized into three
//! categories: text area, status line and semantic colors.

use ratatui::style::Color;

use crate::editor::mode::EditorMode;

/// Defines all colors used in a viquill theme.
///
/// # Examples
///
/// ```
/// use viquill::theme::colors::ThemeColors;
///
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Text area
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Color for the cursor position indicator.
    pub cursor: Color,
    /// Background color for selected text in the visual modes.
    pub selection_bg: Color,
    /// Color for the line-number gutter.
    pub line_number: Color,

    // Status line
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Mode badge background in Normal mode.
    pub normal_badge: Color,
    /// Mode badge background in Insert mode.
    pub insert_badge: Color,
    /// Mode badge background in Visual and VisualLine modes.
    pub visual_badge: Color,
    /// Mode badge background while the command line is open.
    pub command_badge: Color,

    // Semantic colors
    /// Color for error messages.
    pub error: Color,
    /// Color for warning messages.
    pub warning: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// ANSI colors adapt to the user's terminal color scheme, so the actual RGB
    /// values displayed depend on their terminal configuration. The badges use
    /// blue for Normal and green for Insert.
    ///
    /// # Examples
    ///
    /// ```
    /// use viquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.insert_badge, Color::Green);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,
            cursor: Color::LightBlue,
            selection_bg: Color::DarkGray,
            line_number: Color::DarkGray,

            status_line_bg: Color::Black,
            status_line_fg: Color::White,
            normal_badge: Color::Blue,
            insert_badge: Color::Green,
            visual_badge: Color::Magenta,
            command_badge: Color::Yellow,

            error: Color::Red,
            warning: Color::Yellow,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use viquill::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(82, 139, 255),
            selection_bg: Color::Rgb(220, 220, 220),
            line_number: Color::Rgb(160, 161, 167),

            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),
            normal_badge: Color::Rgb(64, 120, 242),
            insert_badge: Color::Rgb(80, 161, 79),
            visual_badge: Color::Rgb(166, 38, 164),
            command_badge: Color::Rgb(152, 104, 1),

            error: Color::Rgb(202, 18, 67),
            warning: Color::Rgb(152, 104, 1),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Returns the Gruvbox Dark color scheme.
    ///
    /// A retro groove color scheme with warm, earthy tones.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),      // dark bg
            foreground: Color::Rgb(235, 219, 178),   // light fg
            cursor: Color::Rgb(251, 184, 108),       // orange
            selection_bg: Color::Rgb(80, 73, 69),    // bg2
            line_number: Color::Rgb(146, 131, 116),  // gray

            status_line_bg: Color::Rgb(60, 56, 54),    // darker bg
            status_line_fg: Color::Rgb(235, 219, 178), // light fg
            normal_badge: Color::Rgb(69, 133, 136),    // blue
            insert_badge: Color::Rgb(152, 151, 26),    // green
            visual_badge: Color::Rgb(177, 98, 134),    // purple
            command_badge: Color::Rgb(215, 153, 33),   // yellow

            error: Color::Rgb(251, 73, 52),    // red
            warning: Color::Rgb(250, 189, 47), // yellow
            info: Color::Rgb(131, 165, 152),   // aqua
        }
    }

    /// Returns the Nord color scheme.
    ///
    /// An arctic, north-bluish color palette.
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),    // polar night darkest
            foreground: Color::Rgb(216, 222, 233), // snow storm lightest
            cursor: Color::Rgb(136, 192, 208),     // frost cyan
            selection_bg: Color::Rgb(67, 76, 94),  // polar night
            line_number: Color::Rgb(76, 86, 106),  // polar night gray

            status_line_bg: Color::Rgb(59, 66, 82),    // polar night
            status_line_fg: Color::Rgb(216, 222, 233), // snow storm
            normal_badge: Color::Rgb(94, 129, 172),    // frost blue
            insert_badge: Color::Rgb(163, 190, 140),   // aurora green
            visual_badge: Color::Rgb(180, 142, 173),   // aurora purple
            command_badge: Color::Rgb(235, 203, 139),  // aurora yellow

            error: Color::Rgb(191, 97, 106),    // aurora red
            warning: Color::Rgb(235, 203, 139), // aurora yellow
            info: Color::Rgb(136, 192, 208),    // frost cyan
        }
    }

    /// Returns the badge background for `mode`.
    pub fn badge(&self, mode: EditorMode) -> Color {
        match mode {
            EditorMode::Normal => self.normal_badge,
            EditorMode::Insert => self.insert_badge,
            EditorMode::Visual | EditorMode::VisualLine => self.visual_badge,
            EditorMode::Command | EditorMode::Execute => self.command_badge,
        }
    }
}
