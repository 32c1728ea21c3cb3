//! The style table shared by every document view.
//!
//! Display styling is split in two. A [`StyleTable`] holds one color per
//! syntax [`StyleClass`] plus the global font face and size; it is owned by
//! the host and injected into the session passes, so the crate never carries
//! global style state of its own. The editor background is the odd one out:
//! it occupies the last persisted slot ([`BACKGROUND_SLOT`]) in the session
//! file, but at runtime it lives on
//! [`SessionState::background`](crate::SessionState::background) as an
//! optional override rather than in the table.

use crate::color::Color;

/// Syntax style classes, in persisted slot order (`00` through `07`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Plain text.
    Text,
    /// Comments.
    Comment,
    /// String literals.
    StringLiteral,
    /// Language keywords.
    Keyword,
    /// Built-in function names.
    Function,
    /// Procedure and subroutine names.
    Procedure,
    /// Find-result highlight.
    FindMatch,
    /// Annotation comments.
    Annotation,
}

impl StyleClass {
    /// Number of syntax classes, excluding the background slot.
    pub const COUNT: usize = 8;

    /// Every class, in slot order.
    pub const ALL: [StyleClass; Self::COUNT] = [
        StyleClass::Text,
        StyleClass::Comment,
        StyleClass::StringLiteral,
        StyleClass::Keyword,
        StyleClass::Function,
        StyleClass::Procedure,
        StyleClass::FindMatch,
        StyleClass::Annotation,
    ];

    /// Slot index of this class in the session file.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Class stored at `index`, or `None` for the background slot and
    /// anything past it.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Slot index that stores the editor background color.
pub const BACKGROUND_SLOT: usize = StyleClass::COUNT;

/// Total number of persisted style slots, background included.
pub const SLOT_COUNT: usize = StyleClass::COUNT + 1;

/// Background written out when no override has been chosen.
pub const DEFAULT_BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);

/// Host-owned colors and font shared by every document view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    colors: [Color; StyleClass::COUNT],
    font_face: String,
    font_size: usize,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            colors: [
                Color::rgb(0x00, 0x00, 0x00), // Text
                Color::rgb(0x00, 0x80, 0x00), // Comment
                Color::rgb(0x80, 0x00, 0x80), // StringLiteral
                Color::rgb(0x00, 0x00, 0xc0), // Keyword
                Color::rgb(0xb0, 0x60, 0x00), // Function
                Color::rgb(0x00, 0x80, 0x80), // Procedure
                Color::rgb(0x80, 0x80, 0x00), // FindMatch
                Color::rgb(0x60, 0x60, 0x60), // Annotation
            ],
            font_face: "Courier".to_string(),
            font_size: 12,
        }
    }
}

impl StyleTable {
    /// Creates a table with the default palette, `Courier` at 12 points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color currently assigned to `class`.
    pub fn color(&self, class: StyleClass) -> Color {
        self.colors[class.index()]
    }

    /// Reassigns the color for `class`.
    pub fn set_color(&mut self, class: StyleClass, color: Color) {
        self.colors[class.index()] = color;
    }

    /// Global font face name.
    pub fn font_face(&self) -> &str {
        &self.font_face
    }

    /// Replaces the global font face name.
    pub fn set_font_face(&mut self, face: impl Into<String>) {
        self.font_face = face.into();
    }

    /// Global font size in points.
    pub fn font_size(&self) -> usize {
        self.font_size
    }

    /// Replaces the global font size.
    pub fn set_font_size(&mut self, size: usize) {
        self.font_size = size;
    }
}
