//! Free text label.

use super::Point;
use serde::{Deserialize, Serialize};

/// A free text label, placed through a confirmed text entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Baseline origin.
    pub x: f64,
    pub y: f64,
    /// Trimmed, non-empty content.
    pub content: String,
}

impl Text {
    /// Font size used for free text.
    pub const FONT_SIZE: f64 = 16.0;

    /// Create a text label from raw input. Returns `None` if the input is
    /// blank after trimming.
    pub fn new(position: Point, content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            x: position.x,
            y: position.y,
            content: trimmed.to_string(),
        })
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trimmed() {
        let text = Text::new(Point::new(1.0, 2.0), "  Storage room \n").unwrap();
        assert_eq!(text.content, "Storage room");
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(Text::new(Point::ZERO, "").is_none());
        assert!(Text::new(Point::ZERO, "   \t").is_none());
    }
}
