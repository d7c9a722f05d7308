//! Canvas that records draw calls instead of painting
//!
//! Used by headless runs and tests. Only the current frame is kept: a clear
//! covering the whole surface starts a new frame.

use super::{Canvas, TextStyle};

/// One captured drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: String,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
    save_depth: usize,
    frames: u64,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
            save_depth: 0,
            frames: 0,
        }
    }

    /// Calls issued since the last full clear
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Unbalanced `save` count
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    /// Number of full-surface clears seen
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if x <= 0.0 && y <= 0.0 && w >= self.width && h >= self.height {
            self.calls.clear();
            self.frames += 1;
        }
        self.calls.push(DrawCall::Clear { x, y, w, h });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.calls.push(DrawCall::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.calls.push(DrawCall::Circle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
    }

    fn save(&mut self) {
        self.save_depth += 1;
    }

    fn restore(&mut self) {
        self.save_depth = self.save_depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_clear_starts_new_frame() {
        let mut canvas = RecordingCanvas::new(100.0, 50.0);
        canvas.clear_rect(0.0, 0.0, 100.0, 50.0);
        canvas.fill_rect(1.0, 2.0, 3.0, 4.0, "red");
        assert_eq!(canvas.calls().len(), 2);

        canvas.clear_rect(0.0, 0.0, 100.0, 50.0);
        assert_eq!(canvas.calls().len(), 1);
        assert_eq!(canvas.frames(), 2);
    }

    #[test]
    fn test_partial_clear_is_recorded() {
        let mut canvas = RecordingCanvas::new(100.0, 50.0);
        canvas.fill_circle(5.0, 5.0, 2.0, "blue");
        canvas.clear_rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(canvas.calls().len(), 2);
        assert_eq!(canvas.frames(), 0);
    }

    #[test]
    fn test_save_restore_depth() {
        let mut canvas = RecordingCanvas::new(10.0, 10.0);
        canvas.save();
        canvas.save();
        canvas.restore();
        assert_eq!(canvas.save_depth(), 1);
        canvas.restore();
        canvas.restore();
        assert_eq!(canvas.save_depth(), 0);
    }
}
