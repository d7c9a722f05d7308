//! Rendering module
//!
//! The draw pass is stateless: it reads the session and issues calls on a
//! [`Canvas`]. Gameplay is drawn in the fixed 640x480 logical space; HUD text
//! is laid out relative to the canvas' own reported size.

pub mod draw;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

pub use draw::draw;
pub use recording::{DrawCall, RecordingCanvas};

#[cfg(target_arch = "wasm32")]
pub use canvas2d::WebCanvas;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Vertical text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Top,
    Middle,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Top => "top",
            TextBaseline::Middle => "middle",
        }
    }
}

/// Drop shadow behind text
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: String,
    pub blur: f64,
}

/// Everything needed to place one string
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: String,
    /// CSS font shorthand, e.g. `"20px monospace"`
    pub font: String,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub shadow: Option<Shadow>,
}

impl TextStyle {
    pub fn new(color: &str, font: impl Into<String>) -> Self {
        Self {
            color: color.to_string(),
            font: font.into(),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            shadow: None,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn shadow(mut self, color: &str, blur: f64) -> Self {
        self.shadow = Some(Shadow {
            color: color.to_string(),
            blur,
        });
        self
    }
}

/// Opaque 2D drawing surface. Colors are CSS color strings.
pub trait Canvas {
    /// Surface size in its own pixels (width, height)
    fn size(&self) -> (f64, f64);
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
    /// Push drawing style state
    fn save(&mut self);
    /// Pop drawing style state
    fn restore(&mut self);
}

/// Colors for non-entity elements
pub mod colors {
    pub const PITCH: &str = "black";
    pub const CENTER_LINE: &str = "white";
    pub const TEXT: &str = "white";
    pub const TEXT_SHADOW: &str = "black";
    pub const GAME_OVER_PANEL: &str = "rgba(0, 0, 0, 0.7)";
}
