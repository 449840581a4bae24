use macroquad::color::Color;
use macroquad::prelude::{clear_background, draw_line, draw_rectangle, screen_height, screen_width};
use macroquad::window::screen_dpi_scale;

/// A drawable target measured in logical pixels.
///
/// Hosts with a high-density backing store scale their drawing context by
/// [`Surface::device_pixel_ratio`] themselves; the renderer only ever speaks
/// logical units.
pub trait Surface {
    fn logical_size(&self) -> (f32, f32);

    fn device_pixel_ratio(&self) -> f32;

    fn fill_background(&mut self, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color);

    /// Surfaces without rounded primitives fall back to a plain rectangle
    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, _radius: f32, color: Color) {
        self.fill_rect(x, y, w, h, color);
    }
}

/// The macroquad window.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn logical_size(&self) -> (f32, f32) {
        (screen_width(), screen_height())
    }

    fn device_pixel_ratio(&self) -> f32 {
        screen_dpi_scale()
    }

    fn fill_background(&mut self, color: Color) {
        clear_background(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color) {
        draw_line(x1, y1, x2, y2, thickness, color);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(Color),
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    RoundedRect { x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color },
    Line { x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color },
}

/// Headless surface that records every draw call in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    device_pixel_ratio: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn set_device_pixel_ratio(&mut self, device_pixel_ratio: f32) {
        self.device_pixel_ratio = device_pixel_ratio;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands, leaving the surface empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }
}

impl Surface for RecordingSurface {
    fn logical_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    fn fill_background(&mut self, color: Color) {
        self.commands.push(DrawCommand::Background(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2, thickness, color });
    }

    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundedRect { x, y, w, h, radius, color });
    }
}
