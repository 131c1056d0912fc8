/// RGB draw color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GRASS: Color = Color::rgb(34, 139, 34);
    pub const SOIL: Color = Color::rgb(101, 67, 33);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Immediate-mode drawing target owned by the simulation loop.
///
/// Mirrors a 2D renderer: the draw color is sticky state and every primitive uses
/// the color set last. Screen coordinates grow right and down.
pub trait RenderSurface {
    fn set_draw_color(&mut self, color: Color);
    /// Fill the whole surface with the current draw color
    fn clear(&mut self);
    fn draw_point(&mut self, x: i32, y: i32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn present(&mut self);
    /// Non-blocking; true once the user asked to close the window
    fn poll_close_request(&mut self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Color),
    Point(i32, i32, Color),
    Line(i32, i32, i32, i32, Color),
}

/// Windowless surface that keeps the draw calls of the frame in progress and of
/// the last presented frame.
#[derive(Debug)]
pub struct Recorder {
    pub width: u32,
    pub height: u32,
    color: Color,
    current: Vec<DrawOp>,
    last_frame: Vec<DrawOp>,
    presented: usize,
    polls: usize,
    close_after: Option<usize>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color: Color::BLACK,
            current: Vec::new(),
            last_frame: Vec::new(),
            presented: 0,
            polls: 0,
            close_after: None,
        }
    }

    /// Report a close request on the `polls`-th poll and every poll after it.
    pub fn close_after(mut self, polls: usize) -> Self {
        self.close_after = Some(polls);
        self
    }

    pub fn presented(&self) -> usize {
        self.presented
    }

    pub fn polls(&self) -> usize {
        self.polls
    }

    pub fn last_frame(&self) -> &[DrawOp] {
        &self.last_frame
    }

    pub fn pending(&self) -> &[DrawOp] {
        &self.current
    }

    /// Points of the last presented frame drawn in `color`
    pub fn points_in(&self, color: Color) -> Vec<(i32, i32)> {
        self.last_frame
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Point(x, y, c) if c == color => Some((x, y)),
                _ => None,
            })
            .collect()
    }

    pub fn lines_in(&self, color: Color) -> usize {
        self.last_frame
            .iter()
            .filter(|op| matches!(op, DrawOp::Line(.., c) if *c == color))
            .count()
    }
}

impl RenderSurface for Recorder {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color;
    }

    fn clear(&mut self) {
        self.current.clear();
        self.current.push(DrawOp::Clear(self.color));
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.current.push(DrawOp::Point(x, y, self.color));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.current.push(DrawOp::Line(x1, y1, x2, y2, self.color));
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.current);
        self.presented += 1;
    }

    fn poll_close_request(&mut self) -> bool {
        self.polls += 1;
        match self.close_after {
            Some(n) => self.polls >= n,
            None => false,
        }
    }
}
