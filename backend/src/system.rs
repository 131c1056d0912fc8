use ballistics::surface::{Color, RenderSurface};
use sdl2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::fmt;

/// SDL could not give us something to draw on.
#[derive(Debug)]
pub enum StartupError {
    Init(String),
    Window(String),
    Renderer(String),
    EventPump(String),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Init(e) => write!(f, "SDL could not initialize! SDL_Error: {e}"),
            StartupError::Window(e) => write!(f, "Window could not be created! SDL_Error: {e}"),
            StartupError::Renderer(e) => {
                write!(f, "Renderer could not be created! SDL_Error: {e}")
            }
            StartupError::EventPump(e) => {
                write!(f, "Event pump could not be created! SDL_Error: {e}")
            }
        }
    }
}

impl std::error::Error for StartupError {}

impl StartupError {
    /// Process exit status for a failed startup
    pub fn exit_code(&self) -> i32 {
        match self {
            StartupError::Init(_)
            | StartupError::Window(_)
            | StartupError::Renderer(_)
            | StartupError::EventPump(_) => -1,
        }
    }
}

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub canvas: Canvas<Window>,
    event_pump: sdl2::EventPump,
    close_requested: bool,
}

impl System {
    pub fn new(w: usize, h: usize, title: &str) -> Result<System, StartupError> {
        let sdl_context = sdl2::init().map_err(StartupError::Init)?;
        let video_subsystem = sdl_context.video().map_err(StartupError::Init)?;

        let window = match video_subsystem
            .window(title, w as u32, h as u32)
            .position_centered()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(StartupError::Window(e.to_string())),
        };

        let canvas = match window.into_canvas().accelerated().build() {
            Ok(c) => c,
            Err(e) => return Err(StartupError::Renderer(e.to_string())),
        };
        let event_pump = sdl_context.event_pump().map_err(StartupError::EventPump)?;

        log::info!(
            "window {w}x{h} ready, renderer {}",
            canvas.info().name
        );

        Ok(System {
            w,
            h,
            sdl_context,
            video_subsystem,
            canvas,
            event_pump,
            close_requested: false,
        })
    }

    /// Drains pending events; false once the window was closed or Escape pressed.
    pub fn process_io_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => self.close_requested = true,
                _ => {}
            }
        }
        !self.close_requested
    }
}

impl RenderSurface for System {
    fn set_draw_color(&mut self, color: Color) {
        self.canvas
            .set_draw_color(sdl2::pixels::Color::RGB(color.r, color.g, color.b));
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        if let Err(e) = self.canvas.draw_point(Point::new(x, y)) {
            log::debug!("draw_point({x}, {y}) failed: {e}");
        }
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if let Err(e) = self
            .canvas
            .draw_line(Point::new(x1, y1), Point::new(x2, y2))
        {
            log::debug!("draw_line failed: {e}");
        }
    }

    fn present(&mut self) {
        self.canvas.present();
    }

    fn poll_close_request(&mut self) -> bool {
        let open = self.process_io_events();
        if !open {
            log::debug!("close requested");
        }
        !open
    }
}
