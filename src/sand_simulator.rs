//! SDL2 front end: window, pointer input and drawing around a [`Grid`].

use crate::color::Rgb;
use crate::config::SimulationConfig;
use crate::error::AppError;
use crate::grid::Grid;
use crate::vec::Vec2;
use log::{debug, info, warn};
use sdl2::{
    event::Event, keyboard::Keycode, mouse::MouseButton, pixels::Color, rect::Rect,
    render::Canvas, video::Window, EventPump,
};

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::RGB(c.r, c.g, c.b)
    }
}

fn get_sdl_window(
    sdl_context: &sdl2::Sdl,
    title: &str,
    size: Vec2<u32>,
) -> Result<Window, AppError> {
    let video_subsystem = sdl_context.video().map_err(AppError::Sdl)?;
    video_subsystem
        .window(title, size.x, size.y)
        .position_centered()
        .build()
        .map_err(|e| AppError::Sdl(e.to_string()))
}

fn clear_canvas_with_color(canvas: &mut Canvas<Window>, color: Color) {
    canvas.set_draw_color(color);
    canvas.clear();
}

pub struct App {
    running: bool,
    paused: bool,
    spawning: bool,
    grid: Grid,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    mouse_pos: Vec2<i32>,
    background: Color,
}

impl App {
    pub fn new(config: &SimulationConfig) -> Result<Self, AppError> {
        let grid = Grid::from_config(config)?;
        info!(
            "Sand grid {}x{} cells ({} px per cell)",
            grid.width(),
            grid.height(),
            grid.cell_size()
        );

        let sdl_context = sdl2::init().map_err(AppError::Sdl)?;
        let window = get_sdl_window(
            &sdl_context,
            "sand",
            Vec2::new(config.window_width, config.window_height),
        )?;

        let mut app = App {
            running: true,
            paused: false,
            spawning: false,
            grid,
            event_pump: sdl_context.event_pump().map_err(AppError::Sdl)?,
            canvas: window
                .into_canvas()
                .build()
                .map_err(|e| AppError::Sdl(e.to_string()))?,
            mouse_pos: [0, 0].into(),
            background: Rgb::from(config.background).into(),
        };

        app.render();

        Ok(app)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn input(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => self.running = false,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => {
                    self.paused = !self.paused;
                    debug!("Simulation {}", if self.paused { "paused" } else { "resumed" });
                }
                Event::KeyDown {
                    keycode: Some(Keycode::C),
                    ..
                } => self.grid.clear(),
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    self.mouse_pos = [x, y].into();
                    self.spawning = true;
                }
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => self.spawning = false,
                Event::MouseMotion { x, y, .. } => {
                    self.mouse_pos = [x, y].into();
                }
                _ => {}
            }
        }
    }

    pub fn update(&mut self) {
        if self.spawning {
            let cell = self.mouse_pos.to_cell(self.grid.cell_size());
            self.grid.spawn(cell.x, cell.y);
        }
        if !self.paused {
            self.grid.step();
        }
    }

    pub fn render(&mut self) {
        clear_canvas_with_color(&mut self.canvas, self.background);
        let scale = self.grid.cell_size();
        let side = scale.ceil() as u32;
        for (row, col, color) in self.grid.cells_snapshot().occupied() {
            self.canvas.set_draw_color(Color::from(color));
            let rect = Rect::new(
                (col as f32 * scale) as i32,
                (row as f32 * scale) as i32,
                side,
                side,
            );
            if let Err(e) = self.canvas.fill_rect(rect) {
                warn!("Failed to draw cell ({}, {}): {}", row, col, e);
            }
        }
        self.canvas.present();
    }
}
