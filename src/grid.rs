//! The sand grid and its per-tick update rule.
//!
//! Cells are stored row-major, row 0 at the top. A tick reads the current buffer and writes
//! every particle into a cleared second buffer, sweeping rows bottom to top, then swaps the
//! two. Falls and topples are decided against the start-of-tick state; the destination buffer
//! is only consulted so a particle never lands on a slot another one already claimed this tick.

use crate::color::ColorCursor;
use crate::config::SimulationConfig;
use crate::error::GridError;
use crate::particle::Particle;
use crate::snapshot::CellsView;
use crate::vec::Vec2;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::alloc::Layout;
use std::f32::consts::TAU;

/// Where one particle ends up after a tick.
enum Move {
    Fell,
    Landed,
    Toppled,
    Rested,
}

#[derive(Default)]
struct TickCounts {
    fell: usize,
    landed: usize,
    toppled: usize,
    rested: usize,
}

pub struct Grid<R = StdRng> {
    width: usize,
    height: usize,
    cell_size: f32,
    gravity: f32,
    spawn_radius: u32,
    spawn_amount: u32,
    cells: Vec<Option<Particle>>,
    next: Vec<Option<Particle>>,
    colors: ColorCursor,
    rng: R,
    ticks: u64,
}

impl Grid<StdRng> {
    /// Creates an empty grid of `width_px / cell_size` by `height_px / cell_size` cells.
    pub fn new(
        width_px: u32,
        height_px: u32,
        cell_size: f32,
        gravity: f32,
        spawn_radius: u32,
        spawn_amount: u32,
    ) -> Result<Self, GridError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        if !(gravity.is_finite() && gravity >= 0.0) {
            return Err(GridError::InvalidGravity(gravity));
        }
        let (columns, rows) = (width_px as f32 / cell_size, height_px as f32 / cell_size);
        if !(columns.is_finite() && rows.is_finite()) {
            return Err(GridError::TooLarge {
                width_px,
                height_px,
                cell_size,
            });
        }
        let (width, height) = (columns as usize, rows as usize);
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid {
                width_px,
                height_px,
                cell_size,
            });
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| Layout::array::<Option<Particle>>(len).is_ok())
            .ok_or(GridError::TooLarge {
                width_px,
                height_px,
                cell_size,
            })?;

        Ok(Self {
            width,
            height,
            cell_size,
            gravity,
            spawn_radius,
            spawn_amount,
            cells: vec![None; len],
            next: vec![None; len],
            colors: ColorCursor::default(),
            rng: StdRng::from_entropy(),
            ticks: 0,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, GridError> {
        let grid = Self::new(
            config.window_width,
            config.window_height,
            config.cell_size,
            config.gravity,
            config.spawn_radius,
            config.spawn_amount,
        )?
        .with_color_cursor(ColorCursor::new(config.start_hue));
        Ok(match config.seed {
            Some(seed) => grid.with_rng(StdRng::seed_from_u64(seed)),
            None => grid,
        })
    }
}

impl<R: Rng> Grid<R> {
    /// Swaps in another random source for spawning and toppling.
    pub fn with_rng<R2: Rng>(self, rng: R2) -> Grid<R2> {
        Grid {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            gravity: self.gravity,
            spawn_radius: self.spawn_radius,
            spawn_amount: self.spawn_amount,
            cells: self.cells,
            next: self.next,
            colors: self.colors,
            rng,
            ticks: self.ticks,
        }
    }

    pub fn with_color_cursor(mut self, colors: ColorCursor) -> Self {
        self.colors = colors;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells_snapshot(&self) -> CellsView<'_> {
        CellsView::new(&self.cells, self.width, self.height)
    }

    /// Removes every particle.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        debug!("Grid cleared after {} ticks", self.ticks);
    }

    /// Sprinkles up to `spawn_amount` particles in a disk of `spawn_radius` cells around
    /// `(cell_x, cell_y)`. Points outside the grid or on occupied cells are skipped.
    pub fn spawn(&mut self, cell_x: i32, cell_y: i32) {
        let radius = self.spawn_radius as f32;
        let mut placed = 0;
        for _ in 0..self.spawn_amount {
            let theta = self.rng.gen_range(0.0..TAU);
            // sqrt keeps the density uniform over the disk's area
            let r = radius * self.rng.gen::<f32>().sqrt();
            let point = Vec2::new(
                cell_x as f32 + r * theta.cos(),
                cell_y as f32 + r * theta.sin(),
            )
            .truncate();
            let Some(index) = self.index_of(point) else {
                continue;
            };
            if self.cells[index].is_none() {
                self.cells[index] = Some(Particle::new(self.gravity, self.colors.next_color()));
                placed += 1;
            }
        }
        debug!(
            "Spawned {} of {} particles around ({}, {})",
            placed, self.spawn_amount, cell_x, cell_y
        );
    }

    /// Advances every particle by one tick.
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        self.next.fill(None);

        // the floor row has nowhere to go
        let floor = (height - 1) * width;
        self.next[floor..].copy_from_slice(&self.cells[floor..]);

        let mut counts = TickCounts::default();
        for y in (0..height - 1).rev() {
            for x in 0..width {
                let Some(mut particle) = self.cells[self.index(y, x)] else {
                    continue;
                };
                let (target, kind) = if self.cells[self.index(y + 1, x)].is_some() {
                    self.topple(x, y)
                } else {
                    self.fall(&mut particle, x, y)
                };
                debug_assert!(self.next[target].is_none(), "two particles in one cell");
                self.next[target] = Some(particle);
                match kind {
                    Move::Fell => counts.fell += 1,
                    Move::Landed => counts.landed += 1,
                    Move::Toppled => counts.toppled += 1,
                    Move::Rested => counts.rested += 1,
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.ticks += 1;
        trace!(
            "Tick {}: {} fell, {} landed, {} toppled, {} resting",
            self.ticks,
            counts.fell,
            counts.landed,
            counts.toppled,
            counts.rested
        );
    }

    /// Free fall from `(y, x)`, knowing the cell below was open at the start of the tick.
    /// The leap stops above the nearest taken cell in the particle's path.
    fn fall(&self, particle: &mut Particle, x: usize, y: usize) -> (usize, Move) {
        let target = y.saturating_add(particle.leap()).min(self.height - 1);
        match (y + 1..=target).find(|&row| self.is_taken(row, x)) {
            None => {
                particle.accelerate(self.gravity);
                (self.index(target, x), Move::Fell)
            }
            Some(row) => {
                let below = self.index(row, x);
                let velocity = self.cells[below]
                    .or(self.next[below])
                    .map_or(0.0, |p| p.fall_velocity());
                particle.land_on(velocity);
                (self.index(row - 1, x), Move::Landed)
            }
        }
    }

    /// Slide to a random open diagonal below `(y, x)`, or stay put.
    fn topple(&mut self, x: usize, y: usize) -> (usize, Move) {
        let below = y + 1;
        let mut open = [0; 2];
        let mut count = 0;
        for col in [x.checked_sub(1), Some(x + 1)].into_iter().flatten() {
            if col < self.width && !self.is_taken(below, col) {
                open[count] = col;
                count += 1;
            }
        }
        match open[..count].choose(&mut self.rng) {
            Some(&col) => (self.index(below, col), Move::Toppled),
            None => (self.index(y, x), Move::Rested),
        }
    }

    /// Occupied at the start of the tick, or already claimed in the destination.
    fn is_taken(&self, row: usize, col: usize) -> bool {
        let i = self.index(row, col);
        self.cells[i].is_some() || self.next[i].is_some()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn index_of(&self, point: Vec2<i64>) -> Option<usize> {
        let col = usize::try_from(point.x).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(point.y).ok().filter(|&r| r < self.height)?;
        Some(self.index(row, col))
    }
}
