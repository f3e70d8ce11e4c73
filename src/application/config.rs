//! Startup configuration and pixel geometry.
//!
//! Only `width`, `height` and `step_duration` reach the simulation core; the
//! rest are hints for the rendering collaborator.

use std::str::FromStr;
use std::time::Duration;

use crate::domain::{BoardBounds, Cell, LifeError};

use super::StepInterval;

/// How live cells are drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellShape {
    #[default]
    Circle,
    Rect,
}

impl CellShape {
    /// Parse a shape name; unknown names fall back to `Circle`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "rect" => CellShape::Rect,
            "circle" => CellShape::Circle,
            other => {
                log::warn!("unknown cell type {other:?}, drawing circles");
                CellShape::Circle
            }
        }
    }
}

/// An sRGB color parsed from `#rgb` or `#rrggbb`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for HexColor {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidColor(s.to_owned());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());
        match digits.len() {
            // #abc expands to #aabbcc
            3 => {
                let expand = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

/// Size of one cell on screen, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Geometry {
    /// Total canvas width including the closing grid line
    pub fn pixel_width(&self, bounds: &BoardBounds) -> f32 {
        1.0 + bounds.width() as f32 * self.cell_width
    }

    /// Total canvas height including the closing grid line
    pub fn pixel_height(&self, bounds: &BoardBounds) -> f32 {
        1.0 + bounds.height() as f32 * self.cell_height
    }

    /// Board coordinate under a pixel. The result may lie outside the
    /// board; the engine is responsible for rejecting it.
    pub fn cell_at(&self, pixel_x: f32, pixel_y: f32) -> Cell {
        Cell::new(
            (pixel_x / self.cell_width).floor() as i32,
            (pixel_y / self.cell_height).floor() as i32,
        )
    }

    /// Top-left pixel of a cell
    pub fn origin_of(&self, cell: Cell) -> (f32, f32) {
        (
            cell.x as f32 * self.cell_width,
            cell.y as f32 * self.cell_height,
        )
    }
}

/// Everything supplied once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: i32,
    pub height: i32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub step_duration: Duration,
    pub cell_type: CellShape,
    pub grid_color: HexColor,
    pub alive_cell_color: HexColor,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 150,
            height: 60,
            cell_width: 10.0,
            cell_height: 10.0,
            step_duration: Duration::from_millis(50),
            cell_type: CellShape::Circle,
            grid_color: HexColor::new(0xcc, 0xcc, 0xcc),
            alive_cell_color: HexColor::new(0, 0, 0),
        }
    }
}

impl Config {
    /// Defaults overridden by `LIFE_*` environment variables
    pub fn from_env() -> Result<Self, LifeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `LIFE_*` key
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, LifeError> {
        let mut config = Self::default();

        if let Some(v) = lookup("LIFE_WIDTH") {
            config.width = parse("LIFE_WIDTH", &v)?;
        }
        if let Some(v) = lookup("LIFE_HEIGHT") {
            config.height = parse("LIFE_HEIGHT", &v)?;
        }
        if let Some(v) = lookup("LIFE_CELL_WIDTH") {
            config.cell_width = parse_size("LIFE_CELL_WIDTH", &v)?;
        }
        if let Some(v) = lookup("LIFE_CELL_HEIGHT") {
            config.cell_height = parse_size("LIFE_CELL_HEIGHT", &v)?;
        }
        if let Some(v) = lookup("LIFE_STEP_MS") {
            config.step_duration = Duration::from_millis(parse("LIFE_STEP_MS", &v)?);
        }
        if let Some(v) = lookup("LIFE_CELL_TYPE") {
            config.cell_type = CellShape::from_name(&v);
        }
        if let Some(v) = lookup("LIFE_GRID_COLOR") {
            config.grid_color = v.parse()?;
        }
        if let Some(v) = lookup("LIFE_ALIVE_COLOR") {
            config.alive_cell_color = v.parse()?;
        }

        Ok(config)
    }

    /// Board dimensions as validated bounds
    pub fn bounds(&self) -> Result<BoardBounds, LifeError> {
        BoardBounds::new(self.width, self.height)
    }

    /// Scheduler tick interval
    pub fn step_interval(&self) -> Result<StepInterval, LifeError> {
        StepInterval::new(self.step_duration)
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            cell_width: self.cell_width,
            cell_height: self.cell_height,
        }
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, LifeError> {
    value.trim().parse().map_err(|_| LifeError::InvalidConfig {
        key,
        value: value.to_owned(),
    })
}

fn parse_size(key: &'static str, value: &str) -> Result<f32, LifeError> {
    let size: f32 = parse(key, value)?;
    if size.is_finite() && size >= 1.0 {
        Ok(size)
    } else {
        Err(LifeError::InvalidConfig {
            key,
            value: value.to_owned(),
        })
    }
}
