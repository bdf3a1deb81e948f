use std::{ops::Range, path::Path};

use image::{Rgba, RgbaImage};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{color::Color, error::RenderError};

/// Row-major pixel buffer with a top-left origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<Color>,
}

impl Raster {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            background,
            pixels: vec![background.clamped(); size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel at raster column `x` and row `y`.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Writes `color` at canvas coordinates (origin at the center, `y` up).
    /// Coordinates outside the canvas are ignored.
    pub fn put_pixel(&mut self, cx: i64, cy: i64, color: Color) {
        let Some(y) = canvas_to_row(cy, self.height) else {
            return;
        };
        if let Some(mut row) = self.rows_mut().nth(y) {
            row.put_pixel(cx, color);
        }
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = RasterRow<'_>> {
        let (width, height, background) = (self.width, self.height, self.background);
        self.pixels
            .chunks_mut((width as usize).max(1))
            .enumerate()
            .map(move |(y, pixels)| RasterRow {
                y: y as u32,
                width,
                height,
                background,
                pixels,
            })
    }

    #[cfg(feature = "parallel")]
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = RasterRow<'_>> {
        let (width, height, background) = (self.width, self.height, self.background);
        self.pixels
            .par_chunks_mut((width as usize).max(1))
            .enumerate()
            .map(move |(y, pixels)| RasterRow {
                y: y as u32,
                width,
                height,
                background,
                pixels,
            })
    }

    /// RGBA bytes, four per pixel, in raster order.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(Color::to_rgba8).collect()
    }

    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (pixel, color) in img.pixels_mut().zip(&self.pixels) {
            *pixel = Rgba(color.to_rgba8());
        }
        img
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        self.to_image().save(path)?;
        Ok(())
    }
}

/// One raster row, exclusively borrowed so rows can be filled independently.
#[derive(Debug)]
pub struct RasterRow<'a> {
    y: u32,
    width: u32,
    height: u32,
    background: Color,
    pixels: &'a mut [Color],
}

impl RasterRow<'_> {
    pub fn y(&self) -> u32 {
        self.y
    }

    /// Canvas `y` of this row, positive above the center.
    pub fn canvas_y(&self) -> i64 {
        (self.height / 2) as i64 - self.y as i64
    }

    /// Canvas `x` of every pixel in the row, left to right.
    pub fn canvas_xs(&self) -> Range<i64> {
        let half = (self.width / 2) as i64;
        -half..self.width as i64 - half
    }

    /// Clamps `color` and stores it at canvas column `cx`. A color carrying NaN is
    /// replaced by the background.
    pub fn put_pixel(&mut self, cx: i64, color: Color) {
        let Some(x) = canvas_to_column(cx, self.width) else {
            return;
        };
        let color = if color.has_nan() {
            self.background
        } else {
            color
        };
        self.pixels[x] = color.clamped();
    }
}

fn canvas_to_column(cx: i64, width: u32) -> Option<usize> {
    let x = cx + (width / 2) as i64;
    (0..width as i64).contains(&x).then_some(x as usize)
}

fn canvas_to_row(cy: i64, height: u32) -> Option<usize> {
    let y = (height / 2) as i64 - cy;
    (0..height as i64).contains(&y).then_some(y as usize)
}
