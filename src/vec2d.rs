use crate::renderer::PixelSurface;
use crate::rgb_to_u32;

#[derive(Clone, Debug)]
pub struct Vec2D<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Vec2D<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Vec2D<T> {
        Vec2D {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
}

impl<T> Vec2D<T> {
    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        self.buffer[y * self.width + x] = value
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

/// Raw `[r, g, b, a]` cells.
impl PixelSurface for Vec2D<[u8; 4]> {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    fn write_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        self.write_at(x, y, rgba);
    }
}

/// Packed `0RGB` cells, the layout minifb presents.
impl PixelSurface for Vec2D<u32> {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    fn write_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let [r, g, b, _] = rgba;
        self.write_at(x, y, rgb_to_u32(r, g, b));
    }
}
