//! Framebuffer and style types for terminal rendering.
//!
//! All positions are `(row, col)`. Game coordinates are signed (the ball may
//! sit off-grid for a frame), so the drawing helpers take `i32` and clip.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(255, 255, 255))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        style: CellStyle::new(Rgb::new(255, 255, 255)),
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::BLANK);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: i32, col: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn get(&self, row: u16, col: u16) -> Option<Cell> {
        self.idx(row as i32, col as i32).map(|i| self.cells[i])
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Set one cell; off-grid positions are ignored.
    pub fn set_cell(&mut self, row: i32, col: i32, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write `s` left to right starting at `(row, col)`, clipped to the grid.
    pub fn put_str(&mut self, row: i32, col: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            self.set_cell(row, col + i as i32, ch, style);
        }
    }

    /// Write a signed decimal number without allocating.
    pub fn put_i32(&mut self, row: i32, col: i32, value: i32, style: CellStyle) {
        let mut digits = [0u8; 11];
        let mut n = value.unsigned_abs();
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        let mut c = col;
        if value < 0 {
            self.set_cell(row, c, '-', style);
            c += 1;
        }
        for &d in digits[..len].iter().rev() {
            self.set_cell(row, c, d as char, style);
            c += 1;
        }
    }

    /// Fill a `width x height` rectangle whose top-left is `(row, col)`.
    pub fn fill_rect(
        &mut self,
        row: i32,
        col: i32,
        width: i32,
        height: i32,
        ch: char,
        style: CellStyle,
    ) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_cell(row + dy, col + dx, ch, style);
            }
        }
    }
}
