#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// All three channels set to the same value.
    pub fn splat(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }
}

/// One memory row's worth of pixels. Length must equal the owning
/// memory's configured row width.
pub type MemoryRow = Vec<Pixel>;

/// Single-port block RAM model. Rows are copied in and out whole; a
/// wrong-width row or out-of-range address is a bug in the surrounding
/// logic and halts the model immediately.
pub struct BlockRam {
    row_width: usize,
    depth: usize,
    mem: Vec<MemoryRow>,
}

impl Default for BlockRam {
    fn default() -> Self {
        Self::new(7, 1024)
    }
}

impl BlockRam {
    pub fn new(row_width: usize, depth: usize) -> Self {
        Self {
            row_width,
            depth,
            mem: vec![vec![Pixel::BLACK; row_width]; depth],
        }
    }

    pub fn row_width(&self) -> usize {
        self.row_width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn fill_zero(&mut self) {
        self.fill_const(0);
    }

    /// Every channel of every pixel set to `value`.
    pub fn fill_const(&mut self, value: u8) {
        for row in self.mem.iter_mut() {
            row.fill(Pixel::splat(value));
        }
    }

    /// Pixel values count up along each row, restarting at 0 per row and
    /// wrapping at 256.
    pub fn fill_incrementing(&mut self) {
        for row in self.mem.iter_mut() {
            for (idx, pixel) in row.iter_mut().enumerate() {
                *pixel = Pixel::splat(idx as u8);
            }
        }
    }

    /// Every pixel in a row carries the row's own address, so a readback
    /// mismatch points straight at an addressing bug.
    pub fn fill_row_address(&mut self) {
        for (address, row) in self.mem.iter_mut().enumerate() {
            row.fill(Pixel::splat(address as u8));
        }
    }

    pub fn write(&mut self, address: usize, row: MemoryRow) {
        if row.len() != self.row_width {
            panic!(
                "Write of {}-pixel row to memory with row width {}",
                row.len(),
                self.row_width
            );
        }
        if address >= self.depth {
            panic!(
                "Write to address {} outside memory depth {}",
                address, self.depth
            );
        }
        self.mem[address] = row;
    }

    pub fn read(&self, address: usize) -> MemoryRow {
        if address >= self.depth {
            panic!(
                "Read from address {} outside memory depth {}",
                address, self.depth
            );
        }
        self.mem[address].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_roundtrip() {
        let mut bram = BlockRam::default();
        let row: MemoryRow = (0..7).map(|i| Pixel::new(i, i + 1, i + 2)).collect();

        bram.write(13, row.clone());
        assert_eq!(bram.read(13), row);
    }

    #[test]
    fn test_default_dimensions() {
        let bram = BlockRam::default();

        assert_eq!(bram.row_width(), 7);
        assert_eq!(bram.depth(), 1024);
        assert_eq!(bram.read(1023).len(), 7);
    }

    #[test]
    fn test_fill_const() {
        let mut bram = BlockRam::new(7, 16);
        bram.fill_const(0xAB);

        for address in 0..16 {
            for pixel in bram.read(address) {
                assert_eq!(pixel, Pixel::splat(0xAB));
            }
        }
    }

    #[test]
    fn test_fill_incrementing_restarts_per_row() {
        let mut bram = BlockRam::new(7, 16);
        bram.fill_incrementing();

        for address in 0..16 {
            let row = bram.read(address);
            for (idx, pixel) in row.iter().enumerate() {
                assert_eq!(*pixel, Pixel::splat(idx as u8));
            }
        }
    }

    #[test]
    fn test_fill_incrementing_wraps_at_256() {
        let mut bram = BlockRam::new(300, 2);
        bram.fill_incrementing();

        let row = bram.read(0);
        assert_eq!(row[255], Pixel::splat(255));
        assert_eq!(row[256], Pixel::splat(0));
        assert_eq!(row[299], Pixel::splat(43));
    }

    #[test]
    fn test_fill_row_address() {
        let mut bram = BlockRam::new(7, 600);
        bram.fill_row_address();

        for address in 0..600 {
            for pixel in bram.read(address) {
                assert_eq!(pixel, Pixel::splat((address % 256) as u8));
            }
        }
    }

    #[test]
    #[should_panic(expected = "outside memory depth")]
    fn test_read_out_of_range() {
        let bram = BlockRam::default();
        bram.read(1024);
    }

    #[test]
    #[should_panic(expected = "outside memory depth")]
    fn test_write_out_of_range() {
        let mut bram = BlockRam::default();
        bram.write(1024, vec![Pixel::BLACK; 7]);
    }

    #[test]
    #[should_panic(expected = "row width")]
    fn test_write_wrong_width() {
        let mut bram = BlockRam::default();
        bram.write(0, vec![Pixel::BLACK; 6]);
    }

    #[test]
    fn test_frame_buffer_scenario() {
        // Depth sized past the default 1024 so address 1024 is valid
        let mut bram = BlockRam::new(7, 2742);
        bram.fill_zero();

        let row = vec![Pixel::new(42, 69, 200); 7];
        bram.write(1024, row.clone());

        assert_eq!(bram.read(1024), row);
        for address in (0..2742).filter(|a| *a != 1024) {
            for pixel in bram.read(address) {
                assert_eq!(pixel, Pixel::BLACK);
            }
        }
    }
}
