/// Frame timing geometry: active resolution plus the horizontal and
/// vertical blanking widths around it. Everything downstream (counter
/// bounds, buffer depth) is derived from one of these.
#[derive(Clone, Copy, Debug)]
pub struct FrameGeometry {
    pub active_width: usize,
    pub active_height: usize,
    pub h_front_porch: usize,
    pub h_sync: usize,
    pub h_back_porch: usize,
    pub v_front_porch: usize,
    pub v_sync: usize,
    pub v_back_porch: usize,
    pub tile_size: usize,
}

impl Default for FrameGeometry {
    // 640x480@60 VGA timing
    fn default() -> Self {
        Self {
            active_width: 640,
            active_height: 480,
            h_front_porch: 16,
            h_sync: 96,
            h_back_porch: 48,
            v_front_porch: 10,
            v_sync: 2,
            v_back_porch: 33,
            tile_size: 4,
        }
    }
}

impl FrameGeometry {
    pub fn total_pixels_per_line(&self) -> usize {
        self.active_width + self.h_front_porch + self.h_sync + self.h_back_porch
    }

    pub fn total_lines_per_frame(&self) -> usize {
        self.active_height + self.v_front_porch + self.v_sync + self.v_back_porch
    }

    /// Ticks in one full frame, blanking included.
    pub fn total_pixels(&self) -> usize {
        self.total_pixels_per_line() * self.total_lines_per_frame()
    }

    pub fn total_tiles(&self) -> usize {
        (self.active_width * self.active_height) / (self.tile_size * self.tile_size)
    }

    pub fn tiles_per_line(&self) -> usize {
        self.active_width / self.tile_size
    }

    /// Rows needed to hold one tile entry per frame tile. Rounds up so
    /// a partial final row is still addressable.
    pub fn buffer_depth_rows(&self, row_width: usize) -> usize {
        (self.total_tiles() + row_width - 1) / row_width
    }

    /// Whether a raw scan position falls inside visible video. The counter
    /// exposes the raw position only; this is the derived predicate.
    pub fn is_active(&self, pixel: usize, line: usize) -> bool {
        pixel < self.active_width && line < self.active_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vga_line_and_frame_totals() {
        let geo = FrameGeometry::default();

        assert_eq!(geo.total_pixels_per_line(), 800);
        assert_eq!(geo.total_lines_per_frame(), 525);
        assert_eq!(geo.total_pixels(), 800 * 525);
    }

    #[test]
    fn test_tile_counts() {
        let geo = FrameGeometry::default();

        assert_eq!(geo.total_tiles(), 19200);
        assert_eq!(geo.tiles_per_line(), 160);
        // 19200 tiles do not divide evenly into 7-pixel rows; the
        // partial row at the end still needs an address
        assert_eq!(geo.buffer_depth_rows(7), 2743);
    }

    #[test]
    fn test_active_region_bounds() {
        let geo = FrameGeometry::default();

        assert!(geo.is_active(0, 0));
        assert!(geo.is_active(639, 479));
        assert!(!geo.is_active(640, 0));
        assert!(!geo.is_active(0, 480));
        assert!(!geo.is_active(799, 524));
    }
}
