use crate::geometry::FrameGeometry;

/// Raw scan position counter, one tick per pixel clock. Counts straight
/// through blanking; whether the position is visible is the caller's
/// question to ask of the geometry.
pub struct ScanCounter {
    pixel: usize,
    line: usize,
    pixels_per_line: usize,
    lines_per_frame: usize,
}

impl ScanCounter {
    pub fn new(geometry: &FrameGeometry) -> Self {
        Self {
            pixel: 0,
            line: 0,
            pixels_per_line: geometry.total_pixels_per_line(),
            lines_per_frame: geometry.total_lines_per_frame(),
        }
    }

    /// Progress by one pixel clock. Wraps the pixel counter at end of
    /// line and carries into the line counter, which wraps at end of
    /// frame. Every state has exactly one successor.
    pub fn advance(&mut self) {
        if self.pixel == self.pixels_per_line - 1 {
            self.pixel = 0;
            if self.line == self.lines_per_frame - 1 {
                self.line = 0;
            } else {
                self.line += 1;
            }
        } else {
            self.pixel += 1;
        }
    }

    pub fn reset(&mut self) {
        self.pixel = 0;
        self.line = 0;
    }

    pub fn pixel(&self) -> usize {
        self.pixel
    }

    pub fn line(&self) -> usize {
        self.line
    }
}
