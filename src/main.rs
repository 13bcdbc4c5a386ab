#![warn(trivial_numeric_casts)]

mod bram;
mod geometry;
mod link;
mod scan;

use bram::BlockRam;
use eyre::Result;
use geometry::FrameGeometry;
use link::{Encoding, LinkConfig, SimLink};
use scan::ScanCounter;
use std::env;

#[derive(Clone, Copy)]
enum FillPattern {
    Zero,
    Const(u8),
    Incrementing,
    RowAddress,
}

/// Stream one frame of the memory contents to the visualizer, walking
/// the scan counter through every tick including blanking. One packet
/// per active line, as the visualizer expects.
fn run_frame(pattern: FillPattern, encoding: Encoding) -> Result<()> {
    let geometry = FrameGeometry::default();
    let row_width = 7;

    let mut bram = BlockRam::new(row_width, geometry.buffer_depth_rows(row_width));
    match pattern {
        FillPattern::Zero => bram.fill_zero(),
        FillPattern::Const(value) => bram.fill_const(value),
        FillPattern::Incrementing => bram.fill_incrementing(),
        FillPattern::RowAddress => bram.fill_row_address(),
    }

    let mut link = SimLink::connect(LinkConfig::default())?;
    let result = stream_frame(&geometry, &bram, encoding, &mut link);
    link.close();
    result
}

fn stream_frame(
    geometry: &FrameGeometry,
    bram: &BlockRam,
    encoding: Encoding,
    link: &mut SimLink,
) -> Result<()> {
    link.send_reset()?;

    let mut counter = ScanCounter::new(geometry);
    counter.reset();

    for _ in 0..geometry.total_pixels() {
        let (pixel, line) = (counter.pixel(), counter.line());

        if geometry.is_active(pixel, line) {
            // One stored pixel per tile; the row width packs 7 tiles
            // into each memory row
            let tile = (line / geometry.tile_size) * geometry.tiles_per_line()
                + pixel / geometry.tile_size;
            let row = bram.read(tile / bram.row_width());
            let value = row[tile % bram.row_width()];
            link.buffer
                .set_pixel(encoding, pixel, value.r, value.g, value.b);
        }

        // Line fully assembled once the scan reaches the last tick of
        // an active line
        if pixel == geometry.total_pixels_per_line() - 1 && line < geometry.active_height {
            link.send_frame()?;
        }

        counter.advance();
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let encoding = if args.contains(&"--mono".to_owned()) {
        Encoding::Mono
    } else {
        Encoding::Scaled
    };

    let pattern = if args.contains(&"--zero".to_owned()) {
        Some(FillPattern::Zero)
    } else if args.contains(&"--incr".to_owned()) {
        Some(FillPattern::Incrementing)
    } else if args.contains(&"--rowaddr".to_owned()) {
        Some(FillPattern::RowAddress)
    } else if let Some(pos) = args.iter().position(|a| a == "--const") {
        match args.get(pos + 1).and_then(|v| v.parse::<u8>().ok()) {
            Some(value) => Some(FillPattern::Const(value)),
            None => {
                println!("--const needs a byte value (0-255)");
                return;
            }
        }
    } else {
        None
    };

    let pattern = match pattern {
        Some(pattern) => pattern,
        None => {
            println!("Must select a memory init pattern!");
            println!("  --zero           -- all-black frame buffer");
            println!("  --const <value>  -- every channel set to <value>");
            println!("  --incr           -- values increment along each row");
            println!("  --rowaddr        -- each row holds its own address");
            println!("  --mono           -- threshold encoding instead of 4-bit scaled");
            return;
        }
    };

    if let Err(error) = run_frame(pattern, encoding) {
        log::error!("Session failed: {error}");
    }
}
