//! Renders the stopwatch screen into an in-memory framebuffer and prints it.
//!
//! Usage: `fbglyph [WIDTH HEIGHT BPP [LINE_LENGTH]]`, defaults to the EV3
//! panel (178x128, 1 bpp, 24 bytes per line). `RUST_LOG` sets verbosity.
use anyhow::{Context, Result};
use core::time::Duration;
use embedded_graphics::prelude::Point;
use fbglyph::{
    format::{format_elapsed, ELAPSED_BUF_LEN},
    ui::{widgets::Rule, Label, Layout, Widget},
    BitAddress, FramebufferWriter, Geometry, PixelMatrix,
};
use log::{debug, info};

const DEMO_TICKS: u32 = 40;
const SPLIT_TICK: u32 = 25;

fn parse_arg(args: &[String], index: usize, name: &str, default: usize) -> Result<usize> {
    match args.get(index) {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid {}: {:?}", name, value)),
        None => Ok(default),
    }
}

fn parse_geometry(args: &[String]) -> Result<Geometry> {
    let width = parse_arg(args, 0, "width", 178)?;
    let height = parse_arg(args, 1, "height", 128)?;
    let bpp = parse_arg(args, 2, "bits per pixel", 1)?;
    let default_line = if args.is_empty() {
        24
    } else {
        width.checked_mul(bpp).context("row size overflows")?.div_ceil(8)
    };
    let line_length = parse_arg(args, 3, "line length", default_line)?;
    let total_size = line_length
        .checked_mul(height)
        .context("framebuffer size overflows")?;

    Geometry::new(width, height, line_length, bpp, total_size).context("unusable geometry")
}

/// A pixel reads as foreground when all of its bits are cleared.
fn read_back(buffer: &[u8], geometry: &Geometry, row: usize, col: usize) -> bool {
    let address = BitAddress::compute(row, col, geometry);
    if address.byte_range() == 0 {
        return buffer[address.byte_start] & address.single_byte_mask() == 0;
    }
    buffer[address.byte_start] & address.prefix_mask() == 0
        && buffer[address.byte_start + 1..address.byte_end].iter().all(|b| *b == 0)
        && buffer[address.byte_end] & address.suffix_mask() == 0
}

fn print_screen(buffer: &[u8], geometry: &Geometry) {
    for row in 0..geometry.height {
        let line: String = (0..geometry.width)
            .map(|col| if read_back(buffer, geometry, row, col) { '#' } else { '.' })
            .collect();
        if line.contains('#') {
            println!("{:3} {}", row, line);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let geometry = parse_geometry(&args)?;
    let layout = Layout::ev3();

    let mut buffer = vec![0u8; geometry.total_size];
    let mut matrix = PixelMatrix::new(&geometry);
    let mut writer = FramebufferWriter::new(&mut buffer, geometry)?;
    writer.clear();

    let mut text = [0u8; ELAPSED_BUF_LEN];
    let zero = format_elapsed(&mut text, Duration::ZERO)?;
    let mut title = Label::new(layout.title, zero);
    let mut split = Label::new(layout.split, zero);
    let mut rule = Rule::new(Point::new(layout.title.x as i32, 40), 120, 1);

    title.render(&mut matrix);
    split.render(&mut matrix);
    rule.render(&mut matrix);
    info!("initial render: {} pixels", writer.flush(&mut matrix));

    // a running clock sampled once per redraw, one split recorded on the way
    for tick in 1..=DEMO_TICKS {
        let elapsed = layout.redraw_interval * tick;
        title.set_text(format_elapsed(&mut text, elapsed)?);
        if tick == SPLIT_TICK {
            split.set_text(format_elapsed(&mut text, elapsed)?);
        }
        title.render(&mut matrix);
        split.render(&mut matrix);
        debug!("tick {} at {:?}: {} pixels", tick, elapsed, writer.flush(&mut matrix));
    }
    debug!("idle flush: {} pixels", writer.flush(&mut matrix));

    print_screen(writer.buffer(), writer.geometry());
    Ok(())
}
