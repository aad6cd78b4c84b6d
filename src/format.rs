// Bring in formatting core
use core::fmt::{self, Write};
use core::time::Duration;

/// Big enough for any `format_elapsed` output below 10^4 hours.
pub const ELAPSED_BUF_LEN: usize = 16;

/// A simple fixed-size buffer you can write formatted strings into.
pub struct FmtBuf<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> FmtBuf<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        FmtBuf { buf, pos: 0 }
    }

    pub fn into_str(self) -> &'a str {
        let FmtBuf { buf, pos } = self;
        // only ever filled through `write_str`, so this cannot fail
        core::str::from_utf8(&buf[..pos]).unwrap_or_default()
    }
}

impl<'a> Write for FmtBuf<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if self.pos + bytes.len() > self.buf.len() {
            return Err(fmt::Error);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }
}

/// Format into `buf` without allocating.
pub fn format_to<'a>(buf: &'a mut [u8], args: fmt::Arguments<'_>) -> Result<&'a str, fmt::Error> {
    let mut f = FmtBuf::new(buf);
    f.write_fmt(args)?;
    Ok(f.into_str())
}

/// Render `elapsed` as `MM:SS.mmm`, or `H:MM:SS.mmm` from one hour up.
///
/// Sub-millisecond precision is truncated. Fails when `buf` is too short.
pub fn format_elapsed(buf: &mut [u8], elapsed: Duration) -> Result<&str, fmt::Error> {
    let millis = elapsed.as_millis();
    let ms = millis % 1000;
    let seconds = millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format_to(
            buf,
            format_args!("{}:{:02}:{:02}.{:03}", hours, minutes % 60, seconds % 60, ms),
        )
    } else {
        format_to(buf, format_args!("{:02}:{:02}.{:03}", minutes, seconds % 60, ms))
    }
}
