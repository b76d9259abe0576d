//! The line source stage: raw log text in, one `String` per line out.

use crate::error::{Error, Result};
use crossbeam_channel::Sender;
use std::io::{self, BufRead};

/// Iterator over the lines of a game log.
///
/// Unlike [`BufRead::lines`], bytes that are not valid UTF-8 are replaced
/// instead of failing the read; player names are not guaranteed to be
/// UTF-8. Both `\n` and `\r\n` terminators are stripped.
pub struct LogLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LogLines<R> {
    pub fn new(reader: R) -> Self {
        LogLines {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LogLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut line = self.buf.as_slice();
                if let Some(rest) = line.strip_suffix(b"\n") {
                    line = rest;
                }
                if let Some(rest) = line.strip_suffix(b"\r") {
                    line = rest;
                }
                Some(Ok(String::from_utf8_lossy(line).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Stream every line of `reader` into `lines`.
///
/// Blocks on each send until the consumer takes the line. Returns the
/// number of lines sent. The caller ends the stream by dropping the
/// sender once this returns.
///
/// # Errors
///
/// Returns [`Error::Read`] if reading fails, or
/// [`Error::Disconnected`] if the consumer went away first.
pub fn read_lines<R: BufRead>(reader: R, lines: &Sender<String>) -> Result<u64> {
    let mut count = 0;
    for line in LogLines::new(reader) {
        let line = line.map_err(Error::Read)?;
        lines
            .send(line)
            .map_err(|_| Error::Disconnected("aggregator"))?;
        count += 1;
    }
    Ok(count)
}
