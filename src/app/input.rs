//! Line input for the terminal loop.

use std::borrow::Cow;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Newline-terminated commands read from a byte stream.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD instead of
/// ending the stream, so one garbled line cannot end the session.
pub struct InputLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: AsyncBufRead + Unpin> InputLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Next line without its `\n` or `\r\n` terminator, or `None` at end of
    /// input.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let line = match String::from_utf8_lossy(&self.buf) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => {
                tracing::warn!(bytes = self.buf.len(), "Input line is not valid UTF-8");
                text
            }
        };
        Ok(Some(line))
    }
}
