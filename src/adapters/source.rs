use crate::domain::ports::CommandSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::borrow::Cow;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Line-oriented command source over any buffered tokio reader.
///
/// Lines are split on `\n` as raw bytes. Invalid UTF-8 is replaced with
/// U+FFFD, never reported as a read error.
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    interactive: bool,
}

impl<R: AsyncBufRead + Unpin + Send> LineSource<R> {
    pub fn new(reader: R, interactive: bool) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            interactive,
        }
    }
}

impl LineSource<BufReader<File>> {
    /// Batch source reading a command file.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Opening command file: {}", path.display());
        let file = File::open(path).await?;
        Ok(Self::new(BufReader::new(file), false))
    }
}

impl LineSource<BufReader<Stdin>> {
    /// Interactive prompt on standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), true)
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> CommandSource for LineSource<R> {
    async fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }

        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&self.buf);
        if let Cow::Owned(_) = line {
            tracing::warn!("Input line is not valid UTF-8, decoded as: {}", line);
        }
        Ok(Some(line.into_owned()))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
