//! Line decoding for streamed chat completions.
//!
//! The server emits one JSON object per line, each prefixed with `data: `.
//! Blank lines and lines that do not parse (including the `[DONE]` marker)
//! are dropped without surfacing an error.

use crate::{BoxStream, Error, Result};
use bytes::{Buf, Bytes, BytesMut};
use futures::{StreamExt, TryStreamExt};
use serde_json::Value;
use tokio_util::codec::{Decoder, FramedRead};
use tokio_util::io::StreamReader;

const DATA_PREFIX: &str = "data: ";

/// `tokio_util` codec yielding one JSON value per well-formed data line.
#[derive(Debug, Default)]
pub struct DataLineCodec {
    // Bytes already scanned for '\n' in the current buffer.
    next_index: usize,
}

impl DataLineCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Parse a single line; `None` for blank or malformed lines.
pub fn parse_data_line(raw: &[u8]) -> Option<Value> {
    let line = std::str::from_utf8(raw).ok()?.trim();
    if line.is_empty() {
        return None;
    }
    let payload = line.strip_prefix(DATA_PREFIX).unwrap_or(line).trim();
    if payload.is_empty() {
        return None;
    }
    serde_json::from_str(payload).ok()
}

impl Decoder for DataLineCodec {
    type Item = Value;
    type Error = std::io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> std::result::Result<Option<Value>, Self::Error> {
        loop {
            let newline = buf[self.next_index..].iter().position(|b| *b == b'\n');
            match newline {
                Some(offset) => {
                    let end = self.next_index + offset;
                    self.next_index = 0;
                    let line = buf.split_to(end + 1);
                    if let Some(value) = parse_data_line(&line[..end]) {
                        return Ok(Some(value));
                    }
                }
                None => {
                    self.next_index = buf.len();
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> std::result::Result<Option<Value>, Self::Error> {
        if let Some(value) = self.decode(buf)? {
            return Ok(Some(value));
        }
        self.next_index = 0;
        if buf.is_empty() {
            return Ok(None);
        }
        let rest = buf.split_to(buf.len());
        Ok(parse_data_line(rest.chunk()))
    }
}

/// Turn a raw byte stream into a lazy stream of decoded chunks.
pub fn decode_chunks(input: BoxStream<'static, Bytes>) -> BoxStream<'static, Value> {
    // StreamReader needs io errors; the original error is recovered on the way out.
    let reader = StreamReader::new(
        input.map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e)),
    );
    let frames = FramedRead::new(reader, DataLineCodec::new()).map(|item| item.map_err(unwrap_io));
    Box::pin(frames)
}

/// Drain a chunk stream into an ordered vector, stopping at the first transport error.
pub async fn collect_chunks(stream: BoxStream<'static, Value>) -> Result<Vec<Value>> {
    stream.try_collect().await
}

fn unwrap_io(err: std::io::Error) -> Error {
    if err.get_ref().map_or(false, |inner| inner.is::<Error>()) {
        if let Some(inner) = err.into_inner() {
            if let Ok(original) = inner.downcast::<Error>() {
                return *original;
            }
        }
        return Error::api("stream decoding failed");
    }
    Error::Io(err)
}
