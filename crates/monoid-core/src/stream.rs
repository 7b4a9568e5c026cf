//! Newline-delimited message streams.
//!
//! A connector writes one JSON [`Message`] per line to its standard output.
//! [`MessageReader`] consumes such a stream on the host side and
//! [`MessageWriter`] produces one on the connector side.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::{Error, ValidationError};
use crate::protocol::{Message, Record};
use crate::shape::Shape;
use crate::Result;

/// Reads messages from a newline-delimited JSON stream.
///
/// Blank lines are skipped. Each item is either a message or the error
/// for one line; iteration can continue past a malformed line.
///
/// # Example
///
/// ```
/// use monoid_core::stream::MessageReader;
///
/// let input = "{\"type\":\"SPEC\",\"spec\":{}}\n\n{\"type\":\"RECORD\"}\n";
/// let mut reader = MessageReader::new(input.as_bytes());
///
/// assert!(reader.next().unwrap().is_ok());
/// assert!(reader.next().unwrap().is_err());
/// assert!(reader.next().is_none());
/// ```
pub struct MessageReader<R> {
    inner: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> MessageReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: Vec::new(),
        }
    }

    /// The 1-based number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Skip lines that fail to parse, logging each one.
    ///
    /// Only I/O errors are surfaced.
    pub fn lenient(self) -> impl Iterator<Item = Result<Message>> {
        self.filter(|item| match item {
            Err(Error::Stream { line, source }) => {
                warn!(line, error = %source, "skipping malformed message");
                false
            }
            _ => true,
        })
    }

    /// Keep only record payloads, skipping malformed lines and other
    /// message types.
    pub fn records(self) -> impl Iterator<Item = Result<Record>> {
        self.lenient().filter_map(|item| match item {
            Ok(Message::Record(record)) => Some(Ok(record)),
            Ok(other) => {
                debug!(message_type = %other.message_type(), "message is not a record");
                None
            }
            Err(e) => Some(Err(e)),
        })
    }

    fn parse_line(&self, text: &str) -> Result<Message> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(|e| Error::Stream {
            line: self.line,
            source: ValidationError::new(Shape::Message, format!("malformed JSON: {}", e)),
        })?;
        crate::shape::from_value(value).map_err(|e| match e {
            Error::Validation(source) => Error::Stream {
                line: self.line,
                source,
            },
            other => other,
        })
    }
}

impl<R: BufRead> Iterator for MessageReader<R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let text = match std::str::from_utf8(&self.buf) {
                        Ok(text) => text.trim(),
                        Err(e) => {
                            return Some(Err(Error::Stream {
                                line: self.line,
                                source: ValidationError::new(
                                    Shape::Message,
                                    format!("line is not valid UTF-8: {}", e),
                                ),
                            }));
                        }
                    };
                    if text.is_empty() {
                        continue;
                    }
                    return Some(self.parse_line(text));
                }
                Err(e) => return Some(Err(Error::Io(e))),
            }
        }
    }
}

/// Writes messages as newline-delimited JSON.
pub struct MessageWriter<W> {
    inner: W,
}

impl<W: Write> MessageWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write one message as a single compact JSON line.
    pub fn write_message(&mut self, message: &Message) -> Result<()> {
        serde_json::to_writer(&mut self.inner, message)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{SiloSpec, ValidateMessage};
    use crate::types::JsonObject;
    use serde_json::json;

    const STREAM: &str = r#"{"type":"RECORD","record":{"schema_name":"users","data":{"id":1}}}
not json at all

{"type":"VALIDATE","validate_msg":{"status":"SUCCESS"}}
{"type":"RECORD","spec":{}}
{"type":"RECORD","record":{"schema_name":"users","data":{"id":2}}}
"#;

    #[test]
    fn strict_reader_reports_line_numbers() {
        let items: Vec<_> = MessageReader::new(STREAM.as_bytes()).collect();
        assert_eq!(items.len(), 5);
        assert!(items[0].is_ok());
        assert!(matches!(items[1], Err(Error::Stream { line: 2, .. })));
        assert!(items[2].is_ok());
        assert!(matches!(items[3], Err(Error::Stream { line: 5, .. })));
        assert!(items[4].is_ok());
    }

    #[test]
    fn lenient_reader_skips_malformed_lines() {
        let messages: Vec<Message> = MessageReader::new(STREAM.as_bytes())
            .lenient()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn records_keeps_only_records() {
        let records: Vec<Record> = MessageReader::new(STREAM.as_bytes())
            .records()
            .collect::<Result<_>>()
            .unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.data.get("id").cloned()).collect();
        assert_eq!(ids, [Some(json!(1)), Some(json!(2))]);
    }

    #[test]
    fn invalid_utf8_is_a_malformed_line() {
        let mut input = Vec::new();
        input.extend_from_slice(br#"{"type":"RECORD","record":{"schema_name":"a","data":{}}}"#);
        input.extend_from_slice(b"\n\xff\xfe garbage\n");
        input.extend_from_slice(br#"{"type":"RECORD","record":{"schema_name":"b","data":{}}}"#);
        input.extend_from_slice(b"\nnot json\n");

        let items: Vec<_> = MessageReader::new(input.as_slice()).collect();
        assert_eq!(items.len(), 4);
        assert!(matches!(items[1], Err(Error::Stream { line: 2, .. })));
        assert!(matches!(items[3], Err(Error::Stream { line: 4, .. })));

        let names: Vec<String> = MessageReader::new(input.as_slice())
            .records()
            .map(|r| r.map(|r| r.schema_name))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn writer_emits_one_line_per_message() {
        let mut writer = MessageWriter::new(Vec::new());
        writer
            .write_message(&Message::from(SiloSpec::named("postgres")))
            .unwrap();
        writer
            .write_message(&Message::from(Record::new("users", JsonObject::empty())))
            .unwrap();
        writer
            .write_message(&ValidateMessage::success().into())
            .unwrap();
        writer.flush().unwrap();

        let bytes = writer.into_inner();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert_eq!(text.lines().count(), 3);

        let reader = MessageReader::new(bytes.as_slice());
        let messages: Vec<Message> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(messages[0], Message::from(SiloSpec::named("postgres")));
    }
}
