//! Server-sent event accumulation for streaming chat completions.
//!
//! OpenAI streams `data: {"choices":[{"delta":{"content":"..."}}]}` lines
//! terminated by `data: [DONE]`. The gateway does not forward chunks to its
//! caller; it concatenates every content fragment and returns once the
//! upstream stream ends. An `{"error": …}` event aborts the stream.

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};
use thiserror::Error;
use tracing::{debug, warn};

use modelgate_core::types::ChatCompletionChunk;

/// Why a stream could not be collected.
#[derive(Debug, Error, PartialEq)]
pub enum StreamError<E> {
    /// The underlying byte stream failed.
    #[error("{0}")]
    Transport(E),
    /// The upstream sent an error event instead of more content.
    #[error("{0}")]
    Upstream(String),
}

/// Outcome of feeding one SSE line.
enum Line {
    Continue,
    Done,
    Failed(String),
}

/// Drain an SSE byte stream and return the concatenated delta content.
///
/// Ends at `data: [DONE]` or at end of body, whichever comes first.
/// Comment lines, non-`data` fields and unparsable payloads are skipped.
/// An error event discards the partial text and returns
/// [`StreamError::Upstream`].
pub async fn collect_content<S, E>(stream: S) -> Result<String, StreamError<E>>
where
    S: Stream<Item = Result<Bytes, E>>,
{
    let mut stream = std::pin::pin!(stream);
    let mut buf = BytesMut::new();
    let mut text = String::new();
    let mut events = 0usize;

    loop {
        while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
            let line = buf.split_to(pos + 1);
            events += 1;
            match feed_line(&line, &mut text) {
                Line::Continue => {}
                Line::Done => {
                    debug!(events, chars = text.len(), "stream finished with [DONE]");
                    return Ok(text);
                }
                Line::Failed(message) => return Err(upstream_failure(events, message)),
            }
        }

        match stream.next().await {
            Some(Ok(chunk)) => buf.extend_from_slice(&chunk),
            Some(Err(e)) => return Err(StreamError::Transport(e)),
            None => break,
        }
    }

    // Trailing line without a newline
    if !buf.is_empty() {
        if let Line::Failed(message) = feed_line(&buf, &mut text) {
            return Err(upstream_failure(events + 1, message));
        }
    }

    debug!(events, chars = text.len(), "stream ended without [DONE]");
    Ok(text)
}

fn upstream_failure<E>(events: usize, message: String) -> StreamError<E> {
    warn!(events, error = %message, "upstream aborted stream");
    StreamError::Upstream(message)
}

fn feed_line(raw: &[u8], text: &mut String) -> Line {
    let line = String::from_utf8_lossy(raw);
    let trimmed = line.trim();

    // Blank separators and `:` comments
    if trimmed.is_empty() || trimmed.starts_with(':') {
        return Line::Continue;
    }

    let Some(data) = trimmed.strip_prefix("data:") else {
        return Line::Continue;
    };
    let data = data.trim_start();

    if data == "[DONE]" {
        return Line::Done;
    }

    match serde_json::from_str::<ChatCompletionChunk>(data) {
        Ok(chunk) => {
            if let Some(message) = chunk.error_message() {
                return Line::Failed(message);
            }
            if let Some(fragment) = chunk.content() {
                text.push_str(fragment);
            }
        }
        Err(e) => warn!(error = %e, "skipping unparsable stream chunk"),
    }

    Line::Continue
}
