// 9.0: feed boundary. decodes raw websocket frames from a Bitfinex-shaped
// book channel into FeedMessage values the engine can apply. the transport
// itself (connect, subscribe, reconnect/backoff) lives outside this crate;
// this module only turns one text frame into one message.
//
// frame shapes:
//   {"event": ...}            control message (sub ack, info)  -> Ignored
//   [chanId, "hb"]            heartbeat                        -> Heartbeat
//   [chanId, [p, c, a]]       single incremental triple        -> Delta
//   [chanId, [[p,c,a], ...]]  snapshot, applied in list order  -> Snapshot
//
// anything else is a FeedError. the hosting loop discards decode errors
// without propagating them, so the engine never observes a parse failure.

use crate::book::BookDelta;
use crate::types::Price;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMessage {
    /// Full book image as an ordered list of triples.
    Snapshot(Vec<BookDelta>),
    /// One incremental triple.
    Delta(BookDelta),
    /// Keep-alive; produces no state change.
    Heartbeat,
    /// Control traffic (subscribe acks, info events); produces no state change.
    Ignored,
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("frame is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame has no payload element")]
    MissingPayload,

    #[error("payload is not a book triple or snapshot")]
    UnsupportedPayload,

    #[error("book triple is malformed")]
    MalformedTriple,
}

/// Decode one raw text frame. The caller is expected to discard errors
/// (`decode_frame(raw).ok()`); nothing downstream can recover from them.
pub fn decode_frame(raw: &str) -> Result<FeedMessage, FeedError> {
    let value: Value = serde_json::from_str(raw)?;

    // control messages arrive as objects; data frames as [chanId, payload]
    let frame = match value {
        Value::Object(_) => return Ok(FeedMessage::Ignored),
        Value::Array(frame) => frame,
        _ => return Err(FeedError::UnsupportedPayload),
    };

    let payload = frame.get(1).ok_or(FeedError::MissingPayload)?;

    match payload {
        Value::String(s) if s == "hb" => Ok(FeedMessage::Heartbeat),
        Value::Array(entries) => match entries.first() {
            Some(Value::Array(_)) => {
                let deltas = entries
                    .iter()
                    .map(decode_triple)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(FeedMessage::Snapshot(deltas))
            }
            Some(_) => Ok(FeedMessage::Delta(decode_triple(payload)?)),
            None => Err(FeedError::UnsupportedPayload),
        },
        _ => Err(FeedError::UnsupportedPayload),
    }
}

fn decode_triple(value: &Value) -> Result<BookDelta, FeedError> {
    let triple = value.as_array().ok_or(FeedError::MalformedTriple)?;
    if triple.len() < 3 {
        return Err(FeedError::MalformedTriple);
    }

    let price = decimal_field(&triple[0])?;
    let count = triple[1].as_i64().ok_or(FeedError::MalformedTriple)?;
    let amount = decimal_field(&triple[2])?;

    Ok(BookDelta::new(Price::new(price), count, amount))
}

fn decimal_field(value: &Value) -> Result<Decimal, FeedError> {
    let float = value.as_f64().ok_or(FeedError::MalformedTriple)?;
    Decimal::from_f64(float).ok_or(FeedError::MalformedTriple)
}
