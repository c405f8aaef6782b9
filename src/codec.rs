//! Encoded Polyline Algorithm Format codec.
//!
//! Coordinates are quantized to five decimal places, delta-encoded against
//! the previous point, zig-zag mapped to unsigned integers and written as
//! 5-bit chunks over the printable range `'?'..='~'`.
//!
//! Quantization rounds to the nearest integer, halves away from zero
//! (`f64::round`), on both axes. Values are never truncated toward zero, so
//! `55.732557` quantizes to `5573256`, not `5573255`.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::{Axis, MalformedReason, PolylineError, PolylineResult};

/// Scale applied to decimal degrees before quantization (5 decimal places).
pub const PRECISION_FACTOR: f64 = 100_000.0;

/// Largest quantized magnitude `encode` accepts.
///
/// Above 2^53 an `f64` no longer holds every integer, so the decoded value
/// could not match the quantized one.
pub const MAX_QUANTIZED: i64 = 1 << 53;

const CHAR_OFFSET: u8 = 63;
const MAX_CHAR: u8 = 126;
const CONTINUATION: u64 = 0x20;
const CHUNK_MASK: u64 = 0x1F;
const CHUNK_BITS: u32 = 5;

/// Encodes an ordered sequence of `(latitude, longitude)` points.
///
/// Returns an empty string for an empty slice. Fails with
/// [`PolylineError::InvalidCoordinate`] on the first NaN or infinite value,
/// or on a value whose scaled magnitude exceeds [`MAX_QUANTIZED`].
pub fn encode(points: &[(f64, f64)]) -> PolylineResult<String> {
    // Typical city routes need 4-6 chars per axis.
    let mut encoded = String::with_capacity(points.len() * 12);
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for (index, &(lat, lng)) in points.iter().enumerate() {
        let lat_int = quantize(index, Axis::Latitude, lat)?;
        let lng_int = quantize(index, Axis::Longitude, lng)?;

        encode_value(lat_int - prev_lat, &mut encoded);
        encode_value(lng_int - prev_lng, &mut encoded);

        prev_lat = lat_int;
        prev_lng = lng_int;
    }

    debug!(points = points.len(), len = encoded.len(), "encoded polyline");
    Ok(encoded)
}

/// Decodes a polyline string back into `(latitude, longitude)` points.
///
/// Each point is the quantized integer divided by [`PRECISION_FACTOR`], so
/// `decode(&encode(p)?)` matches `p` to five decimal places. Running
/// coordinates beyond [`MAX_QUANTIZED`] are rejected as
/// [`MalformedReason::Overflow`], the same range `encode` accepts.
pub fn decode(encoded: &str) -> PolylineResult<Vec<(f64, f64)>> {
    let mut points = Vec::with_capacity(encoded.len() / 8);
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut pos = 0;

    while pos < encoded.len() {
        let (d_lat, next) = decode_value(encoded, pos)?;
        if next >= encoded.len() {
            return Err(PolylineError::malformed(next, MalformedReason::UnpairedValue));
        }
        let (d_lng, after) = decode_value(encoded, next)?;

        lat = accumulate(lat, d_lat, pos)?;
        lng = accumulate(lng, d_lng, next)?;

        points.push((lat as f64 / PRECISION_FACTOR, lng as f64 / PRECISION_FACTOR));
        pos = after;
    }

    debug!(points = points.len(), len = encoded.len(), "decoded polyline");
    Ok(points)
}

/// Appends one signed value in zig-zag, 5-bit chunked form.
///
/// Non-negative values map to even numbers (`v << 1`), negative values to
/// odd ones (`!(v << 1)`). Zero is written as the single character `'?'`.
pub fn encode_value(value: i64, out: &mut String) {
    let mut remaining = ((value << 1) ^ (value >> 63)) as u64;

    while remaining >= CONTINUATION {
        out.push(to_char(CONTINUATION | (remaining & CHUNK_MASK)));
        remaining >>= CHUNK_BITS;
    }
    out.push(to_char(remaining));
}

/// Reads one signed value starting at byte `start`.
///
/// Returns the value and the byte offset just past its last chunk.
pub fn decode_value(input: &str, start: usize) -> PolylineResult<(i64, usize)> {
    let bytes = input.as_bytes();
    let mut result = 0u64;
    let mut shift = 0u32;
    let mut pos = start;

    loop {
        let Some(&byte) = bytes.get(pos) else {
            return Err(PolylineError::malformed(pos, MalformedReason::TruncatedChunk));
        };
        if !(CHAR_OFFSET..=MAX_CHAR).contains(&byte) {
            let ch = input
                .get(pos..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(PolylineError::malformed(pos, MalformedReason::InvalidCharacter(ch)));
        }

        let chunk = u64::from(byte - CHAR_OFFSET);
        let bits = chunk & CHUNK_MASK;
        if shift >= u64::BITS || (bits << shift) >> shift != bits {
            return Err(PolylineError::malformed(pos, MalformedReason::Overflow));
        }
        result |= bits << shift;
        shift += CHUNK_BITS;
        pos += 1;

        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    let value = if result & 1 == 1 {
        !((result >> 1) as i64)
    } else {
        (result >> 1) as i64
    };
    Ok((value, pos))
}

/// Encodes many routes on the rayon pool.
///
/// Output order matches input order. If several routes fail, the error of
/// the earliest one is returned.
pub fn encode_all<R>(routes: &[R]) -> PolylineResult<Vec<String>>
where
    R: AsRef<[(f64, f64)]> + Sync,
{
    let results: Vec<PolylineResult<String>> = routes
        .par_iter()
        .map(|route| encode(route.as_ref()))
        .collect();

    debug!(routes = routes.len(), "encoded route batch");
    results.into_iter().collect()
}

fn quantize(index: usize, axis: Axis, value: f64) -> PolylineResult<i64> {
    let scaled = (value * PRECISION_FACTOR).round();
    if !scaled.is_finite() || scaled.abs() > MAX_QUANTIZED as f64 {
        trace!(index, %axis, value, "rejecting coordinate");
        return Err(PolylineError::InvalidCoordinate { index, axis, value });
    }
    Ok(scaled as i64)
}

fn accumulate(current: i64, delta: i64, offset: usize) -> PolylineResult<i64> {
    current
        .checked_add(delta)
        .filter(|sum| sum.unsigned_abs() <= MAX_QUANTIZED.unsigned_abs())
        .ok_or_else(|| PolylineError::malformed(offset, MalformedReason::Overflow))
}

fn to_char(chunk: u64) -> char {
    // chunk <= 0x3F, so the sum stays within '?'..='~'.
    char::from(chunk as u8 + CHAR_OFFSET)
}
