//! Polyline representation and codec for route geometries.
//!
//! Routing services ship geometries in the compact encoded polyline format:
//! each coordinate is scaled by 1e5, delta-encoded against the previous
//! point, zig-zagged, and written as 5-bit groups offset by 63 with a
//! continuation bit. Decoding happens at the boundary, as soon as a response
//! arrives; everything downstream works on [`Polyline`] points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geo_point::GeoPoint;
use crate::haversine;

/// Coordinate scale factor (five decimal places).
const PRECISION: f64 = 1e5;

/// Offset added to every 6-bit chunk to land in printable ASCII.
const CHAR_OFFSET: u8 = 63;

/// Continuation bit of a chunk.
const CONTINUATION: i64 = 0x20;

/// Payload bits of a chunk.
const CHUNK_MASK: i64 = 0x1f;

/// Highest byte a well-formed chunk can have (`0x3f + 63`).
const MAX_CHAR: u8 = b'~';

/// A polyline representing a route geometry as decoded coordinates.
///
/// Points are kept in path order (start to end). Consecutive identical
/// points are legal and preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Great-circle length of the path in statute miles.
    pub fn length_miles(&self) -> f64 {
        haversine::path_length_miles(&self.points)
    }

    /// Encodes the points back into the compact string form.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }
}

impl From<Vec<GeoPoint>> for Polyline {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}

impl FromStr for Polyline {
    type Err = PolylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Failure while decoding an encoded polyline.
///
/// `position` is the byte offset into the input where decoding stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolylineError {
    /// Input ended in the middle of a coordinate: either the last chunk still
    /// had its continuation bit set, or a latitude had no longitude.
    Truncated { position: usize },
    /// A byte outside the `?`..=`~` range used by the encoding.
    InvalidCharacter { position: usize, found: u8 },
    /// A value ran past the 64-bit accumulator.
    Overflow { position: usize },
}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolylineError::Truncated { position } => {
                write!(f, "polyline truncated at byte {}", position)
            }
            PolylineError::InvalidCharacter { position, found } => {
                write!(f, "invalid polyline byte 0x{:02x} at {}", found, position)
            }
            PolylineError::Overflow { position } => {
                write!(f, "polyline value overflows at byte {}", position)
            }
        }
    }
}

impl std::error::Error for PolylineError {}

/// Decodes an encoded polyline string into coordinates.
///
/// An empty string yields an empty polyline. Truncated input is rejected
/// rather than returning a partial path.
pub fn decode(encoded: &str) -> Result<Polyline, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::with_capacity(bytes.len() / 4);

    while index < bytes.len() {
        let dlat = read_delta(bytes, &mut index)?;
        let dlng = read_delta(bytes, &mut index)?;

        lat = lat
            .checked_add(dlat)
            .ok_or(PolylineError::Overflow { position: index })?;
        lng = lng
            .checked_add(dlng)
            .ok_or(PolylineError::Overflow { position: index })?;

        points.push(GeoPoint::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(Polyline::new(points))
}

/// Reads one zig-zagged value starting at `index`, advancing past it.
fn read_delta(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let position = *index;
        let byte = *bytes
            .get(position)
            .ok_or(PolylineError::Truncated { position })?;
        if !(CHAR_OFFSET..=MAX_CHAR).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                position,
                found: byte,
            });
        }

        let chunk = i64::from(byte - CHAR_OFFSET);
        let payload = (chunk & CHUNK_MASK) as u64;
        // Payload bits shifted past bit 63 would be lost.
        if shift >= u64::BITS || (shift > 0 && payload >> (u64::BITS - shift) != 0) {
            return Err(PolylineError::Overflow { position });
        }
        result |= payload << shift;
        shift += 5;
        *index += 1;

        if chunk < CONTINUATION {
            break;
        }
    }

    let half = (result >> 1) as i64;
    Ok(if result & 1 != 0 { !half } else { half })
}

/// Encodes coordinates into the compact polyline string.
///
/// Each coordinate is rounded to five decimal places first, so decoding the
/// output reproduces the input to within 1e-5 degrees.
pub fn encode(points: &[GeoPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = scale(point.lat);
        let lng = scale(point.lng);
        write_delta(lat - prev_lat, &mut out);
        write_delta(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn scale(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

fn write_delta(delta: i64, out: &mut String) {
    let zigzag = if delta < 0 { !(delta << 1) } else { delta << 1 };
    let mut value = zigzag as u64;
    while value >= CONTINUATION as u64 {
        let chunk = (value & CHUNK_MASK as u64) as u8 | CONTINUATION as u8;
        out.push(char::from(chunk + CHAR_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHAR_OFFSET));
}
