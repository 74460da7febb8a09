//! Location and weather report extraction
//!
//! An uncompressed location body is positional: every field lives at a
//! fixed byte offset from the location marker. The classification
//! probes and offsets below reproduce the legacy column layout,
//! including its documented quirks; see the crate documentation.

use log::debug;

use crate::decoder::{minutes_fraction, require, DecodeError};
use crate::packet::{AprsPacket, PacketType};
use crate::wxcodes::TAGBOOK;

// Byte offsets relative to the location marker
const OFFSET_PROBE: usize = 8;
const OFFSET_LAT_DEG: usize = 9;
const OFFSET_LAT_MIN: usize = 11;
const OFFSET_HEMISPHERE: usize = 16;
const OFFSET_SYMBOL_TABLE: usize = 17;
const OFFSET_LON_DEG: usize = 19;
const OFFSET_LON_MIN: usize = 21;
const OFFSET_SYMBOL_CODE: usize = 27;
const OFFSET_WIND_DIRECTION: usize = 28;
const OFFSET_WEATHER_FLAG: usize = 31;
const OFFSET_WIND_SPEED: usize = 32;

// Byte offset of the classification probe relative to the `:!` marker
const OFFSET_TIMESTAMP_PROBE: usize = 9;

// Every location body must reach at least this far past the marker
const MIN_BODY_END: usize = 32;

/// Classify and extract a location or weather report
///
/// Leaves the packet untouched when neither classification probe
/// matches; that outcome is not an error.
pub(crate) fn extract(line: &str, packet: &mut AprsPacket) -> Result<(), DecodeError> {
    // `:=` wins over `:@` when both markers appear
    let location_marker = line.find(":=").or_else(|| line.find(":@"));
    let timestamp_marker = line.find(":!");

    let location_probe = location_marker
        .and_then(|ptr| probe(line, ptr + OFFSET_PROBE))
        .map_or(false, |c| matches!(c, 'H' | 'Z' | '/'));
    let timestamp_probe = timestamp_marker
        .and_then(|ptr| probe(line, ptr + OFFSET_TIMESTAMP_PROBE))
        .map_or(false, |c| matches!(c, 'S' | 'N'));

    if !location_probe && !timestamp_probe {
        return Ok(());
    }

    packet.clear_body();
    packet.packet_type = PacketType::Location;

    // the legacy marker pointer is zero-initialized rather than -1:
    // extraction runs from the start of the line when no location
    // marker exists and the timestamp probe classified the packet
    let loc = location_marker.unwrap_or(0);

    if location_probe {
        // the gps time is read relative to the `:!` marker, with an
        // absent marker standing in as the legacy -1 sentinel
        let sentinel = timestamp_marker.map_or(-1isize, |ptr| ptr as isize);
        let start = (sentinel + 2) as usize;
        packet.gps_time = Some(require(line, start..start + 6)?.to_owned());
    }

    if line.len() < loc + MIN_BODY_END {
        return Err(DecodeError::TruncatedPacket);
    }

    packet.symbol = Some(format!(
        "{}{}",
        require(line, loc + OFFSET_SYMBOL_TABLE..loc + OFFSET_SYMBOL_TABLE + 1)?,
        require(line, loc + OFFSET_SYMBOL_CODE..loc + OFFSET_SYMBOL_CODE + 1)?
    ));

    let lat_minutes: f64 = require(line, loc + OFFSET_LAT_MIN..loc + OFFSET_LAT_MIN + 5)?
        .parse()
        .map_err(|_| DecodeError::NumericParseError("latitude minutes"))?;
    let mut latitude = format!(
        "{}{}",
        require(line, loc + OFFSET_LAT_DEG..loc + OFFSET_LAT_DEG + 2)?,
        minutes_fraction(lat_minutes)
    );

    // one hemisphere flag serves both coordinates: `S` negates the
    // longitude as well, and no `W` test exists on this path
    let hemisphere = require(line, loc + OFFSET_HEMISPHERE..loc + OFFSET_HEMISPHERE + 1)?;
    if hemisphere == "S" {
        latitude.insert(0, '-');
    }
    packet.latitude = Some(latitude);

    let lon_minutes: f64 = require(line, loc + OFFSET_LON_MIN..loc + OFFSET_LON_MIN + 5)?
        .parse()
        .map_err(|_| DecodeError::NumericParseError("longitude minutes"))?;
    let mut longitude = format!(
        "{}{}",
        require(line, loc + OFFSET_LON_DEG..loc + OFFSET_LON_DEG + 2)?,
        minutes_fraction(lon_minutes)
    );
    if hemisphere == "S" {
        longitude.insert(0, '-');
    }
    packet.longitude = Some(longitude);

    extract_weather(line, loc, packet)
}

// A weather report announces itself with a `_` symbol code and a `/`
// separating wind direction from wind speed
fn extract_weather(
    line: &str,
    loc: usize,
    packet: &mut AprsPacket,
) -> Result<(), DecodeError> {
    if require(line, loc + OFFSET_SYMBOL_CODE..loc + OFFSET_SYMBOL_CODE + 1)? != "_"
        || require(line, loc + OFFSET_WEATHER_FLAG..loc + OFFSET_WEATHER_FLAG + 1)? != "/"
    {
        // altitude extraction for plain location packets is abandoned
        // in the legacy format; position fields are all we report
        return Ok(());
    }

    packet.packet_type = PacketType::WeatherReport;
    debug!("decode: weather report body at offset {}", loc);

    packet.wind_direction = Some(
        require(
            line,
            loc + OFFSET_WIND_DIRECTION..loc + OFFSET_WIND_DIRECTION + 3,
        )?
        .to_owned(),
    );
    packet.wind_speed = Some(
        require(line, loc + OFFSET_WIND_SPEED..loc + OFFSET_WIND_SPEED + 3)?.to_owned(),
    );

    // each tagged element is independently optional; the value is
    // always the three bytes after the first occurrence of its tag
    let tags = require(line, loc + OFFSET_SYMBOL_CODE..line.len())?;
    for (tag, element) in TAGBOOK.entries() {
        if let Some(found) = tags.find(*tag) {
            let start = loc + OFFSET_SYMBOL_CODE + found + 1;
            let value = require(line, start..start + 3)?;
            packet.set_weather(*element, value.to_owned());
        }
    }

    Ok(())
}

// Uppercased classification byte, or None when the offset falls
// outside the line
fn probe(line: &str, index: usize) -> Option<char> {
    line.as_bytes()
        .get(index)
        .map(|b| b.to_ascii_uppercase() as char)
}
