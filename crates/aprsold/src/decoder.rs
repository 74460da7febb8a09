//! APRS packet classification and field extraction

mod gpgga;
mod position;
mod status;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use thiserror::Error;

use crate::packet::{AprsPacket, PacketType};

const STATUS_MARKER: &str = ":>";
const GPGGA_MARKER: &str = ":$GPGGA,";
const NEW_MICE_MARKER: &str = ":`";
const OLD_MICE_MARKER: &str = ":'";

/// Error decoding an APRS packet
///
/// Every error is terminal for the affected line; the decoder never
/// retries or recovers internally. A packet whose body merely matches
/// no known sub-format marker is **not** an error: it decodes to a
/// packet with [`PacketType::Unknown`](crate::PacketType::Unknown).
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// The packet line has zero length
    #[error("packet line is empty")]
    EmptyInput,

    /// The line contains no `>` routing delimiter at all
    #[error("packet contains no `>` routing delimiter")]
    UnsupportedFormat,

    /// The routing header does not contain exactly one `>`
    #[error("packet route does not contain exactly one `>`")]
    MalformedRoute,

    /// A recognized but unimplemented encoding, such as Mic-E
    #[error("decoding of {0} packets is not implemented")]
    UnsupportedFeature(PacketType),

    /// The GPGGA sentence carries too few comma-separated fields
    #[error("not enough fields in the GPGGA sentence")]
    InsufficientFields,

    /// A numeric sub-field failed to parse; carries the field label
    #[error("could not decode the {0} field as a number")]
    NumericParseError(&'static str),

    /// A required field offset falls outside the line
    #[error("packet is truncated")]
    TruncatedPacket,
}

/// Decode one line of APRS text
///
/// The `line` is a single transmission frame as received over an
/// AX.25/TNC or APRS-IS feed, without any trailing newline. Returns
/// either a decoded [`AprsPacket`](crate::AprsPacket) or the
/// [`DecodeError`](crate::DecodeError) which ended the decode.
///
/// The body is classified by scanning for sub-format markers in a
/// fixed order (Status Report, then GPGGA, then Mic-E, then
/// Location/Weather), with later matches overwriting earlier
/// tentative classifications. A line whose body matches no marker decodes
/// successfully with [`PacketType::Unknown`](crate::PacketType::Unknown)
/// and no positional fields.
///
/// ```
/// use aprsold::{decode, DecodeError, PacketType};
///
/// let packet = decode(
///     "N0CALL>APRS:$GPGGA,123456,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
/// )?;
///
/// assert_eq!("N0CALL", packet.callsign());
/// assert_eq!("APRS:$GPGGA", packet.destination());
/// assert_eq!(PacketType::Gpgga, packet.packet_type());
/// assert_eq!(Some("123456"), packet.gps_time());
/// assert_eq!(Some("48.11730"), packet.latitude());
/// assert_eq!(Some("011.51666"), packet.longitude());
/// assert_eq!(Some("545.400000"), packet.altitude());
///
/// // Mic-E packets are detected but never decoded
/// assert_eq!(
///     Err(DecodeError::UnsupportedFeature(PacketType::NewMicE)),
///     decode("N0CALL>APRS,WIDE2-1:`'V,l \x1c>/")
/// );
/// # Ok::<(), aprsold::DecodeError>(())
/// ```
///
/// The decoder is a pure function: it holds no state between calls and
/// may be invoked concurrently from any number of threads.
pub fn decode(line: &str) -> Result<AprsPacket, DecodeError> {
    if line.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    let route_delim = line.find('>').ok_or(DecodeError::UnsupportedFormat)?;

    let (callsign, destination) = split_route(line)?;
    let mut packet = AprsPacket::new(callsign, destination);

    // a `:>` past the routing delimiter marks a status report; later
    // stages may still overwrite this classification
    if let Some(marker) = line.find(STATUS_MARKER) {
        if marker > route_delim {
            status::extract(line, marker, &mut packet);
        }
    }

    if let Some(marker) = line.find(GPGGA_MARKER) {
        packet.clear_body();
        gpgga::extract(line, marker, &mut packet)?;
    }

    // Mic-E always wins once its marker is present: the check runs
    // after Status/GPGGA and its branch returns immediately
    if line.contains(NEW_MICE_MARKER) {
        return Err(DecodeError::UnsupportedFeature(PacketType::NewMicE));
    }
    if line.contains(OLD_MICE_MARKER) {
        return Err(DecodeError::UnsupportedFeature(PacketType::OldMicE));
    }

    position::extract(line, &mut packet)?;

    debug!(
        "decode: {}>{}: {}",
        packet.callsign(),
        packet.destination(),
        packet.packet_type()
    );
    Ok(packet)
}

// Split the routing header into callsign and destination
//
// The header is the text before the first comma. It must contain
// exactly one `>`. The callsign may be empty; the legacy splitter
// imposed no check on it.
fn split_route(line: &str) -> Result<(&str, &str), DecodeError> {
    lazy_static! {
        static ref ROUTE: Regex = Regex::new(r"^([^>]*)>([^>]*)$").expect("bad route regexp");
    }

    let header = match line.find(',') {
        Some(comma) => &line[..comma],
        None => line,
    };

    let route = ROUTE.captures(header).ok_or(DecodeError::MalformedRoute)?;
    Ok((
        route.get(1).ok_or(DecodeError::MalformedRoute)?.as_str(),
        route.get(2).ok_or(DecodeError::MalformedRoute)?.as_str(),
    ))
}

// Byte-range slice which the classified sub-format requires to be
// present in full
pub(crate) fn require(
    line: &str,
    range: std::ops::Range<usize>,
) -> Result<&str, DecodeError> {
    line.get(range).ok_or(DecodeError::TruncatedPacket)
}

// Render `minutes / 60` the way the legacy decoder did: fixed six
// fractional digits with the leading zero and the final digit dropped
pub(crate) fn minutes_fraction(minutes: f64) -> String {
    let rendered = format!("{:.6}", minutes / 60.0);
    rendered[1..rendered.len() - 1].to_owned()
}
