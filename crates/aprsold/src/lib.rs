//! # aprsold: APRS text packet decoding
//!
//! This crate decodes single lines of
//! [Automatic Packet Reporting System](http://www.aprs.org/) (APRS)
//! text into structured records describing a station's identity,
//! position, and optional telemetry. It understands the legacy
//! plain-text sub-formats: status reports, embedded NMEA GPGGA fix
//! sentences, uncompressed location reports, and positioned weather
//! reports. Mic-E compressed packets are detected but not decoded.
//!
//! ## Disclaimer
//!
//! This crate is dual-licensed MIT and Apache 2.0. Read these licenses
//! carefully as they may affect your rights.
//!
//! The decoder reproduces the column layout and quirks of a
//! widely-deployed legacy implementation, bugs and all; see the
//! [quirks](#quirks) section. The author **strongly discourages** its
//! use in any safety-critical or navigation application.
//!
//! ## Example
//!
//! You will first need a raw APRS text line. Obtaining one is beyond
//! the scope of this crate: connect to an
//! [APRS-IS](https://www.aprs-is.net/) feed over TCP, or read frames
//! from a TNC in converse mode. One frame per line, no trailing
//! newline.
//!
//! ```
//! use aprsold::{decode, PacketType};
//!
//! let packet = decode(
//!     "N0CALL>APRS,TCPIP*:@092345z4903.50N/07201.75W_180/010g015t068r001p011P010h99b10140",
//! )
//! .expect("decode failure");
//!
//! assert_eq!("N0CALL", packet.callsign());
//! assert_eq!("APRS", packet.destination());
//! assert_eq!(PacketType::WeatherReport, packet.packet_type());
//! assert_eq!(Some("49.05833"), packet.latitude());
//! assert_eq!(Some("72.02916"), packet.longitude());
//! assert_eq!(Some("/_"), packet.symbol());
//! assert_eq!(Some("180"), packet.wind_direction());
//! assert_eq!(Some("015"), packet.wind_gust());
//! assert_eq!(Some("068"), packet.weather_temp());
//! ```
//!
//! Decode failures are typed: an unrecognized body is a successful
//! decode with [`PacketType::Unknown`], while structural problems
//! surface as a [`DecodeError`].
//!
//! ```
//! use aprsold::{decode, DecodeError};
//!
//! assert_eq!(Err(DecodeError::EmptyInput), decode(""));
//! assert_eq!(
//!     Err(DecodeError::UnsupportedFormat),
//!     decode("no routing delimiter here")
//! );
//! ```
//!
//! ## Background
//!
//! APRS is an amateur-radio broadcast format for positions, weather,
//! and short telemetry, carried over AX.25 at 1200 baud and mirrored
//! worldwide by the APRS-IS internet backbone. A transmission frame
//! renders as a single text line: a routing header
//! (`CALLSIGN>DESTINATION,PATH`), then a body whose first characters
//! after the `:` separator select one of several sub-formats. The
//! sub-formats are positional and overlapping: detection scans for
//! two-character markers and reads fields at fixed byte offsets
//! relative to them.
//!
//! ## Quirks
//!
//! The column layout decoded here matches the legacy implementation
//! exactly, including behavior that is arguably wrong but is
//! externally observable and therefore preserved:
//!
//! * The GPGGA latitude hemisphere field decides the longitude sign
//!   too; the longitude's own hemisphere field is never consulted.
//! * Location reports reuse the latitude `S` flag to negate the
//!   longitude.
//! * Location longitude degrees are read two bytes wide, so
//!   longitudes of 100° and beyond lose their leading digit.
//! * The `gps_time` of a marker-classified location report is read
//!   relative to the `:!` marker even when that marker is absent,
//!   landing in the routing header.
//! * Weather tag values are always three bytes wide regardless of the
//!   width the station transmitted.
//!
//! ## Crate features
//!
//! * `chrono`: interpret six-digit GPS time fields as true times of
//!   day via [`AprsPacket::gps_time_of_day()`]. Enabled by default; if
//!   enabled, `chrono` becomes part of this crate's public API.

mod decoder;
mod packet;
mod wxcodes;

pub use decoder::{decode, DecodeError};
pub use packet::{AprsPacket, PacketType};
pub use wxcodes::WeatherElement;
