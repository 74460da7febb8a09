//! Decoded APRS packet and classification codes

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use strum::EnumMessage;

use crate::decoder::{decode, DecodeError};
use crate::wxcodes::WeatherElement;

/// APRS packet classification
///
/// Every successful decode carries exactly one `PacketType`. The
/// [`Unknown`](PacketType::Unknown) variant is reported when the packet
/// routing is valid but the body matches no known sub-format marker;
/// this is a valid outcome and not a decode failure.
///
/// Packet types may be converted `from()` their legacy string
/// representations. Using them `.as_ref()` or via `Display` will show
/// the same string.
///
/// ```
/// use aprsold::PacketType;
///
/// let ptype = PacketType::from("Weather Report");
/// assert_eq!(PacketType::WeatherReport, ptype);
/// assert_eq!("Weather Report", ptype.as_ref());
/// assert_eq!("Weather Report", &format!("{}", ptype));
/// assert_eq!("positioned weather report", ptype.as_display_str());
///
/// assert_eq!(PacketType::Unknown, PacketType::from("HUH"));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
)]
pub enum PacketType {
    /// No recognized body marker
    ///
    /// The routing header decoded but the body matched none of the
    /// known sub-formats. All positional fields are unset.
    #[default]
    #[strum(serialize = "Unknown", detailed_message = "unrecognized packet body")]
    Unknown,

    /// Free-text station status, optionally timestamped
    #[strum(serialize = "Status Report", detailed_message = "station status report")]
    StatusReport,

    /// Raw NMEA GPGGA fix sentence embedded in the packet body
    #[strum(serialize = "GPGGA", detailed_message = "raw NMEA GPGGA sentence")]
    Gpgga,

    /// Current-format Mic-E encoded position (not decoded)
    #[strum(serialize = "New Mic-E", detailed_message = "current-format Mic-E position")]
    NewMicE,

    /// Legacy-format Mic-E encoded position (not decoded)
    #[strum(serialize = "Old Mic-E", detailed_message = "legacy-format Mic-E position")]
    OldMicE,

    /// Plain-text position report
    #[strum(serialize = "Location", detailed_message = "plain position report")]
    Location,

    /// Position report carrying weather telemetry
    #[strum(serialize = "Weather Report", detailed_message = "positioned weather report")]
    WeatherReport,
}

impl PacketType {
    /// Legacy string representation
    ///
    /// Returns the packet-type name used by the wire-format
    /// documentation, like "`Weather Report`."
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// Human-readable string representation
    ///
    /// Converts to a lower-case description, like
    /// "`positioned weather report`."
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl FromStr for PacketType {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<PacketType, Self::Err> {
        match s {
            "Unknown" => Ok(PacketType::Unknown),
            "Status Report" => Ok(PacketType::StatusReport),
            "GPGGA" => Ok(PacketType::Gpgga),
            "New Mic-E" => Ok(PacketType::NewMicE),
            "Old Mic-E" => Ok(PacketType::OldMicE),
            "Location" => Ok(PacketType::Location),
            "Weather Report" => Ok(PacketType::WeatherReport),
            _ => Err(strum::ParseError::VariantNotFound),
        }
    }
}

impl From<&str> for PacketType {
    fn from(s: &str) -> PacketType {
        match PacketType::from_str(s) {
            Ok(ptype) => ptype,
            Err(_e) => PacketType::Unknown,
        }
    }
}

impl AsRef<str> for PacketType {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// A decoded APRS packet
///
/// Produced by [`decode()`](crate::decode). The station
/// [`callsign()`](AprsPacket::callsign) and
/// [`destination()`](AprsPacket::destination) are always present; every
/// other field is populated only for the packet types that define it,
/// and reads `None` otherwise. All fields are owned copies of the
/// relevant input bytes.
///
/// ```
/// use aprsold::{AprsPacket, PacketType};
///
/// let packet: AprsPacket = "N0CALL>APRS,TCPIP*:>Net Control on frequency"
///     .parse()
///     .expect("decode failure");
///
/// assert_eq!("N0CALL", packet.callsign());
/// assert_eq!("APRS", packet.destination());
/// assert_eq!(PacketType::StatusReport, packet.packet_type());
/// assert_eq!(Some("Net Control on frequency"), packet.status());
/// assert_eq!(None, packet.latitude());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AprsPacket {
    pub(crate) callsign: String,
    pub(crate) destination: String,
    pub(crate) packet_type: PacketType,
    pub(crate) raw_data: Option<String>,
    pub(crate) latitude: Option<String>,
    pub(crate) longitude: Option<String>,
    pub(crate) altitude: Option<String>,
    pub(crate) gps_time: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) heading: Option<String>,
    pub(crate) phg: Option<String>,
    pub(crate) speed: Option<String>,
    pub(crate) wind_direction: Option<String>,
    pub(crate) wind_speed: Option<String>,
    pub(crate) wind_gust: Option<String>,
    pub(crate) weather_temp: Option<String>,
    pub(crate) rain_hour: Option<String>,
    pub(crate) rain_day: Option<String>,
    pub(crate) rain_midnight: Option<String>,
    pub(crate) humidity: Option<String>,
    pub(crate) pressure: Option<String>,
    pub(crate) luminosity: Option<String>,
    pub(crate) snowfall: Option<String>,
    pub(crate) rain_counter: Option<String>,
}

impl AprsPacket {
    /// New packet with only the routing header populated
    pub(crate) fn new<S>(callsign: S, destination: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            callsign: callsign.into(),
            destination: destination.into(),
            packet_type: PacketType::default(),
            raw_data: None,
            latitude: None,
            longitude: None,
            altitude: None,
            gps_time: None,
            symbol: None,
            status: None,
            heading: None,
            phg: None,
            speed: None,
            wind_direction: None,
            wind_speed: None,
            wind_gust: None,
            weather_temp: None,
            rain_hour: None,
            rain_day: None,
            rain_midnight: None,
            humidity: None,
            pressure: None,
            luminosity: None,
            snowfall: None,
            rain_counter: None,
        }
    }

    /// Unset every body field
    ///
    /// A dispatch stage which reclassifies the packet must clear the
    /// fields written by earlier stages: a field belonging to a packet
    /// type other than the final classification is never reported.
    pub(crate) fn clear_body(&mut self) {
        let callsign = std::mem::take(&mut self.callsign);
        let destination = std::mem::take(&mut self.destination);
        *self = Self::new(callsign, destination);
    }

    /// Store the value extracted for a tagged weather element
    pub(crate) fn set_weather(&mut self, element: WeatherElement, value: String) {
        let slot = match element {
            WeatherElement::WindGust => &mut self.wind_gust,
            WeatherElement::Temperature => &mut self.weather_temp,
            WeatherElement::RainHour => &mut self.rain_hour,
            WeatherElement::RainDay => &mut self.rain_day,
            WeatherElement::RainMidnight => &mut self.rain_midnight,
            WeatherElement::Humidity => &mut self.humidity,
            WeatherElement::Pressure => &mut self.pressure,
            WeatherElement::Luminosity => &mut self.luminosity,
            WeatherElement::Snowfall => &mut self.snowfall,
            WeatherElement::RainCounter => &mut self.rain_counter,
        };
        *slot = Some(value);
    }

    /// Source station callsign
    ///
    /// The text before the `>` routing delimiter. The decoder imposes
    /// no character-set or SSID validation on it.
    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    /// Routing destination
    ///
    /// The text strictly between the `>` routing delimiter and the
    /// first comma of the packet, verbatim.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Packet classification
    ///
    /// Exactly one classification per decode.
    /// [`PacketType::Unknown`] marks a structurally valid packet whose
    /// body matched no known sub-format.
    pub fn packet_type(&self) -> PacketType {
        self.packet_type
    }

    /// Reserved; never populated
    pub fn raw_data(&self) -> Option<&str> {
        self.raw_data.as_deref()
    }

    /// Latitude in signed decimal degrees
    ///
    /// The sign encodes the hemisphere: negative is South. Populated
    /// for GPGGA, Location, and Weather Report packets.
    pub fn latitude(&self) -> Option<&str> {
        self.latitude.as_deref()
    }

    /// Longitude in signed decimal degrees
    ///
    /// The sign encodes the hemisphere: negative is West. Populated
    /// for GPGGA, Location, and Weather Report packets. The sign test
    /// reuses the latitude hemisphere field, so in practice only the
    /// longitude of a southern-hemisphere location report is negated.
    pub fn longitude(&self) -> Option<&str> {
        self.longitude.as_deref()
    }

    /// Altitude above mean sea level, GPGGA packets only
    pub fn altitude(&self) -> Option<&str> {
        self.altitude.as_deref()
    }

    /// Six-character GPS time field
    ///
    /// `HHMMSS` for GPGGA packets and `DDHHMM` for timestamped status
    /// reports, exactly as transmitted. For Location and Weather
    /// Report packets the legacy extraction reads this field relative
    /// to the `:!` marker even when that marker is absent, so its
    /// content may be unrelated to any timestamp.
    pub fn gps_time(&self) -> Option<&str> {
        self.gps_time.as_deref()
    }

    /// Two-character symbol code: table identifier plus symbol
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Free-text status, Status Report packets only
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Heading in degrees; declared but never populated
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Power-Height-Gain code; declared but never populated
    pub fn phg(&self) -> Option<&str> {
        self.phg.as_deref()
    }

    /// Speed; declared but never populated
    pub fn speed(&self) -> Option<&str> {
        self.speed.as_deref()
    }

    /// Wind direction in degrees, Weather Report packets only
    pub fn wind_direction(&self) -> Option<&str> {
        self.wind_direction.as_deref()
    }

    /// Sustained wind speed, Weather Report packets only
    pub fn wind_speed(&self) -> Option<&str> {
        self.wind_speed.as_deref()
    }

    /// Wind gust speed (`g` tag)
    pub fn wind_gust(&self) -> Option<&str> {
        self.wind_gust.as_deref()
    }

    /// Temperature (`t` tag)
    pub fn weather_temp(&self) -> Option<&str> {
        self.weather_temp.as_deref()
    }

    /// Rainfall over the last hour (`r` tag)
    pub fn rain_hour(&self) -> Option<&str> {
        self.rain_hour.as_deref()
    }

    /// Rainfall over the last 24 hours (`p` tag)
    pub fn rain_day(&self) -> Option<&str> {
        self.rain_day.as_deref()
    }

    /// Rainfall since local midnight (`P` tag)
    pub fn rain_midnight(&self) -> Option<&str> {
        self.rain_midnight.as_deref()
    }

    /// Relative humidity (`h` tag)
    pub fn humidity(&self) -> Option<&str> {
        self.humidity.as_deref()
    }

    /// Barometric pressure (`b` tag)
    pub fn pressure(&self) -> Option<&str> {
        self.pressure.as_deref()
    }

    /// Luminosity (`L` tag)
    pub fn luminosity(&self) -> Option<&str> {
        self.luminosity.as_deref()
    }

    /// Snowfall (`s` tag)
    pub fn snowfall(&self) -> Option<&str> {
        self.snowfall.as_deref()
    }

    /// Raw rain counter (`#` tag)
    pub fn rain_counter(&self) -> Option<&str> {
        self.rain_counter.as_deref()
    }

    /// GPS time of day as a true time value
    ///
    /// Interprets the [`gps_time()`](AprsPacket::gps_time) field as
    /// `HHMMSS` and converts it. Returns `None` when the field is
    /// unset, is not six digits, or does not name a valid time of day;
    /// in particular the garbage values the legacy extraction produces
    /// for marker-classified Location packets fail the digit check and
    /// read as `None`.
    ///
    /// Timestamped status reports transmit `DDHHMM` (day-of-month,
    /// hours, minutes zulu) in this field; this conversion does not
    /// apply to them.
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn gps_time_of_day(&self) -> Option<chrono::NaiveTime> {
        let field = self.gps_time.as_deref()?;
        if field.len() != 6 || !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let hour: u32 = field[0..2].parse().ok()?;
        let minute: u32 = field[2..4].parse().ok()?;
        let second: u32 = field[4..6].parse().ok()?;
        chrono::NaiveTime::from_hms_opt(hour, minute, second)
    }
}

impl TryFrom<&str> for AprsPacket {
    type Error = DecodeError;

    #[inline]
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        decode(line)
    }
}

impl FromStr for AprsPacket {
    type Err = DecodeError;

    #[inline]
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        decode(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packet_type_strings() {
        for (ptype, name) in [
            (PacketType::Unknown, "Unknown"),
            (PacketType::StatusReport, "Status Report"),
            (PacketType::Gpgga, "GPGGA"),
            (PacketType::NewMicE, "New Mic-E"),
            (PacketType::OldMicE, "Old Mic-E"),
            (PacketType::Location, "Location"),
            (PacketType::WeatherReport, "Weather Report"),
        ] {
            assert_eq!(name, ptype.as_str());
            assert_eq!(name, &format!("{}", ptype));
            assert_eq!(ptype, PacketType::from(name));
        }

        assert_eq!(PacketType::Unknown, PacketType::from("Compressed"));
        assert_eq!(PacketType::Unknown, PacketType::default());
    }

    #[test]
    fn test_clear_body() {
        let mut packet = AprsPacket::new("N0CALL", "APRS");
        packet.packet_type = PacketType::StatusReport;
        packet.status = Some("QRV".to_owned());
        packet.gps_time = Some("092345".to_owned());

        packet.clear_body();

        assert_eq!("N0CALL", packet.callsign());
        assert_eq!("APRS", packet.destination());
        assert_eq!(PacketType::Unknown, packet.packet_type());
        assert_eq!(None, packet.status());
        assert_eq!(None, packet.gps_time());
    }

    #[test]
    fn test_set_weather() {
        let mut packet = AprsPacket::new("N0CALL", "APRS");
        packet.set_weather(WeatherElement::WindGust, "015".to_owned());
        packet.set_weather(WeatherElement::Pressure, "101".to_owned());

        assert_eq!(Some("015"), packet.wind_gust());
        assert_eq!(Some("101"), packet.pressure());
        assert_eq!(None, packet.weather_temp());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_gps_time_of_day() {
        let mut packet = AprsPacket::new("N0CALL", "APRS");
        assert_eq!(None, packet.gps_time_of_day());

        packet.gps_time = Some("123456".to_owned());
        assert_eq!(
            chrono::NaiveTime::from_hms_opt(12, 34, 56),
            packet.gps_time_of_day()
        );

        // legacy garbage reads for marker-classified Location packets
        packet.gps_time = Some("0CALL>".to_owned());
        assert_eq!(None, packet.gps_time_of_day());

        packet.gps_time = Some("256161".to_owned());
        assert_eq!(None, packet.gps_time_of_day());
    }
}
