//! Embedded NMEA GPGGA sentence extraction
//!
//! Some stations forward a raw GPGGA fix sentence as the packet body.
//! The sentence is comma-delimited from the `:$GPGGA,` marker onward;
//! coordinates arrive in degrees-and-decimal-minutes notation and are
//! converted to decimal-degree strings.

use crate::decoder::{minutes_fraction, DecodeError};
use crate::packet::{AprsPacket, PacketType};

// Comma-field indices, counting the `:$GPGGA` marker itself as field 0
const FIELD_TIME: usize = 1;
const FIELD_LATITUDE: usize = 2;
const FIELD_HEMISPHERE: usize = 3;
const FIELD_LONGITUDE: usize = 4;
const FIELD_ALTITUDE: usize = 9;
const MIN_FIELDS: usize = 9;

/// Extract an embedded GPGGA sentence starting at the marker
pub(crate) fn extract(
    line: &str,
    marker: usize,
    packet: &mut AprsPacket,
) -> Result<(), DecodeError> {
    let fields: Vec<&str> = line[marker..].split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(DecodeError::InsufficientFields);
    }

    packet.packet_type = PacketType::Gpgga;
    packet.gps_time = Some(fields[FIELD_TIME].to_owned());

    // the latitude hemisphere field also decides the longitude sign;
    // field 5 is never consulted
    let hemisphere = fields[FIELD_HEMISPHERE];

    // DDMM.MMMM: two degree digits, then decimal minutes
    let lat = fields[FIELD_LATITUDE];
    let lat_minutes: f64 = lat
        .get(2..)
        .ok_or(DecodeError::NumericParseError("latitude minutes"))?
        .parse()
        .map_err(|_| DecodeError::NumericParseError("latitude minutes"))?;
    let mut latitude = format!("{}{}", &lat[..2], minutes_fraction(lat_minutes));
    if hemisphere == "S" {
        latitude.insert(0, '-');
    }
    packet.latitude = Some(latitude);

    // DDDMM.MMMM: three degree digits
    let lon = fields[FIELD_LONGITUDE];
    let lon_minutes: f64 = lon
        .get(3..)
        .ok_or(DecodeError::NumericParseError("longitude minutes"))?
        .parse()
        .map_err(|_| DecodeError::NumericParseError("longitude minutes"))?;
    let mut longitude = format!("{}{}", &lon[..3], minutes_fraction(lon_minutes));
    if hemisphere == "W" {
        longitude.insert(0, '-');
    }
    packet.longitude = Some(longitude);

    let altitude: f64 = fields
        .get(FIELD_ALTITUDE)
        .ok_or(DecodeError::InsufficientFields)?
        .parse()
        .map_err(|_| DecodeError::NumericParseError("altitude"))?;
    packet.altitude = Some(format!("{:.6}", altitude));

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::decoder::{decode, DecodeError};
    use crate::packet::PacketType;

    #[test]
    fn test_southern_hemisphere() {
        let packet = decode(
            "N0CALL>APRS:$GPGGA,002153,3342.6618,S,15034.1092,E,1,10,1.2,19.7,M,,,,*42",
        )
        .expect("bad packet");

        assert_eq!(PacketType::Gpgga, packet.packet_type());
        assert_eq!(Some("002153"), packet.gps_time());
        assert_eq!(Some("-33.71103"), packet.latitude());

        // the sign test reuses the latitude hemisphere field, so an
        // eastern longitude stays positive even for `S` fixes
        assert_eq!(Some("150.56848"), packet.longitude());
        assert_eq!(Some("19.700000"), packet.altitude());
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            Err(DecodeError::InsufficientFields),
            decode("N0CALL>APRS:$GPGGA,123456,4807.038")
        );
    }

    #[test]
    fn test_missing_altitude_field() {
        // nine fields pass the count check but leave no altitude
        assert_eq!(
            Err(DecodeError::InsufficientFields),
            decode("N0CALL>APRS:$GPGGA,123456,4807.038,N,01131.000,E,1,08,0.9")
        );
    }

    #[test]
    fn test_bad_latitude_minutes() {
        assert_eq!(
            Err(DecodeError::NumericParseError("latitude minutes")),
            decode("N0CALL>APRS:$GPGGA,123456,48xx.038,N,01131.000,E,1,08,0.9,545.4,M")
        );

        // a latitude field too short to carry minutes at all
        assert_eq!(
            Err(DecodeError::NumericParseError("latitude minutes")),
            decode("N0CALL>APRS:$GPGGA,123456,4,N,01131.000,E,1,08,0.9,545.4,M")
        );
    }

    #[test]
    fn test_bad_longitude_minutes() {
        assert_eq!(
            Err(DecodeError::NumericParseError("longitude minutes")),
            decode("N0CALL>APRS:$GPGGA,123456,4807.038,N,011xx.000,E,1,08,0.9,545.4,M")
        );
    }

    #[test]
    fn test_bad_altitude() {
        assert_eq!(
            Err(DecodeError::NumericParseError("altitude")),
            decode("N0CALL>APRS:$GPGGA,123456,4807.038,N,01131.000,E,1,08,0.9,bad,M")
        );
    }
}
