//! Status report extraction

use crate::packet::{AprsPacket, PacketType};

/// Extract a status report from the text past the `:>` marker
///
/// A timestamped status leads with a six-character day/hour/minute
/// group and a `z` suffix; the free text follows it. Anything else is
/// free text from the marker to the end of the line. Bodies too short
/// for the seven-byte timestamp lookahead fall back to whole-remainder
/// status, so this extractor cannot fail.
pub(crate) fn extract(line: &str, marker: usize, packet: &mut AprsPacket) {
    packet.packet_type = PacketType::StatusReport;

    let body = &line[marker + 2..];
    if body.len() > 6 && body.as_bytes()[6].eq_ignore_ascii_case(&b'z') {
        if let (Some(time), Some(text)) = (body.get(..6), body.get(7..)) {
            packet.gps_time = Some(time.to_owned());
            packet.status = Some(text.to_owned());
            return;
        }
    }

    packet.status = Some(body.to_owned());
}

#[cfg(test)]
mod tests {
    use crate::decoder::decode;
    use crate::packet::PacketType;

    #[test]
    fn test_timestamp_suffix_case() {
        let packet = decode("N0CALL>APRS,TCPIP*:>092345ZQRV 146.52").expect("bad packet");

        assert_eq!(PacketType::StatusReport, packet.packet_type());
        assert_eq!(Some("092345"), packet.gps_time());
        assert_eq!(Some("QRV 146.52"), packet.status());
    }

    #[test]
    fn test_short_body_skips_timestamp() {
        // exactly six characters: too short for the `z` lookahead
        let packet = decode("N0CALL>APRS,TCPIP*:>092345").expect("bad packet");

        assert_eq!(PacketType::StatusReport, packet.packet_type());
        assert_eq!(None, packet.gps_time());
        assert_eq!(Some("092345"), packet.status());
    }

    #[test]
    fn test_seventh_character_not_z() {
        let packet = decode("N0CALL>APRS,TCPIP*:>0923456 away").expect("bad packet");

        assert_eq!(None, packet.gps_time());
        assert_eq!(Some("0923456 away"), packet.status());
    }

    #[test]
    fn test_empty_status() {
        let packet = decode("N0CALL>APRS,TCPIP*:>").expect("bad packet");

        assert_eq!(PacketType::StatusReport, packet.packet_type());
        assert_eq!(Some(""), packet.status());
    }
}
