//! # Weather field tags known to `aprsold`
//!
//! | Tag | Element                      |
//! |-----|------------------------------|
//! | `g` | Wind gust                    |
//! | `t` | Temperature                  |
//! | `r` | Rainfall, last hour          |
//! | `p` | Rainfall, last 24 hours      |
//! | `P` | Rainfall since midnight      |
//! | `h` | Relative humidity            |
//! | `b` | Barometric pressure          |
//! | `L` | Luminosity                   |
//! | `s` | Snowfall                     |
//! | `#` | Raw rain counter             |
//!
//! A weather report body carries these single-character tags after the
//! wind direction/speed block. Every tag is followed by a fixed-width
//! value; the decoder always takes the three characters after the tag,
//! even where the station transmitted a shorter or longer field.
//!
//! ## See Also
//!
//! * [`WeatherElement`](crate::WeatherElement)

use std::fmt;

use phf::phf_map;
use strum::EnumMessage;

/// A tagged element of a weather report
///
/// Each element corresponds to one single-character tag in the body of
/// a [`WeatherReport`](crate::PacketType::WeatherReport) packet. Every
/// element is independently optional: a tag absent from the body
/// leaves its field unset on the decoded packet.
///
/// ```
/// use aprsold::WeatherElement;
///
/// assert_eq!('g', WeatherElement::WindGust.tag());
/// assert_eq!("wind gust", WeatherElement::WindGust.as_display_str());
/// assert_eq!("wind gust", &format!("{}", WeatherElement::WindGust));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
)]
pub enum WeatherElement {
    /// Peak wind gust over the last five minutes
    #[strum(detailed_message = "wind gust")]
    WindGust,

    /// Temperature in degrees Fahrenheit
    #[strum(detailed_message = "temperature")]
    Temperature,

    /// Rainfall over the last hour
    #[strum(detailed_message = "rain, last hour")]
    RainHour,

    /// Rainfall over the last 24 hours
    #[strum(detailed_message = "rain, last 24 hours")]
    RainDay,

    /// Rainfall since local midnight
    #[strum(detailed_message = "rain since midnight")]
    RainMidnight,

    /// Relative humidity in percent
    #[strum(detailed_message = "humidity")]
    Humidity,

    /// Barometric pressure
    #[strum(detailed_message = "barometric pressure")]
    Pressure,

    /// Luminosity in watts per square meter
    #[strum(detailed_message = "luminosity")]
    Luminosity,

    /// Snowfall over the last 24 hours
    #[strum(detailed_message = "snowfall")]
    Snowfall,

    /// Raw rain counter
    #[strum(detailed_message = "raw rain counter")]
    RainCounter,
}

/// Database of single-character weather field tags.
pub(crate) static TAGBOOK: phf::Map<char, WeatherElement> = phf_map! {
    'g' => WeatherElement::WindGust,
    't' => WeatherElement::Temperature,
    'r' => WeatherElement::RainHour,
    'p' => WeatherElement::RainDay,
    'P' => WeatherElement::RainMidnight,
    'h' => WeatherElement::Humidity,
    'b' => WeatherElement::Pressure,
    'L' => WeatherElement::Luminosity,
    's' => WeatherElement::Snowfall,
    '#' => WeatherElement::RainCounter,
};

impl WeatherElement {
    /// Single-character tag for this element
    pub fn tag(&self) -> char {
        for (tag, element) in TAGBOOK.entries() {
            if element == self {
                return *tag;
            }
        }
        unreachable!("element missing from tag database")
    }

    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }
}

impl fmt::Display for WeatherElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    /// ensure we have populated the tag database correctly
    #[test]
    fn check_tagbook() {
        let mut covered = HashSet::new();

        for (tag, element) in TAGBOOK.entries() {
            assert!(tag.is_ascii());
            assert!(!tag.is_ascii_uppercase() || matches!(*tag, 'P' | 'L'));
            assert!(covered.insert(*element), "element {} mapped twice", element);
        }

        // check that every element is covered by exactly one tag
        for element in WeatherElement::iter() {
            assert!(
                covered.contains(&element),
                "element {} not covered by any tag",
                element
            );
            assert_eq!(Some(&element), TAGBOOK.get(&element.tag()));
        }
    }
}
