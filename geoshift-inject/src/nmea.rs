//! NMEA 0183 sentence rendering.
//!
//! Some consumers read raw NMEA feeds instead of the provider config
//! layer, so the fan-out also publishes the fix as a four-sentence block
//! (GGA, RMC, GSV, GLL) with standard XOR checksums.

use chrono::{DateTime, TimeZone, Utc};

use geoshift_core::Position;

/// Render the NMEA block for a fix. Time and date fields come from the
/// fix timestamp, interpreted as UTC.
pub fn render_sentences(position: &Position) -> String {
    let at: DateTime<Utc> = Utc
        .timestamp_millis_opt(position.timestamp_ms)
        .single()
        .unwrap_or_else(Utc::now);
    let time = at.format("%H%M%S").to_string();
    let date = at.format("%d%m%y").to_string();

    let (lat, lat_dir) = encode_component(position.latitude, 2, 'N', 'S');
    let (lon, lon_dir) = encode_component(position.longitude, 3, 'E', 'W');

    let sentences = [
        format!("$GPGGA,{time},{lat},{lat_dir},{lon},{lon_dir},1,08,1.0,0.0,M,0.0,M,,"),
        format!("$GPRMC,{time},A,{lat},{lat_dir},{lon},{lon_dir},0.0,0.0,{date},,,A"),
        // Fixed satellite constellation; consumers only need a plausible view.
        "$GPGSV,3,1,12,01,40,083,46,02,17,308,41,03,07,344,39,04,28,227,45".to_string(),
        format!("$GPGLL,{lat},{lat_dir},{lon},{lon_dir},{time},A,A"),
    ];

    let mut block = String::new();
    for sentence in sentences {
        block.push_str(&sentence);
        block.push_str(&checksum(&sentence));
        block.push('\n');
    }
    block
}

/// Encode one coordinate as NMEA degrees + decimal minutes
/// (`ddmm.mmmm` / `dddmm.mmmm`) with a hemisphere letter.
fn encode_component(value: f64, degree_width: usize, positive: char, negative: char) -> (String, char) {
    let hemisphere = if value >= 0.0 { positive } else { negative };
    let abs = value.abs();
    let degrees = abs.trunc() as u32;
    let minutes = (abs - f64::from(degrees)) * 60.0;
    (
        format!("{degrees:0degree_width$}{minutes:07.4}"),
        hemisphere,
    )
}

/// XOR checksum over the sentence body (everything after the leading `$`),
/// rendered as `*HH`.
pub fn checksum(sentence: &str) -> String {
    let mut sum = 0u8;
    for c in sentence.chars().skip(1) {
        if c == '$' || c == '*' {
            continue;
        }
        sum ^= c as u8;
    }
    format!("*{sum:02X}")
}
