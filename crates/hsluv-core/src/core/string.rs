use crate::error::ColorFormatError;

/// Parse a 24-bit color in hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes.
///
/// The hex code has exactly six hexadecimal digits, optionally preceded by a
/// `#`. Letters may be upper or lower case.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(2 * index..2 * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }

        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Format the 24-bit color as six uppercase hexadecimal digits.
pub(crate) fn format_hex(coordinates: [u8; 3]) -> String {
    let [r, g, b] = coordinates;
    format!("{:02X}{:02X}{:02X}", r, g, b)
}

// ====================================================================================================================
