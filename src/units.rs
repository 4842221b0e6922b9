//! Byte size formatting and numeric parsing helpers

/// Decimal units, 1000-based
const DECIMAL_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
/// Binary units, 1024-based
const BINARY_UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Format a byte count as "1.00 TB" (decimal) or "931.51 GiB" (binary)
pub(crate) fn format_size(bytes: u64, binary: bool) -> String {
    let (step, units) = if binary {
        (1024.0, &BINARY_UNITS)
    } else {
        (1000.0, &DECIMAL_UNITS)
    };
    #[expect(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut index = 0;
    while value >= step && index < units.len() - 1 {
        value /= step;
        index += 1;
    }
    if index == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.2} {}", units.get(index).copied().unwrap_or("B"))
    }
}

/// Thousands separators smartctl may emit depending on the system locale.
/// 0xA0/0xC2 cover French and Finnish locale output loaded from saved files.
const BYTE_SIZE_SEPARATORS: [char; 6] = [' ', '\'', ',', '.', '\u{a0}', '\u{c2}'];

/// Parse a thousands-separated byte count like "500,107,862,016 bytes [500 GB]"
/// or "80'060'424'192 bytes". Returns the byte count and a display string like
/// "1.00 TB [931.51 GiB, 1000204886016 bytes]".
pub(crate) fn parse_byte_size(value: &str) -> Option<(i64, String)> {
    parse_byte_size_with(value, &[])
}

/// Same as [`parse_byte_size`], with additional separators (e.g. a locale's
/// thousands separator when reading output saved on another system)
pub(crate) fn parse_byte_size_with(value: &str, extra_separators: &[char]) -> Option<(i64, String)> {
    let cut = value.split('[').next().unwrap_or(value);
    let digits: String = cut
        .replace("bytes", "")
        .chars()
        .filter(|c| !BYTE_SIZE_SEPARATORS.contains(c) && !extra_separators.contains(c))
        .collect();
    let bytes: i64 = digits.trim().parse().ok()?;
    let readable = format!(
        "{} [{}, {} bytes]",
        format_size(u64::try_from(bytes).ok()?, false),
        format_size(u64::try_from(bytes).ok()?, true),
        bytes
    );
    Some((bytes, readable))
}

/// Parse the leading integer of a string, auto-detecting a `0x` hex prefix
/// and ignoring anything after the number ("615 (Average 644)" parses as 615)
pub(crate) fn leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        let digits: String = hex.chars().take_while(char::is_ascii_hexdigit).collect();
        return i64::from_str_radix(&digits, 16).ok();
    }
    let negative = trimmed.starts_with('-');
    let digits: String = trimmed
        .chars()
        .skip(usize::from(negative))
        .take_while(char::is_ascii_digit)
        .collect();
    let parsed: i64 = digits.parse().ok()?;
    Some(if negative { -parsed } else { parsed })
}
