//! Device Statistics (GP log 0x04) parsing
//!
//! Two layouts exist: the current one with a Flags column, and the 6.3-era
//! one without it, where a `~` suffix on the value marks a normalized entry.

use std::sync::LazyLock;

use regex::Regex;

use super::{Parser, ParserError, compile};
use crate::property::{Property, PropertyValue, Section, StatisticEntry};

/// Current format row: Page Offset Size Value Flags Description
static RE_ROW: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^[ \t]*([0-9a-z]+)[ \t]+([0-9a-z=]+)[ \t]+([0-9=]+)[ \t]+([0-9=-]+)[ \t]+([A-Z=-]{3,})[ \t]+(.+)$",
    )
});

/// Old format row: Page Offset Size Value Description
static RE_ROW_NOFLAGS: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^[ \t]*([0-9a-z]+)[ \t]+([0-9a-z=]+)[ \t]+([0-9=]+)[ \t]+([0-9=~-]+)[ \t]+(.+)$",
    )
});

/// Flag legend continuations ("    |||_ C monitored condition met")
static RE_FLAG_LEGEND: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\t ]+\|"));

/// Lines around the table that carry no row data
static RE_SKIP: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^(Device Statistics \((?:GP|SMART) Log 0x04\)|ATA_SMART_READ_LOG failed:|Read Device Statistics pages? (?:.+) failed)",
    )
});

/// Parse a page or offset column, accepting both "0x01" and "1"
fn parse_hex_column(column: &str) -> i64 {
    let trimmed = column.trim();
    if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        crate::units::leading_int(trimmed).unwrap_or(0)
    } else {
        i64::from_str_radix(trimmed, 16).unwrap_or(0)
    }
}

/// Parse the Device Statistics subsection
pub(super) fn parse_devstat(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    // supported / unsupported
    let supported = !sub.contains("not supported");
    {
        let mut p = Property::new(Section::Devstat);
        p.set_name(
            "Device statistics supported",
            "ata_device_statistics/_present",
            "",
        );
        p.value = PropertyValue::Bool(supported);
        parser.add(p);
    }
    if !supported {
        return Err(ParserError::DataError(
            "Device statistics not supported.".to_owned(),
        ));
    }

    let mut has_flags_column = true;
    let mut entries_found = false;

    for line in sub.lines() {
        if line.is_empty() || RE_SKIP.is_match(line) {
            continue;
        }

        // table header, detect the layout
        if line.starts_with("Page") && line.contains("Offset") && line.contains("Size") {
            has_flags_column = line.contains("Flags");
            continue;
        }

        if RE_FLAG_LEGEND.is_match(line) {
            continue;
        }

        let (captures, flags_group, descr_group) = if has_flags_column {
            (RE_ROW.captures(line), 5, 6)
        } else {
            (RE_ROW_NOFLAGS.captures(line), 0, 5)
        };
        let Some(captures) = captures else {
            log::warn!("Unparsable device statistics line: {line}");
            continue;
        };
        let group = |i: usize| captures.get(i).map_or("", |m| m.as_str()).trim();

        let mut value = group(4).to_owned();
        let mut flags = if flags_group == 0 {
            // old format has no flag letters, normalize the "~" value suffix
            if let Some(stripped) = value.strip_suffix('~') {
                value = stripped.to_owned();
                "N--".to_owned()
            } else {
                "---".to_owned()
            }
        } else {
            group(flags_group).to_owned()
        };

        let is_header = value == "=";
        if is_header {
            value = String::new();
            flags = String::new();
        }

        let statistic = StatisticEntry {
            page: u8::try_from(parse_hex_column(group(1))).unwrap_or(0),
            offset: u16::try_from(parse_hex_column(group(2))).unwrap_or(0),
            value_int: crate::units::leading_int(&value).unwrap_or(0),
            value,
            flags,
            is_header,
        };

        let mut description = group(descr_group).to_owned();
        if is_header {
            description = description.trim_matches(['=', ' ']).to_owned();
        }

        let mut p = Property::new(Section::Devstat);
        p.set_name(&description, "", "");
        p.reported_value = line.to_owned();
        p.value = PropertyValue::Statistic(statistic);
        parser.add(p);
        entries_found = true;
    }

    if entries_found {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No entries found in Device Statistics section.".to_owned(),
        ))
    }
}
