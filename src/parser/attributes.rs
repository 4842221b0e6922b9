//! Vendor-specific attribute table parsing
//!
//! The table comes in three layouts: "old" (used by `-a`), the pre-5.1-14
//! "old" variant without the UPDATED column, and "brief" (used by `-x`)
//! where TYPE and UPDATED are packed into flag letters.

use std::sync::LazyLock;

use regex::Regex;

use super::{Parser, ParserError, compile};
use crate::{
    property::{
        AttributeEntry, AttributeType, FailTime, Property, PropertyValue, Section, UpdateType,
    },
    units,
};

/// Attribute table layout
#[derive(Clone, Copy, PartialEq, Eq)]
enum Format {
    /// ID# NAME FLAG VALUE WORST THRESH TYPE UPDATED WHEN_FAILED RAW_VALUE
    Old,
    /// Same without the UPDATED column (smartctl <= 5.1-13)
    OldNoUpdated,
    /// ID# NAME FLAGS VALUE WORST THRESH FAIL RAW_VALUE
    Brief,
}

/// Old-format row. The name may contain spaces ("Head flying hours"); it
/// ends where the 0x-prefixed flag begins.
static RE_ROW_OLD: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^[ \t]*([0-9]+) ([^ \t\n]+(?:[^0-9\t\n]+)*)[ \t]+(0x[a-fA-F0-9]+)[ \t]+([0-9-]+)[ \t]+([0-9-]+)[ \t]+([0-9-]+)[ \t]+([^ \t\n]+)[ \t]+([^ \t\n]+)[ \t]+([^ \t\n]+)[ \t]+(.+?)[ \t]*$",
    )
});

/// Old-format row without the UPDATED column
static RE_ROW_OLD_NOUP: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^[ \t]*([0-9]+) ([^ \t\n]+(?:[^0-9\t\n]+)*)[ \t]+(0x[a-fA-F0-9]+)[ \t]+([0-9-]+)[ \t]+([0-9-]+)[ \t]+([0-9-]+)[ \t]+([^ \t\n]+)[ \t]+([^ \t\n]+)[ \t]+(.+?)[ \t]*$",
    )
});

/// Brief-format row: single-token name, packed flag letters
static RE_ROW_BRIEF: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^[ \t]*([0-9]+) ([^ \t\n]+)[ \t]+([A-Z+-]{2,})[ \t]+([0-9-]+)[ \t]+([0-9-]+)[ \t]+([0-9-]+)[ \t]+([^ \t\n]+)[ \t]+(.+?)[ \t]*$",
    )
});

/// Flag legend continuations ("    |______ P prefailure warning")
static RE_FLAG_LEGEND: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\t ]+\|"));

/// "Data Structure revision number: 16"
static RE_REVISION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^([^:\n]+):[ \t]*(.*)$"));

/// Parse a normalized attribute column, `---` meaning absent
fn parse_column(column: &str) -> Option<u8> {
    column.trim().parse().ok()
}

/// Parse the attribute table subsection
#[expect(clippy::too_many_lines)]
pub(super) fn parse_attributes(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    let mut attr_found = false;
    let mut format = Format::Old;

    for line in sub.lines() {
        if line.is_empty() || line.contains("SMART Attributes with Thresholds") {
            continue;
        }

        if line.contains("ATTRIBUTE_NAME") {
            // table header, detect the layout
            if !line.contains("WHEN_FAILED") {
                format = Format::Brief;
            } else if !line.contains("UPDATED") {
                format = Format::OldNoUpdated;
            }
            continue;
        }

        if RE_FLAG_LEGEND.is_match(line) {
            continue;
        }

        if line.contains("Data Structure revision number") {
            if let Some(captures) = RE_REVISION.captures(line) {
                let name = captures.get(1).map_or("", |m| m.as_str()).trim();
                let value = captures.get(2).map_or("", |m| m.as_str()).trim();
                let mut p = Property::new(Section::Attributes);
                p.set_name(name, "ata_smart_attributes/revision", "");
                p.reported_value = value.to_owned();
                p.value = PropertyValue::Integer(units::leading_int(value).unwrap_or(0));
                parser.add(p);
                attr_found = true;
            }
            continue;
        }

        let captures = match format {
            Format::Old => RE_ROW_OLD.captures(line),
            Format::OldNoUpdated => RE_ROW_OLD_NOUP.captures(line),
            Format::Brief => RE_ROW_BRIEF.captures(line),
        };
        let Some(captures) = captures else {
            log::warn!("Unparsable attribute line: {line}");
            continue;
        };
        let group = |i: usize| captures.get(i).map_or("", |m| m.as_str()).trim();

        let mut attr = AttributeEntry {
            id: group(1).parse().unwrap_or(0),
            flag: group(3).to_owned(),
            value: parse_column(group(4)),
            worst: parse_column(group(5)),
            threshold: parse_column(group(6)),
            ..AttributeEntry::default()
        };

        let (type_column, updated_column, failed_column, raw_column) = match format {
            Format::Old => (group(7), group(8), group(9), group(10)),
            Format::OldNoUpdated => (group(7), "", group(8), group(9)),
            Format::Brief => ("", "", group(7), group(8)),
        };

        attr.attr_type = if format == Format::Brief {
            if attr.flag.contains('P') {
                AttributeType::Prefail
            } else {
                AttributeType::OldAge
            }
        } else {
            match type_column {
                "Pre-fail" => AttributeType::Prefail,
                "Old_age" => AttributeType::OldAge,
                _ => AttributeType::Unknown,
            }
        };

        attr.update_type = if format == Format::Brief {
            if attr.flag.contains('O') {
                UpdateType::Always
            } else {
                UpdateType::Offline
            }
        } else if format == Format::OldNoUpdated {
            UpdateType::Unknown
        } else {
            match updated_column {
                "Always" => UpdateType::Always,
                "Offline" => UpdateType::Offline,
                _ => UpdateType::Unknown,
            }
        };

        attr.when_failed = match failed_column {
            "-" => FailTime::None,
            // the short forms come from the brief format
            "In_the_past" | "Past" => FailTime::Past,
            "FAILING_NOW" | "NOW" => FailTime::Now,
            _ => FailTime::Unknown,
        };

        attr.raw_value = raw_column.to_owned();
        attr.raw_value_int = units::leading_int(raw_column).unwrap_or(0);

        let mut p = Property::new(Section::Attributes);
        p.set_name(group(2), "", "");
        p.reported_value = line.to_owned();
        p.value = PropertyValue::Attribute(attr);
        parser.add(p);
        attr_found = true;
    }

    if attr_found {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No attributes found in Attributes section.".to_owned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse an attribute subsection and return the properties
    fn parse_body(body: &str) -> Vec<Property> {
        let mut parser = Parser::default();
        parse_attributes(&mut parser, body).unwrap();
        parser.properties
    }

    /// The attribute entry of a property, by reported name
    fn entry<'a>(props: &'a [Property], name: &str) -> &'a AttributeEntry {
        props
            .iter()
            .find(|p| p.reported_name == name)
            .and_then(Property::attribute)
            .unwrap_or_else(|| panic!("missing attribute {name}"))
    }

    const OLD_FORMAT: &str = "\
SMART Attributes Data Structure revision number: 16
Vendor Specific SMART Attributes with Thresholds:
ID# ATTRIBUTE_NAME          FLAG     VALUE WORST THRESH TYPE      UPDATED  WHEN_FAILED RAW_VALUE
  1 Raw_Read_Error_Rate     0x000b   100   100   016    Pre-fail  Always       -       0
  3 Spin_Up_Time            0x0007   123   123   024    Pre-fail  Always       -       615 (Average 644)
  5 Reallocated_Sector_Ct   0x0033   100   100   010    Pre-fail  Always   FAILING_NOW       42
  9 Power_On_Hours          0x0012   253   100   ---    Old_age   Always       -       1723
194 Temperature_Celsius     0x0002   171   171   000    Old_age   Always       -       35 (Min/Max 13/45)
198 Offline_Uncorrectable   0x0008   100   100   000    Old_age   Offline  In_the_past       12
240 Head_Flying_Hours       0x0012   100   100   000    Old_age   Always       -       1335h+29m+06.152s
";

    const BRIEF_FORMAT: &str = "\
SMART Attributes Data Structure revision number: 16
Vendor Specific SMART Attributes with Thresholds:
ID# ATTRIBUTE_NAME          FLAGS    VALUE WORST THRESH FAIL RAW_VALUE
  1 Raw_Read_Error_Rate     PO-R--   100   100   062    -    0
  2 Throughput_Performance  P-S---   197   197   040    -    160
194 Temperature_Celsius     -O----   222   222   000    -    27 (Min/Max 12/48)
197 Current_Pending_Sector  -O--C-   100   100   000    NOW  5
                            ||||||_ K auto-keep
                            |||||__ C event count
                            ||||___ R error rate
                            |||____ S speed/performance
                            ||_____ O updated online
                            |______ P prefailure warning
";

    #[test]
    fn old_format_rows() {
        let props = parse_body(OLD_FORMAT);
        let realloc = entry(&props, "Reallocated_Sector_Ct");
        assert_eq!(realloc.id, 5);
        assert_eq!(realloc.value, Some(100));
        assert_eq!(realloc.worst, Some(100));
        assert_eq!(realloc.threshold, Some(10));
        assert_eq!(realloc.attr_type, AttributeType::Prefail);
        assert_eq!(realloc.update_type, UpdateType::Always);
        assert_eq!(realloc.when_failed, FailTime::Now);
        assert_eq!(realloc.raw_value_int, 42);

        let spin_up = entry(&props, "Spin_Up_Time");
        assert_eq!(spin_up.raw_value, "615 (Average 644)");
        assert_eq!(spin_up.raw_value_int, 615);

        let uncorrectable = entry(&props, "Offline_Uncorrectable");
        assert_eq!(uncorrectable.when_failed, FailTime::Past);
        assert_eq!(uncorrectable.update_type, UpdateType::Offline);
    }

    #[test]
    fn missing_threshold_is_none() {
        let props = parse_body(OLD_FORMAT);
        let hours = entry(&props, "Power_On_Hours");
        assert_eq!(hours.threshold, None);
        assert_eq!(hours.value, Some(253));
    }

    #[test]
    fn revision_property() {
        let props = parse_body(OLD_FORMAT);
        let revision = props
            .iter()
            .find(|p| p.generic_name == "ata_smart_attributes/revision")
            .unwrap();
        assert!(matches!(revision.value, PropertyValue::Integer(16)));
    }

    #[test]
    fn row_ids_match_first_column() {
        let props = parse_body(OLD_FORMAT);
        for (name, id) in [
            ("Raw_Read_Error_Rate", 1),
            ("Spin_Up_Time", 3),
            ("Reallocated_Sector_Ct", 5),
            ("Power_On_Hours", 9),
            ("Temperature_Celsius", 194),
            ("Offline_Uncorrectable", 198),
            ("Head_Flying_Hours", 240),
        ] {
            assert_eq!(entry(&props, name).id, id);
        }
    }

    #[test]
    fn brief_format_rows() {
        let props = parse_body(BRIEF_FORMAT);
        let raw_read = entry(&props, "Raw_Read_Error_Rate");
        assert_eq!(raw_read.attr_type, AttributeType::Prefail);
        assert_eq!(raw_read.update_type, UpdateType::Always);
        assert_eq!(raw_read.when_failed, FailTime::None);

        // P present, O absent: updated offline only
        let throughput = entry(&props, "Throughput_Performance");
        assert_eq!(throughput.attr_type, AttributeType::Prefail);
        assert_eq!(throughput.update_type, UpdateType::Offline);

        let temperature = entry(&props, "Temperature_Celsius");
        assert_eq!(temperature.attr_type, AttributeType::OldAge);
        assert_eq!(temperature.raw_value_int, 27);

        let pending = entry(&props, "Current_Pending_Sector");
        assert_eq!(pending.when_failed, FailTime::Now);
        assert_eq!(pending.raw_value_int, 5);
    }

    #[test]
    fn legend_lines_never_parse_as_attributes() {
        let props = parse_body(BRIEF_FORMAT);
        // 1 revision + 4 rows, nothing from the legend
        assert_eq!(props.len(), 5);
        assert!(props.iter().all(|p| !p.reported_name.contains('|')));
    }

    #[test]
    fn name_with_spaces_in_old_format() {
        let body = "\
ID# ATTRIBUTE_NAME          FLAG     VALUE WORST THRESH TYPE      UPDATED  WHEN_FAILED RAW_VALUE
240 Head flying hours       0x0012   100   100   000    Old_age   Always       -       1335
";
        let props = parse_body(body);
        assert_eq!(entry(&props, "Head flying hours").id, 240);
    }

    #[test]
    fn empty_table_is_a_data_error() {
        let mut parser = Parser::default();
        assert!(matches!(
            parse_attributes(&mut parser, "Vendor Specific SMART Attributes with Thresholds:\n"),
            Err(ParserError::DataError(_))
        ));
    }
}
