//! Information and Health section parsing

use std::sync::LazyLock;

use regex::Regex;

use super::{Parser, ParserError, compile};
use crate::{
    property::{Property, PropertyValue, Section},
    units,
};

/// Info line grammar, e.g. "Device Model:     ST3500630AS" (ungreedy name)
static RE_INFO_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^([^\n]+?): [ \t]*(.*)$"));

/// Health line grammar; the value may directly follow the colon
static RE_HEALTH_LINE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^([^:\n]+):[ \t]*(.*)$"));

/// Lines that are not name/value pairs and carry nothing we show.
/// Most show up when SMART is unsupported or disabled, or on USB bridges.
static RE_INFO_SKIP: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(mandatory SMART command failed|^Unexpected SCT status|^Write SCT \(Get\) XXX Error Recovery Control Command failed|^Write SCT \(Get\) Feature Control Command failed|^Read SCT Status failed|^Read SMART Data failed|^Unknown SCT Status format version|^Read SMART Thresholds failed|Enabled status cached by OS, trying SMART RETURN STATUS cmd|^>> Terminate command early due to bad response to IEC mode page|^scsiModePageOffset: .+)",
    )
});

/// Classify one info name/value pair: assign the generic and displayable
/// names and a typed value
#[expect(clippy::too_many_lines)]
fn classify_info_property(p: &mut Property) -> Result<(), ParserError> {
    if p.section != Section::Info {
        log::error!("Info property classifier called with non-info section");
        return Err(ParserError::InternalError(
            "info classifier called on a non-info property".to_owned(),
        ));
    }

    let name = p.reported_name.clone();
    let value = p.reported_value.clone();
    let mut text_value = true;

    match name.as_str() {
        "Model Family" => p.set_name(&name, "model_family", "Model Family"),
        // "Device" and "Product" come from scsi/usb bridges
        "Device Model" | "Device" | "Product" => p.set_name(&name, "model_name", "Device Model"),
        "Vendor" => p.set_name(&name, "vendor", "Vendor"),
        "Revision" => p.set_name(&name, "revision", "Revision"),
        "Device type" => p.set_name(&name, "device_type/name", "Device Type"),
        "Compliance" => p.set_name(&name, "scsi_version", "Compliance"),
        "Serial Number" => p.set_name(&name, "serial_number", "Serial Number"),
        "LU WWN Device Id" => p.set_name(&name, "wwn/_merged", "World Wide Name"),
        "Add. Product Id" => {
            p.set_name(&name, "ata_additional_product_id", "Additional Product ID");
        }
        "Firmware Version" => p.set_name(&name, "firmware_version", "Firmware Version"),
        "User Capacity" => {
            p.set_name(&name, "user_capacity/bytes", "Capacity");
            text_value = false;
            if let Some((bytes, readable)) = units::parse_byte_size(&value) {
                p.value = PropertyValue::Integer(bytes);
                p.readable_value = readable;
            } else {
                p.readable_value = "[unknown]".to_owned();
            }
        }
        // two values (physical/logical) if they differ, one otherwise
        "Sector Sizes" | "Sector Size" => {
            p.set_name(
                &name,
                "physical_block_size/_and/logical_block_size",
                &name,
            );
        }
        "Logical block size" => p.set_name(&name, "logical_block_size", "Logical Block Size"),
        "Rotation Rate" => {
            p.set_name(&name, "rotation_rate", "Rotation Rate");
            text_value = false;
            if let Some(rpm) = units::leading_int(&value) {
                p.value = PropertyValue::Integer(rpm);
            }
        }
        "Form Factor" => p.set_name(&name, "form_factor/name", "Form Factor"),
        "Device is" => {
            p.set_name(&name, "in_smartctl_database", "In Smartctl Database");
            text_value = false;
            p.value = PropertyValue::Bool(!value.contains("Not in "));
        }
        "ATA Version is" => p.set_name(&name, "ata_version/string", "ATA Version"),
        // old, absent from smartctl 7.2
        "ATA Standard is" => p.set_name(&name, "ata_version/string", "ATA Standard"),
        "SATA Version is" => p.set_name(&name, "sata_version/string", "SATA Version"),
        "Local Time is" => p.set_name(&name, "local_time/asctime", "Scanned on"),
        "SMART support is" => {
            // two different properties carry this name: supported and enabled.
            // Don't match complete messages, they change across versions.
            text_value = false;
            if value.contains("Available - device has") {
                p.set_name(&name, "smart_support/available", "SMART Supported");
                p.value = PropertyValue::Bool(true);
            } else if value.contains("Enabled") {
                p.set_name(&name, "smart_support/enabled", "SMART Enabled");
                p.value = PropertyValue::Bool(true);
            } else if value.contains("Disabled") {
                p.set_name(&name, "smart_support/enabled", "SMART Enabled");
                p.value = PropertyValue::Bool(false);
            } else if value.contains("Unavailable") {
                p.set_name(&name, "smart_support/available", "SMART Supported");
                p.value = PropertyValue::Bool(false);
            } else if value.contains("Ambiguous") {
                // smartctl usually retries with other methods and prints one
                // of the above, so optimism is cheap here
                p.set_name(&name, "smart_support/available", "SMART Supported");
                p.value = PropertyValue::Bool(true);
            } else {
                text_value = true;
            }
        }
        // "--get=all" output
        "AAM feature is" => p.set_name(&name, "ata_aam/enabled", "AAM Feature"),
        "AAM level is" => p.set_name(&name, "ata_aam/level", "AAM Level"),
        "APM feature is" => p.set_name(&name, "ata_apm/enabled", "APM Feature"),
        "APM level is" => p.set_name(&name, "ata_apm/level", "APM Level"),
        "Rd look-ahead is" => p.set_name(&name, "read_lookahead/enabled", "Read Look-Ahead"),
        "Write cache is" => p.set_name(&name, "write_cache/enabled", "Write Cache"),
        "Wt Cache Reorder" => {
            p.set_name(&name, "_text_only/write_cache_reorder", "Write Cache Reorder");
        }
        "DSN feature is" => p.set_name(&name, "ata_dsn/enabled", "DSN Feature"),
        "Power mode was" | "Power mode is" => {
            p.set_name(&name, "_text_only/power_mode", "Power Mode");
        }
        "ATA Security is" => p.set_name(&name, "ata_security/string", "ATA Security"),
        other => {
            if other.starts_with("scsiMode") {
                // debug output from smartctl on usb flash drives
                p.show_in_ui = false;
            } else {
                // not an error, may just be a new smartctl feature
                log::debug!("Unknown info property \"{other}\"");
            }
        }
    }

    if text_value {
        p.value = PropertyValue::Text(value);
    }
    Ok(())
}

/// Parse the Information section body
pub(super) fn parse_info(parser: &mut Parser, body: &str) -> Result<(), ParserError> {
    let mut warning_lines: Vec<String> = Vec::new();
    let mut in_warning = false;

    for line in body.lines() {
        let line = line.trim();

        // "==> WARNING:" blocks span following non-empty lines, e.g. firmware
        // update notices for some Seagate drives
        if in_warning {
            if line.is_empty() {
                in_warning = false;
                let mut p = Property::new(Section::Info);
                p.set_name("Warning", "_text_only/info_warning", "Warning");
                p.reported_value = warning_lines.join("\n");
                p.value = PropertyValue::Text(p.reported_value.clone());
                parser.add(p);
                warning_lines.clear();
            } else {
                warning_lines.push(line.to_owned());
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if let Some(rest) = line.strip_prefix("==> WARNING:") {
            warning_lines.push(rest.trim().to_owned());
            in_warning = true;
            continue;
        }
        if RE_INFO_SKIP.is_match(line) {
            continue;
        }

        if let Some(captures) = RE_INFO_LINE.captures(line) {
            let name = captures.get(1).map_or("", |m| m.as_str()).trim();
            let value = captures.get(2).map_or("", |m| m.as_str()).trim();

            let mut p = Property::new(Section::Info);
            p.set_name(name, "", "");
            p.reported_value = value.to_owned();
            classify_info_property(&mut p)?;
            parser.add(p);
        } else {
            log::debug!("Unknown info line: {line}");
        }
    }

    // an unterminated warning block runs to the end of the section
    if in_warning {
        let mut p = Property::new(Section::Info);
        p.set_name("Warning", "_text_only/info_warning", "Warning");
        p.reported_value = warning_lines.join("\n");
        p.value = PropertyValue::Text(p.reported_value.clone());
        parser.add(p);
    }

    Ok(())
}

/// Parse the overall-health subsection (a single line)
pub(super) fn parse_health(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    let Some(captures) = RE_HEALTH_LINE.captures(sub) else {
        return Err(ParserError::DataError("Empty health subsection.".to_owned()));
    };
    let name = captures.get(1).map_or("", |m| m.as_str()).trim();
    let value = captures.get(2).map_or("", |m| m.as_str()).trim();

    if name.contains("SMART overall-health self-assessment") {
        let mut p = Property::new(Section::Health);
        p.set_name(name, "smart_status/passed", "Overall Health Self-Assessment Test");
        p.reported_value = value.to_owned();
        p.value = PropertyValue::Bool(value == "PASSED");
        parser.add(p);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse an info body and return the properties
    fn parse_body(body: &str) -> Vec<Property> {
        let mut parser = Parser::default();
        parse_info(&mut parser, body).unwrap();
        parser.properties
    }

    /// Find a property by generic name
    fn find<'a>(props: &'a [Property], generic: &str) -> &'a Property {
        props
            .iter()
            .find(|p| p.generic_name == generic)
            .unwrap_or_else(|| panic!("missing {generic}"))
    }

    #[test]
    fn common_keys() {
        let props = parse_body(
            "Model Family:     Seagate Barracuda 7200.10\n\
             Device Model:     ST3500630AS\n\
             Serial Number:    9QG0R38D\n\
             LU WWN Device Id: 5 000c50 0a1b2c3d4\n\
             Firmware Version: 3.AAK\n\
             Sector Sizes:     512 bytes logical, 4096 bytes physical\n\
             Form Factor:      3.5 inches\n\
             ATA Version is:   ATA/ATAPI-7 (minor revision not indicated)\n\
             SATA Version is:  SATA 2.5, 3.0 Gb/s\n\
             Local Time is:    Tue Aug 29 12:00:00 2017 CEST\n",
        );
        assert_eq!(find(&props, "model_family").reported_value, "Seagate Barracuda 7200.10");
        assert_eq!(find(&props, "model_name").reported_value, "ST3500630AS");
        assert_eq!(find(&props, "serial_number").reported_value, "9QG0R38D");
        assert_eq!(find(&props, "wwn/_merged").reported_value, "5 000c50 0a1b2c3d4");
        assert_eq!(find(&props, "firmware_version").reported_value, "3.AAK");
        assert_eq!(
            find(&props, "physical_block_size/_and/logical_block_size").reported_value,
            "512 bytes logical, 4096 bytes physical"
        );
        assert_eq!(find(&props, "form_factor/name").reported_value, "3.5 inches");
        assert_eq!(find(&props, "local_time/asctime").displayable_name, "Scanned on");
    }

    #[test]
    fn capacity_with_separators() {
        let props = parse_body("User Capacity:    1'000'204'886'016 bytes [1.00 TB]\n");
        let capacity = find(&props, "user_capacity/bytes");
        assert!(matches!(capacity.value, PropertyValue::Integer(1_000_204_886_016)));
        assert_eq!(
            capacity.readable_value,
            "1.00 TB [931.51 GiB, 1000204886016 bytes]"
        );
    }

    #[test]
    fn unparsable_capacity() {
        let props = parse_body("User Capacity:    n/a\n");
        let capacity = find(&props, "user_capacity/bytes");
        assert_eq!(capacity.readable_value, "[unknown]");
        assert!(matches!(capacity.value, PropertyValue::Empty));
    }

    #[test]
    fn rotation_rate_integer() {
        let props = parse_body("Rotation Rate:    7200 rpm\n");
        assert!(matches!(
            find(&props, "rotation_rate").value,
            PropertyValue::Integer(7200)
        ));
    }

    #[test]
    fn smartctl_database_membership() {
        let props = parse_body("Device is:        In smartctl database [for details use: -P show]\n");
        assert_eq!(find(&props, "in_smartctl_database").as_bool(), Some(true));

        let props = parse_body("Device is:        Not in smartctl database [for details use: -P showall]\n");
        assert_eq!(find(&props, "in_smartctl_database").as_bool(), Some(false));
    }

    #[test]
    fn smart_support_states() {
        let props = parse_body(
            "SMART support is: Available - device has SMART capability.\n\
             SMART support is: Enabled\n",
        );
        assert_eq!(find(&props, "smart_support/available").as_bool(), Some(true));
        assert_eq!(find(&props, "smart_support/enabled").as_bool(), Some(true));

        let props = parse_body("SMART support is: Disabled\n");
        assert_eq!(find(&props, "smart_support/enabled").as_bool(), Some(false));

        let props = parse_body("SMART support is: Unavailable - device lacks SMART capability.\n");
        assert_eq!(find(&props, "smart_support/available").as_bool(), Some(false));

        let props = parse_body("SMART support is: Ambiguous - ATA IDENTIFY DEVICE words 82-83 don't show if SMART supported.\n");
        assert_eq!(find(&props, "smart_support/available").as_bool(), Some(true));
    }

    #[test]
    fn warning_block() {
        let props = parse_body(
            "Device Model:     ST3500630AS\n\
             \n\
             ==> WARNING: A firmware update for this drive may be available,\n\
             see the following Seagate web pages:\n\
             http://knowledge.seagate.com/articles/en_US/FAQ/207931en\n\
             \n\
             Serial Number:    9QG0R38D\n",
        );
        let warning = find(&props, "_text_only/info_warning");
        assert!(warning.reported_value.starts_with("A firmware update"));
        assert!(warning.reported_value.contains("207931en"));
        assert_eq!(find(&props, "serial_number").reported_value, "9QG0R38D");
    }

    #[test]
    fn noise_is_skipped() {
        let props = parse_body(
            "Read SMART Data failed: Input/output error\n\
             scsiModePageOffset: response length too short, resp_len=4 offset=4 bd_len=0\n\
             Device Model:     Flash Disk\n",
        );
        assert_eq!(props.len(), 1);
        assert_eq!(props.first().unwrap().generic_name, "model_name");
    }

    #[test]
    fn unknown_key_is_plain_text() {
        let props = parse_body("Frobnication Level: 9000\n");
        let p = props.first().unwrap();
        assert!(p.generic_name.is_empty());
        assert_eq!(p.reported_name, "Frobnication Level");
        assert!(matches!(p.value, PropertyValue::Text(_)));
        assert_eq!(p.warning_level, crate::property::WarningLevel::None);
    }

    #[test]
    fn health_passed() {
        let mut parser = Parser::default();
        parse_health(
            &mut parser,
            "SMART overall-health self-assessment test result: PASSED\n",
        )
        .unwrap();
        let p = parser.properties.first().unwrap();
        assert_eq!(p.generic_name, "smart_status/passed");
        assert_eq!(p.as_bool(), Some(true));

        let mut parser = Parser::default();
        parse_health(
            &mut parser,
            "SMART overall-health self-assessment test result: FAILED!\n",
        )
        .unwrap();
        assert_eq!(parser.properties.first().unwrap().as_bool(), Some(false));
    }

    #[test]
    fn empty_health_is_a_data_error() {
        let mut parser = Parser::default();
        assert!(matches!(
            parse_health(&mut parser, ""),
            Err(ParserError::DataError(_))
        ));
    }
}
