//! Error log, self-test log and auxiliary log subsection parsing
//!
//! Each of these follows the same pattern: a merged whole-text property for
//! the UI, presence/absence flags, counts and versions, and per-row entries
//! where the format is stable enough to destructure.

use std::sync::LazyLock;

use regex::Regex;

use super::{Parser, ParserError, compile};
use crate::{
    property::{
        ErrorBlockEntry, Property, PropertyValue, Section, SelftestEntry, SelftestStatus,
    },
    units,
};

/// Error log version line, standard and extended
static RE_ERROR_LOG_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?mi)^(SMART (?:Extended Comprehensive )?Error Log Version): ([0-9]+)")
});

/// Error log unsupported markers
static RE_ERROR_LOG_UNSUPPORTED: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?mi)^(Warning: device does not support Error Logging|SMART Error Log not supported)$")
});

/// "ATA Error Count: 2" / "Device Error Count: 2"
static RE_ERROR_COUNT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(?:ATA|Device) Error Count:[ \t]*([0-9]+)"));

/// "No Errors Logged"
static RE_NO_ERRORS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?mi)^No Errors Logged$"));

/// One error block: the "Error N occurred at ..." line plus its indented body
static RE_ERROR_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?mi)^((Error[ \t]*([0-9]+))[ \t]*(?:\[[0-9]+\][ \t])?occurred at disk power-on lifetime:[ \t]*([0-9]+) hours[^\n]*(?:\n(?:  |\n  )[^\n]*)*)",
    )
});

/// Device state sentence inside an error block
static RE_ERROR_STATE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)occurred, the device was[ \t]*(?: in)?(?: an?)?[ \t]+([^.\n]*)\.?")
});

/// Error type tokens on the registers line, e.g. "Error: UNC at LBA = ..."
static RE_ERROR_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?mi)[ \t]+Error:[ \t]*([ ,a-z0-9]+?)(?:[ \t]+((?:[0-9]+|at )[ \t]*[^\n]*))?$")
});

/// Self-test log version lines, three generations of them
static RE_SELFTEST_VERSION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?mi)^(SMART Self-test log structure[^\n0-9]*)([^ \n]+)[ \t]*$",
        r"(?mi)^(SMART Extended Self-test Log Version): ([0-9]+)",
        // pre 5.1-16
        r"(?mi)^(SMART Self-test log, version number[^\n0-9]*)([^ \n]+)[ \t]*$",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Self-test log unsupported markers
static RE_SELFTEST_UNSUPPORTED: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?mi)^(Warning: device does not support Self Test Logging|SMART Self-test Log not supported)$",
    )
});

/// One self-test log row:
/// "# 1  Extended offline    Completed without error       00%     43116         -"
static RE_SELFTEST_ROW: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?mi)^(#[ \t]*([0-9]+)[ \t]+(\S+(?: \S+)*)  [ \t]*(\S.*) [ \t]*([0-9]+)%  [ \t]*([0-9]+)[ \t]*((?:  [ \t]*\S.*?)?))[ \t]*$",
    )
});

/// Self-test status phrases, matched against the start of the status column
static SELFTEST_ROW_STATUSES: LazyLock<Vec<(Regex, SelftestStatus)>> = LazyLock::new(|| {
    [
        (r"(?i)^Completed without error", SelftestStatus::CompletedNoError),
        (r"(?i)^Aborted by host", SelftestStatus::AbortedByHost),
        (r"(?i)^Interrupted \(host reset\)", SelftestStatus::Interrupted),
        (r"(?i)^Fatal or unknown error", SelftestStatus::FatalOrUnknown),
        (r"(?i)^Completed: unknown failure", SelftestStatus::ComplUnknownFailure),
        (r"(?i)^Completed: electrical failure", SelftestStatus::ComplElectricalFailure),
        (r"(?i)^Completed: servo/seek failure", SelftestStatus::ComplServoFailure),
        (r"(?i)^Completed: read failure", SelftestStatus::ComplReadFailure),
        (r"(?i)^Completed: handling damage", SelftestStatus::ComplHandlingDamage),
        (r"(?i)^Self-test routine in progress", SelftestStatus::InProgress),
        (r"(?i)^Unknown/reserved test status", SelftestStatus::Reserved),
    ]
    .into_iter()
    .map(|(pattern, status)| (compile(pattern), status))
    .collect()
});

/// "Current Temperature:                    39 Celsius"
static RE_SCT_CURRENT_TEMP: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(Current Temperature):[ \t]+(.*) Celsius$"));

/// Add the merged whole-subsection property every log section carries
fn add_merged(parser: &mut Parser, section: Section, name: &str, generic: &str, sub: &str) {
    let mut p = Property::new(section);
    p.set_name(name, generic, "");
    p.reported_value = sub.to_owned();
    p.value = PropertyValue::Text(sub.to_owned());
    parser.add(p);
}

/// Parse the GP/SMART log directory subsection
pub(super) fn parse_directory_log(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    add_merged(
        parser,
        Section::DirectoryLog,
        "General Purpose Log Directory",
        "ata_log_directory/_merged",
        sub,
    );

    let mut p = Property::new(Section::DirectoryLog);
    p.set_name(
        "General Purpose Log Directory supported",
        "_text_only/directory_log_supported",
        "",
    );
    p.value = PropertyValue::Bool(!sub.contains("General Purpose Log Directory not supported"));
    parser.add(p);

    Ok(())
}

/// Parse the ATA error log subsection (standard or extended comprehensive).
/// The per-command register dumps are kept only inside the merged text.
pub(super) fn parse_error_log(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    let mut data_found = false;

    if let Some(captures) = RE_ERROR_LOG_VERSION.captures(sub) {
        let mut p = Property::new(Section::ErrorLog);
        // extended logs get "extended" in the path, standard ones share it
        p.set_name(
            captures.get(1).map_or("", |m| m.as_str()).trim(),
            "ata_smart_error_log/extended/revision",
            "",
        );
        p.reported_value = captures.get(2).map_or("", |m| m.as_str()).trim().to_owned();
        p.value = PropertyValue::Integer(units::leading_int(&p.reported_value).unwrap_or(0));
        parser.add(p);
        data_found = true;
    }

    if RE_ERROR_LOG_UNSUPPORTED.is_match(sub) {
        let mut p = Property::new(Section::ErrorLog);
        p.set_name(
            "Error logging unsupported",
            "_text_only/ata_smart_error_log/_not_present",
            "Warning",
        );
        p.readable_value = "Device does not support error logging".to_owned();
        parser.add(p);
        data_found = true;
    }

    let count_match = RE_ERROR_COUNT.captures(sub);
    if count_match.is_some() || RE_NO_ERRORS.is_match(sub) {
        let mut p = Property::new(Section::ErrorLog);
        p.set_name("ATA Error Count", "ata_smart_error_log/extended/count", "");
        let count = count_match
            .and_then(|c| c.get(1).map(|m| m.as_str().to_owned()))
            .unwrap_or_default();
        p.reported_value.clone_from(&count);
        p.value = PropertyValue::Integer(units::leading_int(&count).unwrap_or(0));
        parser.add(p);
        data_found = true;
    }

    for captures in RE_ERROR_BLOCK.captures_iter(sub) {
        let block = captures.get(1).map_or("", |m| m.as_str()).trim();
        let name = captures.get(2).map_or("", |m| m.as_str()).trim();
        let error_num = captures.get(3).map_or("", |m| m.as_str()).trim();
        let hours = captures.get(4).map_or("", |m| m.as_str()).trim();

        let state = RE_ERROR_STATE
            .captures(block)
            .and_then(|c| c.get(1))
            .map_or("", |m| m.as_str())
            .trim()
            .to_owned();
        let (types, more_info) = RE_ERROR_TYPE.captures(block).map_or_else(
            || (String::new(), String::new()),
            |c| {
                (
                    c.get(1).map_or("", |m| m.as_str()).trim().to_owned(),
                    c.get(2).map_or("", |m| m.as_str()).trim().to_owned(),
                )
            },
        );

        let entry = ErrorBlockEntry {
            error_num: error_num.parse().unwrap_or(0),
            lifetime_hours: hours.parse().unwrap_or(0),
            device_state: state,
            reported_types: types
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            type_more_info: more_info,
        };

        // the "Error <n>" name doubles as a UI scroll mark into the merged text
        let mut p = Property::new(Section::ErrorLog);
        p.set_name(name, "", "");
        p.reported_value = block.to_owned();
        p.value = PropertyValue::ErrorBlock(entry);
        parser.add(p);
        data_found = true;
    }

    add_merged(
        parser,
        Section::ErrorLog,
        "SMART Error Log",
        "ata_smart_error_log/_merged",
        sub,
    );

    if data_found {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No error log entries found in Error Log section.".to_owned(),
        ))
    }
}

/// Parse the self-test log subsection (standard or extended)
pub(super) fn parse_selftest_log(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    let mut data_found = false;

    add_merged(
        parser,
        Section::SelftestLog,
        "SMART Self-Test Log",
        "ata_smart_self_test_log/_merged",
        sub,
    );

    if RE_SELFTEST_UNSUPPORTED.is_match(sub) {
        let mut p = Property::new(Section::SelftestLog);
        p.set_name(
            "Self-test logging unsupported",
            "_text_only/ata_smart_self_test_log/_not_present",
            "Warning",
        );
        p.readable_value = "Device does not support self-test logging".to_owned();
        parser.add(p);
        data_found = true;
    }

    if let Some(captures) = RE_SELFTEST_VERSION.iter().find_map(|re| re.captures(sub)) {
        let mut p = Property::new(Section::SelftestLog);
        p.set_name(
            captures.get(1).map_or("", |m| m.as_str()).trim(),
            "ata_smart_self_test_log/extended/revision",
            "",
        );
        p.reported_value = captures.get(2).map_or("", |m| m.as_str()).trim().to_owned();
        p.value = PropertyValue::Integer(units::leading_int(&p.reported_value).unwrap_or(0));
        parser.add(p);
        data_found = true;
    }

    let mut test_count = 0_i64;
    for captures in RE_SELFTEST_ROW.captures_iter(sub) {
        let group = |i: usize| captures.get(i).map_or("", |m| m.as_str()).trim();
        let status_str = group(4).to_owned();
        let status = SELFTEST_ROW_STATUSES
            .iter()
            // some phrases are truncated by the column width, match the start only
            .find(|(re, _)| re.is_match(&status_str))
            .map_or(SelftestStatus::Unknown, |(_, status)| *status);

        let mut lba = group(7).to_owned();
        if lba.is_empty() {
            // old smartctl printed nothing instead of "-"
            lba = "-".to_owned();
        }

        let entry = SelftestEntry {
            test_num: group(2).parse().unwrap_or(0),
            test_type: group(3).to_owned(),
            status,
            status_str,
            remaining_percent: group(5).parse().unwrap_or(-1),
            lifetime_hours: group(6).parse().unwrap_or(0),
            lba_of_first_error: lba,
        };

        let mut p = Property::new(Section::SelftestLog);
        p.set_name(&format!("Self-test entry {}", entry.test_num), "", "");
        p.reported_value = group(1).to_owned();
        p.value = PropertyValue::Selftest(entry);
        parser.add(p);
        data_found = true;
        test_count += 1;
    }

    // "No self-tests have been logged" is sometimes absent, emit the count always
    {
        let mut p = Property::new(Section::SelftestLog);
        p.set_name(
            "Number of entries in self-test log",
            "ata_smart_self_test_log/extended/table/count",
            "",
        );
        p.value = PropertyValue::Integer(test_count);
        parser.add(p);
        if test_count > 0 {
            data_found = true;
        }
    }

    if data_found {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No self-test log entries found in Self-test Log section.".to_owned(),
        ))
    }
}

/// Parse the selective self-test log subsection
pub(super) fn parse_selective_selftest_log(
    parser: &mut Parser,
    sub: &str,
) -> Result<(), ParserError> {
    add_merged(
        parser,
        Section::SelectiveSelftestLog,
        "SMART selective self-test log",
        "ata_smart_selective_self_test_log/_merged",
        sub,
    );

    let supported = !sub.contains("Device does not support Selective Self Tests/Logging");
    let mut p = Property::new(Section::SelectiveSelftestLog);
    p.set_name(
        "Selective self-tests supported",
        "ata_smart_data/capabilities/selective_self_test_supported",
        "",
    );
    p.value = PropertyValue::Bool(supported);
    parser.add(p);

    if supported {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No selective self-test log entries found in Selective Self-test Log section."
                .to_owned(),
        ))
    }
}

/// Parse the SCT status / temperature history subsection
pub(super) fn parse_sct_temperature_log(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    let mut data_found = false;

    add_merged(
        parser,
        Section::TemperatureLog,
        "SCT temperature log",
        "ata_sct_status/_and/ata_sct_temperature_history/_merged",
        sub,
    );

    let unsupported = sub.contains("SCT Commands not supported")
        || sub.contains("SCT Data Table command not supported");
    {
        let mut p = Property::new(Section::TemperatureLog);
        p.set_name(
            "SCT commands unsupported",
            "_text_only/ata_sct_status/_not_present",
            "",
        );
        p.value = PropertyValue::Bool(unsupported);
        parser.add(p);
        if unsupported {
            data_found = true;
        }
    }

    if let Some(captures) = RE_SCT_CURRENT_TEMP.captures(sub) {
        let value = captures.get(2).map_or("", |m| m.as_str()).trim();
        let mut p = Property::new(Section::TemperatureLog);
        p.set_name(
            "Current Temperature",
            "ata_sct_status/temperature/current",
            "",
        );
        p.reported_value = value.to_owned();
        p.value = PropertyValue::Integer(units::leading_int(value).unwrap_or(0));
        parser.add(p);
        data_found = true;
    }

    if data_found {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No temperature log entries found in SCT Temperature Log section.".to_owned(),
        ))
    }
}

/// Parse the SCT error recovery control subsection
pub(super) fn parse_sct_erc_log(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    add_merged(
        parser,
        Section::ErcLog,
        "SCT ERC log",
        "ata_sct_erc/_merged",
        sub,
    );

    let supported = !sub.contains("SCT Error Recovery Control command not supported");
    let mut p = Property::new(Section::ErcLog);
    p.set_name("SCT ERC supported", "ata_sct_erc/_present", "");
    p.value = PropertyValue::Bool(supported);
    parser.add(p);

    if supported {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No entries found in SCT ERC Log section.".to_owned(),
        ))
    }
}

/// Parse the SATA Phy event counters subsection
pub(super) fn parse_sata_phy_log(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    add_merged(
        parser,
        Section::PhyLog,
        "SATA Phy log",
        "sata_phy_event_counters/_merged",
        sub,
    );

    static RE_PHY_UNSUPPORTED: LazyLock<Regex> = LazyLock::new(|| {
        compile(
            r"(?mi)^(SATA Phy Event Counters \(GP Log 0x11\) not supported|SATA Phy Event Counters with [0-9-]+ sectors not supported)",
        )
    });
    let supported = !RE_PHY_UNSUPPORTED.is_match(sub);
    let mut p = Property::new(Section::PhyLog);
    p.set_name("SATA Phy log supported", "sata_phy_event_counters/_present", "");
    p.value = PropertyValue::Bool(supported);
    parser.add(p);

    if supported {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No entries found in SATA Phy Event Counters section.".to_owned(),
        ))
    }
}
