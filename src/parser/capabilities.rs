//! General SMART Values (capabilities) section parsing

use std::sync::LazyLock;

use regex::Regex;

use super::{Parser, ParserError, compile};
use crate::{
    property::{
        CapabilityEntry, Property, PropertyValue, Section, SelftestEntry, SelftestStatus,
    },
    units,
};

/// Capability block grammar: "name: (numvalue) descriptive text"
static RE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?s)^([^:]*):\s*\(([^)]+)\)\s*(.*)$"));

/// Stale newline before the final period, pre-5.39 smartctl bug
static RE_VENDOR_STATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)(is in a Vendor Specific state)\n\.$"));
/// Same, for the reserved state spelling
static RE_RESERVED_STATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)(is in a Reserved state)\n\.$"));

// Smartctl gradually changed "Off-line" to "Offline" and some capitalization,
// so the fact matchers are caseless and accept both spellings.

/// "Offline data collection activity was completed without error." etc.
static RE_ODC_STATUS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(Off-?line data collection) activity (?:is|was) (.*)$"));
/// "Auto Offline Data Collection: Enabled."
static RE_ODC_ENABLED: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(Auto Off-?line Data Collection):[ \t]*(.*)$"));
/// "SMART execute Offline immediate."
static RE_ODC_IMMEDIATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(SMART execute Off-?line immediate)$"));
/// "No Auto Offline data collection support." / "Auto Offline data collection on/off support."
static RE_ODC_AUTO: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(No |)(Auto Off-?line data collection (?:on/off )?support)$"));
/// Same, smartctl <= 5.1-18 spelling
static RE_ODC_AUTO_OLD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(No |)(Automatic timer ON/OFF support)$"));
/// "Suspend Offline collection upon new command." / "Abort ..."
static RE_ODC_SUSPEND: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(Suspend|Abort) (Off-?line collection upon new command)$"));
/// "Offline surface scan supported."
static RE_ODC_SURFACE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(No |)(Off-?line surface scan supported)$"));
/// "Self-test supported."
static RE_SELFTEST_SUPPORT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(No |)(Self-test supported)$"));
/// "Conveyance Self-test supported."
static RE_CONVEYANCE_SUPPORT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(No |)(Conveyance Self-test supported)$"));
/// "Selective Self-test supported."
static RE_SELECTIVE_SUPPORT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(No |)(Selective Self-test supported)$"));
/// "SCT Status supported."
static RE_SCT_STATUS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(SCT Status supported)$"));
/// "SCT Feature Control supported." (logging interval is changeable)
static RE_SCT_CONTROL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(SCT Feature Control supported)$"));
/// "SCT Data Table supported."
static RE_SCT_DATA: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(SCT Data Table supported)$"));

/// Group headings matched by block name, with their stable names
static GROUP_NAMES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"(?i)^Off-?line data collection status",
            "ata_smart_data/offline_data_collection/status/_group",
        ),
        (
            r"(?i)^Off-?line data collection capabilities",
            "ata_smart_data/offline_data_collection/_group",
        ),
        (r"(?i)^SMART capabilities", "ata_smart_data/capabilities/_group"),
        (
            r"(?i)^Error logging capability",
            "ata_smart_data/capabilities/error_logging_supported/_group",
        ),
        (r"(?i)^SCT capabilities", "ata_sct_capabilities/_group"),
        (
            r"(?i)^Self-test execution status",
            "ata_smart_data/self_test/status/_group",
        ),
    ]
    .into_iter()
    .map(|(pattern, generic)| (compile(pattern), generic))
    .collect()
});

/// Time length headings matched by block name, with their stable names
static TIME_NAMES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"(?i)^Total time to complete Off-?line data collection",
            "ata_smart_data/offline_data_collection/completion_seconds",
        ),
        (
            r"(?i)^Short self-test routine recommended polling time",
            "ata_smart_data/self_test/polling_minutes/short",
        ),
        (
            r"(?i)^Extended self-test routine recommended polling time",
            "ata_smart_data/self_test/polling_minutes/extended",
        ),
        (
            r"(?i)^Conveyance self-test routine recommended polling time",
            "ata_smart_data/self_test/polling_minutes/conveyance",
        ),
    ]
    .into_iter()
    .map(|(pattern, generic)| (compile(pattern), generic))
    .collect()
});

/// Last self-test status sentences, decoded into [`SelftestStatus`]
static SELFTEST_STATUS_SENTENCES: LazyLock<Vec<(Regex, SelftestStatus)>> = LazyLock::new(|| {
    [
        (
            r"(?mi)^(The previous self-test routine completed without error or no .*)",
            SelftestStatus::CompletedNoError,
        ),
        (
            r"(?mi)^(The self-test routine was aborted by the host)",
            SelftestStatus::AbortedByHost,
        ),
        (
            r"(?mi)^(The self-test routine was interrupted by the host with a hard.*)",
            SelftestStatus::Interrupted,
        ),
        (
            r"(?mi)^(A fatal error or unknown test error occurred while the device was executing its .*)",
            SelftestStatus::FatalOrUnknown,
        ),
        (
            r"(?mi)^(The previous self-test completed having a test element that failed and the test element that failed is not known)",
            SelftestStatus::ComplUnknownFailure,
        ),
        (
            r"(?mi)^(The previous self-test completed having the electrical element of the test failed)",
            SelftestStatus::ComplElectricalFailure,
        ),
        (
            r"(?mi)^(The previous self-test completed having the servo .*)",
            SelftestStatus::ComplServoFailure,
        ),
        (
            r"(?mi)^(The previous self-test completed having the read element of the test failed)",
            SelftestStatus::ComplReadFailure,
        ),
        (
            r"(?mi)^(The previous self-test completed having a test element that failed and the device is suspected of having handling damage)",
            SelftestStatus::ComplHandlingDamage,
        ),
        // samsung quirk, as per smartctl sources
        (
            r"(?mi)^(The previous self-test routine completed with unknown result or self-test .*)",
            SelftestStatus::ComplUnknownFailure,
        ),
        (
            r"(?mi)^(Self-test routine in progress)",
            SelftestStatus::InProgress,
        ),
        (r"(?mi)^(Reserved)", SelftestStatus::Reserved),
    ]
    .into_iter()
    .map(|(pattern, status)| (compile(pattern), status))
    .collect()
});

/// "NN% of test remaining"
static RE_REMAINING: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^([0-9]+)% of test remaining"));

/// Replace tabs and newlines with spaces, collapse runs, trim
fn flatten(text: &str) -> String {
    text.replace(['\t', '\n'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build multi-line blocks out of the section body. A block starts at a
/// non-whitespace line and spans indented continuations; a block whose first
/// line carries no ':' continues across further name lines until one does.
fn build_blocks(text: &str) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    let mut partial = false;
    for line in text.lines() {
        if line.is_empty() || line.contains("General SMART Values") {
            continue;
        }
        let starts_block = !line.starts_with([' ', '\t']) && !partial;
        if starts_block {
            blocks.push(line.to_owned());
            partial = !line.contains(':');
            continue;
        }
        if partial && line.contains(':') {
            partial = false;
        }
        if let Some(last) = blocks.last_mut() {
            last.push('\n');
            last.push_str(line);
        } else {
            log::error!("Capability continuation line without a block: {line}");
            blocks.push(line.to_owned());
        }
    }
    blocks
}

/// Parse the General SMART Values section
pub(super) fn parse_capabilities(parser: &mut Parser, sub: &str) -> Result<(), ParserError> {
    let mut sub = RE_VENDOR_STATE.replace_all(sub, "$1.").into_owned();
    sub = RE_RESERVED_STATE.replace_all(&sub, "$1.").into_owned();

    let mut cap_found = false;

    for block in build_blocks(&sub) {
        let block = block.trim();
        let Some(captures) = RE_BLOCK.captures(block) else {
            log::warn!("Unparsable capability block:\n{block}");
            continue;
        };
        let name = flatten(captures.get(1).map_or("", |m| m.as_str()));
        let numvalue_orig = captures.get(2).map_or("", |m| m.as_str());
        let strvalue_orig = captures.get(3).map_or("", |m| m.as_str());
        let strvalue = flatten(strvalue_orig);

        let numvalue = units::leading_int(numvalue_orig.trim()).unwrap_or_else(|| {
            log::warn!("Unparsable capability numeric value: \"{numvalue_orig}\"");
            -1
        });

        let mut p = Property::new(Section::Capabilities);
        p.set_name(&name, "", "");
        p.reported_value = format!("{numvalue_orig} | {strvalue_orig}");

        let unit = strvalue.trim_end_matches('.');
        if unit == "minutes" || unit == "seconds" {
            let seconds = if unit == "minutes" {
                numvalue * 60
            } else {
                numvalue
            };
            p.value = PropertyValue::Seconds(seconds);
            if let Some((_, generic)) = TIME_NAMES.iter().find(|(re, _)| re.is_match(&name)) {
                p.generic_name = (*generic).to_owned();
            }
            parser.add(p);
            cap_found = true;
            continue;
        }

        let entry = CapabilityEntry {
            flag_value: u16::try_from(numvalue).unwrap_or(0),
            reported_flag_value: numvalue_orig.trim().to_owned(),
            reported_strvalue: strvalue_orig.to_owned(),
            lines: strvalue
                .split('.')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
        };
        p.value = PropertyValue::Capability(entry.clone());

        if let Some((_, generic)) = GROUP_NAMES.iter().find(|(re, _)| re.is_match(&name)) {
            p.generic_name = (*generic).to_owned();
        }

        if p.generic_name == "ata_smart_data/self_test/status/_group" {
            add_last_selftest_status(parser, &entry);
        } else {
            add_subcapabilities(parser, &entry);
        }

        parser.add(p);
        cap_found = true;
    }

    if cap_found {
        Ok(())
    } else {
        Err(ParserError::DataError(
            "No capabilities found in Capabilities section.".to_owned(),
        ))
    }
}

/// Destructure the last self-test status group into a self-test entry
fn add_last_selftest_status(parser: &mut Parser, entry: &CapabilityEntry) {
    let mut sse = SelftestEntry {
        remaining_percent: -1,
        ..SelftestEntry::default()
    };

    for line in &entry.lines {
        if let Some(captures) = RE_REMAINING.captures(line) {
            if let Some(percent) = captures.get(1).and_then(|m| m.as_str().parse().ok()) {
                sse.remaining_percent = percent;
            }
            continue;
        }
        if let Some((re, status)) = SELFTEST_STATUS_SENTENCES
            .iter()
            .find(|(re, _)| re.is_match(line))
        {
            sse.status = *status;
            sse.status_str = re
                .captures(line)
                .and_then(|c| c.get(1))
                .map_or_else(|| line.clone(), |m| m.as_str().to_owned());
        }
    }

    let mut p = Property::new(Section::Capabilities);
    p.set_name(
        "Last self-test status",
        "ata_smart_data/self_test/status/_merged",
        "",
    );
    p.value = PropertyValue::Selftest(sse);
    parser.add(p);
}

/// Extract boolean/string subcapability properties out of the one-sentence
/// facts of a capability group
#[expect(clippy::too_many_lines)]
fn add_subcapabilities(parser: &mut Parser, entry: &CapabilityEntry) {
    for line in &entry.lines {
        let mut p = Property::new(Section::Capabilities);

        if let Some(c) = RE_ODC_STATUS.captures(line) {
            let name = c.get(1).map_or("", |m| m.as_str());
            let status = c.get(2).map_or("", |m| m.as_str()).trim();
            p.set_name(name, "ata_smart_data/offline_data_collection/status/string", "");
            p.value = PropertyValue::Text(status.to_owned());
        } else if let Some(c) = RE_ODC_ENABLED.captures(line) {
            let name = c.get(1).map_or("", |m| m.as_str());
            let status = c.get(2).map_or("", |m| m.as_str()).trim();
            p.set_name(
                name,
                "ata_smart_data/offline_data_collection/status/value/_parsed",
                "",
            );
            p.value = PropertyValue::Bool(status == "Enabled");
        } else if let Some(c) = RE_ODC_IMMEDIATE.captures(line) {
            p.set_name(
                c.get(1).map_or("", |m| m.as_str()),
                "ata_smart_data/capabilities/exec_offline_immediate_supported",
                "",
            );
            p.value = PropertyValue::Bool(true);
        } else if let Some(c) = RE_ODC_AUTO
            .captures(line)
            .or_else(|| RE_ODC_AUTO_OLD.captures(line))
        {
            let negation = c.get(1).map_or("", |m| m.as_str());
            p.set_name(
                c.get(2).map_or("", |m| m.as_str()),
                "_text_only/aodc_support",
                "Automatic Offline Data Collection toggle support",
            );
            p.value = PropertyValue::Bool(negation.trim() != "No");
        } else if let Some(c) = RE_ODC_SUSPEND.captures(line) {
            let verb = c.get(1).map_or("", |m| m.as_str());
            p.set_name(
                c.get(2).map_or("", |m| m.as_str()),
                "ata_smart_data/capabilities/offline_is_aborted_upon_new_cmd",
                "Offline Data Collection suspends upon new command",
            );
            p.value = PropertyValue::Bool(verb == "Suspend");
        } else if let Some(c) = RE_ODC_SURFACE.captures(line) {
            let negation = c.get(1).map_or("", |m| m.as_str());
            p.set_name(
                c.get(2).map_or("", |m| m.as_str()),
                "ata_smart_data/capabilities/offline_surface_scan_supported",
                "",
            );
            p.value = PropertyValue::Bool(negation.trim() != "No");
        } else if let Some(c) = RE_SELFTEST_SUPPORT.captures(line) {
            let negation = c.get(1).map_or("", |m| m.as_str());
            p.set_name(
                c.get(2).map_or("", |m| m.as_str()),
                "ata_smart_data/capabilities/self_tests_supported",
                "",
            );
            p.value = PropertyValue::Bool(negation.trim() != "No");
        } else if let Some(c) = RE_CONVEYANCE_SUPPORT.captures(line) {
            let negation = c.get(1).map_or("", |m| m.as_str());
            p.set_name(
                c.get(2).map_or("", |m| m.as_str()),
                "ata_smart_data/capabilities/conveyance_self_test_supported",
                "",
            );
            p.value = PropertyValue::Bool(negation.trim() != "No");
        } else if let Some(c) = RE_SELECTIVE_SUPPORT.captures(line) {
            let negation = c.get(1).map_or("", |m| m.as_str());
            p.set_name(
                c.get(2).map_or("", |m| m.as_str()),
                "ata_smart_data/capabilities/selective_self_test_supported",
                "",
            );
            p.value = PropertyValue::Bool(negation.trim() != "No");
        } else if let Some(c) = RE_SCT_STATUS.captures(line) {
            p.set_name(
                c.get(1).map_or("", |m| m.as_str()),
                "ata_sct_capabilities/value/_present",
                "",
            );
            p.value = PropertyValue::Bool(true);
        } else if let Some(c) = RE_SCT_CONTROL.captures(line) {
            p.set_name(
                c.get(1).map_or("", |m| m.as_str()),
                "ata_sct_capabilities/feature_control_supported",
                "",
            );
            p.value = PropertyValue::Bool(true);
        } else if let Some(c) = RE_SCT_DATA.captures(line) {
            p.set_name(
                c.get(1).map_or("", |m| m.as_str()),
                "ata_sct_capabilities/data_table_supported",
                "",
            );
            p.value = PropertyValue::Bool(true);
        } else {
            continue;
        }

        parser.add(p);
    }
}
