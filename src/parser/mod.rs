//! smartctl text output parser
//!
//! Turns the text emitted by `smartctl -x` (and `-a`) for ATA drives into a
//! flat list of typed [`Property`] records. The text format has no stable
//! grammar, so everything here is line- and block-oriented regex matching;
//! known noise is excised up front so section detection stays reliable.

mod attributes;
mod capabilities;
mod devstat;
mod info;
mod logs;

use std::sync::LazyLock;

use regex::Regex;

use crate::property::{Property, PropertyValue, Section};

/// Parser failure taxonomy. The first four variants are fatal to a parse;
/// the rest are accumulated as diagnostics next to partial results.
#[derive(thiserror::Error, Debug)]
pub(crate) enum ParserError {
    /// Input is empty or all whitespace
    #[error("smartctl output is empty")]
    EmptyInput,
    /// Version banner not found
    #[error("no smartctl version information found")]
    NoVersion,
    /// Version below the supported floor
    #[error("incompatible smartctl version {0}")]
    IncompatibleVersion(String),
    /// No section could be parsed
    #[error("no sections found in smartctl output")]
    NoSection,
    /// The SMART data section contained no recognizable subsection
    #[error("no recognizable subsections in the SMART data section")]
    NoSubsectionsParsed,
    /// Unknown section header, parsing continues
    #[error("unknown section: {0}")]
    UnknownSection(String),
    /// A recognized subsection contained no parseable rows
    #[error("{0}")]
    DataError(String),
    /// Invariant violation, logged and never shown to the user
    #[error("internal parser error: {0}")]
    InternalError(String),
}

/// Result of a successful parse: properties in source order, plus non-fatal
/// diagnostics for subsections that degraded to partial output
pub(crate) struct ParseOutcome {
    /// Parsed properties, in the order they were discovered
    pub properties: Vec<Property>,
    /// Non-fatal per-subsection diagnostics
    pub diagnostics: Vec<ParserError>,
}

/// Parse full `smartctl -x` output. Accepts any line ending convention.
pub(crate) fn parse(text: &str) -> Result<ParseOutcome, ParserError> {
    let mut parser = Parser::default();
    parser.run(text)?;
    Ok(ParseOutcome {
        properties: parser.properties,
        diagnostics: parser.diagnostics,
    })
}

/// Compile a pattern known to be valid
#[expect(clippy::unwrap_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Parse state: collected properties and diagnostics
#[derive(Default)]
pub(crate) struct Parser {
    /// Properties collected so far, in discovery order
    properties: Vec<Property>,
    /// Non-fatal diagnostics collected so far
    diagnostics: Vec<ParserError>,
}

/// Checksum warning lines, randomly interleaved in the output
static RE_CHECKSUM: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?mi)^Warning! SMART (.+) Structure error: invalid SMART checksum\.[ \t]*\n?")
});

/// Version banner, e.g. "smartctl 7.0 2018-12-30 r4883" or "smartctl version 5.37"
static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^smartctl (?:version )?(([0-9][^ \t\n\r]+)(?: [0-9 r:-]+)?)"));

/// Samsung translation hint, no value to us
static RE_SAMSUNG_HINT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?mi)^.*May need -F samsung or -F samsung2 enabled; see manual for details\.[ \t]*\n?")
});

/// Spurious blank line after the ATA error count warning
static RE_ERROR_COUNT_BLANK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?mi)^(Warning: ATA error count.*\n)\n"));

/// Benign warnings that must sit in their own section to not corrupt a neighbor
static RE_LONE_WARNINGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?mi)^(Warning: device does not support Error Logging)$",
        r"(?mi)^(Warning: device does not support Self Test Logging)$",
        r"(?mi)^(Device does not support Selective Self Tests/Logging)$",
        r"(?mi)^(Warning: device does not support SCT Commands)$",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Error noise that prevents subsection detection and carries no information
static RE_NOISE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?mi)^ATA_READ_LOG_EXT \([^)]+\) failed: .*$",
        r"(?mi)^(?:Error )?SMART WRITE LOG does not return COUNT and LBA_LOW register$",
        r"(?mi)^Read SCT Status failed: .*$",
        r"(?mi)^Unknown SCT Status format version .*$",
        r"(?mi)^Read SCT Data Table failed: .*$",
        r"(?mi)^Write SCT Data Table failed: .*$",
        r"(?mi)^Unexpected SCT status .*\)$",
    ]
    .into_iter()
    .map(compile)
    .collect()
});

/// Data subsection chunks that are continuations of their predecessor
static RE_CONTINUATION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(  |Error [0-9]+|SCT Temperature History Version|Index[ \t]+|Read SCT Temperature History failed)",
    )
});

/// Where a data subsection should be routed
#[derive(Clone, Copy, Debug)]
enum Route {
    /// Overall-health self-assessment
    Health,
    /// General SMART values
    Capabilities,
    /// Attribute table
    Attributes,
    /// GP/SMART log directory
    DirectoryLog,
    /// ATA error log
    ErrorLog,
    /// Self-test log
    SelftestLog,
    /// Selective self-test log
    SelectiveSelftestLog,
    /// SCT status / temperature history
    TemperatureLog,
    /// SCT error recovery control
    ErcLog,
    /// Device statistics
    Devstat,
    /// SATA Phy event counters
    PhyLog,
    /// Recognized but carrying nothing we show (xerror/xselftest fallback
    /// notices, devstat supported-pages list)
    Ignored,
}

/// Subsection classification table, checked in order against the first line
static SUBSECTION_ROUTES: LazyLock<Vec<(Regex, Route)>> = LazyLock::new(|| {
    [
        (r"(?mi)^SMART overall-health self-assessment", Route::Health),
        (r"(?mi)^General SMART Values", Route::Capabilities),
        (r"(?mi)^SMART Attributes Data Structure", Route::Attributes),
        (
            r"(?mi)^(General Purpose Log Directory Version|General Purpose Log Directory not supported|General Purpose Logging \(GPL\) feature set supported|Read GP Log Directory failed|Log Directories not read due to '-F nologdir' option|Read SMART Log Directory failed|SMART Log Directory Version)",
            Route::DirectoryLog,
        ),
        (
            r"(?mi)^(SMART Error Log Version|SMART Extended Comprehensive Error Log Version|Warning: device does not support Error Logging|SMART Error Log not supported|Read SMART Error Log failed)",
            Route::ErrorLog,
        ),
        // printed when "-l xerror,error" falls back to the standard log
        (
            r"(?mi)^(SMART Extended Comprehensive Error Log \([^)]+\) not supported|SMART Extended Comprehensive Error Log size .* not supported|Read SMART Extended Comprehensive Error Log failed)",
            Route::Ignored,
        ),
        (
            r"(?mi)^(SMART Self-test log|SMART Extended Self-test Log Version|Warning: device does not support Self Test Logging|Read SMART Self-test Log failed|SMART Self-test Log not supported)",
            Route::SelftestLog,
        ),
        // printed when "-l xselftest,selftest" falls back to the standard log
        (
            r"(?mi)^(SMART Extended Self-test Log \([^)]+\) not supported|SMART Extended Self-test Log size [0-9-]+ not supported|Read SMART Extended Self-test Log failed)",
            Route::Ignored,
        ),
        (
            r"(?mi)^(SMART Selective self-test log|Device does not support Selective Self Tests/Logging|Selective Self-tests/Logging not supported|Read SMART Selective Self-test Log failed)",
            Route::SelectiveSelftestLog,
        ),
        (
            r"(?mi)^(SCT Status Version|SCT Commands not supported|SCT Data Table command not supported|Error unknown SCT Temperature History Format Version|Another SCT command is executing, abort Read Data Table|Warning: device does not support SCT Commands)",
            Route::TemperatureLog,
        ),
        (
            r"(?mi)^(SCT Error Recovery Control|Another SCT command is executing, abort Error Recovery Control|Warning: device does not support SCT \(Get\) Error Recovery Control)",
            Route::ErcLog,
        ),
        (
            r"(?mi)^(Device Statistics \([^)]+\)$|Device Statistics \([^)]+\) not supported|Read Device Statistics page (?:.+) failed)",
            Route::Devstat,
        ),
        (
            r"(?mi)^Device Statistics \([^)]+\) supported pages",
            Route::Ignored,
        ),
        (
            r"(?mi)^(SATA Phy Event Counters|Read SATA Phy Event Counters failed)",
            Route::PhyLog,
        ),
    ]
    .into_iter()
    .map(|(pattern, route)| (compile(pattern), route))
    .collect()
});

impl Parser {
    /// Append a parsed property
    pub(super) fn add(&mut self, p: Property) {
        self.properties.push(p);
    }

    /// Record a non-fatal diagnostic
    pub(super) fn diagnose(&mut self, error: ParserError) {
        log::warn!("{error}");
        self.diagnostics.push(error);
    }

    /// Parse the whole output into properties
    fn run(&mut self, text: &str) -> Result<(), ParserError> {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return Err(ParserError::EmptyInput);
        }

        let cleaned = self.preprocess(trimmed);

        let (version, version_full) = extract_version(&cleaned).ok_or(ParserError::NoVersion)?;
        for generic in ["smartctl/version/_merged", "smartctl/version/_merged_full"] {
            let mut p = Property::new(Section::Info);
            p.set_name("Smartctl version", generic, "Smartctl Version");
            p.reported_value = if generic.ends_with("_full") {
                version_full.clone()
            } else {
                version.clone()
            };
            p.value = PropertyValue::Text(p.reported_value.clone());
            self.add(p);
        }
        if !version_supported(&version) {
            return Err(ParserError::IncompatibleVersion(version));
        }

        self.parse_sections(&cleaned)
    }

    /// Excise known noise and extract checksum warnings, so section
    /// detection operates on a predictable text. Never fails.
    fn preprocess(&mut self, text: &str) -> String {
        // checksum warnings are kind of randomly distributed, extract them
        for captures in RE_CHECKSUM.captures_iter(text) {
            let name = captures.get(1).map_or("", |m| m.as_str()).trim();
            self.add(checksum_error_property(name));
        }
        let mut s = RE_CHECKSUM.replace_all(text, "").into_owned();

        s = RE_SAMSUNG_HINT.replace_all(&s, "").into_owned();
        s = RE_ERROR_COUNT_BLANK.replace_all(&s, "$1").into_owned();
        // old smartctl does not separate these warnings from neighboring sections
        for re in RE_LONE_WARNINGS.iter() {
            s = re.replace_all(&s, "\n$1\n").into_owned();
        }
        for re in RE_NOISE.iter() {
            s = re.replace_all(&s, "").into_owned();
        }
        s
    }

    /// Carve the text into `=== START OF ... ===` sections and parse each
    fn parse_sections(&mut self, text: &str) -> Result<(), ParserError> {
        let marks: Vec<usize> = text.match_indices("=== START").map(|(i, _)| i).collect();
        if marks.is_empty() {
            return Err(ParserError::NoSection);
        }

        let mut any_parsed = false;
        for (idx, &mark) in marks.iter().enumerate() {
            let end = marks.get(idx + 1).copied().unwrap_or(text.len());
            let chunk = text.get(mark..end).unwrap_or("");
            let (header, body) = chunk.split_once('\n').unwrap_or((chunk, ""));
            match self.parse_section(header.trim(), body.trim()) {
                Ok(()) => any_parsed = true,
                Err(e) => self.diagnose(e),
            }
        }

        if any_parsed {
            Ok(())
        } else {
            Err(ParserError::NoSection)
        }
    }

    /// Parse one `=== ... ===` section
    fn parse_section(&mut self, header: &str, body: &str) -> Result<(), ParserError> {
        if header.contains("START OF INFORMATION SECTION") {
            return info::parse_info(self, body);
        }
        if header.contains("START OF READ SMART DATA SECTION") {
            return self.parse_data_section(body);
        }
        // these report side effects of control commands ("smartctl -s on",
        // "-t long"), the respective command issuers parse them
        if header.contains("START OF ENABLE/DISABLE COMMANDS SECTION")
            || header.contains("START OF OFFLINE IMMEDIATE AND SELF-TEST SECTION")
        {
            return Ok(());
        }
        log::debug!("Unknown section dump:\n{body}");
        Err(ParserError::UnknownSection(header.to_owned()))
    }

    /// Split the data section into subsections and route each to its parser
    fn parse_data_section(&mut self, body: &str) -> Result<(), ParserError> {
        // subsections are separated by double newlines, except continuations:
        // error log blocks and SCT temperature history tables
        let mut subsections: Vec<String> = Vec::new();
        for chunk in body.split("\n\n") {
            let chunk = chunk.trim_matches(|c| matches!(c, '\t' | '\n' | '\r'));
            if RE_CONTINUATION.is_match(chunk) {
                if let Some(last) = subsections.last_mut() {
                    last.push_str("\n\n");
                    last.push_str(chunk);
                } else {
                    log::warn!("Continuation block found without a preceding subsection");
                }
            } else if !chunk.trim().is_empty() {
                subsections.push(chunk.to_owned());
            }
        }

        let mut any_parsed = false;
        for sub in &subsections {
            let sub = sub.trim();
            let route = SUBSECTION_ROUTES
                .iter()
                .find(|(re, _)| re.is_match(sub))
                .map(|(_, route)| *route);
            let result = match route {
                Some(Route::Health) => info::parse_health(self, sub),
                Some(Route::Capabilities) => capabilities::parse_capabilities(self, sub),
                Some(Route::Attributes) => attributes::parse_attributes(self, sub),
                Some(Route::DirectoryLog) => logs::parse_directory_log(self, sub),
                Some(Route::ErrorLog) => logs::parse_error_log(self, sub),
                Some(Route::SelftestLog) => logs::parse_selftest_log(self, sub),
                Some(Route::SelectiveSelftestLog) => logs::parse_selective_selftest_log(self, sub),
                Some(Route::TemperatureLog) => logs::parse_sct_temperature_log(self, sub),
                Some(Route::ErcLog) => logs::parse_sct_erc_log(self, sub),
                Some(Route::Devstat) => devstat::parse_devstat(self, sub),
                Some(Route::PhyLog) => logs::parse_sata_phy_log(self, sub),
                Some(Route::Ignored) => continue,
                None => {
                    log::debug!("Unknown data subsection dump:\n{sub}");
                    self.diagnose(ParserError::UnknownSection(
                        sub.lines().next().unwrap_or("").to_owned(),
                    ));
                    continue;
                }
            };
            match result {
                Ok(()) => any_parsed = true,
                Err(e) => self.diagnose(e),
            }
        }

        if any_parsed {
            Ok(())
        } else {
            Err(ParserError::NoSubsectionsParsed)
        }
    }
}

/// Synthetic property for an extracted checksum warning line
fn checksum_error_property(name: &str) -> Property {
    let (section, generic) = match name {
        "Attribute Data" => (
            Section::Attributes,
            "_text_only/attribute_data_checksum_error",
        ),
        "Attribute Thresholds" => (
            Section::Attributes,
            "_text_only/attribute_thresholds_checksum_error",
        ),
        "ATA Error Log" => (Section::ErrorLog, "_text_only/ata_error_log_checksum_error"),
        "Self-Test Log" => (
            Section::SelftestLog,
            "_text_only/selftest_log_checksum_error",
        ),
        _ => (Section::Info, "_text_only/checksum_error"),
    };
    let mut p = Property::new(section);
    p.set_name(name, generic, &format!("Error in {name} structure"));
    p.reported_value = "checksum error".to_owned();
    p.value = PropertyValue::Text(p.reported_value.clone());
    p
}

/// Extract (version, full version string) from the banner
fn extract_version(text: &str) -> Option<(String, String)> {
    let captures = RE_VERSION.captures(text)?;
    let full = captures.get(1)?.as_str().trim().to_owned();
    let version = captures.get(2)?.as_str().trim().to_owned();
    Some((version, full))
}

/// Whether the text format of this smartctl version is parsable (5.0 and up)
fn version_supported(version: &str) -> bool {
    let mut numbers = version
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<u32>().unwrap_or(0));
    let major = numbers.next().unwrap_or(0);
    let minor = numbers.next().unwrap_or(0);
    (major, minor) >= (5, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::SMARTCTL_X_HDD;

    #[test]
    fn empty_input() {
        assert!(matches!(parse(""), Err(ParserError::EmptyInput)));
        assert!(matches!(parse("  \n\t \n"), Err(ParserError::EmptyInput)));
    }

    #[test]
    fn missing_version() {
        assert!(matches!(
            parse("=== START OF INFORMATION SECTION ===\nDevice Model: X\n"),
            Err(ParserError::NoVersion)
        ));
    }

    #[test]
    fn incompatible_version() {
        let text = "smartctl version 4.9\n\n=== START OF INFORMATION SECTION ===\nDevice Model: X\n";
        assert!(matches!(
            parse(text),
            Err(ParserError::IncompatibleVersion(v)) if v == "4.9"
        ));
    }

    #[test]
    fn no_sections() {
        let text = "smartctl 7.0 2018-12-30 r4883 [x86_64-linux] (local build)\nCopyright (C) 2002-18\n";
        assert!(matches!(parse(text), Err(ParserError::NoSection)));
    }

    #[test]
    fn versions() {
        assert!(version_supported("5.0"));
        assert!(version_supported("5.1-11"));
        assert!(version_supported("7.0"));
        assert!(!version_supported("4.9"));
    }

    #[test]
    fn minimal_info_only() {
        let text = "smartctl 7.0 2018-12-30 r4883 [x86_64-linux-4.19.36-1-lts] (local build)\n\
            Copyright (C) 2002-18, Bruce Allen, Christian Franke, www.smartmontools.org\n\
            \n\
            === START OF INFORMATION SECTION ===\n\
            Device Model:     ST3500630AS\n";
        let outcome = parse(text).unwrap();
        let version = outcome
            .properties
            .iter()
            .find(|p| p.generic_name == "smartctl/version/_merged")
            .unwrap();
        assert_eq!(version.reported_value, "7.0");
        let full = outcome
            .properties
            .iter()
            .find(|p| p.generic_name == "smartctl/version/_merged_full")
            .unwrap();
        assert_eq!(full.reported_value, "7.0 2018-12-30 r4883");
        let model = outcome
            .properties
            .iter()
            .find(|p| p.generic_name == "model_name")
            .unwrap();
        assert_eq!(model.reported_value, "ST3500630AS");
        assert!(
            outcome
                .properties
                .iter()
                .all(|p| p.warning_level == crate::property::WarningLevel::None)
        );
    }

    #[test]
    fn checksum_warning_extracted() {
        let text = "smartctl 7.0 2018-12-30 r4883 [x86_64-linux] (local build)\n\
            \n\
            === START OF INFORMATION SECTION ===\n\
            Device Model:     ST3500630AS\n\
            Warning! SMART Attribute Data Structure error: invalid SMART checksum.\n\
            Serial Number:    5QG0R38D\n";
        let outcome = parse(text).unwrap();
        let checksum = outcome
            .properties
            .iter()
            .find(|p| p.generic_name == "_text_only/attribute_data_checksum_error")
            .unwrap();
        assert_eq!(checksum.section, Section::Attributes);
        assert_eq!(checksum.reported_value, "checksum error");
        assert_eq!(checksum.displayable_name, "Error in Attribute Data structure");
        // the line must not survive into section parsing
        assert!(
            outcome
                .properties
                .iter()
                .all(|p| !p.reported_name.contains("Warning!"))
        );
        // neighbors still parse
        assert!(
            outcome
                .properties
                .iter()
                .any(|p| p.generic_name == "serial_number")
        );
    }

    #[test]
    fn newline_convention_is_irrelevant() {
        let unix = SMARTCTL_X_HDD;
        let dos = unix.replace('\n', "\r\n");
        let unix_outcome = parse(unix).unwrap();
        let dos_outcome = parse(&dos).unwrap();
        assert_eq!(unix_outcome.properties.len(), dos_outcome.properties.len());
        for (a, b) in unix_outcome
            .properties
            .iter()
            .zip(dos_outcome.properties.iter())
        {
            assert_eq!(a.generic_name, b.generic_name);
            assert_eq!(a.reported_value, b.reported_value);
        }
    }

    #[test]
    fn full_output_sections_present() {
        let outcome = parse(SMARTCTL_X_HDD).unwrap();
        let props = &outcome.properties;
        for generic in [
            "smartctl/version/_merged",
            "model_name",
            "serial_number",
            "smart_status/passed",
            "ata_smart_attributes/revision",
            "ata_smart_error_log/extended/count",
            "ata_smart_self_test_log/extended/revision",
            "ata_smart_self_test_log/extended/table/count",
            "ata_sct_status/temperature/current",
            "ata_smart_data/offline_data_collection/completion_seconds",
            "ata_smart_data/self_test/polling_minutes/short",
            "ata_smart_data/self_test/polling_minutes/extended",
            "ata_log_directory/_merged",
            "sata_phy_event_counters/_merged",
            "ata_smart_selective_self_test_log/_merged",
            "ata_sct_erc/_merged",
        ] {
            assert!(
                props.iter().any(|p| p.generic_name == generic),
                "missing {generic}"
            );
        }
        assert!(outcome.diagnostics.is_empty(), "{:?}", outcome.diagnostics);
    }

    #[test]
    fn merged_subsection_text_is_lossless() {
        let outcome = parse(SMARTCTL_X_HDD).unwrap();
        let merged = outcome
            .properties
            .iter()
            .find(|p| p.generic_name == "ata_smart_self_test_log/_merged")
            .unwrap();
        // re-parsing the merged text yields the same self-test entries
        let sub_props = {
            let mut parser = Parser::default();
            logs::parse_selftest_log(&mut parser, &merged.reported_value).unwrap();
            parser.properties
        };
        let original_entries: Vec<_> = outcome
            .properties
            .iter()
            .filter(|p| matches!(p.value, PropertyValue::Selftest(_)))
            .filter(|p| p.section == Section::SelftestLog)
            .map(|p| p.reported_value.clone())
            .collect();
        let reparsed_entries: Vec<_> = sub_props
            .iter()
            .filter(|p| matches!(p.value, PropertyValue::Selftest(_)))
            .map(|p| p.reported_value.clone())
            .collect();
        assert_eq!(original_entries, reparsed_entries);
        assert!(!original_entries.is_empty());
    }

    #[test]
    fn lone_warning_isolated() {
        let text = "smartctl 5.38 2008-03-10\n\
            \n\
            === START OF READ SMART DATA SECTION ===\n\
            SMART overall-health self-assessment test result: PASSED\n\
            \n\
            Warning: device does not support Error Logging\n\
            SMART Error Log Version: 1\n\
            No Errors Logged\n";
        let outcome = parse(text).unwrap();
        assert!(
            outcome
                .properties
                .iter()
                .any(|p| p.generic_name == "_text_only/ata_smart_error_log/_not_present")
        );
        assert!(
            outcome
                .properties
                .iter()
                .any(|p| p.generic_name == "smart_status/passed")
        );
    }
}
