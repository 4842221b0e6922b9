//! Typed SMART property model

use serde::Serialize;

/// Output section a property was parsed from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub(crate) enum Section {
    /// Information section (model, serial, firmware, ...)
    #[strum(serialize = "Information")]
    Info,
    /// Overall-health self-assessment
    Health,
    /// General SMART values
    Capabilities,
    /// Vendor-specific attribute table
    Attributes,
    /// Device statistics (GP log 0x04)
    #[strum(serialize = "Device Statistics")]
    Devstat,
    /// ATA error log
    #[strum(serialize = "Error Log")]
    ErrorLog,
    /// Self-test log
    #[strum(serialize = "Self-Test Log")]
    SelftestLog,
    /// Selective self-test log
    #[strum(serialize = "Selective Self-Test Log")]
    SelectiveSelftestLog,
    /// SCT status / temperature history
    #[strum(serialize = "Temperature Log")]
    TemperatureLog,
    /// SCT error recovery control
    #[strum(serialize = "Error Recovery Control")]
    ErcLog,
    /// SATA Phy event counters
    #[strum(serialize = "Phy Event Counters")]
    PhyLog,
    /// GP/SMART log directory
    #[strum(serialize = "Log Directory")]
    DirectoryLog,
}

/// Per-property warning level, ordered by severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, strum::Display)]
pub(crate) enum WarningLevel {
    /// Nothing to report
    #[default]
    None,
    /// Worth the user's attention
    Notice,
    /// Drive condition degraded
    Warning,
    /// Drive failing or data at risk
    Alert,
}

/// Device class used to disambiguate description database entries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum DiskClass {
    /// Class unknown or irrelevant, matches everything
    #[default]
    Any,
    /// Rotational drive
    Hdd,
    /// Solid-state drive
    Ssd,
}

impl DiskClass {
    /// Whether a database entry of class `other` applies to this device class
    pub(crate) fn accepts(self, other: Self) -> bool {
        self == Self::Any || other == Self::Any || self == other
    }
}

/// Attribute pre-fail / old-age classification
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, strum::Display)]
pub(crate) enum AttributeType {
    /// Imminent-failure indicator
    #[strum(serialize = "pre-failure")]
    Prefail,
    /// Wear indicator
    #[strum(serialize = "old age")]
    OldAge,
    /// Not reported or unrecognized
    #[default]
    #[strum(serialize = "unknown")]
    Unknown,
}

/// When the drive updates an attribute value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum UpdateType {
    /// Continuously
    Always,
    /// During offline data collection only
    Offline,
    /// Not reported or unrecognized
    #[default]
    Unknown,
}

/// Reported failure time of an attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum FailTime {
    /// Never failed
    None,
    /// Failed in the past, recovered since
    Past,
    /// Currently failing
    Now,
    /// Not reported or unrecognized
    #[default]
    Unknown,
}

/// One row of the vendor-specific attribute table
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct AttributeEntry {
    /// Attribute ID (first table column)
    pub id: u8,
    /// Flag column as reported (`0x0033` or packed letters in brief format)
    pub flag: String,
    /// Normalized value, None if reported as `---`
    pub value: Option<u8>,
    /// Worst normalized value ever observed, None if `---`
    pub worst: Option<u8>,
    /// Failure threshold, None if `---`
    pub threshold: Option<u8>,
    /// Pre-fail / old-age classification
    pub attr_type: AttributeType,
    /// Update condition
    pub update_type: UpdateType,
    /// Reported failure time
    pub when_failed: FailTime,
    /// Raw value column, unparsed
    pub raw_value: String,
    /// First integer of the raw value column, 0 if none
    pub raw_value_int: i64,
}

/// One row of the device statistics log
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct StatisticEntry {
    /// Log page
    pub page: u8,
    /// Offset within the page
    pub offset: u16,
    /// Flag letters (N = normalized, D = supports DSN, C = condition met)
    pub flags: String,
    /// Value column as reported, empty for page header rows
    pub value: String,
    /// Value parsed as integer, 0 for page header rows
    pub value_int: i64,
    /// Whether this row is a page title (`Size` and `Value` columns are `=`)
    pub is_header: bool,
}

impl StatisticEntry {
    /// Whether the value is normalized rather than a raw counter
    pub(crate) fn is_normalized(&self) -> bool {
        self.flags.contains('N')
    }
}

/// A capability flag list from the General SMART Values section
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct CapabilityEntry {
    /// Numeric flag value
    pub flag_value: u16,
    /// Flag value as reported (may be hex)
    pub reported_flag_value: String,
    /// Whole descriptive text as reported
    pub reported_strvalue: String,
    /// Descriptive text split into one-sentence facts
    pub lines: Vec<String>,
}

/// One error block from the ATA error log
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct ErrorBlockEntry {
    /// Error number (higher is more recent)
    pub error_num: u32,
    /// Disk power-on lifetime at error time, hours
    pub lifetime_hours: u64,
    /// Device state when the error occurred
    pub device_state: String,
    /// Error type tokens from the registers line (`UNC`, `ICRC`, ...)
    pub reported_types: Vec<String>,
    /// Remainder of the error line (sector count, LBA)
    pub type_more_info: String,
}

/// ATA error register tokens with their readable meaning and severity.
/// The lexicon is shared between error block descriptions and the default
/// error-type severity hook.
const ERROR_TYPES: [(&str, &str, WarningLevel); 14] = [
    ("ABRT", "Command aborted", WarningLevel::None),
    ("AMNF", "Address mark not found", WarningLevel::Alert),
    ("CCTO", "Command completion timed out", WarningLevel::Warning),
    ("EOM", "End of media", WarningLevel::Warning),
    ("ICRC", "Interface CRC error", WarningLevel::Warning),
    ("IDNF", "Identity not found", WarningLevel::Alert),
    ("ILI", "(Packet command-set specific)", WarningLevel::Notice),
    ("MC", "Media changed", WarningLevel::None),
    ("MCR", "Media change request", WarningLevel::None),
    ("NM", "No media", WarningLevel::None),
    ("obs", "Obsolete", WarningLevel::None),
    ("TK0NF", "Track 0 not found", WarningLevel::Alert),
    ("UNC", "Uncorrectable error in data", WarningLevel::Alert),
    ("WP", "Media is write protected", WarningLevel::None),
];

/// Severity of a single reported error type token
pub(crate) fn error_type_level(error_type: &str) -> WarningLevel {
    ERROR_TYPES
        .iter()
        .find(|(token, _, _)| token.eq_ignore_ascii_case(error_type))
        .map_or(WarningLevel::None, |(_, _, level)| *level)
}

impl ErrorBlockEntry {
    /// Reported error types with their readable meanings,
    /// e.g. "UNC (Uncorrectable error in data), ICRC (Interface CRC error)"
    pub(crate) fn readable_types(&self) -> String {
        self.reported_types
            .iter()
            .map(|t| {
                ERROR_TYPES
                    .iter()
                    .find(|(token, _, _)| token.eq_ignore_ascii_case(t))
                    .map_or_else(|| t.clone(), |(_, readable, _)| format!("{t} ({readable})"))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Decoded self-test completion status
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub(crate) enum SelftestStatus {
    /// Completed without error
    CompletedNoError,
    /// Aborted by host
    AbortedByHost,
    /// Interrupted by host reset
    Interrupted,
    /// Fatal or unknown test error
    FatalOrUnknown,
    /// Completed with an unknown failed element
    ComplUnknownFailure,
    /// Completed with a failed electrical element
    ComplElectricalFailure,
    /// Completed with a failed servo/seek element
    ComplServoFailure,
    /// Completed with a failed read element
    ComplReadFailure,
    /// Completed, handling damage suspected
    ComplHandlingDamage,
    /// Test in progress
    InProgress,
    /// Reserved status value
    Reserved,
    /// Unrecognized status text
    #[default]
    Unknown,
}

/// One entry of the self-test log, or the last self-test status
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct SelftestEntry {
    /// Test number (higher is older), 0 for the last-status pseudo entry
    pub test_num: u8,
    /// Test description column ("Extended offline", "Short offline", ...)
    pub test_type: String,
    /// Decoded status
    pub status: SelftestStatus,
    /// Status text as reported
    pub status_str: String,
    /// Percent of test remaining, -1 if unknown or n/a
    pub remaining_percent: i8,
    /// Disk power-on lifetime at test time, hours
    pub lifetime_hours: u64,
    /// LBA of first error, "-" if none
    pub lba_of_first_error: String,
}

/// Typed value of a parsed property
#[derive(Clone, Debug, Default, Serialize)]
pub(crate) enum PropertyValue {
    /// No value (marker properties)
    #[default]
    Empty,
    /// Boolean
    Bool(bool),
    /// Integer
    Integer(i64),
    /// Time length, always stored in seconds
    Seconds(i64),
    /// Plain text
    Text(String),
    /// Attribute table row
    Attribute(AttributeEntry),
    /// Device statistics row
    Statistic(StatisticEntry),
    /// Capability flag list
    Capability(CapabilityEntry),
    /// Error log block
    ErrorBlock(ErrorBlockEntry),
    /// Self-test log entry
    Selftest(SelftestEntry),
}

/// Universal record emitted by the parser
#[derive(Clone, Debug, Serialize)]
pub(crate) struct Property {
    /// Section the property was parsed from
    pub section: Section,
    /// Left-hand identifier exactly as seen in the text
    pub reported_name: String,
    /// Stable path key ("ata_smart_attributes/revision", ...), may be empty
    pub generic_name: String,
    /// Human-readable label, set from the description database when available
    pub displayable_name: String,
    /// Raw right-hand string captured from the text
    pub reported_value: String,
    /// Display string synthesized for some values, empty if raw is shown as-is
    pub readable_value: String,
    /// Tooltip text set by the description pass
    pub description: String,
    /// Typed value
    pub value: PropertyValue,
    /// Warning level assigned by the severity classifier
    pub warning_level: WarningLevel,
    /// Rationale for the warning level, for UI tooltips
    pub warning_reason: String,
    /// False for noise that should not be displayed
    pub show_in_ui: bool,
}

impl Property {
    /// New empty property in a section
    pub(crate) fn new(section: Section) -> Self {
        Self {
            section,
            reported_name: String::new(),
            generic_name: String::new(),
            displayable_name: String::new(),
            reported_value: String::new(),
            readable_value: String::new(),
            description: String::new(),
            value: PropertyValue::Empty,
            warning_level: WarningLevel::None,
            warning_reason: String::new(),
            show_in_ui: true,
        }
    }

    /// Set reported, generic and displayable names at once.
    /// Empty generic/displayable arguments leave the current value untouched.
    pub(crate) fn set_name(&mut self, reported: &str, generic: &str, displayable: &str) {
        self.reported_name = reported.to_owned();
        if !generic.is_empty() {
            self.generic_name = generic.to_owned();
        }
        if !displayable.is_empty() {
            self.displayable_name = displayable.to_owned();
        }
    }

    /// Label to display: displayable name if set, reported name otherwise
    pub(crate) fn label(&self) -> &str {
        if self.displayable_name.is_empty() {
            &self.reported_name
        } else {
            &self.displayable_name
        }
    }

    /// Boolean value, if the property holds one
    pub(crate) fn as_bool(&self) -> Option<bool> {
        match self.value {
            PropertyValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Integer value, if the property holds one
    pub(crate) fn as_int(&self) -> Option<i64> {
        match self.value {
            PropertyValue::Integer(i) => Some(i),
            _ => None,
        }
    }

    /// Attribute entry, if the property holds one
    pub(crate) fn attribute(&self) -> Option<&AttributeEntry> {
        match &self.value {
            PropertyValue::Attribute(a) => Some(a),
            _ => None,
        }
    }

    /// Statistic entry, if the property holds one
    pub(crate) fn statistic(&self) -> Option<&StatisticEntry> {
        match &self.value {
            PropertyValue::Statistic(s) => Some(s),
            _ => None,
        }
    }

    /// Error block entry, if the property holds one
    pub(crate) fn error_block(&self) -> Option<&ErrorBlockEntry> {
        match &self.value {
            PropertyValue::ErrorBlock(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{}", if *b { "yes" } else { "no" }),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Seconds(s) => write!(f, "{s} s"),
            Self::Text(t) => write!(f, "{t}"),
            Self::Attribute(a) => write!(
                f,
                "value {} worst {} threshold {} ({}, updated {}, failed: {}, raw: {})",
                OptByte(a.value),
                OptByte(a.worst),
                OptByte(a.threshold),
                a.attr_type,
                a.update_type,
                a.when_failed,
                a.raw_value,
            ),
            Self::Statistic(s) => {
                if s.is_header {
                    Ok(())
                } else {
                    write!(f, "{}", s.value)
                }
            }
            Self::Capability(c) => write!(f, "{}", c.lines.join("; ")),
            Self::ErrorBlock(e) => write!(
                f,
                "at {} hours, {}{}",
                e.lifetime_hours,
                e.reported_types.join(", "),
                if e.type_more_info.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", e.type_more_info)
                },
            ),
            Self::Selftest(s) => write!(
                f,
                "{} at {} hours: {} (LBA of first error: {})",
                s.test_type, s.lifetime_hours, s.status_str, s.lba_of_first_error,
            ),
        }
    }
}

/// Display helper for optional normalized attribute values
struct OptByte(Option<u8>);

impl std::fmt::Display for OptByte {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => write!(f, "---"),
        }
    }
}
