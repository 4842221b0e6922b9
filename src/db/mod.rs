//! Attribute and statistic description databases

mod attributes;
mod statistics;

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use crate::property::{DiskClass, ErrorBlockEntry, Property, PropertyValue, Section};

/// Description record for one attribute interpretation
#[derive(Clone, Debug, Default)]
pub(crate) struct AttributeDescription {
    /// Attribute ID this record applies to
    pub id: u8,
    /// Device class this record applies to
    pub disk_class: DiskClass,
    /// Name smartctl reports for this interpretation, may be empty
    pub smartctl_name: String,
    /// Human-readable label, may be empty
    pub readable_name: String,
    /// Stable key consumed by the severity rules, may be empty
    pub generic_name: String,
    /// Long description, may be empty
    pub description: String,
}

/// Description record for one device statistic
#[derive(Clone, Debug, Default)]
pub(crate) struct StatisticDescription {
    /// Name smartctl reports for the statistic
    pub smartctl_name: String,
    /// Human-readable label, may be empty (smartctl name used then)
    pub readable_name: String,
    /// Stable key consumed by the severity rules, may be empty
    pub generic_name: String,
    /// Long description, may be empty
    pub description: String,
}

/// Attribute description database.
///
/// Each ID maps to an ordered list: the first inserted entry is the default
/// used when smartctl reports an unrecognized name, later entries are
/// per-vendor overrides selected by `(disk_class, smartctl_name)`.
/// Insertion is append-only: a duplicate `(id, disk_class, smartctl_name)`
/// never shadows an earlier entry.
pub(crate) struct AttributeDatabase {
    /// id => interpretations, in insertion order
    by_id: BTreeMap<u8, Vec<AttributeDescription>>,
}

impl AttributeDatabase {
    /// Build and populate the database
    fn new() -> Self {
        let mut db = Self {
            by_id: BTreeMap::new(),
        };
        attributes::populate(&mut db);
        db
    }

    /// Add an interpretation for an attribute ID
    fn add(
        &mut self,
        id: u8,
        disk_class: DiskClass,
        smartctl_name: &str,
        readable_name: &str,
        generic_name: &str,
        description: &str,
    ) {
        self.by_id.entry(id).or_default().push(AttributeDescription {
            id,
            disk_class,
            smartctl_name: smartctl_name.to_owned(),
            readable_name: readable_name.to_owned(),
            generic_name: generic_name.to_owned(),
            description: description.to_owned(),
        });
    }

    /// Add the ID's default interpretation again under a different smartctl
    /// name (used for vendor aliases that mean the same thing)
    fn add_ref(&mut self, id: u8, disk_class: DiskClass, smartctl_name: &str) {
        let Some(first) = self.by_id.get(&id).and_then(|b| b.first()).cloned() else {
            log::error!("No existing entry for attribute {id} to alias {smartctl_name}");
            return;
        };
        self.add(
            id,
            disk_class,
            smartctl_name,
            &first.readable_name,
            &first.generic_name,
            &first.description,
        );
    }

    /// Look up the description for a reported attribute.
    ///
    /// Entries are first filtered by device class, then matched
    /// case-insensitively on the smartctl name (empty names in the database
    /// never match); if no name matches, the first class-compatible entry
    /// (the ID default) is returned.
    pub(crate) fn find(
        &self,
        reported_name: &str,
        id: u8,
        disk_class: DiskClass,
    ) -> Option<&AttributeDescription> {
        let bucket = self.by_id.get(&id)?;
        let mut type_matched = bucket
            .iter()
            .filter(|d| disk_class.accepts(d.disk_class))
            .peekable();
        let fallback = type_matched.peek().copied();
        type_matched
            .find(|d| {
                !d.smartctl_name.is_empty() && d.smartctl_name.eq_ignore_ascii_case(reported_name)
            })
            .or(fallback)
    }
}

/// Device statistics description database, keyed by reported name
pub(crate) struct StatisticsDatabase {
    /// smartctl name => description
    by_name: BTreeMap<String, StatisticDescription>,
}

impl StatisticsDatabase {
    /// Build and populate the database
    fn new() -> Self {
        let mut db = Self {
            by_name: BTreeMap::new(),
        };
        statistics::populate(&mut db);
        db
    }

    /// Add a statistic description
    fn add(&mut self, smartctl_name: &str, readable_name: &str, generic_name: &str, description: &str) {
        self.by_name.insert(
            smartctl_name.to_owned(),
            StatisticDescription {
                smartctl_name: smartctl_name.to_owned(),
                readable_name: readable_name.to_owned(),
                generic_name: generic_name.to_owned(),
                description: description.to_owned(),
            },
        );
    }

    /// Look up a statistic by its reported name
    pub(crate) fn find(&self, reported_name: &str) -> Option<&StatisticDescription> {
        self.by_name.get(reported_name)
    }
}

/// Process-wide attribute description database, built on first use
static ATTRIBUTE_DB: LazyLock<AttributeDatabase> = LazyLock::new(AttributeDatabase::new);

/// Process-wide statistics description database, built on first use
static STATISTICS_DB: LazyLock<StatisticsDatabase> = LazyLock::new(StatisticsDatabase::new);

/// Look up an attribute description in the process-wide database
pub(crate) fn find_attribute(
    reported_name: &str,
    id: u8,
    disk_class: DiskClass,
) -> Option<&'static AttributeDescription> {
    ATTRIBUTE_DB.find(reported_name, id, disk_class)
}

/// Look up a statistic description in the process-wide database
pub(crate) fn find_statistic(reported_name: &str) -> Option<&'static StatisticDescription> {
    STATISTICS_DB.find(reported_name)
}

/// Substring replacements applied when humanizing a smartctl attribute name.
/// Patterns are space-delimited so they only hit whole words; order matters
/// (underscores become spaces before word replacements run).
const NAME_REPLACEMENTS: [(&str, &str); 16] = [
    ("_", " "),
    ("/", " / "),
    (" Ct ", " Count "),
    (" Tot ", " Total "),
    (" Blk ", " Block "),
    (" Cel ", " Celsius "),
    (" Uncorrect ", " Uncorrectable "),
    (" Cnt ", " Count "),
    (" Offl ", " Offline "),
    (" UNC ", " Uncorrectable "),
    (" Err ", " Error "),
    (" Errs ", " Errors "),
    (" Perc ", " Percent "),
    (" Avg ", " Average "),
    (" Max ", " Maximum "),
    (" Min ", " Minimum "),
];

/// Turn a smartctl attribute name into something displayable
/// ("Total_Offl_Uncorrectabl" => "Total Offline Uncorrectabl")
pub(crate) fn humanize_name(reported_name: &str) -> String {
    let mut name = format!(" {reported_name} ");
    for (from, to) in NAME_REPLACEMENTS {
        name = name.replace(from, to);
    }
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Names smartctl itself does not recognize ("Unknown_SSD_Attribute", ...)
static RE_UNKNOWN_ATTR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)Unknown_(?:(HDD|SSD)_?)?Attr"));

/// Compile a pattern known to be valid
#[expect(clippy::unwrap_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Strip characters ignored when comparing a humanized smartctl name against
/// a database readable name
fn comparable_name(name: &str) -> String {
    format!(" {name} ")
        .replace(" Percent ", " % ")
        .replace(['-', '(', ')', ' '], "")
        .to_lowercase()
}

/// Fill an attribute property's displayable name, generic name and
/// description from the database, humanizing unrecognized names
fn fill_attribute(p: &mut Property, disk_class: DiskClass) {
    let Some(attr_id) = p.attribute().map(|a| a.id) else {
        return;
    };
    let mut descr = find_attribute(&p.reported_name, attr_id, disk_class)
        .cloned()
        .unwrap_or_default();

    let unknown_capture = RE_UNKNOWN_ATTR.captures(&p.reported_name);
    let known_by_smartctl = unknown_capture.is_none();
    let humanized = if known_by_smartctl {
        humanize_name(&p.reported_name)
    } else {
        String::new()
    };

    if descr.readable_name.is_empty() {
        if humanized.is_empty() {
            let class = unknown_capture
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_uppercase());
            descr.readable_name = match class.as_deref() {
                Some("SSD") => "Unknown SSD Attribute".to_owned(),
                Some("HDD") => "Unknown HDD Attribute".to_owned(),
                _ => "Unknown Attribute".to_owned(),
            };
        } else {
            descr.readable_name.clone_from(&humanized);
        }
    }

    if descr.description.is_empty() {
        descr.description = "No description is available for this attribute.".to_owned();
    } else {
        let same_names = !known_by_smartctl
            || comparable_name(&humanized) == comparable_name(&descr.readable_name);
        let mut text = format!("<b>{}</b>", descr.readable_name);
        if !same_names {
            let reported = p.reported_name.replace('_', " ");
            text.push_str(&format!(
                "\n<small>Reported by smartctl as <b>\"{reported}\"</b></small>\n"
            ));
        }
        text.push('\n');
        text.push_str(&descr.description);
        descr.description = text;
    }

    p.displayable_name = descr.readable_name;
    p.description = descr.description;
    p.generic_name = descr.generic_name;
}

/// Fill a statistic property's displayable name, generic name and
/// description from the database
fn fill_statistic(p: &mut Property) {
    let Some(descr) = find_statistic(&p.reported_name) else {
        p.description = "No description is available for this attribute.".to_owned();
        return;
    };
    let readable = if descr.readable_name.is_empty() {
        descr.smartctl_name.clone()
    } else {
        descr.readable_name.clone()
    };
    let mut text = format!("<b>{readable}</b>\n{}", descr.description);
    if p.statistic()
        .is_some_and(crate::property::StatisticEntry::is_normalized)
    {
        text.push_str("\n\nNote: The value is normalized.");
    }
    if !readable.is_empty() {
        p.displayable_name = readable;
    }
    p.description = text;
    p.generic_name.clone_from(&descr.generic_name);
}

/// Check a property against a generic name (falling back to the reported
/// name when no generic name was assigned), case-insensitively
pub(crate) fn name_match(p: &Property, name: &str) -> bool {
    if p.generic_name.is_empty() {
        p.reported_name.eq_ignore_ascii_case(name)
    } else {
        p.generic_name.eq_ignore_ascii_case(name)
    }
}

/// Set a description if the property matches a generic name
fn set_if(p: &mut Property, name: &str, description: &str) -> bool {
    if name_match(p, name) {
        p.description = description.to_owned();
        true
    } else {
        false
    }
}

/// Fixed tooltip texts for info-section properties
const INFO_DESCRIPTIONS: [(&str, &str); 8] = [
    ("model_family", "Model family (from smartctl database)"),
    ("model_name", "Device model"),
    ("serial_number", "Serial number, unique to each physical drive"),
    (
        "user_capacity/bytes",
        "User-serviceable drive capacity as reported to an operating system",
    ),
    (
        "in_smartctl_database",
        "Whether the device is in smartctl database or not. If it is, additional information may be provided; otherwise, Raw values of some attributes may be incorrectly formatted.",
    ),
    (
        "smart_support/available",
        "Whether the device supports SMART. If not, then only very limited information will be available.",
    ),
    (
        "smart_support/enabled",
        "Whether the device has SMART enabled. If not, most of the reported values will be incorrect.",
    ),
    ("_text_only/power_mode", "Power mode at the time of query"),
];

/// Fixed tooltip texts for capability properties, by generic name
const CAPABILITY_DESCRIPTIONS: [(&str, &str); 10] = [
    (
        "ata_smart_data/offline_data_collection/status/_group",
        "Offline Data Collection (a.k.a. Offline test) is usually automatically performed when the device is idle or every fixed amount of time. This should show if Automatic Offline Data Collection is enabled.",
    ),
    (
        "ata_smart_data/offline_data_collection/completion_seconds",
        "Offline Data Collection (a.k.a. Offline test) is usually automatically performed when the device is idle or every fixed amount of time. This value shows the estimated time required to perform this operation in idle conditions. A value of 0 means unsupported.",
    ),
    (
        "ata_smart_data/self_test/polling_minutes/short",
        "This value shows the estimated time required to perform a short self-test in idle conditions. A value of 0 means unsupported.",
    ),
    (
        "ata_smart_data/self_test/polling_minutes/extended",
        "This value shows the estimated time required to perform a long self-test in idle conditions. A value of 0 means unsupported.",
    ),
    (
        "ata_smart_data/self_test/polling_minutes/conveyance",
        "This value shows the estimated time required to perform a conveyance self-test in idle conditions. A value of 0 means unsupported.",
    ),
    (
        "ata_smart_data/self_test/status/_group",
        "Status of the last self-test run.",
    ),
    (
        "ata_smart_data/offline_data_collection/_group",
        "Drive properties related to Offline Data Collection and self-tests.",
    ),
    (
        "ata_smart_data/capabilities/_group",
        "Drive properties related to SMART handling.",
    ),
    (
        "ata_smart_data/capabilities/error_logging_supported/_group",
        "Drive properties related to error logging.",
    ),
    (
        "ata_sct_capabilities/_group",
        "Drive properties related to temperature information.",
    ),
];

/// Fill a property's description (and, for attributes and statistics, its
/// displayable and generic names) from the databases and fixed texts
pub(crate) fn fill_description(p: &mut Property, disk_class: DiskClass) {
    if p.generic_name.contains("_checksum_error") {
        p.description = "Checksum errors indicate that SMART data is invalid. This shouldn't happen in normal circumstances.".to_owned();
        return;
    }

    match p.section {
        Section::Info => {
            let found = INFO_DESCRIPTIONS
                .iter()
                .any(|(name, descr)| set_if(p, name, descr));
            if !found {
                // just its name as a tooltip
                p.description = p.label().to_owned();
            }
        }
        Section::Health => {
            let _ = set_if(
                p,
                "smart_status/passed",
                "Overall health self-assessment test result. Note: If the drive passes this test, it doesn't mean it's OK. However, if the drive doesn't pass it, then it's either already dead, or it's predicting its own failure within the next 24 hours. In this case do a backup immediately!",
            );
        }
        Section::Capabilities => {
            let _ = CAPABILITY_DESCRIPTIONS
                .iter()
                .any(|(name, descr)| set_if(p, name, descr));
        }
        Section::Attributes => {
            if name_match(p, "ata_smart_attributes/revision") {
                p.description = p.label().to_owned();
            } else if matches!(p.value, PropertyValue::Attribute(_)) {
                fill_attribute(p, disk_class);
            }
        }
        Section::Devstat => {
            if matches!(p.value, PropertyValue::Statistic(_)) {
                fill_statistic(p);
            }
        }
        Section::ErrorLog => {
            if name_match(p, "ata_smart_error_log/extended/revision") {
                p.description = p.label().to_owned();
            } else {
                let _ = set_if(
                    p,
                    "ata_smart_error_log/extended/count",
                    "Number of errors in error log. Note: Some manufacturers may list completely harmless errors in this log (e.g., command invalid, not implemented, etc...).",
                );
            }
            let block_types = p.error_block().map(ErrorBlockEntry::readable_types);
            if let Some(types) = block_types {
                p.description = types;
            }
        }
        Section::SelftestLog => {
            if name_match(p, "ata_smart_self_test_log/extended/revision") {
                p.description = p.label().to_owned();
            } else {
                let _ = set_if(
                    p,
                    "ata_smart_self_test_log/extended/table/count",
                    "Number of tests in selftest log. Note: The number of entries may be limited to the newest manual tests.",
                );
            }
        }
        Section::TemperatureLog => {
            let _ = set_if(
                p,
                "_text_only/ata_sct_status/_not_present",
                "SCT support is needed for SCT temperature logging.",
            );
        }
        Section::SelectiveSelftestLog
        | Section::ErcLog
        | Section::PhyLog
        | Section::DirectoryLog => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_when_name_unrecognized() {
        let descr = find_attribute("Some_Vendor_Thing", 5, DiskClass::Hdd).unwrap();
        assert_eq!(descr.smartctl_name, "Reallocated_Sector_Ct");
        assert_eq!(descr.generic_name, "attr_reallocated_sector_count");
    }

    #[test]
    fn ssd_override_by_name() {
        let descr = find_attribute("Retired_Block_Count", 5, DiskClass::Ssd).unwrap();
        assert_eq!(descr.readable_name, "Retired Block Rate");
        assert_eq!(descr.generic_name, "attr_ssd_life_left");
    }

    #[test]
    fn ssd_override_invisible_to_hdd() {
        // Retired_Block_Count is SSD-only; an HDD request falls back to the default
        let descr = find_attribute("Retired_Block_Count", 5, DiskClass::Hdd).unwrap();
        assert_eq!(descr.smartctl_name, "Reallocated_Sector_Ct");
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let descr = find_attribute("reallocated_sector_ct", 5, DiskClass::Any).unwrap();
        assert_eq!(descr.smartctl_name, "Reallocated_Sector_Ct");
    }

    #[test]
    fn unknown_id_yields_nothing() {
        assert!(find_attribute("Whatever", 57, DiskClass::Any).is_none());
    }

    #[test]
    fn temperature_x10_entry() {
        let descr = find_attribute("Temperature_Celsius_x10", 194, DiskClass::Any).unwrap();
        assert_eq!(descr.generic_name, "attr_temperature_celsius_x10");
    }

    #[test]
    fn duplicates_append_only() {
        // Both an HDD and an SSD entry exist for (5, Reallocated_Sector_Ct);
        // the first inserted one wins for an Any request
        let descr = find_attribute("Reallocated_Sector_Ct", 5, DiskClass::Any).unwrap();
        assert_eq!(descr.disk_class, DiskClass::Hdd);
    }

    #[test]
    fn alias_inherits_default() {
        // Uncorrectable_Sector_Ct is an alias of Offline_Uncorrectable (198)
        let descr = find_attribute("Uncorrectable_Sector_Ct", 198, DiskClass::Ssd).unwrap();
        assert_eq!(descr.generic_name, "attr_offline_uncorrectable");
    }

    #[test]
    fn statistic_lookup() {
        let descr = find_statistic("Percentage Used Endurance Indicator").unwrap();
        assert!(descr.description.contains("percentage of device life"));
        assert!(find_statistic("No Such Statistic").is_none());
    }

    #[test]
    fn humanizer() {
        assert_eq!(
            humanize_name("Soft_Read_Error_Rate"),
            "Soft Read Error Rate"
        );
        assert_eq!(humanize_name("Total_Offl_UNC_Ct"), "Total Offline Uncorrectable Count");
        assert_eq!(humanize_name("Perc_Avail_Resrvd_Space"), "Percent Avail Resrvd Space");
        assert_eq!(humanize_name("Min_W/E_Cycle"), "Minimum W / E Cycle");
    }

    #[test]
    fn unknown_attribute_labels() {
        let mut p = Property::new(Section::Attributes);
        p.set_name("Unknown_SSD_Attribute", "", "");
        p.value = PropertyValue::Attribute(crate::property::AttributeEntry {
            id: 57,
            ..Default::default()
        });
        fill_attribute(&mut p, DiskClass::Ssd);
        assert_eq!(p.displayable_name, "Unknown SSD Attribute");

        let mut p = Property::new(Section::Attributes);
        p.set_name("Unknown_Attribute", "", "");
        p.value = PropertyValue::Attribute(crate::property::AttributeEntry {
            id: 57,
            ..Default::default()
        });
        fill_attribute(&mut p, DiskClass::Any);
        assert_eq!(p.displayable_name, "Unknown Attribute");
    }

    #[test]
    fn reported_as_annotation() {
        // DB readable name differs from the humanized smartctl name
        let mut p = Property::new(Section::Attributes);
        p.set_name("Spin_Retry_Count", "", "");
        p.value = PropertyValue::Attribute(crate::property::AttributeEntry {
            id: 10,
            ..Default::default()
        });
        fill_attribute(&mut p, DiskClass::Hdd);
        assert_eq!(p.displayable_name, "Spin-Up Retry Count");
        assert!(p.description.contains("Reported by smartctl as"));

        // Identical names (modulo separators) get no annotation
        let mut p = Property::new(Section::Attributes);
        p.set_name("Raw_Read_Error_Rate", "", "");
        p.value = PropertyValue::Attribute(crate::property::AttributeEntry {
            id: 1,
            ..Default::default()
        });
        fill_attribute(&mut p, DiskClass::Any);
        assert!(!p.description.contains("Reported by smartctl as"));
    }
}
