//! Severity rule engine
//!
//! Assigns a warning level to each parsed property. Rules only ever raise the
//! level within one pass, and the whole pass is a pure function of the
//! property and the description databases, so running it twice is a no-op.

use crate::{
    db::{self, name_match},
    property::{
        AttributeType, DiskClass, FailTime, Property, PropertyValue, Section, WarningLevel,
    },
};

/// Severity hook for one error log type token. Externalized because the
/// lexicon is shared with UI color coding; [`crate::property::error_type_level`]
/// is the default.
pub(crate) type ErrorTypeLevel<'a> = &'a dyn Fn(&str) -> WarningLevel;

/// Shared notice for a non-zero raw value on a surface-error attribute
const SURFACE_NOTICE: &str = "The drive has a non-zero Raw value, but there is no SMART warning yet. This could be an indication of future failures and/or potential data loss in bad sectors.";
/// Shared notice for drive temperature above 50 degrees
const TEMP_NOTICE: &str = "The temperature of the drive is higher than 50 degrees Celsius. This may shorten its lifespan and cause damage under severe load. Please install a cooling solution.";
/// Shared notice for surface errors reported through device statistics
const STAT_SURFACE_NOTICE: &str = "The drive is reporting surface errors. This could be an indication of future failures and/or potential data loss in bad sectors.";
/// Shared notice for a drive past half of its rated endurance
const HALF_LIFE_NOTICE: &str = "The drive has less than half of its estimated life left.";
/// Shared warning for a drive past its rated endurance
const PAST_LIFE_WARNING: &str = "The drive is past its estimated lifespan.";

/// Assign a warning level and reason to a property. Never lowers a level.
pub(crate) fn assign_warning(p: &mut Property, error_type_level: ErrorTypeLevel<'_>) {
    let mut level = WarningLevel::None;
    let mut reason = String::new();
    let mut raise = |new_level: WarningLevel, new_reason: &str| {
        if new_level > level {
            level = new_level;
            reason = new_reason.to_owned();
        }
    };

    if p.generic_name.contains("_checksum_error") {
        raise(
            WarningLevel::Warning,
            "The drive may have a broken implementation of SMART, or it's failing.",
        );
    } else {
        match p.section {
            Section::Info => check_info(p, &mut raise),
            Section::Health => {
                if name_match(p, "smart_status/passed") && p.as_bool() == Some(false) {
                    raise(
                        WarningLevel::Alert,
                        "The drive is reporting that it will FAIL very soon. Please back up as soon as possible!",
                    );
                }
            }
            Section::Attributes => check_attribute(p, &mut raise),
            Section::Devstat => check_statistic(p, &mut raise),
            Section::ErrorLog => check_error_log(p, error_type_level, &mut raise),
            Section::SelftestLog => {
                if name_match(p, "_text_only/ata_smart_self_test_log/_not_present") {
                    raise(
                        WarningLevel::Notice,
                        "The drive does not support self-test logging. This means that SMART test results won't be logged.",
                    );
                }
            }
            Section::TemperatureLog => {
                if name_match(p, "ata_sct_status/temperature/current")
                    && p.as_int().is_some_and(|t| t > 50)
                {
                    raise(WarningLevel::Notice, TEMP_NOTICE);
                }
            }
            Section::Capabilities
            | Section::SelectiveSelftestLog
            | Section::ErcLog
            | Section::PhyLog
            | Section::DirectoryLog => {}
        }
    }

    if level > p.warning_level {
        p.warning_level = level;
        p.warning_reason = reason;
    }
}

/// Info section rules
fn check_info(p: &Property, raise: &mut impl FnMut(WarningLevel, &str)) {
    if name_match(p, "smart_support/available") && p.as_bool() == Some(false) {
        raise(
            WarningLevel::Notice,
            "SMART is not supported. You won't be able to read any SMART information from this drive.",
        );
    } else if name_match(p, "smart_support/enabled") && p.as_bool() == Some(false) {
        raise(
            WarningLevel::Notice,
            "SMART is disabled. You should enable it to read any SMART information from this drive. \
            Additionally, some drives do not log useful data with SMART disabled, so it's advisable to keep it always enabled.",
        );
    } else if name_match(p, "_text_only/info_warning") {
        raise(
            WarningLevel::Notice,
            "Your drive may be affected by the warning, please see the details.",
        );
    }
}

/// Check whether a property is an attribute with a given generic name
fn attr_match(p: &Property, generic_name: &str) -> bool {
    matches!(p.value, PropertyValue::Attribute(_)) && p.generic_name == generic_name
}

/// Attribute section rules: notices for known pre-fail attributes first,
/// then overriding warnings / alerts for reported attribute failures
fn check_attribute(p: &Property, raise: &mut impl FnMut(WarningLevel, &str)) {
    let Some(attr) = p.attribute() else {
        return;
    };
    let raw = attr.raw_value_int;

    if attr_match(p, "attr_reallocated_sector_count") && raw > 0 {
        raise(WarningLevel::Notice, SURFACE_NOTICE);
    } else if attr_match(p, "attr_spin_up_retry_count") && raw > 0 {
        raise(
            WarningLevel::Notice,
            "The drive has a non-zero Raw value, but there is no SMART warning yet. Your drive may have problems spinning up, which could lead to a complete mechanical failure. Please back up.",
        );
    } else if attr_match(p, "attr_soft_read_error_rate") && raw > 0 {
        raise(WarningLevel::Notice, SURFACE_NOTICE);
    // for some drives the raw value is 10x temperature, limit the upper bound
    } else if attr_match(p, "attr_temperature_celsius") && raw > 50 && raw <= 120 {
        raise(WarningLevel::Notice, TEMP_NOTICE);
    } else if attr_match(p, "attr_temperature_celsius_x10") && raw > 500 {
        raise(WarningLevel::Notice, TEMP_NOTICE);
    } else if attr_match(p, "attr_reallocation_event_count") && raw > 0 {
        raise(WarningLevel::Notice, SURFACE_NOTICE);
    } else if (attr_match(p, "attr_current_pending_sector_count")
        || attr_match(p, "attr_total_pending_sectors"))
        && raw > 0
    {
        raise(WarningLevel::Notice, SURFACE_NOTICE);
    } else if (attr_match(p, "attr_offline_uncorrectable")
        || attr_match(p, "attr_total_attr_offline_uncorrectable"))
        && raw > 0
    {
        raise(WarningLevel::Notice, SURFACE_NOTICE);
    } else if attr_match(p, "attr_ssd_life_left") && attr.value.is_some_and(|v| v < 50) {
        raise(WarningLevel::Notice, HALF_LIFE_NOTICE);
    } else if attr_match(p, "attr_ssd_life_used") && raw >= 50 {
        raise(WarningLevel::Notice, HALF_LIFE_NOTICE);
    }

    match attr.when_failed {
        FailTime::Now => {
            if attr.attr_type == AttributeType::OldAge {
                raise(
                    WarningLevel::Warning,
                    "The drive has a failing old-age attribute. Usually this indicates a wear-out. You should consider replacing the drive.",
                );
            } else {
                raise(
                    WarningLevel::Alert,
                    "The drive has a failing pre-fail attribute. Usually this indicates that the drive will FAIL soon. Please back up immediately!",
                );
            }
        }
        FailTime::Past => {
            if attr.attr_type == AttributeType::OldAge {
                // nothing, no point warning about e.g. a past temperature increase
            } else {
                raise(
                    WarningLevel::Warning,
                    "The drive had a failing pre-fail attribute, but it has been restored to a normal value. This may be a serious problem, you should consider replacing the drive.",
                );
            }
        }
        FailTime::None | FailTime::Unknown => {}
    }
}

/// Device statistics rules, matched on the reported statistic name
fn check_statistic(p: &Property, raise: &mut impl FnMut(WarningLevel, &str)) {
    let Some(st) = p.statistic() else {
        return;
    };
    let value = st.value_int;

    if name_match(p, "Pending Error Count") && value > 0 {
        raise(WarningLevel::Notice, STAT_SURFACE_NOTICE);
    } else if name_match(p, "Utilization Usage Rate") && value >= 100 {
        raise(WarningLevel::Warning, PAST_LIFE_WARNING);
    } else if name_match(p, "Utilization Usage Rate") && value >= 50 {
        raise(WarningLevel::Notice, HALF_LIFE_NOTICE);
    } else if name_match(p, "Number of Reallocated Logical Sectors") {
        if st.is_normalized() && value <= 0 {
            raise(WarningLevel::Warning, STAT_SURFACE_NOTICE);
        } else if !st.is_normalized() && value > 0 {
            raise(WarningLevel::Notice, STAT_SURFACE_NOTICE);
        }
    } else if name_match(p, "Number of Mechanical Start Failures") && value > 0 {
        raise(WarningLevel::Notice, "The drive is reporting mechanical errors.");
    } else if name_match(p, "Number of Realloc. Candidate Logical Sectors") && value > 0 {
        raise(WarningLevel::Notice, STAT_SURFACE_NOTICE);
    } else if name_match(p, "Number of Reported Uncorrectable Errors") && value > 0 {
        raise(WarningLevel::Notice, STAT_SURFACE_NOTICE);
    } else if name_match(p, "Current Temperature") && value > 50 {
        raise(WarningLevel::Notice, TEMP_NOTICE);
    } else if name_match(p, "Time in Over-Temperature") && value > 0 {
        raise(
            WarningLevel::Notice,
            "The temperature of the drive is or was over the manufacturer-specified maximum. \
            This may have shortened its lifespan and caused damage. Please install a cooling solution.",
        );
    } else if name_match(p, "Time in Under-Temperature") && value > 0 {
        raise(
            WarningLevel::Notice,
            "The temperature of the drive is or was under the manufacturer-specified minimum. \
            This may have shortened its lifespan and caused damage. Please operate the drive within manufacturer-specified temperature range.",
        );
    } else if name_match(p, "Percentage Used Endurance Indicator") && value >= 100 {
        raise(WarningLevel::Warning, PAST_LIFE_WARNING);
    } else if name_match(p, "Percentage Used Endurance Indicator") && value >= 50 {
        raise(WarningLevel::Notice, HALF_LIFE_NOTICE);
    }
}

/// Error log rules: error count, unsupported marker, and per-block severity
/// from the error-type hook
fn check_error_log(
    p: &Property,
    error_type_level: ErrorTypeLevel<'_>,
    raise: &mut impl FnMut(WarningLevel, &str),
) {
    if name_match(p, "ata_smart_error_log/extended/count") && p.as_int().is_some_and(|c| c > 0) {
        raise(
            WarningLevel::Notice,
            "The drive is reporting internal errors. Usually this means uncorrectable data loss and similar severe errors. \
            Check the actual errors for details.",
        );
    } else if name_match(p, "_text_only/ata_smart_error_log/_not_present") {
        raise(
            WarningLevel::Notice,
            "The drive does not support error logging. This means that SMART error history is unavailable.",
        );
    }

    if let Some(block) = p.error_block() {
        let block_level = block
            .reported_types
            .iter()
            .map(|t| error_type_level(t))
            .max()
            .unwrap_or(WarningLevel::None);
        if block_level > WarningLevel::None {
            raise(
                block_level,
                "The drive is reporting internal errors. Your data may be at risk depending on error severity.",
            );
        }
    }
}

/// Apply description and severity to a property in place: fill names and
/// description from the databases, rate it, then append the warning reason
/// to the description for UI display
pub(crate) fn classify(p: &mut Property, disk_class: DiskClass, error_type_level: ErrorTypeLevel<'_>) {
    db::fill_description(p, disk_class);
    assign_warning(p, error_type_level);
    if p.warning_level > WarningLevel::None
        && !p.warning_reason.is_empty()
        && !p.description.ends_with(&p.warning_reason)
    {
        let reason = p.warning_reason.clone();
        if !p.description.is_empty() {
            p.description.push_str("\n\n");
        }
        p.description.push_str(&reason);
    }
}
