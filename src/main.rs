//! Interpret saved smartctl output: typed SMART properties, descriptions
//! and health warnings

use std::{
    fs,
    io::{Read as _, Write as _},
    path::Path,
};

use anyhow::Context as _;
use clap::Parser as _;
use itertools::Itertools as _;

mod cl;
mod db;
mod parser;
mod property;
mod severity;
#[cfg(test)]
mod tests;
mod units;

use crate::property::{Property, WarningLevel, error_type_level};

/// Read the smartctl output to interpret, from a file or stdin
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// One line of the plain report for a property, None if it has nothing
/// single-line to show (merged text dumps live in the JSON output only)
fn report_line(p: &Property) -> Option<String> {
    if !p.show_in_ui {
        return None;
    }
    let value = if p.readable_value.is_empty() {
        p.value.to_string()
    } else {
        p.readable_value.clone()
    };
    if value.contains('\n') {
        return None;
    }
    let marker = match p.warning_level {
        WarningLevel::None => String::new(),
        level => format!("  [{level}]"),
    };
    let mut line = format!("  {}: {}{}", p.label(), value, marker);
    if p.warning_level > WarningLevel::None && !p.warning_reason.is_empty() {
        line.push_str(&format!("\n      {}", p.warning_reason));
    }
    Some(line)
}

/// Print the per-section report
fn print_report(out: &mut impl std::io::Write, properties: &[Property]) -> anyhow::Result<()> {
    for (section, props) in &properties.iter().chunk_by(|p| p.section) {
        let lines: Vec<_> = props.filter_map(report_line).collect();
        if lines.is_empty() {
            continue;
        }
        writeln!(out, "{section}")?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Parse cl args
    let args = cl::Args::parse();

    // Init logger
    simple_logger::init_with_level(args.verbosity).context("Failed to init logger")?;

    let text = read_input(args.input.as_deref())?;
    let outcome = parser::parse(&text).context("Failed to parse smartctl output")?;

    let mut properties = outcome.properties;
    for p in &mut properties {
        severity::classify(p, args.device_class, &error_type_level);
    }
    if !outcome.diagnostics.is_empty() {
        log::info!(
            "{} subsection(s) could not be fully parsed",
            outcome.diagnostics.len()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &properties)
            .context("Failed to serialize properties")?;
        writeln!(&mut out)?;
    } else {
        print_report(&mut out, &properties)?;
    }
    Ok(())
}

#[cfg(test)]
mod main_tests {
    use std::io::Write as _;

    use super::*;
    use crate::{
        property::{DiskClass, PropertyValue},
        tests::SMARTCTL_X_HDD,
    };

    #[test]
    fn input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMARTCTL_X_HDD.as_bytes()).unwrap();
        let text = read_input(Some(file.path())).unwrap();
        assert_eq!(text, SMARTCTL_X_HDD);
        assert!(read_input(Some(Path::new("/nonexistent/smartctl.txt"))).is_err());
    }

    #[test]
    fn classified_full_output() {
        let outcome = parser::parse(SMARTCTL_X_HDD).unwrap();
        let mut properties = outcome.properties;
        for p in &mut properties {
            severity::classify(p, DiskClass::Hdd, &error_type_level);
        }

        // healthy drive: nothing raised
        assert!(
            properties
                .iter()
                .all(|p| p.warning_level == WarningLevel::None),
            "unexpected warning: {:?}",
            properties
                .iter()
                .find(|p| p.warning_level > WarningLevel::None)
                .map(|p| (&p.reported_name, p.warning_level, &p.warning_reason))
        );

        // descriptions got attached from the database
        let realloc = properties
            .iter()
            .find(|p| p.generic_name == "attr_reallocated_sector_count")
            .unwrap();
        assert_eq!(realloc.displayable_name, "Reallocated Sector Count");
        assert!(realloc.description.contains("reallocated sectors"));
    }

    #[test]
    fn failing_prefail_attribute_alerts() {
        let text = "smartctl 7.0 2018-12-30 r4883 [x86_64-linux] (local build)\n\
            \n\
            === START OF READ SMART DATA SECTION ===\n\
            SMART Attributes Data Structure revision number: 16\n\
            Vendor Specific SMART Attributes with Thresholds:\n\
            ID# ATTRIBUTE_NAME          FLAG     VALUE WORST THRESH TYPE      UPDATED  WHEN_FAILED RAW_VALUE\n\
            \x20 5 Reallocated_Sector_Ct   0x0033   100   100   010    Pre-fail  Always   FAILING_NOW       42\n";
        let outcome = parser::parse(text).unwrap();
        let mut properties = outcome.properties;
        for p in &mut properties {
            severity::classify(p, DiskClass::Any, &error_type_level);
        }
        let attr = properties
            .iter()
            .find(|p| p.generic_name == "attr_reallocated_sector_count")
            .unwrap();
        assert_eq!(attr.warning_level, WarningLevel::Alert);
        let entry = attr.attribute().unwrap();
        assert_eq!(entry.id, 5);
        assert_eq!(entry.threshold, Some(10));
        assert_eq!(entry.raw_value_int, 42);
    }

    #[test]
    fn ssd_override_stays_quiet() {
        let text = "smartctl 7.0 2018-12-30 r4883 [x86_64-linux] (local build)\n\
            \n\
            === START OF READ SMART DATA SECTION ===\n\
            SMART Attributes Data Structure revision number: 16\n\
            Vendor Specific SMART Attributes with Thresholds:\n\
            ID# ATTRIBUTE_NAME          FLAG     VALUE WORST THRESH TYPE      UPDATED  WHEN_FAILED RAW_VALUE\n\
            \x20 5 Retired_Block_Count     0x0033   099   099   010    Pre-fail  Always       -       3\n";
        let outcome = parser::parse(text).unwrap();
        let mut properties = outcome.properties;
        for p in &mut properties {
            severity::classify(p, DiskClass::Ssd, &error_type_level);
        }
        let attr = properties
            .iter()
            .find(|p| p.generic_name == "attr_ssd_life_left")
            .unwrap();
        assert_eq!(attr.displayable_name, "Retired Block Rate");
        // raw > 0 means nothing for this interpretation, normalized 99 is healthy
        assert_eq!(attr.warning_level, WarningLevel::None);
    }

    #[test]
    fn report_rendering() {
        let outcome = parser::parse(SMARTCTL_X_HDD).unwrap();
        let mut properties = outcome.properties;
        for p in &mut properties {
            severity::classify(p, DiskClass::Hdd, &error_type_level);
        }
        let mut rendered = Vec::new();
        print_report(&mut rendered, &properties).unwrap();
        let rendered = String::from_utf8(rendered).unwrap();
        assert!(rendered.contains("Information"));
        assert!(rendered.contains("Device Model"));
        // merged text dumps stay out of the plain report
        assert!(!rendered.contains("ATTRIBUTE_NAME"));
    }

    #[test]
    fn error_log_end_to_end() {
        let text = "smartctl 7.0 2018-12-30 r4883 [x86_64-linux] (local build)\n\
            \n\
            === START OF READ SMART DATA SECTION ===\n\
            SMART Error Log Version: 1\n\
            ATA Error Count: 2\n\
            \n\
            Error 2 occurred at disk power-on lifetime: 14799 hours (616 days + 15 hours)\n\
            \x20 When the command that caused the error occurred, the device was active or idle.\n\
            \n\
            \x20 After command completion occurred, registers were:\n\
            \x20 ER ST SC SN CL CH DH\n\
            \x20 -- -- -- -- -- -- --\n\
            \x20 84 51 2c 71 cd 3f e6  Error: ICRC, ABRT 44 sectors at LBA = 0x063fcd71 = 104844657\n\
            \n\
            Error 1 occurred at disk power-on lifetime: 14795 hours (616 days + 11 hours)\n\
            \x20 When the command that caused the error occurred, the device was active or idle.\n\
            \n\
            \x20 After command completion occurred, registers were:\n\
            \x20 ER ST SC SN CL CH DH\n\
            \x20 -- -- -- -- -- -- --\n\
            \x20 40 51 00 f5 41 61 e0  Error: UNC at LBA = 0x006141f5 = 6373877\n";
        let outcome = parser::parse(text).unwrap();
        let mut properties = outcome.properties;
        for p in &mut properties {
            severity::classify(p, DiskClass::Any, &error_type_level);
        }

        let count = properties
            .iter()
            .find(|p| p.generic_name == "ata_smart_error_log/extended/count")
            .unwrap();
        assert!(matches!(count.value, PropertyValue::Integer(2)));
        assert_eq!(count.warning_level, WarningLevel::Notice);

        let blocks: Vec<_> = properties
            .iter()
            .filter(|p| p.error_block().is_some())
            .collect();
        assert_eq!(blocks.len(), 2);
        // ICRC is a warning, UNC an alert
        assert_eq!(blocks.first().unwrap().warning_level, WarningLevel::Warning);
        assert_eq!(blocks.get(1).unwrap().warning_level, WarningLevel::Alert);
        assert!(
            blocks
                .first()
                .unwrap()
                .description
                .contains("Interface CRC error")
        );
    }
}
