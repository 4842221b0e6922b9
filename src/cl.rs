//! Command line interface

use std::path::PathBuf;

use clap::Parser;

use crate::property::DiskClass;

/// Smartscope command line arguments
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Args {
    /// Level of logging output (TRACE, DEBUG, INFO, WARN, ERROR).
    #[arg(short, default_value_t = log::Level::Info)]
    pub verbosity: log::Level,

    /// Device class (any, hdd, ssd), used to pick vendor-specific
    /// attribute interpretations
    #[arg(short = 'd', long, default_value_t = DiskClass::Any)]
    pub device_class: DiskClass,

    /// Print properties as JSON instead of a plain report
    #[arg(long)]
    pub json: bool,

    /// Saved smartctl output to interpret, stdin if omitted
    pub input: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_class_values() {
        let args = Args::parse_from(["smartscope", "-d", "ssd", "out.txt"]);
        assert_eq!(args.device_class, DiskClass::Ssd);
        assert_eq!(args.input, Some(PathBuf::from("out.txt")));
        assert!(!args.json);

        let args = Args::parse_from(["smartscope"]);
        assert_eq!(args.device_class, DiskClass::Any);
        assert_eq!(args.input, None);
    }
}
