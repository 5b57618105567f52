//! Command and non-interactive option tokens

use std::fmt;
use std::str::FromStr;

use crate::{OdmError, OdmResult};

/// Top-level commands, named by the literal typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OdmCommand {
    Information,
    Download,
    Return,
    Libby,
    LibbyReturn,
    LibbyRenew,
}

impl OdmCommand {
    /// Every command, in declaration order
    pub const ALL: [OdmCommand; 6] = [
        OdmCommand::Information,
        OdmCommand::Download,
        OdmCommand::Return,
        OdmCommand::Libby,
        OdmCommand::LibbyReturn,
        OdmCommand::LibbyRenew,
    ];

    /// Canonical command literal (e.g. "dl")
    pub fn as_str(&self) -> &'static str {
        match self {
            OdmCommand::Information => "info",
            OdmCommand::Download => "dl",
            OdmCommand::Return => "ret",
            OdmCommand::Libby => "libby",
            OdmCommand::LibbyReturn => "libbyreturn",
            OdmCommand::LibbyRenew => "libbyrenew",
        }
    }
}

impl fmt::Display for OdmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OdmCommand {
    type Err = OdmError;

    fn from_str(s: &str) -> OdmResult<Self> {
        OdmCommand::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| {
                tracing::debug!(value = s, "unknown command");
                OdmError::invalid_argument(format!(
                    "\"{}\" is not a valid command (choose from {})",
                    s,
                    choices(OdmCommand::ALL.iter().map(OdmCommand::as_str))
                ))
            })
    }
}

/// Keys of the settings that let the tool run without prompting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoninteractiveOption {
    DownloadLatestN,
    DownloadSelectedN,
    DownloadSelectedId,
    ExportLoans,
    ExportCards,
    Check,
}

impl NoninteractiveOption {
    /// Every option, in declaration order
    pub const ALL: [NoninteractiveOption; 6] = [
        NoninteractiveOption::DownloadLatestN,
        NoninteractiveOption::DownloadSelectedN,
        NoninteractiveOption::DownloadSelectedId,
        NoninteractiveOption::ExportLoans,
        NoninteractiveOption::ExportCards,
        NoninteractiveOption::Check,
    ];

    /// Canonical option key (e.g. "download_latest_n")
    pub fn as_str(&self) -> &'static str {
        match self {
            NoninteractiveOption::DownloadLatestN => "download_latest_n",
            NoninteractiveOption::DownloadSelectedN => "selected_loans_indices",
            NoninteractiveOption::DownloadSelectedId => "selected_loans_ids",
            NoninteractiveOption::ExportLoans => "export_loans_path",
            NoninteractiveOption::ExportCards => "export_cards_path",
            NoninteractiveOption::Check => "check_signed_in",
        }
    }
}

impl fmt::Display for NoninteractiveOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoninteractiveOption {
    type Err = OdmError;

    fn from_str(s: &str) -> OdmResult<Self> {
        NoninteractiveOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| {
                tracing::debug!(value = s, "unknown non-interactive option");
                OdmError::invalid_argument(format!(
                    "\"{}\" is not a valid non-interactive option (choose from {})",
                    s,
                    choices(NoninteractiveOption::ALL.iter().map(NoninteractiveOption::as_str))
                ))
            })
    }
}

fn choices<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.map(|v| format!("'{}'", v)).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_displays_canonical_value() {
        assert_eq!(OdmCommand::Download.to_string(), "dl");
        assert_eq!(format!("{}", OdmCommand::LibbyRenew), "libbyrenew");
        assert_ne!(OdmCommand::Download.to_string(), "Download");
    }

    #[test]
    fn test_command_round_trip() {
        for command in OdmCommand::ALL {
            let parsed: OdmCommand = command.as_str().parse().unwrap();
            assert_eq!(parsed, command);
            assert_eq!(parsed.to_string(), command.as_str());
        }
    }

    #[test]
    fn test_option_round_trip() {
        for option in NoninteractiveOption::ALL {
            let parsed: NoninteractiveOption = option.as_str().parse().unwrap();
            assert_eq!(parsed, option);
            assert_eq!(parsed.to_string(), option.as_str());
        }
    }

    #[test]
    fn test_option_values() {
        assert_eq!(NoninteractiveOption::DownloadSelectedN.as_str(), "selected_loans_indices");
        assert_eq!(NoninteractiveOption::Check.to_string(), "check_signed_in");
    }

    #[test]
    fn test_unknown_command_rejected() {
        let err = "Download".parse::<OdmCommand>().unwrap_err();
        assert!(matches!(err, OdmError::InvalidArgument(_)));
        assert!(err.message().starts_with("\"Download\" is not a valid command"));
        assert!(err.message().contains("'dl'"));
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert!("".parse::<NoninteractiveOption>().is_err());
        assert!("CHECK_SIGNED_IN".parse::<NoninteractiveOption>().is_err());
    }
}
