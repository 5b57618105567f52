//! Settings that let the Libby workflow run without prompting

use std::path::PathBuf;

use crate::cli::NoninteractiveOption;

/// Non-interactive configuration handed to the rest of the application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoninteractiveSettings {
    pub download_latest_n: Option<u64>,
    pub selected_loans_indices: Vec<u64>,
    pub selected_loans_ids: Vec<String>,
    pub export_loans_path: Option<PathBuf>,
    pub export_cards_path: Option<PathBuf>,
    pub check_signed_in: bool,
}

impl NoninteractiveSettings {
    /// True when at least one option is set
    pub fn is_noninteractive(&self) -> bool {
        NoninteractiveOption::ALL.iter().any(|option| self.get(*option).is_some())
    }

    /// Textual value of one option, `None` when unset. Lists are comma-joined.
    pub fn get(&self, option: NoninteractiveOption) -> Option<String> {
        match option {
            NoninteractiveOption::DownloadLatestN => self.download_latest_n.map(|n| n.to_string()),
            NoninteractiveOption::DownloadSelectedN => {
                non_empty(self.selected_loans_indices.iter().map(u64::to_string).collect())
            }
            NoninteractiveOption::DownloadSelectedId => non_empty(self.selected_loans_ids.clone()),
            NoninteractiveOption::ExportLoans => {
                self.export_loans_path.as_ref().map(|p| p.display().to_string())
            }
            NoninteractiveOption::ExportCards => {
                self.export_cards_path.as_ref().map(|p| p.display().to_string())
            }
            NoninteractiveOption::Check => self.check_signed_in.then(|| "true".to_string()),
        }
    }

    /// Every set option with its value, in option declaration order
    pub fn entries(&self) -> Vec<(NoninteractiveOption, String)> {
        NoninteractiveOption::ALL
            .into_iter()
            .filter_map(|option| self.get(option).map(|value| (option, value)))
            .collect()
    }
}

fn non_empty(values: Vec<String>) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_interactive() {
        let settings = NoninteractiveSettings::default();
        assert!(!settings.is_noninteractive());
        assert!(settings.entries().is_empty());
    }

    #[test]
    fn test_latest_n() {
        let settings = NoninteractiveSettings {
            download_latest_n: Some(3),
            ..Default::default()
        };
        assert!(settings.is_noninteractive());
        assert_eq!(
            settings.entries(),
            vec![(NoninteractiveOption::DownloadLatestN, "3".to_string())]
        );
    }

    #[test]
    fn test_lists_are_joined() {
        let settings = NoninteractiveSettings {
            selected_loans_indices: vec![1, 4],
            selected_loans_ids: vec!["1234".to_string(), "5678".to_string()],
            ..Default::default()
        };
        assert_eq!(settings.get(NoninteractiveOption::DownloadSelectedN).as_deref(), Some("1,4"));
        assert_eq!(
            settings.get(NoninteractiveOption::DownloadSelectedId).as_deref(),
            Some("1234,5678")
        );
        assert_eq!(settings.get(NoninteractiveOption::DownloadLatestN), None);
    }

    #[test]
    fn test_entries_follow_option_order() {
        let settings = NoninteractiveSettings {
            check_signed_in: true,
            export_loans_path: Some(PathBuf::from("loans.json")),
            ..Default::default()
        };
        let keys: Vec<_> = settings.entries().into_iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["export_loans_path", "check_signed_in"]);
    }
}
