//! Client-side extension check for the selected spreadsheet.

use common::config::ALLOWED_EXTENSIONS;

use super::texts::INVALID_FORMAT;

/// Outcome of checking one file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Accept { file_name: String, extension: String },
    Reject { reason: String },
}

/// Checks file names against a closed allow-list of extensions.
#[derive(Clone, Debug)]
pub struct FileValidator {
    allowed: &'static [&'static str],
}

impl Default for FileValidator {
    fn default() -> Self {
        Self {
            allowed: &ALLOWED_EXTENSIONS,
        }
    }
}

impl FileValidator {
    pub fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }

    /// Accepts `file_name` when the text after its last `.` (case-insensitive)
    /// is in the allow-list. A name without a dot is judged on the whole name.
    pub fn validate(&self, file_name: &str) -> Validation {
        let extension = extension_of(file_name);
        if self.allowed.contains(&extension.as_str()) {
            Validation::Accept {
                file_name: file_name.to_string(),
                extension,
            }
        } else {
            Validation::Reject {
                reason: INVALID_FORMAT.to_string(),
            }
        }
    }
}

/// Lower-cased text after the last `.`; the whole name if there is none.
pub fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(_, ext)| ext)
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_spreadsheet_extensions_in_any_case() {
        let validator = FileValidator::default();
        for name in ["notas.xls", "notas.xlsx", "NOTAS.XLS", "Notas.XlSx", "a.b.xlsx"] {
            assert!(
                matches!(validator.validate(name), Validation::Accept { .. }),
                "{name} should be accepted"
            );
        }
    }

    #[test]
    fn accept_reports_lower_cased_extension() {
        assert_eq!(
            FileValidator::default().validate("Planilla.XLSX"),
            Validation::Accept {
                file_name: "Planilla.XLSX".into(),
                extension: "xlsx".into()
            }
        );
    }

    #[test]
    fn rejects_other_and_missing_extensions() {
        let validator = FileValidator::default();
        for name in ["report.pdf", "noext", "trailing.", "notas.xlsx.csv", ""] {
            assert_eq!(
                validator.validate(name),
                Validation::Reject {
                    reason: INVALID_FORMAT.to_string()
                },
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn bare_name_equal_to_extension_is_accepted() {
        assert!(matches!(
            FileValidator::default().validate("XLSX"),
            Validation::Accept { .. }
        ));
    }

    #[test]
    fn extension_of_name_without_dot_is_whole_name() {
        assert_eq!(extension_of("NoExt"), "noext");
        assert_eq!(extension_of("archivo."), "");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn any_stem_with_allowed_extension_is_accepted(
                stem in "[a-zA-Z0-9 _.-]{0,24}",
                ext in prop::sample::select(vec!["xls", "xlsx", "XLS", "XLSX", "Xls", "xLsX"]),
            ) {
                let name = format!("{stem}.{ext}");
                let accepted = matches!(FileValidator::default().validate(&name), Validation::Accept { .. });
                prop_assert!(accepted);
            }

            #[test]
            fn names_without_dot_are_rejected(name in "[a-zA-Z0-9 _-]{0,24}") {
                prop_assume!(!ALLOWED_EXTENSIONS.contains(&name.to_lowercase().as_str()));
                let rejected = matches!(FileValidator::default().validate(&name), Validation::Reject { .. });
                prop_assert!(rejected);
            }
        }
    }
}
