use common::model::form::FormFields;
use common::model::upload::UploadResponse;

use crate::upload::UploadError;

#[derive(Clone)]
pub enum Msg {
    FilesSelected(Vec<web_sys::File>),
    DragEnter,
    DragLeave,
    FilesDropped(Vec<web_sys::File>),
    FieldInput(FormField, String),
    Submit,
    SubmissionFinished {
        id: u64,
        outcome: Result<UploadResponse, UploadError>,
    },
    Restart,
}

/// The six inputs of the upload form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Campo1,
    Campo2,
    Campo3,
    Campo4,
    Campo5,
    Campo6,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Campo1,
        FormField::Campo2,
        FormField::Campo3,
        FormField::Campo4,
        FormField::Campo5,
        FormField::Campo6,
    ];

    pub fn name(self) -> &'static str {
        FormFields::NAMES[self as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Campo1 => "Propuesta",
            FormField::Campo2 => "Comisión",
            FormField::Campo3 => "Actividad",
            FormField::Campo4 => "Período lectivo",
            FormField::Campo5 => "Fecha de regularidad",
            FormField::Campo6 => "Fecha de promoción",
        }
    }

    /// `campo5` and `campo6` go through the `DD/MM/YYYY` mask.
    pub fn is_date(self) -> bool {
        matches!(self, FormField::Campo5 | FormField::Campo6)
    }

    pub fn value(self, fields: &FormFields) -> &str {
        match self {
            FormField::Campo1 => &fields.campo1,
            FormField::Campo2 => &fields.campo2,
            FormField::Campo3 => &fields.campo3,
            FormField::Campo4 => &fields.campo4,
            FormField::Campo5 => &fields.campo5,
            FormField::Campo6 => &fields.campo6,
        }
    }

    pub fn value_mut(self, fields: &mut FormFields) -> &mut String {
        match self {
            FormField::Campo1 => &mut fields.campo1,
            FormField::Campo2 => &mut fields.campo2,
            FormField::Campo3 => &mut fields.campo3,
            FormField::Campo4 => &mut fields.campo4,
            FormField::Campo5 => &mut fields.campo5,
            FormField::Campo6 => &mut fields.campo6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_follow_wire_order() {
        let names: Vec<_> = FormField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, FormFields::NAMES);
    }

    #[test]
    fn value_mut_targets_matching_member() {
        let mut fields = FormFields::default();
        *FormField::Campo5.value_mut(&mut fields) = "01/02".into();
        assert_eq!(fields.campo5, "01/02");
        assert_eq!(FormField::Campo5.value(&fields), "01/02");
        assert!(FormField::Campo6.is_date());
        assert!(!FormField::Campo4.is_date());
    }
}
