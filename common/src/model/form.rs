use serde::{Deserialize, Deserializer, Serialize};

/// Values of the upload form, as sent in the multipart body.
///
/// `campo5` and `campo6` hold dates typed through the `DD/MM/YYYY` mask; the
/// client never validates them beyond the mask, the endpoint does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub campo1: String,
    pub campo2: String,
    pub campo3: String,
    pub campo4: String,
    pub campo5: String,
    pub campo6: String,
}

impl FormFields {
    /// Field names in the order they are appended to the multipart body.
    pub const NAMES: [&'static str; 6] = ["campo1", "campo2", "campo3", "campo4", "campo5", "campo6"];

    /// Returns `(name, value)` pairs in wire order.
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("campo1", self.campo1.as_str()),
            ("campo2", self.campo2.as_str()),
            ("campo3", self.campo3.as_str()),
            ("campo4", self.campo4.as_str()),
            ("campo5", self.campo5.as_str()),
            ("campo6", self.campo6.as_str()),
        ]
    }

    /// The subset of fields that survives a post-submission re-render.
    pub fn snapshot(&self) -> FormFieldSnapshot {
        FormFieldSnapshot {
            campo1: self.campo1.clone(),
            campo2: self.campo2.clone(),
            campo3: self.campo3.clone(),
            campo4: self.campo4.clone(),
        }
    }

    /// Overwrites the persisted subset, leaving the date fields untouched.
    pub fn apply_snapshot(&mut self, snapshot: &FormFieldSnapshot) {
        self.campo1 = snapshot.campo1.clone();
        self.campo2 = snapshot.campo2.clone();
        self.campo3 = snapshot.campo3.clone();
        self.campo4 = snapshot.campo4.clone();
    }
}

/// The four text fields kept in durable browser storage under `formValues`.
///
/// Serialized as a flat JSON object (`{"campo1": "...", ...}`). Missing or
/// `null` members read back as empty strings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFieldSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub campo1: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub campo2: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub campo3: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub campo4: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reads_missing_and_null_members_as_empty() {
        let snapshot: FormFieldSnapshot =
            serde_json::from_str(r#"{"campo1":"K1051","campo3":null}"#).unwrap();
        assert_eq!(snapshot.campo1, "K1051");
        assert_eq!(snapshot.campo2, "");
        assert_eq!(snapshot.campo3, "");
        assert_eq!(snapshot.campo4, "");
    }

    #[test]
    fn snapshot_serializes_as_flat_object() {
        let fields = FormFields {
            campo1: "a".into(),
            campo2: "b".into(),
            campo3: "c".into(),
            campo4: "d".into(),
            campo5: "01/02/2023".into(),
            campo6: String::new(),
        };
        let json = serde_json::to_value(fields.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"campo1": "a", "campo2": "b", "campo3": "c", "campo4": "d"})
        );
    }

    #[test]
    fn apply_snapshot_keeps_date_fields() {
        let mut fields = FormFields {
            campo5: "01/02/2023".into(),
            ..Default::default()
        };
        fields.apply_snapshot(&FormFieldSnapshot {
            campo1: "x".into(),
            ..Default::default()
        });
        assert_eq!(fields.campo1, "x");
        assert_eq!(fields.campo5, "01/02/2023");
        assert_eq!(fields.pairs()[4], ("campo5", "01/02/2023"));
    }
}
