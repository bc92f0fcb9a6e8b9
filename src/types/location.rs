//! The wire shape of district and school lookup results.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of a district or school option list.
///
/// The lookup endpoints serialize records as `{"pk": …, "name": …}`. The
/// primary key arrives as a JSON number from the upstream service but as a
/// string when echoed back from form values, so both are accepted.
///
/// Options are ephemeral: a fetched list lives only as long as the
/// currently selected parent field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    /// The record's primary key, normalized to its string form.
    #[serde(rename = "pk", deserialize_with = "deserialize_pk")]
    pub id: String,

    /// Human-readable display label.
    pub name: String,
}

impl LocationOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        LocationOption {
            id: id.into(),
            name: name.into(),
        }
    }
}

fn deserialize_pk<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Pk {
        Number(u64),
        Text(String),
    }

    Ok(match Pk::deserialize(deserializer)? {
        Pk::Number(n) => n.to_string(),
        Pk::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_pk() {
        let parsed: Vec<LocationOption> =
            serde_json::from_str(r#"[{"pk": 205, "name": "Košice I"}]"#).unwrap();
        assert_eq!(parsed, vec![LocationOption::new("205", "Košice I")]);
    }

    #[test]
    fn decodes_string_pk() {
        let parsed: LocationOption =
            serde_json::from_str(r#"{"pk": "901", "name": "Zahraničie"}"#).unwrap();
        assert_eq!(parsed, LocationOption::new("901", "Zahraničie"));
    }

    #[test]
    fn rejects_missing_name() {
        let result: Result<LocationOption, _> = serde_json::from_str(r#"{"pk": 1}"#);
        assert!(result.is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn roundtrip_preserves_id_and_name(
                id in "[0-9]{1,6}",
                name in "[a-zA-Z áéíóúČŠŽ]{1,40}"
            ) {
                let option = LocationOption::new(&id, &name);
                let json = serde_json::to_string(&option).unwrap();
                let parsed: LocationOption = serde_json::from_str(&json).unwrap();
                prop_assert_eq!(option, parsed);
            }
        }
    }
}
