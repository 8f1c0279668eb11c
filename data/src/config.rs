use crate::Result;
use crate::error::{ConfigError, DataError};
use derive_getters::Getters;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// API identity for one marketplace account.
///
/// Both fields are guaranteed non-empty; there is no way to build one
/// otherwise.
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct Credentials {
    id: String,
    key: String,
}

impl Credentials {
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let key = key.into();
        if id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "id" }.into());
        }
        if key.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "key" }.into());
        }
        Ok(Self { id, key })
    }

    /// Load the entry for `service` from a TOML credentials store.
    pub fn from_toml(service: &str, path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::from_toml_str(service, &content)
    }

    pub fn from_toml_str(service: &str, content: &str) -> Result<Self> {
        let mut store: toml::Table = toml::from_str(content)?;
        let entry = store
            .remove(service)
            .ok_or_else(|| {
                DataError::Config(ConfigError::ServiceNotFound {
                    name: service.to_string(),
                })
            })?;
        let raw: RawCredentials = entry.try_into()?;

        let id = raw.id.ok_or(ConfigError::MissingField { field: "id" })?;
        let key = raw.key.ok_or(ConfigError::MissingField { field: "key" })?;
        Self::new(id.to_string(), key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("key", &"<redacted>")
            .finish()
    }
}

/// One service table of the store. Account ids are numeric on the
/// marketplace side, so both `id = 123` and `id = "123"` are accepted.
#[derive(Deserialize)]
struct RawCredentials {
    id: Option<AccountId>,
    key: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AccountId {
    Text(String),
    Number(i64),
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountId::Text(s) => f.write_str(s),
            AccountId::Number(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const PATH: &'static str = "../test/auth.toml";

    #[test]
    fn test_read_credentials_from_toml() {
        let nicehash = Credentials::from_toml("nicehash", PATH);
        let numeric = Credentials::from_toml("nicehash_numeric", PATH);
        let missing = Credentials::from_toml("urmom", PATH);

        assert!(nicehash.is_ok());
        assert_eq!(numeric.unwrap().id(), "204512");
        assert!(matches!(
            missing,
            Err(DataError::Config(ConfigError::ServiceNotFound { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        let res = Credentials::from_toml("nicehash", "../test/does_not_exist.toml");
        assert!(matches!(res, Err(DataError::Config(ConfigError::Io(_)))));
    }

    #[test]
    fn test_empty_or_missing_fields_rejected() {
        let empty_key = Credentials::from_toml_str("nh", "[nh]\nid = \"1\"\nkey = \"\"\n");
        let no_id = Credentials::from_toml_str("nh", "[nh]\nkey = \"abc\"\n");

        assert!(matches!(
            empty_key,
            Err(DataError::Config(ConfigError::MissingField { field: "key" }))
        ));
        assert!(matches!(
            no_id,
            Err(DataError::Config(ConfigError::MissingField { field: "id" }))
        ));
        assert!(Credentials::new("  ", "abc").is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let creds = Credentials::new("42", "very-secret").unwrap();
        let shown = format!("{creds:?}");
        assert!(shown.contains("42"));
        assert!(!shown.contains("very-secret"));
    }
}
