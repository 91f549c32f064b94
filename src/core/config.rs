use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::PageNumber;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub first_page_number: PageNumber,  // Number given to the first page of a book
    pub min_prefix_len: usize,          // Shorter prefixes return no words
}

impl Default for Config {
    fn default() -> Self {
        Config {
            first_page_number: 1,
            min_prefix_len: 1,
        }
    }
}

impl Config {
    /// Parse a config from JSON. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_prefix_len == 0 {
            return Err(Error::new(
                ErrorKind::InvalidConfig,
                "min_prefix_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
