//! YAML scenario files.
//!
//! Every field is optional; missing ones take the lecture defaults.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{SimError, SimResult};

pub fn from_yaml_str<T: DeserializeOwned>(text: &str) -> SimResult<T> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> SimResult<T> {
    let text = std::fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = from_yaml_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded scenario config");
    Ok(cfg)
}
