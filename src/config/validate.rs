// src/config/validate.rs

use crate::config::duration::parse_duration;
use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, WaveformError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = WaveformError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.tool, raw.job))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_tool(cfg)?;
    validate_jobs(cfg)?;
    Ok(())
}

fn validate_tool(cfg: &RawConfigFile) -> Result<()> {
    if let Some(ref path) = cfg.tool.path {
        if path.as_os_str().is_empty() {
            return Err(WaveformError::ConfigError(
                "[tool].path must not be empty".to_string(),
            ));
        }
    }

    if let Some(ref timeout) = cfg.tool.timeout {
        parse_duration(timeout).map_err(|e| {
            WaveformError::ConfigError(format!("[tool].timeout is invalid: {e}"))
        })?;
    }

    Ok(())
}

// Empty paths would only surface as MissingRequiredField at run time.
fn validate_jobs(cfg: &RawConfigFile) -> Result<()> {
    for (name, job) in cfg.job.iter() {
        if job.input.as_os_str().is_empty() {
            return Err(WaveformError::ConfigError(format!(
                "job '{}' has an empty `input` path",
                name
            )));
        }
        if job.output.as_os_str().is_empty() {
            return Err(WaveformError::ConfigError(format!(
                "job '{}' has an empty `output` path",
                name
            )));
        }
    }
    Ok(())
}
