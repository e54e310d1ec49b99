// Copyright 2024 Irreducible Inc.

use std::env::{self, VarError};

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
	#[error("environment variable {name} is not valid unicode")]
	NotUnicode { name: String },
	#[error("environment variable {name}={value} is not a valid unsigned integer")]
	NotAnInteger { name: String, value: String },
}

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

/// Read an unsigned integer from the environment variable.
///
/// Returns `Ok(None)` when the variable is unset.
pub fn usize_env_var(name: &str) -> Result<Option<usize>, EnvError> {
	u64_env_var(name)?
		.map(|value| {
			usize::try_from(value).map_err(|_| EnvError::NotAnInteger {
				name: name.to_string(),
				value: value.to_string(),
			})
		})
		.transpose()
}

/// Read a 64-bit unsigned integer from the environment variable.
///
/// Returns `Ok(None)` when the variable is unset.
pub fn u64_env_var(name: &str) -> Result<Option<u64>, EnvError> {
	match env::var(name) {
		Ok(value) => value
			.trim()
			.parse::<u64>()
			.map(Some)
			.map_err(|_| EnvError::NotAnInteger {
				name: name.to_string(),
				value,
			}),
		Err(VarError::NotPresent) => Ok(None),
		Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
			name: name.to_string(),
		}),
	}
}
