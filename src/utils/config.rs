/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;

/// Gets a string environment variable, treating an empty or blank value as unset
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or blank
pub fn get_env_non_empty(env_var: &str, default: &str) -> String {
    non_empty_or(env::var(env_var).ok(), default)
}

pub(crate) fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}
