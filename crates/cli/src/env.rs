use crate::error::CliError;
use std::{collections::HashMap, fmt::Display, fs, path::Path, str::FromStr};

/// Environment variables from the process, optionally overlaid with a
/// `.env` file.
#[derive(Debug, Clone)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Load variables from a .env file. File values override the process
    /// environment.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Parses a variable, or returns `None` when it is unset.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(key)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|e| CliError::Config(format!("Invalid {key} value '{raw}': {e}")))
            })
            .transpose()
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars.insert(key.to_string(), Self::unquote_value(value));
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                return value[1..value.len() - 1].to_string();
            }
        }

        value.to_string()
    }
}

impl Default for EnvManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) fn env_from(pairs: &[(&str, &str)]) -> EnvManager {
    EnvManager {
        vars: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic_env() {
        let mut env = env_from(&[]);
        let content = r#"
# Comment
STOREFRONT_PORT=8080
STOREFRONT_SEED=./items.json
        "#;

        env.parse_env_content(content).unwrap();
        assert_eq!(env.get("STOREFRONT_PORT"), Some("8080"));
        assert_eq!(env.get("STOREFRONT_SEED"), Some("./items.json"));
    }

    #[test]
    fn test_parse_quoted_values() {
        let mut env = env_from(&[]);
        let content = r#"
QUOTED="value with spaces"
SINGLE='single quoted'
UNQUOTED=no_spaces
        "#;

        env.parse_env_content(content).unwrap();
        assert_eq!(env.get("QUOTED"), Some("value with spaces"));
        assert_eq!(env.get("SINGLE"), Some("single quoted"));
        assert_eq!(env.get("UNQUOTED"), Some("no_spaces"));
    }

    #[test]
    fn test_invalid_env_format() {
        let mut env = env_from(&[]);
        assert!(env.parse_env_content("INVALID LINE WITHOUT EQUALS").is_err());
        assert!(env.parse_env_content("=value").is_err());
    }

    #[test]
    fn test_get_parsed() {
        let env = env_from(&[("STOREFRONT_PAGE_SIZE", "6"), ("STOREFRONT_PORT", "high")]);
        assert_eq!(env.get_parsed::<usize>("STOREFRONT_PAGE_SIZE").unwrap(), Some(6));
        assert_eq!(env.get_parsed::<u16>("MISSING").unwrap(), None);
        assert!(env.get_parsed::<u16>("STOREFRONT_PORT").is_err());
    }

    #[test]
    fn test_file_overrides_process_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "STOREFRONT_PORT=9000").unwrap();

        let mut env = env_from(&[("STOREFRONT_PORT", "3000")]);
        env.load_from_file(file.path()).unwrap();
        assert_eq!(env.get("STOREFRONT_PORT"), Some("9000"));
    }
}
