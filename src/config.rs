use std::collections::HashMap;
use std::fs;

pub const DEFAULT_STALE_THRESHOLD_HOURS: i64 = 24;

#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if (value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\''))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn write_config(name: &str, contents: &str) -> String {
        let path = env::temp_dir().join(format!(
            "meeting_launcher_cfg_{}_{}.env",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn parses_keys_quotes_and_export_prefix() {
        let path = write_config(
            "full",
            "# comment\n\
             export MEETINGS_FILE=\"/tmp/meetings.csv\"\n\
             STALE_THRESHOLD_HOURS = 6\n\
             REFRESH_SCRIPT='refresh.sh'\n",
        );
        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(
            config.get("MEETINGS_FILE").as_deref(),
            Some("/tmp/meetings.csv")
        );
        assert_eq!(config.get("STALE_THRESHOLD_HOURS").as_deref(), Some("6"));
        assert_eq!(config.get("REFRESH_SCRIPT").as_deref(), Some("refresh.sh"));
        assert_eq!(config.get("REFRESH_ENTRY_POINT"), None);
        fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_lines_without_separator() {
        let path = write_config("invalid", "MEETINGS_FILE\n");
        assert!(AppConfig::from_file(&path).is_err());
        fs::remove_file(path).ok();
    }
}
