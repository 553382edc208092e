//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use crate::settings::ENV_HOME;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|s| !s.is_empty())
    }

    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = self.var(ENV_HOME) {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }

        let config_base = self
            .var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| self.var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::config("HOME is not set"))?;

        let mut path = config_base;
        path.push("gemtools");
        Ok(HomeDir::new(path))
    }

    fn exe_dir(&self) -> Result<PathBuf, Error> {
        let exe = env::current_exe()
            .map_err(|e| Error::system(format!("Failed to locate executable: {}", e)))?;
        exe.parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| Error::system(format!("Executable has no parent: {}", exe.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exe_dir_exists() {
        let dir = StdEnvResolver.exe_dir().unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_var_missing() {
        assert_eq!(StdEnvResolver.var("GEMTOOLS_SURELY_UNSET_VARIABLE"), None);
    }
}
