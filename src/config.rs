use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Sidebar defaults applied when the matching CLI flag is absent. This is
/// the only thing the app ever writes to disk; drill results never are.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub sport: String,
    pub setting: String,
    pub week: u32,
    pub session: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sport: "basketball".to_string(),
            setting: "indoor".to_string(),
            week: 1,
            session: 1,
        }
    }
}

impl From<&crate::session::SessionContext> for Config {
    fn from(ctx: &crate::session::SessionContext) -> Self {
        Self {
            sport: ctx.sport.to_string().to_lowercase(),
            setting: ctx.setting.to_string().to_lowercase(),
            week: ctx.week,
            session: ctx.session,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "reps") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("reps_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Sport;
    use crate::session::{Readiness, SessionContext, Setting};
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            sport: "track".into(),
            setting: "outdoor".into(),
            week: 6,
            session: 3,
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn unparseable_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, b"not json").unwrap();
        let store = FileConfigStore::with_path(&path);
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn config_from_session_context() {
        let ctx = SessionContext {
            sport: Sport::GeneralWorkout,
            setting: Setting::Combination,
            week: 4,
            session: 2,
            readiness: Readiness::default(),
        };
        let cfg = Config::from(&ctx);
        assert_eq!(cfg.sport, "general workout");
        assert_eq!(cfg.setting, "combination");
        assert_eq!(cfg.week, 4);
        assert_eq!(cfg.session, 2);

        // The lowercased display name must resolve back to the same sport.
        assert_eq!(Sport::from_name(&cfg.sport), Some(Sport::GeneralWorkout));
        assert_eq!(Setting::from_name(&cfg.setting), Some(Setting::Combination));
    }
}
