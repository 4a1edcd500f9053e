pub mod consts;

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use directories::ProjectDirs;

pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PROJECT_NAME: &str = "kollect";

pub const CLI_PROGRAM_NAME: &str = "kollect";
pub const CLI_CONFIG_NAME: &str = "config.yaml";

pub static PROJECT_CONFIG_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    ProjectDirs::from("", PROJECT_NAME, PROJECT_NAME)
        .map_or_else(|| fallback_project_config_directories().remove(0), |dirs| {
            dirs.config_dir().to_path_buf()
        })
});

/// Directories searched for the configuration file after
/// [`PROJECT_CONFIG_DIR`], in order.
#[must_use]
pub fn fallback_project_config_directories() -> Vec<PathBuf> {
    let home = directories::UserDirs::new()
        .map_or_else(|| PathBuf::from("."), |user_dirs| user_dirs.home_dir().to_path_buf());
    vec![
        [home.as_path(), Path::new(".config"), Path::new(PROJECT_NAME)].iter().collect(),
        [home.as_path(), Path::new(&format!(".{PROJECT_NAME}"))].iter().collect(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_directories_end_with_project_name() {
        let dirs = fallback_project_config_directories();
        assert_eq!(dirs.len(), 2);
        assert!(dirs[0].ends_with(Path::new(".config").join(PROJECT_NAME)));
        assert!(dirs[1].ends_with(format!(".{PROJECT_NAME}")));
    }
}
