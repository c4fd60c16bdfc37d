//! Path utilities: expand ~ in user supplied paths.

use crate::errors::AppResult;
use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute form of a `--db` argument: `~` expanded, relative paths
/// taken from the current directory.
pub fn resolve_db_path(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(env::current_dir()?.join(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("/tmp/a.db"), PathBuf::from("/tmp/a.db"));
        assert_eq!(expand_tilde("rel/a.db"), PathBuf::from("rel/a.db"));
    }

    #[test]
    fn db_path_is_made_absolute() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_db_path("rel/a.db").unwrap(), cwd.join("rel/a.db"));
        assert_eq!(
            resolve_db_path("/tmp/a.db").unwrap(),
            PathBuf::from("/tmp/a.db")
        );
    }
}
