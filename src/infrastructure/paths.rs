//! Path helpers for locating the data, config and trace files.

use std::path::{Path, PathBuf};

/// Data file used when nothing else is configured, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Trace file name, placed next to the data file unless configured otherwise.
pub const TRACE_FILE_NAME: &str = "movie-catalog-otlp.json";

/// Expands a leading `~` to the value of `$HOME`.
///
/// Paths without a tilde, and every path when `$HOME` is unset, are returned as-is.
///
/// # Examples
///
/// ```
/// use movie_catalog::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, std::env::var_os("HOME").map(PathBuf::from))
}

fn expand_tilde_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Directory holding `data_file`, or `.` for a bare file name.
#[must_use]
pub fn data_dir(data_file: &Path) -> PathBuf {
    data_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Default trace file location for a given data file.
#[must_use]
pub fn default_trace_file(data_file: &Path) -> PathBuf {
    data_dir(data_file).join(TRACE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        let home = Some(PathBuf::from("/home/ana"));
        assert_eq!(expand_tilde_with("~", home.clone()), PathBuf::from("/home/ana"));
        assert_eq!(
            expand_tilde_with("~/movies/data.json", home.clone()),
            PathBuf::from("/home/ana/movies/data.json")
        );
        assert_eq!(expand_tilde_with("~other/x", home), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("~/x", None), PathBuf::from("~/x"));
    }

    #[test]
    fn trace_file_sits_next_to_data_file() {
        assert_eq!(
            default_trace_file(Path::new("/var/lib/catalog/data.json")),
            PathBuf::from("/var/lib/catalog/movie-catalog-otlp.json")
        );
        assert_eq!(
            default_trace_file(Path::new("data.json")),
            PathBuf::from("./movie-catalog-otlp.json")
        );
    }
}
