use movie_catalog::storage::{JsonStorage, Storage};
use movie_catalog::ui::Console;
use movie_catalog::{run, CatalogError, Config, Movie, Session};
use std::io::Cursor;
use std::path::PathBuf;

#[test]
fn missing_data_file_starts_empty_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path().join("nested/dir/data.json")).unwrap();
    let (session, warning) = Session::open(&storage);

    assert!(session.collection().is_empty());
    assert_eq!(warning, None);
    assert!(dir.path().join("nested/dir").is_dir());
}

#[test]
fn corrupt_data_file_starts_empty_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "{ not json").unwrap();

    let (session, warning) = Session::open(&JsonStorage::new(path).unwrap());
    assert!(session.collection().is_empty());
    assert!(warning.unwrap().contains("starting with an empty catalog"));
}

#[test]
fn legacy_array_file_loads_and_is_rewritten_versioned() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "6f1c2b1e-4d0e-4c8a-9a51-0f5a0e3c1d11", "title": "Heat", "director": "Michael Mann",
             "screenwriter": "Michael Mann", "duration": 170, "year_released": 1995},
            {"id": "not-a-uuid", "title": "Broken", "director": "x", "screenwriter": "y",
             "duration": 100, "year_released": 2000}
        ]"#,
    )
    .unwrap();

    let mut storage = JsonStorage::new(path.clone()).unwrap();
    let (mut session, warning) = Session::open(&storage);
    assert_eq!(warning, None);
    assert_eq!(session.collection().len(), 1);
    assert_eq!(session.collection().all()[0].title(), "Heat");

    let mut console = Console::new(Cursor::new("2\nheat\n\n6\n"), Vec::new());
    run(&mut session, &mut storage, &mut console).unwrap();
    session.persist(&mut storage).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["version"], 1);
    assert_eq!(saved["movies"][0]["id"], "6f1c2b1e-4d0e-4c8a-9a51-0f5a0e3c1d11");
    assert_eq!(saved["movies"][0]["duration"], 170);
}

#[test]
fn mistyped_record_is_skipped_and_the_rest_survives_the_next_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "6f1c2b1e-4d0e-4c8a-9a51-0f5a0e3c1d11", "title": "Heat", "director": "Michael Mann",
             "screenwriter": "Michael Mann", "duration": 170, "year_released": 1995},
            {"id": "7a2d3c4e-5f60-4a71-8b92-a3b4c5d6e7f8", "title": "Ronin", "director": "John Frankenheimer",
             "screenwriter": "J. D. Zeik", "duration": "122", "year_released": 1998}
        ]"#,
    )
    .unwrap();

    let mut storage = JsonStorage::new(path.clone()).unwrap();
    let (mut session, warning) = Session::open(&storage);
    assert_eq!(warning, None);
    assert_eq!(session.collection().len(), 1);

    let script = "4\nAlien\nRidley Scott\nDan O'Bannon\n117\n1979\n\n6\n";
    let mut console = Console::new(Cursor::new(script), Vec::new());
    run(&mut session, &mut storage, &mut console).unwrap();

    let titles: Vec<String> = storage
        .load()
        .unwrap()
        .iter()
        .map(|m| m.title().to_string())
        .collect();
    assert_eq!(titles, ["Heat", "Alien"]);
}

#[test]
fn newer_storage_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"version": 99, "movies": []}"#).unwrap();

    let err = JsonStorage::new(path).unwrap().load().unwrap_err();
    assert!(matches!(err, CatalogError::Storage(_)));
}

/// Fails the first save, then behaves.
#[derive(Default)]
struct FlakyStorage {
    attempts: usize,
    saved: Vec<Movie>,
}

impl Storage for FlakyStorage {
    fn load(&self) -> movie_catalog::Result<Vec<Movie>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, movies: &[Movie]) -> movie_catalog::Result<()> {
        self.attempts += 1;
        if self.attempts == 1 {
            return Err(
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into(),
            );
        }
        self.saved = movies.to_vec();
        Ok(())
    }
}

#[test]
fn failed_save_is_reported_and_retried_on_exit() {
    let mut storage = FlakyStorage::default();
    let (mut session, _) = Session::open(&storage);

    let script = "4\nHeat\nMichael Mann\nMichael Mann\n170\n1995\n\n6\n";
    let mut console = Console::new(Cursor::new(script), Vec::new());
    run(&mut session, &mut storage, &mut console).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert!(output
        .contains("Movie \"Heat\" was added!\nWarning: Changes are kept for this session"));
    assert!(output.ends_with("Goodbye!\nCatalog saved.\n"));
    assert_eq!(storage.attempts, 2);
    assert_eq!(storage.saved.len(), 1);
}

#[test]
fn config_file_then_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "data_file = \"/srv/movies.json\"\ntrace_level = \"debug\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.data_file, PathBuf::from("/srv/movies.json"));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.trace_file, None);

    let config = config.with_overrides(Some("other.json"), None);
    assert_eq!(config.data_file, PathBuf::from("other.json"));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
}

#[test]
fn bad_config_files_are_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");

    assert!(matches!(Config::from_file(&path), Err(CatalogError::Config(_))));

    std::fs::write(&path, "data_file = 42\n").unwrap();
    assert!(matches!(Config::from_file(&path), Err(CatalogError::Config(_))));

    std::fs::write(&path, "colour = \"red\"\n").unwrap();
    assert!(matches!(Config::from_file(&path), Err(CatalogError::Config(_))));

    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}
