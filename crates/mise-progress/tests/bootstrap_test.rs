//! Engine wiring from a TOML config.

use mise_core::config::MiseConfig;
use mise_core::errors::MiseError;
use mise_core::models::{LessonId, ProgressStatus, UserId};
use mise_progress::open_from_config;

const CONFIG: &str = r#"
[progress]
warn_on_skipped_award = false

[[achievements]]
id = 1
title = "Italian Beginner"
cuisine_id = 1
threshold = 1

[[achievements]]
id = 2
title = "Italian Novice"
cuisine_id = 1
threshold = 3
"#;

#[test]
fn config_rule_table_drives_unlocks() {
    let config = MiseConfig::from_toml_str(CONFIG).unwrap();
    let (storage, engine) = open_from_config(&config).unwrap();
    assert!(!engine.config().warn_on_skipped_award);

    storage
        .install_curriculum(&test_fixtures::italian_french_curriculum())
        .unwrap();
    storage.create_user(UserId(1)).unwrap();

    let outcome = engine
        .submit_progress(UserId(1), LessonId(100), ProgressStatus::Completed, None)
        .unwrap();
    assert_eq!(outcome.unlocked.len(), 1);
    assert_eq!(engine.achievements_for_user(UserId(1)).unwrap().len(), 2);
}

#[test]
fn file_backed_config_opens_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("mise.db");
    let toml = format!(
        "[storage]\ndb_path = {:?}\nread_pool_size = 2\n{CONFIG}",
        db_path.to_string_lossy()
    );
    let config = MiseConfig::from_toml_str(&toml).unwrap();
    let (storage, _engine) = open_from_config(&config).unwrap();
    assert_eq!(storage.pool().readers.size(), 2);
    assert!(db_path.exists());
}

#[test]
fn invalid_config_is_rejected_before_opening() {
    let mut config = MiseConfig::from_toml_str(CONFIG).unwrap();
    config.achievements[0].threshold = 0;
    let Err(err) = open_from_config(&config) else {
        panic!("zero threshold must be rejected");
    };
    assert!(matches!(err, MiseError::ConfigError { .. }));
}
