//! Test fixture loader for Mise curriculum, achievement, and scenario datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

use mise_core::models::{AchievementDefinition, Curriculum};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Two cuisines (Italian = 1, French = 2), three skills, and eight lessons.
/// Lesson 900 points at skill 99, which does not exist.
pub fn italian_french_curriculum() -> Curriculum {
    load_fixture("curriculum/italian_french.json")
}

/// Italian Beginner (1 lesson), Italian Novice (3 lessons), French Beginner (1 lesson).
pub fn cuisine_milestones() -> Vec<AchievementDefinition> {
    load_fixture("achievements/cuisine_milestones.json")
}

/// One submission in a scripted scenario, with the expected state afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioStep {
    pub lesson_id: i64,
    pub status: String,
    pub score: Option<i32>,
    pub expect_xp: u64,
    pub expect_unlocked: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub user_id: i64,
    pub steps: Vec<ScenarioStep>,
}

pub fn submission_scenario() -> Scenario {
    load_fixture("scenarios/submission_sequences.json")
}
