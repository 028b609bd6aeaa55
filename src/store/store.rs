use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::disc::Disc;
use crate::utils::errors::CaddyError;

use super::preset::CoursePreset;
use super::seed::{seed_discs, seed_presets};

const COURSES_KEY: &str = "saved_courses";
const DISCS_KEY: &str = "my_discs";

/// JSON-backed store for course presets and the disc inventory.
///
/// Each keyed collection is one document in the store directory. Loads fall
/// back to the seed data when a document is missing or does not decode, so a
/// first launch and a corrupted file look identical to callers; only saves
/// surface errors.
#[derive(Debug, Clone)]
pub struct PresetStore {
    root: PathBuf,
}

impl PresetStore {
    /// Store rooted under the platform data directory.
    pub fn open_default() -> Result<Self, CaddyError> {
        let base = dirs::data_dir()
            .ok_or_else(|| CaddyError::StoreError("no platform data directory".to_string()))?;
        Self::open(base.join("hyzer"))
    }

    /// Store rooted at an explicit directory, created if absent.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, CaddyError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Saved courses, or the seed presets when nothing valid is stored.
    pub fn load_courses(&self) -> Vec<CoursePreset> {
        self.load_or(COURSES_KEY, seed_presets)
    }

    pub fn save_courses(&self, courses: &[CoursePreset]) -> Result<(), CaddyError> {
        self.save(COURSES_KEY, &courses)
    }

    /// Upsert one course by id and persist the collection. Returns the
    /// collection as saved.
    pub fn save_course(&self, course: CoursePreset) -> Result<Vec<CoursePreset>, CaddyError> {
        let mut courses = self.load_courses();
        match courses.iter_mut().find(|existing| existing.id == course.id) {
            Some(existing) => *existing = course,
            None => courses.push(course),
        }
        self.save_courses(&courses)?;
        Ok(courses)
    }

    /// Remove a course by id and persist the collection. Returns the
    /// collection as saved.
    pub fn delete_course(&self, id: Uuid) -> Result<Vec<CoursePreset>, CaddyError> {
        let mut courses = self.load_courses();
        courses.retain(|course| course.id != id);
        self.save_courses(&courses)?;
        Ok(courses)
    }

    /// Saved inventory, or the starter bag when nothing valid is stored.
    pub fn load_discs(&self) -> Vec<Disc> {
        self.load_or(DISCS_KEY, seed_discs)
    }

    pub fn save_discs(&self, discs: &[Disc]) -> Result<(), CaddyError> {
        self.save(DISCS_KEY, &discs)
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn load_or<T, F>(&self, key: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match fs::read_to_string(self.document_path(key)) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| fallback()),
            Err(_) => fallback(),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CaddyError> {
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.document_path(key), raw)?;
        Ok(())
    }
}
