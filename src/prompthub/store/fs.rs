use super::DataStore;
use crate::error::{HubError, Result};
use crate::model::Work;
use std::fs;
use std::path::{Path, PathBuf};

const WORKS_FILENAME: &str = "works.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn works_file(&self) -> PathBuf {
        self.root.join(WORKS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(HubError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<Vec<Work>> {
        let path = self.works_file();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(HubError::Io)?;
        let works: Vec<Work> = serde_json::from_str(&content).map_err(HubError::Serialization)?;
        tracing::debug!(count = works.len(), path = %path.display(), "loaded works");
        Ok(works)
    }

    fn save(&self, works: &[Work]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.works_file();
        let content = serde_json::to_string_pretty(works).map_err(HubError::Serialization)?;
        fs::write(&path, content).map_err(HubError::Io)?;
        tracing::debug!(count = works.len(), path = %path.display(), "saved works");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_work(&mut self, work: &Work) -> Result<()> {
        let mut works = self.load()?;
        match works.iter().position(|w| w.id == work.id) {
            Some(pos) => works[pos] = work.clone(),
            None => works.push(work.clone()),
        }
        self.save(&works)
    }

    fn get_work(&self, id: &str) -> Result<Work> {
        self.load()?
            .into_iter()
            .find(|w| w.id == id)
            .ok_or_else(|| HubError::WorkNotFound(id.to_string()))
    }

    fn list_works(&self) -> Result<Vec<Work>> {
        self.load()
    }

    fn delete_work(&mut self, id: &str) -> Result<()> {
        let mut works = self.load()?;
        let before = works.len();
        works.retain(|w| w.id != id);
        if works.len() == before {
            return Err(HubError::WorkNotFound(id.to_string()));
        }
        self.save(&works)
    }

    fn replace_all(&mut self, works: &[Work]) -> Result<()> {
        self.save(works)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_works;

    #[test]
    fn missing_file_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("not-yet"));
        assert!(store.list_works().unwrap().is_empty());
    }

    #[test]
    fn round_trips_in_store_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let works = sample_works();
        store.replace_all(&works).unwrap();

        let loaded = store.list_works().unwrap();
        assert_eq!(loaded, works);
        assert!(dir.path().join("works.json").exists());
    }

    #[test]
    fn save_replaces_existing_work() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.replace_all(&sample_works()).unwrap();

        let mut work = store.get_work("work-003").unwrap();
        work.likes = 1000;
        store.save_work(&work).unwrap();

        let loaded = store.list_works().unwrap();
        assert_eq!(loaded.len(), 12);
        assert_eq!(loaded[2].likes, 1000);
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.replace_all(&sample_works()).unwrap();

        store.delete_work("work-001").unwrap();
        assert_eq!(store.list_works().unwrap().len(), 11);
        assert!(matches!(
            store.delete_work("work-001"),
            Err(HubError::WorkNotFound(_))
        ));
    }
}
