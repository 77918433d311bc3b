use super::DataStore;
use crate::error::{HubError, Result};
use crate::model::Work;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    works: Vec<Work>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_works(works: Vec<Work>) -> Self {
        Self { works }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.works.iter().position(|w| w.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn save_work(&mut self, work: &Work) -> Result<()> {
        match self.position(&work.id) {
            Some(pos) => self.works[pos] = work.clone(),
            None => self.works.push(work.clone()),
        }
        Ok(())
    }

    fn get_work(&self, id: &str) -> Result<Work> {
        self.works
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| HubError::WorkNotFound(id.to_string()))
    }

    fn list_works(&self) -> Result<Vec<Work>> {
        Ok(self.works.clone())
    }

    fn delete_work(&mut self, id: &str) -> Result<()> {
        let pos = self
            .position(id)
            .ok_or_else(|| HubError::WorkNotFound(id.to_string()))?;
        self.works.remove(pos);
        Ok(())
    }

    fn replace_all(&mut self, works: &[Work]) -> Result<()> {
        self.works = works.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::ToolType;
    use crate::seed;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// The twelve sample works, in seed order.
        pub fn with_samples(mut self) -> Self {
            self.store.replace_all(&seed::sample_works()).unwrap();
            self
        }

        pub fn with_work(mut self, title: &str, tool: ToolType, likes: u32) -> Self {
            let author = seed::sample_users().remove(0);
            let mut work = Work::new(
                title.to_string(),
                vec!["image.png".to_string()],
                tool,
                format!("{}, test prompt", title.to_lowercase()),
                author,
            );
            work.likes = likes;
            self.store.save_work(&work).unwrap();
            self
        }
    }
}
