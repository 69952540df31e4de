use std::path::PathBuf;

use crate::types::DropRecord;

/// Local JSON cache of recently fetched and created drops.
pub struct DropStore {
    drops: Vec<DropRecord>,
}

impl DropStore {
    pub fn new(drops: Vec<DropRecord>) -> Self {
        let mut store = Self { drops: Vec::new() };
        store.add(drops);
        store
    }

    pub async fn load() -> Result<Self, String> {
        let content = async_fs::read_to_string(Self::cache_path())
            .await
            .map_err(|e| e.to_string())?;
        let drops: Vec<DropRecord> = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self::new(drops))
    }

    /// Like [`DropStore::load`], but a missing or unreadable cache is empty.
    pub async fn load_or_default() -> Self {
        Self::load().await.unwrap_or_else(|_| Self::new(Vec::new()))
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.drops).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Adds drops not cached yet and returns how many were new.
    ///
    /// Rows are kept newest first, matching the order the backend lists them.
    pub fn add(&mut self, drops: Vec<DropRecord>) -> usize {
        let before = self.drops.len();
        for record in drops {
            if !self.drops.iter().any(|d| d.id == record.id) {
                self.drops.push(record);
            }
        }
        self.drops.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.drops.len() - before
    }

    pub fn replace(&mut self, drops: Vec<DropRecord>) {
        self.drops.clear();
        self.add(drops);
    }

    pub fn all(&self) -> &[DropRecord] {
        &self.drops
    }

    pub fn count(&self) -> usize {
        self.drops.len()
    }

    fn cache_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mooddrop/cache/drops.json");
        path
    }
}
