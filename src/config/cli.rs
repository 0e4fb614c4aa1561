use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        // Joining with an absolute path yields the absolute path itself, so
        // CLI arguments pass through untouched when base_path is ".".
        let full_path = Path::new(&self.base_path).join(path);
        let contents = fs::read_to_string(full_path)?;
        Ok(contents)
    }
}
