pub mod stores;

use crate::prelude::{AppError, Contact, HashMap, uuid::Uuid};
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

pub const DEFAULT_JSON_PATH: &str = "./.instance/contacts.json";

pub trait ContactStore: Send {
    fn load(&self) -> Result<HashMap<Uuid, Contact>, AppError>;

    fn save(&self, contacts: &HashMap<Uuid, Contact>) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Mem,
    Json,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(format!(
                "Not a recognized storage medium: '{}'",
                str
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    json_path: &str,
) -> Result<Box<dyn ContactStore>, AppError> {
    match medium {
        StorageMediums::Json => Ok(Box::new(stores::JsonStorage::new(json_path))),
        StorageMediums::Mem => Ok(Box::new(stores::MemStorage::new())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
