use super::*;

use serde_json::Value;
use tempfile::NamedTempFile;

pub struct JsonStorage {
    pub medium: String,
    pub path: String,
}

impl JsonStorage {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.to_string(),
        }
    }
}

/// Keeps nothing between runs; the manager's map is the only copy.
pub struct MemStorage {
    pub medium: String,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<HashMap<Uuid, Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            return Ok(HashMap::new());
        }
        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let value: Value = serde_json::from_str(&data)?;

        if value.is_object() {
            let contacts: HashMap<Uuid, Contact> = serde_json::from_value(value)?;
            Ok(contacts)
        } else if value.is_array() {
            // Plain list of records, keyed on the way in
            let contacts: Vec<Contact> = serde_json::from_value(value)?;

            let mapped_contacts = contacts
                .into_iter()
                .map(|cont| (cont.id, cont))
                .collect::<HashMap<Uuid, Contact>>();
            Ok(mapped_contacts)
        } else {
            Err(AppError::Validation(
                "Invalid JSON structure: expected object or array".to_string(),
            ))
        }
    }

    fn save(&self, contacts: &HashMap<Uuid, Contact>) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contact = serde_json::to_string_pretty(&contacts)?;

        // Write next to the target and rename over it, so a crash mid-write
        // never leaves a truncated contacts file behind.
        let dir = match Path::new(&self.path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json_contact.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<HashMap<Uuid, Contact>, AppError> {
        Ok(HashMap::new())
    }

    fn save(&self, _contacts: &HashMap<Uuid, Contact>) -> Result<(), AppError> {
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn json_path(dir: &TempDir) -> String {
        dir.path()
            .join(".instance")
            .join("contacts.json")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn missing_and_empty_files_load_as_empty() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let path = json_path(&dir);
        let storage = JsonStorage::new(&path);

        assert!(storage.load()?.is_empty());

        create_file_parent(&path)?;
        fs::write(&path, "  \n")?;
        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn json_round_trip_creates_parent_dirs() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = JsonStorage::new(&json_path(&dir));

        let contact = Contact::named("Uche", "Okafor");
        let mut contacts = HashMap::new();
        contacts.insert(contact.id, contact.clone());

        storage.save(&contacts)?;
        let loaded = storage.load()?;

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(&contact.id), Some(&contact));
        Ok(())
    }

    #[test]
    fn loads_list_of_records() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let path = json_path(&dir);
        let contact = Contact::named("Ada", "Lovelace");

        create_file_parent(&path)?;
        fs::write(&path, serde_json::to_string(&vec![contact.clone()])?)?;

        let loaded = JsonStorage::new(&path).load()?;
        assert_eq!(loaded.get(&contact.id), Some(&contact));
        Ok(())
    }

    #[test]
    fn rejects_scalar_json() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let path = json_path(&dir);

        create_file_parent(&path)?;
        fs::write(&path, "42")?;

        assert!(matches!(
            JsonStorage::new(&path).load(),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }

    #[test]
    fn mem_storage_starts_empty() -> Result<(), AppError> {
        let storage = MemStorage::default();
        assert!(storage.load()?.is_empty());
        assert_eq!(storage.get_medium(), "mem");
        Ok(())
    }

    #[test]
    fn save_replaces_file_without_leftovers() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let path = json_path(&dir);
        let storage = JsonStorage::new(&path);

        let first = Contact::named("Uche", "Okafor");
        let second = Contact::named("Ada", "Lovelace");
        let mut contacts = HashMap::new();
        contacts.insert(first.id, first.clone());
        storage.save(&contacts)?;

        contacts.remove(&first.id);
        contacts.insert(second.id, second.clone());
        storage.save(&contacts)?;

        let loaded = storage.load()?;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(&second.id), Some(&second));

        let parent = Path::new(&path).parent().expect("path has a parent");
        let entries: Vec<_> = fs::read_dir(parent)?.collect::<Result<_, _>>()?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name(), "contacts.json");
        Ok(())
    }

    #[test]
    fn failed_save_cleans_up_temp_file() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let target = dir.path().join("contacts.json");

        // A non-empty directory squatting on the target makes the final rename fail.
        fs::create_dir_all(target.join("inner"))?;
        let storage = JsonStorage::new(&target.to_string_lossy());

        let contact = Contact::named("Uche", "Okafor");
        let mut contacts = HashMap::new();
        contacts.insert(contact.id, contact);

        assert!(matches!(storage.save(&contacts), Err(AppError::Io(_))));

        let entries: Vec<_> = fs::read_dir(dir.path())?.collect::<Result<_, _>>()?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name(), "contacts.json");
        assert!(target.join("inner").is_dir());
        Ok(())
    }
}
