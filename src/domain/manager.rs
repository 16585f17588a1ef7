use super::*;

use super::contact::{Contact, ContactUpdate};
use super::search::search_contacts;
use tracing::{debug, info, warn};

pub struct ContactManager {
    pub mem: HashMap<Uuid, Contact>,
    pub storage: Box<dyn ContactStore>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut manager = Self {
            mem: HashMap::new(),
            storage,
        };
        manager.load()?;

        info!(
            medium = manager.storage.get_medium(),
            contacts = manager.mem.len(),
            "contact store loaded"
        );
        Ok(manager)
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    /// Every contact when `query` is absent or blank, otherwise those whose
    /// name contains it (case-insensitive). Always in the same stable order.
    pub fn list(&self, query: Option<&str>) -> Vec<Contact> {
        search_contacts(self.mem.values(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &Uuid) -> Result<Contact, AppError> {
        self.mem
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))
    }

    pub fn create(&mut self) -> Result<Contact, AppError> {
        let contact = Contact::empty();
        let id = contact.id;
        self.mem.insert(id, contact.clone());
        self.save_or_rollback(|mem| {
            mem.remove(&id);
        })?;

        debug!(id = %contact.id, "contact created");
        Ok(contact)
    }

    pub fn update(&mut self, id: &Uuid, update: ContactUpdate) -> Result<Contact, AppError> {
        let mut updated = self.get(id)?;
        updated.apply(update);
        updated.validate()?;

        let previous = self.mem.insert(updated.id, updated.clone());
        self.save_or_rollback(|mem| restore(mem, previous))?;

        debug!(id = %id, "contact updated");
        Ok(updated)
    }

    pub fn set_favorite(&mut self, id: &Uuid, favorite: bool) -> Result<Contact, AppError> {
        let mut contact = self.get(id)?;
        contact.favorite = favorite;
        contact.updated_at = Utc::now();

        let previous = self.mem.insert(contact.id, contact.clone());
        self.save_or_rollback(|mem| restore(mem, previous))?;

        debug!(id = %id, favorite, "contact favorite toggled");
        Ok(contact)
    }

    pub fn delete(&mut self, id: &Uuid) -> Result<(), AppError> {
        match self.mem.remove(id) {
            Some(removed) => {
                self.save_or_rollback(|mem| restore(mem, Some(removed)))?;
                debug!(id = %id, "contact deleted");
                Ok(())
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    /// Bulk insert, skipping ids already present.
    pub fn seed(&mut self, contacts: Vec<Contact>) -> Result<usize, AppError> {
        let mut added: Vec<Uuid> = Vec::new();
        for contact in contacts {
            if !self.mem.contains_key(&contact.id) {
                added.push(contact.id);
                self.mem.insert(contact.id, contact);
            }
        }
        let count = added.len();
        self.save_or_rollback(|mem| {
            for id in &added {
                mem.remove(id);
            }
        })?;

        info!(added = count, "contact store seeded");
        Ok(count)
    }

    /// Persists `mem`; when that fails, `rollback` undoes the pending change
    /// so memory keeps matching what was last saved.
    fn save_or_rollback<F>(&mut self, rollback: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut HashMap<Uuid, Contact>),
    {
        if let Err(e) = self.save() {
            rollback(&mut self.mem);
            warn!(error = %e, "save failed, change rolled back");
            return Err(e);
        }
        Ok(())
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }
}

fn restore(mem: &mut HashMap<Uuid, Contact>, previous: Option<Contact>) {
    if let Some(contact) = previous {
        mem.insert(contact.id, contact);
    }
}
