pub mod contact;
pub mod manager;
pub mod search;
pub mod seed;

use crate::prelude::{AppError, ContactStore, HashMap, uuid::Uuid};
use chrono::Utc;

pub use contact::{Contact, ContactUpdate};
pub use manager::ContactManager;
