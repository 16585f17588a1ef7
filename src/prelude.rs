pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactUpdate},
    manager::ContactManager,
    search, seed,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, StorageMediums, stores};
pub use crate::web::{self, AppState};
pub use std::collections::HashMap;
pub use uuid;
