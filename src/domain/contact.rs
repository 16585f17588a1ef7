use super::*;
pub use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

pub const NO_NAME: &str = "No Name";

// May begin with @, then 1 to 15 word characters
static TWITTER_HANDLE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^@?\w{1,15}$"));

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,

    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,

    #[serde(default)]
    pub favorite: bool,

    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
}

/// Field changes submitted by the edit form.
///
/// `None` leaves a field untouched, an empty (or all-whitespace) string clears it.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ContactUpdate {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
}

pub struct ValidationReq;

impl ValidationReq {
    pub fn avatar_req() -> String {
        "Avatar must be an absolute http or https URL".to_string()
    }

    pub fn twitter_req() -> String {
        "Twitter handle may begin with @ and must be 1 to 15 letters, digits or underscores"
            .to_string()
    }
}

impl Contact {
    /// A record with a fresh id and nothing else filled in.
    pub fn empty() -> Self {
        let now = Utc::now();
        Contact {
            id: Uuid::new_v4(),
            first: None,
            last: None,
            favorite: false,
            avatar: None,
            twitter: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn named(first: &str, last: &str) -> Self {
        let mut contact = Contact::empty();
        contact.first = normalize(first);
        contact.last = normalize(last);
        contact
    }

    pub fn has_name(&self) -> bool {
        self.first.is_some() || self.last.is_some()
    }

    pub fn full_name(&self) -> String {
        let first = self.first.as_deref().unwrap_or_default();
        let last = self.last.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    }

    pub fn display_name(&self) -> String {
        if self.has_name() {
            self.full_name()
        } else {
            NO_NAME.to_string()
        }
    }

    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(first) = update.first {
            self.first = normalize(&first);
        }
        if let Some(last) = update.last {
            self.last = normalize(&last);
        }
        if let Some(avatar) = update.avatar {
            self.avatar = normalize(&avatar);
        }
        if let Some(twitter) = update.twitter {
            self.twitter = normalize(&twitter);
        }
        if let Some(notes) = update.notes {
            self.notes = normalize(&notes);
        }
        self.updated_at = Utc::now();
    }

    pub fn validate_avatar(&self) -> bool {
        // Absent avatar is fine
        // Otherwise it must parse as an absolute http(s) URL
        match &self.avatar {
            None => true,
            Some(avatar) => Url::parse(avatar)
                .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
                .unwrap_or(false),
        }
    }

    pub fn validate_twitter(&self) -> Result<bool, AppError> {
        let re = TWITTER_HANDLE.as_ref().map_err(|e| AppError::Regex(e.clone()))?;
        Ok(self.twitter.as_deref().is_none_or(|handle| re.is_match(handle)))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.validate_avatar() {
            return Err(AppError::Validation(ValidationReq::avatar_req()));
        }
        if !self.validate_twitter()? {
            return Err(AppError::Validation(ValidationReq::twitter_req()));
        }
        Ok(())
    }
}

/// Ids come in as raw path segments; anything that is not a UUID cannot name a record.
pub fn parse_contact_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound("Contact".to_string()))
}

fn normalize(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}
