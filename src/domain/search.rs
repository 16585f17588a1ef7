use std::cmp::Ordering;

use crate::prelude::Contact;

/// Lowercased, trimmed query; `None` when there is nothing to filter on.
pub fn normalize_query(query: Option<&str>) -> Option<String> {
    query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty())
}

/// `needle` must already be lowercased.
pub fn matches_query(contact: &Contact, needle: &str) -> bool {
    // First and last are checked on their own as well as joined, so a query
    // spanning the space ("ada l") still finds "Ada Lovelace".
    contact
        .first
        .iter()
        .chain(contact.last.iter())
        .any(|name| name.to_lowercase().contains(needle))
        || contact.full_name().to_lowercase().contains(needle)
}

/// Last name (missing ones first), then creation time, then id.
pub fn compare_contacts(a: &Contact, b: &Contact) -> Ordering {
    let last_a = a.last.as_deref().map(str::to_lowercase);
    let last_b = b.last.as_deref().map(str::to_lowercase);

    last_a
        .cmp(&last_b)
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn search_contacts<'a, I>(contacts: I, query: Option<&str>) -> Vec<&'a Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let needle = normalize_query(query);

    let mut result: Vec<&Contact> = contacts
        .into_iter()
        .filter(|c| needle.as_deref().is_none_or(|n| matches_query(c, n)))
        .collect();

    result.sort_by(|a, b| compare_contacts(a, b));
    result
}
