use super::*;

/// Starter records for an empty book, so a fresh instance has something to search.
const SEED_CONTACTS: &[(&str, &str, Option<&str>, bool)] = &[
    ("Amara", "Okafor", Some("@amara_o"), true),
    ("Bilal", "Haddad", None, false),
    ("Chen", "Wei", Some("@chenwei"), false),
    ("Dolores", "Smith", None, false),
    ("Emeka", "Nwosu", Some("@emeka"), true),
    ("Freya", "Lindqvist", None, false),
    ("Gustavo", "Smithers", None, false),
    ("Hana", "Kobayashi", Some("@hana_k"), false),
];

pub fn seed_contacts() -> Vec<Contact> {
    SEED_CONTACTS
        .iter()
        .map(|&(first, last, twitter, favorite)| {
            let mut contact = Contact::named(first, last);
            contact.twitter = twitter.map(str::to_string);
            contact.favorite = favorite;
            contact
        })
        .collect()
}
