use super::AppState;
use crate::prelude::{AppError, Contact, ContactUpdate, contact::parse_contact_id};
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

pub const QUERY_PARAM: &str = "query";
pub const CONTACT_ID_PARAM: &str = "contactId";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    pub favorite: Option<String>,
}

/// A contact as the sidebar and detail pane see it.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactView {
    #[serde(flatten)]
    pub contact: Contact,
    pub display_name: String,
}

impl From<Contact> for ContactView {
    fn from(contact: Contact) -> Self {
        let display_name = contact.display_name();
        Self {
            contact,
            display_name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactsPage {
    pub contacts: Vec<ContactView>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactPage {
    pub contact: ContactView,
}

/// Path params arrive as a map so an absent id is reported by us, not by the router.
pub fn required_param<'a>(
    params: &'a HashMap<String, String>,
    name: &str,
) -> Result<&'a str, AppError> {
    params
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::MissingParameter(name.to_string()))
}

pub fn edit_location(contact: &Contact) -> String {
    format!("/contacts/{}/edit", contact.id)
}

pub fn contact_location(contact: &Contact) -> String {
    format!("/contacts/{}", contact.id)
}

// GET /
pub async fn root_loader(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ContactsPage>, AppError> {
    let query = params.query.clone();
    let contacts = state
        .with_manager(move |m| Ok(m.list(query.as_deref())))
        .await?;

    Ok(Json(ContactsPage {
        contacts: contacts.into_iter().map(ContactView::from).collect(),
        query: params.query,
    }))
}

// POST /
pub async fn create_action(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let contact = state.with_manager(|m| m.create()).await?;

    info!(id = %contact.id, "new contact");
    Ok(Redirect::to(&edit_location(&contact)))
}

// GET /contacts/:contactId and /contacts/:contactId/edit
pub async fn contact_loader(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<ContactPage>, AppError> {
    let id = parse_contact_id(required_param(&params, CONTACT_ID_PARAM)?)?;
    let contact = state.with_manager(move |m| m.get(&id)).await?;

    Ok(Json(ContactPage {
        contact: contact.into(),
    }))
}

// POST /contacts/:contactId/edit
pub async fn edit_action(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    Form(update): Form<ContactUpdate>,
) -> Result<Redirect, AppError> {
    let id = parse_contact_id(required_param(&params, CONTACT_ID_PARAM)?)?;
    let contact = state.with_manager(move |m| m.update(&id, update)).await?;

    info!(id = %contact.id, "contact saved");
    Ok(Redirect::to(&contact_location(&contact)))
}

// POST /contacts/:contactId
pub async fn favorite_action(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
    Form(form): Form<FavoriteForm>,
) -> Result<Json<ContactPage>, AppError> {
    let id = parse_contact_id(required_param(&params, CONTACT_ID_PARAM)?)?;
    let favorite = form.favorite.as_deref() == Some("true");
    let contact = state
        .with_manager(move |m| m.set_favorite(&id, favorite))
        .await?;

    Ok(Json(ContactPage {
        contact: contact.into(),
    }))
}

// POST /contacts/:contactId/destroy
pub async fn destroy_action(
    State(state): State<AppState>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let raw_id = required_param(&params, CONTACT_ID_PARAM)?;
    let id = parse_contact_id(raw_id)?;
    state.with_manager(move |m| m.delete(&id)).await?;

    info!(id = %id, "contact destroyed");
    Ok(Redirect::to("/"))
}
