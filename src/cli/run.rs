use crate::prelude::{
    AppError, AppState, ContactManager, StorageMediums, command::Cli, seed::seed_contacts,
    storage, web,
};
use tracing::info;

pub fn build_state(cli: &Cli) -> Result<AppState, AppError> {
    let medium = StorageMediums::from(&cli.storage_choice)?;
    let storage = storage::parse_storage_type(medium, &cli.json_path)?;

    let mut manager = ContactManager::new(storage)?;
    if cli.seed && manager.is_empty() {
        manager.seed(seed_contacts())?;
    }

    info!(
        storage = medium.is_which(),
        contacts = manager.len(),
        "contact book ready"
    );
    Ok(AppState::new(manager))
}

pub async fn run_app(cli: Cli) -> Result<(), AppError> {
    let state = build_state(&cli)?;
    let app = web::router(state);

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn seeds_empty_mem_book() -> Result<(), AppError> {
        let cli = Cli::try_parse_from(["rolodex-web", "--storage-choice", "mem", "--seed"])
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let state = build_state(&cli)?;
        assert_eq!(state.manager()?.len(), seed_contacts().len());
        Ok(())
    }

    #[test]
    fn unknown_storage_choice_fails() {
        let cli = Cli::try_parse_from(["rolodex-web", "--storage-choice", "txt"])
            .expect("storage choice is free text");

        assert!(matches!(build_state(&cli), Err(AppError::Validation(_))));
    }
}
