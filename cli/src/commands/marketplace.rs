use super::MarketplaceCommand;
use crate::config::limits::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::error::{AppError, AppResult};
use server::marketplace::{MarketplaceClient, MarketplaceConfig};
use server::model::Extension;

/// Run one marketplace lookup and map the results to [`Extension`] records.
pub async fn run(
    command: MarketplaceCommand,
    config: &MarketplaceConfig,
) -> AppResult<Vec<Extension>> {
    let client = MarketplaceClient::from_config(config);

    let results = match command {
        MarketplaceCommand::Updated { page, page_size } => {
            let page_size = page_size.unwrap_or_else(|| config.page_size());
            if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
                return Err(AppError::invalid_input(
                    "--page-size",
                    format!("{page_size} is outside {MIN_PAGE_SIZE}..={MAX_PAGE_SIZE}"),
                ));
            }
            if page == 0 {
                return Err(AppError::invalid_input("--page", "pages start at 1"));
            }
            client.query_updated_extensions(page, page_size).await?
        }
        MarketplaceCommand::Id { id } => client.query_extension_id(&id).await?,
        MarketplaceCommand::Slug { slug } => client.query_extension_slug(&slug).await?,
    };

    log::info!("Fetched {} extensions from {}", results.len(), client.endpoint());
    Ok(results.iter().map(Extension::from).collect())
}
