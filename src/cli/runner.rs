//! CLI runner - executes commands

use crate::catalog::{CatalogClient, Identified};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::pagination::{FetchOutcome, PaginatedCollection};
use serde::Serialize;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let catalog = CatalogClient::from_config(&self.load_config()?)?;

        match &self.cli.command {
            Commands::Characters { pages, start_page } => {
                let collection = catalog.character_collection().starting_at(*start_page);
                self.browse(collection, *pages).await
            }
            Commands::Planets { pages, start_page } => {
                let collection = catalog.planet_collection().starting_at(*start_page);
                self.browse(collection, *pages).await
            }
            Commands::Character { id } => {
                let character = catalog.characters().get_character_by_id(*id).await?;
                self.output(&character)
            }
            Commands::Planet { id } => {
                let planet = catalog.planets().get_planet_by_id(*id).await?;
                self.output(&planet)
            }
        }
    }

    /// Config file (or defaults), then environment, then flags
    pub(crate) fn load_config(&self) -> Result<CatalogConfig> {
        let config = match &self.cli.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };
        self.apply_flags(config.apply_env()?)
    }

    fn apply_flags(&self, mut config: CatalogConfig) -> Result<CatalogConfig> {
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(page_size) = self.cli.page_size {
            config.page_size = page_size;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load pages until `pages` have been fetched (0 = all), printing items
    /// as they arrive
    async fn browse<T>(&self, collection: PaginatedCollection<T>, pages: u32) -> Result<()>
    where
        T: Serialize + Identified + Clone + Send + Sync + 'static,
    {
        let mut outcome = collection.initialize().await;
        let mut loaded = 0;
        let mut printed = 0;

        loop {
            let state = collection.state().await;
            let fresh = &state.items[printed..];
            if let (Some(first), Some(last)) = (fresh.first(), fresh.last()) {
                debug!(
                    page = state.page,
                    first_id = first.id(),
                    last_id = last.id(),
                    "page received"
                );
            }
            for item in fresh {
                self.output(item)?;
            }
            printed = state.items.len();

            if outcome == FetchOutcome::Failed {
                let message = state.error_message().unwrap_or_default().to_string();
                return Err(Error::Other(message));
            }
            loaded += 1;
            if !state.has_more || (pages > 0 && loaded >= pages) {
                info!(
                    items = printed,
                    last_page = state.page,
                    has_more = state.has_more,
                    "done"
                );
                return Ok(());
            }

            outcome = collection.load_more().await;
        }
    }

    fn output<T: Serialize>(&self, item: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(item)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(item)?,
        };
        println!("{line}");
        Ok(())
    }
}
