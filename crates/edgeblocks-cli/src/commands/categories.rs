//! `edgeblocks categories`: preview a category list block.
//!
//! `--ancestor-origin` stands in for the browser's ancestor-origins list, so
//! editor mode can be previewed outside the visual editor frame.

use tracing::instrument;
use url::Url;

use edgeblocks_adapters::{AncestorOrigins, SystemClock};
use edgeblocks_core::prelude::{CATEGORY_LIST_BLOCK, CategoryListBlock};

use crate::{
    cli::CategoriesArgs,
    commands::preview,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(url = %args.url, ancestors = args.ancestor_origin.len()))]
pub fn execute(args: CategoriesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let origins = validate_origins(args.ancestor_origin)?;
    let client = preview::http_client(&config)?;

    let block = CategoryListBlock::new(
        Box::new(client),
        Box::new(origins),
        Box::new(SystemClock::new()),
    );

    let authored = preview::mount(
        CATEGORY_LIST_BLOCK,
        preview::endpoint_cell(&args.url, false),
    );
    let decorated = preview::decorate(&block, authored)?;

    let rendered = decorated
        .query_selector("div")
        .map_or(0, |list| list.child_elements().count());
    preview::emit(&output, &decorated, rendered)
}

/// Each origin must be an absolute URL with a host and nothing past it.
fn validate_origins(origins: Vec<String>) -> CliResult<AncestorOrigins> {
    for origin in &origins {
        let invalid = |reason: &str| CliError::InvalidOrigin {
            origin: origin.clone(),
            reason: reason.into(),
        };
        let url = Url::parse(origin).map_err(|e| invalid(&e.to_string()))?;
        if url.host_str().is_none() {
            return Err(invalid("no host"));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("origins carry no path, query or fragment"));
        }
    }
    Ok(AncestorOrigins::new(origins))
}
