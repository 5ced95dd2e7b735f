//! `edgeblocks adventures`: preview an adventure list block.

use tracing::instrument;

use edgeblocks_core::prelude::{ADVENTURES_LIST_BLOCK, AdventureListBlock};

use crate::{
    cli::AdventuresArgs, commands::preview, config::AppConfig, error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(url = %args.url, plain_text = args.plain_text))]
pub fn execute(args: AdventuresArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let client = preview::http_client(&config)?;

    let mut block = AdventureListBlock::new(Box::new(client));
    if let Some(base) = config.page.base_url {
        block = block.with_page_url(base);
    }

    let authored = preview::mount(
        ADVENTURES_LIST_BLOCK,
        preview::endpoint_cell(&args.url, args.plain_text),
    );
    let decorated = preview::decorate(&block, authored)?;

    let rendered = decorated.query_selector_all("li").len();
    preview::emit(&output, &decorated, rendered)
}
