//! Shared plumbing for the block preview commands: mount, decorate, print.

use tracing::info;

use edgeblocks_adapters::HttpContentClient;
use edgeblocks_core::prelude::{Block, Element};

use crate::{
    cli::OutputFormat,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// An authored block: `div.<name> > div > div > <cell>`, the shape the page
/// framework hands to a block before decoration.
pub fn mount(name: &str, cell: Element) -> Element {
    Element::block(name).child(Element::new("div").child(cell))
}

/// Content cell holding the endpoint as a link, or as bare text.
pub fn endpoint_cell(url: &str, plain_text: bool) -> Element {
    let cell = Element::new("div");
    if plain_text {
        cell.text(url)
    } else {
        cell.child(Element::new("a").attr("href", url).text(url))
    }
}

pub fn http_client(config: &AppConfig) -> CliResult<HttpContentClient> {
    HttpContentClient::new(config.http_client()).map_err(|e| CliError::Core(e.into()))
}

/// Run `decorate` to completion on a single-threaded runtime.
pub fn decorate(block: &dyn Block, mut element: Element) -> CliResult<Element> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .with_cli_context(|| "Failed to start the async runtime")?;

    runtime.block_on(block.decorate(&mut element));
    info!(block = block.name(), "Block decorated");
    Ok(element)
}

/// Print a decorated block in the resolved output format.
///
/// `rendered` is the number of items the block ended up showing; zero gets
/// a hint in human mode, since blocks fail silently.
pub fn emit(output: &OutputManager, block: &Element, rendered: usize) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(block).map_err(|e| CliError::Serialization {
                    what: "element tree",
                    source: Box::new(e),
                })?;
            output.emit(&json)?;
        }
        OutputFormat::Human => {
            output.emit(&block.to_html())?;
            if rendered == 0 {
                output.warning("Block rendered empty; re-run with -vv to see why")?;
            } else {
                output.success(&format!("{rendered} item(s) rendered"))?;
            }
        }
        OutputFormat::Plain | OutputFormat::Auto => output.emit(&block.to_html())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_wraps_cell_in_a_row() {
        let block = mount("adventures-list", endpoint_cell("https://x.test/q", false));
        assert_eq!(
            block.to_html(),
            r#"<div class="adventures-list"><div><div><a href="https://x.test/q">https://x.test/q</a></div></div></div>"#
        );
    }

    #[test]
    fn plain_text_cell_has_no_anchor() {
        let block = mount("adventures-list", endpoint_cell("/q", true));
        assert!(block.query_selector("a").is_none());
        assert_eq!(block.text_content(), "/q");
    }

    #[test]
    fn http_client_rejects_bad_cookie_as_configuration() {
        let mut config = AppConfig::default();
        config.http.cookie = Some("a\nb".into());
        let err = http_client(&config).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
