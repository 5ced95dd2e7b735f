//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No block logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "edgeblocks",
    bin_name = "edgeblocks",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Preview content-fragment list blocks from the terminal",
    long_about = "edgeblocks mounts an adventure or category list block, \
                  decorates it against a live persisted-query endpoint, \
                  and prints the resulting markup.",
    after_help = "EXAMPLES:\n\
        \x20 edgeblocks adventures https://publish-p1.example.com/graphql/execute.json/wknd/adventures-all\n\
        \x20 edgeblocks categories https://publish-p1.example.com/graphql/execute.json/wknd/adventures-all\n\
        \x20 edgeblocks categories <URL> --ancestor-origin https://experience.adobe.com\n\
        \x20 edgeblocks completions bash > /usr/share/bash-completion/completions/edgeblocks",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decorate an adventure list block.
    #[command(
        visible_alias = "adv",
        about = "Render an adventure list block",
        after_help = "EXAMPLES:\n\
            \x20 edgeblocks adventures https://publish-p1.example.com/graphql/execute.json/wknd/adventures-all\n\
            \x20 edgeblocks adventures /graphql/execute.json/wknd/adventures-all --plain-text\n\
            \x20 edgeblocks adventures <URL> --output-format json"
    )]
    Adventures(AdventuresArgs),

    /// Decorate a category (content fragment) list block.
    #[command(
        visible_alias = "cat",
        about = "Render a category list block",
        after_help = "EXAMPLES:\n\
            \x20 edgeblocks categories https://publish-p1.example.com/graphql/execute.json/wknd/adventures-all\n\
            \x20 edgeblocks categories <URL> --ancestor-origin https://experience.adobe.com"
    )]
    Categories(CategoriesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 edgeblocks completions bash > ~/.local/share/bash-completion/completions/edgeblocks\n\
            \x20 edgeblocks completions zsh  > ~/.zfunc/_edgeblocks\n\
            \x20 edgeblocks completions fish > ~/.config/fish/completions/edgeblocks.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the edgeblocks configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 edgeblocks config show\n\
            \x20 edgeblocks config path"
    )]
    Config(ConfigCommands),
}

// ── adventures ────────────────────────────────────────────────────────────────

/// Arguments for `edgeblocks adventures`.
#[derive(Debug, Args)]
pub struct AdventuresArgs {
    /// Persisted query URL the block is authored with.  Relative URLs are
    /// resolved against `page.base_url`.
    #[arg(value_name = "URL", help = "Persisted query URL")]
    pub url: String,

    /// Author the URL as plain text instead of a link.
    #[arg(
        long = "plain-text",
        help = "Author the URL as text instead of an anchor"
    )]
    pub plain_text: bool,
}

// ── categories ────────────────────────────────────────────────────────────────

/// Arguments for `edgeblocks categories`.
#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Persisted query URL the block is authored with.
    #[arg(value_name = "URL", help = "Persisted query URL")]
    pub url: String,

    /// Origins of the frames embedding the page, nearest first.  Any value
    /// switches the block into editor mode.
    #[arg(
        long = "ancestor-origin",
        value_name = "ORIGIN",
        action = clap::ArgAction::Append,
        help = "Origin of an embedding frame (repeatable; enables editor mode)"
    )]
    pub ancestor_origin: Vec<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `edgeblocks completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `edgeblocks config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration, secrets masked.
    Show,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
