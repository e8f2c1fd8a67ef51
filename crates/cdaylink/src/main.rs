use crate::prelude::*;
use cdaylink_core::labels::Language;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod error;
mod examples;
mod interactive;
mod mcp;
mod prelude;
mod slug;
mod system;
mod url;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Turn text into URL slugs and rewrite cday.kambria.io links into their cday.global form"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Display language (en or vi). Defaults to the saved preference.
    #[clap(long, env = "CDAYLINK_LANG", global = true)]
    lang: Option<Language>,

    /// Directory holding config.toml (defaults to ~/.config/cdaylink)
    #[clap(long, env = "CDAYLINK_CONFIG_DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "CDAYLINK_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert text into a URL-safe slug
    Slug(crate::slug::SlugOptions),

    /// Rewrite a cday.kambria.io link into its cday.global form
    Url(crate::url::UrlOptions),

    /// Run one of the tools as an interactive session
    Interactive(crate::interactive::App),

    /// Show worked examples for both tools
    Examples,

    /// Show or change the display language
    Lang(crate::config::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Slug(options) => crate::slug::run(options, app.global).await,
        SubCommands::Url(options) => crate::url::run(options, app.global).await,
        SubCommands::Interactive(sub_app) => crate::interactive::run(sub_app, app.global).await,
        SubCommands::Examples => crate::examples::run(app.global),
        SubCommands::Lang(sub_app) => crate::config::run(sub_app, app.global),
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
