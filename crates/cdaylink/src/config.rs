use crate::prelude::{println, *};
use cdaylink_core::config::{self as prefs, Preferences};
use cdaylink_core::labels::Language;
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(name = "lang")]
#[command(about = "Show or change the display language")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print the display language in effect
    #[clap(name = "get")]
    Get,

    /// Save the display language preference
    #[clap(name = "set")]
    Set {
        /// Language tag: en or vi
        language: Language,
    },
}

pub fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command.unwrap_or(Commands::Get) {
        Commands::Get => {
            println!("{}", resolve_language(&global));
            Ok(())
        }
        Commands::Set { language } => {
            save_language(&global, language)?;
            println!("{language}");
            Ok(())
        }
    }
}

/// Directory holding the preference file
pub fn config_dir(global: &crate::Global) -> Result<PathBuf> {
    if let Some(dir) = &global.config_dir {
        return Ok(dir.clone());
    }

    let home = dirs_next::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".config/cdaylink"))
}

/// Language to display: the `--lang` flag, then the saved preference, then English.
///
/// An unreadable preference file never blocks the tools; it falls back to the
/// default and logs a warning.
pub fn resolve_language(global: &crate::Global) -> Language {
    if let Some(language) = global.lang {
        return language;
    }

    let dir = match config_dir(global) {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Using default language: {e}");
            return Language::default();
        }
    };

    match prefs::load_preferences(&dir) {
        Ok(preferences) => preferences.language,
        Err(e) => {
            log::warn!(
                "Ignoring unreadable preferences at {}: {e}",
                prefs::config_path(&dir).display()
            );
            Language::default()
        }
    }
}

/// Persist the display language preference
pub fn save_language(global: &crate::Global, language: Language) -> Result<()> {
    let dir = config_dir(global)?;

    prefs::save_preferences(&dir, &Preferences { language })
        .with_context(|| f!("Failed to save preferences in {}", dir.display()))?;

    log::debug!("Saved language preference {language} in {}", dir.display());

    Ok(())
}
