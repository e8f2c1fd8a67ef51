use crate::prelude::{eprintln, println, *};
use cdaylink_core::convert::{convert_url, Conversion};
use cdaylink_core::labels::Labels;
use colored::Colorize;
use std::io::IsTerminal;

#[derive(Debug, clap::Args, Clone)]
pub struct UrlOptions {
    /// Link to rewrite, e.g. https://cday.kambria.io/cdcg-news
    url: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the converted link to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Open the converted link in the default browser
    #[arg(short, long)]
    open: bool,
}

pub async fn run(options: UrlOptions, global: crate::Global) -> Result<()> {
    let language = crate::config::resolve_language(&global);
    let labels = Labels::for_language(language);

    let conversion = convert_url(&options.url).map_err(|e| eyre!(e.message(language)))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        output_formatted(&conversion, labels, global.verbose);
    }

    if options.copy {
        let destination = conversion.destination.clone();
        tokio::task::spawn_blocking(move || crate::system::copy_to_clipboard(&destination))
            .await??;
        eprintln!("{}", labels.url.copied_tooltip.green());
    }

    if options.open {
        crate::system::open_url(&conversion.destination)?;
        eprintln!("{}", labels.url.open_link_tooltip.green());
    }

    Ok(())
}

fn output_formatted(conversion: &Conversion, labels: &Labels, verbose: bool) {
    if !std::io::stdout().is_terminal() {
        println!("{}", conversion.destination);
        return;
    }

    if verbose {
        eprintln!("{}: {}", "Prefix".green(), conversion.prefix.to_string().bright_magenta());
        eprintln!("{}: {}", "Content".green(), conversion.content.bright_yellow());
        eprintln!("{}: {}", "Slug".green(), conversion.slug.bright_yellow());
    }

    eprintln!("{}", labels.url.result_label.green());
    println!("{}", conversion.destination.cyan().underline());
}
