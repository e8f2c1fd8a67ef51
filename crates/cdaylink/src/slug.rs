use crate::prelude::{eprintln, println, *};
use cdaylink_core::labels::Labels;
use cdaylink_core::slug::{slug_tool, SlugOutput};
use colored::Colorize;
use std::io::IsTerminal;

#[derive(Debug, clap::Args, Clone)]
pub struct SlugOptions {
    /// Text to convert
    text: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Copy the slug to the clipboard
    #[arg(short, long)]
    copy: bool,
}

pub async fn run(options: SlugOptions, global: crate::Global) -> Result<()> {
    let language = crate::config::resolve_language(&global);
    let labels = Labels::for_language(language);

    let output = slug_tool(&options.text).map_err(|e| eyre!(e.message(language)))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_formatted(&output, labels);
    }

    if options.copy {
        let slug = output.slug.clone();
        tokio::task::spawn_blocking(move || crate::system::copy_to_clipboard(&slug)).await??;
        eprintln!("{}", labels.slug.copied_tooltip.green());
    }

    Ok(())
}

fn output_formatted(output: &SlugOutput, labels: &Labels) {
    if !std::io::stdout().is_terminal() {
        println!("{}", output.slug);
        return;
    }

    eprintln!("{}", labels.slug.result_label.green());
    println!("{}", output.slug.bright_white().bold());
    eprintln!(
        "{}: {}",
        labels.slug.char_count_label,
        output.char_count.to_string().bright_cyan().bold()
    );
}
