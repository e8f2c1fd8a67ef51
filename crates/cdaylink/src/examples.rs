use crate::prelude::{println, *};
use cdaylink_core::labels::{Labels, SLUG_EXAMPLES, URL_EXAMPLES};

pub fn run(global: crate::Global) -> Result<()> {
    let labels = Labels::for_language(crate::config::resolve_language(&global));

    println!("{} {}", labels.slug.title, labels.slug.examples_label);
    slug_table().printstd();
    println!();
    println!("{} {}", labels.url.title, labels.url.examples_label);
    url_table().printstd();

    Ok(())
}

fn slug_table() -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(prettytable::row!["Input", "Slug", "Characters"]);

    for (input, slug) in SLUG_EXAMPLES {
        let quoted = f!("{input:?}");
        table.add_row(prettytable::row![quoted, slug, slug.chars().count()]);
    }

    table
}

fn url_table() -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(prettytable::row!["Source", "Destination"]);

    for (source, destination) in URL_EXAMPLES {
        table.add_row(prettytable::row![source, destination]);
    }

    table
}
