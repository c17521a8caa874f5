use anyhow::Context;
use clap::Parser;
use docs_search::cli::{Cli, Commands};
use docs_search::format::render_panel;
use docs_search::{Config, IndexBuilder, IndexSource, SearchWidget};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    docs_search::tracing::init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            content_root,
            output,
        } => {
            if let Some(root) = content_root {
                config.site.content_root = root;
            }
            if let Some(output) = output {
                config.site.output = output;
            }

            let builder = IndexBuilder::new(&config.site);
            let articles = builder.collect()?;
            builder.write(&articles)?;
        }
        Commands::Query {
            term,
            index,
            limit,
            no_suggest,
        } => {
            if let Some(limit) = limit {
                config.search.limit = limit;
            }
            if no_suggest {
                config.search.suggest = false;
            }

            let source = index.unwrap_or_else(|| config.default_source());
            let mut widget = SearchWidget::from_config(&config);
            widget
                .initialize(&source)
                .await
                .with_context(|| format!("Failed to load search index from {}", source))?;

            widget.set_term(term);
            print!("{}", render_panel(&widget));
        }
        Commands::Interactive { index } => {
            let source = index.unwrap_or_else(|| config.default_source());
            let mut widget = SearchWidget::from_config(&config);
            // The widget stays usable without an index; every query is empty.
            let _ = widget.initialize(&source).await;

            run_interactive(&mut widget).await?;
        }
    }

    Ok(())
}

/// Treats each stdin line as the current contents of the search box.
///
/// `:select N` navigates to the N-th shown result (1-based) and `:clear`
/// empties the box.
async fn run_interactive(widget: &mut SearchWidget) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if let Some(arg) = line.strip_prefix(":select") {
            let selected = arg
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|position| widget.select(position));
            match selected {
                Some(m) => println!("{}", m.slug),
                None => println!("No result at {}", arg.trim()),
            }
        } else if line.trim() == ":clear" {
            widget.clear();
        } else {
            widget.set_term(line);
            print!("{}", render_panel(widget));
        }
    }

    Ok(())
}
