//! dotalinesbot: run the inline bot, or search the corpus from the terminal.

use anyhow::Result;
use clap::Parser;
use dotalines_bot::{
    init_console_tracing, load_config, run_bot, search, Cli, Commands, CorpusConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token, config, lines } => {
            let config = load_config(token, config, lines)?;
            run_bot(config).await
        }
        Commands::Search { lines, query } => {
            init_console_tracing("warn")?;

            let corpus = CorpusConfig::from_env(lines)?;
            let results = search(&corpus, &query).await?;
            if results.is_empty() {
                println!("No voice lines match {:?}.", query);
                return Ok(());
            }
            for r in &results {
                println!("{:<24} {:<48} {}", r.performer, r.title, r.audio_url);
            }
            Ok(())
        }
    }
}
