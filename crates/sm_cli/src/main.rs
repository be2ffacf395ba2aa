use std::sync::Arc;

use clap::Parser;
use sm_analysis::NewsPipeline;
use sm_core::config::Settings;
use sm_core::logging::init_logging;
use sm_core::{Result, Snapshot, SnapshotStore};
use sm_fetch::NewsApiSource;
use sm_web::handlers::SentimentResponse;
use sm_web::AppState;
use tokio::net::TcpListener;
use tracing::info;

mod args;

use args::{Cli, Commands};

fn build_pipeline(settings: &Settings) -> Result<NewsPipeline> {
    let source = Arc::new(NewsApiSource::new(&settings.news)?);
    info!("📰 News source initialized (using {})", settings.news.base_url);
    let translator = sm_voice::create_translator(&settings.translation)?;
    let renderer = sm_voice::create_renderer(&settings.speech)?;
    Ok(NewsPipeline::new(source, translator, renderer).with_settings(settings))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings();
    settings.validate()?;

    let pipeline = build_pipeline(&settings)?;
    let store = sm_storage::create_store(settings.output.snapshot_dir.clone());

    match cli.command {
        Commands::Serve { .. } => {
            let listener = TcpListener::bind(&settings.server.bind).await?;
            let state = AppState::new(Arc::new(pipeline), store, settings.output.audio_dir.clone());
            sm_web::serve(listener, state).await?;
        }
        Commands::Fetch { company } => {
            let analysis = pipeline.analyze(company.trim()).await?;
            store
                .save_or_warn(&Snapshot::news(&analysis.company, &analysis.articles, &analysis.report))
                .await;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Commands::Sentiment { company } => {
            let company = company.trim();
            let articles = pipeline.sentiment(company).await?;
            store.save_or_warn(&Snapshot::sentiment(company, &articles)).await;
            let response = SentimentResponse {
                sentiment_analysis: articles,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Tts { company, output } => {
            let path = pipeline.generate_audio(company.trim(), &output).await?;
            info!("🎧 Hindi summary for '{}' written", company.trim());
            println!("{}", path.display());
        }
    }

    Ok(())
}
