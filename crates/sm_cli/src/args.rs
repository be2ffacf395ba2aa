use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sm_core::config::{Settings, TranslationProvider};
use sm_core::Language;

#[derive(Parser, Debug)]
#[command(
    name = "samachar",
    author,
    version,
    about = "Company news sentiment, topics and Hindi audio summaries",
    long_about = None
)]
pub struct Cli {
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub news_api_key: Option<String>,
    #[arg(long, env = "NEWS_API_URL", default_value = "https://newsapi.org")]
    pub news_api_url: String,
    #[arg(long, default_value_t = 10, help = "Articles requested per company (1-100)")]
    pub page_size: u32,
    #[arg(long, default_value = "google", help = "Translation provider: google (default), noop")]
    pub translator: TranslationProvider,
    #[arg(long, default_value_t = 15, help = "Seconds allowed per translation call")]
    pub translation_timeout: u64,
    #[arg(long, default_value_t = 30, help = "Seconds allowed per speech request")]
    pub speech_timeout: u64,
    #[arg(long, default_value = "hi", help = "Voice language for synthesis")]
    pub voice: Language,
    /// Transliterate known English words and drop unspeakable characters before synthesis
    #[arg(long)]
    pub clean_for_speech: bool,
    #[arg(long, env = "SAMACHAR_AUDIO_DIR")]
    pub audio_dir: Option<PathBuf>,
    #[arg(long, env = "SAMACHAR_SNAPSHOT_DIR")]
    pub snapshot_dir: Option<PathBuf>,
    /// Keep snapshots in memory instead of writing JSON files
    #[arg(long, conflicts_with = "snapshot_dir")]
    pub no_snapshots: bool,
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(long, env = "SAMACHAR_BIND", default_value = "127.0.0.1:8000")]
        bind: String,
    },
    /// Print articles, sentiment, topics and the report as JSON
    Fetch { company: String },
    /// Print per-article sentiment as JSON
    Sentiment { company: String },
    /// Write the Hindi audio summary to a file
    Tts {
        company: String,
        #[arg(short, long, default_value = "news_summary.mp3")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();

        settings.news.api_key = self.news_api_key.clone();
        settings.news.base_url = self.news_api_url.clone();
        settings.news.page_size = self.page_size;

        settings.translation.provider = self.translator;
        settings.translation.timeout_secs = self.translation_timeout;

        settings.speech.language = self.voice;
        settings.speech.timeout_secs = self.speech_timeout;
        settings.speech.clean_for_speech = self.clean_for_speech;

        if let Some(dir) = &self.audio_dir {
            settings.output.audio_dir = dir.clone();
        }
        if self.no_snapshots {
            settings.output.snapshot_dir = None;
        } else if let Some(dir) = &self.snapshot_dir {
            settings.output.snapshot_dir = Some(dir.clone());
        }

        if let Commands::Serve { bind } = &self.command {
            settings.server.bind = bind.clone();
        }
        settings
    }
}
