use clap::Parser;
use lexi::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "lexi", about = "Terminal legal assistant for motor accident claims")]
struct Args {
    /// Simulated processing delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("warning: {e}; falling back to defaults");
        config::LexiConfig::default()
    });
    let resolved = config::resolve(&file_config, args.delay_ms);

    // Initialize file logger - writes to lexi.log (or the configured path)
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!(
        "Lexi starting up (response delay: {}ms)",
        resolved.response_delay_ms
    );

    lexi::tui::run(resolved)
}
