use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "yaas-server")]
#[command(about = "Yes-as-a-service HTTP API with per-client rate limiting")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 100)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 900)]
    pub rate_window: u64,

    // Seconds between purges of expired usage records
    #[arg(long, default_value_t = 300)]
    pub purge_interval: u64,

    // Trust X-Forwarded-For / X-Real-IP for client identity.
    // Only safe behind a proxy that overwrites these headers.
    #[arg(long)]
    pub trust_proxy: bool,
}
