use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "tsbench")]
#[command(about = "tsbench - datetime-to-string conversion micro-benchmark\nCompares six formatting strategies over identical random input", long_about = None)]
pub struct Config {
    #[arg(short = 'n', long, default_value = "10000000", env = "TSBENCH_COUNT", help = "Number of random datetime records to generate and convert")]
    pub count: usize,

    #[arg(long, default_value = "info", env = "TSBENCH_LOG_LEVEL")]
    pub log_level: String,

    #[arg(long, env = "TSBENCH_SEED", help = "Fixed RNG seed for a reproducible run (OS entropy when omitted)")]
    pub seed: Option<u64>,
}

impl Config {
    /// Get a configuration instance with all values resolved from CLI args and environment variables
    pub fn load() -> Self {
        Config::parse()
    }
}
