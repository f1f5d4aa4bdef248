use anyhow::Result;
use clap::Parser;

use sum_gate::config::settings::ServiceConfig;
use sum_gate::server;
use sum_gate::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Read env / args
    // -------------------------------

    let config = ServiceConfig::parse();
    logging::run(config.log_level);

    // -------------------------------
    // 2. Start http server, run until SIGINT
    // -------------------------------

    server::server::start(&config).await
}
