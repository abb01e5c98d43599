use anyhow::Context;
use calc_demo::utils::{logger, validation::Validate};
use calc_demo::{request, FetchConfig, HttpFetcher};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = FetchConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    let request_config = config
        .request_config()
        .context("failed to load request configuration")?;
    request_config.validate()?;
    tracing::debug!("Request config: {:?}", request_config);

    let fetcher = HttpFetcher::from_config(&request_config)?;

    // 傳輸錯誤只會被印出，不影響結束碼
    request(&fetcher, &request_config.endpoint, |outcome| {
        for line in outcome.report_lines() {
            println!("{}", line);
        }
    })
    .await;

    Ok(())
}
