use calc_demo::utils::logger;
use calc_demo::{DemoConfig, Showcase};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let showcase = Showcase::new(config.radius, config.augend, config.addend);
    for line in showcase.lines() {
        println!("{}", line);
    }

    Ok(())
}
