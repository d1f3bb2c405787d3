use clap::Parser;
use pull_demo::DemoOptions;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let options = DemoOptions::parse();
    println!("=== Dragload pull-to-refresh demo ===");
    println!();

    pull_demo::entry_point(&options)
}
