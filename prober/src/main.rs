use anyhow::Result;
use bytebot_client::{Client, DEFAULT_BASE_URL, DEFAULT_DESCRIPTION};
use clap::Parser;

use smarts_probe::{Probe, INSTRUCTIONS};

#[derive(Parser, Debug)]
#[clap(about = "Smoke-test the Bytebot SMARTS API endpoints")]
struct Args {
    #[clap(short, long, env = "BYTEBOT_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[clap(short, long, default_value = DEFAULT_DESCRIPTION)]
    description: String,
    #[clap(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("args: {:?}", &args);

    println!("SMARTS API Test Script");
    println!("{}", "=".repeat(30));
    println!("Testing SMARTS API endpoints...");

    let client = Client::new(&args.base_url);
    for probe in Probe::ALL {
        let outcome = probe.send(&client, &args.description).await;
        tracing::info!("{:?} finished with {:?}", probe, outcome);
        for line in probe.report(&outcome) {
            println!("{line}");
        }
    }

    println!();
    for line in INSTRUCTIONS {
        println!("{line}");
    }

    Ok(())
}
