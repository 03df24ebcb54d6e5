use anyhow::Result;
use bytebot_client::{Client, DEFAULT_BASE_URL, DEFAULT_DESCRIPTION};
use clap::Parser;

use openrouter_check::{
    create_task, credential_report, model_list_report, task_report, CREDENTIAL_VAR,
    DEFAULT_MODEL, INSTRUCTIONS,
};

#[derive(Parser, Debug)]
#[clap(about = "Check that Bytebot accepts tasks routed to OpenRouter models")]
struct Args {
    #[clap(short, long, env = "BYTEBOT_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[clap(short, long, default_value = DEFAULT_MODEL)]
    model: String,
    #[clap(short, long, default_value = DEFAULT_DESCRIPTION)]
    description: String,
    #[clap(short, long)]
    verbose: bool,
}

fn print_lines(lines: impl IntoIterator<Item = impl AsRef<str>>) {
    for line in lines {
        println!("{}", line.as_ref());
    }
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

    println!("Testing OpenRouter integration with Bytebot...");
    println!();

    let credential = std::env::var(CREDENTIAL_VAR).ok();
    print_lines(credential_report(credential.as_deref()));

    println!();
    print_lines(model_list_report());

    println!();
    println!("Testing task creation...");
    let client = Client::new(&args.base_url);
    let outcome = create_task(&client, &args.description, &args.model).await;
    tracing::info!("Task creation finished with {:?}", outcome);
    print_lines(task_report(&outcome, client.base_url()));

    println!();
    print_lines(INSTRUCTIONS);

    Ok(())
}
