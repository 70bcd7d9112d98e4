use ai_video_gateway::ui::{GenerationState, PromptClient, TICK_INTERVAL};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Submit a prompt to a running gateway and report the outcome
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Topic to generate a video about; leave empty to let the backend pick one
    #[arg(default_value = "")]
    prompt: String,

    /// Base URL of the gateway
    #[arg(long, env = "GATEWAY_URL", default_value = "http://127.0.0.1:3000")]
    gateway_url: String,

    /// Show the simulated progress ticker while waiting
    #[arg(long)]
    progress: bool,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_state(state: &GenerationState) {
    println!("{state}");
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    let client = PromptClient::new(&args.gateway_url)?;

    let state = if args.progress {
        client
            .submit_with_progress(&args.prompt, TICK_INTERVAL, print_state, |tick| {
                println!("[{:>3}%] {}", tick.percent, tick.status);
            })
            .await
    } else {
        client.submit(&args.prompt, print_state).await
    };

    Ok(match state {
        GenerationState::Succeeded { .. } => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
