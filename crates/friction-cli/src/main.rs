use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use friction_application::ClientUseCase;
use friction_core::catalog;
use friction_core::conversation::{Message, MessageRole};
use friction_core::intensity::IntensityLevel;
use friction_core::navigation::NavigationMode;
use friction_infrastructure::{load_config, FileIdentityRepository, FrictionPaths, KeyValueStorage};

#[derive(Parser)]
#[command(name = "friction")]
#[command(about = "Friction - a client that argues you out of impulse purchases", long_about = None)]
struct Cli {
    /// Directory for persisted client state (defaults to the platform config dir)
    #[arg(long)]
    state_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let state_file = match &cli.state_dir {
        Some(dir) => dir.join("client_state.json"),
        None => FrictionPaths::state_file()?,
    };
    let storage = Arc::new(KeyValueStorage::open(state_file));
    let identity_repository = Arc::new(FileIdentityRepository::new(storage));
    let config = load_config()?;

    let usecase = ClientUseCase::new(identity_repository, config);

    println!("Friction - introducing friction, for your next purchase");
    println!("Type /help for commands.\n");
    print_dashboard(&usecase).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "/quit" | "/q" => break,
            "/help" => print_help(),
            "/signin" => {
                usecase.sign_in().await?;
                println!("Signed in.");
            }
            "/signout" => {
                usecase.sign_out().await?;
                println!("Signed out.");
            }
            "/friction" => {
                match usecase.request_create_friction().await {
                    NavigationMode::Conversation => {
                        println!("-- conversation --");
                        print_messages(&usecase.messages().await?);
                    }
                    NavigationMode::Dashboard => {
                        println!("Sign in to start creating friction. (/signin, or /dismiss to close the prompt)");
                    }
                }
            }
            "/close" => {
                usecase.close_conversation().await;
                println!("-- dashboard --");
                print_dashboard(&usecase).await;
            }
            "/dismiss" => {
                usecase.dismiss_sign_in_prompt().await;
                println!("Prompt dismissed.");
            }
            "/levels" => print_levels(),
            "/stats" => print_stats(&usecase).await,
            "/record" => match usecase.toggle_recording().await {
                Ok(state) => println!("Recording toggle: {:?}", state),
                Err(_) => println!("No active conversation."),
            },
            "/log" => match usecase.messages().await {
                Ok(messages) => print_messages(&messages),
                Err(_) => println!("No active conversation."),
            },
            _ if input.starts_with("/level ") => {
                let label = input.trim_start_matches("/level ").trim();
                match IntensityLevel::from_label(label) {
                    Some(level) => match usecase.select_intensity(level).await {
                        Ok(()) => println!("Intensity set to {}.", level),
                        Err(_) => println!("No active conversation."),
                    },
                    None => println!("Unknown level: {} (see /levels)", label),
                }
            }
            _ if input.starts_with('/') => {
                println!("Unknown command: {} (see /help)", input);
            }
            _ => {
                // Bare text is a chat message while the conversation is open
                if usecase.mode().await == NavigationMode::Conversation {
                    if usecase.send_message(&line).await?.is_some() {
                        println!("(reply incoming; /log to see the transcript)");
                    }
                } else if !input.is_empty() {
                    println!("Not in a conversation. /friction to start one.");
                }
            }
        }
    }

    // Cancel any replies still scheduled before the process exits
    usecase.close_conversation().await;

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  /signin        sign in (persists across restarts)");
    println!("  /signout       sign out");
    println!("  /friction      open the conversation (requires sign-in)");
    println!("  /close         close the conversation");
    println!("  /dismiss       dismiss the sign-in prompt");
    println!("  /level <name>  select intensity level");
    println!("  /levels        list intensity levels");
    println!("  /record        toggle the voice-record stub");
    println!("  /log           print the conversation transcript");
    println!("  /stats         print dashboard stats");
    println!("  /quit          exit");
    println!("Anything else is sent as a chat message while a conversation is open.");
}

fn print_levels() {
    for level in IntensityLevel::all() {
        println!("  {:<22} {}", level.label(), level.description());
    }
}

async fn print_dashboard(usecase: &ClientUseCase) {
    if usecase.is_signed_in().await {
        print_stats(usecase).await;
        println!("\nLatest cancelled purchases:");
        for purchase in catalog::cancelled_purchases() {
            println!(
                "  {} ({}) - {}",
                purchase.name, purchase.price, purchase.reason
            );
        }
    } else {
        println!("Can you reason for it? Pick your intensity level and let");
        println!("Friction challenge your purchase decision:\n");
        print_levels();
        println!("\nSign in (/signin) to start creating friction.");
    }
}

async fn print_stats(usecase: &ClientUseCase) {
    if !usecase.is_signed_in().await {
        println!("Sign in to see your stats.");
        return;
    }
    let stats = catalog::dashboard_stats();
    println!(
        "Total $ saved: ${}   Longest argument: {}h {}min   Strongest reason: {}",
        stats.total_saved,
        stats.longest_argument.hours,
        stats.longest_argument.minutes,
        stats.strongest_reason
    );
}

fn print_messages(messages: &[Message]) {
    for message in messages {
        let who = match message.role {
            MessageRole::User => "you",
            MessageRole::Assistant => "friction",
        };
        println!("[{}] {}", who, message.text);
    }
}
