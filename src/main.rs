mod cli;

use std::io::Write as _;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use twinchat::{
    ChatConfig, ChatTransport, Conversation, GeminiTransport, MockTransport, SendMessageUseCase,
};

use cli::Commands;

/// Opening model turn seeded into every interactive session.
const GREETING: &str =
    "Hello. I am Tolutope's digital twin. Ask me anything about his work, philosophy, or availability.";

/// Canned reply used by the offline mock transport.
const MOCK_REPLY: &str = "Less is more, but less is hard.";

#[derive(Parser)]
#[command(name = "twinchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use the scripted offline transport instead of the hosted model
    #[arg(long, global = true)]
    mock_transport: bool,

    #[arg(long, global = true)]
    model: Option<String>,

    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ChatConfig::from_env();
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }

    let transport: Option<Arc<dyn ChatTransport>> = if cli.mock_transport {
        info!("Using mock chat transport");
        Some(Arc::new(MockTransport::new(MOCK_REPLY)) as Arc<dyn ChatTransport>)
    } else {
        match GeminiTransport::from_config(&config) {
            Some(gemini) => {
                info!(
                    "Using Gemini transport ({} at {})",
                    config.model(),
                    config.base_url()
                );
                Some(Arc::new(gemini) as Arc<dyn ChatTransport>)
            }
            None => {
                info!("No API key configured; replies will use demo mode");
                None
            }
        }
    };

    let use_case = SendMessageUseCase::with_optional_transport(transport);

    match cli.command {
        Commands::Chat => run_chat(&use_case).await?,
        Commands::Ask { message } => {
            let reply = use_case.reply_text(&message, &[]).await;
            println!("{reply}");
        }
        Commands::Persona => {
            print!("{}", use_case.persona().system_instruction());
        }
    }

    Ok(())
}

async fn run_chat(use_case: &SendMessageUseCase) -> Result<()> {
    println!("{GREETING}");
    println!("(type 'exit' to quit)\n");

    let mut conversation = Conversation::new();
    conversation.push_model(GREETING);

    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        // One request in flight at a time: the loop blocks here until the
        // reply arrives, so a second send cannot start early.
        let history = conversation.history();
        conversation.push_user(input);
        let reply = use_case.reply_text(input, &history).await;
        conversation.push_model(reply.as_str());

        println!("twin> {reply}\n");
    }

    Ok(())
}
