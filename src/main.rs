use clap::Parser;
use noteone::cli::{
    handle_add, handle_delete, handle_get, handle_list, handle_shell, handle_update, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let file = cli.file;

    let result = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Add {
            title,
            body,
            stdin,
            json,
        } => handle_add(&file, title, body, stdin, json),
        Commands::List { json } => handle_list(&file, json),
        Commands::Get { id, json } => handle_get(&file, id, json),
        Commands::Update {
            id,
            title,
            body,
            stdin,
        } => handle_update(&file, id, title, body, stdin),
        Commands::Delete { id } => handle_delete(&file, id),
        Commands::Shell => handle_shell(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
