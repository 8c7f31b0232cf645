use chute::{receiver, sender, Config, TransferError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "chute")]
#[command(about = "Single-shot TCP file transfer: one file, one peer, one connection")]
struct Cli {
    /// Configuration file path (created with defaults if missing)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve a file to the first peer that connects
    Send {
        /// File to send
        file: PathBuf,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// I/O buffer size in bytes
        #[arg(short, long)]
        buffer_size: Option<usize>,

        /// Progress report interval in megabytes
        #[arg(short = 'i', long)]
        progress_interval: Option<u64>,
    },
    /// Connect to a sender and write the stream to a file
    Recv {
        /// Destination file (truncated if it exists)
        file: PathBuf,

        /// Sender host name
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Sender port
        #[arg(short, long)]
        port: Option<u16>,

        /// I/O buffer size in bytes
        #[arg(short, long)]
        buffer_size: Option<usize>,

        /// Progress report interval in megabytes
        #[arg(short = 'i', long)]
        progress_interval: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TransferError> {
    let config = match &cli.config {
        Some(path) => Config::load_or_create(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Send {
            file,
            port,
            buffer_size,
            progress_interval,
        } => {
            let mut cfg = config.sender;
            if let Some(port) = port {
                cfg.port = port;
            }
            if let Some(buffer_size) = buffer_size {
                cfg.buffer_size = buffer_size;
            }
            if let Some(interval) = progress_interval {
                cfg.progress_interval_mb = interval;
            }
            cfg.validate()?;
            sender::run(&file, &cfg)?;
        }
        Commands::Recv {
            file,
            host,
            port,
            buffer_size,
            progress_interval,
        } => {
            let mut cfg = config.receiver;
            if let Some(host) = host {
                cfg.host = host;
            }
            if let Some(port) = port {
                cfg.port = port;
            }
            if let Some(buffer_size) = buffer_size {
                cfg.buffer_size = buffer_size;
            }
            if let Some(interval) = progress_interval {
                cfg.progress_interval_mb = interval;
            }
            cfg.validate()?;
            receiver::run(&file, &cfg)?;
        }
    }

    Ok(())
}
