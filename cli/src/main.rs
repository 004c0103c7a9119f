use std::thread::sleep;
use std::time::Duration;

use clap::{Parser, Subcommand};
use nfc_tag::{list_readers, Pcsc, TagClient};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List attached readers, ACR122U first.
    Readers,

    /// Query a reader for its firmware revision.
    Info { reader: String },

    /// Read the tag on a reader: UID, raw block and NDEF text.
    Read { reader: String },

    /// Write a hex payload into the tag's first data block.
    Write { reader: String, data: String },

    /// Send a raw APDU (hex) and print the hex response.
    Apdu { reader: String, apdu: String },

    /// Poll the first reader and print every tag that appears.
    Watch {
        /// Poll interval in milliseconds.
        #[arg(long, default_value_t = 1000)]
        interval: u64,
    },
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Tag(#[from] nfc_tag::Error),

    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no readers attached")]
    NoReaders,
}

type Result<T> = std::result::Result<T, Error>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = TagClient::new(Pcsc);

    match cli.command {
        Command::Readers => {
            for reader in list_readers(&Pcsc)? {
                println!("{reader}");
            }
        }
        Command::Info { reader } => {
            let info = client.reader_info(&reader)?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Command::Read { reader } => {
            let content = client.read_tag(&reader)?;
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        Command::Write { reader, data } => {
            client.write_tag(&reader, &data)?;
            println!("ok");
        }
        Command::Apdu { reader, apdu } => {
            println!("{}", client.send_apdu(&reader, &apdu)?);
        }
        Command::Watch { interval } => {
            watch(&client, Duration::from_millis(interval))?;
        }
    }

    Ok(())
}

/// Polls the first listed reader, printing each newly seen tag once.
/// A read failure (usually the tag leaving the field) resets the
/// deduplication so the same tag prints again when it returns.
fn watch(client: &TagClient<Pcsc>, interval: Duration) -> Result<()> {
    let reader = list_readers(&Pcsc)?
        .into_iter()
        .next()
        .ok_or(Error::NoReaders)?;

    println!("watching {reader}");

    let mut last_uid: Option<String> = None;

    loop {
        match client.read_tag(&reader) {
            Ok(content) => {
                let seen_before = content.uid.is_some() && content.uid == last_uid;
                if !seen_before && (content.uid.is_some() || content.data.is_some()) {
                    last_uid = content.uid.clone();
                    println!("{}", serde_json::to_string(&content)?);
                }
            }
            Err(err) => {
                last_uid = None;
                warn!("read failed: {err}");
            }
        }

        sleep(interval);
    }
}
