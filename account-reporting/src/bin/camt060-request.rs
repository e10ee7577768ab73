//! camt.060 request generator
//!
//! Usage:
//!
//! ```text
//! camt060-request [--config <file.toml>] <message-id> <requested-message-name>
//!                 <account-id> [owner-name]
//! ```
//!
//! Prints the encoded Document on stdout. Without `--config` the encoder
//! settings come from `CAMT060_XML_DECLARATION` / `CAMT060_INDENT`.

use account_reporting::iso20022::{
    AccountOwner, Camt060Builder, CashAccount, PartyIdentification, MESSAGE_NAME,
};
use account_reporting::{generate_message, EncoderConfig};
use anyhow::{bail, Context, Result};

const USAGE: &str = "usage: camt060-request [--config <file.toml>] \
                     <message-id> <requested-message-name> <account-id> [owner-name]";

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let config = if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            bail!(USAGE);
        }
        let path = args.remove(1);
        args.remove(0);
        EncoderConfig::from_file(&path).with_context(|| format!("loading {}", path))?
    } else {
        EncoderConfig::from_env().context("reading encoder settings from environment")?
    };

    let (message_id, message_name, account_id) = match args.as_slice() {
        [id, name, account] | [id, name, account, _] => (id.clone(), name.clone(), account.clone()),
        _ => bail!(USAGE),
    };

    let mut builder = Camt060Builder::new(message_id.as_str(), message_name.as_str())
        .with_account(CashAccount::new(account_id.as_str()));

    if let Some(owner) = args.get(3) {
        let party = PartyIdentification::named(owner.as_str());
        builder = builder.with_account_owner(AccountOwner::Party(party));
    }

    let document = builder.build();
    let xml = generate_message(&document, &config).context("encoding camt.060 document")?;

    tracing::info!(
        "Generated {} request {} for account {}",
        MESSAGE_NAME,
        message_id,
        account_id
    );
    println!("{}", xml);

    Ok(())
}
