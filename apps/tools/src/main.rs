use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shared::{
    domain::RosterKind,
    protocol::{ContactRequest, ContactResponse},
    roster,
};
use showcase_core::{CarouselConfig, Pager};
use url::Url;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print how a roster splits into carousel pages.
    Pages {
        #[arg(long, value_enum)]
        roster: RosterArg,
        /// Overrides the carousel's own page size.
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Submit a message to a running contact relay.
    SendContact {
        #[arg(long, default_value = "http://localhost:5000")]
        server_url: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RosterArg {
    Contestants,
    Guests,
}

impl From<RosterArg> for RosterKind {
    fn from(value: RosterArg) -> Self {
        match value {
            RosterArg::Contestants => RosterKind::Contestants,
            RosterArg::Guests => RosterKind::Guests,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Pages { roster, page_size } => {
            let kind = RosterKind::from(roster);
            let page_size = match page_size {
                Some(size) => size,
                None => CarouselConfig::for_roster(kind)
                    .map(|config| config.page_size)
                    .context("roster has no carousel")?,
            };
            print!("{}", page_layout(kind, page_size)?);
        }
        Command::SendContact {
            server_url,
            full_name,
            email,
            message,
        } => {
            let endpoint = Url::parse(&server_url)
                .and_then(|base| base.join("/api/contact"))
                .with_context(|| format!("invalid server url '{server_url}'"))?;
            let response = reqwest::Client::new()
                .post(endpoint)
                .json(&ContactRequest::new(full_name, email, message))
                .send()
                .await
                .context("contact relay unreachable")?;
            let status = response.status();
            let body: ContactResponse = response
                .json()
                .await
                .context("contact relay returned an unexpected body")?;
            println!("status={} {}", status.as_u16(), serde_json::to_string(&body)?);
        }
    }

    Ok(())
}

fn page_layout(kind: RosterKind, page_size: usize) -> Result<String> {
    let items = roster::roster(kind);
    let pager = Pager::new(items.len(), page_size)?;

    let mut out = format!(
        "{}: {} entries, {} per page, {} pages\n",
        kind.title(),
        pager.item_count(),
        pager.page_size(),
        pager.page_count()
    );
    for page in 0..pager.page_count() {
        let names: Vec<&str> = items[pager.range_of(page)]
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        out.push_str(&format!("page {}: {}\n", page + 1, names.join(", ")));
    }
    Ok(out)
}
