mod api;
mod config;
mod content;
mod icons;
mod theme;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::Api;
use config::{Environment, SiteConfig};
use content::Portfolio;
use icons::IconTable;
use theme::Theme;
use types::ContactForm;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author = "Sean Fournier")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio site toolkit: tool icons, contact form and brand theme")]
struct Args {
    /// Resolve the logo asset for a technology name
    #[arg(short, long)]
    icon: Option<String>,

    /// List the icon table
    #[arg(short, long)]
    tools: bool,

    /// Print the resolved environment as JSON
    #[arg(short, long)]
    env: bool,

    /// Print the stylesheet theme config as JSON
    #[arg(long)]
    theme: bool,

    /// Load a portfolio content file and fill in missing tool logos
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Submit the contact form
    #[arg(long, requires_all = ["name", "email", "details"])]
    contact: bool,

    /// Sender name (with --contact)
    #[arg(long)]
    name: Option<String>,

    /// Sender email (with --contact)
    #[arg(long)]
    email: Option<String>,

    /// Message (with --contact)
    #[arg(long)]
    details: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if let Some(name) = &args.icon {
        return print_icon(name);
    }

    if args.tools {
        return print_tools();
    }

    if args.env {
        return print_json(&serde_json::to_value(Environment::current())?);
    }

    if args.theme {
        let site = SiteConfig::load()?;
        return print_json(&Theme::load(&site).to_tailwind_json());
    }

    if let Some(path) = &args.content {
        return print_content(path);
    }

    if args.contact {
        let form = ContactForm {
            name: args.name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            details: args.details.unwrap_or_default(),
        };
        return submit_contact(&form).await;
    }

    print_tools()
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_icon(name: &str) -> Result<()> {
    let icon = icons::tool_icon(name);
    if icon.is_none() {
        tracing::info!("No icon for {:?}", name);
    }

    print_json(&serde_json::json!({
        "tool": name,
        "normalized": icons::normalize(name),
        "icon": icon,
    }))
}

fn print_tools() -> Result<()> {
    let table = IconTable::builtin();
    let tools: Vec<_> = table
        .iter()
        .map(|(name, path)| serde_json::json!({ "name": name, "icon": path }))
        .collect();

    print_json(&serde_json::json!({
        "count": table.len(),
        "tools": tools,
    }))
}

fn print_content(path: &Path) -> Result<()> {
    let mut portfolio = Portfolio::load(path)?;

    let missing = portfolio.resolve_logos();
    if !missing.is_empty() {
        tracing::warn!("Tools without a logo: {}", missing.join(", "));
    }

    print_json(&serde_json::to_value(&portfolio)?)
}

async fn submit_contact(form: &ContactForm) -> Result<()> {
    let api = Api::new(Environment::current());
    tracing::info!("Submitting contact form to {}", api.contact.endpoint());

    let delivered = api
        .contact
        .submit(form)
        .await
        .context("Contact form was not delivered")?;

    print_json(&serde_json::json!({ "delivered": delivered }))
}
