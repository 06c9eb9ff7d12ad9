//! Backend settings: sheet URL and scraper token.

use anyhow::Context;
use clap::Subcommand;
use pulse_core::AppConfig;

use crate::data;

/// Sub-commands available under `settings`.
#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show stored settings (the token is masked)
    Show,
    /// Save the sheet URL and optionally a new scraper token
    Set {
        #[arg(long)]
        sheet_url: String,
        /// Leave unset to keep the stored token
        #[arg(long)]
        apify_token: Option<String>,
    },
}

pub(crate) async fn run(config: &AppConfig, command: SettingsCommands) -> anyhow::Result<()> {
    let client = data::connect(config)?;

    let settings = match command {
        SettingsCommands::Show => client.settings().await.context("failed to load settings")?,
        SettingsCommands::Set {
            sheet_url,
            apify_token,
        } => {
            let saved = client
                .update_settings(&sheet_url, apify_token.as_deref())
                .await
                .context("failed to save settings")?;
            println!("settings saved");
            saved
        }
    };

    println!("sheet url:   {}", or_dash(&settings.sheet_url));
    println!("apify token: {}", mask_token(&settings.apify_token));
    println!("groups:      {}", settings.groups.len());
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "\u{2014}"
    } else {
        value
    }
}

/// Keep the last four characters so the user can tell tokens apart.
pub(crate) fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count == 0 {
        return "\u{2014}".to_string();
    }
    if count <= 8 {
        return "*".repeat(count);
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}
