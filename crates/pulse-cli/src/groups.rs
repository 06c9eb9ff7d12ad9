//! Keyword group management against the backend.

use anyhow::Context;
use clap::Subcommand;
use pulse_core::{AppConfig, Group, GroupDraft};

use crate::data;

/// Sub-commands available under `groups`.
#[derive(Debug, Subcommand)]
pub enum GroupsCommands {
    /// List configured groups
    List,
    /// Create a group, or replace the one with the same name
    Add {
        #[arg(long)]
        name: String,
        /// Comma-separated keywords (any one must match)
        #[arg(long)]
        keywords: String,
        /// Comma-separated keywords that exclude a record
        #[arg(long, default_value = "")]
        exclude: String,
        /// Match keywords as whole words instead of substrings
        #[arg(long)]
        exact: bool,
    },
    /// Delete a group by name
    Remove {
        #[arg(long)]
        name: String,
    },
}

pub(crate) async fn run(config: &AppConfig, command: GroupsCommands) -> anyhow::Result<()> {
    let client = data::connect(config)?;

    let groups = match command {
        GroupsCommands::List => {
            client
                .settings()
                .await
                .context("failed to load groups")?
                .groups
        }
        GroupsCommands::Add {
            name,
            keywords,
            exclude,
            exact,
        } => {
            let group = GroupDraft {
                name,
                keywords,
                exclude_keywords: exclude,
                exact_match: exact,
            }
            .into_group()?;
            let groups = client.add_group(&group).await?;
            println!("saved group '{}'", group.name);
            groups
        }
        GroupsCommands::Remove { name } => {
            let groups = client.delete_group(&name).await?;
            println!("removed group '{name}'");
            groups
        }
    };

    print!("{}", render_groups(&groups));
    Ok(())
}

pub(crate) fn render_groups(groups: &[Group]) -> String {
    if groups.is_empty() {
        return "no groups configured; add one with `pulse groups add`\n".to_string();
    }

    let mut out = format!("{:<20}{:<8}{:<32}EXCLUDE\n", "NAME", "MODE", "KEYWORDS");
    for g in groups {
        let mode = if g.exact_match { "word" } else { "substr" };
        let exclude = if g.exclude_keywords.is_empty() {
            "\u{2014}".to_string()
        } else {
            g.exclude_keywords.join(", ")
        };
        out.push_str(&format!(
            "{:<20}{:<8}{:<32}{}\n",
            g.name,
            mode,
            g.keywords.join(", "),
            exclude
        ));
    }
    out
}
