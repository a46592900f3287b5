use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, info};

use crate::changelog::Changelog;
use crate::cli::parser::{Command, Options};
use crate::config::{self, ConfigKey};
use crate::error::ChangelogError;
use crate::github::client::{DEFAULT_API_URL, HttpTransport, Transport};
use crate::github::{Repository, issues, milestones};
use crate::output;
use crate::render;

const NO_TOKEN_WARNING: &str = "**WARNING** You have not specified a GitHub Token.
This means the request rate is severely limited.
To generate a GitHub token, see https://help.github.com/articles/creating-an-access-token-for-command-line-use/
";

/// Runs one changelog generation.
///
/// `project_dir` is where `.ghcl/config.json` is looked up; `None` means the
/// current directory.
pub async fn run(
    args: Vec<String>,
    mut stdout_additional: Option<&mut dyn Write>,
    project_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let options = match crate::cli::parser::parse_args(&args) {
        Command::Generate(options) => options,
        Command::Help(usage) => {
            output::println(usage.trim_end(), &mut stdout_additional)?;
            return Ok(());
        }
        Command::Invalid(message) => return Err(anyhow::Error::msg(message)),
    };

    let user = required(
        options.user.as_deref(),
        "You must specify a username or organisation name.",
    )?;
    let repository = Repository::new(
        user,
        required(options.repository.as_deref(), "You must specify a repository name.")?,
    );

    let milestone = required(options.milestone.as_deref(), "You must specify the milestone.")?;

    let project_config = match project_dir {
        Some(dir) => config::load_project_config(dir)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            config::load_project_config(&cwd)?
        }
    };
    let settings = config::update_config(&project_config, &flag_overrides(&options));
    let token = config::get_str(&settings, ConfigKey::Token);
    if token.is_none() {
        eprintln!("{NO_TOKEN_WARNING}");
    }

    if options.prepend {
        debug!("--prepend is not supported yet; writing the changelog as is");
    }
    if let Some(title) = &options.title {
        debug!("--title {title:?} is not used");
    }

    let api = config::get_str(&settings, ConfigKey::ApiUrl)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let transport = HttpTransport::new(token).context("Failed to create HTTP client")?;

    let changelog = collect(&transport, &api, &repository, &milestone).await?;
    info!(
        "{} changelog entries for milestone \"{milestone}\"",
        changelog.total_count()
    );

    let text = render::render_changelog(
        &milestone,
        chrono::Local::now().date_naive(),
        &changelog,
    );
    output::write_changelog(&text, options.file.as_deref(), &mut stdout_additional)?;
    Ok(())
}

/// Resolves the milestone and gathers every classified issue for it.
pub async fn collect<T: Transport>(
    transport: &T,
    api: &str,
    repository: &Repository,
    milestone: &str,
) -> Result<Changelog, ChangelogError> {
    let number = milestones::resolve_milestone(transport, api, repository, milestone).await?;
    issues::aggregate(transport, api, repository, number).await
}

fn required(value: Option<&str>, message: &str) -> Result<String, ChangelogError> {
    value
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ChangelogError::Usage(message.to_string()))
}

fn flag_overrides(options: &Options) -> HashMap<ConfigKey, Value> {
    let mut updates = HashMap::new();
    if let Some(token) = options.token.as_deref().filter(|t| !t.is_empty()) {
        updates.insert(ConfigKey::Token, Value::from(token));
    }
    if let Some(api_url) = options.api_url.as_deref().filter(|u| !u.is_empty()) {
        updates.insert(ConfigKey::ApiUrl, Value::from(api_url));
    }
    updates
}
