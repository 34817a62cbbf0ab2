use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use version_notice::config::{self, NoticeConfig};
use version_notice::i18n::Locale;
use version_notice::logging::{self, LogFormat};
use version_notice::render::{self, target::FooterDocument};
use version_notice::version::client::ReqwestClient;
use version_notice::version::compare::compare_versions_i32;
use version_notice::version::format::format_version_with;
use version_notice::version::UpdateChecker;

#[derive(Parser)]
#[command(name = "version-notice")]
#[command(version, about = "Check for a newer published version and render a footer notice")]
struct Cli {
    /// Configuration file (defaults to the XDG config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// URL or path of the deployed version marker
    #[arg(long, global = true)]
    local: Option<String>,

    /// Site origin the local marker is resolved against
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Mirror of the published version marker
    #[arg(long, global = true)]
    proxy: Option<String>,

    /// Published version marker on the origin host
    #[arg(long, global = true)]
    direct: Option<String>,

    /// Proxy timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Display language (en, zh-CN)
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to a file instead of stderr; without PATH, the default log file
    #[arg(long, global = true, num_args = 0..=1, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the update check and print a summary
    Check {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the update check and print the footer HTML
    Render {
        /// Render into the fallback container instead of after the footer text
        #[arg(long)]
        no_anchor: bool,
    },
    /// Print a version token in display form
    Format { token: String },
    /// Compare two version tokens, printing 1, -1 or 0
    Compare { left: String, right: String },
}

impl Cli {
    fn log_destination(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .map(|path| path.unwrap_or_else(config::log_path))
    }

    fn load_config(&self) -> anyhow::Result<NoticeConfig> {
        let path = self.config.clone().unwrap_or_else(config::config_path);
        let mut config = NoticeConfig::load(&path)?;

        if let Some(local) = &self.local {
            config.local_version = local.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(proxy) = &self.proxy {
            config.proxy_url = proxy.clone();
        }
        if let Some(direct) = &self.direct {
            config.direct_url = direct.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.proxy_timeout_ms = timeout_ms;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }

        Ok(config)
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli.load_config()?;
    let messages = config.locale.messages();

    match cli.command {
        Command::Format { token } => {
            println!("{}", format_version_with(&token, messages.unknown_version));
        }
        Command::Compare { left, right } => {
            println!("{}", compare_versions_i32(&left, &right));
        }
        Command::Check { json } => {
            let checker = UpdateChecker::from_config(ReqwestClient::new()?, &config);
            match checker.check_for_updates().await {
                Ok(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
                Ok(result) if result.has_update => println!(
                    "{}: {} → {} ({})",
                    messages.version_label,
                    result.current_formatted,
                    result.latest_formatted,
                    messages.update_badge
                ),
                Ok(result) => println!(
                    "{}: {} {}",
                    messages.version_label, result.current_formatted, messages.up_to_date
                ),
                Err(e) => {
                    eprintln!("{}: {}", messages.error_prefix, e.detail());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Render { no_anchor } => {
            let checker = UpdateChecker::from_config(ReqwestClient::new()?, &config);
            let outcome = checker.check_for_updates().await;

            let mut footer = if no_anchor {
                FooterDocument::with_container()
            } else {
                FooterDocument::with_anchor(
                    r#"<p class="text-gray-500 text-sm">&copy; All rights reserved</p>"#,
                )
            };
            render::present(&mut footer, &outcome, messages, &config.repository_url);
            print!("{}", footer.to_html());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    let log_file = cli.log_destination();
    let _guard = logging::init(&cli.log_level, log_file.as_deref(), format)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
