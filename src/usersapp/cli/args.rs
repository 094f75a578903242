use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use usersapp::config::AppConfig;

/// Package version, with `@hash date` appended on untagged or dirty builds.
fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let base = env!("CARGO_PKG_VERSION");
        match (env!("IS_RELEASE"), env!("GIT_HASH")) {
            ("true", _) | (_, "") => base.to_string(),
            (_, hash) => format!("{}@{} {}", base, hash, env!("GIT_COMMIT_DATE")),
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "usersapp", bin_name = "usersapp", version = version())]
#[command(about = "Keep a list of users from an interactive prompt", long_about = None)]
pub struct Cli {
    /// Read settings from a JSON config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Flags win over whatever the config file says.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if self.no_banner {
            config.show_banner = false;
        }
        if self.no_color {
            config.color = false;
        }
        config
    }
}
