use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use positivity_core::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "positivity")]
#[command(about = "A daily affirmation in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// trace|debug|info|warn|error; defaults by build mode.
    #[arg(long, env = "POSITIVITY_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, env = "POSITIVITY_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's message.
    Today,

    /// Show the message a given date selects.
    Show {
        /// Calendar date, YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,
    },

    /// Show one random message.
    Random {
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the catalog.
    Catalog {
        #[arg(long)]
        json: bool,

        /// Only list one category (motivation|gratitude|self-love|success|mindfulness).
        #[arg(long)]
        category: Option<Category>,
    },

    /// Share today's message.
    Share {
        #[command(flatten)]
        share: ShareArgs,
    },

    /// Live view: n = new message, s = share, q = quit.
    Watch {
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        share: ShareArgs,
    },
}

#[derive(clap::Args, Clone, Default)]
pub struct ShareArgs {
    /// Native share command. Receives the share payload as JSON on stdin;
    /// exit status 130 means the user cancelled. Without it the message is
    /// copied to the clipboard.
    #[arg(long, env = "POSITIVITY_SHARE_COMMAND")]
    pub share_command: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use positivity_core::Category;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_date() {
        let cli = Cli::try_parse_from(["positivity", "show", "--date", "2026-02-01"])
            .expect("valid args");
        match cli.command {
            Some(Commands::Show { date }) => assert_eq!(date.to_string(), "2026-02-01"),
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn parses_catalog_category_filter() {
        let cli = Cli::try_parse_from(["positivity", "catalog", "--category", "self-love"])
            .expect("valid args");
        match cli.command {
            Some(Commands::Catalog { json, category }) => {
                assert!(!json);
                assert_eq!(category, Some(Category::SelfLove));
            }
            _ => panic!("expected catalog command"),
        }
        assert!(Cli::try_parse_from(["positivity", "catalog", "--category", "Self Love"]).is_err());
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(Cli::try_parse_from(["positivity", "show", "--date", "02/01/2026"]).is_err());
    }
}
