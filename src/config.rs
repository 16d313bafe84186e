//! Command line and runtime configuration

use std::path::PathBuf;

use clap::Parser;
use tui_dispatch_debug::DebugCliArgs;

use crate::api::DEFAULT_API_URL;
use crate::catalog::SortTable;
use crate::i18n::Lang;

/// Browse a Pokedex in the terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Search, sort and filter a Pokedex in French or English")]
pub struct Args {
    /// Endpoint returning `{ "data": [...] }`
    #[arg(long, env = "POKEDEX_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Starting display language
    #[arg(long, value_enum, default_value = "fr")]
    pub lang: Lang,

    /// How the eight sort labels map to sort keys
    #[arg(long, value_enum, default_value = "labeled")]
    pub sort_table: SortTable,

    /// Write logs to this file (filter with POKEDEX_LOG or RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub debug: DebugCliArgs,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub lang: Lang,
    pub sort_table: SortTable,
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Split the parsed arguments into runtime config and debug flags.
    pub fn into_parts(self) -> (Config, DebugCliArgs) {
        let config = Config {
            api_url: self.api_url,
            lang: self.lang,
            sort_table: self.sort_table,
            log_file: self.log_file,
        };
        (config, self.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pokedex"]).unwrap();
        let (config, _) = args.into_parts();
        assert_eq!(config.lang, Lang::Fr);
        assert_eq!(config.sort_table, SortTable::Labeled);
        assert!(config.log_file.is_none());
        if std::env::var_os("POKEDEX_API_URL").is_none() {
            assert_eq!(config.api_url, DEFAULT_API_URL);
        }
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "pokedex",
            "--api-url",
            "http://localhost:9000/api/pokemon",
            "--lang",
            "en",
            "--sort-table",
            "legacy",
            "--log-file",
            "pokedex.log",
        ])
        .unwrap();
        let (config, _) = args.into_parts();
        assert_eq!(config.api_url, "http://localhost:9000/api/pokemon");
        assert_eq!(config.lang, Lang::En);
        assert_eq!(config.sort_table, SortTable::Legacy);
        assert_eq!(config.log_file, Some(PathBuf::from("pokedex.log")));
    }
}
