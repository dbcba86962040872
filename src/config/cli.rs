use clap::{Parser, Subcommand};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "movie-ranker")]
#[command(about = "A ranked movie list with poster lookup")]
pub struct CliConfig {
    #[arg(long, default_value = "http://www.omdbapi.com/")]
    pub api_endpoint: String,

    #[arg(long, env = "OMDB_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, default_value = "./data")]
    pub data_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the ranked list.
    List,
    /// Add a movie at the given rank, shifting equal and lower ranks down.
    Add {
        title: String,

        #[arg(long)]
        year: Option<u16>,

        #[arg(long)]
        rank: u32,

        #[arg(long)]
        score: u8,
    },
    /// Delete the entry at a zero-based position.
    Delete { position: usize },
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("data_path", &self.data_path)?;
        if let Command::Add { year: Some(year), .. } = &self.command {
            validate_range("year", *year, 1900, 2030)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_command() {
        let config = CliConfig::parse_from([
            "movie-ranker",
            "add",
            "The Lion King",
            "--year",
            "1994",
            "--rank",
            "1",
            "--score",
            "9",
        ]);

        match config.command {
            Command::Add {
                ref title,
                year,
                rank,
                score,
            } => {
                assert_eq!(title, "The Lion King");
                assert_eq!(year, Some(1994));
                assert_eq!(rank, 1);
                assert_eq!(score, 9);
            }
            ref other => panic!("Expected Add command, got: {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_bad_endpoint() {
        let config = CliConfig::parse_from([
            "movie-ranker",
            "--api-endpoint",
            "ftp://example.com",
            "list",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_year_out_of_bounds() {
        let config = CliConfig::parse_from([
            "movie-ranker",
            "add",
            "Steamboat Willie",
            "--year",
            "1850",
            "--rank",
            "1",
            "--score",
            "5",
        ]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn defaults_are_valid() {
        let config = CliConfig::parse_from(["movie-ranker", "list"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.data_path(), "./data");
    }
}
