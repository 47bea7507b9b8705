pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::pricing::InterestSchedule;
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, PaymentPlan};
#[cfg(feature = "cli")]
use crate::utils::error::{LotError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::collections::HashMap;
#[cfg(feature = "cli")]
use std::time::Duration;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "https://api-disponibilidade.onrender.com/lotes";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Term preselected for installment quotes when none is given.
pub const DEFAULT_TERM_MONTHS: u32 = 12;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lot-pricing")]
#[command(about = "Browse the lot inventory and simulate sale prices")]
pub struct CliConfig {
    /// Inventory endpoint returning a JSON array of lots
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Read the inventory from a local JSON file instead of the endpoint
    #[arg(long, global = true)]
    pub inventory_file: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Extra request header, repeatable
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_header, global = true)]
    pub headers: Vec<(String, String)>,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,

    #[arg(skip)]
    pub default_term: Option<u32>,

    #[arg(skip)]
    resolved_headers: HashMap<String, String>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List lots, optionally filtered by identifier text and status
    List {
        #[arg(short, long, default_value = "")]
        search: String,

        /// todos | disponível | vendido
        #[arg(long, default_value = "todos")]
        status: crate::core::catalog::StatusFilter,
    },
    /// Count available and sold lots
    Summary,
    /// Show the offered installment terms and their interest
    Terms,
    /// Simulate the price of one available lot
    Quote {
        #[arg(long)]
        lot_id: u64,

        #[arg(long, value_enum, default_value_t = PlanKind::Cash)]
        plan: PlanKind,

        /// Installment term in months
        #[arg(long)]
        term: Option<u32>,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a CSV with the quote of every available lot
    Export {
        #[arg(short, long)]
        output: String,

        #[arg(long, value_enum, default_value_t = PlanKind::Cash)]
        plan: PlanKind,

        #[arg(long)]
        term: Option<u32>,
    },
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanKind {
    #[value(alias = "avista")]
    Cash,
    #[value(aliases = ["parcelado", "prazo"])]
    Installment,
}

#[cfg(feature = "cli")]
fn parse_header(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fills every option not given on the command line from `file`, then
    /// lays the command-line headers over the file's.
    pub fn merge_file(&mut self, file: TomlConfig) {
        if self.endpoint.is_none() {
            self.endpoint = file.source.endpoint.clone();
        }
        if self.inventory_file.is_none() {
            self.inventory_file = file.inventory_file().map(str::to_string);
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = file.source.timeout_seconds;
        }
        if self.default_term.is_none() {
            self.default_term = file.default_term();
        }
        if let Some(headers) = file.source.headers {
            self.resolved_headers.extend(headers);
        }
        self.resolved_headers.extend(self.headers.iter().cloned());
    }

    /// Loads `--config` when given; headers from the command line are
    /// resolved either way.
    pub fn resolve(&mut self) -> Result<()> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        self.merge_file(file);
        Ok(())
    }

    /// Resolves `--plan`/`--term` into a payment plan.
    pub fn payment_plan(&self, plan: PlanKind, term: Option<u32>) -> Result<PaymentPlan> {
        match (plan, term) {
            (PlanKind::Cash, None) => Ok(PaymentPlan::Cash),
            (PlanKind::Cash, Some(_)) => Err(LotError::ConfigError {
                message: "--term only applies to --plan installment".to_string(),
            }),
            (PlanKind::Installment, term) => PaymentPlan::installment(
                term.or(self.default_term).unwrap_or(DEFAULT_TERM_MONTHS),
            ),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn inventory_file(&self) -> Option<&str> {
        self.inventory_file.as_deref()
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.resolved_headers
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.inventory_file() {
            Some(path) => validate_path("inventory_file", path)?,
            None => validate_url("endpoint", self.endpoint())?,
        }

        validate_range(
            "timeout_seconds",
            self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            1,
            600,
        )?;

        if let Some(term) = self.default_term {
            if !InterestSchedule::offers(term) {
                return Err(LotError::UnsupportedTerm { months: term });
            }
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("lot-pricing").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let mut config = parse(&["summary"]);
        config.resolve().unwrap();

        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.inventory_file().is_none());
        assert!(config.headers().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_list_arguments() {
        let config = parse(&["list", "--search", "quadra 12", "--status", "Vendido"]);
        match config.command {
            Command::List { search, status } => {
                assert_eq!(search, "quadra 12");
                assert_eq!(
                    status,
                    crate::core::catalog::StatusFilter::Only(crate::core::LotStatus::Sold)
                );
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_file_values_fill_missing_flags_only() {
        let mut config = parse(&[
            "--endpoint",
            "https://cli.example.com/lotes",
            "--header",
            "X-Api-Key=from-cli",
            "terms",
        ]);
        let file = TomlConfig::from_toml_str(
            r#"
[source]
endpoint = "https://file.example.com/lotes"
timeout_seconds = 5
headers = { "X-Api-Key" = "from-file", "X-Client" = "buriti" }

[simulation]
default_term = 48
"#,
        )
        .unwrap();

        config.merge_file(file);

        assert_eq!(config.endpoint(), "https://cli.example.com/lotes");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.headers().get("X-Api-Key").unwrap(), "from-cli");
        assert_eq!(config.headers().get("X-Client").unwrap(), "buriti");
        assert_eq!(config.default_term, Some(48));
    }

    #[test]
    fn test_payment_plan_resolution() {
        let mut config = parse(&["terms"]);
        assert_eq!(
            config.payment_plan(PlanKind::Cash, None).unwrap(),
            PaymentPlan::Cash
        );
        assert_eq!(
            config.payment_plan(PlanKind::Installment, None).unwrap(),
            PaymentPlan::Installment(NonZeroU32::new(12).unwrap())
        );

        config.default_term = Some(60);
        assert_eq!(
            config.payment_plan(PlanKind::Installment, None).unwrap(),
            PaymentPlan::Installment(NonZeroU32::new(60).unwrap())
        );
        assert_eq!(
            config.payment_plan(PlanKind::Installment, Some(24)).unwrap(),
            PaymentPlan::Installment(NonZeroU32::new(24).unwrap())
        );
        assert!(config.payment_plan(PlanKind::Installment, Some(13)).is_err());
        assert!(config.payment_plan(PlanKind::Cash, Some(24)).is_err());
    }

    #[test]
    fn test_plan_aliases() {
        let config = parse(&["quote", "--lot-id", "4", "--plan", "parcelado", "--term", "36"]);
        match config.command {
            Command::Quote { lot_id, plan, term, json } => {
                assert_eq!(lot_id, 4);
                assert_eq!(plan, PlanKind::Installment);
                assert_eq!(term, Some(36));
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bad_header_is_rejected() {
        let result = CliConfig::try_parse_from(["lot-pricing", "--header", "novalue", "terms"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_bad_endpoint() {
        let mut config = parse(&["--endpoint", "not-a-url", "summary"]);
        config.resolve().unwrap();
        assert!(config.validate().is_err());
    }
}
