use clap::Parser;
use engine::{EngineError, Partner, ProfitShares};
use serde::Deserialize;
use server::ProductionDefaults;

const DEFAULT_CONFIG_PATH: &str = "settings.toml";

#[derive(Debug, Parser)]
#[command(name = "plantbook", about = "Crushing plant bookkeeping server")]
struct Args {
    /// Settings file path (TOML).
    #[arg(long, env = "PLANTBOOK_CONFIG")]
    config: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: Database,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            database: Database::Sqlite("plantbook.db".to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProfitSharing {
    pub partner_a_name: String,
    pub partner_a_percent: f64,
    pub partner_b_name: String,
    pub partner_b_percent: f64,
}

impl Default for ProfitSharing {
    fn default() -> Self {
        Self {
            partner_a_name: "Partner A".to_string(),
            partner_a_percent: 50.0,
            partner_b_name: "Partner B".to_string(),
            partner_b_percent: 50.0,
        }
    }
}

impl ProfitSharing {
    /// Validate the configured split.
    pub fn shares(&self) -> Result<ProfitShares, EngineError> {
        ProfitShares::new(
            Partner {
                name: self.partner_a_name.clone(),
                percent: self.partner_a_percent,
            },
            Partner {
                name: self.partner_b_name.clone(),
                percent: self.partner_b_percent,
            },
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Production {
    pub default_clay_dust_percent: f64,
    pub default_allowance_percent: f64,
}

impl Default for Production {
    fn default() -> Self {
        let defaults = ProductionDefaults::default();
        Self {
            default_clay_dust_percent: defaults.clay_dust_percent,
            default_allowance_percent: defaults.allowance_percent,
        }
    }
}

impl Production {
    pub fn defaults(&self) -> ProductionDefaults {
        ProductionDefaults {
            clay_dust_percent: self.default_clay_dust_percent,
            allowance_percent: self.default_allowance_percent,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub profit_sharing: ProfitSharing,
    pub production: Production,
}

impl Settings {
    /// Read the settings file, then `PLANTBOOK_<SECTION>__<KEY>` overrides.
    pub fn new() -> Result<Self, config::ConfigError> {
        let args = Args::parse();
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("PLANTBOOK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
