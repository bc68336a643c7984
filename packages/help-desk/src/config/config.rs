use anyhow::{Result, anyhow};
use std::{env, path::PathBuf};

use crate::models::model::{
    DatabaseConfig, HelpDeskConfig, LedgerConfig, ServerConfig, TelegramConfig,
};

impl HelpDeskConfig {
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file: {}", e))?;

        let config: Self =
            toml::from_str(&contents).map_err(|e| anyhow!("Failed to parse config: {}", e))?;

        Ok(config)
    }

    pub fn from_env() -> Result<Self> {
        Ok(HelpDeskConfig {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|e| anyhow!("Invalid PORT: {}", e))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| anyhow!("DATABASE_URL must be set"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|e| anyhow!("Invalid DATABASE_MAX_CONNECTIONS: {}", e))?,
            },
            telegram: TelegramConfig::from_env()?,
            ledger: LedgerConfig::from_env()?,
        })
    }
}

impl TelegramConfig {
    pub fn from_env() -> Result<Self> {
        Ok(TelegramConfig {
            bot_token: env::var("BOT_TOKEN").map_err(|_| anyhow!("BOT_TOKEN must be set"))?,
            rating_page_url: env::var("RATING_PAGE_URL")
                .unwrap_or_else(|_| "https://arx.netlify.app".to_string()),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.bot_token.contains(':') {
            return Err(anyhow!("Invalid bot token format"));
        }

        if !self.rating_page_url.starts_with("http") {
            return Err(anyhow!("Invalid rating page URL format"));
        }

        Ok(())
    }
}

impl LedgerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(LedgerConfig {
            rpc_url: env::var("LEDGER_RPC_URL")
                .map_err(|_| anyhow!("LEDGER_RPC_URL must be set"))?,
            private_key: env::var("LEDGER_PRIVATE_KEY")
                .map_err(|_| anyhow!("LEDGER_PRIVATE_KEY must be set"))?,
            portal_address: env::var("LEDGER_PORTAL_ADDRESS")
                .map_err(|_| anyhow!("LEDGER_PORTAL_ADDRESS must be set"))?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.rpc_url.starts_with("http") {
            return Err(anyhow!("Invalid RPC URL format"));
        }

        if self.private_key.len() != 64 && self.private_key.len() != 66 {
            return Err(anyhow!("Invalid private key length"));
        }

        if !self.portal_address.starts_with("0x") || self.portal_address.len() != 42 {
            return Err(anyhow!("Invalid portal address"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::model::{LedgerConfig, TelegramConfig};

    #[test]
    fn ledger_config_validation() {
        let mut config = LedgerConfig {
            rpc_url: "https://sepolia.example.org".to_string(),
            private_key: "2ea06215c638e5ac29dd5f2b894b936999e000888aace2400e691859e9d7fcba"
                .to_string(),
            portal_address: "0x878c92FD89d8E0B93Dc0a3c907A2adc7577e39c5".to_string(),
        };
        assert!(config.validate().is_ok());

        config.rpc_url = "ftp://nope".to_string();
        assert!(config.validate().is_err());

        config.rpc_url = "https://sepolia.example.org".to_string();
        config.private_key = "too-short".to_string();
        assert!(config.validate().is_err());

        config.private_key =
            "2ea06215c638e5ac29dd5f2b894b936999e000888aace2400e691859e9d7fcba".to_string();
        config.portal_address = "878c92FD89d8E0B93Dc0a3c907A2adc7577e39c5".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn telegram_config_validation() {
        let mut config = TelegramConfig {
            bot_token: "123456:ABC-DEF".to_string(),
            rating_page_url: "https://arx.netlify.app".to_string(),
        };
        assert!(config.validate().is_ok());

        config.bot_token = "no-colon".to_string();
        assert!(config.validate().is_err());

        config.bot_token = "123456:ABC-DEF".to_string();
        config.rating_page_url = "arx.netlify.app".to_string();
        assert!(config.validate().is_err());
    }
}
