use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
    pub max_body_size: usize,
    pub seed_sample_data: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://todos.db?mode=rwc");

        let host: IpAddr = env_or("TODOBOARD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid TODOBOARD_HOST: {e}"))?;

        let port: u16 = env_or("TODOBOARD_PORT", "8000")
            .parse()
            .map_err(|e| format!("Invalid TODOBOARD_PORT: {e}"))?;

        let max_connections: u32 = env_or("TODOBOARD_MAX_CONNECTIONS", "5")
            .parse()
            .map_err(|e| format!("Invalid TODOBOARD_MAX_CONNECTIONS: {e}"))?;
        if max_connections == 0 {
            return Err("TODOBOARD_MAX_CONNECTIONS must be at least 1".to_string());
        }

        let max_body_size: usize = env_or("TODOBOARD_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid TODOBOARD_MAX_BODY_SIZE: {e}"))?;

        let seed_sample_data = parse_bool("TODOBOARD_SEED", &env_or("TODOBOARD_SEED", "true"))?;

        let log_level = env_or("TODOBOARD_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
            max_body_size,
            seed_sample_data,
            log_level,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid {key}: expected true or false, got '{other}'")),
    }
}
