use std::env;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// When set, every request plans with an RNG seeded from this value.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `PLANNER_SEED`, keeping defaults for anything missing or
    /// unparsable.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| PORT.to_string())
            .parse()
            .unwrap_or(PORT);
        let seed = env::var("PLANNER_SEED")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok());

        Self { host, port, seed }
    }
}
