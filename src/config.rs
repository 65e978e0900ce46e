use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::Error;

const BIND_ADDRESS: &str = "TARIFA_BIND_ADDRESS";
const RATES_PATH: &str = "TARIFA_RATES_PATH";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_RATES_PATH: &str = "config/rates.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub rates_path: PathBuf,
}

impl Config {
    /// Reads configuration from the process environment. Call
    /// `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let bind_address = or_default(lookup(BIND_ADDRESS), DEFAULT_BIND_ADDRESS)?;
        let bind_address = bind_address.parse().map_err(|err| {
            Error::config_error(format!("invalid {}: {}", BIND_ADDRESS, err))
        })?;

        let rates_path = or_default(lookup(RATES_PATH), DEFAULT_RATES_PATH)?.into();

        Ok(Self {
            bind_address,
            rates_path,
        })
    }
}

fn or_default(value: Result<String, env::VarError>, default: &str) -> Result<String, Error> {
    match value {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => {
            tracing::info!("using default: {}", default);
            Ok(default.into())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        vars: HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Result<String, env::VarError> {
        move |key| {
            vars.get(key)
                .map(|value| value.to_string())
                .ok_or(env::VarError::NotPresent)
        }
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(HashMap::new())).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.rates_path, PathBuf::from("config/rates.json"));
    }

    #[test]
    fn reads_overrides() {
        let vars = HashMap::from([
            (BIND_ADDRESS, "0.0.0.0:8080"),
            (RATES_PATH, "/etc/tarifa/rates.json"),
        ]);
        let config = Config::from_lookup(lookup(vars)).unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.rates_path, PathBuf::from("/etc/tarifa/rates.json"));
    }

    #[test]
    fn rejects_bad_address() {
        let vars = HashMap::from([(BIND_ADDRESS, "not-an-address")]);
        let err = Config::from_lookup(lookup(vars)).unwrap_err();

        assert_eq!(err.code, 2);
    }
}
