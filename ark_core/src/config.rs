use aws_config::meta::region::RegionProviderChain;
use aws_sdk_dynamodb as ddb;
use std::env;

const TABLE_NAME: &str = "TABLE_NAME";
const DYNAMODB_ENDPOINT: &str = "DYNAMODB_ENDPOINT";
const DEFAULT_TABLE_NAME: &str = "Logs";
const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub table_name: String,
    pub endpoint: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig { table_name: DEFAULT_TABLE_NAME.to_string(), endpoint: None }
    }
}

impl StoreConfig {
    pub fn from_env() -> StoreConfig {
        StoreConfig {
            table_name: env::var(TABLE_NAME).unwrap_or_else(|_| DEFAULT_TABLE_NAME.to_string()),
            endpoint: env::var(DYNAMODB_ENDPOINT).ok(),
        }
    }

    pub async fn load_client(&self) -> ddb::Client {
        let region_provider = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
        let config = aws_config::from_env().region(region_provider).load().await;
        let ddb_config = match &self.endpoint {
            Some(endpoint) => ddb::config::Builder::from(&config).endpoint_url(endpoint).build(),
            None => ddb::config::Builder::from(&config).build()
        };
        ddb::Client::from_conf(ddb_config)
    }
}

#[test]
fn test_from_env() {
    env::set_var(TABLE_NAME, "ScannerLogs");
    env::set_var(DYNAMODB_ENDPOINT, "http://localhost:8000");
    let config = StoreConfig::from_env();
    env::remove_var(TABLE_NAME);
    env::remove_var(DYNAMODB_ENDPOINT);
    assert_eq!(config.table_name, "ScannerLogs");
    assert_eq!(config.endpoint, Some(String::from("http://localhost:8000")));
    assert_eq!(StoreConfig::from_env(), StoreConfig::default());
}

#[test]
fn test_default_table() {
    assert_eq!(StoreConfig::default().table_name, "Logs");
    assert_eq!(StoreConfig::default().endpoint, None);
}
