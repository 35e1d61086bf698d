use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BssidScraperError {
    #[error("Unable to load configuration")]
    CannotLoadConfig,
    #[error("Error contacting the Meraki dashboard")]
    MerakiConnectError,
    #[error("CSV Error")]
    CsvError,
}
