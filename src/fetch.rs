use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// One day's entry in the upstream yearly holiday document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDayRecord {
    /// True for a public holiday, false for a compensating workday.
    pub holiday: bool,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct YearHolidayResponse {
    code: i64,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    holiday: HashMap<String, RawDayRecord>,
}

#[derive(Debug)]
pub enum FetchError {
    /// Timeout, connection failure, or non-success HTTP status.
    Transport(reqwest::Error),
    /// The response parsed but the endpoint reported a failure code.
    Api { code: i64, msg: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "transport error: {err}"),
            FetchError::Api { code, msg } => write!(f, "endpoint error (code {code}): {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Source of yearly holiday data. Implemented by the HTTP client and by
/// in-memory stubs in tests.
pub trait HolidaySource {
    fn fetch_year(
        &self,
        year: i32,
    ) -> impl Future<Output = FetchResult<HashMap<String, RawDayRecord>>> + Send;
}

/// HTTP client for the yearly holiday endpoint.
pub struct HolidayApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HolidayApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> FetchResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

impl HolidaySource for HolidayApiClient {
    async fn fetch_year(&self, year: i32) -> FetchResult<HashMap<String, RawDayRecord>> {
        let url = format!("{}/{year}", self.base_url.trim_end_matches('/'));
        log::debug!("fetching holiday data from {url}");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: YearHolidayResponse = response.json().await?;
        if body.code != 0 {
            return Err(FetchError::Api {
                code: body.code,
                msg: body.msg.unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        Ok(body.holiday)
    }
}
