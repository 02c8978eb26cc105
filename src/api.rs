use crate::error::LoadError;
use crate::models::Vacancy;
use async_trait::async_trait;
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/vacancies";

/// Where the loader gets its vacancies from.
#[async_trait]
pub trait VacancySource: Send + Sync {
    async fn fetch_vacancies(&self) -> Result<Vec<Vacancy>, LoadError>;
}

/// Plain `GET` against a fixed URL. No parameters, no auth headers.
pub struct HttpVacancySource {
    client: reqwest::Client,
    url: String,
}

impl HttpVacancySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl VacancySource for HttpVacancySource {
    async fn fetch_vacancies(&self) -> Result<Vec<Vacancy>, LoadError> {
        debug!(url = %self.url, "fetching vacancies");

        let resp = self.client.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(LoadError::Status(resp.status()));
        }

        let body = resp.bytes().await?;
        let items: Vec<Vacancy> = serde_json::from_slice(&body)?;
        Ok(items)
    }
}
