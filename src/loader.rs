use crate::api::VacancySource;
use crate::card::{Card, PLACEHOLDER_COUNT, vacancy_card};
use crate::error::LoadError;
use crate::page::PageHandle;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Real cards, one per vacancy.
    Loaded(usize),
    /// The load failed and placeholder cards were shown instead.
    Placeholder,
    /// A newer route transition superseded this load; the page was left alone.
    Cancelled,
}

pub struct VacancyLoader {
    source: Arc<dyn VacancySource>,
    page: PageHandle,
}

impl VacancyLoader {
    pub fn new(source: Arc<dyn VacancySource>, page: PageHandle) -> Self {
        Self { source, page }
    }

    /// Clears the vacancies container and fills it from the source.
    ///
    /// Failures of any kind (transport, status, parse, empty list) are
    /// logged and masked with placeholder cards. Nothing is written once
    /// `token` is cancelled.
    pub async fn load(&self, token: CancellationToken) -> LoadOutcome {
        {
            let mut page = self.page.lock();
            if token.is_cancelled() {
                return LoadOutcome::Cancelled;
            }
            page.vacancies.clear();
        }

        let result = tokio::select! {
            _ = token.cancelled() => return LoadOutcome::Cancelled,
            r = self.source.fetch_vacancies() => r,
        };

        let result = result.and_then(|items| {
            if items.is_empty() {
                Err(LoadError::Empty)
            } else {
                Ok(items)
            }
        });

        let mut page = self.page.lock();
        if token.is_cancelled() {
            return LoadOutcome::Cancelled;
        }

        match result {
            Ok(items) => {
                for v in &items {
                    page.vacancies.append(vacancy_card(
                        &v.title,
                        &v.company,
                        &v.location,
                        &v.salary,
                        &v.description,
                    ));
                }
                info!("loaded {} vacancies", items.len());
                LoadOutcome::Loaded(items.len())
            }
            Err(e) => {
                warn!("Failed to load vacancies: {}", e);
                for _ in 0..PLACEHOLDER_COUNT {
                    page.vacancies.append(Card::placeholder());
                }
                LoadOutcome::Placeholder
            }
        }
    }
}
