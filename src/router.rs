use crate::loader::{LoadOutcome, VacancyLoader};
use crate::page::PageHandle;
use crate::route::{History, Route};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Switches the page between the welcome and vacancies views.
///
/// Built once at startup. Every transition cancels whatever load the
/// previous one started, so a stale response never reaches the page.
pub struct Router {
    page: PageHandle,
    loader: Arc<VacancyLoader>,
    runtime: Handle,
    history: History,
    in_flight: Option<CancellationToken>,
}

impl Router {
    pub fn new(
        page: PageHandle,
        loader: Arc<VacancyLoader>,
        runtime: Handle,
        initial_path: impl Into<String>,
    ) -> Self {
        Self {
            page,
            loader,
            runtime,
            history: History::new(initial_path),
            in_flight: None,
        }
    }

    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    pub fn current_route(&self) -> Route {
        Route::from_path(self.history.current())
    }

    /// Initial render once the page is up.
    pub fn ready(&mut self) -> Option<JoinHandle<LoadOutcome>> {
        self.render()
    }

    /// An intercepted link click: record the path and render it in place.
    pub fn handle_navigate(&mut self, path: &str) -> Option<JoinHandle<LoadOutcome>> {
        debug!(path, "navigate");
        self.history.push(path);
        self.render()
    }

    /// The history cursor moved; render whatever it points at now.
    pub fn handle_pop_state(&mut self) -> Option<JoinHandle<LoadOutcome>> {
        debug!(path = self.history.current(), "popstate");
        self.render()
    }

    pub fn back(&mut self) -> Option<JoinHandle<LoadOutcome>> {
        if self.history.back() {
            self.handle_pop_state()
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<JoinHandle<LoadOutcome>> {
        if self.history.forward() {
            self.handle_pop_state()
        } else {
            None
        }
    }

    fn render(&mut self) -> Option<JoinHandle<LoadOutcome>> {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }

        let route = self.current_route();
        {
            let mut page = self.page.lock();
            page.title = route.title().to_string();
            page.welcome.visible = route == Route::Welcome;
            page.vacancies.visible = route == Route::Vacancies;
        }

        match route {
            Route::Welcome => None,
            Route::Vacancies => {
                let token = CancellationToken::new();
                self.in_flight = Some(token.clone());
                let loader = Arc::clone(&self.loader);
                Some(self.runtime.spawn(async move { loader.load(token).await }))
            }
        }
    }
}

impl Drop for Router {
    fn drop(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}
