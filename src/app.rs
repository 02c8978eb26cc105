use crate::page::PageHandle;
use crate::route::{HOME_PATH, Route, VACANCIES_PATH, VACANCIES_TITLE};
use crate::router::Router;

/// A link in the nav bar. Following it goes through the router, never a reload.
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Главная",
        path: HOME_PATH,
    },
    NavLink {
        label: VACANCIES_TITLE,
        path: VACANCIES_PATH,
    },
];

pub struct App {
    pub page: PageHandle,
    pub router: Router,
    pub selected: usize,
    pub scroll: u16,
}

impl App {
    pub fn new(page: PageHandle, router: Router) -> Self {
        let selected = NAV_LINKS
            .iter()
            .position(|l| l.path == router.current_path())
            .unwrap_or(0);

        Self {
            page,
            router,
            selected,
            scroll: 0,
        }
    }

    pub fn on_next_link(&mut self) {
        self.selected = (self.selected + 1) % NAV_LINKS.len();
    }

    pub fn on_prev_link(&mut self) {
        self.selected = if self.selected == 0 {
            NAV_LINKS.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn on_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn on_down(&mut self) {
        if self.router.current_route() == Route::Vacancies {
            self.scroll = self.scroll.saturating_add(1);
        }
    }

    pub fn on_page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(5);
    }

    pub fn on_page_down(&mut self) {
        if self.router.current_route() == Route::Vacancies {
            self.scroll = self.scroll.saturating_add(5);
        }
    }

    pub fn on_enter(&mut self) {
        let link = &NAV_LINKS[self.selected];
        self.scroll = 0;
        self.router.handle_navigate(link.path);
    }

    pub fn on_back(&mut self) {
        self.router.back();
        self.scroll = 0;
        self.sync_selection();
    }

    pub fn on_forward(&mut self) {
        self.router.forward();
        self.scroll = 0;
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        if let Some(i) = NAV_LINKS
            .iter()
            .position(|l| l.path == self.router.current_path())
        {
            self.selected = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::VacancyLoader;
    use crate::loader::tests::{Reply, ScriptedSource, vacancy};
    use crate::route::WELCOME_TITLE;
    use std::sync::Arc;
    use tokio::runtime::Handle;

    fn app(source: Arc<ScriptedSource>, initial: &str) -> App {
        let page = PageHandle::default();
        let loader = Arc::new(VacancyLoader::new(source, page.clone()));
        let router = Router::new(page.clone(), loader, Handle::current(), initial);
        App::new(page, router)
    }

    #[tokio::test]
    async fn test_selection_follows_initial_path() {
        assert_eq!(app(ScriptedSource::new(vec![]), "/").selected, 0);
        assert_eq!(app(ScriptedSource::new(vec![]), "/vacs").selected, 1);
        assert_eq!(app(ScriptedSource::new(vec![]), "/elsewhere").selected, 0);
    }

    #[tokio::test]
    async fn test_link_cycling_wraps() {
        let mut app = app(ScriptedSource::new(vec![]), "/");

        app.on_prev_link();
        assert_eq!(app.selected, 1);
        app.on_next_link();
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn test_enter_follows_link_and_back_returns() {
        let source =
            ScriptedSource::new(vec![Reply::Items(vec![vacancy("a", "b", "c", "d", "e")])]);
        let mut app = app(source.clone(), "/");
        app.router.ready();

        app.on_next_link();
        app.on_enter();
        assert_eq!(app.router.current_path(), "/vacs");
        assert_eq!(app.page.lock().title, VACANCIES_TITLE);
        while source.calls() == 0 {
            tokio::task::yield_now().await;
        }
        assert_eq!(source.calls(), 1);

        app.on_down();
        assert_eq!(app.scroll, 1);

        app.on_back();
        assert_eq!(app.router.current_path(), "/");
        assert_eq!(app.selected, 0);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.page.lock().title, WELCOME_TITLE);
    }

    #[tokio::test]
    async fn test_scroll_stays_put_on_welcome() {
        let mut app = app(ScriptedSource::new(vec![]), "/");
        app.router.ready();

        app.on_down();
        app.on_page_down();
        assert_eq!(app.scroll, 0);
    }
}
