pub const VACANCIES_PATH: &str = "/vacs";
pub const HOME_PATH: &str = "/";

pub const VACANCIES_TITLE: &str = "Вакансии";
pub const WELCOME_TITLE: &str = "Добро пожаловать";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Vacancies,
}

impl Route {
    /// Exact match only. No parameters, no query string handling.
    pub fn from_path(path: &str) -> Self {
        if path == VACANCIES_PATH {
            Self::Vacancies
        } else {
            Self::Welcome
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Welcome => WELCOME_TITLE,
            Self::Vacancies => VACANCIES_TITLE,
        }
    }
}

/// Session history with a cursor, like the browser's.
#[derive(Debug)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Adds an entry after the cursor, dropping anything ahead of it.
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.into());
        self.index = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }
}
