use crate::card::Card;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const WELCOME_TEXT: &str = "Выберите раздел.";

/// The welcome/content block.
#[derive(Debug)]
pub struct Block {
    pub text: String,
    pub visible: bool,
}

/// The vacancies list container.
#[derive(Debug, Default)]
pub struct Container {
    cards: Vec<Card>,
    pub visible: bool,
}

impl Container {
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Everything the router and loader are allowed to touch.
#[derive(Debug)]
pub struct Page {
    pub title: String,
    pub welcome: Block,
    pub vacancies: Container,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            title: String::new(),
            welcome: Block {
                text: WELCOME_TEXT.to_string(),
                visible: true,
            },
            vacancies: Container::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PageHandle(Arc<Mutex<Page>>);

impl PageHandle {
    pub fn new(page: Page) -> Self {
        Self(Arc::new(Mutex::new(page)))
    }

    /// A panicked loader task must not take the page down with it.
    pub fn lock(&self) -> MutexGuard<'_, Page> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
