//! In-memory address book standing in for a real browser session

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use addressbook_e2e::pages::{
    ADD_LINK_ID, ADD_TITLE, ENTRY_SELECTOR, INDEX_TITLE, STREET_INPUT_ID, SUBMIT_ID,
};
use addressbook_e2e::{E2eError, E2eResult, Launcher, Page, Routes};

/// Knobs for breaking the fake application in specific ways
#[derive(Debug, Clone, Default)]
pub struct Faults {
    /// The add link on the listing goes nowhere
    pub broken_add_link: bool,
    /// Submissions redirect but are never stored
    pub drop_submissions: bool,
    /// Title served for the listing instead of "Addresses"
    pub index_title: Option<String>,
    /// Street input is rendered under another id
    pub street_input_id: Option<String>,
    /// Launching a session fails
    pub launch_fails: bool,
    /// Ending a session fails
    pub close_fails: bool,
}

/// Shared state of the fake application and its sessions
#[derive(Clone, Default)]
pub struct FakeAddressBook {
    entries: Arc<Mutex<Vec<String>>>,
    faults: Arc<Faults>,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

impl FakeAddressBook {
    pub fn new(seed: &[&str]) -> Self {
        Self::with_faults(seed, Faults::default())
    }

    pub fn with_faults(seed: &[&str], faults: Faults) -> Self {
        Self {
            entries: Arc::new(Mutex::new(seed.iter().map(|s| s.to_string()).collect())),
            faults: Arc::new(faults),
            ..Default::default()
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Launcher for FakeAddressBook {
    async fn launch(&self) -> E2eResult<Box<dyn Page>> {
        if self.faults.launch_fails {
            return Err(E2eError::SessionStart("connection refused".to_string()));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakePage {
            book: self.clone(),
            routes: Routes::default(),
            state: Mutex::new(PageState::default()),
        }))
    }

    fn describe(&self) -> String {
        "fake browser".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Screen {
    #[default]
    Blank,
    Index,
    Add,
    NotFound,
}

#[derive(Default)]
struct PageState {
    url: String,
    screen: Screen,
    draft: String,
}

struct FakePage {
    book: FakeAddressBook,
    routes: Routes,
    state: Mutex<PageState>,
}

impl FakePage {
    fn show(&self, state: &mut PageState, url: String) {
        state.screen = if url == self.routes.index() {
            Screen::Index
        } else if url == self.routes.add() {
            Screen::Add
        } else {
            Screen::NotFound
        };
        state.url = url;
        state.draft.clear();
    }

    fn street_input_id(&self) -> &str {
        self.book
            .faults
            .street_input_id
            .as_deref()
            .unwrap_or(STREET_INPUT_ID)
    }
}

#[async_trait]
impl Page for FakePage {
    async fn goto(&self, url: &str) -> E2eResult<()> {
        let mut state = self.state.lock().unwrap();
        self.show(&mut state, url.to_string());
        Ok(())
    }

    async fn current_url(&self) -> E2eResult<String> {
        Ok(self.state.lock().unwrap().url.clone())
    }

    async fn title(&self) -> E2eResult<String> {
        let state = self.state.lock().unwrap();
        Ok(match state.screen {
            Screen::Index => self
                .book
                .faults
                .index_title
                .clone()
                .unwrap_or_else(|| INDEX_TITLE.to_string()),
            Screen::Add => ADD_TITLE.to_string(),
            Screen::NotFound => "Not Found".to_string(),
            Screen::Blank => String::new(),
        })
    }

    async fn type_into(&self, id: &str, text: &str) -> E2eResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.screen == Screen::Add && id == self.street_input_id() {
            state.draft.push_str(text);
            Ok(())
        } else {
            Err(E2eError::ElementNotFound(format!("#{id}")))
        }
    }

    async fn click(&self, id: &str) -> E2eResult<()> {
        let mut state = self.state.lock().unwrap();
        match (state.screen, id) {
            (Screen::Index, ADD_LINK_ID) => {
                if !self.book.faults.broken_add_link {
                    let url = self.routes.add();
                    self.show(&mut state, url);
                }
                Ok(())
            }
            (Screen::Add, SUBMIT_ID) => {
                let street = std::mem::take(&mut state.draft);
                if !self.book.faults.drop_submissions {
                    self.book.entries.lock().unwrap().push(street);
                }
                let url = self.routes.index();
                self.show(&mut state, url);
                Ok(())
            }
            _ => Err(E2eError::ElementNotFound(format!("#{id}"))),
        }
    }

    async fn texts(&self, selector: &str) -> E2eResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        if state.screen == Screen::Index && selector == ENTRY_SELECTOR {
            Ok(self.book.entries())
        } else {
            Ok(Vec::new())
        }
    }

    async fn close(self: Box<Self>) -> E2eResult<()> {
        self.book.closed.fetch_add(1, Ordering::SeqCst);
        if self.book.faults.close_fails {
            return Err(E2eError::SessionStart("session already gone".to_string()));
        }
        Ok(())
    }
}
