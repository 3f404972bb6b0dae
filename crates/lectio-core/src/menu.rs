//! Cascading select-menu model: translation → book → chapter.
//!
//! Pure state: callers fetch from a [`SelectionServicePort`](crate::ports::SelectionServicePort)
//! and feed the results in. Choosing a translation invalidates the book and
//! chapter menus; choosing a book invalidates the chapter menu.

use serde::Serialize;
use thiserror::Error;

use crate::domain::Translation;
use crate::ports::SelectionResult;

/// Placeholder shown at the top of the translation menu.
pub const TRANSLATION_PLACEHOLDER: &str = "Switch Translation";

/// Sole option when the translation list could not be loaded.
pub const TRANSLATIONS_UNAVAILABLE: &str = "Error loading translations";

/// Placeholder shown at the top of the book menu.
pub const BOOK_PLACEHOLDER: &str = "Select a book";

/// Placeholder shown at the top of the chapter menu.
pub const CHAPTER_PLACEHOLDER: &str = "Select a chapter";

/// Shown when a book has no chapters (or the list failed to load).
pub const NO_CHAPTERS: &str = "No chapters available";

/// One entry in a select menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuOption {
    /// Value submitted when the option is chosen.
    pub value: String,
    /// Text displayed to the user.
    pub label: String,
    /// Placeholders and notices cannot be chosen.
    pub disabled: bool,
}

impl MenuOption {
    fn choice(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    fn notice(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            disabled: true,
        }
    }
}

/// The contents of one select menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Menu {
    options: Vec<MenuOption>,
}

impl Menu {
    fn with_placeholder(label: &str) -> Self {
        Self {
            options: vec![MenuOption::notice(label)],
        }
    }

    /// Translation menu: `value = identifier`, `label = name`.
    pub fn translations(items: &[Translation]) -> Self {
        let mut menu = Self::with_placeholder(TRANSLATION_PLACEHOLDER);
        menu.options.extend(
            items
                .iter()
                .map(|t| MenuOption::choice(t.identifier.as_str(), t.name.as_str())),
        );
        menu
    }

    /// Translation menu after a failed load.
    pub fn translations_unavailable() -> Self {
        Self::with_placeholder(TRANSLATIONS_UNAVAILABLE)
    }

    /// Book menu: the book name is both value and label.
    pub fn books(items: &[String]) -> Self {
        let mut menu = Self::with_placeholder(BOOK_PLACEHOLDER);
        menu.options
            .extend(items.iter().map(|b| MenuOption::choice(b.as_str(), b.as_str())));
        menu
    }

    /// Chapter menu: `Chapter N` labels, or a single notice when empty.
    pub fn chapters(items: &[String]) -> Self {
        let mut menu = Self::with_placeholder(CHAPTER_PLACEHOLDER);
        if items.is_empty() {
            menu.options.push(MenuOption::notice(NO_CHAPTERS));
        } else {
            menu.options.extend(
                items
                    .iter()
                    .map(|c| MenuOption::choice(c.as_str(), format!("Chapter {c}"))),
            );
        }
        menu
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Options the user can actually pick.
    pub fn choices(&self) -> impl Iterator<Item = &MenuOption> {
        self.options.iter().filter(|o| !o.disabled)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.choices().any(|o| o.value == value)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// A fully chosen passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passage {
    pub translation: String,
    pub book: String,
    pub chapter: String,
}

/// Rejected menu selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("'{value}' is not an option in the {menu} menu")]
    UnknownOption { menu: &'static str, value: String },
}

/// Translation → book → chapter selection state.
#[derive(Debug, Clone, Default)]
pub struct SelectionCascade {
    translations: Menu,
    books: Menu,
    chapters: Menu,
    translation: Option<String>,
    book: Option<String>,
    chapter: Option<String>,
}

impl SelectionCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_translations(&mut self, result: SelectionResult<Vec<Translation>>) {
        self.translations = match result {
            Ok(items) => Menu::translations(&items),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load translations");
                Menu::translations_unavailable()
            }
        };
    }

    pub fn select_translation(&mut self, identifier: &str) -> Result<(), MenuError> {
        if !self.translations.contains(identifier) {
            return Err(MenuError::UnknownOption {
                menu: "translation",
                value: identifier.to_string(),
            });
        }
        self.translation = Some(identifier.to_string());
        self.book = None;
        self.chapter = None;
        self.books = Menu::default();
        self.chapters = Menu::default();
        Ok(())
    }

    pub fn load_books(&mut self, result: SelectionResult<Vec<String>>) {
        self.books = match result {
            Ok(items) => Menu::books(&items),
            Err(e) => {
                tracing::warn!(error = %e, translation = ?self.translation, "Failed to load books");
                Menu::books(&[])
            }
        };
    }

    pub fn select_book(&mut self, name: &str) -> Result<(), MenuError> {
        if !self.books.contains(name) {
            return Err(MenuError::UnknownOption {
                menu: "book",
                value: name.to_string(),
            });
        }
        self.book = Some(name.to_string());
        self.chapter = None;
        self.chapters = Menu::default();
        Ok(())
    }

    /// A failed chapter load renders the same as an empty list.
    pub fn load_chapters(&mut self, result: SelectionResult<Vec<String>>) {
        self.chapters = match result {
            Ok(items) => Menu::chapters(&items),
            Err(e) => {
                tracing::warn!(error = %e, book = ?self.book, "Failed to load chapters");
                Menu::chapters(&[])
            }
        };
    }

    pub fn select_chapter(&mut self, chapter: &str) -> Result<(), MenuError> {
        if !self.chapters.contains(chapter) {
            return Err(MenuError::UnknownOption {
                menu: "chapter",
                value: chapter.to_string(),
            });
        }
        self.chapter = Some(chapter.to_string());
        Ok(())
    }

    pub const fn translations(&self) -> &Menu {
        &self.translations
    }

    pub const fn books(&self) -> &Menu {
        &self.books
    }

    pub const fn chapters(&self) -> &Menu {
        &self.chapters
    }

    pub fn selected_translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    pub fn selected_book(&self) -> Option<&str> {
        self.book.as_deref()
    }

    /// The chosen passage, once all three menus have a selection.
    pub fn selection(&self) -> Option<Passage> {
        Some(Passage {
            translation: self.translation.clone()?,
            book: self.book.clone()?,
            chapter: self.chapter.clone()?,
        })
    }
}
