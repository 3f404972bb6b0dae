//! Menu commands: translations, books, chapters and read.
//!
//! Each walks the translation → book → chapter cascade as far as it needs,
//! so an unknown translation or book is reported against the service's own
//! menus.

use anyhow::Result;
use lectio_core::{Menu, SelectionCascade, SelectionServicePort, read_url};
use url::Url;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_menu;

/// Translation menu. A failed load still yields the error menu.
pub async fn translations_menu(selection: &dyn SelectionServicePort) -> (Menu, Option<CliError>) {
    let result = selection.translations().await;
    let failure = result.as_ref().err().cloned().map(CliError::from);
    let mut cascade = SelectionCascade::new();
    cascade.load_translations(result);
    (cascade.translations().clone(), failure)
}

async fn choose_book(
    selection: &dyn SelectionServicePort,
    translation: &str,
    book: &str,
) -> Result<SelectionCascade, CliError> {
    let mut cascade = SelectionCascade::new();
    cascade.load_translations(Ok(selection.translations().await?));
    cascade.select_translation(translation)?;
    cascade.load_books(Ok(selection.books(translation).await?));
    cascade.select_book(book)?;
    Ok(cascade)
}

/// Chapter menu for a book. A failed chapter load yields the empty menu.
pub async fn chapters_menu(
    selection: &dyn SelectionServicePort,
    translation: &str,
    book: &str,
) -> Result<(Menu, Option<CliError>), CliError> {
    let mut cascade = choose_book(selection, translation, book).await?;
    let result = selection.chapters(book, translation).await;
    let failure = result.as_ref().err().cloned().map(CliError::from);
    cascade.load_chapters(result);
    Ok((cascade.chapters().clone(), failure))
}

/// Reading address for a passage, after checking each part against its menu.
pub async fn passage_url(
    selection: &dyn SelectionServicePort,
    base: &Url,
    translation: &str,
    book: &str,
    chapter: &str,
) -> Result<Url, CliError> {
    let mut cascade = choose_book(selection, translation, book).await?;
    cascade.load_chapters(Ok(selection.chapters(book, translation).await?));
    cascade.select_chapter(chapter)?;
    let passage = cascade
        .selection()
        .ok_or_else(|| CliError::Arguments("passage is incomplete".to_string()))?;
    Ok(read_url(base, &passage))
}

// ── Command entry points ───────────────────────────────────────────

pub async fn translations(ctx: &CliContext) -> Result<()> {
    let (menu, failure) = translations_menu(ctx.selection.as_ref()).await;
    print_menu(&menu);
    failure.map_or(Ok(()), |e| Err(e.into()))
}

pub async fn books(ctx: &CliContext, translation: &str) -> Result<()> {
    let books = ctx
        .selection
        .books(translation)
        .await
        .map_err(CliError::from)?;
    print_menu(&Menu::books(&books));
    Ok(())
}

pub async fn chapters(ctx: &CliContext, translation: &str, book: &str) -> Result<()> {
    let (menu, failure) = chapters_menu(ctx.selection.as_ref(), translation, book).await?;
    print_menu(&menu);
    failure.map_or(Ok(()), |e| Err(e.into()))
}

pub async fn read(ctx: &CliContext, translation: &str, book: &str, chapter: &str) -> Result<()> {
    let base = ctx.base_url()?;
    let url = passage_url(ctx.selection.as_ref(), &base, translation, book, chapter).await?;
    println!("{url}");
    Ok(())
}
