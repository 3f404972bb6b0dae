//! End-to-end flow through the pure reader model: pick a passage from the
//! cascading menus, build its reading address, then page through chapters
//! and switch translation.

use lectio_core::{NavigationError, PageAddress, SelectionCascade, Translation, read_url};
use url::Url;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn menu_choice_to_next_chapter() {
    let mut cascade = SelectionCascade::new();
    cascade.load_translations(Ok(vec![
        Translation::new("web", "World English Bible"),
        Translation::new("kjv", "King James Version"),
    ]));
    cascade.select_translation("web").unwrap();
    cascade.load_books(Ok(strings(&["Genesis", "Exodus", "1 Kings"])));
    cascade.select_book("1 Kings").unwrap();
    cascade.load_chapters(Ok(strings(&["1", "2", "3"])));
    cascade.select_chapter("2").unwrap();

    let passage = cascade.selection().expect("all three menus chosen");
    let base = Url::parse("http://localhost:5000").unwrap();
    let page = PageAddress::from_url(read_url(&base, &passage));
    assert_eq!(
        page.to_string(),
        "http://localhost:5000/read?translation=web&book=1+Kings&chapter=2"
    );

    let next = page.with_chapter_delta(1).unwrap();
    let query = next.passage();
    assert_eq!(query.chapter.as_deref(), Some("3"));
    assert_eq!(query.book.as_deref(), Some("1 Kings"));
    assert_eq!(query.translation.as_deref(), Some("web"));

    let switched = next.with_translation("kjv").unwrap();
    assert_eq!(switched.passage().translation.as_deref(), Some("kjv"));
    assert_eq!(switched.passage().chapter.as_deref(), Some("3"));
}

#[test]
fn first_chapter_has_no_previous() {
    let page = PageAddress::parse("http://localhost:5000/read?translation=web&book=Jude&chapter=1")
        .unwrap();
    assert_eq!(
        page.with_chapter_delta(-1).unwrap_err(),
        NavigationError::ChapterOutOfRange(0)
    );
}
