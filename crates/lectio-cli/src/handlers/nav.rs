//! Navigation command handler.

use anyhow::Result;
use lectio_core::PageAddress;

use crate::commands::NavArgs;
use crate::error::CliError;

/// The address `args` asks for.
pub fn rewrite(args: &NavArgs) -> Result<PageAddress, CliError> {
    let page = PageAddress::parse(&args.url)?;
    let target = &args.target;

    let next = if let Some(translation) = target.translation.as_deref() {
        page.with_translation(translation)?
    } else if target.next {
        page.with_chapter_delta(1)?
    } else {
        page.with_chapter_delta(-1)?
    };
    Ok(next)
}

pub fn execute(args: &NavArgs) -> Result<()> {
    println!("{}", rewrite(args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NavTarget;

    fn args(url: &str, target: NavTarget) -> NavArgs {
        NavArgs {
            url: url.to_string(),
            target,
        }
    }

    const NEXT: NavTarget = NavTarget {
        next: true,
        prev: false,
        translation: None,
    };

    const PREV: NavTarget = NavTarget {
        next: false,
        prev: true,
        translation: None,
    };

    #[test]
    fn test_next_and_prev() {
        let url = "http://localhost:5000/read?translation=web&book=Ruth&chapter=2";
        assert_eq!(
            rewrite(&args(url, NEXT)).unwrap().passage().chapter.as_deref(),
            Some("3")
        );
        assert_eq!(
            rewrite(&args(url, PREV)).unwrap().passage().chapter.as_deref(),
            Some("1")
        );
    }

    #[test]
    fn test_switch_translation() {
        let target = NavTarget {
            translation: Some("kjv".to_string()),
            ..PREV
        };
        let page = rewrite(&args(
            "http://localhost:5000/read?translation=web&book=Ruth&chapter=2",
            target,
        ))
        .unwrap();
        assert_eq!(page.passage().translation.as_deref(), Some("kjv"));
        assert_eq!(page.passage().chapter.as_deref(), Some("2"));
    }

    #[test]
    fn test_first_chapter_has_no_previous() {
        let err = rewrite(&args("http://localhost:5000/read?book=Ruth&chapter=1", PREV)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
