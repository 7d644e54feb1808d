use async_trait::async_trait;

use crate::error::Error;
use crate::notify::Notifier;
use crate::types::Listing;

const MAX_TITLE: usize = 30;
const TITLE_POSTFIX: &str = "...";

/// Prints the noteworthy listings as a fixed-width table on stdout.
pub struct ConsoleNotifier;

// Truncation counts chars, not bytes; titles are routinely cyrillic.
fn display_title(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= MAX_TITLE {
        return title.to_owned();
    }
    let mut truncated: String = chars[..MAX_TITLE - TITLE_POSTFIX.chars().count()]
        .iter()
        .collect();
    truncated.push_str(TITLE_POSTFIX);
    truncated
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, items: &[Listing]) -> Result<(), Error> {
        println!("New offers ({}):", items.len());
        println!("|{:>10} | {:>30} | {}", "Price", "Title", "Link");
        println!("|{:->10}-|-{:->30}-|-{:->7}", "", "", "");

        for item in items {
            println!(
                "|{:>10} | {:>30} | {}",
                item.price,
                display_title(&item.title),
                item.link
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_titles_pass_through() {
        assert_eq!(display_title("Colnago C64"), "Colnago C64");
    }

    #[test]
    fn long_titles_are_truncated_with_ellipsis() {
        let title = "A very long listing title that keeps going and going";
        let shown = display_title(title);
        assert_eq!(shown.chars().count(), MAX_TITLE);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let title = "Велосипед шоссейный Colnago C64 карбон размер 52";
        let shown = display_title(title);
        assert_eq!(shown.chars().count(), MAX_TITLE);
    }
}
