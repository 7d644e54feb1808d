//! Turns a fetched search-results document into `Listing` values.
//!
//! Extraction is a pure transform over the supplied document: it never logs
//! and never touches the network. A node that cannot be read is skipped and
//! its error recorded; the rest of the page is still processed, so a single
//! malformed ad does not cost the whole run.

use scraper::{ElementRef, Html, Selector};

use crate::error::Error;
use crate::types::Listing;

// Structural path of one ad inside the search-results markup.
const ITEM_SELECTOR: &str =
    ".l-content .clearfix .catalog .catalog-list .js-catalog_before-ads .item";
const TITLE_LINK_SELECTOR: &str = "h3.title a";
const PRICE_SELECTOR: &str = ".about";

/// Result of extracting one document. Partial success is normal: `listings`
/// holds everything that could be built, `errors` holds one entry per node
/// that could not.
#[derive(Debug, Default)]
pub struct Extraction {
    pub listings: Vec<Listing>,
    pub errors: Vec<Error>,
}

impl Extraction {
    /// The last per-node error, matching the legacy single-error surface.
    pub fn last_error(&self) -> Option<&Error> {
        self.errors.last()
    }
}

pub fn extract(document: &Html, base_url: &str) -> Extraction {
    let items = Selector::parse(ITEM_SELECTOR).unwrap();

    let mut extraction = Extraction::default();
    for entry in document.select(&items) {
        match extract_entry(entry, base_url) {
            Ok(listing) => extraction.listings.push(listing),
            Err(e) => extraction.errors.push(e),
        }
    }
    extraction
}

fn extract_entry(entry: ElementRef, base_url: &str) -> Result<Listing, Error> {
    let id = entry
        .value()
        .attr("id")
        .ok_or(Error::MissingAttribute("id"))?
        .to_owned();

    let anchor_selector = Selector::parse(TITLE_LINK_SELECTOR).unwrap();
    let anchor = entry
        .select(&anchor_selector)
        .next()
        .ok_or(Error::MissingAttribute("href"))?;
    let title = anchor.text().collect::<String>().trim().to_owned();
    let href = anchor
        .value()
        .attr("href")
        .ok_or(Error::MissingAttribute("href"))?;
    let link = format!("{}{}", base_url, href.trim_start_matches('/'));

    let price_selector = Selector::parse(PRICE_SELECTOR).unwrap();
    let price_text = entry
        .select(&price_selector)
        .map(|node| node.text().collect::<String>())
        .collect::<String>();
    let price = parse_price(&price_text)?;

    Ok(Listing {
        id,
        title,
        link,
        price,
    })
}

fn parse_price(input: &str) -> Result<i64, Error> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .parse::<i64>()
        .map_err(|_| Error::ParsePrice(input.trim().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body>
                <div class="l-content"><div class="clearfix"><div class="catalog">
                  <div class="catalog-list"><div class="js-catalog_before-ads">
                    {items}
                  </div></div>
                </div></div></div>
            </body></html>"#
        ))
    }

    fn item(id: &str, title: &str, href: &str, price: &str) -> String {
        format!(
            r#"<div class="item" id="{id}">
                <h3 class="title"><a href="{href}">{title}</a></h3>
                <div class="about">{price}</div>
            </div>"#
        )
    }

    #[test]
    fn extracts_listing_fields() {
        let document = page(&item(
            "101",
            "  Colnago C64, size 52  ",
            "/moskva/velosipedy/colnago_c64_101",
            " 1 200 руб. ",
        ));
        let extraction = extract(&document, "https://www.avito.ru/");

        assert!(extraction.errors.is_empty());
        assert_eq!(
            extraction.listings,
            vec![Listing {
                id: "101".into(),
                title: "Colnago C64, size 52".into(),
                link: "https://www.avito.ru/moskva/velosipedy/colnago_c64_101".into(),
                price: 1200,
            }]
        );
    }

    #[test]
    fn continues_past_node_missing_link() {
        let good_one = item("1", "First", "/a/1", "100");
        let broken = r#"<div class="item" id="2">
            <h3 class="title">no anchor here</h3>
            <div class="about">200</div>
        </div>"#;
        let good_two = item("3", "Third", "/a/3", "300");
        let document = page(&format!("{good_one}{broken}{good_two}"));

        let extraction = extract(&document, "https://www.avito.ru/");

        assert_eq!(extraction.listings.len(), 2);
        assert_eq!(extraction.listings[0].id, "1");
        assert_eq!(extraction.listings[1].id, "3");
        assert_eq!(extraction.errors.len(), 1);
        assert!(matches!(
            extraction.last_error(),
            Some(Error::MissingAttribute("href"))
        ));
    }

    #[test]
    fn node_without_id_is_an_error() {
        let broken = r#"<div class="item">
            <h3 class="title"><a href="/a/1">First</a></h3>
            <div class="about">100</div>
        </div>"#;
        let document = page(broken);

        let extraction = extract(&document, "https://www.avito.ru/");

        assert!(extraction.listings.is_empty());
        assert!(matches!(
            extraction.last_error(),
            Some(Error::MissingAttribute("id"))
        ));
    }

    #[test]
    fn price_without_digits_is_an_error() {
        let document = page(&item("1", "First", "/a/1", "договорная"));

        let extraction = extract(&document, "https://www.avito.ru/");

        assert!(extraction.listings.is_empty());
        assert!(matches!(
            extraction.last_error(),
            Some(Error::ParsePrice(_))
        ));
    }

    #[test]
    fn all_errors_are_kept_not_just_the_last() {
        let broken_price = item("1", "First", "/a/1", "n/a");
        let broken_link = r#"<div class="item" id="2">
            <h3 class="title">bare</h3>
            <div class="about">200</div>
        </div>"#;
        let document = page(&format!("{broken_price}{broken_link}"));

        let extraction = extract(&document, "https://www.avito.ru/");

        assert_eq!(extraction.errors.len(), 2);
        assert!(matches!(extraction.errors[0], Error::ParsePrice(_)));
        assert!(matches!(
            extraction.errors[1],
            Error::MissingAttribute("href")
        ));
    }

    #[test]
    fn href_leading_slash_is_not_doubled() {
        let document = page(&item("1", "First", "/a/1", "100"));
        let extraction = extract(&document, "https://www.avito.ru/");
        assert_eq!(extraction.listings[0].link, "https://www.avito.ru/a/1");
    }
}
