// One classifieds entry as seen on a search-results page. The id is assigned
// by the marketplace and is unique per physical ad at a point in time; the
// same id can reappear later with an updated price, which is what the
// price-drop rule keys on.

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub link: String,
    pub price: i64,
}
