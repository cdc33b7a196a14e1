use std::collections::HashSet;

/// The eight ratable materials, in swipe order.
const STANDARD_DECK: [&str; 8] = [
    "paper",
    "twigs",
    "pinecones",
    "Fahrenheit451",
    "toiletpaper",
    "shavings",
    "hardwood",
    "cardboard",
];

/// The canonical ordered set of ratable images. Built once at startup and
/// shared read-only through the app state; never persisted.
#[derive(Clone)]
pub struct ImageDeck {
    names: Vec<String>,
}

impl ImageDeck {
    pub fn standard() -> Self {
        Self::new(STANDARD_DECK.iter().map(|s| (*s).to_owned()).collect())
    }

    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// First image in canonical order that the user has not rated yet.
    pub fn first_unrated(&self, rated: &HashSet<String>) -> Option<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .find(|name| !rated.contains(*name))
    }

    /// Public URL of the card image for one deck entry.
    pub fn src(&self, name: &str) -> String {
        format!("/images/tinder/{name}.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_eight_images_in_order() {
        let deck = ImageDeck::standard();
        assert_eq!(deck.len(), 8);
        assert_eq!(deck.names()[0], "paper");
        assert_eq!(deck.names()[7], "cardboard");
    }

    #[test]
    fn first_unrated_walks_canonical_order() {
        let deck = ImageDeck::standard();

        let mut rated = HashSet::new();
        assert_eq!(deck.first_unrated(&rated), Some("paper"));

        rated.insert("paper".to_owned());
        rated.insert("pinecones".to_owned());
        assert_eq!(deck.first_unrated(&rated), Some("twigs"));

        for name in deck.names() {
            rated.insert(name.clone());
        }
        assert_eq!(deck.first_unrated(&rated), None);
    }

    #[test]
    fn contains_is_exact() {
        let deck = ImageDeck::standard();
        assert!(deck.contains("Fahrenheit451"));
        assert!(!deck.contains("fahrenheit451"));
        assert!(!deck.contains("gasoline"));
    }

    #[test]
    fn src_points_at_tinder_images() {
        let deck = ImageDeck::standard();
        assert_eq!(deck.src("twigs"), "/images/tinder/twigs.png");
    }
}
