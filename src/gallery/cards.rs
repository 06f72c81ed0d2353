//! Card descriptors for the visible set.
//!
//! A card is the presentational projection of one visible item. Its `index`
//! is the item's position in the sequence that was rendered, which is exactly
//! what the viewer is opened with when the card is activated.

use crate::domain::Item;

/// Image loading hint carried by every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Lazy,
}

/// Image reference of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub loading: Loading,
}

/// Interaction delivered to a card by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Pointer activation.
    Click,
    /// Keyboard activation.
    Enter,
}

/// Renderable descriptor for one visible item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub item_id: u32,
    pub image: ImageRef,
    pub name: String,
    pub year_label: String,
    pub accessible_label: String,
}

impl Card {
    fn from_item(index: usize, item: &Item) -> Self {
        Self {
            index,
            item_id: item.id,
            image: ImageRef {
                src: item.image.clone(),
                alt: item.name.clone(),
                loading: Loading::Lazy,
            },
            name: item.name.clone(),
            year_label: format!("Year {}", item.year),
            accessible_label: format!("{} — {}", item.name, item.description),
        }
    }

    /// Index to open the viewer at when `trigger` activates this card.
    ///
    /// Both triggers open the card's own position; no other interaction
    /// reaches a card.
    ///
    /// ```
    /// use zallery::gallery::cards::{render_cards, Trigger};
    /// use zallery::Item;
    ///
    /// let cards = render_cards(&[
    ///     Item::new(1, "Aman Kumar", 2024, "a1.jpg", "Top scorer"),
    ///     Item::new(2, "Sana Khan", 2023, "a2.jpg", "Science fair winner"),
    /// ]);
    /// assert_eq!(cards[1].activation(Trigger::Enter), 1);
    /// assert_eq!(cards[1].activation(Trigger::Click), 1);
    /// ```
    #[must_use]
    pub const fn activation(&self, trigger: Trigger) -> usize {
        match trigger {
            Trigger::Click | Trigger::Enter => self.index,
        }
    }
}

/// Projects a sequence of items into cards, one per item, in order.
#[must_use]
pub fn render_cards(items: &[Item]) -> Vec<Card> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Card::from_item(index, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;

    #[test]
    fn cards_carry_positional_index_and_labels() {
        let cards = render_cards(&EmbeddedCatalog::items()[2..5]);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].index, 0);
        assert_eq!(cards[0].item_id, 3);
        assert_eq!(cards[0].year_label, "Year 2022");
        assert_eq!(cards[0].accessible_label, "Arun R — Math Olympiad medal");
        assert_eq!(cards[2].image.alt, "Ravi Patel");
        assert_eq!(cards[2].image.loading, Loading::Lazy);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let items = EmbeddedCatalog::items();
        assert_eq!(render_cards(&items), render_cards(&items));
    }

    #[test]
    fn click_and_enter_open_the_card_position() {
        let card = &render_cards(&EmbeddedCatalog::items())[4];
        assert_eq!(card.activation(Trigger::Click), 4);
        assert_eq!(card.activation(Trigger::Enter), 4);
    }

    #[test]
    fn empty_sequence_renders_no_cards() {
        assert!(render_cards(&[]).is_empty());
    }
}
