//! Gallery view models.
//!
//! Turns a filtered record list into what the gallery shows: one card per
//! record, or an explicit "no results" state. Views carry plain strings; the
//! renderer binds them as text and attribute values.

use crate::catalog;
use crate::types::{PromptRecord, RecordId};

/// Maximum number of category tags shown on a card
pub const MAX_CARD_TAGS: usize = 3;

/// A category tag annotated with its catalog icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub id: String,
    pub icon: &'static str,
}

impl TagView {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            icon: catalog::icon_for(id),
        }
    }

    /// Label shown on the tag, e.g. `"🐾 animal"`
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.id)
    }
}

/// One card of the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: RecordId,
    pub title: String,
    pub image: String,
    pub tags: Vec<TagView>,
}

impl CardView {
    pub fn from_record(record: &PromptRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            image: record.image.clone(),
            tags: record
                .categories
                .iter()
                .take(MAX_CARD_TAGS)
                .map(|c| TagView::new(c))
                .collect(),
        }
    }
}

/// What the gallery area displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Cards(Vec<CardView>),
    NoResults,
}

impl GalleryView {
    /// Whether the card grid is visible
    pub fn shows_gallery(&self) -> bool {
        matches!(self, GalleryView::Cards(_))
    }

    /// Whether the "no results" notice is visible
    pub fn shows_no_results(&self) -> bool {
        matches!(self, GalleryView::NoResults)
    }
}

/// Build the gallery view for an ordered record subset.
pub fn render_gallery<'a, I>(records: I) -> GalleryView
where
    I: IntoIterator<Item = &'a PromptRecord>,
{
    let cards: Vec<CardView> = records.into_iter().map(CardView::from_record).collect();
    if cards.is_empty() {
        GalleryView::NoResults
    } else {
        GalleryView::Cards(cards)
    }
}

/// All category tags of a record, used by the detail modal
pub fn modal_tags(record: &PromptRecord) -> Vec<TagView> {
    record.categories.iter().map(|c| TagView::new(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_subset_shows_no_results() {
        let view = render_gallery(std::iter::empty());
        assert_eq!(view, GalleryView::NoResults);
        assert!(view.shows_no_results());
        assert!(!view.shows_gallery());
    }

    #[test]
    fn card_keeps_first_three_tags() {
        let record = PromptRecord::new(
            1,
            "Poster",
            "a retro neon poster",
            &["poster", "retro", "neon", "typography"],
        );
        let card = CardView::from_record(&record);
        let ids: Vec<_> = card.tags.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["poster", "retro", "neon"]);
    }

    #[test]
    fn unknown_tag_uses_default_icon() {
        let tag = TagView::new("other");
        assert_eq!(tag.icon, catalog::DEFAULT_ICON);
        assert_eq!(tag.label(), format!("{} other", catalog::DEFAULT_ICON));
    }

    #[test]
    fn cards_follow_input_order() {
        let records = vec![
            PromptRecord::new(2, "B", "b", &[]),
            PromptRecord::new(1, "A", "a", &[]),
        ];
        match render_gallery(&records) {
            GalleryView::Cards(cards) => {
                assert_eq!(cards[0].id, RecordId::Int(2));
                assert_eq!(cards[1].id, RecordId::Int(1));
            }
            GalleryView::NoResults => panic!("expected cards"),
        }
    }

    #[test]
    fn markup_in_fields_is_kept_verbatim() {
        let record = PromptRecord::new(1, "<script>x</script>", "p", &[]);
        let card = CardView::from_record(&record);
        assert_eq!(card.title, "<script>x</script>");
    }
}
