use serde::Serialize;
use un_core::text;
use un_core::Article;

use crate::card::{render_card, CardVariant, CardView, ImageSlot, LEAD_PLACEHOLDER};

/// One lead story with up to two tiles stacked beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedGrid {
    pub lead: CardView,
    pub side: Vec<CardView>,
}

impl FeaturedGrid {
    pub fn build(articles: &[Article]) -> Option<Self> {
        let (first, rest) = articles.split_first()?;
        let mut lead = render_card(first, CardVariant::GridTile);
        lead.image = ImageSlot::for_article(first, LEAD_PLACEHOLDER);
        if lead.author.is_none() {
            lead.author = Some("Staff".to_string());
        }
        let side = rest
            .iter()
            .take(2)
            .map(|a| render_card(a, CardVariant::GridTile))
            .collect();
        Some(Self { lead, side })
    }
}

/// A numbered entry in a most-popular or trending list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub link: String,
    pub source: Option<String>,
    pub date: String,
}

impl RankedItem {
    fn new(rank: usize, article: &Article) -> Self {
        Self {
            rank,
            id: article.id.clone(),
            title: article.title.clone(),
            link: article.link(),
            source: article.source_name().map(|s| s.to_uppercase()),
            date: article
                .published_at
                .as_ref()
                .map(text::short_date)
                .unwrap_or_default(),
        }
    }
}

pub fn most_popular(articles: &[Article]) -> Vec<RankedItem> {
    articles
        .iter()
        .enumerate()
        .map(|(i, a)| RankedItem::new(i + 1, a))
        .collect()
}

/// Items 5..9 of the home feed, the ones the carousel does not show.
pub fn trending(feed: &[Article]) -> Vec<RankedItem> {
    feed.iter()
        .skip(5)
        .take(4)
        .enumerate()
        .map(|(i, a)| RankedItem::new(i + 1, a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::fixtures::article;
    use crate::card::TILE_PLACEHOLDER;

    #[test]
    fn test_empty_grid() {
        assert!(FeaturedGrid::build(&[]).is_none());
    }

    #[test]
    fn test_grid_layout() {
        let articles: Vec<_> = (0..5).map(|i| article(&i.to_string())).collect();
        let grid = FeaturedGrid::build(&articles).unwrap();
        assert_eq!(grid.lead.id, "0");
        assert_eq!(grid.lead.image.src, LEAD_PLACEHOLDER);
        assert_eq!(grid.lead.author.as_deref(), Some("Staff"));
        assert_eq!(grid.side.len(), 2);
        assert_eq!(grid.side[0].image.src, TILE_PLACEHOLDER);
    }

    #[test]
    fn test_trending_ranks() {
        let articles: Vec<_> = (0..10).map(|i| article(&i.to_string())).collect();
        let items = trending(&articles);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].rank, 1);
        assert_eq!(items[0].id, "5");
        assert_eq!(items[3].id, "8");
        assert!(trending(&articles[..5]).is_empty());
    }

    #[test]
    fn test_most_popular_ranks_from_one() {
        let articles: Vec<_> = (0..3).map(|i| article(&i.to_string())).collect();
        let ranks: Vec<_> = most_popular(&articles).iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }
}
