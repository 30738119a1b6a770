//! Plain-text rendering of views for the terminal.

use un_core::{CategoryDescriptor, PageWindow};
use un_views::chrome::SidebarView;
use un_views::feed::FeedView;
use un_views::pages::{
    ArticleBody, ArticleDetail, CategoryView, HomeView, SearchView, VideoEmbed,
};
use un_views::{CardView, ViewStatus};

fn card(lines: &mut Vec<String>, n: usize, card: &CardView) {
    let mut head = format!("{n:>2}. {}", card.title);
    if !card.badges.is_empty() {
        let labels: Vec<String> = card.badges.iter().map(|b| b.label()).collect();
        head.push_str(&format!(" [{}]", labels.join(", ")));
    }
    lines.push(head);
    let mut meta = vec![card.category.to_uppercase(), card.date.clone()];
    if let Some(source) = &card.source {
        meta.push(source.clone());
    }
    lines.push(format!("    {}", meta.join(" | ")));
    lines.push(format!("    {}", card.summary));
    lines.push(format!("    {}", card.link));
}

/// `‹ 1 [2] 3 ›`, with the arrows only where there is somewhere to go.
pub fn pager(window: &PageWindow) -> String {
    let mut parts = Vec::new();
    if window.has_previous() {
        parts.push("‹".to_string());
    }
    parts.extend(window.pages.iter().map(|&p| {
        if p == window.current {
            format!("[{p}]")
        } else {
            p.to_string()
        }
    }));
    if window.has_next() {
        parts.push("›".to_string());
    }
    parts.join(" ")
}

pub fn feed(title: &str, view: &FeedView) -> String {
    let mut lines = vec![title.to_string(), "=".repeat(title.chars().count())];
    match &view.status {
        ViewStatus::Failed { message } => lines.push(format!("Error: {message}")),
        ViewStatus::Empty => lines.push("No articles found.".to_string()),
        ViewStatus::Loading => lines.push("Loading...".to_string()),
        ViewStatus::Ready => {
            for (i, c) in view.cards.iter().enumerate() {
                card(&mut lines, i + 1, c);
            }
        }
    }
    if let Some(window) = &view.pagination {
        lines.push(String::new());
        lines.push(format!(
            "Page {} of {}   {}",
            view.current_page,
            view.total_pages,
            pager(window)
        ));
    }
    lines.join("\n")
}

pub fn home(view: &HomeView) -> String {
    let mut out = Vec::new();
    if !view.breaking.is_empty() {
        let titles: Vec<&str> = view.breaking.iter().map(|t| t.title.as_str()).collect();
        out.push(format!("BREAKING: {}", titles.join(" • ")));
        out.push(String::new());
    }
    out.push(feed("Latest News", &view.feed));
    if !view.trending.is_empty() {
        out.push(String::new());
        out.push("Trending".to_string());
        for item in &view.trending {
            out.push(format!("{}. {}", item.rank, item.title));
        }
    }
    out.join("\n")
}

pub fn category(view: &CategoryView) -> String {
    let mut out = vec![feed(&view.heading, &view.feed)];
    if let Some(showing) = &view.showing {
        out.push(showing.clone());
    }
    out.join("\n")
}

pub fn search(view: &SearchView) -> String {
    match view {
        SearchView::NoQuery { .. } => "Enter a search term.".to_string(),
        SearchView::Results {
            query, found, feed: results, ..
        } => {
            let mut out = vec![feed(&format!("Search results for \"{query}\""), results)];
            if let Some(found) = found {
                out.push(found.clone());
            }
            out.join("\n")
        }
    }
}

pub fn article(detail: &ArticleDetail) -> String {
    let mut lines = vec![
        detail.category_badge.clone(),
        detail.title.clone(),
        "-".repeat(detail.title.chars().count()),
    ];
    let mut meta = vec![detail.date.clone()];
    if let Some(byline) = &detail.byline {
        meta.push(byline.clone());
    }
    if let Some(source) = &detail.source {
        meta.push(source.clone());
    }
    lines.push(meta.join(" | "));
    lines.push(String::new());

    if let Some(video) = &detail.video {
        let src = match video {
            VideoEmbed::Embedded { src } | VideoEmbed::Native { src } => src,
        };
        lines.push(format!("Video: {src}"));
    }
    if let Some(notice) = &detail.ai_notice {
        lines.push(format!("({notice})"));
    }
    if let Some(background) = &detail.background {
        lines.push(format!("Background: {background}"));
    }
    match &detail.body {
        ArticleBody::Paragraphs { paragraphs } => {
            for p in paragraphs {
                lines.push(p.clone());
                lines.push(String::new());
            }
        }
        ArticleBody::SummaryOnly { summary, notice } => {
            lines.push(summary.clone());
            lines.push(format!("({notice})"));
        }
        ArticleBody::Unavailable { notice } => lines.push(notice.clone()),
    }
    if !detail.facts.is_empty() {
        lines.push("Key facts:".to_string());
        lines.extend(detail.facts.iter().map(|f| format!("  - {f}")));
    }
    if !detail.tags.is_empty() {
        lines.push(detail.tags.join(" "));
    }
    if let Some(original) = &detail.original {
        lines.push(format!("{}: {}", original.label, original.href));
    }
    lines.join("\n")
}

pub fn videos(cards: &[CardView]) -> String {
    let mut lines = vec!["Videos".to_string(), "======".to_string()];
    if cards.is_empty() {
        lines.push("No videos available.".to_string());
    }
    for (i, c) in cards.iter().enumerate() {
        card(&mut lines, i + 1, c);
    }
    lines.join("\n")
}

pub fn categories(descriptors: &[CategoryDescriptor]) -> String {
    let width = descriptors.iter().map(|d| d.slug.len()).max().unwrap_or(0);
    descriptors
        .iter()
        .map(|d| format!("{:width$}  {}", d.slug, d.title))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn sidebar(view: &SidebarView) -> String {
    let mut lines = vec![format!(
        "{} articles | {} sources | {} categories",
        view.stats.articles, view.stats.sources, view.stats.categories
    )];
    for link in &view.categories {
        lines.push(format!("  {} ({})", link.title, link.count));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use un_core::compute_window;

    #[test]
    fn test_pager_marks_current() {
        assert_eq!(pager(&compute_window(5, 10, 2)), "‹ 3 4 [5] 6 7 ›");
        assert_eq!(pager(&compute_window(1, 3, 2)), "[1] 2 3 ›");
    }

    #[test]
    fn test_failed_feed_shows_message() {
        let view = FeedView {
            status: ViewStatus::Failed {
                message: "Backend unavailable".to_string(),
            },
            cards: vec![],
            current_page: 1,
            total_pages: 1,
            pagination: None,
        };
        assert_eq!(feed("Videos", &view), "Videos\n======\nError: Backend unavailable");
    }

    #[test]
    fn test_categories_are_aligned() {
        let out = categories(&un_core::taxonomy::descriptors()[..2]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("palestine"));
    }
}
