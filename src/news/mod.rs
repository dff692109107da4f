//! News domain: the static headline catalog and the tasks that surface it.
//!
//! - [`ticker`] - Periodic emission loop with category filtering
//! - [`detail`] - Simulated detail fetch with a fixed latency
//! - [`counter`] - Observable read counter
//!
//! # Example
//!
//! ```
//! use newsflow::news::{catalog, Category};
//!
//! let tech: Vec<_> = catalog().iter().filter(|n| Category::Tech.matches(n)).collect();
//! assert_eq!(tech.len(), 1);
//! assert_eq!(tech[0].decorated().title, "[Tech] Teknologi AI Terus Berkembang Pesat di Indonesia");
//! ```

mod counter;
mod detail;
mod ticker;

pub use counter::ReadCounter;
pub use detail::{
    fetch_detail, fetch_detail_with_timeout, DetailError, DEFAULT_DETAIL_DELAY,
    DEFAULT_DETAIL_TIMEOUT,
};
pub use ticker::{emission_at, news_stream, spawn_ticker, DEFAULT_TICK_INTERVAL};

use std::fmt;
use std::sync::OnceLock;

// ============================================================================
// Category
// ============================================================================

/// Headline category. `All` is the sentinel that matches every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Religi,
    Nasional,
    Game,
    Trending,
    Tech,
    Ekonomi,
}

impl Category {
    /// Every category in selector order.
    pub const ALL: [Category; 7] = [
        Category::All,
        Category::Religi,
        Category::Nasional,
        Category::Game,
        Category::Trending,
        Category::Tech,
        Category::Ekonomi,
    ];

    /// Display label shown on chips and in decorated titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Semua",
            Self::Religi => "Religi",
            Self::Nasional => "Nasional",
            Self::Game => "Game",
            Self::Trending => "Trending",
            Self::Tech => "Tech",
            Self::Ekonomi => "Ekonomi",
        }
    }

    /// Parse a label (case-insensitive). `"all"` is accepted as an alias for `Semua`.
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
    }

    /// Position in [`Category::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Category at `index` in selector order, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next category in selector order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category in selector order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether an item passes this filter.
    pub fn matches(self, item: &NewsItem) -> bool {
        self == Self::All || item.category == self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// News Item
// ============================================================================

/// A single headline. Never mutated; decoration produces a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub tag: String,
}

impl NewsItem {
    pub fn new(id: u32, title: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            title: title.into(),
            category,
            tag: String::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Copy of this item with the title prefixed by `[<category>] `.
    pub fn decorated(&self) -> Self {
        Self {
            title: format!("[{}] {}", self.category.label(), self.title),
            ..self.clone()
        }
    }
}

static CATALOG: OnceLock<Vec<NewsItem>> = OnceLock::new();

/// The fixed headline list, in emission order.
pub fn catalog() -> &'static [NewsItem] {
    CATALOG.get_or_init(|| {
        vec![
            NewsItem::new(
                1,
                "Ramadhan Tiba, Jutaan Warga Sambut Bulan Suci",
                Category::Religi,
            )
            .with_tag("🕌"),
            NewsItem::new(
                2,
                "Polri Resmikan 1176 Dapur MBG di Seluruh Nusantara",
                Category::Nasional,
            )
            .with_tag("🏛️"),
            NewsItem::new(
                3,
                "BTR Raih Juara Dunia di Grand Finals MLBB",
                Category::Game,
            )
            .with_tag("🎮"),
            NewsItem::new(
                4,
                "Pria Sawit Join BoP: Fenomena Baru di Dunia Maya",
                Category::Trending,
            )
            .with_tag("🔥"),
            NewsItem::new(
                5,
                "Teknologi AI Terus Berkembang Pesat di Indonesia",
                Category::Tech,
            )
            .with_tag("🤖"),
            NewsItem::new(
                6,
                "IHSG Melesat 2.3% di Tengah Sentimen Positif",
                Category::Ekonomi,
            )
            .with_tag("📈"),
        ]
    })
}

// ============================================================================
// Headline
// ============================================================================

/// Tag shown next to placeholder headlines.
pub const PENDING_TAG: &str = "📡";

/// Chip label shown while no item has been emitted yet.
pub const PENDING_LABEL: &str = "Live";

/// What the ticker card currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Headline {
    /// Transitional placeholder until the next matching emission.
    Pending { message: String },
    /// Last emitted (decorated) item.
    Live(NewsItem),
}

impl Headline {
    /// Placeholder shown before the first emission after startup.
    pub fn connecting() -> Self {
        Self::Pending {
            message: "Menghubungkan ke server…".to_string(),
        }
    }

    /// Placeholder shown right after the filter changes.
    pub fn filtering(category: Category) -> Self {
        Self::Pending {
            message: format!("Memfilter kategori: {}…", category.label()),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Pending { message } => message,
            Self::Live(item) => &item.title,
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Pending { .. } => PENDING_TAG,
            Self::Live(item) => &item.tag,
        }
    }

    /// Label for the category chip on the ticker card.
    pub fn chip_label(&self) -> &'static str {
        match self {
            Self::Pending { .. } => PENDING_LABEL,
            Self::Live(item) => item.category.label(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_has_six_items_in_order() {
        let ids: Vec<u32> = catalog().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn every_non_sentinel_category_has_one_item() {
        for cat in Category::ALL.iter().skip(1) {
            let count = catalog().iter().filter(|n| n.category == *cat).count();
            assert_eq!(count, 1, "category {}", cat);
        }
    }

    #[test]
    fn all_matches_everything() {
        assert!(catalog().iter().all(|n| Category::All.matches(n)));
    }

    #[test]
    fn specific_category_matches_only_its_items() {
        let game: Vec<u32> = catalog()
            .iter()
            .filter(|n| Category::Game.matches(n))
            .map(|n| n.id)
            .collect();
        assert_eq!(game, vec![3]);
    }

    #[test]
    fn decorated_prefixes_title_without_mutating() {
        let item = &catalog()[5];
        let decorated = item.decorated();
        assert_eq!(
            decorated.title,
            "[Ekonomi] IHSG Melesat 2.3% di Tengah Sentimen Positif"
        );
        assert_eq!(decorated.id, item.id);
        assert_eq!(decorated.tag, item.tag);
        assert_eq!(item.title, "IHSG Melesat 2.3% di Tengah Sentimen Positif");
    }

    #[test]
    fn tag_defaults_to_empty() {
        assert_eq!(NewsItem::new(9, "x", Category::Tech).tag, "");
    }

    #[test]
    fn from_label_is_case_insensitive() {
        assert_eq!(Category::from_label("tech"), Some(Category::Tech));
        assert_eq!(Category::from_label("SEMUA"), Some(Category::All));
        assert_eq!(Category::from_label("all"), Some(Category::All));
        assert_eq!(Category::from_label(" Ekonomi "), Some(Category::Ekonomi));
        assert_eq!(Category::from_label("Olahraga"), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Category::Ekonomi.next(), Category::All);
        assert_eq!(Category::All.prev(), Category::Ekonomi);
        assert_eq!(Category::Religi.next(), Category::Nasional);
    }

    #[test]
    fn index_round_trips() {
        for (i, cat) in Category::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
            assert_eq!(Category::from_index(i), Some(*cat));
        }
        assert_eq!(Category::from_index(7), None);
    }

    #[test]
    fn headline_placeholders() {
        let h = Headline::filtering(Category::Game);
        assert_eq!(h.title(), "Memfilter kategori: Game…");
        assert_eq!(h.chip_label(), "Live");
        assert_eq!(h.tag(), "📡");
        assert!(h.is_pending());
        assert_eq!(Headline::connecting().title(), "Menghubungkan ke server…");
    }

    #[test]
    fn live_headline_reflects_item() {
        let h = Headline::Live(catalog()[2].decorated());
        assert_eq!(h.chip_label(), "Game");
        assert_eq!(h.tag(), "🎮");
        assert!(!h.is_pending());
    }
}
