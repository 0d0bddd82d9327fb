//! Deck catalog: the flashcard decks the site renders, read from a TOML file.
//!
//! ```toml
//! [site]
//! title = "flashdeck"
//! tagline = "study, then quiz yourself"
//!
//! [[decks]]
//! slug = "capitals"
//! title = "Capitals"
//! mode = "quiz"            # optional, initial mode (default "study")
//! show_label = "reveal"    # optional toggle label overrides
//! hide_label = "conceal"
//!
//! [[decks.cards]]
//! prompt = "Peru"
//! answer = "Lima"
//! ```

use anyhow::{Context, Result, anyhow, bail};
use flashdeck::{Labels, Mode};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    site: Option<SiteSection>,
    #[serde(default)]
    decks: Vec<DeckSection>,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    title: String,
    #[serde(default)]
    tagline: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeckSection {
    slug: String,
    title: String,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    show_label: Option<String>,
    #[serde(default)]
    hide_label: Option<String>,
    #[serde(default)]
    cards: Vec<CardSection>,
}

#[derive(Debug, Deserialize)]
struct CardSection {
    prompt: String,
    answer: String,
}

// ── Public config ─────────────────────────────────────────────────────────────

const DEFAULT_TITLE: &str = "flashdeck";
const DEFAULT_TAGLINE: &str = "study the cards, then quiz yourself";

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub title: String,
    pub tagline: String,
    pub decks: Vec<Deck>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// URL segment and radio group suffix; `[a-z0-9-]+`, unique in the catalog.
    pub slug: String,
    pub title: String,
    /// Mode checked when the page is served.
    pub mode: Mode,
    /// Toggle label overrides; blank values are dropped at parse time.
    pub show_label: Option<String>,
    pub hide_label: Option<String>,
    pub cards: Vec<CardEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    pub prompt: String,
    pub answer: String,
}

impl Catalog {
    /// Load a catalog from a TOML file (typically `data/decks.toml`).
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read decks: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse decks: {}", path.display()))
    }

    /// Like [`Catalog::load`], but a missing file means the built-in sample.
    pub fn load_or_sample(path: &Path) -> Result<Self> {
        if !path.exists() {
            println!("[config] {} not found, serving the sample decks", path.display());
            return Ok(Self::sample());
        }
        Self::load(path)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content)?;

        let mut seen = HashSet::new();
        let mut decks = Vec::with_capacity(file.decks.len());
        for deck in file.decks {
            validate_slug(&deck.slug)?;
            if !seen.insert(deck.slug.clone()) {
                bail!("duplicate deck slug {:?}", deck.slug);
            }
            let mode = match deck.mode.as_deref() {
                Some(mode) => mode
                    .parse::<Mode>()
                    .with_context(|| format!("deck {:?}", deck.slug))?,
                None => Mode::Study,
            };
            decks.push(Deck {
                slug: deck.slug,
                title: deck.title,
                mode,
                show_label: Labels::usable(deck.show_label),
                hide_label: Labels::usable(deck.hide_label),
                cards: deck
                    .cards
                    .into_iter()
                    .map(|c| CardEntry {
                        prompt: c.prompt,
                        answer: c.answer,
                    })
                    .collect(),
            });
        }

        let (title, tagline) = match file.site {
            Some(site) => (site.title, site.tagline.unwrap_or_else(|| DEFAULT_TAGLINE.to_string())),
            None => (DEFAULT_TITLE.to_string(), DEFAULT_TAGLINE.to_string()),
        };

        Ok(Self { title, tagline, decks })
    }

    /// Served when no deck file exists.
    pub fn sample() -> Self {
        let card = |prompt: &str, answer: &str| CardEntry {
            prompt: prompt.to_string(),
            answer: answer.to_string(),
        };
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            decks: vec![
                Deck {
                    slug: "ownership".into(),
                    title: "Ownership".into(),
                    mode: Mode::Study,
                    show_label: None,
                    hide_label: None,
                    cards: vec![
                        card("What happens to a value when its owner goes out of scope?", "It is dropped."),
                        card("How many mutable borrows may coexist?", "One, and no shared borrows alongside it."),
                        card("What does `move` do on a closure?", "Captures its environment by value."),
                    ],
                },
                Deck {
                    slug: "capitals".into(),
                    title: "Capitals".into(),
                    mode: Mode::Quiz,
                    show_label: None,
                    hide_label: None,
                    cards: vec![card("Peru", "Lima"), card("Mongolia", "Ulaanbaatar"), card("Ghana", "Accra")],
                },
            ],
        }
    }

    pub fn deck(&self, slug: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.slug == slug)
    }
}

fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        bail!("deck slug must not be empty");
    }
    if let Some(bad) = slug.chars().find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')) {
        bail!("deck slug {:?} contains {:?} (allowed: a-z, 0-9, -)", slug, bad);
    }
    Ok(())
}

// ── Process-wide catalog ──────────────────────────────────────────────────────

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Install the catalog the server renders. Call once at startup.
pub fn install(catalog: Catalog) -> Result<()> {
    CATALOG
        .set(catalog)
        .map_err(|_| anyhow!("deck catalog already installed"))
}

/// The installed catalog, or the sample if nothing was installed.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECKS: &str = r#"
        [site]
        title = "Geography night"

        [[decks]]
        slug = "capitals"
        title = "Capitals"
        mode = "quiz"
        show_label = "reveal"

        [[decks.cards]]
        prompt = "Peru"
        answer = "Lima"

        [[decks.cards]]
        prompt = "Ghana"
        answer = "Accra"

        [[decks]]
        slug = "rivers-2"
        title = "Rivers"
    "#;

    #[test]
    fn parses_decks() {
        let catalog = Catalog::parse(DECKS).unwrap();
        assert_eq!(catalog.title, "Geography night");
        assert_eq!(catalog.tagline, DEFAULT_TAGLINE);
        assert_eq!(catalog.decks.len(), 2);

        let capitals = catalog.deck("capitals").unwrap();
        assert_eq!(capitals.mode, Mode::Quiz);
        assert_eq!(capitals.show_label.as_deref(), Some("reveal"));
        assert_eq!(capitals.hide_label, None);
        assert_eq!(capitals.cards[1].answer, "Accra");

        let rivers = catalog.deck("rivers-2").unwrap();
        assert_eq!(rivers.mode, Mode::Study);
        assert!(rivers.cards.is_empty());
        assert!(catalog.deck("oceans").is_none());
    }

    #[test]
    fn missing_site_section_uses_defaults() {
        let catalog = Catalog::parse("").unwrap();
        assert_eq!(catalog.title, DEFAULT_TITLE);
        assert_eq!(catalog.tagline, DEFAULT_TAGLINE);
        assert!(catalog.decks.is_empty());
    }

    #[test]
    fn explicit_tagline_wins() {
        let catalog = Catalog::parse("[site]\ntitle = \"T\"\ntagline = \"\"\n").unwrap();
        assert_eq!(catalog.tagline, "");
    }

    #[test]
    fn blank_labels_are_dropped() {
        let toml = "[[decks]]\nslug = \"a\"\ntitle = \"A\"\nshow_label = \"\"\nhide_label = \"   \"\n";
        let deck = &Catalog::parse(toml).unwrap().decks[0];
        assert_eq!(deck.show_label, None);
        assert_eq!(deck.hide_label, None);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = Catalog::parse("[[decks]]\nslug = \"a\"\ntitle = \"A\"\nmode = \"exam\"\n").unwrap_err();
        assert!(format!("{:#}", err).contains("exam"));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let toml = "[[decks]]\nslug = \"a\"\ntitle = \"A\"\n[[decks]]\nslug = \"a\"\ntitle = \"B\"\n";
        assert!(Catalog::parse(toml).unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_bad_slugs() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Capitals").is_err());
        assert!(validate_slug("a b").is_err());
        assert!(validate_slug("deck-2").is_ok());
    }

    #[test]
    fn sample_is_valid() {
        let sample = Catalog::sample();
        for deck in &sample.decks {
            validate_slug(&deck.slug).unwrap();
        }
        assert!(sample.decks.iter().any(|d| d.mode == Mode::Quiz));
    }

    #[test]
    fn bundled_deck_file_parses() {
        let catalog = Catalog::parse(include_str!("../data/decks.toml")).unwrap();
        assert!(!catalog.decks.is_empty());
    }
}
