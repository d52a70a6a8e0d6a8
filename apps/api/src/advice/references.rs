//! Reference tables — the spiritual passages and quotation set bundled with
//! the service. Built once at startup and shared read-only through `AppState`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Number of quotes attached to each advice response.
pub const QUOTES_PER_RESPONSE: usize = 3;

const SPIRITUAL_SOURCES: [(&str, &str); 5] = [
    (
        "Bhagavad Gita",
        "Chapter 2, Verse 47: Your right is to perform your duty only, but never to its fruits...",
    ),
    (
        "Quran",
        "Surah Al-Baqarah, Verse 286: Allah does not burden a soul beyond that it can bear...",
    ),
    (
        "Bible",
        "Philippians 4:13: I can do all things through Christ who strengthens me...",
    ),
    (
        "Guru Granth Sahib",
        "Ang 10: Recognize the Divine Light within all...",
    ),
    (
        "Tripitaka",
        "Dhammapada, Verse 183: Do no harm, cultivate good, purify your mind...",
    ),
];

const MOTIVATIONAL_QUOTES: [&str; 10] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Do what you can, with what you have, where you are. - Theodore Roosevelt",
    "Act as if what you do makes a difference. It does. - William James",
    "Be kind, for everyone you meet is fighting a hard battle. - Plato",
    "What you think, you become. What you feel, you attract. - Buddha",
    "You do not rise to the level of your goals. You fall to the level of your systems. - James Clear (Atomic Habits)",
    "If you want to be happy, set a goal that commands your thoughts... - Napoleon Hill (Think and Grow Rich)",
    "Success is not final, failure is not fatal: It is the courage to continue that counts. - Winston Churchill",
    "Opportunities don't happen. You create them. - Chris Grosser",
    "Your time is limited, so don't waste it living someone else's life. - Steve Jobs",
];

/// A tradition and the passage shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpiritualSource {
    pub tradition: String,
    pub passage: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLibrary {
    pub spiritual: Vec<SpiritualSource>,
    pub quotes: Vec<String>,
}

impl ReferenceLibrary {
    /// The bundled tables: 5 spiritual passages, 10 quotes.
    pub fn builtin() -> Self {
        Self {
            spiritual: SPIRITUAL_SOURCES
                .iter()
                .map(|(tradition, passage)| SpiritualSource {
                    tradition: tradition.to_string(),
                    passage: passage.to_string(),
                })
                .collect(),
            quotes: MOTIVATIONAL_QUOTES.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Picks `count` distinct quotes uniformly without replacement.
    /// Returns every quote (shuffled) when the set is smaller than `count`.
    pub fn sample_quotes<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<String> {
        self.quotes
            .choose_multiple(rng, count)
            .cloned()
            .collect()
    }
}
