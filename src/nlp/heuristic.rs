//! Heuristic entity extractor
//!
//! A rule-based stand-in for a statistical NLP pipeline. It uses cheap
//! structural signals and small lexicons:
//!
//! 1. Runs of capitalized words (optionally joined by `of`, `the`, ...) are
//!    entity candidates, classified by suffixes, titles and known places.
//! 2. Capitalized words that do not open a sentence, and acronyms anywhere,
//!    are tagged as proper nouns.
//!
//! Words that are part of a placeholder (contain `[` or `]`) are never
//! reported, so text that already went through the regex pass is safe to
//! feed in.

use super::{EntityExtractor, EntitySpan, Extraction};
use crate::anonymization::labels::EntityLabel;
use crate::domain::ExtractorError;

const ORG_SUFFIX: &[&str] = &[
    "inc",
    "corp",
    "corporation",
    "incorporated",
    "ltd",
    "limited",
    "llc",
    "plc",
    "co",
    "company",
    "gmbh",
    "ag",
    "group",
    "holdings",
    "foundation",
    "institute",
    "university",
    "college",
    "bank",
    "agency",
    "association",
    "council",
    "committee",
    "department",
    "ministry",
    "press",
    "times",
];

const STREET_SUFFIX: &[&str] = &[
    "st",
    "street",
    "ave",
    "avenue",
    "rd",
    "road",
    "blvd",
    "boulevard",
    "ln",
    "lane",
    "way",
    "hwy",
    "highway",
    "square",
    "plaza",
];

const FACILITY_SUFFIX: &[&str] = &[
    "airport",
    "hospital",
    "bridge",
    "station",
    "stadium",
    "museum",
    "tower",
    "library",
    "hall",
    "center",
    "centre",
];

const PERSON_PREFIX: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "sir", "dame"];

const PLACE_INDICATORS: &[&str] = &["new", "united", "north", "south", "east", "west", "great"];

const CONNECTORS: &[&str] = &[
    "of", "the", "for", "de", "del", "da", "di", "van", "von", "la", "le",
];

// Capitalized only because they open a sentence or a salutation.
const STARTERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "it", "he", "she", "we", "they", "you",
    "i'm", "i've", "i'll", "i'd", "my", "our", "your", "his", "her", "their", "its", "in", "on",
    "at", "to", "for", "from", "by", "with", "and", "but", "or", "so", "if", "as", "because",
    "contact", "call", "email", "visit", "please", "see", "note", "dear", "hello", "hi",
    "thanks", "thank", "sincerely", "regards", "best", "yours", "meet", "today", "yesterday",
    "tomorrow", "now", "then", "what", "where", "when", "who", "why", "how", "is", "are", "was",
    "were", "yes", "no", "also", "however", "there", "here",
];

const KNOWN_GPE: &[&str] = &[
    "united states",
    "united kingdom",
    "usa",
    "uk",
    "america",
    "canada",
    "mexico",
    "brazil",
    "france",
    "germany",
    "italy",
    "spain",
    "china",
    "japan",
    "india",
    "russia",
    "australia",
    "new york",
    "london",
    "paris",
    "berlin",
    "tokyo",
    "madrid",
    "rome",
    "moscow",
    "beijing",
    "boston",
    "chicago",
    "toronto",
    "sydney",
    "california",
    "texas",
    "florida",
    "washington",
];

const KNOWN_LOC: &[&str] = &[
    "europe",
    "asia",
    "africa",
    "antarctica",
    "north america",
    "south america",
    "pacific",
    "atlantic",
    "alps",
    "himalayas",
    "sahara",
];

const KNOWN_ORG: &[&str] = &[
    "google",
    "microsoft",
    "apple",
    "amazon",
    "ibm",
    "nasa",
    "fbi",
    "cia",
    "nato",
    "unesco",
    "reuters",
    "bloomberg",
];

/// Tokenized word with byte offsets into the source text
#[derive(Debug, Clone)]
struct Word<'t> {
    raw: &'t str,
    core: &'t str,
    start: usize,
    end: usize,
    core_start: usize,
    core_end: usize,
}

impl<'t> Word<'t> {
    fn new(text: &'t str, start: usize, end: usize) -> Self {
        let raw = &text[start..end];
        let leading = raw.len() - raw.trim_start_matches(|c: char| !c.is_alphanumeric()).len();
        let core = raw.trim_matches(|c: char| !c.is_alphanumeric());
        let core = core
            .strip_suffix("'s")
            .or_else(|| core.strip_suffix("\u{2019}s"))
            .unwrap_or(core);
        let core_start = start + leading;

        Self {
            raw,
            core,
            start,
            end,
            core_start,
            core_end: core_start + core.len(),
        }
    }

    fn lower(&self) -> String {
        self.core.to_lowercase()
    }

    fn is_placeholder(&self) -> bool {
        self.raw.contains('[') || self.raw.contains(']')
    }

    fn is_capitalized(&self) -> bool {
        !self.is_placeholder() && self.core.chars().next().is_some_and(char::is_uppercase)
    }

    fn is_title_prefix(&self) -> bool {
        PERSON_PREFIX.contains(&self.lower().as_str())
    }

    fn is_acronym(&self) -> bool {
        self.core.chars().filter(|c| c.is_alphabetic()).count() >= 2
            && self
                .core
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(char::is_uppercase)
    }

    fn ends_clause(&self) -> bool {
        self.raw
            .ends_with(['.', ',', ';', ':', '!', '?', ')', ']', '"'])
    }

    fn ends_sentence(&self) -> bool {
        let single_initial = self.core.chars().count() == 1;
        self.raw.ends_with(['.', '!', '?', ':']) && !self.is_title_prefix() && !single_initial
    }

    fn opens_group(&self) -> bool {
        self.raw.starts_with(['(', '"', '['])
    }
}

fn tokenize(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push(Word::new(text, s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        words.push(Word::new(text, s, text.len()));
    }

    words
}

fn line_break_between(text: &str, left: &Word<'_>, right: &Word<'_>) -> bool {
    text[left.end..right.start].contains('\n')
}

fn is_sentence_start(text: &str, words: &[Word<'_>], idx: usize) -> bool {
    idx == 0
        || words[idx - 1].ends_sentence()
        || line_break_between(text, &words[idx - 1], &words[idx])
}

fn is_name_like(core: &str) -> bool {
    core.chars().next().is_some_and(char::is_uppercase)
        && core.chars().all(|c| c.is_alphabetic() || c == '\'' || c == '-')
        && core.chars().any(char::is_lowercase)
}

/// Heuristic NER extractor
#[derive(Debug, Clone, Default)]
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Inclusive word-index ranges of capitalized runs
    fn capitalized_runs(text: &str, words: &[Word<'_>]) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut i = 0;

        while i < words.len() {
            if !words[i].is_capitalized() {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i;
            loop {
                let current = &words[end];
                if current.ends_clause() && !current.is_title_prefix() {
                    break;
                }
                let Some(next) = words.get(end + 1) else {
                    break;
                };
                if line_break_between(text, current, next) || next.opens_group() {
                    break;
                }
                if next.is_capitalized() {
                    end += 1;
                    continue;
                }

                // "Bank of America", "Center for Disease Control"
                let is_connector =
                    CONNECTORS.contains(&next.lower().as_str()) && next.raw == next.core;
                let joins_capitalized = words.get(end + 2).is_some_and(|after| {
                    after.is_capitalized()
                        && !after.opens_group()
                        && !line_break_between(text, next, after)
                });
                if is_connector && joins_capitalized {
                    end += 2;
                    continue;
                }
                break;
            }

            runs.push((start, end));
            i = end + 1;
        }

        runs
    }

    fn classify(span: &[Word<'_>]) -> Option<EntityLabel> {
        let lowers: Vec<String> = span.iter().map(Word::lower).collect();
        let joined = lowers.join(" ");

        if span.len() == 1 {
            return if KNOWN_GPE.contains(&joined.as_str()) {
                Some(EntityLabel::Gpe)
            } else if KNOWN_LOC.contains(&joined.as_str()) {
                Some(EntityLabel::Loc)
            } else if KNOWN_ORG.contains(&joined.as_str()) {
                Some(EntityLabel::Org)
            } else {
                None
            };
        }

        let first = lowers.first()?.as_str();
        let last = lowers.last()?.as_str();

        let label = if STREET_SUFFIX.contains(&last) || FACILITY_SUFFIX.contains(&last) {
            EntityLabel::Fac
        } else if ORG_SUFFIX.contains(&last) {
            EntityLabel::Org
        } else if PERSON_PREFIX.contains(&first) {
            EntityLabel::Person
        } else if KNOWN_GPE.contains(&joined.as_str()) || PLACE_INDICATORS.contains(&first) {
            EntityLabel::Gpe
        } else if KNOWN_LOC.contains(&joined.as_str()) {
            EntityLabel::Loc
        } else if lowers.iter().any(|w| CONNECTORS.contains(&w.as_str())) {
            EntityLabel::Org
        } else if span.len() <= 3 && span.iter().all(|w| is_name_like(w.core)) {
            EntityLabel::Person
        } else {
            EntityLabel::Org
        };

        Some(label)
    }

    fn entities(text: &str, words: &[Word<'_>]) -> Vec<EntitySpan> {
        let mut entities = Vec::new();

        for (mut start, end) in Self::capitalized_runs(text, words) {
            while start <= end {
                let head = words[start].lower();
                if STARTERS.contains(&head.as_str()) || CONNECTORS.contains(&head.as_str()) {
                    start += 1;
                } else {
                    break;
                }
            }
            if start > end {
                continue;
            }

            let span = &words[start..=end];
            let Some(label) = Self::classify(span) else {
                continue;
            };
            let entity_text = &text[span[0].core_start..span[span.len() - 1].core_end];
            if entity_text.is_empty() {
                continue;
            }
            entities.push(EntitySpan::new(entity_text, label));
        }

        entities
    }

    fn proper_nouns(text: &str, words: &[Word<'_>]) -> Vec<String> {
        words
            .iter()
            .enumerate()
            .filter(|(idx, word)| {
                word.is_capitalized()
                    && word.core.chars().count() >= 2
                    && !STARTERS.contains(&word.lower().as_str())
                    && !CONNECTORS.contains(&word.lower().as_str())
                    && (word.is_acronym() || !is_sentence_start(text, words, *idx))
            })
            .map(|(_, word)| word.core.to_string())
            .collect()
    }
}

impl EntityExtractor for HeuristicExtractor {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn extract(&self, text: &str) -> Result<Extraction, ExtractorError> {
        let words = tokenize(text);
        Ok(Extraction {
            entities: Self::entities(text, &words),
            proper_nouns: Self::proper_nouns(text, &words),
        })
    }
}
