//! Lexicon and rule based compound polarity scorer.
//!
//! Each token gets a valence from [`VALENCES`], adjusted by ALL-CAPS
//! emphasis, nearby boosters and dampeners, negation, "least" and a "but"
//! contrast shift. The summed valence plus punctuation emphasis is squashed
//! into `[-1.0, 1.0]`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ytcs_core::SentimentLabel;

use crate::lexicon::{BOOSTERS, NEGATIONS, VALENCES};

/// Compound scores at or above this are [`SentimentLabel::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are [`SentimentLabel::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// ALL-CAPS emphasis added to a word's valence.
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a valence when a negation precedes it.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant approximating the max expected summed valence.
const ALPHA: f64 = 15.0;

const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

static VALENCE_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| VALENCES.iter().copied().collect());

static BOOSTER_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());

static NEGATION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIONS.iter().copied().collect());

/// Map a compound score onto the three-way label.
///
/// Both thresholds are inclusive: `0.05` is Positive and `-0.05` is Negative.
#[must_use]
pub fn label_for_compound(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Compute the compound polarity of `text` in `[-1.0, 1.0]`.
///
/// Returns `0.0` for empty text or text with no sentiment-bearing tokens.
#[must_use]
pub fn compound_score(text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let cap_diff = has_cap_differential(&tokens);
    let mut sentiments: Vec<f64> = (0..tokens.len())
        .map(|i| token_valence(&tokens, i, cap_diff))
        .collect();

    apply_but_shift(&tokens, &mut sentiments);

    let mut sum: f64 = sentiments.iter().sum();
    let emphasis = punctuation_emphasis(text);
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }

    normalize(sum)
}

struct Token<'a> {
    raw: &'a str,
    /// Lowercased lookup key: the raw token when it is a known emoticon,
    /// otherwise the token with surrounding punctuation stripped.
    key: String,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .filter_map(|raw| {
            let raw_lower = raw.to_lowercase();
            if VALENCE_MAP.contains_key(raw_lower.as_str()) {
                return Some(Token {
                    raw,
                    key: raw_lower,
                });
            }
            let stripped = raw
                .trim_matches(|c: char| c.is_ascii_punctuation())
                .to_lowercase();
            (stripped.chars().count() > 1).then_some(Token { raw, key: stripped })
        })
        .collect()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// True when some, but not all, tokens are shouted.
fn has_cap_differential(tokens: &[Token<'_>]) -> bool {
    let shouted = tokens.iter().filter(|t| is_all_caps(t.raw)).count();
    shouted > 0 && shouted < tokens.len()
}

fn in_lexicon(key: &str) -> bool {
    VALENCE_MAP.contains_key(key)
}

fn is_negation(key: &str) -> bool {
    NEGATION_SET.contains(key) || key.contains("n't")
}

fn token_valence(tokens: &[Token<'_>], i: usize, cap_diff: bool) -> f64 {
    let key = tokens[i].key.as_str();

    // Boosters carry no valence of their own, nor does the "kind" of "kind of".
    if BOOSTER_MAP.contains_key(key)
        || (key == "kind" && tokens.get(i + 1).is_some_and(|t| t.key == "of"))
    {
        return 0.0;
    }

    let Some(&base) = VALENCE_MAP.get(key) else {
        return 0.0;
    };
    let mut valence = base;

    // "no" directly before another sentiment word acts as negation only.
    if key == "no" && tokens.get(i + 1).is_some_and(|t| in_lexicon(&t.key)) {
        valence = 0.0;
    }
    if (i > 0 && tokens[i - 1].key == "no")
        || (i > 1 && tokens[i - 2].key == "no")
        || (i > 2 && tokens[i - 3].key == "no" && matches!(tokens[i - 1].key.as_str(), "or" | "nor"))
    {
        valence *= NEGATION_SCALAR;
    }

    if cap_diff && is_all_caps(tokens[i].raw) {
        valence += CAPS_INCREMENT.copysign(valence);
    }

    for distance in 0..3 {
        if i <= distance {
            break;
        }
        let prev = &tokens[i - (distance + 1)];
        if in_lexicon(&prev.key) {
            continue;
        }
        let mut scalar = booster_scalar(prev, valence, cap_diff);
        match distance {
            1 => scalar *= 0.95,
            2 => scalar *= 0.9,
            _ => {}
        }
        valence += scalar;
        valence = negation_check(valence, tokens, distance, i);
    }

    least_check(valence, tokens, i)
}

fn booster_scalar(token: &Token<'_>, valence: f64, cap_diff: bool) -> f64 {
    let Some(&boost) = BOOSTER_MAP.get(token.key.as_str()) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -boost } else { boost };
    if cap_diff && is_all_caps(token.raw) {
        if valence > 0.0 {
            scalar += CAPS_INCREMENT;
        } else {
            scalar -= CAPS_INCREMENT;
        }
    }
    scalar
}

fn negation_check(valence: f64, tokens: &[Token<'_>], distance: usize, i: usize) -> f64 {
    let key_at = |back: usize| tokens[i - back].key.as_str();
    let so_or_this = |k: &str| k == "so" || k == "this";

    match distance {
        0 => {
            if is_negation(key_at(1)) {
                return valence * NEGATION_SCALAR;
            }
        }
        1 => {
            if key_at(2) == "never" && so_or_this(key_at(1)) {
                return valence * 1.25;
            }
            if key_at(2) == "without" && key_at(1) == "doubt" {
                return valence;
            }
            if is_negation(key_at(2)) {
                return valence * NEGATION_SCALAR;
            }
        }
        2 => {
            if key_at(3) == "never" && (so_or_this(key_at(2)) || so_or_this(key_at(1))) {
                return valence * 1.25;
            }
            if key_at(3) == "without" && (key_at(2) == "doubt" || key_at(1) == "doubt") {
                return valence;
            }
            if is_negation(key_at(3)) {
                return valence * NEGATION_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

/// "least X" flips X, except in "at least" and "very least".
fn least_check(valence: f64, tokens: &[Token<'_>], i: usize) -> f64 {
    if i == 0 || tokens[i - 1].key != "least" {
        return valence;
    }
    if i > 1 && matches!(tokens[i - 2].key.as_str(), "at" | "very") {
        return valence;
    }
    valence * NEGATION_SCALAR
}

/// Sentiment before "but" is halved, after it is boosted by half.
fn apply_but_shift(tokens: &[Token<'_>], sentiments: &mut [f64]) {
    let Some(but_at) = tokens.iter().position(|t| t.key == "but") else {
        return;
    };
    for (idx, s) in sentiments.iter_mut().enumerate() {
        if idx < but_at {
            *s *= 0.5;
        } else if idx > but_at {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    #[allow(clippy::cast_precision_loss)]
    let ep = exclamations as f64 * EXCLAMATION_INCREMENT;

    let questions = text.matches('?').count();
    #[allow(clippy::cast_precision_loss)]
    let qm = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCREMENT,
        _ => QUESTION_CAP,
    };

    ep + qm
}

/// Squash into `[-1.0, 1.0]` and round to four decimals, so labels are
/// decided on the rounded score.
fn normalize(score: f64) -> f64 {
    let compound = (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0);
    (compound * 10_000.0).round() / 10_000.0
}
