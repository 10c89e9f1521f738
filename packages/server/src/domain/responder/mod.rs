//! Rule-based bot responder.
//!
//! The reply for a user message is chosen by a strict priority chain:
//!
//! 1. the first keyword (in table order) that occurs in the lower-cased input
//!    as a whole word or phrase;
//! 2. otherwise the keyword most similar to the whole input, if the
//!    similarity ratio reaches [`rules::FUZZY_CUTOFF`];
//! 3. otherwise a question fallback when the input contains an interrogative
//!    token;
//! 4. otherwise the generic fallback.
//!
//! A substring hit always beats a better fuzzy score.

pub mod rules;
pub mod similarity;

use roomchat_shared::time::format_timestamp;

use self::rules::{
    FUZZY_CUTOFF, GENERIC_FALLBACK, INTERROGATIVES, QUESTION_FALLBACK, RULES, Reply, Rule,
};
use super::value_object::Timestamp;

/// Stateless responder over a fixed rule table.
#[derive(Debug, Clone)]
pub struct Responder {
    rules: &'static [Rule],
    cutoff: f64,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Responder over the built-in rule table
    pub fn new() -> Self {
        Self {
            rules: RULES,
            cutoff: FUZZY_CUTOFF,
        }
    }

    /// Reply to the latest user message.
    pub fn respond(&self, last_user_text: &str) -> String {
        self.respond_at(last_user_text, Timestamp::now())
    }

    /// Reply to the latest user message, using `now` for time-dependent rules.
    pub fn respond_at(&self, last_user_text: &str, now: Timestamp) -> String {
        let text = last_user_text.to_lowercase();

        if let Some(rule) = self
            .rules
            .iter()
            .find(|rule| contains_phrase(&text, rule.keyword))
        {
            return render(rule.reply, now);
        }

        let keywords: Vec<&str> = self.rules.iter().map(|rule| rule.keyword).collect();
        if let Some(index) = similarity::closest_match(&text, &keywords, self.cutoff) {
            return render(self.rules[index].reply, now);
        }

        if text
            .split_whitespace()
            .any(|token| INTERROGATIVES.contains(&token))
        {
            return QUESTION_FALLBACK.to_string();
        }

        GENERIC_FALLBACK.to_string()
    }
}

fn render(reply: Reply, now: Timestamp) -> String {
    match reply {
        Reply::Text(text) => text.to_string(),
        Reply::ServerTime => format!("Server time: {}", format_timestamp(&now.value())),
    }
}

/// Whether `phrase` occurs in `haystack` with no alphanumeric character
/// directly before or after it.
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
