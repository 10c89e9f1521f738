//! Keyword table of the bot.

/// What a rule answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Canned text
    Text(&'static str),
    /// `Server time: ...` rendered at reply time
    ServerTime,
}

/// A single keyword rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub keyword: &'static str,
    pub reply: Reply,
}

/// Rules in priority order; the first keyword found in the input wins.
pub const RULES: &[Rule] = &[
    Rule {
        keyword: "hello",
        reply: Reply::Text("Hello! 👋 I'm the room bot. Ask me anything or type 'help' to see commands."),
    },
    Rule {
        keyword: "hi",
        reply: Reply::Text("Hi! Nice to meet you. Try 'help' to see options."),
    },
    Rule {
        keyword: "how are you",
        reply: Reply::Text("I'm a demo bot, running smoothly! 😊"),
    },
    Rule {
        keyword: "help",
        reply: Reply::Text("Try: 'hello', 'time', 'joke', 'bye', or ask about the app."),
    },
    Rule {
        keyword: "time",
        reply: Reply::ServerTime,
    },
    Rule {
        keyword: "joke",
        reply: Reply::Text("Why do programmers prefer dark mode? Because light attracts bugs! 🐞"),
    },
    Rule {
        keyword: "bye",
        reply: Reply::Text("Goodbye! Have a great day 👋"),
    },
    Rule {
        keyword: "thanks",
        reply: Reply::Text("You're welcome! 🙌"),
    },
];

/// Whole tokens that mark the input as a question.
pub const INTERROGATIVES: &[&str] = &["who", "what", "why", "how", "where"];

/// Reply for questions nothing in the table answers.
pub const QUESTION_FALLBACK: &str =
    "That's a great question! As a demo bot I only give simple replies. Try 'help' for examples.";

/// Reply for everything else.
pub const GENERIC_FALLBACK: &str = "I don't know that. Try 'help' or ask something else!";

/// Minimum similarity ratio for a fuzzy keyword match.
pub const FUZZY_CUTOFF: f64 = 0.6;
