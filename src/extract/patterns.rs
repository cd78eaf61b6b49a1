//! Vocabulary used to recognise page chrome in pasted text.
//!
//! All matching is case-insensitive. Line terms are tested against the line
//! with its whitespace removed; word terms against the word reduced to word
//! characters and lowercased.

use lazy_static::lazy_static;
use regex::Regex;

/// Stock photo sites whose credit lines end up in copied articles.
pub const STOCK_SITES: &[&str] = &[
    "shutterstock",
    "gettyimages",
    "istockphoto",
    "adobestock",
    "dreamstime",
    "depositphotos",
    "alamy",
    "123rf",
    "stockphoto",
    "bigstock",
    "fotolia",
    "pixabay",
    "unsplash",
    "pexels",
    "flickr",
];

const NAV_LINE_TERMS: &[&str] = &[
    "menu", "nav", "skip", "toggle", "search", "login", "sign.?in", "sign.?up", "register",
    "subscribe", "log.?out", "cart", "checkout", "home", "about", "contact", "services",
    "products", "pricing", "blog", "news", "faq", "help", "support", "copyright", "©",
    "all.rights.reserved", "privacy", "policy", "terms", "conditions", "cookie", "sitemap",
    "facebook", "twitter", "instagram", "linkedin", "youtube", "tiktok", "pinterest", "reddit",
    "email", "share", "follow", "previous", "next", "back", "forward", "submit", "cancel",
    "close", "open", "expand", "collapse", "show", "hide", "view", "more", "less", "loading",
    "please.wait", "advertisement", "sponsored", "ad", "promoted", "related", "popular",
    "trending", "recommended",
];

const BOILERPLATE_WORD_TERMS: &[&str] = &[
    "menu", "nav", "home", "about", "contact", "login", "logout", "signin", "signup",
    "register", "subscribe", "search", "skip", "toggle", "close", "open", "cart", "checkout",
    "facebook", "twitter", "instagram", "linkedin", "youtube", "tiktok", "pinterest", "share",
    "follow", "like", "comment", "reply", "copyright", "privacy", "terms", "cookie", "sitemap",
    "previous", "next", "back", "submit", "cancel", "loading", "advertisement", "sponsored",
    "ad", "promoted", "related", "trending", "recommended", "suggested", "popular", "click",
    "tap", "here", "read.?more", "learn.?more", "see.?more", "view.?all", "show.?more",
    "load.?more",
];

/// Short words that may open real content even though they are 3 letters or fewer.
pub const CONTENT_OPENERS: &[&str] = &[
    "the", "a", "an", "is", "are", "was", "were", "has", "have", "had", "this", "that", "these",
    "those",
];

pub const COPYRIGHT_MARK: char = '©';

fn exact_terms(terms: &[&str]) -> Regex {
    Regex::new(&format!("(?i)^(?:{})$", terms.join("|"))).expect("static vocabulary is valid")
}

lazy_static! {
    static ref STOCK_PATTERN: Regex =
        Regex::new(&format!("(?i){}", STOCK_SITES.join("|"))).expect("static vocabulary is valid");
    static ref NAV_LINE_PATTERN: Regex = exact_terms(NAV_LINE_TERMS);
    static ref BOILERPLATE_WORD_PATTERN: Regex = exact_terms(BOILERPLATE_WORD_TERMS);
}

/// True when `text` mentions a stock photo site anywhere.
pub fn mentions_stock_site(text: &str) -> bool {
    STOCK_PATTERN.is_match(text)
}

/// True when a short line, whitespace removed, is exactly one navigation term.
pub fn is_nav_line(collapsed: &str) -> bool {
    NAV_LINE_PATTERN.is_match(collapsed)
}

/// True when a cleaned (word-chars only, lowercased) word is boilerplate vocabulary.
pub fn is_boilerplate_word(clean: &str) -> bool {
    BOILERPLATE_WORD_PATTERN.is_match(clean)
}

pub fn is_content_opener(word: &str) -> bool {
    let lower = word.to_lowercase();
    CONTENT_OPENERS.contains(&lower.as_str())
}
