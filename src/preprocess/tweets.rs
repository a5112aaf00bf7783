// Tweet cleaning: regex pipeline that turns raw tweets into tokens.
//
// Steps run in a fixed order: lowercase, strip URLs, strip @mentions, strip
// a leading "rt" marker, unwrap #hashtags, blank out punctuation, then
// split and filter tokens. Stop words come from the `stop-words` crate.

use std::collections::HashSet;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use crate::error::TopTermsError;

const URL_PATTERN: &str = r"(?:https?://|www\.)\S+";
const MENTION_PATTERN: &str = r"@\w+";
const RETWEET_PATTERN: &str = r"^\s*rt\b:?";
const HASHTAG_PATTERN: &str = r"#(\w+)";

/// Cleans raw tweet text into lowercase content tokens.
pub struct TweetCleaner {
    url: Regex,
    mention: Regex,
    retweet: Regex,
    hashtag: Regex,
    stop_words: HashSet<String>,
    remove_stop_words: bool,
    min_token_len: usize,
}

impl TweetCleaner {
    /// Compile the patterns and load English stop words.
    pub fn new() -> Result<Self, TopTermsError> {
        let stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();

        Ok(Self {
            url: Regex::new(URL_PATTERN)?,
            mention: Regex::new(MENTION_PATTERN)?,
            retweet: Regex::new(RETWEET_PATTERN)?,
            hashtag: Regex::new(HASHTAG_PATTERN)?,
            stop_words,
            remove_stop_words: true,
            min_token_len: 2,
        })
    }

    /// Keep or drop English stop words (dropped by default).
    pub fn with_stop_words_removed(mut self, remove: bool) -> Self {
        self.remove_stop_words = remove;
        self
    }

    /// Drop tokens with fewer characters than this (default 2).
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    /// Clean one tweet into tokens.
    pub fn clean(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let no_urls = self.url.replace_all(&lower, " ");
        let no_mentions = self.mention.replace_all(&no_urls, " ");
        let no_retweet = self.retweet.replace(&no_mentions, " ");
        let unwrapped = self.hashtag.replace_all(&no_retweet, "$1");

        let spaced: String = unwrapped
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect();

        spaced
            .split_whitespace()
            .filter(|token| token.chars().count() >= self.min_token_len)
            .filter(|token| !token.chars().all(|c| c.is_ascii_digit()))
            .filter(|token| !(self.remove_stop_words && self.stop_words.contains(*token)))
            .map(str::to_string)
            .collect()
    }

    /// Clean one tweet and join its tokens with single spaces.
    pub fn clean_to_string(&self, text: &str) -> String {
        self.clean(text).join(" ")
    }

    /// Clean a batch of tweets, one token list per input.
    pub fn clean_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.clean(t.as_ref())).collect()
    }
}
