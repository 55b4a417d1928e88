//! Small helpers used across the UI layer.

use std::{collections::HashSet, future::Future, time::Duration};

use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

pub use civic_mock::format::{format_currency, format_date};

const TEXT_SIZES: [&str; 13] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_FAMILIES: [&str; 3] = ["sans", "serif", "mono"];
const DISPLAYS: [&str; 8] = [
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "hidden",
];
const PREFIXES: [&str; 25] = [
    "bg", "p", "px", "py", "pt", "pr", "pb", "pl", "m", "mx", "my", "mt", "mr", "mb", "ml", "w",
    "h", "gap", "rounded", "shadow", "opacity", "z", "leading", "tracking", "justify",
];

/// Merge class names.
///
/// Empty entries and `None` are skipped. When two classes conflict, either as
/// exact duplicates or as utilities setting the same property under the same
/// variant (`p-2` then `p-4`), only the later one is kept.
///
/// # Examples
/// ```
/// use civic_client::util::cn;
///
/// assert_eq!(cn(["px-2 py-1", "px-4"]), "py-1 px-4");
/// assert_eq!(cn([Some("card"), None, Some("hover:bg-white")]), "card hover:bg-white");
/// ```
pub fn cn<'a, I, C>(classes: I) -> String
where
    I: IntoIterator<Item = C>,
    C: Into<Option<&'a str>>,
{
    let tokens: Vec<&str> = classes
        .into_iter()
        .filter_map(|class| -> Option<&'a str> { class.into() })
        .flat_map(str::split_whitespace)
        .collect();

    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = tokens
        .iter()
        .rev()
        .filter(|token| seen.insert(conflict_key(token)))
        .copied()
        .collect();
    kept.reverse();
    kept.join(" ")
}

/// Key shared by classes that override each other.
fn conflict_key(class: &str) -> String {
    let (variant, utility) = class.rsplit_once(':').unwrap_or(("", class));
    let utility = utility.trim_start_matches('!');

    let group = if DISPLAYS.contains(&utility) {
        "display".to_string()
    } else if let Some(value) = utility.strip_prefix("text-") {
        if TEXT_SIZES.contains(&value) {
            "text-size".to_string()
        } else if ["left", "center", "right", "justify"].contains(&value) {
            "text-align".to_string()
        } else {
            "text-color".to_string()
        }
    } else if let Some(value) = utility.strip_prefix("font-") {
        if FONT_FAMILIES.contains(&value) {
            "font-family".to_string()
        } else {
            "font-weight".to_string()
        }
    } else {
        let stem = utility.split_once('-').map_or(utility, |(stem, _)| stem);
        if PREFIXES.contains(&stem) {
            stem.to_string()
        } else {
            utility.to_string()
        }
    };

    format!("{variant}:{group}")
}

/// Parse JSON, returning `fallback` instead of failing.
pub fn safe_json_parse<T: DeserializeOwned>(text: &str, fallback: T) -> T {
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "Falling back after JSON parse failure");
            fallback
        }
    }
}

/// Runs only the most recent call, once no new call arrived for `delay`.
///
/// Dropping the debouncer cancels the pending call.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `task`, replacing any call still waiting.
    ///
    /// Must be called inside a tokio runtime.
    pub fn call<F, Fut>(&mut self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task().await;
        }));
    }

    /// Drop the waiting call, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
