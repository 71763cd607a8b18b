use std::env;

use log::warn;

const PROMPT_ENV: &str = "ARITH_PROMPT";
const SHOW_TOKENS_ENV: &str = "ARITH_SHOW_TOKENS";
const SHOW_AST_ENV: &str = "ARITH_SHOW_AST";

const DEFAULT_PROMPT: &str = "> ";

/// Read-loop settings. Loaded from the process environment, which the
/// binary populates from an optional `.env` file first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    pub show_tokens: bool,
    pub show_ast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            show_tokens: true,
            show_ast: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Config {
            prompt: lookup(PROMPT_ENV).unwrap_or(defaults.prompt),
            show_tokens: flag(&lookup, SHOW_TOKENS_ENV, defaults.show_tokens),
            show_ast: flag(&lookup, SHOW_AST_ENV, defaults.show_ast),
        }
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("Ignoring {}={:?}, expected a boolean", key, raw);
            default
        }
    }
}
