use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Prefix of the placeholder tokens minted while escaping backtick literals.
    /// Must never appear in the parsed SQL as `__{keyword}{n}__`.
    #[config(env = "QSPLIT_PLACEHOLDER_KEYWORD", default = "ref")]
    pub placeholder_keyword: String,
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}

/// The configured placeholder keyword, `"ref"` unless overridden by the environment.
pub fn placeholder_keyword() -> &'static str {
    &config().placeholder_keyword
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keyword_is_ref() {
        // CI never sets the override, so the default must come through.
        if std::env::var_os("QSPLIT_PLACEHOLDER_KEYWORD").is_none() {
            assert_eq!(placeholder_keyword(), "ref");
        }
    }
}
