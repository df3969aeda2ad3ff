use std::collections::HashMap;
use std::hash::BuildHasher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRequest {
    pub use_cache: bool,
    pub want_json: bool,
}

fn flag<S: BuildHasher>(query: &HashMap<String, String, S>, key: &str, default: bool) -> bool {
    match query.get(key).map(|s| s.trim()) {
        Some("1") => true,
        Some("0") => false,
        None | Some("") => default,
        Some(other) => other.parse().unwrap_or(default),
    }
}

/// `cache=0` forces a refresh, `json=1` asks for the raw board.
#[must_use]
pub fn parse_board_request<S: BuildHasher>(query: &HashMap<String, String, S>) -> BoardRequest {
    BoardRequest {
        use_cache: flag(query, "cache", true),
        want_json: flag(query, "json", false),
    }
}
