//! Shared CLI helpers.

/// Split a comma-separated tool list into names.
///
/// Whitespace around names is trimmed, empty segments are discarded, and
/// duplicates are dropped while keeping first-seen order. A value that yields
/// no names normalizes to `None`, so `--tools ""` behaves like an absent
/// flag.
pub fn parse_tool_list(value: Option<&str>) -> Option<Vec<String>> {
    let raw = value?;
    let mut names: Vec<String> = Vec::new();
    for part in raw.split(',') {
        let name = part.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_tool_list;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_tool_list(Some("ruff, mypy ,poe")),
            Some(vec!["ruff".to_string(), "mypy".to_string(), "poe".to_string()])
        );
    }

    #[test]
    fn drops_empty_segments_and_duplicates() {
        assert_eq!(
            parse_tool_list(Some("ruff,,ruff, ,mypy")),
            Some(vec!["ruff".to_string(), "mypy".to_string()])
        );
    }

    #[test]
    fn empty_values_normalize_to_none() {
        assert_eq!(parse_tool_list(None), None);
        assert_eq!(parse_tool_list(Some("")), None);
        assert_eq!(parse_tool_list(Some(" , ,")), None);
    }
}
