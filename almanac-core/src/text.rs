//! Name normalization and word wrapping

/// Squash a name for catalog comparison: drop whitespace and ASCII
/// punctuation.
///
/// `+` and `-` survive because they are significant in particle names
/// ("sigma+" vs "sigma-"). `*` and `?` survive so wildcard queries reach
/// the pattern pass intact. Non-ASCII characters (π, ☉) pass through
/// unchanged.
pub fn squash_name(name: &str) -> String {
    name.chars()
        .filter(|&c| {
            if c.is_whitespace() {
                return false;
            }
            if c.is_ascii_punctuation() {
                return matches!(c, '+' | '-' | '*' | '?');
            }
            true
        })
        .collect()
}

/// Greedy word wrap: split `text` on whitespace and pack words into lines
/// strictly shorter than `width` columns.
///
/// A single word longer than `width` gets its own over-long line. Empty or
/// all-whitespace input yields an empty vector.
pub fn rewrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + word.len() + 1 < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squash_strips_spaces_and_punctuation() {
        assert_eq!(squash_name("speed of light"), "speedoflight");
        assert_eq!(squash_name("Stefan-Boltzmann constant"), "Stefan-Boltzmannconstant");
        assert_eq!(squash_name("G(newton)"), "Gnewton");
        assert_eq!(squash_name("m_e"), "me");
    }

    #[test]
    fn squash_keeps_charge_signs() {
        assert_eq!(squash_name("sigma+"), "sigma+");
        assert_eq!(squash_name("sigma-"), "sigma-");
        assert_ne!(squash_name("sigma+"), squash_name("sigma-"));
    }

    #[test]
    fn squash_keeps_wildcards() {
        assert_eq!(squash_name("mass *"), "mass*");
        assert_eq!(squash_name("m?on"), "m?on");
    }

    #[test]
    fn squash_passes_non_ascii_through() {
        assert_eq!(squash_name("π"), "π");
        assert_eq!(squash_name("M ☉"), "M☉");
    }

    #[test]
    fn squash_is_idempotent() {
        let once = squash_name("Wien's displacement (freq.)");
        assert_eq!(squash_name(&once), once);
    }

    #[test]
    fn rewrap_packs_greedily() {
        let lines = rewrap("aa bb cc dd", 7);
        assert_eq!(lines, vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn rewrap_collapses_whitespace_runs() {
        let lines = rewrap("one\t two\n  three", 80);
        assert_eq!(lines, vec!["one two three"]);
    }

    #[test]
    fn rewrap_empty_input() {
        assert!(rewrap("", 72).is_empty());
        assert!(rewrap("   \n\t", 72).is_empty());
    }

    #[test]
    fn rewrap_overlong_word_gets_own_line() {
        let lines = rewrap("short verylongwordindeed short", 10);
        assert_eq!(lines, vec!["short", "verylongwordindeed", "short"]);
    }
}
