//! Unicode to LaTeX text escaping
//!
//! Converts arbitrary text into LaTeX-safe text: reserved characters are
//! escaped and typographic glyphs (dashes, quotes, Greek letters, currency,
//! ligatures) are replaced by their LaTeX commands.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;

/// Special character to LaTeX replacement table
pub static UNICODE_TO_LATEX: phf::Map<&'static str, &'static str> = phf_map! {
    // Spaces
    "\u{0020}" => " ",
    "\u{00A0}" => " ",
    "\u{202F}" => " ",

    // Reserved characters
    "#" => "\\#",
    "&amp;" => "\\&",
    "&" => "\\&",
    "$" => "\\$",

    // Currency and marks
    "\u{00A2}" => "{\\textcent}",
    "\u{00A3}" => "{\\textsterling}",
    "\u{00A9}" => "{\\textcopyright}",
    "\u{00AE}" => "{\\textregistered}",
    "\u{00B0}" => "{\\textdegree}",

    // Dashes, quotes, ellipsis
    "\u{2011}" => "{\\textendash}",
    "\u{2013}" => "{\\textendash}",
    "\u{2014}" => "{\\textemdash}",
    "\u{2015}" => "{\\textemdash}",
    "\u{2018}" => "`",
    "\u{2019}" => "'",
    "\u{201C}" => "{\\textquotedblleft}",
    "\u{201D}" => "{\\textquotedblright}",
    "\u{2026}" => "{\\ldots}",

    // Greek capitals
    "\u{0391}" => "$\\Alpha$",
    "\u{0392}" => "$\\Beta$",
    "\u{0393}" => "$\\Gamma$",
    "\u{0394}" => "$\\Delta$",
    "\u{0395}" => "$\\Epsilon$",
    "\u{0396}" => "$\\Zeta$",
    "\u{0397}" => "$\\Eta$",
    "\u{0398}" => "$\\Theta$",
    "\u{0399}" => "$\\Iota$",
    "\u{039A}" => "$\\Kappa$",
    "\u{039B}" => "$\\Lambda$",
    "\u{039E}" => "$\\Xi$",
    "\u{039F}" => "${\\rm O}$",
    "\u{03A0}" => "$\\Pi$",
    "\u{03A1}" => "$\\Rho$",
    "\u{03A3}" => "$\\Sigma$",
    "\u{03A4}" => "$\\Tau$",
    "\u{03A5}" => "$\\Upsilon$",
    "\u{03A6}" => "$\\Phi$",
    "\u{03A7}" => "$\\Chi$",
    "\u{03A8}" => "$\\Psi$",
    "\u{03A9}" => "$\\Omega$",

    // Greek lowercase (including tonos forms)
    "\u{03AD}" => "$\\acute{\\epsilon}$",
    "\u{03AE}" => "$\\acute{\\eta}$",
    "\u{03AF}" => "$\\acute{\\iota}$",
    "\u{03B0}" => "$\\acute{\\ddot{\\upsilon}}$",
    "\u{03B1}" => "$\\alpha$",
    "\u{03B2}" => "$\\beta$",
    "\u{03B3}" => "$\\gamma$",
    "\u{03B4}" => "$\\delta$",
    "\u{03B5}" => "$\\epsilon$",
    "\u{03B6}" => "$\\zeta$",
    "\u{03B7}" => "$\\eta$",
    "\u{03B8}" => "$\\texttheta$",
    "\u{03B9}" => "$\\iota$",
    "\u{03BA}" => "$\\kappa$",
    "\u{03BB}" => "$\\lambda$",
    "\u{03BC}" => "$\\mu$",
    "\u{03BD}" => "$\\nu$",
    "\u{03BE}" => "$\\xi$",
    "\u{03BF}" => "${\\rm o}$",
    "\u{03C0}" => "$\\pi$",
    "\u{03C1}" => "$\\rho$",
    "\u{03C2}" => "$\\varsigma$",
    "\u{03C3}" => "$\\sigma$",
    "\u{03C4}" => "$\\tau$",
    "\u{03C5}" => "$\\upsilon$",
    "\u{03C6}" => "$\\varphi$",
    "\u{03C7}" => "$\\chi$",
    "\u{03C8}" => "$\\psi$",
    "\u{03C9}" => "$\\omega$",

    // Ligatures
    "\u{FB01}" => "fi",
    "\u{FB02}" => "fl",
};

lazy_static! {
    /// Alternation over every table key, longest first so `&amp;` wins over `&`.
    static ref ESCAPE_RE: Regex = {
        let mut keys: Vec<&str> = UNICODE_TO_LATEX.keys().copied().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("escape table keys form a valid pattern")
    };
}

/// Convert text into LaTeX-safe text.
///
/// Every occurrence of a table key is replaced in a single left-to-right
/// pass, so replacement text is never escaped a second time.
///
/// # Example
///
/// ```rust
/// use texweave::data::escape_latex;
///
/// assert_eq!(escape_latex("R&D costs $5"), "R\\&D costs \\$5");
/// assert_eq!(escape_latex("\u{03B1} \u{2014} \u{03C9}"), "$\\alpha$ {\\textemdash} $\\omega$");
/// ```
pub fn escape_latex(input: &str) -> String {
    if !needs_escape(input) {
        return input.to_string();
    }
    ESCAPE_RE
        .replace_all(input, |caps: &regex::Captures| {
            UNICODE_TO_LATEX
                .get(&caps[0])
                .copied()
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}

/// Check whether text contains any character the escape table rewrites
/// (plain spaces excluded).
pub fn needs_escape(input: &str) -> bool {
    ESCAPE_RE.find_iter(input).any(|m| m.as_str() != " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters() {
        assert_eq!(escape_latex("#1"), "\\#1");
        assert_eq!(escape_latex("a & b"), "a \\& b");
        assert_eq!(escape_latex("$x$"), "\\$x\\$");
    }

    #[test]
    fn test_html_ampersand_not_double_escaped() {
        assert_eq!(escape_latex("Tom &amp; Jerry"), "Tom \\& Jerry");
        assert_eq!(escape_latex("&amp;&"), "\\&\\&");
    }

    #[test]
    fn test_greek_letters_keep_dollar_delimiters() {
        // The `$` produced by a replacement must not be escaped again
        assert_eq!(escape_latex("\u{03C0}"), "$\\pi$");
        assert_eq!(escape_latex("\u{03A9}"), "$\\Omega$");
        assert_eq!(escape_latex("\u{039F}\u{03BF}"), "${\\rm O}$${\\rm o}$");
    }

    #[test]
    fn test_typography() {
        assert_eq!(escape_latex("wait\u{2026}"), "wait{\\ldots}");
        assert_eq!(
            escape_latex("\u{201C}quoted\u{201D}"),
            "{\\textquotedblleft}quoted{\\textquotedblright}"
        );
        assert_eq!(escape_latex("\u{2018}x\u{2019}"), "`x'");
        assert_eq!(escape_latex("10\u{00B0}"), "10{\\textdegree}");
        assert_eq!(escape_latex("\u{FB01}ne \u{FB02}ow"), "fine flow");
        assert_eq!(escape_latex("a\u{00A0}b\u{202F}c"), "a b c");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let plain = "Hello, World! This is plain text (with parens) 1.2.3";
        assert_eq!(escape_latex(plain), plain);
        assert_eq!(escape_latex(&escape_latex(plain)), plain);
        assert!(!needs_escape(plain));
    }

    #[test]
    fn test_every_non_ascii_key_is_replaced() {
        let all: String = UNICODE_TO_LATEX.keys().copied().collect();
        let escaped = escape_latex(&all);
        for key in UNICODE_TO_LATEX.keys() {
            if !key.is_ascii() {
                assert!(
                    !escaped.contains(key),
                    "'{}' survived escaping: {}",
                    key,
                    escaped
                );
            }
        }
    }

    #[test]
    fn test_space_only_text_skips_replacement() {
        for text in ["", " ", "two  spaces", "tab\tand newline\n"] {
            assert!(!needs_escape(text));
            assert_eq!(escape_latex(text), text);
        }
        assert!(needs_escape("a\u{00A0}b"));
        assert_eq!(escape_latex("a\u{00A0}b"), "a b");
    }

    #[test]
    fn test_needs_escape() {
        assert!(needs_escape("50$"));
        assert!(needs_escape("\u{03B2}"));
        assert!(!needs_escape("a b c"));
    }
}
