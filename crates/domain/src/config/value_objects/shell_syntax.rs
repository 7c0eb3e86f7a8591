//! Rewrites a shell `[[ == ]]` pattern into an anchored `regex` pattern.
//!
//! The generated regex runs in Unicode mode, so `?` and every class member
//! stand for one character (not one byte) and `*` may span `/`.

/// POSIX character class names accepted inside a bracket expression.
const POSIX_CLASSES: &[&str] = &[
    "alnum", "alpha", "ascii", "blank", "cntrl", "digit", "graph", "lower", "print", "punct",
    "space", "upper", "word", "xdigit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum ClassItem {
    Char(char),
    Range(char, char),
    Named(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BracketClass {
    negated: bool,
    items: Vec<ClassItem>,
    /// Index of the closing `]`.
    end: usize,
}

/// Translate `pattern` into a regex matching whole strings the way a shell
/// `[[ path == pattern ]]` test does.
///
/// - runs of `*` collapse into a single `.*`
/// - `?` is any one character
/// - `[...]` keeps `!`/`^` negation, ranges, POSIX names and `\` escapes
/// - an unterminated `[` is a literal `[`
/// - a trailing lone `\` is a literal backslash
/// - everything else, braces included, is literal
pub(crate) fn to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2 + 8);
    out.push_str("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(&next) => {
                    push_literal(&mut out, next);
                    i += 1;
                }
                None => push_literal(&mut out, '\\'),
            },
            '*' => {
                out.push_str(".*");
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '?' => out.push('.'),
            '[' => match parse_class(&chars, i) {
                Some(class) => {
                    push_class(&mut out, &class);
                    i = class.end;
                }
                None => push_literal(&mut out, '['),
            },
            c => push_literal(&mut out, c),
        }
        i += 1;
    }

    out.push('$');
    out
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

fn push_class(out: &mut String, class: &BracketClass) {
    out.push('[');
    if class.negated {
        out.push('^');
    }
    for item in &class.items {
        match *item {
            ClassItem::Char(c) => push_literal(out, c),
            ClassItem::Range(lo, hi) => {
                push_literal(out, lo);
                out.push('-');
                push_literal(out, hi);
            }
            ClassItem::Named(name) => {
                out.push_str("[:");
                out.push_str(name);
                out.push_str(":]");
            }
        }
    }
    out.push(']');
}

/// Parse the bracket expression opened at `start`.
///
/// Returns `None` when no `]` closes it. A `]` directly after the opening
/// bracket (or after its `!`/`^` negation) is a member, not the end.
fn parse_class(chars: &[char], start: usize) -> Option<BracketClass> {
    let mut j = start + 1;
    let negated = matches!(chars.get(j), Some('!' | '^'));
    if negated {
        j += 1;
    }

    let mut items = Vec::new();
    let mut first = true;

    loop {
        let c = *chars.get(j)?;
        if c == ']' && !first {
            return Some(BracketClass { negated, items, end: j });
        }
        first = false;

        if c == '[' && chars.get(j + 1) == Some(&':') {
            if let Some((name, next)) = posix_class(chars, j) {
                items.push(ClassItem::Named(name));
                j = next;
                continue;
            }
        }

        let (lo, after_lo) = class_char(chars, j)?;
        let is_range = chars.get(after_lo) == Some(&'-')
            && chars.get(after_lo + 1).is_some_and(|&c| c != ']');
        if is_range {
            let (hi, after_hi) = class_char(chars, after_lo + 1)?;
            items.push(ClassItem::Range(lo, hi));
            j = after_hi;
        } else {
            items.push(ClassItem::Char(lo));
            j = after_lo;
        }
    }
}

/// One class member at `j`, honouring `\` escapes. Returns the char and the
/// index just past it.
fn class_char(chars: &[char], j: usize) -> Option<(char, usize)> {
    match *chars.get(j)? {
        '\\' => chars.get(j + 1).map(|&c| (c, j + 2)),
        c => Some((c, j + 1)),
    }
}

/// `[:name:]` at `j` with a known name. Returns the name and the index just
/// past the closing `:]`.
fn posix_class(chars: &[char], j: usize) -> Option<(&'static str, usize)> {
    let body = &chars[j + 2..];
    let len = body.windows(2).position(|w| w == [':', ']'])?;
    let name: String = body[..len].iter().collect();
    let known = *POSIX_CLASSES.iter().find(|&&known| known == name)?;
    Some((known, j + 2 + len + 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcards() {
        assert_eq!(to_regex("*.py"), r"(?s)^.*\.py$");
        assert_eq!(to_regex("src/?.go"), r"(?s)^src/.\.go$");
        assert_eq!(to_regex(""), "(?s)^$");
    }

    #[test]
    fn star_runs_collapse() {
        assert_eq!(to_regex("a/**/b"), "(?s)^a/.*/b$");
        assert_eq!(to_regex("***"), "(?s)^.*$");
    }

    #[test]
    fn braces_are_literal() {
        assert_eq!(to_regex("{a,b}.rs"), r"(?s)^\{a,b\}\.rs$");
    }

    #[test]
    fn unterminated_class_is_literal() {
        assert_eq!(to_regex("file[1"), r"(?s)^file\[1$");
        assert_eq!(to_regex("["), r"(?s)^\[$");
        assert_eq!(to_regex("[]"), r"(?s)^\[\]$");
    }

    #[test]
    fn leading_bracket_is_a_class_member() {
        assert_eq!(to_regex("[]]x"), r"(?s)^[\]]x$");
        assert_eq!(to_regex("[!]]x"), r"(?s)^[^\]]x$");
    }

    #[test]
    fn classes_keep_ranges_and_negation() {
        assert_eq!(to_regex("[a-c]"), "(?s)^[a-c]$");
        assert_eq!(to_regex("[^0-9]"), "(?s)^[^0-9]$");
        assert_eq!(to_regex("[a-]"), r"(?s)^[a\-]$");
    }

    #[test]
    fn class_metacharacters_are_members() {
        assert_eq!(to_regex("[{*]"), r"(?s)^[\{\*]$");
        assert_eq!(to_regex("[&&~]"), r"(?s)^[\&\&\~]$");
    }

    #[test]
    fn escapes_inside_classes() {
        assert_eq!(to_regex(r"[\]]x"), r"(?s)^[\]]x$");
        assert_eq!(to_regex(r"[a\-z]"), r"(?s)^[a\-z]$");
    }

    #[test]
    fn posix_named_classes() {
        assert_eq!(to_regex("[[:digit:]].txt"), r"(?s)^[[:digit:]]\.txt$");
        assert_eq!(to_regex("[![:alpha:]_]"), "(?s)^[^[:alpha:]_]$");
    }

    #[test]
    fn unknown_posix_name_is_plain_members() {
        let class = parse_class(&"[[:nope:]]".chars().collect::<Vec<_>>(), 0).unwrap();
        assert_eq!(class.items[0], ClassItem::Char('['));
        assert_eq!(class.end, 8);
    }

    #[test]
    fn escapes_are_literal() {
        assert_eq!(to_regex(r"\*\?"), r"(?s)^\*\?$");
        assert_eq!(to_regex(r"a\"), r"(?s)^a\\$");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(to_regex("docs/日.md"), r"(?s)^docs/日\.md$");
        assert_eq!(to_regex("[é]"), "(?s)^[é]$");
    }
}
