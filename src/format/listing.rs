//! Columnar name listings filtered by a glob pattern.

/// Glob match with `*` (any run), `?` (any single character) and bracket classes
/// (`[abc]`, `[a-z]`, `[!abc]`). Case-sensitive. An unterminated `[` is literal.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last `*` seen and the text index it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if pattern.get(p) == Some(&'*') {
            backtrack = Some((p, t));
            p += 1;
            continue;
        }
        let next = match pattern.get(p) {
            Some('?') => Some(p + 1),
            Some('[') => match match_class(&pattern, p, text[t]) {
                Some((true, next)) => Some(next),
                Some((false, _)) => None,
                None => (text[t] == '[').then_some(p + 1),
            },
            Some(&c) if c == text[t] => Some(p + 1),
            _ => None,
        };
        match (next, backtrack) {
            (Some(next), _) => {
                p = next;
                t += 1;
            }
            (None, Some((star, absorbed))) => {
                p = star + 1;
                t = absorbed + 1;
                backtrack = Some((star, absorbed + 1));
            }
            (None, None) => return false,
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}

/// Match `c` against the bracket class opening at `pattern[start]`.
///
/// Returns the outcome and the index just past the closing `]`, or `None` when the
/// class is never closed. A `]` directly after `[` or `[!` is a member, as is a `-`
/// at either end of the class.
fn match_class(pattern: &[char], start: usize, c: char) -> Option<(bool, usize)> {
    let mut i = start + 1;
    let negated = pattern.get(i) == Some(&'!');
    if negated {
        i += 1;
    }

    let mut matched = false;
    let mut first = true;
    loop {
        let lo = *pattern.get(i)?;
        if lo == ']' && !first {
            break;
        }
        first = false;
        match (pattern.get(i + 1), pattern.get(i + 2)) {
            (Some('-'), Some(&hi)) if hi != ']' => {
                matched |= lo <= c && c <= hi;
                i += 3;
            }
            _ => {
                matched |= lo == c;
                i += 1;
            }
        }
    }
    Some((matched != negated, i + 1))
}

/// Names matching `pattern`, sorted ascending.
pub fn filter_sorted<'a, I>(pattern: &str, names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut matched: Vec<String> = names
        .into_iter()
        .filter(|name| glob_match(pattern, name))
        .cloned()
        .collect();
    matched.sort();
    matched
}

/// Width of one column: longest name plus two spaces.
pub fn column_width(names: &[String]) -> usize {
    names.iter().map(|n| n.chars().count()).max().unwrap_or(0) + 2
}

/// Columns per row for a terminal `width`.
///
/// Integer division, widened, offset by one half and truncated again. The offset
/// never changes the result of an exact integer quotient; the arithmetic is kept as
/// is. A name wider than the terminal still gets a row of its own.
pub fn columns_per_row(width: usize, column_width: usize) -> usize {
    let count = ((width / column_width) as f64 + 0.5) as usize;
    count.max(1)
}

/// Render matching names as padded rows. Empty when nothing matches.
pub fn render_listing<'a, I>(pattern: &str, names: I, width: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let items = filter_sorted(pattern, names);
    if items.is_empty() {
        return Vec::new();
    }

    let column = column_width(&items);
    let per_row = columns_per_row(width, column);
    items
        .chunks(per_row)
        .map(|row| {
            row.iter()
                .map(|name| format!("{:<column$}", name, column = column))
                .collect::<String>()
        })
        .collect()
}
