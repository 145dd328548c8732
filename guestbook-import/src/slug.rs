//! URL slugs for guest pages.
//!
//! A slug is derived from the guest's name: accents are stripped, a few
//! letters are transliterated, everything else outside `[a-z0-9]` becomes a
//! hyphen. Names in Chinese script (or names too short to slug) fall back to
//! a short deterministic hash so the slug stays stable across imports.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

/// Longest slug ever produced, suffixes included.
pub const MAX_SLUG_LEN: usize = 50;

const HASH_LEN: usize = 6;
const FALLBACK_PREFIX: &str = "guest";

const TRANSLITERATIONS: &[(char, &str)] = &[
    ('đ', "d"),
    ('æ', "ae"),
    ('œ', "oe"),
    ('ß', "ss"),
    ('þ', "th"),
];

/// Six-character base-36 hash of a string.
///
/// A 32-bit rolling hash (`h * 31 + unit`, wrapping) over UTF-16 code units,
/// so the value matches slugs issued by earlier versions of the app.
///
/// ```
/// use guestbook_import::short_hash;
///
/// assert_eq!(short_hash(""), "0");
/// assert_eq!(short_hash("a"), "2p");
/// assert_eq!(short_hash("王"), short_hash("王"));
/// ```
pub fn short_hash(s: &str) -> String {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }

    let mut digits = to_base36(i64::from(hash).unsigned_abs());
    digits.truncate(HASH_LEN);
    digits
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Collapse every run of characters outside `[a-z0-9]` into one hyphen and
/// trim hyphens from both ends.
fn hyphenate(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_separator = false;

    for c in s.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            result.push(c);
            last_was_separator = false;
        } else if !last_was_separator && !result.is_empty() {
            result.push('-');
            last_was_separator = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }
    result
}

/// `<head>-<hash>` with `head` shortened so the whole fits.
fn with_hash(head: &str, hash: &str) -> String {
    let room = MAX_SLUG_LEN - hash.len() - 1;
    let head = truncate_slug(head, room);
    format!("{head}-{hash}")
}

/// Cut an ASCII slug to at most `max` bytes without leaving a trailing hyphen.
fn truncate_slug(slug: &str, max: usize) -> &str {
    let cut = &slug[..slug.len().min(max)];
    cut.trim_end_matches('-')
}

/// The slug for one name, before collision handling.
///
/// ```
/// use guestbook_import::slug_for_name;
///
/// assert_eq!(slug_for_name("Budi & Family"), "budi-family");
/// assert_eq!(slug_for_name("Nguyễn Văn Đức"), "nguyen-van-duc");
/// assert!(slug_for_name("王小明").starts_with("guest-"));
/// ```
pub fn slug_for_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped: String = lowered
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    if stripped.chars().any(is_cjk) {
        return cjk_slug(name);
    }

    let mut transliterated = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match TRANSLITERATIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => transliterated.push_str(to),
            None => transliterated.push(c),
        }
    }

    let slug = hyphenate(&transliterated);
    if slug.len() < 2 {
        return format!("{FALLBACK_PREFIX}-{}", short_hash(name));
    }
    truncate_slug(&slug, MAX_SLUG_LEN).to_string()
}

/// Hash-based slug for names containing Chinese characters, keeping any
/// Latin letters or digits as a readable prefix.
fn cjk_slug(name: &str) -> String {
    let ascii: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '&' | '-'))
        .collect();
    let ascii = hyphenate(&ascii.to_ascii_lowercase());
    let hash = short_hash(name);

    if ascii.len() > 1 {
        with_hash(&ascii, &hash)
    } else {
        format!("{FALLBACK_PREFIX}-{hash}")
    }
}

/// Hands out slugs that are unique within one import.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    used: HashSet<String>,
}

impl SlugAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `name`, suffixed `-1`, `-2`, … if already handed out.
    pub fn allocate(&mut self, name: &str) -> String {
        let base = slug_for_name(name);
        let mut slug = base.clone();
        let mut counter = 1u32;

        while self.used.contains(&slug) {
            let suffix = format!("-{counter}");
            let head = truncate_slug(&base, MAX_SLUG_LEN - suffix.len());
            slug = format!("{head}{suffix}");
            counter += 1;
        }

        self.used.insert(slug.clone());
        slug
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;
