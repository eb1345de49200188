//! Readable rendering of zone identifiers.
//!
//! Zone identifiers pack place names into path segments without spaces or
//! punctuation (`America/Port_of_Spain`, `Antarctica/DumontDUrville`). The
//! helpers here restore them for display.

use std::sync::LazyLock;

use regex::Regex;

/// Lower-case letter followed by an upper-case one, not preceded by `M`.
static MISSING_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"([^M][a-z])([A-Z])"));

/// `M` plus a lower-case letter other than `c`, followed by an upper-case one.
static MISSING_SPACE_AFTER_M: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(M[a-bd-z])([A-Z])"));

/// Two consecutive upper-case letters.
static MISSING_APOSTROPHE: LazyLock<Regex> = LazyLock::new(|| compile(r"([A-Z])([A-Z])"));

static HAS_LOWERCASE: LazyLock<Regex> = LazyLock::new(|| compile(r"[a-z]"));

#[allow(clippy::expect_used)] // patterns are literals
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex pattern")
}

/// Human-readable form of a zone identifier.
///
/// Segments after the first are shown most specific first, separated by
/// commas. Unless `skip_first_part` is set, the first segment (usually the
/// region) is kept as a `"Region - "` prefix.
///
/// ```
/// use country_zones_core::utils::identifier::friendly_identifier;
///
/// assert_eq!(
///     friendly_identifier("America/North_Dakota/New_Salem", false),
///     "America - New Salem, North Dakota"
/// );
/// assert_eq!(friendly_identifier("Antarctica/DumontDUrville", true), "Dumont D'Urville");
/// ```
#[must_use]
pub fn friendly_identifier(identifier: &str, skip_first_part: bool) -> String {
    let parts: Vec<&str> = identifier.split('/').filter(|p| !p.is_empty()).collect();

    match parts.as_slice() {
        [] => identifier.to_string(),
        [only] => (*only).to_string(),
        [first, rest @ ..] => {
            let readable: Vec<String> = rest.iter().rev().map(|part| readable_part(part)).collect();
            let joined = readable.join(", ");
            if skip_first_part {
                joined
            } else {
                format!("{first} - {joined}")
            }
        }
    }
}

fn readable_part(part: &str) -> String {
    let part = part.replace('_', " ");
    if !HAS_LOWERCASE.is_match(&part) {
        return part;
    }

    let part = MISSING_SPACE.replace_all(&part, "$1 $2");
    let part = MISSING_SPACE_AFTER_M.replace_all(&part, "$1 $2");
    MISSING_APOSTROPHE
        .replace_all(&part, "${1}'${2}")
        .into_owned()
}
