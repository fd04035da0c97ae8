//! Render a [`ReleaseGroupQuery`] in the MusicBrainz search syntax (Lucene).
//!
//! See: https://musicbrainz.org/doc/MusicBrainz_API/Search#Release_Group

use crate::lookup::domain::ReleaseGroupQuery;

/// Lucene query string for a release-group search.
///
/// `artist:"Queen" AND releasegroup:"A Night at the Opera" AND primarytype:"album"`
pub fn to_lucene(query: &ReleaseGroupQuery) -> String {
    let mut clauses = Vec::with_capacity(3);
    if let Some(ref artist) = query.artist {
        clauses.push(phrase("artist", artist));
    }
    if let Some(ref album) = query.album {
        clauses.push(phrase("releasegroup", album));
    }
    clauses.push(phrase("primarytype", "album"));
    clauses.join(" AND ")
}

/// An exact-phrase clause. Inside quotes only `"` and `\` need escaping.
fn phrase(field: &str, value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("{}:\"{}\"", field, escaped)
}
