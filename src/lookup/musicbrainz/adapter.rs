//! Adapter layer: Convert MusicBrainz DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! Missing fields stay `None` here; placeholders are applied when a
//! candidate is turned into a collection record.

use super::dto;
use crate::lookup::domain::CandidateRelease;

/// Convert a search response into candidates, keeping the API's ranking.
pub fn to_candidates(response: dto::ReleaseGroupSearchResponse) -> Vec<CandidateRelease> {
    response
        .release_groups
        .into_iter()
        .map(to_candidate)
        .collect()
}

/// Convert a single release group
pub fn to_candidate(group: dto::ReleaseGroup) -> CandidateRelease {
    let artist_name = first_artist_name(&group.artist_credit);

    CandidateRelease {
        id: group.id,
        title: non_empty(group.title),
        artist_name,
        first_release_date: non_empty(group.first_release_date),
    }
}

/// Name of the first credited artist, preferring the credited name
fn first_artist_name(credits: &[dto::ArtistCredit]) -> Option<String> {
    let credit = credits.first()?;
    non_empty(credit.name.clone()).or_else(|| {
        credit
            .artist
            .as_ref()
            .and_then(|a| non_empty(Some(a.name.clone())))
    })
}

/// MusicBrainz sometimes sends `""` instead of omitting a field
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(json: &str) -> dto::ReleaseGroup {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_full_release_group() {
        let candidate = to_candidate(group(
            r#"{
                "id": "rg-1",
                "title": "A Night at the Opera",
                "first-release-date": "1975-11-21",
                "artist-credit": [{"name": "Queen", "artist": {"id": "a", "name": "Queen"}}]
            }"#,
        ));

        assert_eq!(candidate.id, "rg-1");
        assert_eq!(candidate.title.as_deref(), Some("A Night at the Opera"));
        assert_eq!(candidate.artist_name.as_deref(), Some("Queen"));
        assert_eq!(candidate.first_release_date.as_deref(), Some("1975-11-21"));
    }

    #[test]
    fn test_only_first_artist_is_used() {
        let candidate = to_candidate(group(
            r#"{
                "id": "rg-2",
                "artist-credit": [
                    {"name": "Queen", "joinphrase": " & ", "artist": {"id": "q", "name": "Queen"}},
                    {"name": "David Bowie", "artist": {"id": "b", "name": "David Bowie"}}
                ]
            }"#,
        ));
        assert_eq!(candidate.artist_name.as_deref(), Some("Queen"));
    }

    #[test]
    fn test_falls_back_to_official_artist_name() {
        let candidate = to_candidate(group(
            r#"{"id": "rg-3", "artist-credit": [{"artist": {"id": "p", "name": "Prince"}}]}"#,
        ));
        assert_eq!(candidate.artist_name.as_deref(), Some("Prince"));
    }

    #[test]
    fn test_missing_fields_stay_none() {
        let candidate = to_candidate(group(r#"{"id": "rg-4", "first-release-date": ""}"#));
        assert_eq!(candidate.title, None);
        assert_eq!(candidate.artist_name, None);
        assert_eq!(candidate.first_release_date, None);
    }

    #[test]
    fn test_ranking_is_preserved() {
        let response: dto::ReleaseGroupSearchResponse = serde_json::from_str(
            r#"{"release-groups": [{"id": "first"}, {"id": "second"}, {"id": "third"}]}"#,
        )
        .unwrap();

        let ids: Vec<String> = to_candidates(response).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}
