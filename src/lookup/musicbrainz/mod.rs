//! MusicBrainz API integration
//!
//! Finds album release groups for an artist/album search. The release group
//! ID is what the Cover Art Archive and the collection store key on.
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;
mod query;

pub use client::{DEFAULT_BASE_URL, MusicBrainzClient};
