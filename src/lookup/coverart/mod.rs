//! Cover Art Archive integration
//!
//! Fetches album artwork from coverartarchive.org using MusicBrainz release group IDs.
//! No API key required.

pub mod dto;
mod client;

pub use client::{CoverArtClient, CoverSize, DEFAULT_BASE_URL};
