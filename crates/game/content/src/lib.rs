//! Data-driven content for Uppercut City.
//!
//! This crate houses the built-in roster and provides loaders for RON/TOML data files:
//! - Characters (data-driven via RON)
//! - Movesets (data-driven via RON)
//! - Gear (data-driven via RON)
//! - District ladder (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Files are parsed into raw records first, then validated into
//! `uppercut-core` types. The result is a [`Catalog`](uppercut_core::Catalog)
//! that is immutable for the rest of the run.

#[cfg(feature = "loaders")]
pub mod builtin;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CharacterLoader, CharacterRecord, ConfigLoader, ContentFactory, DistrictLoader,
    DistrictRecord, GearLoader, GearRecord, LoadResult, MoveLoader, MoveRecord,
};
