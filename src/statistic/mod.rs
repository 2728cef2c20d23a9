//! Statistic resolution.
//!
//! Turns the free-text statistic and sub-statistic names a user types into
//! validated, typed descriptors. The set of known names is supplied by a
//! `StatisticVocabulary`; resolution itself holds no mutable state and is
//! safe to call from any thread.
//!
//! # Kinds
//!
//! Every statistic has a `StatisticKind`:
//! - `Untyped` - a plain counter (`jump`, `walk_one_cm`)
//! - `Block`, `Entity`, `Item` - a counter keyed by a qualifier of that kind
//!   (`mine_block` + `stone`, `kill_entity` + `zombie`, `use_item` + `bow`)
//!
//! A qualifier is only accepted when its kind matches the statistic's kind.
//!
//! # Example
//!
//! ```rust,ignore
//! use playerstats::statistic::structs::statistic_resolver::StatisticResolver;
//!
//! let resolver = StatisticResolver::new(vocabulary);
//! let descriptor = resolver.resolve("Mine_Block")?;
//! let qualifier = resolver.resolve_qualifier(&descriptor, Some("stone"))?;
//! ```

/// Statistic and qualifier kinds.
pub mod enums;

/// Descriptor, qualifier, resolver and in-memory vocabulary structs.
pub mod structs;

/// Vocabulary capability.
pub mod traits;

/// Implementation blocks for statistic types.
pub mod impls;
