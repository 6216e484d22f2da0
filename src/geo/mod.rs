//! Geospatial classification
//!
//! Maps a coordinate onto the regional taxonomy shared by every downstream
//! stage. Rules are ordered data tables so precedence can be audited and
//! tested on its own.
//!
//! - `bbox`: inclusive boxes and the first-match evaluator
//! - `classifier`: region and climate rule tables
//! - `predicates`: static location facts (recharge structures, flood zones, urban tiers)

pub mod bbox;
pub mod classifier;
pub mod predicates;

pub use bbox::BoundingBox;
pub use classifier::{classify, classify_climate, classify_region};
pub use predicates::{
    has_high_recharge_structures, haversine_km, in_core_training_area, in_india, is_alluvial,
    is_arid, is_flood_prone, is_low_variance, is_rajasthan, nearest_reference_point, urban_class,
    REFERENCE_POINTS,
};
