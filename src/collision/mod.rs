pub mod aabb;
pub mod detection;
pub mod ledger;
pub mod manifold;
pub mod spatial_grid;

// Re-export key types
pub use aabb::{collider_bounds, AABB};
pub use detection::check_collision;
pub use ledger::{ContactLedger, PairKey, PairRecord};
pub use manifold::{CollisionInfo, Contact};
pub use spatial_grid::SpatialGrid;
