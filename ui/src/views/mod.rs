//! The dashboard pages. Each reads [`Datasets`](crate::data::Datasets) from
//! context and re-runs its chart builders when a control signal changes.

mod archive;
mod health;
mod misc;
mod not_found;
mod work;

pub use archive::Archive;
pub use health::Health;
pub use misc::Misc;
pub use not_found::NotFound;
pub use work::Work;
