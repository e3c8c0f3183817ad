//! Graham scan convex hull, exposed as a stepwise state machine.
//!
//! - `geom2`: integer points, exact orientation predicates, polar order,
//!   hull checks, and a reproducible random point sampler.
//! - `scan`: anchor selection and the `HullEngine`, which emits one immutable
//!   `Snapshot` per `step()` for renderers, loggers and tests to consume.
//!
//! The engine never renders, sleeps or spawns; pacing belongs to the driver
//! (see `scan::drive`).

pub mod error;
pub mod geom2;
pub mod scan;

pub use error::HullError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in drivers.
pub mod prelude {
    pub use crate::error::HullError;
    pub use crate::geom2::rand::{sample_points, Bounds2, ReplayToken, SampleCfg};
    pub use crate::geom2::{
        cross, encloses, is_convex_ccw, polar_angle, twice_area, Collinear, Point, ScanCfg,
        Turn,
    };
    pub use crate::scan::{
        convex_hull, drive, select_anchor, HullEngine, RunState, Snapshot, Steps,
    };
}
