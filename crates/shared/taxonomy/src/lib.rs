//! # Insect taxonomy
//!
//! A small closed hierarchy of insects:
//!
//! * [`Insect`] is the abstract capability set (`describe`, `movement`) over a shared
//!   [`InsectCore`].
//! * [`FlyingInsect`] and [`NonFlyingInsect`] are the intermediate families.
//! * [`Butterfly`] and [`Ant`] are the leaves; only they implement [`Feeder`].
//! * [`Specimen`] tags every kind so [`insect_action`] can pick the kind-specific
//!   behaviors (`work`, `land`) with a `match`.
//!
//! ```rust
//! use insecta_taxonomy::{Ant, Insect, TaxonomyError};
//!
//! let queen = Ant::new("Hormiga Reina", "reina");
//! assert_eq!(queen.ant_type(), "reina");
//! assert!(matches!(queen.attribute("ant_type"), Err(TaxonomyError::HiddenAttribute { .. })));
//! ```

mod attribute;
pub mod demo;
mod error;
mod flying;
mod insect;
mod specimen;
mod walking;

pub use crate::attribute::AttributeValue;
pub use crate::error::{TaxonomyError, TaxonomyErrorExt};
pub use crate::flying::{BUTTERFLY_LEGS, BUTTERFLY_WINGS, Butterfly, FlyingInsect};
pub use crate::insect::{Feeder, Insect, InsectCore};
pub use crate::specimen::{SEPARATOR, Specimen, SpecimenKind, insect_action};
pub use crate::walking::{ANT_LEGS, Ant, NonFlyingInsect};
