//! The closed set of insect kinds and the dispatch helper that exercises them.

use crate::error::{TaxonomyError, TaxonomyErrorExt};
use crate::flying::{Butterfly, FlyingInsect};
use crate::insect::{Feeder, Insect};
use crate::walking::{Ant, NonFlyingInsect};
use std::io::Write;
use strum_macros::{Display, EnumIter};
use tracing::{debug, instrument, warn};

pub const SEPARATOR: &str = "------";

/// Tag of each insect kind in the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SpecimenKind {
    Butterfly,
    Ant,
    FlyingInsect,
    NonFlyingInsect,
}

impl SpecimenKind {
    /// Leaf kinds have no further specializations and implement every behavior.
    #[must_use]
    pub const fn is_leaf(self) -> bool {
        matches!(self, Self::Butterfly | Self::Ant)
    }

    #[must_use]
    pub const fn flies(self) -> bool {
        matches!(self, Self::Butterfly | Self::FlyingInsect)
    }
}

/// Any insect, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specimen {
    Butterfly(Butterfly),
    Ant(Ant),
    FlyingInsect(FlyingInsect),
    NonFlyingInsect(NonFlyingInsect),
}

impl Specimen {
    #[must_use]
    pub const fn kind(&self) -> SpecimenKind {
        match self {
            Self::Butterfly(_) => SpecimenKind::Butterfly,
            Self::Ant(_) => SpecimenKind::Ant,
            Self::FlyingInsect(_) => SpecimenKind::FlyingInsect,
            Self::NonFlyingInsect(_) => SpecimenKind::NonFlyingInsect,
        }
    }

    /// Borrows the specimen through the shared capability set.
    #[must_use]
    pub fn insect(&self) -> &dyn Insect {
        match self {
            Self::Butterfly(butterfly) => butterfly,
            Self::Ant(ant) => ant,
            Self::FlyingInsect(flier) => flier,
            Self::NonFlyingInsect(walker) => walker,
        }
    }

    #[must_use]
    pub const fn as_ant(&self) -> Option<&Ant> {
        match self {
            Self::Ant(ant) => Some(ant),
            _ => None,
        }
    }

    /// Feeds a leaf specimen.
    ///
    /// # Errors
    /// [`TaxonomyError::AbstractBehavior`] for the intermediate families, which have
    /// no way of feeding of their own.
    pub fn feed(&self) -> Result<String, TaxonomyError> {
        match self {
            Self::Butterfly(butterfly) => Ok(butterfly.feed()),
            Self::Ant(ant) => Ok(ant.feed()),
            Self::FlyingInsect(_) | Self::NonFlyingInsect(_) => Err(TaxonomyError::AbstractBehavior {
                behavior: "feed".into(),
                kind: self.kind(),
                context: None,
            }),
        }
    }

    /// Only ants work.
    #[must_use]
    pub fn work(&self) -> Option<String> {
        self.as_ant().map(Ant::work)
    }

    /// Every flying kind can land.
    #[must_use]
    pub fn land(&self) -> Option<String> {
        match self {
            Self::Butterfly(butterfly) => Some(butterfly.land()),
            Self::FlyingInsect(flier) => Some(flier.land()),
            Self::Ant(_) | Self::NonFlyingInsect(_) => None,
        }
    }
}

impl From<Butterfly> for Specimen {
    fn from(value: Butterfly) -> Self {
        Self::Butterfly(value)
    }
}

impl From<Ant> for Specimen {
    fn from(value: Ant) -> Self {
        Self::Ant(value)
    }
}

impl From<FlyingInsect> for Specimen {
    fn from(value: FlyingInsect) -> Self {
        Self::FlyingInsect(value)
    }
}

impl From<NonFlyingInsect> for Specimen {
    fn from(value: NonFlyingInsect) -> Self {
        Self::NonFlyingInsect(value)
    }
}

/// Writes what a specimen does, one line per behavior, followed by [`SEPARATOR`].
///
/// Lines are, in order: description, movement, feeding, then `work` for ants and
/// `land` for flying kinds. A kind that cannot feed gets the error message in place
/// of its feeding line; the rejection is also logged at warn level.
///
/// # Errors
/// Only writer failures are returned, as [`TaxonomyError::Io`].
#[instrument(level = "debug", skip_all, fields(kind = %specimen.kind(), name = specimen.insect().name()))]
pub fn insect_action<W: Write>(specimen: &Specimen, out: &mut W) -> Result<(), TaxonomyError> {
    debug!("Dispatching specimen");
    let insect = specimen.insect();
    writeln!(out, "{}", insect.describe())?;
    writeln!(out, "{}", insect.movement())?;

    match specimen.feed() {
        Ok(line) => writeln!(out, "{line}")?,
        Err(err @ TaxonomyError::AbstractBehavior { .. }) => {
            warn!(%err, "Skipping abstract behavior");
            writeln!(out, "{err}")?;
        }
        Err(err) => return Err(err),
    }

    if let Some(line) = specimen.work() {
        writeln!(out, "{line}")?;
    }
    if let Some(line) = specimen.land() {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "{SEPARATOR}").context("Writing separator")
}
