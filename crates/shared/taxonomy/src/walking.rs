//! Insects that walk, and ants.

use crate::attribute::AttributeValue;
use crate::error::TaxonomyError;
use crate::insect::{Feeder, Insect, InsectCore, hidden};
use crate::specimen::SpecimenKind;

pub const ANT_LEGS: u8 = 6;

/// An insect that cannot fly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFlyingInsect {
    core: InsectCore,
}

impl NonFlyingInsect {
    pub fn new(name: impl Into<String>, leg_count: u8) -> Self {
        Self { core: InsectCore::new(name, leg_count) }
    }
}

impl Insect for NonFlyingInsect {
    fn core(&self) -> &InsectCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut InsectCore {
        &mut self.core
    }

    fn kind(&self) -> SpecimenKind {
        SpecimenKind::NonFlyingInsect
    }

    fn movement(&self) -> String {
        format!("{} está caminando con sus {} patas.", self.core.name(), self.core.leg_count())
    }
}

/// An ant of a given caste (`reina`, `obrera`, ...).
///
/// The caste is set once and is only readable through [`Ant::ant_type`]:
///
/// ```compile_fail
/// use insecta_taxonomy::Ant;
///
/// let queen = Ant::new("Hormiga Reina", "reina");
/// let caste: String = queen.ant_type;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ant {
    ground: NonFlyingInsect,
    ant_type: String,
}

impl Ant {
    pub fn new(name: impl Into<String>, ant_type: impl Into<String>) -> Self {
        Self { ground: NonFlyingInsect::new(name, ANT_LEGS), ant_type: ant_type.into() }
    }

    #[must_use]
    pub fn ant_type(&self) -> &str {
        &self.ant_type
    }

    #[must_use]
    pub fn work(&self) -> String {
        format!("{} está trabajando duramente como {}.", self.name(), self.ant_type)
    }
}

impl Insect for Ant {
    fn core(&self) -> &InsectCore {
        self.ground.core()
    }

    fn core_mut(&mut self) -> &mut InsectCore {
        self.ground.core_mut()
    }

    fn kind(&self) -> SpecimenKind {
        SpecimenKind::Ant
    }

    fn movement(&self) -> String {
        self.ground.movement()
    }

    fn attribute(&self, attribute: &str) -> Result<AttributeValue, TaxonomyError> {
        match attribute {
            "ant_type" => Err(hidden("ant_type", self.kind())),
            other => self.core().attribute(other, self.kind()),
        }
    }
}

impl Feeder for Ant {
    fn feed(&self) -> String {
        format!("{} (hormiga {}) recolecta comida para la colonia.", self.name(), self.ant_type)
    }
}
