//! Flying insects and butterflies.

use crate::attribute::AttributeValue;
use crate::error::TaxonomyError;
use crate::insect::{Feeder, Insect, InsectCore, hidden};
use crate::specimen::SpecimenKind;

pub const BUTTERFLY_LEGS: u8 = 6;
pub const BUTTERFLY_WINGS: u8 = 4;

/// An insect that flies.
///
/// The wing count is fixed at construction and has no accessor:
///
/// ```compile_fail
/// use insecta_taxonomy::FlyingInsect;
///
/// let grasshopper = FlyingInsect::new("Saltamontes", 6, 4);
/// let wings = grasshopper.wing_count;
/// ```
///
/// A bare `FlyingInsect` can be built, but it does not implement [`Feeder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlyingInsect {
    core: InsectCore,
    wing_count: u8,
}

impl FlyingInsect {
    pub fn new(name: impl Into<String>, leg_count: u8, wing_count: u8) -> Self {
        Self { core: InsectCore::new(name, leg_count), wing_count }
    }

    #[must_use]
    pub fn land(&self) -> String {
        format!("{} ha aterrizado suavemente.", self.core.name())
    }

    pub(crate) fn lookup(
        &self,
        attribute: &str,
        kind: SpecimenKind,
    ) -> Result<AttributeValue, TaxonomyError> {
        match attribute {
            "wing_count" => Err(hidden("wing_count", kind)),
            other => self.core.attribute(other, kind),
        }
    }
}

impl Insect for FlyingInsect {
    fn core(&self) -> &InsectCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut InsectCore {
        &mut self.core
    }

    fn kind(&self) -> SpecimenKind {
        SpecimenKind::FlyingInsect
    }

    fn movement(&self) -> String {
        format!("{} está volando con sus {} alas.", self.core.name(), self.wing_count)
    }

    fn attribute(&self, attribute: &str) -> Result<AttributeValue, TaxonomyError> {
        self.lookup(attribute, self.kind())
    }
}

/// A butterfly: six legs, four wings and a wing colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Butterfly {
    flight: FlyingInsect,
    pub wing_color: String,
}

impl Butterfly {
    pub fn new(name: impl Into<String>, wing_color: impl Into<String>) -> Self {
        Self {
            flight: FlyingInsect::new(name, BUTTERFLY_LEGS, BUTTERFLY_WINGS),
            wing_color: wing_color.into(),
        }
    }

    #[must_use]
    pub fn land(&self) -> String {
        self.flight.land()
    }
}

impl Insect for Butterfly {
    fn core(&self) -> &InsectCore {
        self.flight.core()
    }

    fn core_mut(&mut self) -> &mut InsectCore {
        self.flight.core_mut()
    }

    fn kind(&self) -> SpecimenKind {
        SpecimenKind::Butterfly
    }

    fn movement(&self) -> String {
        self.flight.movement()
    }

    fn describe(&self) -> String {
        format!("{} Mis alas son de color {}.", self.flight.describe(), self.wing_color)
    }

    fn attribute(&self, attribute: &str) -> Result<AttributeValue, TaxonomyError> {
        match attribute {
            "wing_color" => Ok(self.wing_color.as_str().into()),
            other => self.flight.lookup(other, self.kind()),
        }
    }
}

impl Feeder for Butterfly {
    fn feed(&self) -> String {
        format!("{} se alimenta de néctar con su espiritrompa.", self.name())
    }
}
