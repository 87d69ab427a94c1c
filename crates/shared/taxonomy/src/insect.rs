//! The abstract insect: shared state and the capability set every kind exposes.

use crate::attribute::AttributeValue;
use crate::error::TaxonomyError;
use crate::specimen::SpecimenKind;
use std::fmt::Debug;
use tracing::debug;

/// State shared by every insect kind.
///
/// `leg_count` and `is_alive` are fixed at construction; only `name` changes,
/// and only through [`InsectCore::set_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsectCore {
    name: String,
    leg_count: u8,
    is_alive: bool,
}

impl InsectCore {
    pub(crate) fn new(name: impl Into<String>, leg_count: u8) -> Self {
        Self { name: name.into(), leg_count, is_alive: true }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn leg_count(&self) -> u8 {
        self.leg_count
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Replaces the name with `candidate` when it is non-empty text.
    ///
    /// Any other candidate is ignored and the current name is kept; nothing is
    /// reported to the caller.
    pub fn set_name(&mut self, candidate: AttributeValue) {
        match candidate {
            AttributeValue::Text(name) if !name.is_empty() => self.name = name,
            rejected => debug!(current = %self.name, ?rejected, "Ignoring invalid name"),
        }
    }

    /// The base rendering: `Soy un {name} con {leg_count} patas.`
    #[must_use]
    pub fn describe(&self) -> String {
        format!("Soy un {} con {} patas.", self.name, self.leg_count)
    }

    pub(crate) fn attribute(
        &self,
        attribute: &str,
        kind: SpecimenKind,
    ) -> Result<AttributeValue, TaxonomyError> {
        match attribute {
            "name" => Ok(self.name.as_str().into()),
            "leg_count" => Ok(self.leg_count.into()),
            "is_alive" => Ok(self.is_alive.into()),
            other => Err(TaxonomyError::UnknownAttribute {
                attribute: other.to_owned().into(),
                kind,
                context: None,
            }),
        }
    }
}

/// The capability set shared by all insects.
///
/// Implementors provide `movement`; `describe` renders the shared description and
/// may be extended, never replaced, by overriding implementations.
pub trait Insect: Debug {
    fn core(&self) -> &InsectCore;

    fn core_mut(&mut self) -> &mut InsectCore;

    fn kind(&self) -> SpecimenKind;

    /// How this insect gets around.
    fn movement(&self) -> String;

    fn describe(&self) -> String {
        self.core().describe()
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn leg_count(&self) -> u8 {
        self.core().leg_count()
    }

    fn is_alive(&self) -> bool {
        self.core().is_alive()
    }

    /// See [`InsectCore::set_name`].
    fn set_name(&mut self, candidate: impl Into<AttributeValue>)
    where
        Self: Sized,
    {
        self.core_mut().set_name(candidate.into());
    }

    /// Looks up a public attribute by name.
    ///
    /// # Errors
    /// [`TaxonomyError::HiddenAttribute`] for fields that are only reachable through an
    /// accessor (or not at all), [`TaxonomyError::UnknownAttribute`] otherwise.
    fn attribute(&self, attribute: &str) -> Result<AttributeValue, TaxonomyError> {
        self.core().attribute(attribute, self.kind())
    }
}

/// Feeding is abstract for the intermediate families; only leaf kinds implement it.
pub trait Feeder: Insect {
    fn feed(&self) -> String;
}

pub(crate) fn hidden(attribute: &'static str, kind: SpecimenKind) -> TaxonomyError {
    TaxonomyError::HiddenAttribute { attribute: attribute.into(), kind, context: None }
}
