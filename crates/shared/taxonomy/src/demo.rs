//! The scripted demonstration run by the `insecta` binary.

use crate::error::TaxonomyError;
use crate::flying::{Butterfly, FlyingInsect};
use crate::insect::Insect;
use crate::specimen::{Specimen, insect_action};
use crate::walking::Ant;
use std::io::Write;
use tracing::debug;

pub const HEADER: &str = "=== COMPORTAMIENTO DE DIFERENTES INSECTOS ===";

/// Builds a butterfly, an ant and a bare flying insect, renames the butterfly,
/// runs [`insect_action`] on each and finally shows that the ant's caste can only
/// be read through its accessor.
///
/// # Errors
/// Fails only when `out` cannot be written to.
pub fn run<W: Write>(out: &mut W) -> Result<(), TaxonomyError> {
    let mut monarch = Butterfly::new("Mariposa Monarca", "naranja y negro");
    let queen = Ant::new("Hormiga Reina", "reina");
    let grasshopper = FlyingInsect::new("Saltamontes", 6, 4);

    monarch.set_name("Mariposa Monarca Real");

    writeln!(out, "{HEADER}")?;
    let specimens = [Specimen::from(monarch), Specimen::from(queen), Specimen::from(grasshopper)];
    for specimen in &specimens {
        insect_action(specimen, out)?;
    }

    let queen = specimens.iter().find_map(Specimen::as_ant).ok_or("the demonstration has no ant")?;
    match queen.attribute("ant_type") {
        Err(err @ TaxonomyError::HiddenAttribute { .. }) => {
            debug!(%err, "Hidden attribute rejected as expected");
            writeln!(out, "\nError de encapsulación: {err}")?;
            writeln!(out, "Acceso correcto mediante getter: {}", queen.ant_type())?;
            Ok(())
        }
        Err(err) => Err(err),
        Ok(value) => Err(format!("hidden attribute leaked through lookup: {value}").into()),
    }
}
