use insecta_taxonomy::*;

#[test]
fn queen_ant_end_to_end() {
    let queen = Ant::new("Hormiga Reina", "reina");

    let work = queen.work();
    assert!(work.contains("Hormiga Reina"));
    assert!(work.contains("reina"));
    assert!(queen.feed().contains("reina"));

    assert_eq!(queen.ant_type(), "reina");
    let err = queen.attribute("ant_type").expect_err("direct lookup must fail");
    assert!(matches!(err, TaxonomyError::HiddenAttribute { kind: SpecimenKind::Ant, .. }));
}

#[test]
fn bare_grasshopper_end_to_end() {
    let grasshopper = FlyingInsect::new("Saltamontes", 6, 4);

    assert!(grasshopper.movement().contains('4'));
    let landing = grasshopper.land();
    assert!(landing.contains("Saltamontes"));
    assert!(landing.contains("aterrizado"));

    let err = Specimen::from(grasshopper).feed().expect_err("feeding is abstract here");
    assert!(matches!(
        err,
        TaxonomyError::AbstractBehavior { kind: SpecimenKind::FlyingInsect, .. }
    ));
}

#[test]
fn rename_applies_only_non_empty_text() {
    let mut monarch = Butterfly::new("Mariposa Monarca", "naranja y negro");

    monarch.set_name("Mariposa Monarca Real");
    assert!(monarch.describe().contains("Mariposa Monarca Real"));

    monarch.set_name("");
    monarch.set_name(42_i64);
    monarch.set_name(false);
    assert_eq!(monarch.name(), "Mariposa Monarca Real");
}

#[test]
fn name_lookup_yields_text() {
    let mut queen = Ant::new("Hormiga Reina", "reina");
    queen.set_name("Hormiga Soldado");

    let name = queen.attribute("name").expect("name is public");
    assert_eq!(name.as_text(), Some("Hormiga Soldado"));

    let legs = queen.attribute("leg_count").expect("leg count is public");
    assert_eq!(legs.as_text(), None);
    assert_eq!(legs.to_string(), "6");
}

#[test]
fn describe_through_the_capability_set() {
    let specimens: Vec<Specimen> = vec![
        Butterfly::new("Mariposa Monarca", "naranja y negro").into(),
        Ant::new("Hormiga Reina", "reina").into(),
    ];

    for specimen in &specimens {
        let insect = specimen.insect();
        let description = insect.describe();
        assert!(description.contains(insect.name()));
        assert!(description.contains(&insect.leg_count().to_string()));
        assert!(insect.is_alive());
    }
}

#[test]
fn butterfly_description_keeps_the_base_rendering() {
    let monarch = Butterfly::new("Mariposa Monarca", "naranja y negro");
    let base = FlyingInsect::new("Mariposa Monarca", BUTTERFLY_LEGS, BUTTERFLY_WINGS).describe();

    let description = monarch.describe();
    assert!(description.starts_with(&base));
    assert!(description.ends_with("Mis alas son de color naranja y negro."));
}

#[test]
fn public_wing_color_is_mutable() {
    let mut monarch = Butterfly::new("Mariposa Monarca", "naranja y negro");
    monarch.wing_color = "azul".to_owned();
    assert!(monarch.describe().contains("azul"));
}

#[test]
fn action_writes_feed_error_for_bare_walker() {
    let mut out = Vec::new();
    insect_action(&NonFlyingInsect::new("Escarabajo", 6).into(), &mut out).expect("vec writer");
    let text = String::from_utf8(out).expect("utf-8");

    assert!(text.contains("Escarabajo está caminando con sus 6 patas."));
    assert!(text.contains("NonFlyingInsect cannot feed"));
    assert!(!text.contains("aterrizado"));
    assert!(text.ends_with("------\n"));
}
