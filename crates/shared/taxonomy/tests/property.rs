use insecta_taxonomy::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn rename_keeps_previous_name_for_empty_candidates(name in "[A-Za-z ]{1,24}", color in "[a-z]{1,12}") {
        let mut monarch = Butterfly::new(name.clone(), color);
        monarch.set_name("");
        prop_assert_eq!(monarch.name(), name.as_str());
    }

    #[test]
    fn rename_applies_any_non_empty_text(candidate in ".{1,32}") {
        let mut queen = Ant::new("Hormiga Reina", "reina");
        queen.set_name(candidate.clone());
        prop_assert_eq!(queen.name(), candidate.as_str());
        prop_assert!(queen.work().contains(&candidate));
    }

    #[test]
    fn flying_movement_mentions_wings(legs in 0u8..=12, wings in 0u8..=8) {
        let flier = FlyingInsect::new("Volador", legs, wings);
        let expected = format!("{wings} alas");
        let legs_rendered = format!("{legs} patas");
        prop_assert!(flier.movement().contains(&expected));
        prop_assert!(flier.describe().contains(&legs_rendered));
    }

    #[test]
    fn walking_movement_mentions_legs(legs in 0u8..=12) {
        let walker = NonFlyingInsect::new("Caminante", legs);
        let expected = format!("{legs} patas");
        prop_assert!(walker.movement().contains(&expected));
    }

    #[test]
    fn ant_type_is_in_every_ant_behavior(ant_type in "[a-z]{1,16}") {
        let ant = Ant::new("Hormiga", ant_type.clone());
        prop_assert_eq!(ant.ant_type(), ant_type.as_str());
        prop_assert!(ant.feed().contains(&ant_type));
        prop_assert!(ant.work().contains(&ant_type));
        let hidden = matches!(ant.attribute("ant_type"), Err(TaxonomyError::HiddenAttribute { .. }));
        prop_assert!(hidden);
    }
}
