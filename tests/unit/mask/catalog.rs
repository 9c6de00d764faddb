use super::*;

#[test]
fn unknown_slugs_fall_back_to_rectangle() {
    assert_eq!(mask_by_slug("squircle").mask_type, MaskType::Rectangle);
    assert_eq!(mask_by_slug("").mask_type, MaskType::Rectangle);
    assert_eq!(mask_by_slug("  CIRCLE ").mask_type, MaskType::Circle);
}

#[test]
fn every_type_has_a_catalog_entry() {
    for def in MASKS {
        assert_eq!(mask_by_type(def.mask_type), def);
        assert_eq!(MaskType::from_slug(def.mask_type.slug()), Some(def.mask_type));
    }
}

#[test]
fn all_paths_parse_as_bezier_paths() {
    for def in MASKS {
        let path = def.bez_path().unwrap();
        assert!(path.elements().len() > 2, "{} path is degenerate", def.name);
    }
}

#[test]
fn ratios_are_positive_and_near_unit() {
    for def in MASKS {
        assert!(def.ratio > 0.0 && def.ratio <= 1.0, "{}", def.name);
    }
}

#[test]
fn rectangle_is_the_sentinel() {
    assert!(MASKS[0].is_rectangle());
    assert!(!mask_by_type(MaskType::Heart).is_rectangle());
}

#[test]
fn mask_type_serializes_as_lowercase_slug() {
    let s = serde_json::to_string(&MaskType::Heart).unwrap();
    assert_eq!(s, "\"heart\"");
    let de: MaskType = serde_json::from_str("\"hexagon\"").unwrap();
    assert_eq!(de, MaskType::Hexagon);
}
