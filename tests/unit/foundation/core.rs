use super::*;

#[test]
fn lerp_hits_endpoints_exactly() {
    assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
    assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
    assert_eq!(lerp(3.0, 7.0, 0.5), 5.0);
}

#[test]
fn lerp_stays_finite_across_wide_spans() {
    assert_eq!(lerp(1e308, -1e308, 0.0), 1e308);
    assert_eq!(lerp(1e308, -1e308, 1.0), -1e308);
    assert_eq!(lerp(1e308, -1e308, 0.5), 0.0);
    assert!(lerp(-f64::MAX, f64::MAX, 0.25).is_finite());

    let a = Vec3::new(1e308, 0.0, 0.0);
    let b = Vec3::new(-1e308, 1.0, 0.0);
    assert_eq!(<Vec3 as Lerp>::lerp(&a, &b, 0.0), a);
}

#[test]
fn vec3_lerp_is_componentwise() {
    let a = Vec3::new(0.0, 10.0, -2.0);
    let b = Vec3::new(4.0, 20.0, 2.0);
    assert_eq!(<Vec3 as Lerp>::lerp(&a, &b, 0.25), Vec3::new(1.0, 12.5, -1.0));
}

#[test]
fn vec3_accepts_array_and_object() {
    let a: Vec3 = serde_json::from_str("[1, 2, 3]").unwrap();
    let b: Vec3 = serde_json::from_str(r#"{"x": 1, "y": 2, "z": 3}"#).unwrap();
    assert_eq!(a, b);
    assert_eq!(serde_json::to_string(&a).unwrap(), "[1.0,2.0,3.0]");
}

#[test]
fn position_keeps_authored_arity() {
    let p2: Position = serde_json::from_str("[0.5, -1]").unwrap();
    assert_eq!(p2, Position::xy(0.5, -1.0));
    assert_eq!(p2.to_vec3(), Vec3::new(0.5, -1.0, 0.0));
    assert_eq!(serde_json::to_string(&p2).unwrap(), "[0.5,-1.0]");

    let p3: Position = serde_json::from_str("[1, 2, 3]").unwrap();
    assert_eq!(p3, Position::xyz(1.0, 2.0, 3.0));
}

#[test]
fn position_rejects_wrong_arity() {
    assert!(serde_json::from_str::<Position>("[1]").is_err());
    assert!(serde_json::from_str::<Position>("[1, 2, 3, 4]").is_err());
}
