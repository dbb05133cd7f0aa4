use indoc::indoc;

use crate::test_utils::fixture;
use crate::{Error, Typekit, synthesized_intermediate_name};

#[test]
fn types_without_opaques_are_their_own_intermediate() {
    let typekit = fixture();

    for name in ["/double", "/base/Plain", "/base/TimeStamp", "/std/string"] {
        assert_eq!(typekit.intermediate_type_name_for(name).unwrap(), name);
    }
}

#[test]
fn opaques_use_the_declared_intermediate() {
    let typekit = fixture();

    assert_eq!(
        typekit.intermediate_type_name_for("/base/Angle").unwrap(),
        "/base/Angle_m"
    );
    assert_eq!(
        typekit.intermediate_type_name_for("/base/Time").unwrap(),
        "/base/TimeStamp"
    );
}

#[test]
fn arrays_and_containers_map_element_wise() {
    let typekit = fixture();

    assert_eq!(
        typekit.intermediate_type_name_for("/base/Pose[4]").unwrap(),
        format!("{}[4]", typekit.intermediate_type_name_for("/base/Pose").unwrap())
    );
    assert_eq!(
        typekit.intermediate_type_name_for("/std/vector</base/Time>").unwrap(),
        "/std/vector</base/TimeStamp>"
    );
}

#[test]
fn compounds_get_a_synthesized_name() {
    let typekit = fixture();

    assert_eq!(
        typekit.intermediate_type_name_for("/base/Pose").unwrap(),
        "/base/Pose_m"
    );
}

#[test]
fn synthesized_names() {
    assert_eq!(synthesized_intermediate_name("/base/Pose"), "/base/Pose_m");
    assert_eq!(synthesized_intermediate_name("/Pose"), "/Pose_m");
    assert_eq!(
        synthesized_intermediate_name("/wrappers/Pair</base/Angle,/base/Time>"),
        "/wrappers/Pair__base_Angle__base_Time__m"
    );
    assert_eq!(
        synthesized_intermediate_name("/wrappers/Fixed<unsigned char[8]>"),
        "/wrappers/Fixed_unsigned_char_8___m"
    );
}

#[test]
fn names_are_stable() {
    let typekit = fixture();

    let first = typekit.intermediate_type_name_for("/base/Pose[4]").unwrap();
    typekit.prepare_reverse_index();
    let second = typekit.intermediate_type_name_for("/base/Pose[4]").unwrap();
    assert_eq!(first, second);
}

#[test]
fn intermediate_type_for() {
    let typekit = fixture();

    assert_eq!(
        typekit.intermediate_type_for("/base/Angle").unwrap().name(),
        "/base/Angle_m"
    );
    assert_eq!(
        typekit.intermediate_type_for("/base/Pose[4]").unwrap().name(),
        "/base/Pose_m[4]"
    );
    assert_eq!(
        typekit.intermediate_type_for("/base/Plain").unwrap().name(),
        "/base/Plain"
    );
}

#[test]
fn intermediate_type_for_unregistered_intermediate() {
    let mut typekit = fixture();
    typekit.create_array("/base/Angle", 2).unwrap();

    let err = typekit.intermediate_type_for("/base/Angle[2]").unwrap_err();
    assert!(matches!(err, Error::NotFound(ref name) if name == "/base/Angle_m[2]"));
}

#[test]
fn round_trip() {
    let typekit = fixture();

    for name in [
        "/base/Angle",
        "/base/Time",
        "/base/Pose",
        "/base/Pose[4]",
        "/std/vector</base/Time>",
    ] {
        let intermediate = typekit.intermediate_type_for(name).unwrap();
        assert_eq!(
            typekit.opaque_type_for(intermediate).unwrap().name(),
            name,
            "round trip through {}",
            intermediate.name()
        );
    }
}

#[test]
fn round_trip_through_a_container_intermediate() {
    let xml = indoc! {r#"
        <typelib>
          <opaque name="/base/Time" size="8" marshal_as="/base/TimeStamp"/>
          <compound name="/base/TimeStamp" size="8">
            <field name="microseconds" type="/int64_t" offset="0"/>
          </compound>
          <opaque name="/base/Times" size="24" marshal_as="/std/vector&lt;/base/TimeStamp>"/>
          <container name="/std/vector&lt;/base/TimeStamp>" kind="/std/vector" of="/base/TimeStamp" size="24"/>
        </typelib>
    "#};
    let typekit = Typekit::from_raw_data("times", xml, "/base/Time\n/base/Times\n").unwrap();

    let intermediate = typekit.intermediate_type_for("/base/Times").unwrap();
    assert_eq!(intermediate.name(), "/std/vector</base/TimeStamp>");

    // No `/std/vector</base/Time>` exists, so the declaration decides.
    let found = typekit.find_opaque_for_intermediate(intermediate).unwrap();
    assert_eq!(found.map(|t| t.name()), Some("/base/Times"));
    assert_eq!(typekit.opaque_type_for(intermediate).unwrap().name(), "/base/Times");
}

#[test]
fn colliding_intermediate_names_keep_the_last_source() {
    let mut typekit = fixture();
    let angle = vec![("a".to_owned(), "/base/Angle".to_owned())];
    typekit.create_compound("/base/Pair_x_", angle.clone()).unwrap();
    typekit.create_compound("/base/Pair<x>", angle).unwrap();
    typekit
        .create_compound("/base/Pair_x__m", vec![("a".to_owned(), "/base/Angle_m".to_owned())])
        .unwrap();

    assert_eq!(
        typekit.intermediate_type_name_for("/base/Pair_x_").unwrap(),
        "/base/Pair_x__m"
    );
    assert_eq!(
        typekit.intermediate_type_name_for("/base/Pair<x>").unwrap(),
        "/base/Pair_x__m"
    );

    typekit.prepare_reverse_index();
    let found = typekit.find_opaque_for_intermediate("/base/Pair_x__m").unwrap();
    assert_eq!(found.map(|t| t.name()), Some("/base/Pair<x>"));
}

#[test]
fn declared_intermediate_without_suffix() {
    let typekit = fixture();

    let found = typekit.find_opaque_for_intermediate("/base/TimeStamp").unwrap();
    assert_eq!(found.map(|t| t.name()), Some("/base/Time"));
    assert!(typekit.reverse_index.get().is_none());
}

#[test]
fn generated_array_uses_the_reverse_index() {
    let typekit = fixture();

    let found = typekit.find_opaque_for_intermediate("/base/Pose_m[4]").unwrap();
    assert_eq!(found.map(|t| t.name()), Some("/base/Pose[4]"));
    assert!(typekit.reverse_index.get().is_some());
}

#[test]
fn container_of_unregistered_opaque_container() {
    let typekit = fixture();

    // `/base/Angle_m` maps back to `/base/Angle`, but no vector of angles exists.
    let found = typekit
        .find_opaque_for_intermediate("/std/vector</base/Angle_m>")
        .unwrap();
    assert!(found.is_none());
}

#[test]
fn plain_types_are_not_intermediates() {
    let typekit = fixture();

    assert!(!typekit.is_intermediate_type("/base/Plain").unwrap());
    assert!(!typekit.is_intermediate_type("/double").unwrap());
    assert!(typekit.is_intermediate_type("/base/Angle_m").unwrap());
    assert_eq!(
        typekit.opaque_type_for("/base/Plain").unwrap().name(),
        "/base/Plain"
    );
}

#[test]
fn unknown_types_are_not_found() {
    let typekit = fixture();

    assert!(matches!(
        typekit.find_opaque_for_intermediate("/base/Ghost_m"),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        typekit.intermediate_type_name_for("/base/Ghost"),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn undeclared_opaques_are_skipped_by_the_index() {
    let mut typekit = fixture();
    typekit.create_opaque("/base/Undeclared", 4).unwrap();

    assert!(matches!(
        typekit.intermediate_type_name_for("/base/Undeclared"),
        Err(Error::InternalInconsistency { .. })
    ));
    typekit.prepare_reverse_index();
    let index = typekit.reverse_index.get().unwrap();
    assert!(index.contains_key("/base/Pose_m"));
    assert!(index.keys().all(|name| !name.contains("Undeclared")));
}
