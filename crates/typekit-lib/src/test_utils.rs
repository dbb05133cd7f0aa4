//! Shared typekit fixture.

use indoc::indoc;

use crate::Typekit;

/// Two opaques (one with a generated-style intermediate name, one without),
/// a compound, an array and a container holding them, plus their
/// intermediates.
pub(crate) const REGISTRY_XML: &str = indoc! {r#"
    <typelib>
      <opaque name="/base/Angle" size="8" marshal_as="/base/Angle_m" includes="base/Angle.hpp:base/Float.hpp" needs_copy="1"/>
      <compound name="/base/Angle_m" size="8">
        <field name="rad" type="/double" offset="0"/>
      </compound>
      <opaque name="/base/Time" size="8" marshal_as="/base/TimeStamp" includes="base/Time.hpp"/>
      <compound name="/base/TimeStamp" size="8">
        <field name="microseconds" type="/int64_t" offset="0"/>
      </compound>
      <compound name="/base/Pose" size="16">
        <field name="position" type="/double" offset="0"/>
        <field name="heading" type="/base/Angle" offset="8"/>
      </compound>
      <compound name="/base/Pose_m" size="16">
        <field name="position" type="/double" offset="0"/>
        <field name="heading" type="/base/Angle_m" offset="8"/>
      </compound>
      <array name="/base/Pose[4]" of="/base/Pose" size="4"/>
      <array name="/base/Pose_m[4]" of="/base/Pose_m" size="4"/>
      <container name="/std/vector&lt;/base/Time>" kind="/std/vector" of="/base/Time" size="24"/>
      <container name="/std/vector&lt;/base/TimeStamp>" kind="/std/vector" of="/base/TimeStamp" size="24"/>
      <container name="/std/vector&lt;/base/Angle_m>" kind="/std/vector" of="/base/Angle_m" size="24"/>
      <compound name="/base/Plain" size="8">
        <field name="value" type="/double" offset="0"/>
      </compound>
    </typelib>
"#};

pub(crate) const TYPELIST: &str = indoc! {"
    /base/Angle 1
    /base/Time
    /base/Pose
    /base/Pose[4] 0
    /base/Plain 0
    /std/vector</base/Time>
"};

pub(crate) fn fixture() -> Typekit {
    Typekit::from_raw_data("base", REGISTRY_XML, TYPELIST).unwrap()
}
