use std::fs;
use std::path::Path;

use indoc::indoc;

use super::loader::LoadArgs;

pub const REGISTRY_XML: &str = indoc! {r#"
    <typelib>
      <opaque name="/base/Angle" size="8" marshal_as="/base/Angle_m" includes="base/Angle.hpp" needs_copy="1"/>
      <compound name="/base/Angle_m" size="8">
        <field name="rad" type="/double" offset="0"/>
      </compound>
      <compound name="/base/Pose" size="16">
        <field name="position" type="/double" offset="0"/>
        <field name="heading" type="/base/Angle" offset="8"/>
      </compound>
      <array name="/base/Pose[2]" of="/base/Pose" size="2"/>
    </typelib>
"#};

pub const TYPELIST: &str = indoc! {"
    /base/Angle
    /base/Pose 1
    /base/Pose[2] 0
    /double 0
"};

/// Write `base.tlb` and `base.typelist` into `dir`.
pub fn write_typekit(dir: &Path, registry_xml: &str, typelist: &str) -> LoadArgs {
    let registry_path = dir.join("base.tlb");
    let typelist_path = dir.join("base.typelist");
    fs::write(&registry_path, registry_xml).unwrap();
    fs::write(&typelist_path, typelist).unwrap();
    LoadArgs {
        registry_path,
        typelist_path,
        name: None,
        standard_types: true,
    }
}
