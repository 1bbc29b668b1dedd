mod common;

use common::{Channel, Code, Color, Permission, Weekday};
use expect_test::expect;
use primext::{
    display_name, get_attribute, has_enum_value, is_default, parse_enum, to_enum, to_flag_list,
    to_flag_name_list, values, ConversionError, DisplayName, EnumSource, Enumeration, ToBool,
};

#[test]
fn default_is_the_zero_value() {
    assert!(is_default(Color::Undefined));
    assert!(!is_default(Color::Red));
    assert!(!is_default(Weekday::Monday));
    assert!(is_default(Permission::NONE));
    assert!(is_default(Channel::empty()));
}

#[test]
fn membership_by_name_and_value() {
    assert!(has_enum_value::<Color>("Red", false));
    assert!(!has_enum_value::<Color>("red", false));
    assert!(!has_enum_value::<Color>(" Red", false));
    assert!(has_enum_value::<Color>(" red ", true));
    assert!(has_enum_value::<Color>(2, false));
    assert!(!has_enum_value::<Color>(3, false));
    assert!(!has_enum_value::<Color>(None::<&str>, true));
    assert!(has_enum_value::<Permission>(3u32, false));
    assert!(!has_enum_value::<Permission>(5u32, false));
    assert!(has_enum_value::<Weekday>(EnumSource::of(Color::Green), false));
}

#[test]
fn to_enum_round_trips_every_member_name() {
    for color in values::<Color>() {
        let name = color.name().unwrap();
        assert_eq!(to_enum::<Color>(name, None, true).unwrap(), color);
        assert_eq!(to_enum::<Color>(name.to_lowercase().as_str(), None, true).unwrap(), color);
    }
    for permission in values::<Permission>() {
        let name = permission.name().unwrap();
        assert_eq!(to_enum::<Permission>(name, None, true).unwrap(), permission);
    }
}

#[test]
fn to_enum_accepts_numbers_and_numeric_text() {
    assert_eq!(to_enum::<Color>(4, None, false).unwrap(), Color::Blue);
    assert_eq!(to_enum::<Color>("4", None, false).unwrap(), Color::Blue);
    assert_eq!(to_enum::<Color>(" Green ", None, false).unwrap(), Color::Green);
    assert_eq!(to_enum::<Weekday>(3u8, None, false).unwrap(), Weekday::Wednesday);
}

#[test]
fn to_enum_combined_flags_must_be_declared() {
    assert_eq!(
        to_enum::<Permission>("READ, WRITE", None, false).unwrap(),
        Permission::READ_WRITE
    );
    assert_eq!(
        to_enum::<Permission>("1, 2", None, false).unwrap(),
        Permission::READ_WRITE
    );
    assert!(to_enum::<Permission>("READ, EXECUTE", None, false).is_err());
    assert!(to_enum::<Permission>(5u32, None, false).is_err());
}

#[test]
fn flag_values_outside_the_backing_integer_are_rejected() {
    assert!(to_enum::<Channel>("-255", None, false).is_err());
    assert!(to_enum::<Channel>("256", None, false).is_err());
    assert!(to_enum::<Channel>(257, None, false).is_err());
    assert!(to_enum::<Permission>(4_294_967_297i64, None, false).is_err());
    assert!(to_enum::<Permission>(-1, None, false).is_err());
    assert_eq!(parse_enum::<Channel>("257", false), None);
    assert_eq!(parse_enum::<Channel>("-1", false), None);
    assert_eq!(parse_enum::<Channel>("LEFT, 256", false), None);
    assert!(!has_enum_value::<Channel>(257, false));
    assert_eq!(
        to_enum::<Channel>("-255", Some(Channel::RIGHT), false).unwrap(),
        Channel::RIGHT
    );
    assert_eq!(parse_enum::<Channel>("255", false).map(|c| c.bits()), Some(255));
}

#[test]
fn to_enum_falls_back_to_default() {
    assert_eq!(
        to_enum::<Color>("Purple", Some(Color::Blue), false).unwrap(),
        Color::Blue
    );
    assert_eq!(
        to_enum::<Color>(None::<&str>, Some(Color::Red), true).unwrap(),
        Color::Red
    );
    assert_eq!(
        to_enum::<Color>("red", Some(Color::Undefined), false).unwrap(),
        Color::Undefined
    );
}

#[test]
fn to_enum_error_names_parameter_and_type() {
    let err = to_enum::<Color>("Purple", None, false).unwrap_err();
    assert!(matches!(err, ConversionError::InvalidEnumValue { .. }));
    assert_eq!(err.param(), "value");
    assert_eq!(err.target(), "Color");
    expect!["can't convert value 'Purple' to enum Color"].assert_eq(&err.to_string());

    let absent = to_enum::<Weekday>(None::<i32>, None, true).unwrap_err();
    expect!["can't convert value '' to enum Weekday"].assert_eq(&absent.to_string());
}

#[test]
fn values_follow_declaration_order() {
    let colors = values::<Color>();
    assert_eq!(colors.len(), 4);
    assert_eq!(
        colors.clone().collect::<Vec<_>>(),
        [Color::Undefined, Color::Red, Color::Green, Color::Blue]
    );
    assert_eq!(colors.rev().next(), Some(Color::Blue));
    assert_eq!(
        values::<Permission>().collect::<Vec<_>>(),
        [
            Permission::NONE,
            Permission::READ,
            Permission::WRITE,
            Permission::EXECUTE,
            Permission::READ_WRITE,
        ]
    );
}

#[test]
fn flag_list_drops_empty_member_when_others_match() {
    assert_eq!(
        to_flag_list(Permission::READ | Permission::EXECUTE),
        [Permission::READ, Permission::EXECUTE]
    );
    assert_eq!(to_flag_list(Permission::NONE), [Permission::NONE]);
    assert_eq!(to_flag_list(Color::Blue), [Color::Blue]);
    assert!(to_flag_list(Channel::empty()).is_empty());
}

#[test]
fn flag_list_recombines_to_the_original_value() {
    for bits in 0..8u32 {
        let value = Permission::from_bits_retain(bits);
        let recombined = to_flag_list(value)
            .into_iter()
            .fold(Permission::empty(), |acc, flag| acc | flag);
        assert_eq!(recombined, value, "bits {bits}");
    }
}

#[test]
fn flag_names() {
    let names = to_flag_name_list(Permission::READ_WRITE);
    insta::assert_snapshot!(names.join(", "), @"READ, WRITE, READ_WRITE");
    assert_eq!(to_flag_name_list(Channel::LEFT | Channel::RIGHT), ["LEFT", "RIGHT"]);
}

#[test]
fn attributes_are_looked_up_by_member() {
    assert_eq!(get_attribute::<Code, _>(Color::Red), Some(&Code("R")));
    assert_eq!(get_attribute::<Code, _>(Color::Green), None);
    assert_eq!(display_name(Color::Red), "Красный");
    assert_eq!(display_name(Color::Blue), "");
    assert_eq!(display_name(Permission::READ), "Чтение");
    assert_eq!(display_name(Permission::READ | Permission::EXECUTE), "");
    assert_eq!(
        get_attribute::<DisplayName, _>(Color::Green).and_then(|d| d.description),
        Some("traffic light go")
    );
}

#[test]
fn enum_truthiness_follows_member_name() {
    assert!(!Color::Undefined.to_bool());
    assert!(Color::Red.to_bool());
    assert!(!Permission::NONE.to_bool());
    assert!(Permission::READ.to_bool());
    assert!((Permission::READ | Permission::EXECUTE).to_bool());
    assert!(!Some(Color::Undefined).to_bool());
    assert!(!None::<Color>.to_bool());
}
