//! Property tests for WindowReference construction

use aug_script_shared::WindowReference;
use proptest::prelude::*;

proptest! {
    #[test]
    fn new_keeps_any_non_empty_name(name in ".+") {
        let window = WindowReference::new(name.clone()).unwrap();
        prop_assert_eq!(window.name(), name.as_str());
        prop_assert!(!window.is_unnamed());
    }

    #[test]
    fn conversions_agree_with_new(name in ".*") {
        let expected = WindowReference::new(name.clone()).ok();
        prop_assert_eq!(name.parse::<WindowReference>().ok(), expected.clone());
        prop_assert_eq!(WindowReference::try_from(Some(name.clone())).ok(), expected.clone());
        prop_assert_eq!(expected.is_some(), !name.is_empty());
    }

    #[test]
    fn display_and_into_name_return_name(name in "[a-z][a-z0-9-]{0,31}") {
        let window = WindowReference::new(name.clone()).unwrap();
        prop_assert_eq!(window.to_string(), name.clone());
        prop_assert_eq!(window.into_name(), name);
    }
}
