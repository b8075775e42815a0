use heliops::ui::messages::confirm_from;
use std::io::Cursor;

#[test]
fn test_confirm_accepts_only_yes() {
    for yes in ["y\n", "Y\n", "yes\n", "  YES  \n"] {
        assert!(confirm_from("Replace it?", &mut Cursor::new(yes)).unwrap(), "{yes:?}");
    }
    for no in ["n\n", "no\n", "\n", "yep\n", ""] {
        assert!(!confirm_from("Replace it?", &mut Cursor::new(no)).unwrap(), "{no:?}");
    }
}
