use super::*;

#[test]
fn enter_saves_the_edit() {
    assert_eq!(edit_key("Enter"), Some(EditKey::Save));
}

#[test]
fn escape_cancels_the_edit() {
    assert_eq!(edit_key("Escape"), Some(EditKey::Cancel));
}

#[test]
fn other_keys_are_ignored() {
    for key in ["a", "Tab", "enter", " ", ""] {
        assert_eq!(edit_key(key), None);
    }
}
