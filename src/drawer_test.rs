use super::*;

#[test]
fn drawer_starts_closed() {
    let d = DrawerController::new();
    assert_eq!(d.state(), DrawerState::Closed);
    assert!(!d.is_open());
}

#[test]
fn open_from_closed_shows() {
    let mut d = DrawerController::new();
    assert_eq!(d.open(), vec![DrawerAction::Show]);
    assert_eq!(d.state(), DrawerState::Open);
}

#[test]
fn open_when_open_does_nothing() {
    let mut d = DrawerController::new();
    d.open();
    assert!(d.open().is_empty());
    assert!(d.is_open());
}

#[test]
fn close_from_open_hides() {
    let mut d = DrawerController::new();
    d.open();
    assert_eq!(d.close(), vec![DrawerAction::Hide]);
    assert_eq!(d.state(), DrawerState::Closed);
}

#[test]
fn close_when_closed_stays_closed() {
    let mut d = DrawerController::new();
    assert_eq!(d.close(), vec![DrawerAction::Hide]);
    assert_eq!(d.close(), vec![DrawerAction::Hide]);
    assert_eq!(d.state(), DrawerState::Closed);
}

#[test]
fn escape_closes_open_drawer() {
    let mut d = DrawerController::new();
    d.open();
    assert_eq!(d.on_key("Escape"), vec![DrawerAction::Hide]);
    assert!(!d.is_open());
}

#[test]
fn escape_when_closed_does_nothing() {
    let mut d = DrawerController::new();
    assert!(d.on_key("Escape").is_empty());
}

#[test]
fn other_keys_are_ignored() {
    let mut d = DrawerController::new();
    d.open();
    for key in ["Enter", "Esc", "escape", " ", "Tab"] {
        assert!(d.on_key(key).is_empty(), "{key} should not close the drawer");
    }
    assert!(d.is_open());
}

#[test]
fn reopen_after_close() {
    let mut d = DrawerController::new();
    d.open();
    d.close();
    assert_eq!(d.open(), vec![DrawerAction::Show]);
}
