use super::*;

#[test]
fn gesture_default_is_idle() {
    let s = GestureState::default();
    assert!(matches!(s, GestureState::Idle));
}

#[test]
fn idle_is_not_drawing() {
    assert!(!GestureState::Idle.is_drawing());
}

#[test]
fn drawing_is_drawing() {
    let s = GestureState::Drawing { last: Point::new(1.0, 2.0) };
    assert!(s.is_drawing());
}

#[test]
fn drawing_carries_last_point() {
    let s = GestureState::Drawing { last: Point::new(3.0, 4.0) };
    assert_eq!(s, GestureState::Drawing { last: Point::new(3.0, 4.0) });
    assert_ne!(s, GestureState::Drawing { last: Point::new(3.0, 5.0) });
}

#[test]
fn gesture_debug_format() {
    let _ = format!("{:?}", GestureState::Idle);
    let _ = format!("{:?}", GestureState::Drawing { last: Point::new(0.0, 0.0) });
}
