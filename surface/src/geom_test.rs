#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_clone_and_copy() {
    let p = Point::new(1.0, 2.0);
    let q = p;
    let r = p.clone();
    assert_eq!(p, q);
    assert_eq!(p, r);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

#[test]
fn point_debug_format() {
    let s = format!("{:?}", Point::new(1.0, 2.0));
    assert!(s.contains("Point"));
}
