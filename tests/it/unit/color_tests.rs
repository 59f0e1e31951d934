//! Unit tests for colors and the gradient.

use chartfield::color::{Color, ColorStop, clamp01};
use chartfield::ChartError;

#[test]
fn test_hex_forms() {
    assert_eq!(Color::from_hex("#2BFFF5").unwrap(), Color::rgb(0x2B, 0xFF, 0xF5));
    assert_eq!(Color::from_hex("2bfff5").unwrap(), Color::rgb(0x2B, 0xFF, 0xF5));
    assert_eq!(Color::from_hex("#fff").unwrap(), Color::rgb(255, 255, 255));
    assert_eq!("#044554".parse::<Color>().unwrap().to_string(), "#044554");
}

#[test]
fn test_invalid_hex() {
    for bad in ["", "#12345", "#GGGGGG", "teal", "#1234567"] {
        assert!(
            matches!(Color::from_hex(bad), Err(ChartError::InvalidColor(_))),
            "{bad:?}"
        );
    }
}

#[test]
fn test_interpolate_endpoints_and_midpoint() {
    let from = Color::rgb(0, 100, 255);
    let to = Color::rgb(100, 0, 55);
    assert_eq!(Color::interpolate(0.0, from, to), from);
    assert_eq!(Color::interpolate(1.0, from, to), to);
    assert_eq!(Color::interpolate(0.5, from, to), Color::rgb(50, 50, 155));
}

#[test]
fn test_interpolate_saturates_out_of_range() {
    let from = Color::rgb(0, 0, 0);
    let to = Color::rgb(200, 200, 200);
    assert_eq!(Color::interpolate(2.0, from, to), Color::rgb(255, 255, 255));
    assert_eq!(Color::interpolate(-1.0, from, to), Color::rgb(0, 0, 0));
}

#[test]
fn test_clamp01() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(7.0), 1.0);
    assert_eq!(clamp01(f64::NAN), 0.0);
}

#[test]
fn test_color_stop_samples_between_endpoints() {
    let stop = ColorStop::new(Color::rgb(10, 10, 10), Color::rgb(30, 30, 30));
    assert_eq!(stop.at(0.0), stop.first);
    assert_eq!(stop.at(1.0), stop.second);
    assert_eq!(stop.at(0.5), Color::rgb(20, 20, 20));
}

#[test]
fn test_serde_as_hex_string() {
    let json = serde_json::to_string(&Color::rgb(14, 14, 14)).unwrap();
    assert_eq!(json, "\"#0E0E0E\"");
    let parsed: Color = serde_json::from_str("\"#0e0e0e\"").unwrap();
    assert_eq!(parsed, Color::rgb(14, 14, 14));
    assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}
