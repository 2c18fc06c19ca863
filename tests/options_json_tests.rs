use sparkchart::api::{BarRenderer, ChartOptions, LineRenderer, PieRenderer};
use sparkchart::core::FillSpec;
use sparkchart::render::Color;
use sparkchart::ChartError;

#[test]
fn options_json_uses_camel_case_and_css_colors() {
    let options = ChartOptions::new()
        .with_stroke_width(1.5)
        .with_inner_radius(3.0)
        .with_stroke(Color::rgb8(0x4d, 0x89, 0xf9));
    let json = options.to_json_pretty().expect("serialize");

    assert!(json.contains(r#""strokeWidth": 1.5"#));
    assert!(json.contains(r#""innerRadius": 3.0"#));
    assert!(json.contains(r##""stroke": "#4d89f9""##));
    assert!(!json.contains("padding"));
}

#[test]
fn builtin_defaults_survive_json_roundtrip() {
    for defaults in [
        BarRenderer::default_options(),
        LineRenderer::default_options(),
        PieRenderer::default_options(),
    ] {
        let json = defaults.to_json_pretty().expect("serialize");
        let restored = ChartOptions::from_json_str(&json).expect("deserialize");
        assert_eq!(restored, defaults);
    }
}

#[test]
fn fill_accepts_single_color_or_palette() {
    let single = ChartOptions::from_json_str(r#"{"fill":"orange"}"#).expect("single color");
    assert_eq!(single.fill, Some(FillSpec::Color(Color::rgb8(255, 165, 0))));

    let palette =
        ChartOptions::from_json_str(r##"{"fill":["#fff","none"]}"##).expect("palette");
    assert_eq!(
        palette.fill,
        Some(FillSpec::Palette(vec![Color::rgb8(255, 255, 255), Color::TRANSPARENT]))
    );
}

#[test]
fn function_fill_cannot_be_serialized() {
    let options = ChartOptions::new().with_fill(FillSpec::function(|_, _, _| Color::TRANSPARENT));
    let err = options.to_json_pretty().expect_err("function fill");
    assert!(matches!(err, ChartError::InvalidOptions(_)));
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        ChartOptions::from_json_str(r#"{"width":"wide"}"#),
        Err(ChartError::InvalidOptions(_))
    ));
    assert!(ChartOptions::from_json_str(r##"{"fill":"#zzz"}"##).is_err());
}

#[test]
fn merge_prefers_set_fields() {
    let base = BarRenderer::default_options();
    let merged = ChartOptions::new().with_height(40).merged_over(&base);
    assert_eq!(merged.height, Some(40));
    assert_eq!(merged.width, Some(32));
    assert_eq!(merged.padding, Some(0.1));
    assert_eq!(merged.delimiter, Some(','));
}

#[test]
fn validation_rejects_out_of_range_values() {
    assert!(ChartOptions::new().with_padding(0.6).validate().is_err());
    assert!(ChartOptions::new().with_stroke_width(-1.0).validate().is_err());
    assert!(ChartOptions::new().with_radius(0.0).validate().is_err());
    assert!(ChartOptions::new().with_min(f64::NAN).validate().is_err());
    assert!(ChartOptions::new().with_padding(0.5).validate().is_ok());
}
