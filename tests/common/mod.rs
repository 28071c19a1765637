pub mod fixtures;

use liquid::{LayoutResult, Rect};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Looks up a resolved rectangle, failing the test with the known names when
/// it is missing.
pub fn rect_of(result: &LayoutResult, name: &str) -> Rect {
    match result.get(name) {
        Some(rect) => *rect,
        None => {
            let mut names: Vec<_> = result.keys().collect();
            names.sort();
            panic!("'{name}' was not resolved, got {names:?}")
        }
    }
}

/// Asserts a rectangle within floating point tolerance.
#[macro_export]
macro_rules! assert_rect {
    ($rect:expr, $x:expr, $y:expr, $w:expr, $h:expr) => {{
        let rect: liquid::Rect = $rect;
        let expected = liquid::Rect::new($x, $y, $w, $h);
        let close = |a: f32, b: f32| (a - b).abs() < 1e-3;
        assert!(
            close(rect.x, expected.x)
                && close(rect.y, expected.y)
                && close(rect.w, expected.w)
                && close(rect.h, expected.h),
            "expected {:?}, got {:?}",
            expected,
            rect
        );
    }};
}
