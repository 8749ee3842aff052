use crate::operand::Operand;
use core::fmt::Write;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_COMPONENTS: usize = 6;

/// Bounds on the human readable form of a vector.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReprLimits {
    pub max_components: usize,
}

impl Default for ReprLimits {
    fn default() -> Self {
        Self {
            max_components: DEFAULT_MAX_COMPONENTS,
        }
    }
}

/// Renders `[c0, c1, ...]`, listing at most `limits.max_components` entries.
/// Components that can't be read as numbers show as `?`.
pub fn bounded_components<O: Operand + ?Sized>(operand: &O, limits: &ReprLimits) -> String {
    let len = operand.len();
    let shown = len.min(limits.max_components);
    let mut s = String::from("[");
    for i in 0..shown {
        if i > 0 {
            s.push_str(", ");
        }
        match operand.component(i) {
            Ok(c) => {
                let _ = write!(s, "{}", c);
            }
            Err(_) => s.push('?'),
        }
    }
    if len > shown {
        if shown > 0 {
            s.push_str(", ");
        }
        s.push_str("...");
    }
    s.push(']');
    s
}

#[test]
fn test_bounded_components() {
    let limits = ReprLimits::default();
    assert_eq!(bounded_components(&[4, 2, 7], &limits), "[4, 2, 7]");
    assert_eq!(
        bounded_components(&(0i64..10), &limits),
        "[0, 1, 2, 3, 4, 5, ...]"
    );
    assert_eq!(bounded_components(&[0.5, 1.0], &limits), "[0.5, 1.0]");
    assert_eq!(bounded_components("ab", &limits), "[?, ?]");

    let none = ReprLimits { max_components: 0 };
    assert_eq!(bounded_components(&[1], &none), "[...]");
    let empty: [i64; 0] = [];
    assert_eq!(bounded_components(&empty, &none), "[]");
}

#[test]
fn test_limits_from_json() {
    let limits: ReprLimits = serde_json::from_str(r#"{"max_components": 3}"#).unwrap();
    assert_eq!(limits.max_components, 3);
    let limits: ReprLimits = serde_json::from_str("{}").unwrap();
    assert_eq!(limits, ReprLimits::default());
}
