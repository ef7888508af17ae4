use std::fmt;

/// Inline `transform` values written by the effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Clears the inline transform.
    None,
    TranslateY(f64),
    TranslateYScale {
        y: f64,
        scale: f64,
    },
    Tilt {
        shift_x: f64,
        perspective: f64,
        rotate_x: f64,
        rotate_y: f64,
    },
}

impl Transform {
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Transform::None => Ok(()),
            Transform::TranslateY(y) => write!(f, "translateY({}px)", Css(y)),
            Transform::TranslateYScale { y, scale } => {
                write!(f, "translateY({}px) scale({})", Css(y), Css(scale))
            }
            Transform::Tilt {
                shift_x,
                perspective,
                rotate_x,
                rotate_y,
            } => write!(
                f,
                "translateX({}px) perspective({}px) rotateX({}deg) rotateY({}deg)",
                Css(shift_x),
                Css(perspective),
                Css(rotate_x),
                Css(rotate_y)
            ),
        }
    }
}

/// CSS number formatting: no negative zero, non-finite values render as 0.
struct Css(f64);

impl fmt::Display for Css {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() || self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
