//! Slide geometry and motion math.
//!
//! Everything here is a pure function of element geometry and scroll
//! position so it can be exercised without a document.

/// Vertical extent of one slide inside the scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideBounds {
    pub top: f64,
    pub height: f64,
}

impl SlideBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Viewport-relative bounding box of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A discrete navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
    First,
    Last,
}

/// Index of the slide straddling the viewport midpoint; 0 when none does.
///
/// Slide `i` is current when `top - vh/2 <= scroll_top < bottom - vh/2`.
/// The first match wins.
pub fn current_slide_index(slides: &[SlideBounds], scroll_top: f64, viewport_height: f64) -> usize {
    let half = viewport_height / 2.0;
    slides
        .iter()
        .position(|slide| scroll_top >= slide.top - half && scroll_top < slide.bottom() - half)
        .unwrap_or(0)
}

/// Resolve a navigation step to a slide index.
///
/// Out-of-range targets yield `None`; there is no wrap-around or clamping.
pub fn step_target(current: usize, step: Step, count: usize) -> Option<usize> {
    let target = match step {
        Step::Next => current.checked_add(1)?,
        Step::Previous => current.checked_sub(1)?,
        Step::First => 0,
        Step::Last => count.checked_sub(1)?,
    };
    (target < count).then_some(target)
}

/// Interpret a vertical touch gesture. Swiping up moves forward.
pub fn classify_swipe(start_y: f64, end_y: f64, threshold: f64) -> Option<Step> {
    if start_y - end_y > threshold {
        Some(Step::Next)
    } else if end_y - start_y > threshold {
        Some(Step::Previous)
    } else {
        None
    }
}

/// Scroll distance past the top of `slide`.
pub fn relative_scroll(scroll_top: f64, slide_top: f64) -> f64 {
    scroll_top - slide_top
}

/// Parallax offset for an image, only while its slide is within one slide
/// height of the viewport top.
pub fn image_parallax_offset(scroll_top: f64, slide: SlideBounds, factor: f64) -> Option<f64> {
    let relative = relative_scroll(scroll_top, slide.top);
    (relative > -slide.height && relative < slide.height).then(|| relative * factor)
}

/// Tilt angles in degrees for a cursor at (`client_x`, `client_y`) over `rect`.
///
/// Returns `(rotate_x, rotate_y)`.
pub fn tilt_angles(rect: Rect, client_x: f64, client_y: f64, divisor: f64) -> (f64, f64) {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    ((y - center_y) / divisor, (center_x - x) / divisor)
}
