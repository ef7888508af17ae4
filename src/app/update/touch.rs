use super::super::state::Presentation;
use super::Effect;
use crate::geometry::classify_swipe;
use crate::host::Host;
use tracing::trace;

impl Presentation {
    pub(super) fn handle_touch_start(&mut self, screen_y: f64) {
        self.touch.start_y = screen_y;
    }

    pub(super) fn handle_touch_end<H: Host + ?Sized>(
        &mut self,
        host: &H,
        screen_y: f64,
        effects: &mut Vec<Effect>,
    ) {
        self.touch.end_y = screen_y;
        let threshold = self.config.swipe_threshold_px;
        match classify_swipe(self.touch.start_y, self.touch.end_y, threshold) {
            Some(step) => self.navigate(host, step, effects),
            None => trace!(
                start_y = self.touch.start_y,
                end_y = self.touch.end_y,
                "Touch below swipe threshold"
            ),
        }
    }
}
