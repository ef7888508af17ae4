use super::super::state::Presentation;
use super::Effect;
use crate::geometry::tilt_angles;
use crate::host::{ElementId, Host};
use crate::transform::Transform;

impl Presentation {
    pub(super) fn handle_pointer_moved<H: Host + ?Sized>(
        &self,
        host: &H,
        card: ElementId,
        client_x: f64,
        client_y: f64,
        effects: &mut Vec<Effect>,
    ) {
        let rect = host.bounding_rect(card);
        let (rotate_x, rotate_y) = tilt_angles(rect, client_x, client_y, self.config.tilt_divisor);
        effects.push(Effect::SetTransform {
            element: card,
            transform: Transform::Tilt {
                shift_x: self.config.tilt_shift_px,
                perspective: self.config.tilt_perspective_px,
                rotate_x,
                rotate_y,
            },
        });
    }

    pub(super) fn handle_pointer_left(&self, card: ElementId, effects: &mut Vec<Effect>) {
        effects.push(Effect::SetTransform {
            element: card,
            transform: Transform::None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mounted;
    use crate::app::Event;
    use crate::geometry::Rect;
    use crate::host::fake::FakeHost;

    #[test]
    fn center_of_card_is_flat_and_leave_resets() {
        let mut host = FakeHost::new(800.0);
        let card = host.add(&[".feature-card"]);
        host.el(card).rect = Rect {
            left: 40.0,
            top: 100.0,
            width: 300.0,
            height: 200.0,
        };
        let mut deck = mounted(&mut host);

        deck.update(
            &mut host,
            Event::PointerMoved {
                card,
                client_x: 190.0,
                client_y: 200.0,
            },
        );
        assert_eq!(
            host.transform_css(card).as_deref(),
            Some("translateX(8px) perspective(1000px) rotateX(0deg) rotateY(0deg)")
        );

        deck.update(
            &mut host,
            Event::PointerMoved {
                card,
                client_x: 340.0,
                client_y: 300.0,
            },
        );
        assert_eq!(
            host.transform_css(card).as_deref(),
            Some("translateX(8px) perspective(1000px) rotateX(5deg) rotateY(-7.5deg)")
        );

        deck.update(&mut host, Event::PointerLeft(card));
        assert_eq!(host.transform_css(card).as_deref(), Some(""));
    }
}
