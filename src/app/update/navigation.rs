use super::super::messages::{Disposition, IntersectionEntry};
use super::super::state::Presentation;
use super::Effect;
use crate::host::{ElementId, Host};
use tracing::{debug, info};

impl Presentation {
    /// Highlight the nav dot of each slide crossing the threshold; the last
    /// qualifying entry of the batch wins.
    pub(super) fn sync_nav_entries<H: Host + ?Sized>(
        &self,
        host: &H,
        entries: &[IntersectionEntry],
        effects: &mut Vec<Effect>,
    ) {
        let threshold = self.config.nav_threshold;
        for entry in entries
            .iter()
            .filter(|entry| entry.is_intersecting && entry.ratio >= threshold)
        {
            for link in &self.nav_links {
                effects.push(Effect::RemoveClass {
                    element: *link,
                    class: self.config.active_class.clone(),
                });
            }

            let Some(id) = host.attribute(entry.target, "id") else {
                continue;
            };
            if let Some(link) = self.nav_link_for(host, &id) {
                debug!(slide = %id, "Activating nav dot");
                effects.push(Effect::AddClass {
                    element: link,
                    class: self.config.active_class.clone(),
                });
            }
        }
    }

    fn nav_link_for<H: Host + ?Sized>(&self, host: &H, slide_id: &str) -> Option<ElementId> {
        let wanted = format!("#{slide_id}");
        host.query_all(&self.config.nav_link_selector)
            .into_iter()
            .find(|link| host.attribute(*link, "href").as_deref() == Some(wanted.as_str()))
    }

    /// Nav dots never follow their href; they scroll to the slide instead.
    pub(super) fn handle_nav_click<H: Host + ?Sized>(
        &self,
        host: &H,
        link: ElementId,
        effects: &mut Vec<Effect>,
    ) -> Disposition {
        let href = host.attribute(link, "href");
        let target = href
            .as_deref()
            .and_then(|href| href.strip_prefix('#'))
            .filter(|id| !id.is_empty())
            .and_then(|id| host.element_by_id(id));

        match target {
            Some(slide) => {
                info!(href = href.as_deref().unwrap_or_default(), "Scrolling to slide");
                effects.push(Effect::ScrollTo(slide));
            }
            None => debug!(?href, "Nav link target not found"),
        }
        Disposition::PreventDefault
    }
}
