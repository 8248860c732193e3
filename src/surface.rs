//! Presentation surface with stale-render suppression.
//!
//! Every render takes a [`RenderTicket`] before it starts loading assets.
//! When it finishes, the result is only presented if no newer ticket has
//! been issued in the meantime, so a slow render can never overwrite the
//! output of a faster one that was triggered after it.

use image::RgbaImage;

/// Generation token handed out when a render starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderTicket(u64);

impl RenderTicket {
    /// Returns the generation number of this ticket.
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// The most recently presented bitmap.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    image: Option<RgbaImage>,
    issued: u64,
    presented: Option<u64>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new render, superseding all earlier tickets.
    pub fn begin(&mut self) -> RenderTicket {
        self.issued = self.issued.wrapping_add(1);
        RenderTicket(self.issued)
    }

    /// Returns true if `ticket` is the newest one issued.
    pub fn is_current(&self, ticket: RenderTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Presents a finished render if its ticket is still current.
    ///
    /// Returns false, leaving the surface untouched, for stale tickets.
    pub fn present(&mut self, ticket: RenderTicket, image: RgbaImage) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "dropping stale render {} (latest is {})",
                ticket.0,
                self.issued
            );
            return false;
        }
        self.image = Some(image);
        self.presented = Some(ticket.0);
        true
    }

    /// The currently presented bitmap, if any render has succeeded.
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Generation of the presented bitmap.
    pub fn presented_generation(&self) -> Option<u64> {
        self.presented
    }

    /// Discards the presented bitmap.
    pub fn clear(&mut self) {
        self.image = None;
        self.presented = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(value: u8) -> RgbaImage {
        RgbaImage::from_pixel(1, 1, Rgba([value, value, value, 255]))
    }

    #[test]
    fn presents_current_ticket() {
        let mut surface = Surface::new();
        assert!(surface.image().is_none());

        let ticket = surface.begin();
        assert!(surface.is_current(ticket));
        assert!(surface.present(ticket, solid(10)));
        assert_eq!(surface.image().unwrap().get_pixel(0, 0).0[0], 10);
        assert_eq!(surface.presented_generation(), Some(ticket.generation()));
    }

    #[test]
    fn late_completion_of_older_render_is_dropped() {
        let mut surface = Surface::new();
        let first = surface.begin();
        let second = surface.begin();

        // Second finishes first.
        assert!(surface.present(second, solid(2)));
        // First finishes later and must not win.
        assert!(!surface.present(first, solid(1)));
        assert_eq!(surface.image().unwrap().get_pixel(0, 0).0[0], 2);
    }

    #[test]
    fn stale_ticket_never_presents_even_if_nothing_shown() {
        let mut surface = Surface::new();
        let first = surface.begin();
        let _second = surface.begin();
        assert!(!surface.present(first, solid(1)));
        assert!(surface.image().is_none());
    }

    #[test]
    fn clear_resets_image() {
        let mut surface = Surface::new();
        let ticket = surface.begin();
        surface.present(ticket, solid(5));
        surface.clear();
        assert!(surface.image().is_none());
        assert_eq!(surface.presented_generation(), None);
    }
}
