use super::*;

impl ScrollModel {
    /// Advances any active scroll animation. Returns the offset to force
    /// onto the scroll area this frame, or `None` when the shopper is in
    /// control of scrolling.
    pub(super) fn step(&mut self, dt: f32) -> Option<f32> {
        let (destination, behavior) = self.target?;

        match behavior {
            ScrollBehavior::Instant => {
                self.offset = destination;
                self.target = None;
            }
            ScrollBehavior::Smooth => {
                let progress = (SMOOTH_SCROLL_RATE * dt).clamp(0.0, 1.0);
                self.offset += (destination - self.offset) * progress;
                if (destination - self.offset).abs() <= SCROLL_SNAP_EPSILON {
                    self.offset = destination;
                    self.target = None;
                }
            }
        }

        Some(self.offset)
    }

    /// Adopts the offset the scroll area actually rendered at, so shopper
    /// wheel/drag scrolling stays authoritative outside animations.
    pub(super) fn settle(&mut self, rendered_offset: f32) {
        if self.target.is_none() {
            self.offset = rendered_offset;
        }
    }

    pub(super) fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Section anchors are recaptured on every home render; stale entries
    /// from other views must not satisfy anchor lookups.
    pub(super) fn clear_anchors(&mut self) {
        self.anchors.clear();
    }

    pub(super) fn record_anchor(&mut self, anchor_id: &str, top: f32) {
        self.anchors.insert(anchor_id.to_owned(), top);
    }

    pub(super) fn address_fragment(&self) -> &str {
        &self.address_fragment
    }
}

impl ViewHost for ScrollModel {
    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        self.target = Some((offset.max(0.0), behavior));
    }

    fn anchor_offset(&self, anchor_id: &str) -> Option<f32> {
        self.anchors.get(anchor_id).copied()
    }

    fn replace_fragment(&mut self, fragment: &str) -> StorefrontResult<()> {
        self.address_fragment = fragment.to_owned();
        Ok(())
    }

    fn push_fragment(&mut self, fragment: &str) -> StorefrontResult<()> {
        self.address_fragment = fragment.to_owned();
        Ok(())
    }
}
