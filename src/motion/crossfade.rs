//! Fade-out, swap, fade-in sequencing for a single image slot.
//!
//! The source is only replaced once the old image has reached zero opacity,
//! and the fade-in only starts after the swap. Callers own the timers: each
//! transition returns the follow-up it wants scheduled.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeStage {
    Shown,
    FadingOut,
    FadingIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeCommand {
    Nothing,
    /// Call [`CrossFade::swap`] once the fade-out has run.
    SwapAfter(u32),
    /// Call [`CrossFade::settle`] once the fade-in has run.
    SettleAfter(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrossFade {
    src: Option<String>,
    pending: Option<String>,
    stage: FadeStage,
    fade_ms: u32,
}

impl CrossFade {
    pub fn new(fade_ms: u32) -> Self {
        Self {
            src: None,
            pending: None,
            stage: FadeStage::Shown,
            fade_ms,
        }
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn stage(&self) -> FadeStage {
        self.stage
    }

    /// Opacity the image should be heading to right now.
    pub fn opacity(&self) -> f64 {
        match self.stage {
            FadeStage::FadingOut => 0.0,
            FadeStage::Shown | FadeStage::FadingIn => 1.0,
        }
    }

    pub fn request(&mut self, next: &str) -> FadeCommand {
        if self.src.is_none() {
            // Nothing on screen yet, show the first image as is.
            self.src = Some(next.to_string());
            return FadeCommand::Nothing;
        }
        let displayed = self.src.as_deref() == Some(next);

        match self.stage {
            FadeStage::FadingOut if displayed => {
                // Changed our mind before the swap; bring the old one back.
                self.pending = None;
                self.stage = FadeStage::FadingIn;
                FadeCommand::SettleAfter(self.fade_ms)
            }
            FadeStage::FadingOut => {
                // The running fade-out timer will pick this up.
                self.pending = Some(next.to_string());
                FadeCommand::Nothing
            }
            FadeStage::Shown | FadeStage::FadingIn if displayed => FadeCommand::Nothing,
            FadeStage::Shown | FadeStage::FadingIn => {
                self.pending = Some(next.to_string());
                self.stage = FadeStage::FadingOut;
                FadeCommand::SwapAfter(self.fade_ms)
            }
        }
    }

    pub fn swap(&mut self) -> FadeCommand {
        if self.stage != FadeStage::FadingOut {
            return FadeCommand::Nothing;
        }
        if let Some(next) = self.pending.take() {
            self.src = Some(next);
        }
        self.stage = FadeStage::FadingIn;
        FadeCommand::SettleAfter(self.fade_ms)
    }

    pub fn settle(&mut self) {
        if self.stage == FadeStage::FadingIn {
            self.stage = FadeStage::Shown;
        }
    }

    /// Skips the fades entirely.
    pub fn replace(&mut self, next: &str) {
        self.src = Some(next.to_string());
        self.pending = None;
        self.stage = FadeStage::Shown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(fade: &CrossFade) -> (String, f64) {
        (fade.src().unwrap_or_default().to_string(), fade.opacity())
    }

    #[test]
    fn first_image_shows_without_fade() {
        let mut fade = CrossFade::new(300);
        assert_eq!(fade.request("/ring.jpeg"), FadeCommand::Nothing);
        assert_eq!(snapshot(&fade), ("/ring.jpeg".to_string(), 1.0));
    }

    #[test]
    fn never_two_images_at_full_opacity() {
        let mut fade = CrossFade::new(300);
        fade.request("/old.jpeg");
        let mut states = vec![snapshot(&fade)];

        assert_eq!(fade.request("/new.jpeg"), FadeCommand::SwapAfter(300));
        states.push(snapshot(&fade));
        assert_eq!(fade.swap(), FadeCommand::SettleAfter(300));
        states.push(snapshot(&fade));
        fade.settle();
        states.push(snapshot(&fade));

        assert_eq!(
            states,
            vec![
                ("/old.jpeg".to_string(), 1.0),
                ("/old.jpeg".to_string(), 0.0),
                ("/new.jpeg".to_string(), 1.0),
                ("/new.jpeg".to_string(), 1.0),
            ]
        );
        assert_eq!(fade.stage(), FadeStage::Shown);
    }

    #[test]
    fn same_image_is_not_refaded() {
        let mut fade = CrossFade::new(300);
        fade.request("/a.jpeg");
        assert_eq!(fade.request("/a.jpeg"), FadeCommand::Nothing);
        assert_eq!(fade.stage(), FadeStage::Shown);
    }

    #[test]
    fn latest_request_during_fade_out_wins() {
        let mut fade = CrossFade::new(300);
        fade.request("/a.jpeg");
        fade.request("/b.jpeg");
        assert_eq!(fade.request("/c.jpeg"), FadeCommand::Nothing);
        fade.swap();
        assert_eq!(fade.src(), Some("/c.jpeg"));
    }

    #[test]
    fn returning_to_displayed_image_cancels_swap() {
        let mut fade = CrossFade::new(300);
        fade.request("/a.jpeg");
        fade.request("/b.jpeg");
        assert_eq!(fade.request("/a.jpeg"), FadeCommand::SettleAfter(300));
        assert_eq!(snapshot(&fade), ("/a.jpeg".to_string(), 1.0));
        // a stale swap timer firing late must not change anything
        assert_eq!(fade.swap(), FadeCommand::Nothing);
        assert_eq!(fade.src(), Some("/a.jpeg"));
    }

    #[test]
    fn new_request_while_fading_in_restarts_fade_out() {
        let mut fade = CrossFade::new(300);
        fade.request("/a.jpeg");
        fade.request("/b.jpeg");
        fade.swap();
        assert_eq!(fade.request("/c.jpeg"), FadeCommand::SwapAfter(300));
        assert_eq!(snapshot(&fade), ("/b.jpeg".to_string(), 0.0));
    }

    #[test]
    fn replace_skips_fades() {
        let mut fade = CrossFade::new(300);
        fade.request("/a.jpeg");
        fade.request("/b.jpeg");
        fade.replace("/c.jpeg");
        assert_eq!(snapshot(&fade), ("/c.jpeg".to_string(), 1.0));
        assert_eq!(fade.stage(), FadeStage::Shown);
    }
}
