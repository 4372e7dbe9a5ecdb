use std::future::Future;
use std::time::Duration;

/// Page-swap animation; both halves must finish before the caller continues
pub trait Transition {
    fn fade_out(&mut self) -> impl Future<Output = ()> + Send;

    fn fade_in(&mut self) -> impl Future<Output = ()> + Send;
}

/// Opacity fade held at its final value, like a `fill: forwards` animation
#[derive(Debug, Clone)]
pub struct FadeTransition {
    duration: Duration,
    opacity: f32,
}

impl FadeTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            opacity: 1.0,
        }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    async fn animate_to(&mut self, opacity: f32) {
        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }
        self.opacity = opacity;
    }
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

impl Transition for FadeTransition {
    async fn fade_out(&mut self) {
        self.animate_to(0.0).await;
    }

    async fn fade_in(&mut self) {
        self.animate_to(1.0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fade_waits_for_duration() {
        let mut fade = FadeTransition::default();
        let start = tokio::time::Instant::now();

        fade.fade_out().await;
        assert_eq!(fade.opacity(), 0.0);
        assert!(start.elapsed() >= Duration::from_millis(200));

        fade.fade_in().await;
        assert_eq!(fade.opacity(), 1.0);
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_instant_fade() {
        let mut fade = FadeTransition::instant();
        fade.fade_out().await;
        assert_eq!(fade.opacity(), 0.0);
        fade.fade_in().await;
        assert_eq!(fade.opacity(), 1.0);
    }
}
