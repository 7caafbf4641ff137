use chatpose_foundation::{ConfigError, DateRevealConfig, GestureConfig, ReplyConfig, SwipeConfig};

use crate::overlay::{PlacementConfig, PresentationConfig};

/// Every tunable of the conversation surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionConfig {
    pub gesture: GestureConfig,
    pub reply: ReplyConfig,
    pub date_reveal: DateRevealConfig,
    pub placement: PlacementConfig,
    pub presentation: PresentationConfig,
}

impl InteractionConfig {
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_reply(mut self, reply: ReplyConfig) -> Self {
        self.reply = reply;
        self
    }

    pub fn with_date_reveal(mut self, date_reveal: DateRevealConfig) -> Self {
        self.date_reveal = date_reveal;
        self
    }

    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_presentation(mut self, presentation: PresentationConfig) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn swipe(&self) -> SwipeConfig {
        SwipeConfig {
            gesture: self.gesture,
            reply: self.reply,
            date_reveal: self.date_reveal,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = self
            .swipe()
            .validate()
            .and_then(|()| self.placement.validate())
            .and_then(|()| self.presentation.validate());
        if let Err(err) = &result {
            log::warn!("rejected interaction config: {err}");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(InteractionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let config = InteractionConfig::default()
            .with_placement(PlacementConfig::default().with_spacing(-1.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "placement.spacing",
                value: -1.0
            })
        );
    }

    #[test]
    fn swipe_view_carries_overrides() {
        let config =
            InteractionConfig::default().with_reply(ReplyConfig::default().with_threshold(80.0));
        assert_eq!(config.swipe().reply.threshold, 80.0);
    }
}
