use super::constants::{MOBILE_MAX_WIDTH, MOBILE_USER_AGENTS};

/// Coarse device bucket used to pick a tuning profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    #[inline]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// Viewport-width plus user-agent heuristic for spotting phones and tablets.
///
/// The heuristic is approximate, so it is carried as a value the caller can
/// replace rather than being baked into the animators.
#[derive(Clone, Debug, PartialEq)]
pub struct MobilePolicy {
    pub max_width: f32,
    pub user_agent_patterns: Vec<String>,
}

impl Default for MobilePolicy {
    fn default() -> Self {
        Self {
            max_width: MOBILE_MAX_WIDTH,
            user_agent_patterns: MOBILE_USER_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MobilePolicy {
    pub fn classify(&self, viewport_width: f32, user_agent: &str) -> DeviceClass {
        if viewport_width <= self.max_width || self.matches_user_agent(user_agent) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    fn matches_user_agent(&self, user_agent: &str) -> bool {
        let ua = user_agent.to_ascii_lowercase();
        self.user_agent_patterns
            .iter()
            .any(|p| !p.is_empty() && ua.contains(&p.to_ascii_lowercase()))
    }
}
