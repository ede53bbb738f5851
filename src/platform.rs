//! Platform detection and the decisions derived from it.

use input::Mode;

/// Kind of device the viewer runs on. Detected once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Phones and tablets: touch joystick, lighter rendering.
    Touch,
    /// Everything else.
    Desktop,
}

/// Rendering parameters handed to the backend when the viewer starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Ratio of rendered pixels to logical pixels.
    pub pixel_ratio: f32,
    /// Whether to enable antialiasing.
    pub antialias: bool,
}

impl Platform {
    /// Detects the platform from a browser style user agent string.
    ///
    /// Matches `Mobi` or `Android`, ignoring case.
    pub fn detect(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if ua.contains("mobi") || ua.contains("android") {
            Platform::Touch
        } else {
            Platform::Desktop
        }
    }

    /// Movement input used on this platform.
    pub fn mode(self) -> Mode {
        match self {
            Platform::Touch => Mode::Joystick,
            Platform::Desktop => Mode::Buttons,
        }
    }

    /// Rendering parameters for this platform.
    pub fn render_settings(self) -> RenderSettings {
        match self {
            Platform::Touch => RenderSettings {
                pixel_ratio: 0.75,
                antialias: false,
            },
            Platform::Desktop => RenderSettings {
                pixel_ratio: 1.0,
                antialias: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_mobile_agents() {
        let agents = [
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/126.0 Mobile Safari/537.36",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148",
            "some ANDROID tablet",
        ];
        for ua in &agents {
            assert_eq!(Platform::detect(ua), Platform::Touch, "{}", ua);
        }
        let desktop = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
        assert_eq!(Platform::detect(desktop), Platform::Desktop);
        assert_eq!(Platform::detect(""), Platform::Desktop);
    }

    #[test]
    fn platform_picks_input_mode() {
        assert_eq!(Platform::Touch.mode(), Mode::Joystick);
        assert_eq!(Platform::Desktop.mode(), Mode::Buttons);
        assert!(!Platform::Touch.render_settings().antialias);
        assert_eq!(Platform::Desktop.render_settings().pixel_ratio, 1.0);
    }
}
