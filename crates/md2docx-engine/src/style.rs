//! Document-wide style selection.
//!
//! Fonts vary by platform because the original converter targeted whatever
//! font set ships with the host OS. The profile is chosen by the caller via
//! an explicit [`Platform`] value; the engine never probes the environment.

/// Target platform for font selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

/// Resolved fonts, sizes and colors applied to every block of the matching
/// kind. Computed once per conversion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub body_font: String,
    pub code_font: String,
    /// Body text size in points.
    pub body_size_pt: usize,
    /// Code text size in points.
    pub code_size_pt: usize,
    /// Heading color, RRGGBB hex without `#`.
    pub heading_color: String,
    /// Link run color, RRGGBB hex without `#`.
    pub link_color: String,
    /// Body line spacing in 240ths of a line (276 = 1.15 lines).
    pub line_spacing: u32,
    /// Space after body paragraphs, in twentieths of a point.
    pub space_after: u32,
}

impl StyleConfig {
    pub fn for_platform(platform: Platform) -> Self {
        let (body_font, code_font) = match platform {
            Platform::Windows => ("微软雅黑", "Consolas"),
            Platform::MacOs => ("PingFang SC", "SF Mono"),
            Platform::Linux => ("DejaVu Sans", "DejaVu Sans Mono"),
        };

        Self {
            body_font: body_font.to_string(),
            code_font: code_font.to_string(),
            body_size_pt: 12,
            code_size_pt: 10,
            heading_color: "2C3E50".to_string(),
            link_color: "007ACC".to_string(),
            line_spacing: 276,
            space_after: 120,
        }
    }

    /// Heading size in points for a level 1-6 heading.
    pub fn heading_size_pt(level: u8) -> usize {
        24usize.saturating_sub(2 * level as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn each_platform_has_its_own_font_pair() {
        let windows = StyleConfig::for_platform(Platform::Windows);
        let mac = StyleConfig::for_platform(Platform::MacOs);
        let linux = StyleConfig::for_platform(Platform::Linux);

        assert_eq!(windows.code_font, "Consolas");
        assert_eq!(mac.body_font, "PingFang SC");
        assert_eq!(linux.code_font, "DejaVu Sans Mono");
    }

    #[rstest]
    #[case(1, 22)]
    #[case(2, 20)]
    #[case(3, 18)]
    #[case(6, 12)]
    fn heading_sizes_step_down_by_two_points(#[case] level: u8, #[case] points: usize) {
        assert_eq!(StyleConfig::heading_size_pt(level), points);
    }

    #[test]
    fn style_config_is_deterministic() {
        let a = StyleConfig::for_platform(Platform::Linux);
        let b = StyleConfig::for_platform(Platform::Linux);
        assert_eq!(a, b);
    }
}
