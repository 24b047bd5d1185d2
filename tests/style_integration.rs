// SPDX-License-Identifier: MPL-2.0
#[cfg(test)]
mod tests {
    use iced::widget::button;
    use iced::Theme;
    use learnhub::ui::design_tokens::{palette, sizing, spacing};
    use learnhub::ui::notifications::Severity;
    use learnhub::ui::styles;
    use learnhub::ui::theming::ThemeMode;

    #[test]
    fn button_styles_cover_every_status() {
        let theme = Theme::Dark;
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
            button::Status::Disabled,
        ] {
            let _ = styles::button::primary(&theme, status);
            let _ = styles::button::ghost(&theme, status);
            let _ = styles::button::selected(&theme, status);
        }
    }

    #[test]
    fn container_styles_follow_theme() {
        let light = styles::container::card(&Theme::Light);
        let dark = styles::container::card(&Theme::Dark);
        assert_ne!(light.background, dark.background);
        let _ = styles::container::toolbar(&Theme::Light);
        let _ = styles::container::dropdown(&Theme::Dark);
    }

    #[test]
    fn severity_colors_come_from_palette() {
        assert_eq!(Severity::Success.color(), palette::SUCCESS_500);
        assert_eq!(Severity::Error.color(), palette::ERROR_500);
        assert_eq!(Severity::Warning.color(), palette::WARNING_500);
        assert_eq!(Severity::Info.color(), palette::INFO_500);
    }

    #[test]
    fn layout_tokens_are_positive() {
        assert!(sizing::TOAST_WIDTH > 0.0);
        assert!(spacing::MD > spacing::XS);
    }

    #[test]
    fn explicit_theme_modes_pick_iced_themes() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
