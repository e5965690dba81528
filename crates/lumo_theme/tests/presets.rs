use lumo_theme::{ColorScheme, ColorToken, RadiusToken, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["lumo", "neutral", "slate", "stone", "zinc"]);
}

#[test]
fn preset_ids_parse_back_to_their_preset() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.id().parse::<ThemePreset>().unwrap(), *preset);
    }
    assert!("catppuccin".parse::<ThemePreset>().is_err());
}

#[test]
fn shadcn_like_bundles_have_distinct_light_and_dark_primary() {
    for preset in [
        ThemePreset::Neutral,
        ThemePreset::Stone,
        ThemePreset::Slate,
        ThemePreset::Zinc,
    ] {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);
        let dark = bundle.for_scheme(ColorScheme::Dark);

        assert_ne!(
            light.colors().get(ColorToken::Primary),
            dark.colors().get(ColorToken::Primary),
            "Preset {:?} should have distinct light/dark primary colors",
            preset
        );
    }
}

#[test]
fn shadcn_like_presets_use_expected_radii() {
    for preset in [
        ThemePreset::Neutral,
        ThemePreset::Stone,
        ThemePreset::Slate,
        ThemePreset::Zinc,
    ] {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);

        assert_eq!(
            light.radii().get(RadiusToken::Md),
            10.0,
            "Preset {:?} should use md=10.0",
            preset
        );
        assert_eq!(
            light.radii().get(RadiusToken::Sm),
            6.0,
            "Preset {:?} should use sm=6.0",
            preset
        );
        assert_eq!(
            light.radii().get(RadiusToken::Lg),
            14.0,
            "Preset {:?} should use lg=14.0",
            preset
        );
    }
}

#[test]
fn shadcn_like_presets_use_readable_selection_text() {
    for preset in [
        ThemePreset::Neutral,
        ThemePreset::Stone,
        ThemePreset::Slate,
        ThemePreset::Zinc,
    ] {
        let bundle = preset.bundle();
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = bundle.for_scheme(scheme);
            assert_eq!(
                theme.colors().get(ColorToken::SelectionForeground),
                theme.colors().get(ColorToken::Foreground),
                "preset={preset:?} scheme={scheme:?}"
            );
        }
    }
}

#[test]
fn every_bundle_keeps_scheme_metadata_consistent() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        assert_eq!(
            bundle.for_scheme(ColorScheme::Light).color_scheme(),
            ColorScheme::Light
        );
        assert_eq!(
            bundle.for_scheme(ColorScheme::Dark).color_scheme(),
            ColorScheme::Dark
        );
    }
}

#[test]
fn color_tables_interpolate_between_variants() {
    let bundle = ThemePreset::Lumo.bundle();
    let light = bundle.for_scheme(ColorScheme::Light).colors().clone();
    let dark = bundle.for_scheme(ColorScheme::Dark).colors().clone();

    let mid = lumo_theme::ColorTokens::lerp(&light, &dark, 0.5);
    let bg = mid.get(ColorToken::Background);
    let light_bg = light.get(ColorToken::Background);
    let dark_bg = dark.get(ColorToken::Background);

    assert!((bg.r - (light_bg.r + dark_bg.r) / 2.0).abs() < 1e-5);
    assert!((bg.g - (light_bg.g + dark_bg.g) / 2.0).abs() < 1e-5);
    assert!((bg.b - (light_bg.b + dark_bg.b) / 2.0).abs() < 1e-5);
}
