// SPDX-License-Identifier: MPL-2.0
use std::fs;
use tee_studio::config::{self, Config, CONFIG_LOAD_WARNING_KEY};
use tee_studio::domain::validation::{self, FieldError};
use tee_studio::domain::{Build, Field, FormState, Size};
use tee_studio::error::Error;
use tee_studio::i18n::fluent::I18n;
use tee_studio::media::{self, SelectedImage};
use tee_studio::ui::theme::ThemeId;
use tempfile::tempdir;

/// Every key the interface asks for.
const UI_KEYS: &[&str] = &[
    "window-title",
    "app-heading",
    "theme-default",
    "theme-retro",
    "theme-futuristic",
    "form-title",
    "upload-label",
    "upload-drop-hint",
    "upload-browse-button",
    "upload-no-file",
    "file-dialog-filter-name",
    "height-label",
    "weight-label",
    "build-label",
    "build-placeholder",
    "build-lean",
    "build-regular",
    "build-athletic",
    "build-big",
    "text-label",
    "text-placeholder",
    "text-clear-button",
    "size-label",
    "submit-button",
    "preview-title",
    "error-height-required",
    "error-height-range",
    "error-weight-required",
    "error-weight-range",
    "error-build-required",
    "error-text-too-long",
    "error-text-too-many-lines",
    "loading-heading",
    "saved-title",
    "saved-message",
    "saved-footer",
    "notification-tag-info",
    "notification-tag-warning",
    "notification-tag-error",
    "notification-config-load-error",
];

/// Keys that take arguments, with sample values for each argument.
const ARG_KEYS: &[(&str, &[(&str, &str)])] = &[
    ("theme-hint", &[("theme", "Retro")]),
    ("upload-size-hint", &[("size", "10")]),
    (
        "upload-selected-file",
        &[("name", "front.png"), ("width", "640"), ("height", "480")],
    ),
    ("text-char-count", &[("count", "12"), ("max", "100")]),
    ("notification-theme-changed", &[("theme", "Retro")]),
    ("notification-image-read-error", &[("file", "a.png")]),
    ("notification-image-decode-error", &[("file", "b.png")]),
];

fn write_settings(dir: &std::path::Path, content: &str) {
    fs::write(dir.join("settings.toml"), content).expect("write settings");
}

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    write_settings(dir.path(), "[general]\nlanguage = \"en-US\"\n");
    let (config_en, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let i18n_en = I18n::new(None, &config_en);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    write_settings(dir.path(), "[general]\nlanguage = \"fr\"\n");
    let (config_fr, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let i18n_fr = I18n::new(None, &config_fr);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // The command line wins over the file.
    let i18n_cli = I18n::new(Some("en-US".to_string()), &config_fr);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn startup_theme_comes_from_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_settings(dir.path(), "[general]\ntheme = \"futuristic\"\n");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme, ThemeId::Futuristic);
    assert_eq!(config.general.log_level, config::DEFAULT_LOG_LEVEL);
}

#[test]
fn malformed_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_settings(dir.path(), "[general\ntheme = ");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
}

#[test]
fn missing_config_is_silent() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn every_ui_key_is_translated() {
    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for key in UI_KEYS {
            let value = i18n.tr(key);
            assert!(!value.starts_with("MISSING"), "{locale}: {key}");
        }
    }
}

#[test]
fn keyed_messages_interpolate_their_arguments() {
    for locale in ["en-US", "fr"] {
        let i18n = I18n::new(Some(locale.to_string()), &Config::default());
        for (key, args) in ARG_KEYS {
            let value = i18n.tr_with_args(key, args);
            assert!(!value.starts_with("MISSING"), "{locale}: {key}");
            for (_, sample) in *args {
                assert!(value.contains(sample), "{locale}: {key}: {value}");
            }
        }
    }
}

#[test]
fn documented_examples_recommend_expected_sizes() {
    let mut form = FormState {
        height: "175".into(),
        weight: "95".into(),
        build: Some(Build::Big),
        ..FormState::default()
    };
    let customization = validation::validate(&form).expect("valid form");
    assert_eq!(customization.recommended_size, Size::XL);

    form.weight = "70".into();
    form.build = Some(Build::Lean);
    let customization = validation::validate(&form).expect("valid form");
    assert_eq!(customization.recommended_size, Size::M);
}

#[test]
fn invalid_form_reports_every_failing_field() {
    let form = FormState {
        height: String::new(),
        weight: "250".into(),
        build: None,
        custom_text: "a\nb\nc\nd".into(),
        selected_image: None,
    };

    let errors = validation::validate(&form).expect_err("invalid form");
    assert_eq!(errors.get(Field::Height), Some(FieldError::HeightRequired));
    assert_eq!(errors.get(Field::Weight), Some(FieldError::WeightOutOfRange));
    assert_eq!(errors.get(Field::Build), Some(FieldError::BuildMissing));
    assert_eq!(errors.get(Field::CustomText), Some(FieldError::TooManyLines));
}

#[tokio::test]
async fn image_file_loads_with_name_and_dimensions() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("artwork.png");
    image_rs::RgbaImage::from_pixel(4, 3, image_rs::Rgba([200, 30, 30, 255]))
        .save(&path)
        .expect("write png");

    let image: SelectedImage = media::load_image(&path).await.expect("decodable png");
    assert_eq!(image.file_name, "artwork.png");
    assert_eq!((image.width, image.height), (4, 3));
    assert!(image.byte_len > 0);
}

#[tokio::test]
async fn garbage_file_is_an_image_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("not-really.png");
    fs::write(&path, b"definitely not a png").expect("write garbage");

    let err = media::load_image(&path).await.expect_err("garbage bytes");
    assert!(matches!(err, Error::Image(_)));
    assert_eq!(err.i18n_key(), "notification-image-decode-error");
}
