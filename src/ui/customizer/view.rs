// SPDX-License-Identifier: MPL-2.0
//! Rendering of the customization form and the shirt preview.

use super::{Message, State};
use crate::config::ADVISORY_MAX_IMAGE_MB;
use crate::domain::measurements::text_limits;
use crate::domain::{Build, Field};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::{self, LayoutKind, ThemeTokens};
use crate::ui::widgets::Shirt;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, image, pick_list, scrollable, text_editor, text_input, Column, Container, Row, Space,
    Stack, Text,
};
use iced::{Color, ContentFit, Element, Length};

/// The blank garment and the print ink keep their colors in every theme.
const SHIRT_FILL: Color = palette::GRAY_100;
const SHIRT_OUTLINE: Color = palette::GRAY_500;
const PRINT_INK: Color = palette::GRAY_900;

/// Context for rendering the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub tokens: ThemeTokens,
}

/// Renders the whole page: heading, form card and preview card.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tokens = ctx.tokens;

    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.i18n.tr("app-heading"))
                .size(typography::TITLE_LG)
                .font(tokens.heading_font)
                .color(tokens.colors.heading),
        )
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "theme-hint",
                &[("theme", &ctx.i18n.tr(tokens.id.i18n_key()))],
            ))
            .size(typography::BODY_SM)
            .font(tokens.font)
            .color(tokens.colors.text_secondary),
        );

    let form_card = card(build_form(&ctx), tokens);
    let preview_card = card(build_preview(&ctx), tokens);

    let body: Element<'_, Message> = match tokens.layout {
        LayoutKind::Columns => Row::new()
            .spacing(spacing::LG)
            .push(Container::new(form_card).width(Length::FillPortion(1)))
            .push(Container::new(preview_card).width(Length::FillPortion(1)))
            .into(),
        LayoutKind::Stacked => Column::new()
            .spacing(spacing::LG)
            .push(form_card)
            .push(preview_card)
            .into(),
    };

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::FORM_MAX_WIDTH)
        .push(heading)
        .push(body);

    let centered = Container::new(page)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    Container::new(scrollable(centered).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(tokens))
        .into()
}

fn card<'a>(content: Element<'a, Message>, tokens: ThemeTokens) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(tokens))
        .into()
}

// =============================================================================
// Form
// =============================================================================

fn build_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tokens = ctx.tokens;

    let measurements = Row::new()
        .spacing(spacing::MD)
        .push(
            Container::new(number_field(
                ctx,
                Field::Height,
                "height-label",
                &ctx.state.form().height,
                Message::HeightChanged,
            ))
            .width(Length::FillPortion(1)),
        )
        .push(
            Container::new(number_field(
                ctx,
                Field::Weight,
                "weight-label",
                &ctx.state.form().weight,
                Message::WeightChanged,
            ))
            .width(Length::FillPortion(1)),
        );

    let submit = button(
        Text::new(tokens.button_label(&ctx.i18n.tr("submit-button")))
            .font(tokens.heading_font)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::Submit)
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::button::primary(tokens));

    Column::new()
        .spacing(spacing::LG)
        .push(section_title(ctx, "form-title"))
        .push(build_image_section(ctx))
        .push(measurements)
        .push(build_build_section(ctx))
        .push(build_text_section(ctx))
        .push(build_size_section(ctx))
        .push(submit)
        .into()
}

fn section_title<'a>(ctx: &ViewContext<'a>, key: &str) -> Element<'a, Message> {
    Text::new(ctx.i18n.tr(key))
        .size(typography::TITLE_SM)
        .font(ctx.tokens.heading_font)
        .color(ctx.tokens.colors.heading)
        .into()
}

fn label<'a>(ctx: &ViewContext<'a>, key: &str) -> Text<'a> {
    Text::new(ctx.i18n.tr(key))
        .size(typography::BODY)
        .font(ctx.tokens.heading_font)
        .color(ctx.tokens.colors.text_primary)
}

/// Appends the inline error of a field, if it has one.
fn with_error<'a>(
    column: Column<'a, Message>,
    ctx: &ViewContext<'a>,
    field: Field,
) -> Column<'a, Message> {
    match ctx.state.error(field) {
        Some(error) => column.push(
            Text::new(ctx.i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .font(ctx.tokens.font)
                .color(styles::input::error_text(ctx.tokens)),
        ),
        None => column,
    }
}

fn number_field<'a>(
    ctx: &ViewContext<'a>,
    field: Field,
    label_key: &str,
    value: &str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let invalid = ctx.state.error(field).is_some();
    let input = text_input("", value)
        .on_input(on_input)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .font(ctx.tokens.font)
        .style(styles::input::text_field(ctx.tokens, invalid));

    let column = Column::new()
        .spacing(spacing::XXS)
        .push(label(ctx, label_key))
        .push(input);
    with_error(column, ctx, field).into()
}

fn build_image_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tokens = ctx.tokens;

    let browse = button(
        Text::new(tokens.button_label(&ctx.i18n.tr("upload-browse-button")))
            .font(tokens.font)
            .size(typography::BODY),
    )
    .on_press(Message::BrowseImage)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::secondary(tokens));

    let drop_zone_content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("upload-drop-hint"))
                .size(typography::BODY)
                .font(tokens.font)
                .color(tokens.colors.text_primary),
        )
        .push(browse)
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "upload-size-hint",
                &[("size", &ADVISORY_MAX_IMAGE_MB.to_string())],
            ))
            .size(typography::CAPTION)
            .font(tokens.font)
            .color(tokens.colors.text_secondary),
        );

    let drop_zone = Container::new(drop_zone_content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::drop_zone(tokens));

    let file_label = match &ctx.state.form().selected_image {
        Some(image) => ctx.i18n.tr_with_args(
            "upload-selected-file",
            &[
                ("name", &image.file_name),
                ("width", &image.width.to_string()),
                ("height", &image.height.to_string()),
            ],
        ),
        None => ctx.i18n.tr("upload-no-file"),
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(label(ctx, "upload-label"))
        .push(drop_zone)
        .push(
            Text::new(file_label)
                .size(typography::BODY_SM)
                .font(tokens.font)
                .color(tokens.colors.text_secondary),
        )
        .into()
}

/// Build option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BuildOption {
    build: Build,
    label: String,
}

impl std::fmt::Display for BuildOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn build_build_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let options: Vec<BuildOption> = Build::ALL
        .iter()
        .map(|build| BuildOption {
            build: *build,
            label: ctx.i18n.tr(build.i18n_key()),
        })
        .collect();

    let selected = ctx
        .state
        .form()
        .build
        .and_then(|current| options.iter().find(|opt| opt.build == current).cloned());

    let invalid = ctx.state.error(Field::Build).is_some();
    let picker = pick_list(options, selected, |opt| Message::BuildSelected(opt.build))
        .placeholder(ctx.i18n.tr("build-placeholder"))
        .padding(spacing::XS)
        .width(Length::Fill)
        .font(ctx.tokens.font)
        .style(styles::input::select(ctx.tokens, invalid));

    let column = Column::new()
        .spacing(spacing::XXS)
        .push(label(ctx, "build-label"))
        .push(picker);
    with_error(column, ctx, Field::Build).into()
}

fn build_text_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tokens = ctx.tokens;
    let invalid = ctx.state.error(Field::CustomText).is_some();

    let clear = button(
        Text::new(tokens.button_label(&ctx.i18n.tr("text-clear-button")))
            .font(tokens.font)
            .size(typography::CAPTION),
    )
    .on_press(Message::ClearText)
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::secondary(tokens));

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(label(ctx, "text-label"))
        .push(Space::new().width(Length::Fill))
        .push(clear);

    let editor = text_editor(ctx.state.text_content())
        .placeholder(ctx.i18n.tr("text-placeholder"))
        .on_action(Message::TextEdited)
        .key_binding(editor_key_binding)
        .height(Length::Fixed(sizing::TEXT_EDITOR_HEIGHT))
        .padding(spacing::XS)
        .font(tokens.font)
        .style(styles::input::editor(tokens, invalid));

    let count = ctx.state.form().custom_text.chars().count();
    let counter = Text::new(ctx.i18n.tr_with_args(
        "text-char-count",
        &[
            ("count", &count.to_string()),
            ("max", &text_limits::MAX_CHARS.to_string()),
        ],
    ))
    .size(typography::CAPTION)
    .font(tokens.font)
    .color(if count > text_limits::MAX_CHARS {
        tokens.colors.error
    } else {
        tokens.colors.text_secondary
    });

    let column = Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(editor)
        .push(counter);
    with_error(column, ctx, Field::CustomText).into()
}

/// Default editor bindings, minus the theme shortcut.
fn editor_key_binding(key_press: text_editor::KeyPress) -> Option<text_editor::Binding<Message>> {
    if theme::is_cycle_shortcut(&key_press.key, key_press.modifiers) {
        None
    } else {
        text_editor::Binding::from_key_press(key_press)
    }
}

fn build_size_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tokens = ctx.tokens;
    let size = ctx.state.form().recommended_size();

    let badge = Container::new(
        Text::new(size.label())
            .size(typography::TITLE_SM)
            .font(tokens.heading_font),
    )
    .padding([spacing::XXS, spacing::MD])
    .style(styles::container::size_badge(tokens));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(label(ctx, "size-label"))
        .push(badge)
        .into()
}

// =============================================================================
// Preview
// =============================================================================

fn build_preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tokens = ctx.tokens;
    let form = ctx.state.form();

    let base: Element<'a, Message> = match &form.selected_image {
        Some(selected) => image(selected.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(
            Shirt::new(SHIRT_FILL, SHIRT_OUTLINE).into_fill_element(),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
    };

    let mut stack = Stack::new().push(base);

    if form.has_custom_text() {
        stack = stack.push(print_overlay(ctx, &form.custom_text));
    }

    let surface = Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
        .style(styles::container::preview(tokens));

    Column::new()
        .spacing(spacing::MD)
        .push(section_title(ctx, "preview-title"))
        .push(surface)
        .into()
}

/// Custom text centered over the lower half, wrapped to 60% of the width.
fn print_overlay<'a>(ctx: &ViewContext<'a>, custom_text: &str) -> Element<'a, Message> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let text_portion = (sizing::PREVIEW_TEXT_WIDTH_RATIO * 10.0).round() as u16;
    let side_portion = (10 - text_portion) / 2;

    let print = Text::new(custom_text.to_owned())
        .size(typography::BODY_LG)
        .font(ctx.tokens.heading_font)
        .color(PRINT_INK)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let row = Row::new()
        .push(Space::new().width(Length::FillPortion(side_portion)))
        .push(Container::new(print).width(Length::FillPortion(text_portion)))
        .push(Space::new().width(Length::FillPortion(side_portion)));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Space::new().height(Length::FillPortion(1)))
        .push(
            Container::new(row)
                .width(Length::Fill)
                .height(Length::FillPortion(1))
                .align_y(Vertical::Center),
        )
        .into()
}
