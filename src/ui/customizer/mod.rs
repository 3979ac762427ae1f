// SPDX-License-Identifier: MPL-2.0
//! Customization form component.
//!
//! Owns the editable [`FormState`], the custom text editor buffer and the
//! inline field errors. The parent routes [`Message`]s here and reacts to the
//! returned [`Effect`]: opening the file picker, or entering the saved phase
//! after a valid submission.
//!
//! While plain Alt is held the number fields ignore edits, and the text
//! editor drops the Alt+Q key press, so the theme shortcut never types into
//! the form.
//!
//! Errors are only computed on submit. After a rejected submission every
//! edit re-validates, so a message disappears as soon as its field is fixed.

mod view;

pub use view::{view, ViewContext};

use crate::domain::validation::{self, Customization, Field, FieldError, FieldErrors};
use crate::domain::{Build, FormState};
use crate::media::SelectedImage;
use crate::ui::theme;
use iced::keyboard::Modifiers;
use iced::widget::text_editor;
use std::fmt;

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    HeightChanged(String),
    WeightChanged(String),
    BuildSelected(Build),
    TextEdited(text_editor::Action),
    ClearText,
    BrowseImage,
    Submit,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The user asked for the native image picker.
    OpenImageDialog,
    /// The form was valid; it has already been reset.
    Submitted(Customization),
    /// The form was invalid; errors are now shown inline.
    Rejected,
}

/// Form component state.
pub struct State {
    form: FormState,
    text: text_editor::Content,
    errors: FieldErrors,
    /// Set by a rejected submission, cleared by a successful one.
    revalidate_on_edit: bool,
    alt_held: bool,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("form", &self.form)
            .field("errors", &self.errors)
            .field("revalidate_on_edit", &self.revalidate_on_edit)
            .field("alt_held", &self.alt_held)
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        let form = FormState::default();
        let text = text_editor::Content::with_text(&form.custom_text);
        Self {
            form,
            text,
            errors: FieldErrors::default(),
            revalidate_on_edit: false,
            alt_held: false,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn text_content(&self) -> &text_editor::Content {
        &self.text
    }

    /// Error currently shown for a field, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Replaces the selected image after a successful load.
    pub fn set_image(&mut self, image: SelectedImage) {
        self.form.selected_image = Some(image);
    }

    /// Tracks the keyboard modifiers reported by the window.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.alt_held = theme::is_plain_alt(modifiers);
    }

    /// Handles a form message.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::HeightChanged(_) | Message::WeightChanged(_) if self.alt_held => {
                tracing::trace!("number field edit ignored while Alt is held");
                Effect::None
            }
            Message::HeightChanged(value) => {
                self.form.height = value;
                self.after_edit();
                Effect::None
            }
            Message::WeightChanged(value) => {
                self.form.weight = value;
                self.after_edit();
                Effect::None
            }
            Message::BuildSelected(build) => {
                self.form.build = Some(build);
                self.after_edit();
                Effect::None
            }
            Message::TextEdited(action) => {
                let is_edit = action.is_edit();
                self.text.perform(action);
                if is_edit {
                    self.sync_text();
                    self.after_edit();
                }
                Effect::None
            }
            Message::ClearText => {
                self.text = text_editor::Content::new();
                self.sync_text();
                self.after_edit();
                Effect::None
            }
            Message::BrowseImage => Effect::OpenImageDialog,
            Message::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Effect {
        match validation::validate(&self.form) {
            Ok(customization) => {
                self.reset();
                Effect::Submitted(customization)
            }
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "submission rejected");
                self.errors = errors;
                self.revalidate_on_edit = true;
                Effect::Rejected
            }
        }
    }

    /// Back to a fresh form: default values, no image, no errors.
    fn reset(&mut self) {
        self.form.reset();
        self.text = text_editor::Content::with_text(&self.form.custom_text);
        self.errors = FieldErrors::default();
        self.revalidate_on_edit = false;
    }

    /// Copies the editor buffer into the form with `\n` line endings only,
    /// so the line count matches what the editor shows.
    fn sync_text(&mut self) {
        self.form.custom_text = self.text.text().replace("\r\n", "\n").replace('\r', "\n");
    }

    fn after_edit(&mut self) {
        if self.revalidate_on_edit {
            self.errors = match validation::validate(&self.form) {
                Ok(_) => FieldErrors::default(),
                Err(errors) => errors,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Size;

    #[test]
    fn new_state_has_default_form_and_no_errors() {
        let state = State::new();
        assert_eq!(state.form(), &FormState::default());
        assert!(!state.has_errors());
    }

    #[test]
    fn edits_update_form_fields() {
        let mut state = State::new();
        state.update(Message::HeightChanged("175".into()));
        state.update(Message::WeightChanged("95".into()));
        state.update(Message::BuildSelected(Build::Big));

        assert_eq!(state.form().height, "175");
        assert_eq!(state.form().weight, "95");
        assert_eq!(state.form().build, Some(Build::Big));
        assert_eq!(state.form().recommended_size(), Size::XL);
    }

    #[test]
    fn errors_are_hidden_until_submit() {
        let mut state = State::new();
        state.update(Message::HeightChanged("20".into()));
        assert!(!state.has_errors());

        let effect = state.update(Message::Submit);
        assert_eq!(effect, Effect::Rejected);
        assert_eq!(state.error(Field::Height), Some(FieldError::HeightOutOfRange));
    }

    #[test]
    fn errors_clear_as_soon_as_field_is_fixed() {
        let mut state = State::new();
        state.update(Message::HeightChanged("20".into()));
        state.update(Message::WeightChanged("5".into()));
        state.update(Message::Submit);
        assert!(state.error(Field::Height).is_some());
        assert!(state.error(Field::Weight).is_some());

        state.update(Message::HeightChanged("170".into()));
        assert!(state.error(Field::Height).is_none());
        assert!(state.error(Field::Weight).is_some());

        state.update(Message::WeightChanged("70".into()));
        assert!(!state.has_errors());
    }

    #[test]
    fn rejected_submit_keeps_input() {
        let mut state = State::new();
        state.update(Message::HeightChanged("999".into()));
        state.update(Message::BuildSelected(Build::Lean));
        state.update(Message::Submit);

        assert_eq!(state.form().height, "999");
        assert_eq!(state.form().build, Some(Build::Lean));
    }

    #[test]
    fn valid_submit_resets_everything() {
        let mut state = State::new();
        state.update(Message::HeightChanged("175".into()));
        state.update(Message::WeightChanged("95".into()));
        state.update(Message::BuildSelected(Build::Big));
        state.set_image(SelectedImage::from_rgba("front.png", 4, 1, 1, vec![0; 4]));

        let effect = state.update(Message::Submit);
        match effect {
            Effect::Submitted(customization) => {
                assert_eq!(customization.height_cm, 175);
                assert_eq!(customization.weight_kg, 95);
                assert_eq!(customization.build, Build::Big);
                assert_eq!(customization.recommended_size, Size::XL);
                assert_eq!(customization.image_name.as_deref(), Some("front.png"));
            }
            other => panic!("expected submission, got {other:?}"),
        }

        assert_eq!(state.form(), &FormState::default());
        assert!(state.text_content().text().is_empty());
        assert!(!state.has_errors());
    }

    #[test]
    fn successful_submit_stops_revalidation() {
        let mut state = State::new();
        state.update(Message::HeightChanged("20".into()));
        state.update(Message::Submit);
        state.update(Message::HeightChanged("180".into()));
        assert!(matches!(state.update(Message::Submit), Effect::Submitted(_)));

        state.update(Message::HeightChanged("20".into()));
        assert!(!state.has_errors());
    }

    #[test]
    fn typing_text_updates_custom_text() {
        let mut state = State::new();
        for c in "Hi".chars() {
            state.update(Message::TextEdited(text_editor::Action::Edit(
                text_editor::Edit::Insert(c),
            )));
        }
        assert_eq!(state.form().custom_text, "Hi");
    }

    #[test]
    fn clear_text_empties_editor_and_form() {
        let mut state = State::new();
        state.update(Message::TextEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new("Team Tee".to_string())),
        )));
        assert_eq!(state.form().custom_text, "Team Tee");

        state.update(Message::ClearText);
        assert!(state.form().custom_text.is_empty());
        assert!(state.text_content().text().is_empty());
    }

    #[test]
    fn too_many_lines_is_reported_after_submit() {
        let mut state = State::new();
        state.update(Message::TextEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new("1\n2\n3\n4".to_string())),
        )));
        state.update(Message::Submit);
        assert_eq!(
            state.error(Field::CustomText),
            Some(FieldError::TooManyLines)
        );
    }

    #[test]
    fn carriage_returns_count_as_line_breaks() {
        let mut state = State::new();
        state.update(Message::TextEdited(text_editor::Action::Edit(
            text_editor::Edit::Paste(std::sync::Arc::new("1\r2\r3\r4".to_string())),
        )));
        assert!(!state.form().custom_text.contains('\r'));
        assert_eq!(state.form().custom_text.split('\n').count(), 4);

        assert_eq!(state.update(Message::Submit), Effect::Rejected);
        assert_eq!(
            state.error(Field::CustomText),
            Some(FieldError::TooManyLines)
        );
    }

    #[test]
    fn number_fields_ignore_input_while_alt_is_held() {
        let mut state = State::new();
        state.update(Message::HeightChanged("17".into()));

        state.set_modifiers(Modifiers::ALT);
        state.update(Message::HeightChanged("17q".into()));
        state.update(Message::WeightChanged("œ".into()));
        assert_eq!(state.form().height, "17");
        assert_eq!(state.form().weight, FormState::default().weight);

        state.set_modifiers(Modifiers::empty());
        state.update(Message::HeightChanged("175".into()));
        assert_eq!(state.form().height, "175");
    }

    #[test]
    fn altgr_typing_still_reaches_number_fields() {
        let mut state = State::new();
        state.set_modifiers(Modifiers::ALT | Modifiers::CTRL);
        state.update(Message::WeightChanged("72".into()));
        assert_eq!(state.form().weight, "72");
    }

    #[test]
    fn browse_requests_dialog() {
        let mut state = State::new();
        assert_eq!(state.update(Message::BrowseImage), Effect::OpenImageDialog);
    }
}
