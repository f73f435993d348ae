//! Single-line text input with label, validation display, and optional
//! clear / password-visibility affordances.
//!
//! The caller owns the text value and passes it in as `&mut String`; edits
//! (keystrokes and the clear affordance alike) report through
//! [`egui::Response::changed`]. The only state the control keeps for itself
//! is whether a password field is currently revealed, held in egui temp
//! memory so the caller never has to carry it.

use egui::{
    Button, Color32, FontId, Frame, Id, Label, Margin, Response, RichText, Sense, Stroke, TextEdit,
    Ui, WidgetInfo, WidgetType,
};

/// Red for error text and the invalid border.
const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);
/// Muted gray for helper text.
const COLOR_HELPER: Color32 = Color32::from_rgb(130, 130, 130);
/// Opacity applied to the field while loading.
const LOADING_OPACITY: f32 = 0.6;

/// Visual treatment of the input's background and border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputVariant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

/// Overall control size: font plus inner padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    fn font(self) -> FontId {
        match self {
            Self::Small => FontId::proportional(13.0),
            Self::Medium => FontId::proportional(15.0),
            Self::Large => FontId::proportional(18.0),
        }
    }

    fn padding(self) -> Margin {
        match self {
            Self::Small => Margin::symmetric(8, 5),
            Self::Medium => Margin::symmetric(10, 7),
            Self::Large => Margin::symmetric(12, 9),
        }
    }
}

/// A labeled single-line text input.
///
/// ```no_run
/// # use gridform_ui::InputField;
/// # fn demo(ui: &mut egui::Ui, name: &mut String) {
/// let response = InputField::new(name)
///     .label("Your Name")
///     .placeholder("Enter your name")
///     .helper_text("Shown on your profile")
///     .show(ui);
/// if response.changed() {
///     // `name` already holds the edited text
/// }
/// # }
/// ```
#[must_use = "call show(ui) to render the input"]
pub struct InputField<'a> {
    value: &'a mut String,
    label: Option<String>,
    placeholder: Option<String>,
    helper_text: Option<String>,
    error_message: Option<String>,
    invalid: bool,
    disabled: bool,
    loading: bool,
    variant: InputVariant,
    size: InputSize,
    enable_clear: bool,
    enable_password_toggle: bool,
    password: bool,
    id_salt: Option<Id>,
}

impl<'a> InputField<'a> {
    pub fn new(value: &'a mut String) -> Self {
        Self {
            value,
            label: None,
            placeholder: None,
            helper_text: None,
            error_message: None,
            invalid: false,
            disabled: false,
            loading: false,
            variant: InputVariant::default(),
            size: InputSize::default(),
            enable_clear: true,
            enable_password_toggle: false,
            password: false,
            id_salt: None,
        }
    }

    /// Label rendered above the field. Clicking it focuses the input, and
    /// the label is associated with the input for assistive technology.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Shown below the field while the input is not invalid.
    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Shown below the field instead of the helper text while invalid.
    pub fn error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Dims the field and suppresses the clear affordance.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    /// Shows a small clear button while there is a value. On by default.
    pub fn enable_clear(mut self, enable_clear: bool) -> Self {
        self.enable_clear = enable_clear;
        self
    }

    /// Adds a show/hide toggle to a password field. Off by default.
    pub fn enable_password_toggle(mut self, enable_password_toggle: bool) -> Self {
        self.enable_password_toggle = enable_password_toggle;
        self
    }

    /// Masks the entered text. The mask is display-only; the caller's value
    /// always holds the real text.
    pub fn password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Distinguishes two fields that would otherwise hash to the same id,
    /// e.g. two unlabeled inputs in one container.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let Self {
            value,
            label,
            placeholder,
            helper_text,
            error_message,
            invalid,
            disabled,
            loading,
            variant,
            size,
            enable_clear,
            enable_password_toggle,
            password,
            id_salt,
        } = self;

        let field_id = match id_salt {
            Some(salt) => ui.make_persistent_id(salt),
            None => ui.make_persistent_id(("input_field", label.as_deref().unwrap_or(""))),
        };

        let revealed = enable_password_toggle
            && ui
                .ctx()
                .memory(|mem| mem.data.get_temp::<bool>(field_id).unwrap_or(false));
        let masked = password && !revealed;

        ui.vertical(|ui| {
            let label_response = label.map(|text| {
                let text = if disabled {
                    RichText::new(text).strong().weak()
                } else {
                    RichText::new(text).strong()
                };
                ui.add(Label::new(text).sense(Sense::click()))
            });

            let frame = field_frame(ui, variant, invalid, size);
            let (mut response, cleared) = ui
                .horizontal(|ui| {
                    let text_response = frame
                        .show(ui, |ui| {
                            if loading {
                                ui.set_opacity(LOADING_OPACITY);
                            }
                            let edit = TextEdit::singleline(value)
                                .id(field_id)
                                .hint_text(placeholder.unwrap_or_default())
                                .password(masked)
                                .font(size.font())
                                .frame(false);
                            ui.add_enabled(!disabled, edit)
                        })
                        .inner;

                    // Loading wins over clearability, disabled suppresses it
                    // regardless of value.
                    let show_clear = enable_clear && !value.is_empty() && !disabled && !loading;
                    let mut cleared = false;
                    if show_clear {
                        let clear = ui.add(Button::new("×").frame(false));
                        clear.widget_info(|| {
                            WidgetInfo::labeled(WidgetType::Button, true, "Clear input")
                        });
                        if clear.clicked() {
                            // Emptying the caller's value through the same
                            // path a manual delete takes; there is no
                            // separate clear channel.
                            value.clear();
                            cleared = true;
                        }
                    }

                    if enable_password_toggle && password {
                        let toggle_text = if masked { "Show" } else { "Hide" };
                        let toggle = ui.add(Button::new(RichText::new(toggle_text).small()));
                        toggle.widget_info(|| {
                            let label = if masked { "Show password" } else { "Hide password" };
                            WidgetInfo::labeled(WidgetType::Button, true, label)
                        });
                        if toggle.clicked() {
                            ui.ctx().memory_mut(|mem| mem.data.insert_temp(field_id, masked));
                        }
                    }

                    if loading {
                        ui.spinner();
                    }

                    (text_response, cleared)
                })
                .inner;

            if cleared {
                response.mark_changed();
            }

            if let Some(label_response) = label_response {
                response = response.labelled_by(label_response.id);
                if label_response.clicked() {
                    response.request_focus();
                }
            }

            // Error text replaces helper text while invalid; they never show
            // together.
            if invalid {
                if let Some(message) = error_message {
                    ui.colored_label(COLOR_RED, RichText::new(message).small());
                }
            } else if let Some(helper) = helper_text {
                ui.label(RichText::new(helper).small().color(COLOR_HELPER));
            }

            response
        })
        .inner
    }
}

/// Background and border for the chosen variant; an invalid field always
/// gets the red border.
fn field_frame(ui: &Ui, variant: InputVariant, invalid: bool, size: InputSize) -> Frame {
    let visuals = ui.visuals();

    let fill = match variant {
        InputVariant::Filled => visuals.faint_bg_color,
        InputVariant::Outlined => visuals.extreme_bg_color,
        InputVariant::Ghost => Color32::TRANSPARENT,
    };
    let stroke = if invalid {
        Stroke::new(1.0, COLOR_RED)
    } else if variant == InputVariant::Outlined {
        visuals.widgets.inactive.bg_stroke
    } else {
        Stroke::NONE
    };

    Frame::NONE
        .fill(fill)
        .stroke(stroke)
        .inner_margin(size.padding())
        .corner_radius(4.0)
}

#[cfg(test)]
mod input_field_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    struct FieldState {
        value: String,
        changes: Vec<String>,
    }

    impl FieldState {
        fn with_value(value: &str) -> Self {
            Self {
                value: value.to_owned(),
                changes: Vec::new(),
            }
        }
    }

    #[test]
    fn renders_label_and_helper_text() {
        let harness = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                InputField::new(&mut state.value)
                    .label("Your Name")
                    .placeholder("Enter your name")
                    .helper_text("Shown on your profile")
                    .show(ui);
            },
            FieldState::with_value(""),
        );

        // The label text names both the label widget and, through the
        // association, the input itself.
        assert!(
            harness.query_all_by_label_contains("Your Name").count() >= 1,
            "label should be rendered"
        );
        assert!(
            harness.query_by_label_contains("Shown on your profile").is_some(),
            "helper text should be rendered"
        );
    }

    #[test]
    fn error_message_replaces_helper_text_when_invalid() {
        let harness = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                InputField::new(&mut state.value)
                    .label("Email")
                    .helper_text("We never share this")
                    .error_message("Invalid email")
                    .invalid(true)
                    .show(ui);
            },
            FieldState::with_value("not-an-email"),
        );

        assert!(
            harness.query_by_label_contains("Invalid email").is_some(),
            "error message should be rendered while invalid"
        );
        assert!(
            harness.query_by_label_contains("We never share this").is_none(),
            "helper text must not render at the same time as the error"
        );
    }

    #[test]
    fn helper_text_shows_while_valid_even_with_an_error_supplied() {
        let harness = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                InputField::new(&mut state.value)
                    .helper_text("Helper")
                    .error_message("Never shown")
                    .show(ui);
            },
            FieldState::with_value(""),
        );

        assert!(harness.query_by_label_contains("Helper").is_some());
        assert!(harness.query_by_label_contains("Never shown").is_none());
    }

    #[test]
    fn clear_button_empties_the_value_and_reports_one_change() {
        let mut harness = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                let response = InputField::new(&mut state.value).label("Name").show(ui);
                if response.changed() {
                    state.changes.push(state.value.clone());
                }
            },
            FieldState::with_value("Mah"),
        );

        harness.get_by_label("Clear input").click();
        harness.step();

        assert_eq!(harness.state().value, "", "value should be emptied");
        assert_eq!(
            harness.state().changes,
            vec![String::new()],
            "exactly one change with the empty string should be reported"
        );
    }

    #[test]
    fn clear_button_is_hidden_without_a_value() {
        let harness = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                InputField::new(&mut state.value).label("Name").show(ui);
            },
            FieldState::with_value(""),
        );

        assert!(harness.query_by_label("Clear input").is_none());
    }

    #[test]
    fn loading_and_disabled_suppress_the_clear_button() {
        let loading = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                InputField::new(&mut state.value)
                    .label("Name")
                    .loading(true)
                    .show(ui);
            },
            FieldState::with_value("Mah"),
        );
        assert!(
            loading.query_by_label("Clear input").is_none(),
            "loading takes precedence over clearability"
        );

        let disabled = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                InputField::new(&mut state.value)
                    .label("Name")
                    .disabled(true)
                    .show(ui);
            },
            FieldState::with_value("Mah"),
        );
        assert!(disabled.query_by_label("Clear input").is_none());
    }

    #[test]
    fn password_toggle_flips_masking_without_touching_the_value() {
        let mut harness = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                InputField::new(&mut state.value)
                    .label("Password")
                    .password(true)
                    .enable_password_toggle(true)
                    .show(ui);
            },
            FieldState::with_value("secret"),
        );

        assert!(harness.query_by_label("Show password").is_some());
        assert!(harness.query_by_label("Hide password").is_none());

        harness.get_by_label("Show password").click();
        harness.step();

        assert!(harness.query_by_label("Hide password").is_some());
        assert_eq!(harness.state().value, "secret", "the value never changes");

        harness.get_by_label("Hide password").click();
        harness.step();

        assert!(harness.query_by_label("Show password").is_some());
    }

    #[test]
    fn password_toggle_is_opt_in() {
        let harness = Harness::new_ui_state(
            |ui, state: &mut FieldState| {
                InputField::new(&mut state.value)
                    .label("Password")
                    .password(true)
                    .show(ui);
            },
            FieldState::with_value("secret"),
        );

        assert!(harness.query_by_label("Show password").is_none());
    }
}
