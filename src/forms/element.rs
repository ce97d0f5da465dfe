//! Elements that can be placed on a [`Custom`](super::Custom) form.
//!
//! Every element serializes to a `{"type": ..., "text": ...}` object and validates
//! the single value the client sends back for it. Texts may contain Minecraft
//! formatting codes.

use serde::Serialize;
use serde_json::Value;

use crate::errors::FormError;

pub type TextCallback = Box<dyn FnMut(String) + Send>;
pub type ToggleCallback = Box<dyn FnMut(bool) + Send>;
pub type SliderCallback = Box<dyn FnMut(f64) + Send>;
pub type ChoiceCallback = Box<dyn FnMut(usize, String) + Send>;

/// An element of a custom form.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Label(Label),
    Input(Input),
    Toggle(Toggle),
    Slider(Slider),
    Dropdown(Dropdown),
    StepSlider(StepSlider),
}

/// A response value that passed validation but has not been handed to a callback yet.
pub(crate) enum Submitted {
    Ignored,
    Text(String),
    Enabled(bool),
    Number(f64),
    Choice(usize),
}

impl Element {
    /// The `type` tag the element is serialized with.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Label(_) => "label",
            Element::Input(_) => "input",
            Element::Toggle(_) => "toggle",
            Element::Slider(_) => "slider",
            Element::Dropdown(_) => "dropdown",
            Element::StepSlider(_) => "step_slider",
        }
    }

    /// Validate `value` and pass it to the element's callback.
    ///
    /// # Errors
    ///
    /// Returns an error when the value has the wrong type or is out of range.
    pub fn submit(&mut self, value: &Value) -> Result<(), FormError> {
        let submitted = self.validate(value)?;
        self.dispatch(submitted);
        Ok(())
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<Submitted, FormError> {
        match self {
            Element::Label(_) => Ok(Submitted::Ignored),
            Element::Input(_) => value
                .as_str()
                .map(|text| Submitted::Text(text.to_string()))
                .ok_or_else(|| FormError::invalid("input", value)),
            Element::Toggle(_) => value
                .as_bool()
                .map(Submitted::Enabled)
                .ok_or_else(|| FormError::invalid("toggle", value)),
            Element::Slider(s) => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| FormError::invalid("slider", value))?;
                if number < s.min || number > s.max {
                    return Err(FormError::out_of_range("slider", number, s.min, s.max));
                }
                Ok(Submitted::Number(number))
            }
            Element::Dropdown(d) => choose("dropdown", value, &d.options).map(Submitted::Choice),
            Element::StepSlider(s) => {
                choose("step slider", value, &s.steps).map(Submitted::Choice)
            }
        }
    }

    pub(crate) fn dispatch(&mut self, submitted: Submitted) {
        match (self, submitted) {
            (Element::Input(i), Submitted::Text(text)) => {
                if let Some(callback) = i.submit.as_mut() {
                    callback(text);
                }
            }
            (Element::Toggle(t), Submitted::Enabled(enabled)) => {
                if let Some(callback) = t.submit.as_mut() {
                    callback(enabled);
                }
            }
            (Element::Slider(s), Submitted::Number(number)) => {
                if let Some(callback) = s.submit.as_mut() {
                    callback(number);
                }
            }
            (Element::Dropdown(d), Submitted::Choice(index)) => {
                if let Some(callback) = d.submit.as_mut() {
                    callback(index, d.options[index].clone());
                }
            }
            (Element::StepSlider(s), Submitted::Choice(index)) => {
                if let Some(callback) = s.submit.as_mut() {
                    callback(index, s.steps[index].clone());
                }
            }
            _ => {}
        }
    }
}

fn choose(element: &'static str, value: &Value, options: &[String]) -> Result<usize, FormError> {
    let index = value
        .as_i64()
        .ok_or_else(|| FormError::invalid(element, value))?;
    usize::try_from(index)
        .ok()
        .filter(|&i| i < options.len())
        .ok_or_else(|| FormError::out_of_range(element, index, 0, options.len() as i64 - 1))
}

/// A static box of text. Clients send `null` for labels and the value is ignored.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A text input box. Any text of any length may be submitted.
#[derive(Default, Serialize)]
pub struct Input {
    pub text: String,
    /// Text already filled out in the box when the form opens.
    pub default: String,
    /// Shown while the box is empty.
    pub placeholder: String,
    /// Called with the submitted text. Not called when the form is closed.
    #[serde(skip)]
    pub submit: Option<TextCallback>,
}

impl Input {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(String) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }
}

/// An on/off switch.
#[derive(Default, Serialize)]
pub struct Toggle {
    pub text: String,
    pub default: bool,
    #[serde(skip)]
    pub submit: Option<ToggleCallback>,
}

impl Toggle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(bool) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }
}

/// A slider selecting a number between `min` and `max`, moving `step` at a time.
#[derive(Serialize)]
pub struct Slider {
    pub text: String,
    pub min: f64,
    pub max: f64,
    /// With a step of 1.0 only whole values can be selected.
    #[serde(rename = "step")]
    pub step_size: f64,
    pub default: f64,
    #[serde(skip)]
    pub submit: Option<SliderCallback>,
}

impl Slider {
    /// A slider over `min..=max` with a step of 1.0, starting at `min`.
    pub fn new(text: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            text: text.into(),
            min,
            max,
            step_size: 1.0,
            default: min,
            submit: None,
        }
    }

    #[must_use]
    pub fn with_step(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: f64) -> Self {
        self.default = default;
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(f64) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }
}

/// A dropdown holding a list of options, shown in order. One option may be selected.
#[derive(Default, Serialize)]
pub struct Dropdown {
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options` selected when the form opens.
    #[serde(rename = "default")]
    pub default_index: usize,
    #[serde(skip)]
    pub submit: Option<ChoiceCallback>,
}

impl Dropdown {
    pub fn new<I, S>(text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_default(mut self, default_index: usize) -> Self {
        self.default_index = default_index;
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(usize, String) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }
}

/// Looks like a slider but selects one of `steps`, the same way a [`Dropdown`] does.
#[derive(Default, Serialize)]
pub struct StepSlider {
    pub text: String,
    pub steps: Vec<String>,
    #[serde(rename = "default")]
    pub default_index: usize,
    #[serde(skip)]
    pub submit: Option<ChoiceCallback>,
}

impl StepSlider {
    pub fn new<I, S>(text: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            steps: steps.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_default(mut self, default_index: usize) -> Self {
        self.default_index = default_index;
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(usize, String) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }
}

impl From<Label> for Element {
    fn from(label: Label) -> Self {
        Element::Label(label)
    }
}

impl From<Input> for Element {
    fn from(input: Input) -> Self {
        Element::Input(input)
    }
}

impl From<Toggle> for Element {
    fn from(toggle: Toggle) -> Self {
        Element::Toggle(toggle)
    }
}

impl From<Slider> for Element {
    fn from(slider: Slider) -> Self {
        Element::Slider(slider)
    }
}

impl From<Dropdown> for Element {
    fn from(dropdown: Dropdown) -> Self {
        Element::Dropdown(dropdown)
    }
}

impl From<StepSlider> for Element {
    fn from(step_slider: StepSlider) -> Self {
        Element::StepSlider(step_slider)
    }
}
