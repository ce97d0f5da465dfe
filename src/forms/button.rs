use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::json;

pub type ButtonCallback<Ctx> = Box<dyn FnMut(&mut Ctx) + Send>;

/// A button on a [`Menu`](super::Menu) or [`Modal`](super::Modal) form.
///
/// The text may use formatting codes and newlines. `image` is either a URL such as
/// `https://example.com/icon.png` or a path to a local asset such as
/// `textures/blocks/grass_carried`. Modals never show the image.
pub struct Button<Ctx = ()> {
    pub text: String,
    pub image: Option<String>,
    /// Called with the caller's context when the button is clicked, before the form's
    /// own callback.
    pub submit: Option<ButtonCallback<Ctx>>,
}

impl<Ctx> Default for Button<Ctx> {
    fn default() -> Self {
        Self {
            text: String::new(),
            image: None,
            submit: None,
        }
    }
}

impl<Ctx> Button<Ctx> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        self.image = (!image.is_empty()).then_some(image);
        self
    }

    #[must_use]
    pub fn on_submit(mut self, callback: impl FnMut(&mut Ctx) + Send + 'static) -> Self {
        self.submit = Some(Box::new(callback));
        self
    }

    pub(crate) fn press(&mut self, ctx: &mut Ctx) {
        if let Some(callback) = self.submit.as_mut() {
            callback(ctx);
        }
    }
}

/// `"url"` for images fetched over HTTP, `"path"` for local assets.
#[must_use]
pub fn image_type(image: &str) -> &'static str {
    if image.starts_with("http:") || image.starts_with("https:") {
        "url"
    } else {
        "path"
    }
}

impl<Ctx> Serialize for Button<Ctx> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let image = self.image.as_deref().filter(|i| !i.is_empty());
        let mut map = serializer.serialize_map(Some(if image.is_some() { 2 } else { 1 }))?;
        map.serialize_entry("text", &self.text)?;
        if let Some(image) = image {
            map.serialize_entry("image", &json!({ "type": image_type(image), "data": image }))?;
        }
        map.end()
    }
}
