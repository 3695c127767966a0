//! Share control helpers.
//!
//! Uses the Web Share API when the browser exposes `navigator.share`;
//! otherwise the UI falls back to a manual list of deep links (WhatsApp,
//! email, SMS) plus clipboard copy. Branching is purely on platform
//! capability.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Text being shared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareContent {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl ShareContent {
    /// Body used by the manual channels: text followed by the link, if any.
    pub fn message(&self) -> String {
        match self.url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => format!("{}\n{url}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Manual fallback channels, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareChannel {
    WhatsApp,
    Email,
    Sms,
}

impl ShareChannel {
    pub const ALL: [Self; 3] = [Self::WhatsApp, Self::Email, Self::Sms];

    pub fn label(self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Email => "Email",
            Self::Sms => "SMS",
        }
    }

    /// Deep link opening the channel with `content` prefilled.
    pub fn link(self, content: &ShareContent) -> String {
        let message = content.message();
        match self {
            Self::WhatsApp => format!("https://wa.me/?text={}", urlencoding::encode(&message)),
            Self::Email => format!(
                "mailto:?subject={}&body={}",
                urlencoding::encode(&content.title),
                urlencoding::encode(&message)
            ),
            Self::Sms => format!("sms:?body={}", urlencoding::encode(&message)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("not supported in this browser")]
    Unsupported,
    #[error("share failed: {0}")]
    Failed(String),
}

/// Whether the browser exposes `navigator.share`.
pub fn native_share_supported() -> bool {
    #[cfg(feature = "hydrate")]
    {
        navigator_method("share").is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Open the platform share sheet.
///
/// # Errors
///
/// Returns `ShareError::Unsupported` without the Web Share API, or
/// `ShareError::Failed` if the user cancels or the browser rejects the data.
pub async fn share_native(content: &ShareContent) -> Result<(), ShareError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let (navigator, share) = navigator_method("share").ok_or(ShareError::Unsupported)?;
        let data = js_sys::Object::new();
        let set = |key: &str, value: &str| {
            let _ = js_sys::Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value));
        };
        set("title", &content.title);
        set("text", &content.text);
        if let Some(url) = content.url.as_deref() {
            set("url", url);
        }
        let promise = share
            .call1(&navigator, &data)
            .map_err(|e| ShareError::Failed(format!("{e:?}")))?;
        wasm_bindgen_futures::JsFuture::from(js_sys::Promise::from(promise))
            .await
            .map(|_| ())
            .map_err(|e| ShareError::Failed(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = content;
        Err(ShareError::Unsupported)
    }
}

/// Address of the page being viewed, for inclusion in shared text.
pub fn current_page_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().href().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Copy `text` to the clipboard, resolving once the browser accepted it.
///
/// # Errors
///
/// `ShareError::Unsupported` when no clipboard is exposed (e.g. an insecure
/// origin), or `ShareError::Failed` when the browser rejects the write.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ShareError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;
        let navigator = web_sys::window().ok_or(ShareError::Unsupported)?.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &wasm_bindgen::JsValue::from_str("clipboard"))
            .ok()
            .and_then(|value| value.dyn_into::<web_sys::Clipboard>().ok())
            .ok_or(ShareError::Unsupported)?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ShareError::Failed(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ShareError::Unsupported)
    }
}

#[cfg(feature = "hydrate")]
fn navigator_method(name: &str) -> Option<(web_sys::Navigator, js_sys::Function)> {
    use wasm_bindgen::JsCast as _;

    let navigator = web_sys::window()?.navigator();
    let method = js_sys::Reflect::get(&navigator, &wasm_bindgen::JsValue::from_str(name)).ok()?;
    let method = method.dyn_into::<js_sys::Function>().ok()?;
    Some((navigator, method))
}
