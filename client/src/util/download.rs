//! PDF report downloads.
//!
//! The backend renders the PDF; the client only names the file and hands the
//! bytes to the browser through a transient object URL. Saving a file never
//! touches page data state.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use time::Date;
use time::macros::format_description;

/// Per-customer report flavours served by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    /// Coverage breakdown plus recommendations.
    NeedsAnalysis,
    /// Full advisory report including market context.
    Comprehensive,
}

impl ReportKind {
    fn file_prefix(self) -> &'static str {
        match self {
            Self::NeedsAnalysis => "needs_analysis",
            Self::Comprehensive => "comprehensive_report",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NeedsAnalysis => "Download needs analysis PDF",
            Self::Comprehensive => "Download full report PDF",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("browser download failed: {0}")]
    Browser(String),
    #[error("downloads are only available in the browser")]
    Unavailable,
}

/// File name embedding the customer name and the given date, e.g.
/// `needs_analysis_Asha_Rao_2026-10-18.pdf`.
pub fn report_filename(kind: ReportKind, customer_name: &str, on: Date) -> String {
    format!("{}_{}_{}.pdf", kind.file_prefix(), file_safe_name(customer_name), iso_date(on))
}

pub fn comparison_filename(on: Date) -> String {
    format!("product_comparison_{}.pdf", iso_date(on))
}

fn iso_date(on: Date) -> String {
    on.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| on.to_string())
}

/// Collapse whitespace to `_` and drop characters that are unsafe in file names.
fn file_safe_name(name: &str) -> String {
    let joined = name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '.'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if joined.is_empty() { "customer".to_owned() } else { joined }
}

/// Hand PDF bytes to the browser as a file download.
///
/// # Errors
///
/// Returns `DownloadError::Browser` if any DOM step fails, or
/// `DownloadError::Unavailable` outside the browser.
pub fn save_pdf(bytes: &[u8], filename: &str) -> Result<(), DownloadError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let js_err = |e: wasm_bindgen::JsValue| DownloadError::Browser(format!("{e:?}"));

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/pdf");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DownloadError::Browser("no document".to_owned()))?;
        let body = document
            .body()
            .ok_or_else(|| DownloadError::Browser("no document body".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| DownloadError::Browser("anchor cast failed".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        body.append_child(&anchor).map_err(js_err)?;
        anchor.click();
        anchor.remove();
        let _ = web_sys::Url::revoke_object_url(&url);
        leptos::logging::log!("saved {filename} ({} bytes)", bytes.len());
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename);
        Err(DownloadError::Unavailable)
    }
}
