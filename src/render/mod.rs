//! Footer presentation of update check results
//!
//! # Modules
//!
//! - [`element`]: paragraph model and HTML serialisation
//! - [`styles`]: one-time registration of the badge animation
//! - [`target`]: render target trait and the in-memory footer

pub mod element;
pub mod styles;
pub mod target;

use tracing::debug;

use crate::i18n::Messages;
use crate::render::element::{BADGE_CLASS, Element, PARAGRAPH_CLASS, SUCCESS_CLASS, WARNING_CLASS};
use crate::render::styles::register_styles;
use crate::render::target::RenderTarget;
use crate::version::checker::UpdateResult;
use crate::version::error::FetchError;

/// Build the paragraph for a finished check
pub fn create_version_element(
    result: &UpdateResult,
    messages: &Messages,
    repository_url: &str,
) -> Element {
    let element = Element::paragraph(PARAGRAPH_CLASS).text(format!(
        "{}: {} ",
        messages.version_label, result.current_formatted
    ));

    if result.has_update {
        element
            .badge(BADGE_CLASS, messages.update_badge, repository_url)
            .title(format!(
                "{} → {}",
                result.current_formatted, result.latest_formatted
            ))
    } else {
        element.span(SUCCESS_CLASS, messages.up_to_date)
    }
}

/// Build the failure paragraph; `detail` becomes the tooltip
pub fn create_error_element(detail: Option<&str>, messages: &Messages) -> Element {
    let element = Element::paragraph(PARAGRAPH_CLASS)
        .text(format!("{}: ", messages.version_label))
        .span(WARNING_CLASS, messages.check_failed);

    match detail {
        Some(detail) => element.title(detail),
        None => element,
    }
}

/// Put `element` after the footer text, or into the fallback container.
///
/// Returns false when the target offers neither location.
pub fn display_element(target: &mut dyn RenderTarget, element: Element) -> bool {
    let Err(element) = target.insert_after(element) else {
        return true;
    };

    if target.append_child(element).is_err() {
        debug!("No footer location available, version notice dropped");
        return false;
    }
    true
}

/// Render the outcome of a check into `target`
pub fn present(
    target: &mut dyn RenderTarget,
    outcome: &Result<UpdateResult, FetchError>,
    messages: &Messages,
    repository_url: &str,
) -> bool {
    register_styles(target);

    let element = match outcome {
        Ok(result) => create_version_element(result, messages, repository_url),
        Err(error) => create_error_element(
            Some(&format!("{}: {}", messages.error_prefix, error)),
            messages,
        ),
    };

    display_element(target, element)
}
