//! PageFrame — standard root wrapper for a page.
//!
//! Puts `id` and `data-page-category` on the root DOM element so the page can
//! be found from the browser inspector by its `{entity}--{category}` id.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"u508_resume_chat--usecase"`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) {
        log::warn!("PageFrame: malformed page id '{}'", page_id);
    }

    let class = if category == PAGE_CAT_USECASE {
        "page page--usecase"
    } else {
        "page"
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
