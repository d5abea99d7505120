//! Page category constants.
//!
//! Every page root declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"u508_resume_chat--usecase"`)
//!   - `data-page-category` with one of the constants below

/// Use-case / action page (uploads, chat, imports).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}
