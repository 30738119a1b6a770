use std::sync::Arc;
use un_core::NewsApi;

use super::category::CategoryPage;

/// Human rights coverage lives under the `tragedy` category.
pub const HUMAN_RIGHTS_SLUG: &str = "tragedy";
pub const HUMAN_RIGHTS_PAGE_SIZE: u32 = 12;

pub fn human_rights_page(api: Arc<dyn NewsApi>) -> CategoryPage {
    CategoryPage::with_page_size(api, HUMAN_RIGHTS_SLUG, HUMAN_RIGHTS_PAGE_SIZE)
}
