//! Category options for the filter selector.

use serde::Serialize;

use crate::catalog::Product;
use crate::search::CategorySelector;

/// One entry of the category selector, with its product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub selector: CategorySelector,
    pub label: String,
    pub count: usize,
}

/// Build the selector list: "all" first, then each category in the order
/// its first product appears.
pub fn category_options<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption {
        selector: CategorySelector::All,
        label: "Todas as categorias".to_string(),
        count: 0,
    }];

    for product in products {
        options[0].count += 1;
        let label = product.category.label();
        match options.iter().skip(1).position(|o| o.label == label) {
            Some(i) => options[i + 1].count += 1,
            None => options.push(CategoryOption {
                selector: CategorySelector::Named(label.to_string()),
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    options
}
