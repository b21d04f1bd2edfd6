use std::{convert::Infallible, fmt, str::FromStr};

use foodservice_shared::inventory::InventoryItem;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use super::{Direction, SortField, SortKey, contains_ignore_case, filter_by, sort_by};

#[derive(
    EnumString, Display, AsRefStr, VariantArray, Default, Clone, Copy, Debug, PartialEq, Eq,
)]
#[strum(serialize_all = "snake_case")]
pub enum InventoryField {
    #[default]
    Name,
    Category,
    Quantity,
    ExpirationDate,
    Location,
    MinimumStock,
    Cost,
}

impl SortField<InventoryItem> for InventoryField {
    fn key<'a>(&self, item: &'a InventoryItem) -> SortKey<'a> {
        match self {
            InventoryField::Name => SortKey::Text(&item.name),
            InventoryField::Category => SortKey::Text(&item.category),
            InventoryField::Quantity => SortKey::Number(item.quantity),
            InventoryField::ExpirationDate => SortKey::Date(item.expiration_date),
            InventoryField::Location => SortKey::Text(&item.location),
            InventoryField::MinimumStock => SortKey::Number(item.minimum_stock),
            InventoryField::Cost => SortKey::Number(item.cost),
        }
    }
}

/// Category facet of the inventory view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All Categories"),
            CategoryFilter::Category(c) => f.write_str(c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }

        Ok(CategoryFilter::Category(s.to_owned()))
    }
}

/// `All` followed by each category present in `items`, first-seen order.
pub fn categories(items: &[InventoryItem]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];

    for item in items {
        let filter = CategoryFilter::Category(item.category.to_owned());
        if !filters.contains(&filter) {
            filters.push(filter);
        }
    }

    filters
}

/// State of the inventory table: search box, category facet and sort column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InventoryQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: InventoryField,
    pub direction: Direction,
}

impl InventoryQuery {
    /// Clicking the active column flips the direction; another column starts ascending.
    pub fn toggle(&mut self, field: InventoryField) {
        if self.sort == field {
            self.direction = self.direction.flip();
        } else {
            self.sort = field;
            self.direction = Direction::Asc;
        }
    }

    pub fn apply<'a>(&self, items: &'a [InventoryItem]) -> Vec<&'a InventoryItem> {
        let rows = filter_by(items, |item| {
            contains_ignore_case(&item.name, &self.search) && self.category.matches(&item.category)
        });

        sort_by(rows, self.sort, self.direction)
    }
}
