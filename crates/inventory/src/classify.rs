use chrono::NaiveDate;
use foodservice_shared::inventory::InventoryItem;
use serde::Serialize;
use strum::{AsRefStr, Display, VariantArray};

/// Items expiring within this many days (and not yet expired) are flagged.
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// Highlight bucket of a row. Each item lands in exactly one bucket, checked
/// in declaration order.
#[derive(
    Serialize, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "title_case")]
pub enum InventoryStatus {
    Expired,
    ExpiringSoon,
    LowStock,
    Ok,
}

pub fn is_low_stock(item: &InventoryItem) -> bool {
    item.quantity < item.minimum_stock
}

/// Whole calendar days from `reference` to the expiration date; negative once
/// the item has expired.
pub fn days_until_expiration(item: &InventoryItem, reference: NaiveDate) -> i64 {
    (item.expiration_date - reference).num_days()
}

pub fn is_expiring_soon(item: &InventoryItem, reference: NaiveDate) -> bool {
    let days = days_until_expiration(item, reference);
    days > 0 && days <= EXPIRING_SOON_DAYS
}

pub fn is_expired(item: &InventoryItem, reference: NaiveDate) -> bool {
    item.expiration_date < reference
}

pub fn status(item: &InventoryItem, reference: NaiveDate) -> InventoryStatus {
    if is_expired(item, reference) {
        InventoryStatus::Expired
    } else if is_expiring_soon(item, reference) {
        InventoryStatus::ExpiringSoon
    } else if is_low_stock(item) {
        InventoryStatus::LowStock
    } else {
        InventoryStatus::Ok
    }
}

/// Footer counts of the inventory view.
///
/// `expiring_soon` never includes expired items; `low_stock` counts every
/// low item whatever its expiration state.
#[derive(Serialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InventorySummary {
    pub expired: usize,
    pub expiring_soon: usize,
    pub low_stock: usize,
}

pub fn summarize(items: &[InventoryItem], reference: NaiveDate) -> InventorySummary {
    InventorySummary {
        expired: items.iter().filter(|i| is_expired(i, reference)).count(),
        expiring_soon: items
            .iter()
            .filter(|i| !is_expired(i, reference) && is_expiring_soon(i, reference))
            .count(),
        low_stock: items.iter().filter(|i| is_low_stock(i)).count(),
    }
}

/// Dashboard alert tile: anything expiring within the window (expired
/// included) or below its minimum stock.
pub fn alert_count(items: &[InventoryItem], reference: NaiveDate) -> usize {
    items
        .iter()
        .filter(|i| days_until_expiration(i, reference) <= EXPIRING_SOON_DAYS || is_low_stock(i))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn item(quantity: f64, minimum_stock: f64, expiration_date: NaiveDate) -> InventoryItem {
        InventoryItem {
            id: "1".to_owned(),
            name: "Salmon Fillets".to_owned(),
            category: "Protein".to_owned(),
            quantity,
            unit: "lbs".to_owned(),
            expiration_date,
            location: "Freezer 2".to_owned(),
            minimum_stock,
            cost: 8.99,
        }
    }

    #[test]
    fn test_expired_yesterday_and_low() {
        let salmon = item(10.0, 12.0, today() - Days::new(1));

        assert!(is_expired(&salmon, today()));
        assert!(is_low_stock(&salmon));
        assert!(!is_expiring_soon(&salmon, today()));
        assert_eq!(status(&salmon, today()), InventoryStatus::Expired);
    }

    #[test]
    fn test_expiring_in_five_days_and_low() {
        let vegetables = item(8.0, 15.0, today() + Days::new(5));

        assert!(is_expiring_soon(&vegetables, today()));
        assert!(is_low_stock(&vegetables));
        assert!(!is_expired(&vegetables, today()));
        assert_eq!(days_until_expiration(&vegetables, today()), 5);
        assert_eq!(status(&vegetables, today()), InventoryStatus::ExpiringSoon);
    }

    #[test]
    fn test_window_boundaries() {
        let today_item = item(30.0, 25.0, today());
        let day_seven = item(30.0, 25.0, today() + Days::new(7));
        let day_eight = item(30.0, 25.0, today() + Days::new(8));

        assert!(!is_expired(&today_item, today()));
        assert!(!is_expiring_soon(&today_item, today()));
        assert_eq!(status(&today_item, today()), InventoryStatus::Ok);
        assert!(is_expiring_soon(&day_seven, today()));
        assert!(!is_expiring_soon(&day_eight, today()));
    }

    #[test]
    fn test_low_stock_is_strict() {
        assert!(!is_low_stock(&item(10.0, 10.0, today() + Days::new(60))));
        assert_eq!(
            status(&item(9.5, 10.0, today() + Days::new(60)), today()),
            InventoryStatus::LowStock
        );
    }

    #[test]
    fn test_summary_buckets() {
        let items = vec![
            item(10.0, 12.0, today() - Days::new(1)),
            item(8.0, 15.0, today() + Days::new(5)),
            item(15.0, 10.0, today() + Days::new(3)),
            item(30.0, 25.0, today() + Days::new(60)),
            item(5.0, 10.0, today() + Days::new(30)),
        ];

        let summary = summarize(&items, today());

        assert_eq!(
            summary,
            InventorySummary {
                expired: 1,
                expiring_soon: 2,
                low_stock: 3,
            }
        );
        assert_eq!(alert_count(&items, today()), 4);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(InventoryStatus::ExpiringSoon.to_string(), "Expiring Soon");
        assert_eq!(InventoryStatus::LowStock.as_ref(), "Low Stock");
    }
}
