use serde::{Deserialize, Serialize};

/// What a purchase was for, used to group spending history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseCategory {
    Toy,
    Treat,
    Activity,
    Game,
    Book,
    Other,
}

impl PurchaseCategory {
    /// Every category, in the order the spending form presents them.
    pub const ALL: [PurchaseCategory; 6] = [
        PurchaseCategory::Toy,
        PurchaseCategory::Treat,
        PurchaseCategory::Activity,
        PurchaseCategory::Game,
        PurchaseCategory::Book,
        PurchaseCategory::Other,
    ];

    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseCategory::Toy => "Toy",
            PurchaseCategory::Treat => "Treat",
            PurchaseCategory::Activity => "Activity",
            PurchaseCategory::Game => "Game",
            PurchaseCategory::Book => "Book",
            PurchaseCategory::Other => "Other",
        }
    }
}

/// A single spend of money, recorded after the fact.
///
/// Purchases are append-only: they are never edited or deleted once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    /// What was bought (trimmed, non-empty).
    pub description: String,
    /// Money spent. Positive, and capped at the balance available when the
    /// purchase was recorded.
    pub amount: f64,
    pub category: PurchaseCategory,
    /// Epoch milliseconds at creation. Display ordering only.
    pub timestamp: i64,
}
