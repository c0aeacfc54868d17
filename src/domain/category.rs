use std::fmt;

/// The fixed set of expense categories offered by the entry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Gym, sports, classes
    #[default]
    Exercise,
    /// Hobbies, outings, entertainment
    Leisure,
    /// Groceries and eating out
    Food,
    /// Doctor, pharmacy, insurance co-pays
    Medical,
    /// Day-to-day household spending
    Living,
    /// Rent, subscriptions, bills that repeat every month
    FixedCost,
    Other,
}

impl Category {
    /// All categories in picker order. The first one is the form default.
    pub const ALL: [Category; 7] = [
        Category::Exercise,
        Category::Leisure,
        Category::Food,
        Category::Medical,
        Category::Living,
        Category::FixedCost,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exercise => "exercise",
            Category::Leisure => "leisure",
            Category::Food => "food",
            Category::Medical => "medical",
            Category::Living => "living",
            Category::FixedCost => "fixed-cost",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Exercise => "Exercise",
            Category::Leisure => "Leisure",
            Category::Food => "Food",
            Category::Medical => "Medical",
            Category::Living => "Living",
            Category::FixedCost => "Fixed cost",
            Category::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "exercise" => Some(Category::Exercise),
            "leisure" => Some(Category::Leisure),
            "food" => Some(Category::Food),
            "medical" => Some(Category::Medical),
            "living" => Some(Category::Living),
            "fixed-cost" | "fixedcost" | "fixed_cost" => Some(Category::FixedCost),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Position in `Category::ALL`.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// Next category in picker order, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category in picker order, wrapping around.
    pub fn previous(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
