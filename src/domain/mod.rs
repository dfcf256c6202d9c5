pub mod category;
pub mod common;
pub mod forecast;
pub mod history;
pub mod month;
pub mod overview;
pub mod transaction;

pub use category::{Category, CategoryGoal, CategoryUsage, GoalType};
pub use common::{Displayable, NamedEntity, UNCATEGORIZED_LABEL};
pub use forecast::{
    CategoryData, CategoryForecastInput, ForecastSettings, MonthlyForecast, SpendingPattern,
};
pub use history::{CategoryHistory, PayeeActivity};
pub use month::{days_in_month, parse_date_prefix, MonthKey, MonthSummary, MonthTotal};
pub use overview::BudgetOverview;
pub use transaction::Transaction;
