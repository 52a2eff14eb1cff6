use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::recipe::RecipeSummaryDto;

/// A followed author together with (a possibly truncated list of) their recipes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SubscriptionDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub recipes: Vec<RecipeSummaryDto>,
    pub recipes_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedSubscriptionsDto {
    pub subscriptions: Vec<SubscriptionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
