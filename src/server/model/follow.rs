//! Subscription domain models.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::follow::{PaginatedSubscriptionsDto, SubscriptionDto},
    server::model::{
        pagination::{Page, DEFAULT_PAGE_SIZE},
        recipe::RecipeSummary,
        user::User,
    },
};

/// A followed author with a (possibly truncated) list of their recipes.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub author: User,
    pub recipes: Vec<RecipeSummary>,
    /// Total number of the author's recipes, regardless of truncation.
    pub recipes_count: u64,
}

impl Subscription {
    /// The requester follows every author in a subscription listing.
    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            id: self.author.id,
            email: self.author.email,
            username: self.author.username,
            first_name: self.author.first_name,
            last_name: self.author.last_name,
            is_subscribed: true,
            recipes: self
                .recipes
                .into_iter()
                .map(RecipeSummary::into_dto)
                .collect(),
            recipes_count: self.recipes_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSubscriptions {
    pub subscriptions: Vec<Subscription>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedSubscriptions {
    pub fn into_dto(self) -> PaginatedSubscriptionsDto {
        PaginatedSubscriptionsDto {
            subscriptions: self
                .subscriptions
                .into_iter()
                .map(Subscription::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// `?recipes_limit=` for subscribe responses.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecipesLimitParams {
    /// Maximum number of recipes listed per author
    pub recipes_limit: Option<u64>,
}

/// `?page=&limit=&recipes_limit=` for the subscription listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubscriptionListParams {
    /// Zero-indexed page number (default 0)
    #[serde(default)]
    pub page: u64,
    /// Authors per page (default 6, max 100)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Maximum number of recipes listed per author
    pub recipes_limit: Option<u64>,
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl SubscriptionListParams {
    pub fn page(&self) -> Page {
        Page::new(self.page, self.limit)
    }
}
