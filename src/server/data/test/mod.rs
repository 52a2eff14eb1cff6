mod favorite;
mod follow;
mod ingredient;
mod recipe;
mod shopping_cart;
mod tag;
mod user;
