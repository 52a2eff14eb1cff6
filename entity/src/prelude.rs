pub use super::favorite::Entity as Favorite;
pub use super::follow::Entity as Follow;
pub use super::ingredient::Entity as Ingredient;
pub use super::ingredient_amount::Entity as IngredientAmount;
pub use super::recipe::Entity as Recipe;
pub use super::shopping_cart::Entity as ShoppingCart;
pub use super::tag::Entity as Tag;
pub use super::tag_recipe::Entity as TagRecipe;
pub use super::user::Entity as User;
