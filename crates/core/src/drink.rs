use serde::{Deserialize, Serialize};

/// One recipe entry: how many parts of which ingredient, plus the color
/// used when rendering the drink in a glass graphic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub color: String,
    pub name: String,
    pub parts: i64,
}

/// A drink on the menu.
///
/// `id` is assigned by the store on creation and immutable thereafter.
/// `recipe` is always a sequence; request payloads carrying a bare
/// ingredient object go through [`RecipeInput`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Recipe as it appears in request bodies: either a single ingredient
/// object or a sequence of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<Ingredient>),
    One(Ingredient),
}

impl RecipeInput {
    /// Normalize to a sequence; a bare object becomes a one-element vec.
    pub fn into_vec(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::Many(entries) => entries,
            RecipeInput::One(entry) => vec![entry],
        }
    }
}

/// Partial update for a drink; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrinkPatch {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}

impl DrinkPatch {
    /// True when the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.recipe.is_none()
    }
}

/// Recipe entry with the ingredient name withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientSummary {
    pub color: String,
    pub parts: i64,
}

/// Public projection of a drink: ingredient names omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortDrink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<IngredientSummary>,
}

/// Detail projection of a drink: the full recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongDrink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    /// Projection served on the public listing.
    pub fn short(&self) -> ShortDrink {
        ShortDrink {
            id: self.id,
            title: self.title.clone(),
            recipe: self
                .recipe
                .iter()
                .map(|entry| IngredientSummary {
                    color: entry.color.clone(),
                    parts: entry.parts,
                })
                .collect(),
        }
    }

    /// Projection served to callers with detail access.
    pub fn long(&self) -> LongDrink {
        LongDrink {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.clone(),
        }
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: DrinkPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(recipe) = patch.recipe {
            self.recipe = recipe;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> Drink {
        Drink {
            id: 1,
            title: "Latte".to_string(),
            recipe: vec![
                Ingredient {
                    color: "brown".to_string(),
                    name: "coffee".to_string(),
                    parts: 1,
                },
                Ingredient {
                    color: "white".to_string(),
                    name: "milk".to_string(),
                    parts: 3,
                },
            ],
        }
    }

    #[test]
    fn short_projection_withholds_ingredient_names() {
        let value = serde_json::to_value(latte().short()).unwrap();

        let recipe = value["recipe"].as_array().unwrap();
        assert_eq!(recipe.len(), 2);
        for entry in recipe {
            assert!(entry.get("name").is_none());
            assert!(entry.get("color").is_some());
            assert!(entry.get("parts").is_some());
        }
    }

    #[test]
    fn long_projection_carries_ingredient_names() {
        let value = serde_json::to_value(latte().long()).unwrap();

        let recipe = value["recipe"].as_array().unwrap();
        assert_eq!(recipe[0]["name"], "coffee");
        assert_eq!(recipe[1]["name"], "milk");
    }

    #[test]
    fn bare_recipe_object_normalizes_to_one_element_sequence() {
        let input: RecipeInput =
            serde_json::from_str(r#"{"color":"brown","name":"coffee","parts":1}"#).unwrap();

        let recipe = input.into_vec();
        assert_eq!(recipe.len(), 1);
        assert_eq!(recipe[0].name, "coffee");
    }

    #[test]
    fn recipe_sequence_passes_through_unchanged() {
        let input: RecipeInput = serde_json::from_str(
            r#"[{"color":"brown","name":"coffee","parts":1},{"color":"white","name":"milk","parts":3}]"#,
        )
        .unwrap();

        assert_eq!(input.into_vec().len(), 2);
    }

    #[test]
    fn patch_replaces_only_named_fields() {
        let mut drink = latte();
        let original_recipe = drink.recipe.clone();

        drink.apply(DrinkPatch {
            title: Some("Flat White".to_string()),
            recipe: None,
        });

        assert_eq!(drink.title, "Flat White");
        assert_eq!(drink.recipe, original_recipe);
    }

    #[test]
    fn empty_patch_is_detectable() {
        assert!(DrinkPatch::default().is_empty());
        assert!(
            !DrinkPatch {
                title: Some("Mocha".to_string()),
                recipe: None,
            }
            .is_empty()
        );
    }
}
