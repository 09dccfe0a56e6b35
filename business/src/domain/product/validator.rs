use serde_json::{Map, Value};

use super::errors::ProductError;
use super::model::ProductDraft;
use super::value_objects::ProductField;

/// Decodes an untyped write body into a [`ProductDraft`].
///
/// All five writable keys must be present with their exact JSON types:
/// strings for `name`, `description` and `category`, a number for `price`
/// and a boolean for `inStock`. `name` must not be empty. Unknown keys
/// (including a caller-supplied `id`) are ignored and never reach the store.
pub fn validate(candidate: &Value) -> Result<ProductDraft, ProductError> {
    // A non-object body has no usable keys, so the first field is the culprit.
    let body = candidate.as_object().ok_or(ProductError::InvalidData {
        field: ProductField::Name,
    })?;

    let name = text(body, ProductField::Name)?;
    if name.is_empty() {
        return Err(ProductError::InvalidData {
            field: ProductField::Name,
        });
    }

    Ok(ProductDraft {
        name,
        description: text(body, ProductField::Description)?,
        price: number(body, ProductField::Price)?,
        category: text(body, ProductField::Category)?,
        in_stock: boolean(body, ProductField::InStock)?,
    })
}

fn text(body: &Map<String, Value>, field: ProductField) -> Result<String, ProductError> {
    match body.get(field.key()) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ProductError::InvalidData { field }),
    }
}

fn number(body: &Map<String, Value>, field: ProductField) -> Result<f64, ProductError> {
    body.get(field.key())
        .and_then(Value::as_f64)
        .ok_or(ProductError::InvalidData { field })
}

fn boolean(body: &Map<String, Value>, field: ProductField) -> Result<bool, ProductError> {
    body.get(field.key())
        .and_then(Value::as_bool)
        .ok_or(ProductError::InvalidData { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "Laptop",
            "description": "High-performance laptop with 16GB RAM",
            "price": 1200,
            "category": "electronics",
            "inStock": true
        })
    }

    fn rejected_field(body: &Value) -> Option<ProductField> {
        match validate(body) {
            Err(ProductError::InvalidData { field }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn should_accept_complete_body() {
        let draft = validate(&valid_body()).unwrap();

        assert_eq!(draft.name, "Laptop");
        assert_eq!(draft.price, 1200.0);
        assert_eq!(draft.category, "electronics");
        assert!(draft.in_stock);
    }

    #[test]
    fn should_accept_empty_description() {
        let mut body = valid_body();
        body["description"] = json!("");

        assert!(validate(&body).is_ok());
    }

    #[test]
    fn should_accept_zero_and_negative_prices() {
        let mut body = valid_body();
        body["price"] = json!(0);
        assert_eq!(validate(&body).unwrap().price, 0.0);

        body["price"] = json!(-19.99);
        assert_eq!(validate(&body).unwrap().price, -19.99);
    }

    #[test]
    fn should_ignore_unknown_keys_and_caller_supplied_id() {
        let mut body = valid_body();
        body["id"] = json!("not-yours");
        body["color"] = json!("silver");

        let draft = validate(&body).unwrap();

        assert_eq!(draft.name, "Laptop");
    }

    #[test]
    fn should_reject_empty_name() {
        let mut body = valid_body();
        body["name"] = json!("");

        assert_eq!(rejected_field(&body), Some(ProductField::Name));
    }

    #[test]
    fn should_keep_whitespace_only_name_as_given() {
        let mut body = valid_body();
        body["name"] = json!("   ");

        let draft = validate(&body).unwrap();

        assert_eq!(draft.name, "   ");
    }

    #[test]
    fn should_reject_price_sent_as_text() {
        let mut body = valid_body();
        body["price"] = json!("1200");

        assert_eq!(rejected_field(&body), Some(ProductField::Price));
    }

    #[test]
    fn should_reject_in_stock_sent_as_text() {
        let mut body = valid_body();
        body["inStock"] = json!("true");

        assert_eq!(rejected_field(&body), Some(ProductField::InStock));
    }

    #[test]
    fn should_reject_null_fields() {
        let mut body = valid_body();
        body["category"] = Value::Null;

        assert_eq!(rejected_field(&body), Some(ProductField::Category));
    }

    #[test]
    fn should_reject_non_object_bodies() {
        assert!(validate(&json!([1, 2, 3])).is_err());
        assert!(validate(&json!("Laptop")).is_err());
        assert!(validate(&Value::Null).is_err());
    }

    fn wrong_type_for(field: ProductField) -> Value {
        match field {
            ProductField::Price => json!("12"),
            ProductField::InStock => json!(1),
            _ => json!(42),
        }
    }

    proptest! {
        #[test]
        fn should_accept_every_correctly_typed_body(
            name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
            description in ".{0,60}",
            price in -1.0e9f64..1.0e9f64,
            category in "[A-Za-z ]{0,20}",
            in_stock in any::<bool>(),
        ) {
            let body = json!({
                "name": name,
                "description": description,
                "price": price,
                "category": category,
                "inStock": in_stock,
            });

            let draft = validate(&body).unwrap();

            prop_assert_eq!(draft.name, name);
            prop_assert_eq!(draft.description, description);
            prop_assert_eq!(draft.price, price);
            prop_assert_eq!(draft.category, category);
            prop_assert_eq!(draft.in_stock, in_stock);
        }

        #[test]
        fn should_reject_body_missing_any_field(index in 0usize..5) {
            let field = ProductField::ALL[index];
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field.key());

            prop_assert_eq!(rejected_field(&body), Some(field));
        }

        #[test]
        fn should_reject_body_with_any_mistyped_field(index in 0usize..5) {
            let field = ProductField::ALL[index];
            let mut body = valid_body();
            body[field.key()] = wrong_type_for(field);

            prop_assert_eq!(rejected_field(&body), Some(field));
        }
    }
}
