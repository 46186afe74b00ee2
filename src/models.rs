use std::num::ParseFloatError;

use serde::{Deserialize, Serialize};

use crate::schema::users;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable)]
pub(crate) struct Restaurant {
    pub id: i32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Query string accepted by `GET /restaurants`.
///
/// Values are kept as text until the handler decides whether to filter, so an
/// absent and an empty parameter behave the same way.
#[derive(Debug, Deserialize)]
pub(crate) struct RestaurantQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl RestaurantQuery {
    /// Exact-match filter, only when both `lat` and `lng` are given.
    pub(crate) fn coordinates(&self) -> Result<Option<Coordinates>, ParseFloatError> {
        match (non_empty(&self.lat), non_empty(&self.lng)) {
            (Some(lat), Some(lng)) => Ok(Some(Coordinates {
                latitude: lat.trim().parse()?,
                longitude: lng.trim().parse()?,
            })),
            _ => Ok(None),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Queryable)]
pub(crate) struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

// missing fields go to the store as-is, it owns the constraints
#[derive(Debug, Deserialize, Insertable)]
#[table_name = "users"]
pub(crate) struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AllergiesPayload {
    pub allergies: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: Option<&str>, lng: Option<&str>) -> RestaurantQuery {
        RestaurantQuery {
            lat: lat.map(str::to_owned),
            lng: lng.map(str::to_owned),
        }
    }

    #[test]
    fn both_coordinates_build_a_filter() {
        let filter = query(Some("40.7128"), Some("-74.006"))
            .coordinates()
            .unwrap();
        assert_eq!(
            filter,
            Some(Coordinates {
                latitude: 40.7128,
                longitude: -74.006,
            })
        );
    }

    #[test]
    fn single_coordinate_is_unfiltered() {
        assert_eq!(query(Some("40.7"), None).coordinates().unwrap(), None);
        assert_eq!(query(None, Some("-74.0")).coordinates().unwrap(), None);
        assert_eq!(query(None, None).coordinates().unwrap(), None);
    }

    #[test]
    fn empty_coordinate_is_unfiltered() {
        assert_eq!(query(Some(""), Some("-74.0")).coordinates().unwrap(), None);
    }

    #[test]
    fn garbage_coordinate_is_an_error() {
        assert!(query(Some("north"), Some("-74.0")).coordinates().is_err());
    }

    #[test]
    fn new_user_passes_missing_fields_through() {
        let user: NewUser = serde_json::from_str(r#"{"email":"a@x.com"}"#).unwrap();
        assert_eq!(user.name, None);
        assert_eq!(user.email.as_deref(), Some("a@x.com"));
        assert_eq!(user.age, None);
    }

    #[test]
    fn allergies_payload_keeps_order_and_absence() {
        let payload: AllergiesPayload =
            serde_json::from_str(r#"{"allergies":["peanuts","shellfish"]}"#).unwrap();
        assert_eq!(
            payload.allergies,
            Some(vec!["peanuts".to_string(), "shellfish".to_string()])
        );

        let payload: AllergiesPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.allergies.is_none());
    }

    #[test]
    fn user_serializes_missing_values_as_null() {
        let user = User {
            id: 7,
            name: Some("A".into()),
            email: None,
            age: Some(30),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 7, "name": "A", "email": null, "age": 30})
        );
    }
}
