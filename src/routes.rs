use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse};
use futures_util::future::join_all;

use crate::db::{self, DbError, DbPool};
use crate::error::ApiError;
use crate::models::{AllergiesPayload, NewUser, RestaurantQuery};
use crate::query;

pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    // only GET /restaurants reads a query string
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::Restaurants(err.to_string().into()).into()
    }))
    .service(legacy_restaurants)
    .service(list_restaurants)
    .service(get_restaurant)
    .service(
        web::resource("/users")
            .app_data(json_config(ApiError::CreateUser))
            .route(web::post().to(create_user)),
    )
    .service(
        web::resource("/users/{id}/allergies")
            .app_data(json_config(ApiError::UpdateAllergies))
            .route(web::post().to(replace_allergies)),
    );
}

// unreadable bodies fail like any other store error on that route
fn json_config(into_error: fn(DbError) -> ApiError) -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(move |err, _req| into_error(err.to_string().into()).into())
}

/// `GET /restaurant`, kept for older clients. Never filters.
#[get("/restaurant")]
async fn legacy_restaurants(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
    let restaurants = db::run(&pool, |conn| query::find_restaurants(None, conn))
        .await
        .map_err(ApiError::LegacyRestaurants)?;
    Ok(HttpResponse::Ok().json(restaurants))
}

#[get("/restaurants")]
async fn list_restaurants(
    pool: web::Data<DbPool>,
    params: web::Query<RestaurantQuery>,
) -> Result<HttpResponse, ApiError> {
    let filter = params
        .coordinates()
        .map_err(|e| ApiError::Restaurants(e.into()))?;

    let restaurants = db::run(&pool, move |conn| query::find_restaurants(filter, conn))
        .await
        .map_err(ApiError::Restaurants)?;
    Ok(HttpResponse::Ok().json(restaurants))
}

#[get("/restaurants/{id}")]
async fn get_restaurant(
    pool: web::Data<DbPool>,
    restaurant_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let restaurant_id: i32 = restaurant_id
        .parse()
        .map_err(|e: std::num::ParseIntError| ApiError::Restaurant(e.into()))?;

    let restaurant = db::run(&pool, move |conn| query::find_restaurant(restaurant_id, conn))
        .await
        .map_err(ApiError::Restaurant)?
        .ok_or(ApiError::RestaurantNotFound)?;
    Ok(HttpResponse::Ok().json(restaurant))
}

async fn create_user(
    pool: web::Data<DbPool>,
    new_user: web::Json<NewUser>,
) -> Result<HttpResponse, ApiError> {
    let new_user = new_user.into_inner();
    let user = db::run(&pool, move |conn| query::insert_user(&new_user, conn))
        .await
        .map_err(ApiError::CreateUser)?;
    Ok(HttpResponse::Created().json(user))
}

/// `POST /users/{id}/allergies`: drops every allergy the user has, then
/// inserts the new list concurrently.
///
/// Nothing here is transactional. A failed insert leaves the rows that did
/// make it in place.
async fn replace_allergies(
    pool: web::Data<DbPool>,
    user_id: web::Path<String>,
    payload: web::Json<AllergiesPayload>,
) -> Result<HttpResponse, ApiError> {
    let user_id: i32 = user_id
        .parse()
        .map_err(|e: std::num::ParseIntError| ApiError::UpdateAllergies(e.into()))?;

    let removed = db::run(&pool, move |conn| query::delete_allergies(user_id, conn))
        .await
        .map_err(ApiError::UpdateAllergies)?;
    log::debug!("removed {removed} allergies for user {user_id}");

    let allergies = payload
        .into_inner()
        .allergies
        .ok_or_else(|| ApiError::UpdateAllergies("allergies missing from body".into()))?;

    let inserts = allergies.into_iter().map(|allergy| {
        db::run(&pool, move |conn| {
            query::insert_allergy(user_id, &allergy, conn)
        })
    });
    join_all(inserts)
        .await
        .into_iter()
        .collect::<Result<(), DbError>>()
        .map_err(ApiError::UpdateAllergies)?;

    Ok(HttpResponse::Created()
        .insert_header(ContentType::plaintext())
        .body("Allergies updated"))
}
