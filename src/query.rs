use diesel::prelude::*;

use crate::db::DbError;
use crate::models::{Coordinates, NewUser, Restaurant, User};

pub(crate) fn find_restaurants(
    filter: Option<Coordinates>,
    conn: &PgConnection,
) -> Result<Vec<Restaurant>, DbError> {
    use crate::schema::restaurants::dsl::*;

    let found = match filter {
        Some(at) => restaurants
            .filter(latitude.eq(at.latitude))
            .filter(longitude.eq(at.longitude))
            .load::<Restaurant>(conn)?,
        None => restaurants.load::<Restaurant>(conn)?,
    };
    Ok(found)
}

pub(crate) fn find_restaurant(
    restaurant_id: i32,
    conn: &PgConnection,
) -> Result<Option<Restaurant>, DbError> {
    use crate::schema::restaurants::dsl::*;

    //id is assumed unique, so the first row is the row
    let found = restaurants
        .filter(id.eq(restaurant_id))
        .first::<Restaurant>(conn)
        .optional()?;
    Ok(found)
}

pub(crate) fn insert_user(new_user: &NewUser, conn: &PgConnection) -> Result<User, DbError> {
    use crate::schema::users;

    let created = diesel::insert_into(users::table)
        .values(new_user)
        .get_result::<User>(conn)?;
    Ok(created)
}

pub(crate) fn delete_allergies(for_user: i32, conn: &PgConnection) -> Result<usize, DbError> {
    use crate::schema::allergies::dsl::*;

    Ok(diesel::delete(allergies.filter(user_id.eq(for_user))).execute(conn)?)
}

pub(crate) fn insert_allergy(
    for_user: i32,
    value: &str,
    conn: &PgConnection,
) -> Result<(), DbError> {
    use crate::schema::allergies::dsl::*;

    diesel::insert_into(allergies)
        .values((user_id.eq(for_user), allergy.eq(value)))
        .execute(conn)?;
    Ok(())
}
