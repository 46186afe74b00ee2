table! {
    restaurants (id) {
        id -> Int4,
        name -> Varchar,
        latitude -> Float8,
        longitude -> Float8,
    }
}

table! {
    users (id) {
        id -> Int4,
        name -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        age -> Nullable<Int4>,
    }
}

table! {
    allergies (user_id, allergy) {
        user_id -> Int4,
        allergy -> Varchar,
    }
}

joinable!(allergies -> users (user_id));

allow_tables_to_appear_in_same_query!(allergies, restaurants, users);
