use diesel::{allow_tables_to_appear_in_same_query, joinable, table};

table! {
    games (app_id) {
        app_id -> BigInt,
        title -> Text,
        developer -> Text,
        publisher -> Text,
        engine -> Text,
        platform -> Text,
        release_date -> Nullable<Text>,
        total_options_count -> Integer,
    }
}

table! {
    launch_options (id) {
        id -> Text,
        command -> Text,
        description -> Text,
        source -> Text,
        verified -> Bool,
        upvotes -> Integer,
        downvotes -> Integer,
    }
}

table! {
    game_launch_options (game_app_id, launch_option_id) {
        game_app_id -> BigInt,
        launch_option_id -> Text,
    }
}

joinable!(game_launch_options -> games (game_app_id));
joinable!(game_launch_options -> launch_options (launch_option_id));

allow_tables_to_appear_in_same_query!(games, launch_options, game_launch_options,);
