use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        account, auth, category, favorite, health, kiosk, product, recommendation, review,
        search, sector, shopper, store, store_owner, user_action,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    let api = Router::new()
        .route("/token", post(auth::obtain_token))
        .route("/token/refresh", post(auth::refresh_token))
        .route("/register", post(account::register_shopper))
        .route("/criar-lojista", post(account::register_store_owner))
        .route("/meu-perfil", get(account::get_profile))
        .route("/logout", post(account::logout))
        .route("/lojas", get(store::get_stores).post(store::create_store))
        .route(
            "/lojas/{id}",
            get(store::get_store_by_id)
                .put(store::update_store)
                .patch(store::patch_store)
                .delete(store::delete_store),
        )
        .route("/lojas/{id}/avaliacoes", get(store::get_store_reviews))
        .route("/lojas/{id}/produtos", get(store::get_store_products))
        .route("/lojas/{id}/categorias", get(store::get_store_categories))
        .route("/lojas/{id}/acoes", get(store::get_store_actions))
        .route("/lojas/{id}/favoritas", get(store::get_store_favorites))
        .route(
            "/produtos",
            get(product::get_products).post(product::create_product),
        )
        .route(
            "/produtos/{id}",
            get(product::get_product_by_id)
                .put(product::update_product)
                .patch(product::patch_product)
                .delete(product::delete_product),
        )
        .route("/produtos/{id}/lojas", get(product::get_product_stores))
        .route(
            "/produtos/{id}/categorias",
            get(product::get_product_categories),
        )
        .route("/produtos/{id}/favoritos", get(product::get_product_favorites))
        .route(
            "/categorias",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/categorias/{id}",
            get(category::get_category_by_id)
                .put(category::update_category)
                .patch(category::patch_category)
                .delete(category::delete_category),
        )
        .route("/categorias/{id}/lojas", get(category::get_category_stores))
        .route(
            "/categorias/{id}/produtos",
            get(category::get_category_products),
        )
        .route(
            "/categorias/{id}/setores",
            get(category::get_category_sectors),
        )
        .route(
            "/setores",
            get(sector::get_sectors).post(sector::create_sector),
        )
        .route(
            "/setores/{id}",
            get(sector::get_sector_by_id)
                .put(sector::update_sector)
                .patch(sector::patch_sector)
                .delete(sector::delete_sector),
        )
        .route("/setores/{id}/lojas", get(sector::get_sector_stores))
        .route(
            "/setores/{id}/categorias",
            get(sector::get_sector_categories),
        )
        .route(
            "/lojistas",
            get(store_owner::get_store_owners).post(account::register_store_owner),
        )
        .route(
            "/lojistas/{id}",
            get(store_owner::get_store_owner_by_id)
                .put(store_owner::update_store_owner)
                .patch(store_owner::patch_store_owner)
                .delete(store_owner::delete_store_owner),
        )
        .route("/clientes", get(shopper::get_shoppers))
        .route(
            "/clientes/{id}",
            get(shopper::get_shopper_by_id)
                .put(shopper::update_shopper)
                .patch(shopper::patch_shopper)
                .delete(shopper::delete_shopper),
        )
        .route(
            "/clientes/{id}/categorias_desejadas",
            get(shopper::get_desired_categories),
        )
        .route(
            "/clientes/{id}/produtos_favoritos",
            get(shopper::get_favorite_products),
        )
        .route(
            "/clientes/{id}/produtos_favoritos/{produto_id}",
            get(shopper::get_favorite_product).delete(shopper::remove_favorite_product),
        )
        .route(
            "/clientes/{id}/lojas_favoritas",
            get(shopper::get_favorite_stores),
        )
        .route(
            "/clientes/{id}/lojas_favoritas/{loja_id}",
            get(shopper::get_favorite_store).delete(shopper::remove_favorite_store),
        )
        .route(
            "/avaliacoes",
            get(review::get_reviews).post(review::create_review),
        )
        .route(
            "/avaliacoes/{id}",
            get(review::get_review_by_id)
                .put(review::update_review)
                .patch(review::patch_review)
                .delete(review::delete_review),
        )
        .route(
            "/produtos_favoritos",
            get(favorite::get_favorite_products).post(favorite::create_favorite_product),
        )
        .route(
            "/produtos_favoritos/{id}",
            get(favorite::get_favorite_product_by_id).delete(favorite::delete_favorite_product),
        )
        .route(
            "/lojas_favoritas",
            get(favorite::get_favorite_stores).post(favorite::create_favorite_store),
        )
        .route(
            "/lojas_favoritas/{id}",
            get(favorite::get_favorite_store_by_id).delete(favorite::delete_favorite_store),
        )
        .route("/totens", get(kiosk::get_surveys).post(kiosk::create_survey))
        .route(
            "/totens/{id}",
            get(kiosk::get_survey_by_id).delete(kiosk::delete_survey),
        )
        .route("/acoes", get(user_action::get_user_actions))
        .route(
            "/lojas-recomendadas",
            get(recommendation::get_recommended_stores),
        )
        .route(
            "/produtos-recomendados",
            get(recommendation::get_recommended_products),
        )
        .route("/pesquisa", get(search::search))
        .route("/health", get(health::health));

    Router::new().nest("/api", api)
}
