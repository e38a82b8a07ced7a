// storefront/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{
  admin_handlers, auth_handlers, cart_handlers, checkout_handlers, product_handlers, profile_handlers,
};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` to mount every storefront route on the App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .route("/home", web::get().to(product_handlers::home_handler))
      .service(
        web::scope("/products")
          .route("", web::get().to(product_handlers::list_products_handler))
          .route("/{product_id}", web::get().to(product_handlers::get_product_handler)),
      )
      // Every cart route needs the X-Session-ID header
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("/summary", web::get().to(cart_handlers::cart_summary_handler))
          .route("/items", web::post().to(cart_handlers::add_to_cart_handler))
          .route("/items/{product_id}", web::put().to(cart_handlers::update_quantity_handler))
          .route("/items/{product_id}", web::delete().to(cart_handlers::remove_from_cart_handler)),
      )
      .service(
        web::scope("/checkout")
          .route("", web::get().to(checkout_handlers::checkout_page_handler))
          .route("", web::post().to(checkout_handlers::place_order_handler)),
      )
      .service(web::scope("/auth").route("/signin", web::post().to(auth_handlers::signin_handler)))
      .service(
        web::scope("/profile")
          .route("", web::get().to(profile_handlers::get_profile_handler))
          .route("", web::put().to(profile_handlers::update_profile_handler)),
      )
      .service(
        web::scope("/admin/products")
          .route("", web::get().to(admin_handlers::list_inventory_handler))
          .route("", web::post().to(admin_handlers::create_product_handler))
          .route("/{product_id}", web::put().to(admin_handlers::update_product_handler))
          .route("/{product_id}", web::delete().to(admin_handlers::delete_product_handler)),
      ),
  );
}
