use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveFromCartParams, RemoveFromCartUseCase,
};
use business::domain::product::value_objects::ProductId;
use business::domain::shared::value_objects::Username;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddToCartUseCase>,
    remove_item_use_case: Arc<dyn RemoveFromCartUseCase>,
    delete_use_case: Arc<dyn DeleteCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddToCartUseCase>,
        remove_item_use_case: Arc<dyn RemoveFromCartUseCase>,
        delete_use_case: Arc<dyn DeleteCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            remove_item_use_case,
            delete_use_case,
        }
    }
}

/// Shopping cart API
///
/// Carts are addressed by username and created on first add.
#[OpenApi]
impl CartApi {
    /// Get a user's cart
    ///
    /// Returns the products in the cart, one entry per unit added.
    /// A user without a cart gets an empty list.
    #[oai(path = "/carts/:username", method = "get", tag = "ApiTags::Carts")]
    async fn get(&self, username: Path<String>) -> GetCartResponse {
        let params = GetCartParams {
            username: Username::new(username.0.clone()),
        };

        match self.get_use_case.execute(params).await {
            Ok(products) => GetCartResponse::Ok(Json(CartResponse::new(username.0, products))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a user's cart
    #[oai(path = "/carts/:username/items", method = "post", tag = "ApiTags::Carts")]
    async fn add_item(
        &self,
        username: Path<String>,
        body: Json<AddCartItemRequest>,
    ) -> CartMutationResponse {
        let params = AddToCartParams {
            username: Username::new(username.0),
            product_id: ProductId::new(body.0.product_id),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(()) => CartMutationResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartMutationResponse::InternalError(json)
            }
        }
    }

    /// Remove one unit of a product from a user's cart
    ///
    /// Removing a product that is not in the cart succeeds without changes.
    #[oai(
        path = "/carts/:username/items/:product_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_item(
        &self,
        username: Path<String>,
        product_id: Path<i64>,
    ) -> CartMutationResponse {
        let params = RemoveFromCartParams {
            username: Username::new(username.0),
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(()) => CartMutationResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartMutationResponse::InternalError(json)
            }
        }
    }

    /// Delete a user's cart
    ///
    /// Idempotent: deleting a missing cart succeeds.
    #[oai(path = "/carts/:username", method = "delete", tag = "ApiTags::Carts")]
    async fn delete(&self, username: Path<String>) -> CartMutationResponse {
        let params = DeleteCartParams {
            username: Username::new(username.0),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => CartMutationResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartMutationResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
