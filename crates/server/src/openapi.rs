use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(ToSchema)]
pub struct RegisterRequest { pub name: String, pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct UserDoc { pub id: Uuid, pub name: String, pub email: String }

#[derive(ToSchema)]
pub struct RegisterResponse { pub message: String, pub user: UserDoc }

#[derive(ToSchema)]
pub struct LoginResponse { pub message: String, pub token: String }

#[derive(ToSchema)]
pub struct UsersResponse { pub users: Vec<UserDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::users::list,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            RegisterRequest,
            LoginRequest,
            UserDoc,
            RegisterResponse,
            LoginResponse,
            UsersResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "users"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/register", "/login", "/users"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
