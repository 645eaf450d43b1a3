use crate::application::http::{
    menu::router::MenuApiDoc, preferences::router::PreferencesApiDoc,
    recommendation::router::RecommendationApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MealMint API"
    ),
    nest(
        (path = "/recommend", api = RecommendationApiDoc),
        (path = "/menu", api = MenuApiDoc),
        (path = "/preferences", api = PreferencesApiDoc),
    )
)]
pub struct ApiDoc;
