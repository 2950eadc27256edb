use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::game::find_all_games,
        handlers::game::find_all_open_games,
        handlers::game::find_game_by_id,
        handlers::game::add_or_update_game,
        handlers::game::del_game_by_id,
        handlers::game_play::find_game_plays,
        handlers::game_play::find_game_plays_with_num_locates,
        handlers::game_play::find_game_play_details,
        handlers::game_play::add_or_update_game_play,
        handlers::game_play::update_game_play_state,
        handlers::game_play::del_game_play_by_id,
    ),
    components(
        schemas(
            GameParam,
            GameVO,
            GamePlayQuery,
            GamePlayParam,
            GamePlayVO,
            UpdateGamePlayStateRequest,
            NumLocateParam,
            NumLocateVO,
        )
    ),
    tags(
        (name = "game", description = "游戏管理"),
        (name = "game_play", description = "玩法与号码位置规则管理")
    ),
    info(
        title = "Lottery Catalog API",
        version = "0.1.0",
        description = "Lottery catalog backend REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
