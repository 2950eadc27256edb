use crate::models::*;
use crate::services::GameService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/games",
    tag = "game",
    responses(
        (status = 200, description = "获取游戏列表成功")
    )
)]
pub async fn find_all_games(game_service: web::Data<GameService>) -> Result<HttpResponse> {
    match game_service.find_all_games().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/games/open",
    tag = "game",
    responses(
        (status = 200, description = "获取启用游戏列表成功")
    )
)]
pub async fn find_all_open_games(game_service: web::Data<GameService>) -> Result<HttpResponse> {
    match game_service.find_all_open_games().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "game",
    params(
        ("id" = String, Path, description = "游戏ID")
    ),
    responses(
        (status = 200, description = "获取游戏成功", body = GameVO),
        (status = 404, description = "游戏不存在")
    )
)]
pub async fn find_game_by_id(
    game_service: web::Data<GameService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match game_service.find_game_by_id(&path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/games",
    tag = "game",
    request_body = GameParam,
    responses(
        (status = 200, description = "保存游戏成功"),
        (status = 400, description = "请求参数错误"),
        (status = 409, description = "游戏代码已存在")
    )
)]
pub async fn add_or_update_game(
    game_service: web::Data<GameService>,
    param: web::Json<GameParam>,
) -> Result<HttpResponse> {
    match game_service.add_or_update_game(param.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "保存成功"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "game",
    params(
        ("id" = String, Path, description = "游戏ID")
    ),
    responses(
        (status = 200, description = "删除游戏成功 (级联删除玩法与号码位置规则)"),
        (status = 404, description = "游戏不存在")
    )
)]
pub async fn del_game_by_id(
    game_service: web::Data<GameService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match game_service.del_game_by_id(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "删除成功"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn game_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/games")
            .route("", web::get().to(find_all_games))
            .route("", web::post().to(add_or_update_game))
            .route("/open", web::get().to(find_all_open_games))
            .route("/{id}", web::get().to(find_game_by_id))
            .route("/{id}", web::delete().to(del_game_by_id)),
    );
}
