use crate::models::*;
use crate::services::GameService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/game-plays",
    tag = "game_play",
    params(
        ("game_code" = String, Query, description = "所属游戏代码")
    ),
    responses(
        (status = 200, description = "获取玩法列表成功")
    )
)]
pub async fn find_game_plays(
    game_service: web::Data<GameService>,
    query: web::Query<GamePlayQuery>,
) -> Result<HttpResponse> {
    match game_service
        .find_game_plays_by_game_code(&query.game_code)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/game-plays/with-num-locates",
    tag = "game_play",
    params(
        ("game_code" = String, Query, description = "所属游戏代码")
    ),
    responses(
        (status = 200, description = "获取玩法及号码位置规则成功")
    )
)]
pub async fn find_game_plays_with_num_locates(
    game_service: web::Data<GameService>,
    query: web::Query<GamePlayQuery>,
) -> Result<HttpResponse> {
    match game_service
        .find_game_plays_with_num_locates_by_game_code(&query.game_code)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/game-plays/{id}",
    tag = "game_play",
    params(
        ("id" = String, Path, description = "玩法ID")
    ),
    responses(
        (status = 200, description = "获取玩法明细成功", body = GamePlayVO),
        (status = 404, description = "玩法不存在")
    )
)]
pub async fn find_game_play_details(
    game_service: web::Data<GameService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match game_service
        .find_game_play_details_by_id(&path.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/game-plays",
    tag = "game_play",
    request_body = GamePlayParam,
    responses(
        (status = 200, description = "保存玩法成功"),
        (status = 400, description = "请求参数错误"),
        (status = 409, description = "玩法代码已存在")
    )
)]
pub async fn add_or_update_game_play(
    game_service: web::Data<GameService>,
    param: web::Json<GamePlayParam>,
) -> Result<HttpResponse> {
    match game_service
        .add_or_update_game_play(param.into_inner())
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "保存成功"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/game-plays/{id}/state",
    tag = "game_play",
    params(
        ("id" = String, Path, description = "玩法ID")
    ),
    request_body = UpdateGamePlayStateRequest,
    responses(
        (status = 200, description = "修改玩法状态成功"),
        (status = 404, description = "玩法不存在")
    )
)]
pub async fn update_game_play_state(
    game_service: web::Data<GameService>,
    path: web::Path<String>,
    request: web::Json<UpdateGamePlayStateRequest>,
) -> Result<HttpResponse> {
    match game_service
        .update_game_play_state(&path.into_inner(), &request.state)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "状态修改成功"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/game-plays/{id}",
    tag = "game_play",
    params(
        ("id" = String, Path, description = "玩法ID")
    ),
    responses(
        (status = 200, description = "删除玩法成功 (级联删除号码位置规则)"),
        (status = 404, description = "玩法不存在")
    )
)]
pub async fn del_game_play_by_id(
    game_service: web::Data<GameService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match game_service.del_game_play_by_id(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "删除成功"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn game_play_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/game-plays")
            .route("", web::get().to(find_game_plays))
            .route("", web::post().to(add_or_update_game_play))
            .route(
                "/with-num-locates",
                web::get().to(find_game_plays_with_num_locates),
            )
            .route("/{id}", web::get().to(find_game_play_details))
            .route("/{id}/state", web::put().to(update_game_play_state))
            .route("/{id}", web::delete().to(del_game_play_by_id)),
    );
}
