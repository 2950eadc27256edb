use crate::entities::{
    game_entity as games, game_play_entity as game_plays, num_locate_entity as num_locates,
};
use crate::error::{AppError, AppResult};
use crate::models::{GameParam, GamePlayParam, GamePlayVO, GameVO};
use crate::utils::generate_id;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct GameService {
    pool: DatabaseConnection,
}

impl GameService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 获取全部游戏 (按排序号升序)
    pub async fn find_all_games(&self) -> AppResult<Vec<GameVO>> {
        let list = games::Entity::find()
            .order_by_asc(games::Column::OrderNo)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 获取启用状态的游戏 (按排序号升序)
    pub async fn find_all_open_games(&self) -> AppResult<Vec<GameVO>> {
        let list = games::Entity::find()
            .filter(games::Column::State.eq(games::STATE_OPEN))
            .order_by_asc(games::Column::OrderNo)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 按ID获取游戏
    pub async fn find_game_by_id(&self, id: &str) -> AppResult<GameVO> {
        let game = games::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game not found: {id}")))?;
        Ok(game.into())
    }

    /// 删除游戏, 级联删除其全部玩法及玩法下的号码位置规则
    pub async fn del_game_by_id(&self, id: &str) -> AppResult<()> {
        let txn = self.pool.begin().await?;

        let game = games::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game not found: {id}")))?;

        let game_play_list = game_plays::Entity::find()
            .filter(game_plays::Column::GameCode.eq(game.game_code.as_str()))
            .order_by_asc(game_plays::Column::OrderNo)
            .all(&txn)
            .await?;

        for game_play in &game_play_list {
            num_locates::Entity::delete_many()
                .filter(num_locates::Column::GamePlayId.eq(game_play.id.as_str()))
                .exec(&txn)
                .await?;
        }
        game_plays::Entity::delete_many()
            .filter(game_plays::Column::GameCode.eq(game.game_code.as_str()))
            .exec(&txn)
            .await?;
        game.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// 按游戏代码获取玩法列表 (不带号码位置规则)
    pub async fn find_game_plays_by_game_code(&self, game_code: &str) -> AppResult<Vec<GamePlayVO>> {
        let list = game_plays::Entity::find()
            .filter(game_plays::Column::GameCode.eq(game_code))
            .order_by_asc(game_plays::Column::OrderNo)
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 按游戏代码获取玩法列表, 并为每个玩法装配号码位置规则
    pub async fn find_game_plays_with_num_locates_by_game_code(
        &self,
        game_code: &str,
    ) -> AppResult<Vec<GamePlayVO>> {
        let game_play_list = game_plays::Entity::find()
            .filter(game_plays::Column::GameCode.eq(game_code))
            .order_by_asc(game_plays::Column::OrderNo)
            .all(&self.pool)
            .await?;

        let mut vos = Vec::with_capacity(game_play_list.len());
        for game_play in game_play_list {
            let num_locate_list = self.find_num_locates(&game_play.id).await?;
            let mut vo = GamePlayVO::from(game_play);
            vo.num_locates = Some(num_locate_list.into_iter().map(Into::into).collect());
            vos.push(vo);
        }
        Ok(vos)
    }

    /// 按ID获取玩法明细 (含号码位置规则)
    pub async fn find_game_play_details_by_id(&self, id: &str) -> AppResult<GamePlayVO> {
        let game_play = game_plays::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game play not found: {id}")))?;

        let num_locate_list = self.find_num_locates(&game_play.id).await?;
        let mut vo = GamePlayVO::from(game_play);
        vo.num_locates = Some(num_locate_list.into_iter().map(Into::into).collect());
        Ok(vo)
    }

    /// 修改玩法状态 (状态值不做枚举校验, 与存储层约束保持一致)
    pub async fn update_game_play_state(&self, id: &str, state: &str) -> AppResult<()> {
        let txn = self.pool.begin().await?;

        let game_play = game_plays::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game play not found: {id}")))?;

        let mut am = game_play.into_active_model();
        am.state = Set(state.to_string());
        am.updated_at = Set(Some(Utc::now()));
        am.update(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// 删除玩法, 级联删除其号码位置规则
    pub async fn del_game_play_by_id(&self, id: &str) -> AppResult<()> {
        let txn = self.pool.begin().await?;

        num_locates::Entity::delete_many()
            .filter(num_locates::Column::GamePlayId.eq(id))
            .exec(&txn)
            .await?;

        let game_play = game_plays::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game play not found: {id}")))?;
        game_play.delete(&txn).await?;

        txn.commit().await?;
        Ok(())
    }

    /// 新增或修改游戏
    ///
    /// 逻辑:
    /// 1. 参数校验
    /// 2. id 为空走新增, 否则走修改; 两个分支都校验 game_code 唯一
    /// 3. 保存后如带有 copy_game_code, 从来源游戏复制玩法配置
    /// 整个过程在一个事务内完成
    pub async fn add_or_update_game(&self, param: GameParam) -> AppResult<()> {
        param.validate()?;
        let txn = self.pool.begin().await?;

        let exist_game = games::Entity::find()
            .filter(games::Column::GameCode.eq(param.game_code.trim()))
            .one(&txn)
            .await?;

        // 新增
        let game = match param.existing_id() {
            None => {
                if exist_game.is_some() {
                    return Err(AppError::GameCodeExists);
                }
                param.to_new_active_model().insert(&txn).await?
            }
            // 修改
            Some(id) => {
                if let Some(exist_game) = exist_game
                    && exist_game.id != id
                {
                    return Err(AppError::GameCodeExists);
                }
                let game = games::Entity::find_by_id(id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Game not found: {id}")))?;
                param.apply_to(game).update(&txn).await?
            }
        };

        self.copy_game_plays_tx(&txn, &game, param.copy_source())
            .await?;

        txn.commit().await?;
        Ok(())
    }

    /// 从来源游戏复制玩法配置到目标游戏 (独立事务入口)
    pub async fn copy_game_plays(
        &self,
        game: &games::Model,
        copy_game_code: Option<&str>,
    ) -> AppResult<()> {
        let txn = self.pool.begin().await?;
        self.copy_game_plays_tx(&txn, game, copy_game_code).await?;
        txn.commit().await?;
        Ok(())
    }

    /// 复制玩法配置 (加入调用方事务)
    ///
    /// 逻辑:
    /// 1. 来源代码为空直接返回
    /// 2. 逐个遍历来源游戏的玩法; 目标游戏下已存在相同玩法代码的跳过
    /// 3. 深拷贝玩法 (新ID, game_code 改写为目标游戏代码)
    /// 4. 深拷贝玩法下的号码位置规则 (新ID, game_play_id 改写为新玩法ID)
    /// 只增不改, 重复执行不会产生新记录
    async fn copy_game_plays_tx(
        &self,
        txn: &DatabaseTransaction,
        game: &games::Model,
        copy_game_code: Option<&str>,
    ) -> AppResult<()> {
        let Some(copy_game_code) = copy_game_code.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(());
        };

        let source_plays = game_plays::Entity::find()
            .filter(game_plays::Column::GameCode.eq(copy_game_code))
            .order_by_asc(game_plays::Column::OrderNo)
            .all(txn)
            .await?;

        for source_play in source_plays {
            let exist_play = game_plays::Entity::find()
                .filter(game_plays::Column::GameCode.eq(game.game_code.as_str()))
                .filter(game_plays::Column::GamePlayCode.eq(source_play.game_play_code.as_str()))
                .one(txn)
                .await?;
            if exist_play.is_some() {
                continue;
            }

            let new_play = game_plays::ActiveModel {
                id: Set(generate_id()),
                game_code: Set(game.game_code.clone()),
                game_play_code: Set(source_play.game_play_code.clone()),
                game_play_name: Set(source_play.game_play_name.clone()),
                order_no: Set(source_play.order_no),
                state: Set(source_play.state.clone()),
                remarks: Set(source_play.remarks.clone()),
                created_at: Set(Some(Utc::now())),
                updated_at: Set(None),
            }
            .insert(txn)
            .await?;

            let source_locates = num_locates::Entity::find()
                .filter(num_locates::Column::GamePlayId.eq(source_play.id.as_str()))
                .order_by_asc(num_locates::Column::PositionNo)
                .all(txn)
                .await?;
            for source_locate in source_locates {
                num_locates::ActiveModel {
                    id: Set(generate_id()),
                    game_play_id: Set(new_play.id.clone()),
                    locate_name: Set(source_locate.locate_name),
                    position_no: Set(source_locate.position_no),
                    remarks: Set(source_locate.remarks),
                }
                .insert(txn)
                .await?;
            }
        }
        Ok(())
    }

    /// 新增或修改玩法
    ///
    /// 两个分支都校验 (game_code, game_play_code) 唯一;
    /// 修改时旧的号码位置规则整组删除, 再按参数重建 (不做局部合并)
    pub async fn add_or_update_game_play(&self, param: GamePlayParam) -> AppResult<()> {
        param.validate()?;
        let txn = self.pool.begin().await?;

        let exist_play = game_plays::Entity::find()
            .filter(game_plays::Column::GameCode.eq(param.game_code.trim()))
            .filter(game_plays::Column::GamePlayCode.eq(param.game_play_code.trim()))
            .one(&txn)
            .await?;

        // 新增
        let game_play = match param.existing_id() {
            None => {
                if exist_play.is_some() {
                    return Err(AppError::GamePlayCodeExists);
                }
                param.to_new_active_model().insert(&txn).await?
            }
            // 修改
            Some(id) => {
                if let Some(exist_play) = exist_play
                    && exist_play.id != id
                {
                    return Err(AppError::GamePlayCodeExists);
                }
                num_locates::Entity::delete_many()
                    .filter(num_locates::Column::GamePlayId.eq(id))
                    .exec(&txn)
                    .await?;

                let game_play = game_plays::Entity::find_by_id(id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Game play not found: {id}")))?;
                param.apply_to(game_play).update(&txn).await?
            }
        };

        if let Some(num_locate_params) = &param.num_locates {
            for num_locate_param in num_locate_params {
                num_locate_param
                    .to_new_active_model(&game_play.id)
                    .insert(&txn)
                    .await?;
            }
        }

        txn.commit().await?;
        Ok(())
    }

    async fn find_num_locates(&self, game_play_id: &str) -> AppResult<Vec<num_locates::Model>> {
        Ok(num_locates::Entity::find()
            .filter(num_locates::Column::GamePlayId.eq(game_play_id))
            .order_by_asc(num_locates::Column::PositionNo)
            .all(&self.pool)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NumLocateParam;
    use sea_orm::{ConnectionTrait, Database, DbBackend, PaginatorTrait, Schema};

    async fn setup_service() -> GameService {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let schema = Schema::new(DbBackend::Sqlite);
        let statements = [
            schema.create_table_from_entity(games::Entity),
            schema.create_table_from_entity(game_plays::Entity),
            schema.create_table_from_entity(num_locates::Entity),
        ];
        for stmt in statements {
            db.execute(db.get_database_backend().build(&stmt))
                .await
                .unwrap();
        }
        GameService::new(db)
    }

    fn game_param(game_code: &str, game_name: &str, order_no: i32) -> GameParam {
        GameParam {
            id: None,
            game_code: game_code.to_string(),
            game_name: game_name.to_string(),
            order_no: Some(order_no),
            state: games::STATE_OPEN.to_string(),
            remarks: None,
            copy_game_code: None,
        }
    }

    fn game_play_param(
        game_code: &str,
        game_play_code: &str,
        num_locates: Vec<NumLocateParam>,
    ) -> GamePlayParam {
        GamePlayParam {
            id: None,
            game_code: game_code.to_string(),
            game_play_code: game_play_code.to_string(),
            game_play_name: format!("玩法 {game_play_code}"),
            order_no: Some(1),
            state: "1".to_string(),
            remarks: None,
            num_locates: if num_locates.is_empty() {
                None
            } else {
                Some(num_locates)
            },
        }
    }

    fn num_locate_param(locate_name: &str, position_no: i32) -> NumLocateParam {
        NumLocateParam {
            locate_name: locate_name.to_string(),
            position_no: Some(position_no),
            remarks: None,
        }
    }

    async fn game_id_by_code(service: &GameService, game_code: &str) -> String {
        games::Entity::find()
            .filter(games::Column::GameCode.eq(game_code))
            .one(&service.pool)
            .await
            .unwrap()
            .unwrap()
            .id
    }

    async fn play_id_by_codes(service: &GameService, game_code: &str, play_code: &str) -> String {
        game_plays::Entity::find()
            .filter(game_plays::Column::GameCode.eq(game_code))
            .filter(game_plays::Column::GamePlayCode.eq(play_code))
            .one(&service.pool)
            .await
            .unwrap()
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_find_all_games_ordered() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("jsk3", "江苏快三", 2))
            .await
            .unwrap();
        service
            .add_or_update_game(game_param("cqssc", "重庆时时彩", 1))
            .await
            .unwrap();

        let games_list = service.find_all_games().await.unwrap();
        assert_eq!(games_list.len(), 2);
        assert_eq!(games_list[0].game_code, "cqssc");
        assert_eq!(games_list[1].game_code, "jsk3");
    }

    #[tokio::test]
    async fn test_find_all_open_games_filters_state() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("cqssc", "重庆时时彩", 1))
            .await
            .unwrap();
        let mut closed = game_param("jsk3", "江苏快三", 2);
        closed.state = games::STATE_CLOSED.to_string();
        service.add_or_update_game(closed).await.unwrap();

        let open_games = service.find_all_open_games().await.unwrap();
        assert_eq!(open_games.len(), 1);
        assert_eq!(open_games[0].game_code, "cqssc");
    }

    #[tokio::test]
    async fn test_find_game_by_id_not_found() {
        let service = setup_service().await;
        let err = service.find_game_by_id("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_game_code_on_create() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("cqssc", "重庆时时彩", 1))
            .await
            .unwrap();

        let err = service
            .add_or_update_game(game_param("cqssc", "另一个时时彩", 2))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::GameCodeExists));

        // 失败的创建不落库, 同代码游戏仍只有一条
        let count = games::Entity::find()
            .filter(games::Column::GameCode.eq("cqssc"))
            .count(&service.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_update_game_overwrites_fields() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("cqssc", "重庆时时彩", 1))
            .await
            .unwrap();
        let id = game_id_by_code(&service, "cqssc").await;

        let mut update = game_param("cqssc", "时时彩(新)", 9);
        update.id = Some(id.clone());
        update.state = games::STATE_CLOSED.to_string();
        service.add_or_update_game(update).await.unwrap();

        let vo = service.find_game_by_id(&id).await.unwrap();
        assert_eq!(vo.game_name, "时时彩(新)");
        assert_eq!(vo.order_no, Some(9));
        assert_eq!(vo.state, games::STATE_CLOSED);
    }

    #[tokio::test]
    async fn test_update_game_rejects_code_held_by_other_game() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("cqssc", "重庆时时彩", 1))
            .await
            .unwrap();
        service
            .add_or_update_game(game_param("jsk3", "江苏快三", 2))
            .await
            .unwrap();
        let jsk3_id = game_id_by_code(&service, "jsk3").await;

        // 把 jsk3 的代码改成 cqssc, 与另一条记录冲突
        let mut update = game_param("cqssc", "江苏快三", 2);
        update.id = Some(jsk3_id);
        let err = service.add_or_update_game(update).await.unwrap_err();
        assert!(matches!(err, AppError::GameCodeExists));
    }

    #[tokio::test]
    async fn test_duplicate_game_play_code_on_create() {
        let service = setup_service().await;
        service
            .add_or_update_game_play(game_play_param("cqssc", "wx_fushi", vec![]))
            .await
            .unwrap();

        let err = service
            .add_or_update_game_play(game_play_param("cqssc", "wx_fushi", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::GamePlayCodeExists));

        // 同一代码在不同游戏下允许
        service
            .add_or_update_game_play(game_play_param("jsk3", "wx_fushi", vec![]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_game_play_inserts_num_locates() {
        let service = setup_service().await;
        service
            .add_or_update_game_play(game_play_param(
                "cqssc",
                "wx_fushi",
                vec![num_locate_param("万位", 1), num_locate_param("千位", 2)],
            ))
            .await
            .unwrap();

        let play_id = play_id_by_codes(&service, "cqssc", "wx_fushi").await;
        let vo = service.find_game_play_details_by_id(&play_id).await.unwrap();
        let locates = vo.num_locates.unwrap();
        assert_eq!(locates.len(), 2);
        assert_eq!(locates[0].locate_name, "万位");
        assert!(locates.iter().all(|l| l.game_play_id == play_id));
    }

    #[tokio::test]
    async fn test_update_game_play_replaces_num_locates() {
        let service = setup_service().await;
        service
            .add_or_update_game_play(game_play_param(
                "cqssc",
                "wx_fushi",
                vec![num_locate_param("万位", 1), num_locate_param("千位", 2)],
            ))
            .await
            .unwrap();
        let play_id = play_id_by_codes(&service, "cqssc", "wx_fushi").await;

        let mut update = game_play_param("cqssc", "wx_fushi", vec![num_locate_param("百位", 3)]);
        update.id = Some(play_id.clone());
        service.add_or_update_game_play(update.clone()).await.unwrap();

        let locates = service.find_num_locates(&play_id).await.unwrap();
        assert_eq!(locates.len(), 1);
        assert_eq!(locates[0].locate_name, "百位");

        // 幂等: 重复提交同样的修改, 最终规则集不变
        service.add_or_update_game_play(update).await.unwrap();
        let locates = service.find_num_locates(&play_id).await.unwrap();
        assert_eq!(locates.len(), 1);
        assert_eq!(locates[0].locate_name, "百位");
    }

    #[tokio::test]
    async fn test_del_game_play_cascades_num_locates() {
        let service = setup_service().await;
        service
            .add_or_update_game_play(game_play_param(
                "cqssc",
                "wx_fushi",
                vec![num_locate_param("万位", 1)],
            ))
            .await
            .unwrap();
        let play_id = play_id_by_codes(&service, "cqssc", "wx_fushi").await;

        service.del_game_play_by_id(&play_id).await.unwrap();

        assert_eq!(
            game_plays::Entity::find().count(&service.pool).await.unwrap(),
            0
        );
        assert_eq!(
            num_locates::Entity::find().count(&service.pool).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_del_game_cascades_plays_and_num_locates() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("cqssc", "重庆时时彩", 1))
            .await
            .unwrap();
        service
            .add_or_update_game_play(game_play_param(
                "cqssc",
                "wx_fushi",
                vec![num_locate_param("万位", 1)],
            ))
            .await
            .unwrap();
        service
            .add_or_update_game_play(game_play_param(
                "cqssc",
                "sx_fushi",
                vec![num_locate_param("千位", 1)],
            ))
            .await
            .unwrap();
        // 其它游戏的数据不受影响
        service
            .add_or_update_game(game_param("jsk3", "江苏快三", 2))
            .await
            .unwrap();
        service
            .add_or_update_game_play(game_play_param("jsk3", "hezhi", vec![]))
            .await
            .unwrap();

        let id = game_id_by_code(&service, "cqssc").await;
        service.del_game_by_id(&id).await.unwrap();

        assert_eq!(games::Entity::find().count(&service.pool).await.unwrap(), 1);
        let remaining_plays = game_plays::Entity::find().all(&service.pool).await.unwrap();
        assert_eq!(remaining_plays.len(), 1);
        assert_eq!(remaining_plays[0].game_code, "jsk3");
        assert_eq!(
            num_locates::Entity::find().count(&service.pool).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_update_game_play_state() {
        let service = setup_service().await;
        service
            .add_or_update_game_play(game_play_param("cqssc", "wx_fushi", vec![]))
            .await
            .unwrap();
        let play_id = play_id_by_codes(&service, "cqssc", "wx_fushi").await;

        service.update_game_play_state(&play_id, "0").await.unwrap();

        let vo = service.find_game_play_details_by_id(&play_id).await.unwrap();
        assert_eq!(vo.state, "0");
    }

    #[tokio::test]
    async fn test_find_game_plays_by_game_code() {
        let service = setup_service().await;
        service
            .add_or_update_game_play(game_play_param(
                "cqssc",
                "wx_fushi",
                vec![num_locate_param("万位", 1)],
            ))
            .await
            .unwrap();

        let plain = service.find_game_plays_by_game_code("cqssc").await.unwrap();
        assert_eq!(plain.len(), 1);
        assert!(plain[0].num_locates.is_none());

        let with_rules = service
            .find_game_plays_with_num_locates_by_game_code("cqssc")
            .await
            .unwrap();
        assert_eq!(with_rules.len(), 1);
        assert_eq!(with_rules[0].num_locates.as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_game_with_copy_source_clones_plays() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("A1", "来源游戏", 1))
            .await
            .unwrap();
        service
            .add_or_update_game_play(game_play_param(
                "A1",
                "P1",
                vec![num_locate_param("万位", 1), num_locate_param("千位", 2)],
            ))
            .await
            .unwrap();
        service
            .add_or_update_game_play(game_play_param("A1", "P2", vec![num_locate_param("和值", 1)]))
            .await
            .unwrap();

        let mut target = game_param("B1", "目标游戏", 2);
        target.copy_game_code = Some("A1".to_string());
        service.add_or_update_game(target).await.unwrap();

        // 目标游戏下生成了两份新玩法, ID 均为新生成
        let copied = service.find_game_plays_by_game_code("B1").await.unwrap();
        assert_eq!(copied.len(), 2);
        let source = service.find_game_plays_by_game_code("A1").await.unwrap();
        for copy in &copied {
            assert!(source.iter().all(|s| s.id != copy.id));
            assert_eq!(copy.game_code, "B1");
        }

        // 规则同样被深拷贝并指向新玩法
        let p1_id = play_id_by_codes(&service, "B1", "P1").await;
        let p1_locates = service.find_num_locates(&p1_id).await.unwrap();
        assert_eq!(p1_locates.len(), 2);

        // 来源游戏的数据未被改动
        let source_p1_id = play_id_by_codes(&service, "A1", "P1").await;
        assert_eq!(service.find_num_locates(&source_p1_id).await.unwrap().len(), 2);
        assert_eq!(source.len(), 2);
    }

    #[tokio::test]
    async fn test_copy_game_plays_is_idempotent() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("A1", "来源游戏", 1))
            .await
            .unwrap();
        service
            .add_or_update_game_play(game_play_param("A1", "P1", vec![num_locate_param("万位", 1)]))
            .await
            .unwrap();

        let mut target = game_param("B1", "目标游戏", 2);
        target.copy_game_code = Some("A1".to_string());
        service.add_or_update_game(target).await.unwrap();

        let plays_before = game_plays::Entity::find().count(&service.pool).await.unwrap();
        let locates_before = num_locates::Entity::find().count(&service.pool).await.unwrap();

        // 再次执行复制, 不应产生任何新记录
        let target_game = games::Entity::find()
            .filter(games::Column::GameCode.eq("B1"))
            .one(&service.pool)
            .await
            .unwrap()
            .unwrap();
        service
            .copy_game_plays(&target_game, Some("A1"))
            .await
            .unwrap();

        assert_eq!(
            game_plays::Entity::find().count(&service.pool).await.unwrap(),
            plays_before
        );
        assert_eq!(
            num_locates::Entity::find().count(&service.pool).await.unwrap(),
            locates_before
        );
    }

    #[tokio::test]
    async fn test_copy_game_plays_blank_source_is_noop() {
        let service = setup_service().await;
        service
            .add_or_update_game(game_param("B1", "目标游戏", 1))
            .await
            .unwrap();
        service
            .add_or_update_game_play(game_play_param("B1", "P1", vec![]))
            .await
            .unwrap();

        let target_game = games::Entity::find()
            .filter(games::Column::GameCode.eq("B1"))
            .one(&service.pool)
            .await
            .unwrap()
            .unwrap();
        service.copy_game_plays(&target_game, None).await.unwrap();

        let plays = service.find_game_plays_by_game_code("B1").await.unwrap();
        assert_eq!(plays.len(), 1);
    }

    #[tokio::test]
    async fn test_add_or_update_game_rejects_invalid_param() {
        let service = setup_service().await;
        let param = game_param("", "无代码", 1);
        let err = service.add_or_update_game(param).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert_eq!(games::Entity::find().count(&service.pool).await.unwrap(), 0);
    }
}
