use sea_orm_migration::prelude::*;

/// Games (游戏/彩种目录表)
#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    GameCode,
    GameName,
    OrderNo,
    State,
    Remarks,
    CreatedAt,
    UpdatedAt,
}

/// Game Plays (玩法表, 通过 game_code 关联游戏)
#[derive(DeriveIden)]
enum GamePlays {
    Table,
    Id,
    GameCode,
    GamePlayCode,
    GamePlayName,
    OrderNo,
    State,
    Remarks,
    CreatedAt,
    UpdatedAt,
}

/// Num Locates (号码位置规则表, 通过 game_play_id 关联玩法)
#[derive(DeriveIden)]
enum NumLocates {
    Table,
    Id,
    GamePlayId,
    LocateName,
    PositionNo,
    Remarks,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// 约束说明:
/// - games.game_code 全局唯一
/// - (game_plays.game_code, game_plays.game_play_code) 联合唯一
/// - num_locates.game_play_id 普通索引, 供级联删除与规则装配查询
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 游戏表
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::GameCode).string_len(64).not_null())
                    .col(ColumnDef::new(Games::GameName).string_len(128).not_null())
                    .col(ColumnDef::new(Games::OrderNo).integer().null())
                    .col(ColumnDef::new(Games::State).string_len(8).not_null())
                    .col(ColumnDef::new(Games::Remarks).string_len(512).null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uk_games_game_code")
                    .table(Games::Table)
                    .col(Games::GameCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 玩法表
        manager
            .create_table(
                Table::create()
                    .table(GamePlays::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GamePlays::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GamePlays::GameCode)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GamePlays::GamePlayCode)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GamePlays::GamePlayName)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(GamePlays::OrderNo).integer().null())
                    .col(ColumnDef::new(GamePlays::State).string_len(8).not_null())
                    .col(ColumnDef::new(GamePlays::Remarks).string_len(512).null())
                    .col(
                        ColumnDef::new(GamePlays::CreatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GamePlays::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uk_game_plays_game_code_game_play_code")
                    .table(GamePlays::Table)
                    .col(GamePlays::GameCode)
                    .col(GamePlays::GamePlayCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 号码位置规则表
        manager
            .create_table(
                Table::create()
                    .table(NumLocates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NumLocates::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NumLocates::GamePlayId)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(NumLocates::LocateName)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(NumLocates::PositionNo).integer().null())
                    .col(ColumnDef::new(NumLocates::Remarks).string_len(512).null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_num_locates_game_play_id")
                    .table(NumLocates::Table)
                    .col(NumLocates::GamePlayId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NumLocates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GamePlays::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        Ok(())
    }
}
