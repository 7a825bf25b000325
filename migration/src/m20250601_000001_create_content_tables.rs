use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Authors Table
        manager.create_table(
            Table::create()
                .table(Authors::Table)
                .if_not_exists()
                .col(ColumnDef::new(Authors::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Authors::PublicId).uuid().not_null().unique_key()) // External ID
                .col(ColumnDef::new(Authors::Name).string().not_null())
                .col(ColumnDef::new(Authors::Slug).string().not_null().unique_key())
                .col(ColumnDef::new(Authors::Email).string().not_null())
                .col(ColumnDef::new(Authors::Bio).text().null())
                .col(ColumnDef::new(Authors::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 2. Categories Table
        manager.create_table(
            Table::create()
                .table(Categories::Table)
                .if_not_exists()
                .col(ColumnDef::new(Categories::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Categories::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Categories::Name).string().not_null())
                .col(ColumnDef::new(Categories::Slug).string().not_null().unique_key())
                .col(ColumnDef::new(Categories::Description).text().null())
                .col(ColumnDef::new(Categories::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 3. Tags Table
        manager.create_table(
            Table::create()
                .table(Tags::Table)
                .if_not_exists()
                .col(ColumnDef::new(Tags::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Tags::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Tags::Name).string().not_null().unique_key())
                .col(ColumnDef::new(Tags::Slug).string().not_null().unique_key())
                .col(ColumnDef::new(Tags::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 4. Media Table (assets are uploaded elsewhere; the seeder only reads)
        manager.create_table(
            Table::create()
                .table(Media::Table)
                .if_not_exists()
                .col(ColumnDef::new(Media::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Media::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Media::Name).string().not_null())
                .col(ColumnDef::new(Media::Url).string().not_null().unique_key())
                .col(ColumnDef::new(Media::MimeType).string().not_null())
                .col(ColumnDef::new(Media::Size).big_integer().not_null())
                .col(ColumnDef::new(Media::AltText).string().null())
                .col(ColumnDef::new(Media::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        // 5. Posts Table
        manager.create_table(
            Table::create()
                .table(Posts::Table)
                .if_not_exists()
                .col(ColumnDef::new(Posts::Id).big_integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Posts::PublicId).uuid().not_null().unique_key())
                .col(ColumnDef::new(Posts::Title).string().not_null())
                .col(ColumnDef::new(Posts::Slug).string().not_null().unique_key())
                .col(ColumnDef::new(Posts::Content).text().not_null())
                .col(ColumnDef::new(Posts::PublishedDate).date().null())
                .col(ColumnDef::new(Posts::PublishedAt).timestamp_with_time_zone().null())
                .col(ColumnDef::new(Posts::CoverImageId).big_integer().null())
                .col(ColumnDef::new(Posts::AuthorId).big_integer().not_null())
                .col(ColumnDef::new(Posts::CategoryId).big_integer().not_null())
                .col(ColumnDef::new(Posts::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Posts::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_posts_author_id")
                        .from(Posts::Table, Posts::AuthorId)
                        .to(Authors::Table, Authors::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_posts_category_id")
                        .from(Posts::Table, Posts::CategoryId)
                        .to(Categories::Table, Categories::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_posts_cover_image_id")
                        .from(Posts::Table, Posts::CoverImageId)
                        .to(Media::Table, Media::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                )
                .to_owned(),
        ).await?;

        // 6. Post-Tag Join Table
        manager.create_table(
            Table::create()
                .table(PostTags::Table)
                .if_not_exists()
                .col(ColumnDef::new(PostTags::PostId).big_integer().not_null())
                .col(ColumnDef::new(PostTags::TagId).big_integer().not_null())
                .primary_key(Index::create().col(PostTags::PostId).col(PostTags::TagId))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_tags_post_id")
                        .from(PostTags::Table, PostTags::PostId)
                        .to(Posts::Table, Posts::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_post_tags_tag_id")
                        .from(PostTags::Table, PostTags::TagId)
                        .to(Tags::Table, Tags::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // Index for listing/sorting
        manager.create_index(Index::create().name("idx_posts_published_at").table(Posts::Table).col(Posts::PublishedAt).to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PostTags::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Posts::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Media::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Tags::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Categories::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Authors::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
    PublicId,
    Name,
    Slug,
    Email,
    Bio,
    CreatedAt,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
    PublicId,
    Name,
    Slug,
    Description,
    CreatedAt,
}

#[derive(Iden)]
enum Tags {
    Table,
    Id,
    PublicId,
    Name,
    Slug,
    CreatedAt,
}

#[derive(Iden)]
enum Media {
    Table,
    Id,
    PublicId,
    Name,
    Url,
    MimeType,
    Size,
    AltText,
    CreatedAt,
}

#[derive(Iden)]
enum Posts {
    Table,
    Id,
    PublicId,
    Title,
    Slug,
    Content,
    PublishedDate,
    PublishedAt,
    CoverImageId,
    AuthorId,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum PostTags {
    Table,
    PostId,
    TagId,
}
