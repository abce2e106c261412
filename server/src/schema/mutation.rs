use async_graphql::{Context, ErrorExtensions, Object, ID};

use application::service::{CreatePublicationService, UpdatePublicationService};
use driver::database::MongoDatabase;

use crate::controller::Controller;
use crate::error::{ErrorStatus, Rejected};
use crate::request::{CreatePublicationRequest, ModifyPublicationRequest, PublicationTransformer};
use crate::response::{PublicationObject, PublicationPresenter};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_publication(
        &self,
        ctx: &Context<'_>,
        book_title: String,
        writer_id: ID,
        category: String,
        release_year: i32,
        identifier: String,
    ) -> async_graphql::Result<PublicationObject> {
        let transformed = Controller::new(PublicationTransformer, PublicationPresenter)
            .try_intake(CreatePublicationRequest {
                book_title,
                writer_id: writer_id.0,
                category,
                release_year,
                identifier,
            })
            .map_err(|errors| Rejected::from(errors).extend())?;
        let database = ctx.data::<MongoDatabase>()?;
        transformed
            .handle(|dto| database.create_publication(dto))
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }

    async fn modify_publication(
        &self,
        ctx: &Context<'_>,
        id: ID,
        book_title: Option<String>,
        writer_id: Option<ID>,
        category: Option<String>,
        release_year: Option<i32>,
        identifier: Option<String>,
    ) -> async_graphql::Result<PublicationObject> {
        let transformed = Controller::new(PublicationTransformer, PublicationPresenter)
            .try_intake(ModifyPublicationRequest {
                id: id.0,
                book_title,
                writer_id: writer_id.map(|id| id.0),
                category,
                release_year,
                identifier,
            })
            .map_err(|errors| Rejected::from(errors).extend())?;
        let database = ctx.data::<MongoDatabase>()?;
        transformed
            .handle(|dto| database.update_publication(dto))
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }
}
