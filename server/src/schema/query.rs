use async_graphql::{Context, ErrorExtensions, Object, ID};

use application::service::{GetPublicationService, GetWriterService};
use driver::database::MongoDatabase;
use kernel::prelude::entity::AVAILABLE_CATEGORIES;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::request::{
    GetPublicationRequest, GetPublicationsByCategoryRequest, PublicationTransformer,
};
use crate::response::{
    CategoryPresenter, PublicationObject, PublicationPresenter, WriterObject, WriterPresenter,
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every publication with its writer resolved.
    async fn fetch_all_publications(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<PublicationObject>> {
        let database = ctx.data::<MongoDatabase>()?;
        Controller::new((), PublicationPresenter)
            .bypass(|| database.get_all_publications())
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }

    async fn retrieve_publication_info(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<PublicationObject>> {
        let database = ctx.data::<MongoDatabase>()?;
        Controller::new(PublicationTransformer, PublicationPresenter)
            .intake(GetPublicationRequest::new(id.0))
            .handle(|dto| database.get_publication(dto))
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }

    async fn find_publications_by_category(
        &self,
        ctx: &Context<'_>,
        category: String,
    ) -> async_graphql::Result<Vec<PublicationObject>> {
        let database = ctx.data::<MongoDatabase>()?;
        Controller::new(PublicationTransformer, PublicationPresenter)
            .intake(GetPublicationsByCategoryRequest::new(category))
            .handle(|dto| database.get_publications_by_category(dto))
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }

    async fn fetch_all_writers(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<WriterObject>> {
        let database = ctx.data::<MongoDatabase>()?;
        Controller::new((), WriterPresenter)
            .bypass(|| database.get_all_writers())
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }

    /// Categories currently used by at least one publication.
    async fn retrieve_all_categories(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<String>> {
        let database = ctx.data::<MongoDatabase>()?;
        Controller::new((), CategoryPresenter)
            .bypass(|| database.get_categories())
            .await
            .map_err(|report| ErrorStatus::from(report).extend())
    }

    /// Categories accepted by the publication forms.
    async fn available_categories(&self) -> Vec<String> {
        AVAILABLE_CATEGORIES.iter().map(ToString::to_string).collect()
    }
}
