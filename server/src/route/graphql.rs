use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::routing::get;
use axum::Router;

use crate::handler::AppModule;
use crate::response::UsageHint;

pub trait GraphQLRouter {
    fn route_graphql(self) -> Self;
}

impl GraphQLRouter for Router<AppModule> {
    fn route_graphql(self) -> Self {
        self.route(
            "/api/graphql",
            get(|| async { UsageHint::graphql() }).post(
                |State(module): State<AppModule>, req: GraphQLRequest| async move {
                    GraphQLResponse::from(module.schema().execute(req.into_inner()).await)
                },
            ),
        )
    }
}
